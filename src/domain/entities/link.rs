//! Link entity representing a short code to URL mapping.

use chrono::{DateTime, Duration, Utc};

/// A stored mapping between a short code and the original URL.
///
/// Links are never modified after creation. `expires_at` is only set when the
/// owning store was configured with a time-to-live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a link stamped with the current time.
    ///
    /// When `ttl` is `Some`, the link expires `ttl` after creation.
    pub fn new(code: String, long_url: String, ttl: Option<Duration>) -> Self {
        let created_at = Utc::now();

        Self {
            code,
            long_url,
            created_at,
            expires_at: ttl.map(|ttl| created_at + ttl),
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the link is expired at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }
}
