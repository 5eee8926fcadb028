//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use tracing::{error, info, warn};

/// Message returned for every failed resolution.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Attempts at finding an unused code before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Owns no state besides the injected store, so handlers and tests can build
/// it over any [`UrlStore`].
pub struct LinkService {
    store: Arc<dyn UrlStore>,
}

impl LinkService {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn UrlStore> {
        &self.store
    }

    /// Creates a short link for an already validated URL and returns its code.
    ///
    /// # Code Generation
    ///
    /// Generates a random 8-character code and checks it against the store,
    /// retrying up to 10 times on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if:
    /// - The store fails during the collision check or the write
    /// - Every attempt collided with an existing code
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        let code = self.generate_unique_code().await?;

        self.store.store_url(&code, long_url).await.map_err(|e| {
            error!(
                "Failed to store mapping {} in {} store: {}",
                code,
                self.store.backend_name(),
                e
            );
            AppError::internal("Failed to store short URL")
        })?;

        info!("Created short code {} -> {}", code, long_url);

        Ok(code)
    }

    /// Resolves a short code to its original URL.
    ///
    /// Backend failures are logged and reported exactly like a missing code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown, expired, or the
    /// store could not be read.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.store.get_url(code).await {
            Ok(Some(long_url)) => Ok(long_url),
            Ok(None) => Err(AppError::not_found(NOT_FOUND_MESSAGE)),
            Err(e) => {
                error!(
                    "Failed to resolve {} from {} store: {}",
                    code,
                    self.store.backend_name(),
                    e
                );
                Err(AppError::not_found(NOT_FOUND_MESSAGE))
            }
        }
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Generates a code that is not yet present in the store.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.store.get_url(&code).await?.is_none() {
                return Ok(code);
            }

            warn!("Short code collision on {}, retrying", code);
        }

        Err(AppError::internal(
            "Failed to generate unique code: too many collisions",
        ))
    }
}
