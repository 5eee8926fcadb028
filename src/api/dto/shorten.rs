//! DTOs for link shortening endpoint.

use crate::utils::url_validator::{UrlValidationError, validate_long_url};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Request to shorten a single URL.
///
/// A missing or null `long_url` deserializes to an empty string so it is
/// reported as "long_url is required" rather than a JSON error.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "check_long_url"))]
    pub long_url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub long_url: String,
    pub short_code: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn check_long_url(long_url: &str) -> Result<(), ValidationError> {
    validate_long_url(long_url).map_err(|e| {
        let code = match e {
            UrlValidationError::Missing => "required",
            UrlValidationError::InvalidFormat => "url",
        };
        ValidationError::new(code).with_message(e.to_string().into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_message(req: &ShortenRequest) -> Option<String> {
        req.validate().err().and_then(|errors| {
            errors
                .field_errors()
                .get("long_url")
                .and_then(|errs| errs.first())
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
        })
    }

    #[test]
    fn test_missing_field_deserializes_to_empty() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.long_url, "");
        assert_eq!(first_message(&req).as_deref(), Some("long_url is required"));
    }

    #[test]
    fn test_null_field_deserializes_to_empty() {
        let req: ShortenRequest = serde_json::from_str(r#"{"long_url":null}"#).unwrap();
        assert_eq!(req.long_url, "");
        assert_eq!(first_message(&req).as_deref(), Some("long_url is required"));
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        assert!(serde_json::from_str::<ShortenRequest>(r#"{"long_url":42}"#).is_err());
    }

    #[test]
    fn test_invalid_url_message() {
        let req: ShortenRequest = serde_json::from_str(r#"{"long_url":"not-a-url"}"#).unwrap();
        assert_eq!(first_message(&req).as_deref(), Some("Invalid URL format"));
    }

    #[test]
    fn test_valid_url_passes() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"long_url":"https://example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"long_url":"https://example.com","extra":1}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_serialization() {
        let response = ShortenResponse {
            short_url: "http://localhost:8080/abcd1234".to_string(),
            long_url: "https://example.com".to_string(),
            short_code: "abcd1234".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["short_url"], "http://localhost:8080/abcd1234");
        assert_eq!(json["long_url"], "https://example.com");
        assert_eq!(json["short_code"], "abcd1234");
    }
}
