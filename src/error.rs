//! Unified SDK error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::candlestick::CandlestickError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Candlestick error: {0}")]
    Candlestick(#[from] CandlestickError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The response body was not the JSON shape the endpoint documents.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl HttpError {
    /// Map a non-success status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            HttpError::from_status(401, String::new()),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            HttpError::from_status(404, "missing".into()),
            HttpError::NotFound(body) if body == "missing"
        ));
        assert!(matches!(
            HttpError::from_status(429, String::new()),
            HttpError::RateLimited
        ));
        assert!(matches!(
            HttpError::from_status(422, "bad".into()),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            HttpError::from_status(503, "down".into()),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_sdk_error_wraps_http() {
        let err: SdkError = HttpError::Unauthorized.into();
        assert_eq!(err.to_string(), "HTTP error: Unauthorized");
    }
}
