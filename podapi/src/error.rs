//! Error types for the PodScribe client

/// Result type alias for PodScribe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the PodScribe backend
///
/// Transport-level failures (`Http`, `Json`, `InvalidUrl`) mean the
/// request never produced a usable response. Application-level failures
/// (`Api`, `UnexpectedStatus`) mean the backend answered with a
/// non-success status, with or without an `error` payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Backend responded with an error message
    #[error("API error: {0}")]
    Api(String),

    /// Backend responded with a non-success status and no error payload
    #[error("API returned status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

impl Error {
    /// Create an API error from a message
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Whether this error is a transport failure (request never completed)
    /// rather than an application-level error reported by the backend.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_) | Self::InvalidUrl(_))
    }

    /// The backend's error message, if the backend supplied one
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        let err = Error::api("feed unreachable");
        assert!(!err.is_transport());
        assert_eq!(err.api_message(), Some("feed unreachable"));
    }

    #[test]
    fn test_transport_error_classification() {
        let err = Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(err.is_transport());
        assert_eq!(err.api_message(), None);
    }

    #[test]
    fn test_status_error_has_no_message() {
        let err = Error::UnexpectedStatus(reqwest::StatusCode::BAD_GATEWAY);
        assert!(!err.is_transport());
        assert_eq!(err.api_message(), None);
    }
}
