use thiserror::Error;

#[derive(Debug, Error)]
pub enum YaGptError {
    /// The HTTP exchange failed: connection, TLS, timeout or a non-2xx status.
    #[error("Error during HTTP request: {0}")]
    TransportError(String),
    /// Anything outside the transport: body construction, headers, response parsing.
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
    /// Bad environment or an HTTP client that could not be built. Never returned by a request.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl YaGptError {
    pub fn is_transport(&self) -> bool {
        matches!(self, YaGptError::TransportError(_))
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, YaGptError::UnexpectedError(_))
    }
}

impl From<reqwest::Error> for YaGptError {
    fn from(err: reqwest::Error) -> Self {
        YaGptError::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for YaGptError {
    fn from(err: serde_json::Error) -> Self {
        YaGptError::UnexpectedError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, YaGptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_cause() {
        let err = YaGptError::TransportError("HTTP status 503".into());
        assert_eq!(err.to_string(), "Error during HTTP request: HTTP status 503");
        assert!(err.is_transport());

        let err = YaGptError::UnexpectedError("expected value at line 1".into());
        assert_eq!(err.to_string(), "Unexpected error: expected value at line 1");
        assert!(err.is_unexpected());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_json_errors_are_unexpected() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: YaGptError = parse_err.into();
        assert!(err.is_unexpected());
    }
}
