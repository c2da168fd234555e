use crate::error::{Result, YaGptError};
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://llm.api.cloud.yandex.net/llm/v1alpha/instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 2500;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Folder id and IAM token the requests are issued under, plus the endpoint.
#[derive(Clone)]
pub struct ClientConfig {
    pub folder_id: String,
    pub iam_token: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("folder_id", &self.folder_id)
            .field("iam_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(folder_id: impl Into<String>, iam_token: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            iam_token: iam_token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Reads `YANDEX_FOLDER_ID` and `YANDEX_IAM_TOKEN`, and the optional
    /// `YAGPT_ENDPOINT` / `YAGPT_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self> {
        let folder_id = env::var("YANDEX_FOLDER_ID")
            .map_err(|_| YaGptError::ConfigError("YANDEX_FOLDER_ID is required".into()))?;
        let iam_token = env::var("YANDEX_IAM_TOKEN")
            .map_err(|_| YaGptError::ConfigError("YANDEX_IAM_TOKEN is required".into()))?;

        let mut config = Self::new(folder_id, iam_token);

        if let Ok(endpoint) = env::var("YAGPT_ENDPOINT") {
            config = config.with_endpoint(endpoint);
        }

        if let Ok(raw) = env::var("YAGPT_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                YaGptError::ConfigError(format!("YAGPT_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_fixed_endpoint() {
        let config = ClientConfig::new("f1", "t1");
        assert_eq!(config.folder_id, "f1");
        assert_eq!(config.iam_token, "t1");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("f1", "t1")
            .with_endpoint("http://localhost:8080/instruct")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://localhost:8080/instruct");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", ClientConfig::new("f1", "super-secret"));
        assert!(rendered.contains("f1"));
        assert!(!rendered.contains("super-secret"));
    }
}
