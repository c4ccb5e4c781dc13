use std::time::Duration;

use crate::error::FinsightError;

/// Base URL of the extraction service when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Path of the extraction endpoint, relative to the base URL.
pub const EXTRACT_ENDPOINT_PATH: &str = "/api/extract/";

/// Period shown in the results header when the user gave none.
pub const DEFAULT_PERIOD_END_DATE: &str = "2024-12-31";

/// Settings for talking to the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Off by default: a slow endpoint keeps the request pending.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, FinsightError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FinsightError::InvalidConfig(format!(
                "API URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(ClientConfig {
            base_url: base_url.to_string(),
            timeout: None,
        })
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Result<Self, FinsightError> {
        self.timeout = match secs {
            None => None,
            Some(0) => {
                return Err(FinsightError::InvalidConfig(
                    "timeout must be at least one second".into(),
                ))
            }
            Some(s) => Some(Duration::from_secs(s)),
        };
        Ok(self)
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, EXTRACT_ENDPOINT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            ClientConfig::default().endpoint_url(),
            "http://localhost:8001/api/extract/"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://extract.example.com/").unwrap();
        assert_eq!(
            config.endpoint_url(),
            "https://extract.example.com/api/extract/"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            ClientConfig::new("localhost:8001"),
            Err(FinsightError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_timeout() {
        let config = ClientConfig::default().with_timeout_secs(Some(30)).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(ClientConfig::default().with_timeout_secs(Some(0)).is_err());
        assert!(ClientConfig::default()
            .with_timeout_secs(None)
            .unwrap()
            .timeout
            .is_none());
    }
}
