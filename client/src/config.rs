use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the bearer credential. The token is never
/// stored in source; it must come from the environment or a CLI override.
pub const TOKEN_ENV: &str = "MAPPING_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "MAPPING_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing, default)]
    pub token: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads base URL and token from the environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.token = token;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.token.is_empty() {
            return Err(format!(
                "Bearer token is empty; set {} or pass one explicitly",
                TOKEN_ENV
            ));
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, so paths can be appended
    /// with a single joining slash.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::new()
            .with_base_url("https://api.example.com/api/v1")
            .with_token("secret")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url, "https://api.example.com/api/v1");
        assert_eq!(config.token, "secret");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ApiConfig::default().with_token("secret");
        assert!(config.validate().is_ok());

        config.base_url = "".to_string();
        assert!(config.validate().is_err());

        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:3000/api/v1".to_string();
        config.token = "".to_string();
        assert!(config.validate().is_err());

        config.token = "secret".to_string();
        config.timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_trimmed_base_url() {
        let config = ApiConfig::default().with_base_url("http://localhost:3000/api/v1/");
        assert_eq!(config.trimmed_base_url(), "http://localhost:3000/api/v1");

        let config = ApiConfig::default().with_base_url("http://localhost:3000/api/v1");
        assert_eq!(config.trimmed_base_url(), "http://localhost:3000/api/v1");
    }

    #[test]
    fn test_token_not_serialized() {
        let config = ApiConfig::default().with_token("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
