//! Client and logging configuration

use crate::error::{GoolabsError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://labs.goo.ne.jp/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const APP_ID_VAR: &str = "GOOLABS_APP_ID";
pub const BASE_URL_VAR: &str = "GOOLABS_BASE_URL";
pub const TIMEOUT_VAR: &str = "GOOLABS_TIMEOUT_SECS";
pub const ENABLE_LOGGING_VAR: &str = "GOOLABS_ENABLE_LOGGING";
pub const LOG_LEVEL_VAR: &str = "GOOLABS_LOG_LEVEL";

/// Settings of the outbound API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// ID of the registered application, sent with every request
    pub app_id: String,

    /// Endpoint names are appended to this address
    pub base_url: String,

    /// Applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        let app_id = std::env::var(APP_ID_VAR)
            .ok()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GoolabsError::Config(format!("{APP_ID_VAR} is not set")))?;

        let mut config = Self::new(app_id);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GoolabsError::Config(format!("{TIMEOUT_VAR}={raw:?} is not a number of seconds"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Full address of one endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

/// Logging switches read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(raw) = std::env::var(ENABLE_LOGGING_VAR) {
            config.enabled = matches!(raw.to_lowercase().as_str(), "true" | "1");
        }
        if let Ok(level) = std::env::var(LOG_LEVEL_VAR) {
            config.level = level.to_lowercase();
        }
        config
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [APP_ID_VAR, BASE_URL_VAR, TIMEOUT_VAR, ENABLE_LOGGING_VAR, LOG_LEVEL_VAR] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("app");
        assert_eq!(config.base_url, "https://labs.goo.ne.jp/api/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint_url("chrono"), "https://labs.goo.ne.jp/api/chrono");
    }

    #[test]
    fn test_endpoint_url_without_trailing_slash() {
        let mut config = ClientConfig::new("app");
        config.base_url = "http://localhost:8080/api".to_string();
        assert_eq!(config.endpoint_url("morph"), "http://localhost:8080/api/morph");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_app_id() {
        clear_env();
        assert!(matches!(ClientConfig::from_env(), Err(GoolabsError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        std::env::set_var(APP_ID_VAR, "abc");
        std::env::set_var(BASE_URL_VAR, "http://localhost/");
        std::env::set_var(TIMEOUT_VAR, "5");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.app_id, "abc");
        assert_eq!(config.base_url, "http://localhost/");
        assert_eq!(config.timeout, Duration::from_secs(5));

        std::env::set_var(TIMEOUT_VAR, "soon");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_logging_config_from_env() {
        clear_env();
        assert_eq!(LoggingConfig::from_env(), LoggingConfig::new());

        std::env::set_var(ENABLE_LOGGING_VAR, "TRUE");
        std::env::set_var(LOG_LEVEL_VAR, "DEBUG");
        let config = LoggingConfig::from_env();
        assert!(config.enabled);
        assert_eq!(config.level, "debug");

        std::env::set_var(ENABLE_LOGGING_VAR, "yes");
        assert!(!LoggingConfig::from_env().enabled);
        clear_env();
    }
}
