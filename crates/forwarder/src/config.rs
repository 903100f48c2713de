use crate::request::CallTimeout;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Client Portal gateway address.
pub const DEFAULT_BASE_URL: &str = "https://localhost:5000/v1/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("upstream base_url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Per-call timeouts, in seconds, for each timeout class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub standard_secs: u64,
    /// History and multi-account queries.
    pub extended_secs: u64,
    /// Deep history and large account structures.
    pub long_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            standard_secs: 10,
            extended_secs: 20,
            long_secs: 30,
        }
    }
}

impl TimeoutConfig {
    pub fn duration(&self, class: CallTimeout) -> Duration {
        let secs = match class {
            CallTimeout::Standard => self.standard_secs,
            CallTimeout::Extended => self.extended_secs,
            CallTimeout::Long => self.long_secs,
        };
        Duration::from_secs(secs)
    }
}

/// Upstream connection settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwarderConfig {
    /// Every outbound call targets `{base_url}{path}`.
    pub base_url: String,
    /// Skip upstream TLS certificate validation. Off unless explicitly set.
    pub insecure_tls: bool,
    pub timeouts: TimeoutConfig,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            insecure_tls: false,
            timeouts: TimeoutConfig::default(),
        }
    }
}

impl ForwarderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        let timeouts = [
            ("standard", self.timeouts.standard_secs),
            ("extended", self.timeouts.extended_secs),
            ("long", self.timeouts.long_secs),
        ];
        for (name, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout(name));
            }
        }
        Ok(())
    }

    /// Join the base URL and an upstream path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate_and_verify_tls() {
        let config = ForwarderConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.insecure_tls);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = ForwarderConfig::new("localhost:5000");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = ForwarderConfig::default();
        config.timeouts.long_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout("long"))));
    }

    #[test]
    fn test_url_join_handles_trailing_slash() {
        let config = ForwarderConfig::new("https://localhost:5000/v1/api/");
        assert_eq!(
            config.url_for("/fa/groups"),
            "https://localhost:5000/v1/api/fa/groups"
        );
    }

    #[test]
    fn test_timeout_classes() {
        let timeouts = TimeoutConfig::default();
        assert_eq!(timeouts.duration(CallTimeout::Standard), Duration::from_secs(10));
        assert_eq!(timeouts.duration(CallTimeout::Extended), Duration::from_secs(20));
        assert_eq!(timeouts.duration(CallTimeout::Long), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_section_keeps_defaults() {
        let config: ForwarderConfig = serde_json::from_value(serde_json::json!({
            "base_url": "http://127.0.0.1:5000/v1/api",
            "timeouts": {"long_secs": 60}
        }))
        .unwrap();
        assert_eq!(config.timeouts.standard_secs, 10);
        assert_eq!(config.timeouts.long_secs, 60);
        assert!(!config.insecure_tls);
    }
}
