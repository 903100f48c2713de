use anyhow::Context;
use clap::Args;
use ibgate_api::ErrorStatusMode;
use ibgate_forwarder::{ConfigError, ForwarderConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Effective gateway configuration: defaults, then the TOML file, then
/// command-line flags and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub bind: String,
    pub error_status: ErrorStatusMode,
    pub upstream: ForwarderConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            error_status: ErrorStatusMode::default(),
            upstream: ForwarderConfig::default(),
        }
    }
}

/// Flags shared by `serve` and `config`.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Bind address
    #[arg(short, long, env = "IBGATE_BIND")]
    pub bind: Option<String>,

    /// Upstream base URL (e.g. https://localhost:5000/v1/api)
    #[arg(long, env = "IBGATE_BASE_URL")]
    pub base_url: Option<String>,

    /// Skip upstream TLS certificate validation
    #[arg(long, env = "IBGATE_INSECURE_TLS")]
    pub insecure_tls: bool,

    /// Status code policy for error envelopes (compat, mapped)
    #[arg(long, env = "IBGATE_ERROR_STATUS")]
    pub error_status: Option<ErrorStatusMode>,
}

impl GatewayConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration file")
    }

    /// Read the file at `path`, or start from defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(bind) = &overrides.bind {
            self.bind = bind.clone();
        }
        if let Some(base_url) = &overrides.base_url {
            self.upstream.base_url = base_url.clone();
        }
        if overrides.insecure_tls {
            self.upstream.insecure_tls = true;
        }
        if let Some(mode) = overrides.error_status {
            self.error_status = mode;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upstream.validate()
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("failed to render configuration")
    }
}
