//! Configuration for the gateway

use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// HTTP listen address
    pub bind_addr: String,

    /// Logging configuration
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "settlement-gateway".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(addr) = std::env::var("GATEWAY_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Ok(level) = std::env::var("GATEWAY_LOG_LEVEL") {
            config.log.level = level;
        }

        if let Ok(json) = std::env::var("GATEWAY_LOG_JSON") {
            config.log.json = json.parse().map_err(|_| {
                GatewayError::Config(format!("GATEWAY_LOG_JSON must be true or false, got {}", json))
            })?;
        }

        Ok(config)
    }
}
