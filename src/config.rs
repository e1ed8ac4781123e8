//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, logging defaults, and default paths. `AppConfig` is the
//! root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs). The greeting body never changes for a given build, so it gets
// the long-cache-with-immutable-hint treatment. The health endpoint carries no
// cache header at all: liveness probes must always reach the process.

/// Greeting response - fixed content, long cache with immutable hint
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 3600;

// Pre-formatted Cache-Control header value (compile-time string concatenation)
pub const CACHE_CONTROL_GREETING: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_GREETING_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug";

/// Human-readable log output
pub const LOG_FORMAT_TEXT: &str = "text";

/// Structured JSON log output
pub const LOG_FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        LOG_FORMAT_TEXT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Validate: the log format must be one we know how to initialize
        match config.logging.format.as_str() {
            LOG_FORMAT_TEXT | LOG_FORMAT_JSON => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format \"{other}\". Expected \"{LOG_FORMAT_TEXT}\" or \"{LOG_FORMAT_JSON}\""
                )))
            }
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
