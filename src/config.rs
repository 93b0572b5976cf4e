//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for HTTP cache headers, logging and default paths. `AppConfig` is
//! the root configuration struct; every field has a default so the service
//! runs without any file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Values are in seconds. Health and hit counts must always reach the process,
// so only the welcome page is cacheable.

/// Welcome page - constant content
pub const HTTP_CACHE_WELCOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_WELCOME_SWR: u32 = 30;

pub const CACHE_CONTROL_WELCOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_WELCOME_MAX_AGE,
    HTTP_CACHE_WELCOME_SWR
);

/// Liveness probes and counters
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Default bind address (all interfaces, reachable from outside a container)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to wait for in-flight connections on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default greeting returned by `GET /`
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the Docker Demo";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "dockdemo=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections on SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Greeting returned by the welcome endpoint
    #[serde(default = "UiConfig::default_welcome_message")]
    pub welcome_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            welcome_message: Self::default_welcome_message(),
        }
    }
}

impl UiConfig {
    fn default_welcome_message() -> String {
        DEFAULT_WELCOME_MESSAGE.to_string()
    }
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
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a command-line port override and re-validate the result.
    pub fn with_port_override(mut self, port: Option<u16>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("http.port must be non-zero".to_string()));
        }

        if self.ui.welcome_message.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui.welcome_message must not be empty".to_string(),
            ));
        }

        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
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
