use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the shop backend lives and how to talk to it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Origin of the shop REST API, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout for the HTTP transport. When unset, the transport's
    /// own defaults apply.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Credentials of the signed-in admin. Both fields are optional; the backend
/// decides whether it needs them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// The admin's email, as stored on login.
    pub identity: Option<String>,
    /// A bearer token, if the backend issues one.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

// --- Default Implementations ---
// These allow a user to omit whole sections from their toml.

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}
