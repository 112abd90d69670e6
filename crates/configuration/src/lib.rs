use crate::error::ConfigError;
use crate::settings::Config;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{ApiConfig, LogFormat, LoggingConfig, SessionConfig};

/// Prefix of the environment variables that override file values,
/// e.g. `SHOPDASH__API__BASE_URL`.
pub const ENV_PREFIX: &str = "SHOPDASH";

/// Loads the application configuration.
///
/// The toml file at `path` is optional. Values from `SHOPDASH__*` environment
/// variables are layered on top, and every missing section falls back to its
/// defaults. The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_layered(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

fn load_layered(path: &Path, environment: config::Environment) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Checks the invariants serde cannot express.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let url = url::Url::parse(&config.api.base_url).map_err(|e| {
        ConfigError::ValidationError(format!("api.base_url '{}': {}", config.api.base_url, e))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must be http or https, got '{}'",
            url.scheme()
        )));
    }
    if config.api.timeout.is_some_and(|t| t.is_zero()) {
        return Err(ConfigError::ValidationError(
            "api.timeout must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
