use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, Source};
use serde::Deserialize;

use crate::error::CoreResult;

/// Default status for categories missing from the status table.
pub const DEFAULT_FALLBACK_STATUS: u16 = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// ## Summary
/// Boundary translation settings.
///
/// `status_overrides` is applied on top of the standard table, so a service
/// only lists the categories it changes.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub fallback_status: u16,
    #[serde(default)]
    pub status_overrides: Vec<StatusOverride>,
}

/// Maps one category label to a status code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusOverride {
    pub category: String,
    pub status: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            fallback_status: DEFAULT_FALLBACK_STATUS,
            status_overrides: Vec::new(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and `CONTRACTS_`
    /// environment variables. Environment variables take precedence.
    ///
    /// Nested keys use a double underscore, e.g. `CONTRACTS_HTTP__FALLBACK_STATUS`.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`](crate::error::CoreError::ConfigError)
    /// if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::load_from(layered(
            config::File::with_name("config.toml").required(false),
            environment(),
        ))
    }

    /// ## Summary
    /// Applies defaults to `builder` and deserializes the result.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`](crate::error::CoreError::ConfigError)
    /// if building the configuration or deserializing it fails.
    pub fn load_from(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        Ok(builder
            .set_default("logging.level", "info")?
            .set_default("http.fallback_status", i64::from(DEFAULT_FALLBACK_STATUS))?
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// The `CONTRACTS_` environment source.
fn environment() -> Environment {
    Environment::with_prefix("CONTRACTS")
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// File source first, environment second, so the environment wins.
fn layered<F>(file: F, env: Environment) -> ConfigBuilder<DefaultState>
where
    F: Source + Send + Sync + 'static,
{
    Config::builder().add_source(file).add_source(env)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Ok(Settings::load()?)
}
