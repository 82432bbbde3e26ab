//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `ONTIME` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ontime_interview::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod database;
mod error;
mod interview;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use interview::{InterviewConfig, StoreBackend};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Interview runtime configuration (settings id, record storage)
    #[serde(default)]
    pub interview: InterviewConfig,

    /// Summarizer configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Database configuration; absent means no Postgres anywhere
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads environment variables with the
    /// `ONTIME` prefix, using `__` to separate nested values:
    ///
    /// - `ONTIME__INTERVIEW__SETTINGS_ID=2` -> `interview.settings_id = 2`
    /// - `ONTIME__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("ONTIME").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.interview.validate()?;
        self.ai.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        if self.interview.store == StoreBackend::Postgres && self.database.is_none() {
            return Err(ValidationError::PostgresStoreWithoutDatabase);
        }
        Ok(())
    }
}
