//! # lumen-config
//!
//! Layered configuration loading for LumenDose using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUMEN_*` prefix, `__` as separator)
//! 2. Project-level `.lumen/config.toml`
//! 3. User-level `~/.config/lumen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUMEN_COACH__API_KEY` -> `coach.api_key`,
//! `LUMEN_GENERAL__DAILY_GOAL_GRAMS` -> `general.daily_goal_grams`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lumen_config::LumenConfig;
//!
//! let config = LumenConfig::load_with_dotenv().expect("config");
//! if config.coach.is_configured() {
//!     println!("coach model: {}", config.coach.model);
//! }
//! ```

mod coach;
mod error;
mod general;

pub use coach::{CoachConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use error::ConfigError;
pub use general::{DEFAULT_JOURNAL_PATH, GeneralConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env var prefix for overrides.
pub const ENV_PREFIX: &str = "LUMEN_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub coach: CoachConfig,
}

impl LumenConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse and
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (CLI flags) on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::local_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumen").join("config.toml"))
    }

    /// Path to the project-local config file, relative to the working directory.
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".lumen").join("config.toml")
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.coach.validate()
    }
}
