//! General application configuration.

use std::path::{Path, PathBuf};

use lumen_core::enums::{InputPolicy, Market};
use lumen_i18n::Locale;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default journal location, relative to the working directory.
pub const DEFAULT_JOURNAL_PATH: &str = ".lumen/drinks.jsonl";

fn default_locale() -> String {
    Locale::default().tag().to_string()
}

fn default_journal_path() -> PathBuf {
    PathBuf::from(DEFAULT_JOURNAL_PATH)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display language tag (`en`, `de`, `fr-CA`, `es`, `ja`).
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Market whose serving sizes the presets use.
    #[serde(default)]
    pub market: Market,

    /// Daily alcohol goal in grams. Unset means no goal.
    #[serde(default)]
    pub daily_goal_grams: Option<f64>,

    /// Handling of negative or out-of-range drink input.
    #[serde(default)]
    pub input_policy: InputPolicy,

    /// JSONL file holding the drink journal.
    #[serde(default = "default_journal_path")]
    pub journal_path: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            market: Market::default(),
            daily_goal_grams: None,
            input_policy: InputPolicy::default(),
            journal_path: default_journal_path(),
        }
    }
}

impl GeneralConfig {
    /// Parsed display locale.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported tag.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        self.locale
            .parse()
            .map_err(|e: lumen_i18n::UnknownLocale| ConfigError::InvalidValue {
                field: "general.locale".into(),
                reason: e.to_string(),
            })
    }

    /// The daily goal, if one is set and positive.
    #[must_use]
    pub fn daily_goal(&self) -> Option<f64> {
        self.daily_goal_grams.filter(|g| *g > 0.0)
    }

    /// Directory holding the journal; quick-adds and the stored goal live
    /// beside it.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.journal_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// JSONL file holding custom quick-adds.
    #[must_use]
    pub fn quick_adds_path(&self) -> PathBuf {
        self.data_dir().join("quick_adds.jsonl")
    }

    /// JSON file holding the goal set with `lumen goal set`.
    #[must_use]
    pub fn goal_path(&self) -> PathBuf {
        self.data_dir().join("goal.json")
    }

    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported locale or a
    /// negative or non-finite goal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locale()?;
        if let Some(goal) = self.daily_goal_grams {
            if !goal.is_finite() || goal < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "general.daily_goal_grams".into(),
                    reason: format!("{goal} is not a non-negative number of grams"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.market, Market::Uk);
        assert_eq!(config.daily_goal_grams, None);
        assert_eq!(config.input_policy, InputPolicy::Reject);
        assert_eq!(config.journal_path, PathBuf::from(".lumen/drinks.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn user_data_lives_beside_the_journal() {
        let config = GeneralConfig {
            journal_path: PathBuf::from("/data/lumen/drinks.jsonl"),
            ..Default::default()
        };
        assert_eq!(config.quick_adds_path(), PathBuf::from("/data/lumen/quick_adds.jsonl"));
        assert_eq!(config.goal_path(), PathBuf::from("/data/lumen/goal.json"));
    }

    #[test]
    fn bare_journal_name_keeps_data_in_working_dir() {
        let config = GeneralConfig {
            journal_path: PathBuf::from("drinks.jsonl"),
            ..Default::default()
        };
        assert_eq!(config.goal_path(), PathBuf::from("goal.json"));
    }

    #[test]
    fn zero_goal_is_valid_but_not_a_goal() {
        let config = GeneralConfig {
            daily_goal_grams: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.daily_goal(), None);
    }

    #[test]
    fn negative_goal_is_rejected() {
        let config = GeneralConfig {
            daily_goal_grams: Some(-10.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.daily_goal_grams"));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let config = GeneralConfig {
            locale: "pt-BR".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.locale"
        ));
    }

    #[test]
    fn locale_tag_parses_leniently() {
        let config = GeneralConfig {
            locale: "fr_ca".into(),
            ..Default::default()
        };
        assert_eq!(config.locale().unwrap(), Locale::FrCa);
    }
}
