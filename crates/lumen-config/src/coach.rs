//! AI coach (Gemini) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Generative Language API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for coaching insights.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoachConfig {
    /// Gemini API key. The coach is disabled while this is empty.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CoachConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Error out unless [`Self::is_configured`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the API key is missing.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "coach".into(),
            })
        }
    }

    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty model, an endpoint
    /// that is not http(s), or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(invalid("coach.model", "must not be empty"));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(invalid("coach.endpoint", "must be an http(s) URL"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("coach.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = CoachConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
        assert!(matches!(
            config.require(),
            Err(ConfigError::NotConfigured { section }) if section == "coach"
        ));
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = CoachConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn configured_when_key_set() {
        let config = CoachConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(config.require().is_ok());
    }

    #[test]
    fn rejects_bad_endpoint_and_timeout() {
        let config = CoachConfig {
            endpoint: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CoachConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
