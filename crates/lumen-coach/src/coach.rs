use lumen_config::CoachConfig;
use lumen_core::entities::{DrinkEntry, ImpactAnalysis};
use lumen_i18n::{Localizer, MessageKey};
use serde::Serialize;

use crate::error::CoachError;
use crate::gemini::GeminiClient;
use crate::prompt::CoachPrompt;

/// Outcome of asking the coach about a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Insight {
    /// No API key configured. Carries the localized notice.
    Disabled(String),
    /// Fewer than two drinks logged.
    NotEnoughDrinks,
    /// Text returned by the model.
    Text(String),
    /// The request failed. Carries the localized fallback.
    Unavailable(String),
}

impl Insight {
    /// Display text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Disabled(m) | Self::Text(m) | Self::Unavailable(m) => Some(m),
            Self::NotEnoughDrinks => None,
        }
    }
}

/// Generates insights, degrading to localized fallbacks instead of failing.
#[derive(Debug, Clone)]
pub struct Coach {
    client: Option<GeminiClient>,
}

impl Coach {
    /// A coach for `config`. Without an API key every insight is
    /// [`Insight::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &CoachConfig) -> Result<Self, CoachError> {
        let client = match GeminiClient::new(config) {
            Ok(client) => Some(client),
            Err(CoachError::NotConfigured) => None,
            Err(e) => return Err(e),
        };
        Ok(Self { client })
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn insight(
        &self,
        drinks: &[DrinkEntry],
        analysis: &ImpactAnalysis,
        goal_grams: Option<f64>,
        localizer: &impl Localizer,
    ) -> Insight {
        let Some(client) = &self.client else {
            return Insight::Disabled(localizer.text(MessageKey::AiCoachNoKey, &[]));
        };
        let Some(prompt) = CoachPrompt::build(drinks, analysis, goal_grams, localizer) else {
            return Insight::NotEnoughDrinks;
        };

        match client.generate(&prompt.text).await {
            Ok(text) => Insight::Text(text),
            Err(e) => {
                tracing::warn!(error = %e, model = client.model(), "coach insight failed");
                let key = if e.is_connection() {
                    MessageKey::AiCoachConnectionError
                } else {
                    MessageKey::AiCoachUnavailable
                };
                Insight::Unavailable(localizer.text(key, &[]))
            }
        }
    }
}
