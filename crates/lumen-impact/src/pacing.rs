//! Session pacing and composition, as fed to the coach.

use lumen_core::entities::DrinkEntry;
use schemars::JsonSchema;
use serde::Serialize;

/// Drinks per hour above which a session counts as rapid.
pub const RAPID_DRINKS_PER_HOUR: f64 = 2.0;

/// ABV at or above which a drink counts as high-ABV.
pub const HIGH_ABV_PERCENT: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SessionStats {
    pub drink_count: usize,
    pub total_grams: f64,
    /// Minutes between the earliest and latest entry.
    pub duration_minutes: f64,
    /// Falls back to the drink count when the session has no duration.
    pub drinks_per_hour: f64,
    pub rapid_pace: bool,
    pub high_abv_count: usize,
}

impl SessionStats {
    #[must_use]
    pub fn from_drinks(drinks: &[DrinkEntry]) -> Self {
        let drink_count = drinks.len();
        let total_grams = drinks.iter().map(|d| d.alcohol_grams).sum();

        let first = drinks.iter().map(|d| d.timestamp).min();
        let last = drinks.iter().map(|d| d.timestamp).max();
        #[allow(clippy::cast_precision_loss)]
        let duration_minutes = match (first, last) {
            (Some(first), Some(last)) => (last - first).num_seconds() as f64 / 60.0,
            _ => 0.0,
        };

        #[allow(clippy::cast_precision_loss)]
        let drinks_per_hour = if drink_count > 1 && duration_minutes > 0.0 {
            drink_count as f64 / (duration_minutes / 60.0)
        } else {
            drink_count as f64
        };

        Self {
            drink_count,
            total_grams,
            duration_minutes,
            drinks_per_hour,
            rapid_pace: drinks_per_hour > RAPID_DRINKS_PER_HOUR,
            high_abv_count: drinks
                .iter()
                .filter(|d| d.abv_percent >= HIGH_ABV_PERCENT)
                .count(),
        }
    }
}
