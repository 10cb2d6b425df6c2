//! Daily totals against an optional goal.

use chrono::NaiveDate;
use lumen_core::entities::DrinkEntry;
use lumen_i18n::{Localizer, MessageKey};
use schemars::JsonSchema;
use serde::Serialize;

/// One UTC day of logged drinks, measured against the user's goal.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DailySummary {
    pub day: NaiveDate,
    pub drink_count: usize,
    pub total_grams: f64,
    /// Daily goal in grams. `None` when unset or not positive.
    pub goal_grams: Option<f64>,
    /// Grams left before the goal, floored at zero.
    pub remaining_grams: Option<f64>,
    /// Fraction of the goal consumed, capped at 1.
    pub progress: Option<f64>,
    pub exceeded: bool,
}

impl DailySummary {
    /// Summarize the entries of `drinks` whose UTC date is `day`.
    #[must_use]
    pub fn for_day(drinks: &[DrinkEntry], day: NaiveDate, goal_grams: Option<f64>) -> Self {
        let todays = drinks
            .iter()
            .filter(|d| d.timestamp.date_naive() == day);
        let (drink_count, total_grams) =
            todays.fold((0_usize, 0.0_f64), |(count, grams), d| (count + 1, grams + d.alcohol_grams));

        let goal_grams = goal_grams.filter(|g| g.is_finite() && *g > 0.0);
        let exceeded = goal_grams.is_some_and(|goal| total_grams > goal);

        Self {
            day,
            drink_count,
            total_grams,
            goal_grams,
            remaining_grams: goal_grams.map(|goal| (goal - total_grams).max(0.0)),
            progress: goal_grams.map(|goal| (total_grams / goal).min(1.0)),
            exceeded,
        }
    }

    /// Localized status line: "Goal Exceeded!", "12.3g remaining", or
    /// "No daily goal set."
    pub fn goal_status(&self, localizer: &impl Localizer) -> String {
        match self.remaining_grams {
            None => localizer.text(MessageKey::GoalNotSet, &[]),
            Some(_) if self.exceeded => localizer.text(MessageKey::GoalExceeded, &[]),
            Some(remaining) => format!(
                "{remaining:.1}g {}",
                localizer.text(MessageKey::GoalRemaining, &[])
            ),
        }
    }

    /// Localized text for sharing the day's total.
    pub fn share_message(&self, localizer: &impl Localizer) -> String {
        let grams = format!("{:.1}", self.total_grams);
        match self.goal_grams {
            Some(goal) => {
                let goal = format!("{goal:.1}");
                let key = if self.exceeded {
                    MessageKey::ShareMessageOverGoal
                } else {
                    MessageKey::ShareMessageGoal
                };
                localizer.text(key, &[&grams, &goal])
            }
            None => localizer.text(MessageKey::ShareMessageNoGoal, &[&grams]),
        }
    }
}
