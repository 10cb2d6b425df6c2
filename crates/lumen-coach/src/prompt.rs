//! Coaching prompt assembly.

use std::fmt::Write as _;

use lumen_core::entities::{BrainRegion, DrinkEntry, ImpactAnalysis};
use lumen_i18n::{Localizer, MessageKey};
use lumen_impact::SessionStats;

/// Fewest drinks that produce a prompt.
pub const MIN_DRINKS: usize = 2;

/// A prompt ready to send, with the session figures it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachPrompt {
    pub text: String,
    pub stats: SessionStats,
}

impl CoachPrompt {
    /// Build the prompt for `drinks`, or `None` with fewer than
    /// [`MIN_DRINKS`] entries or an analysis without regions.
    ///
    /// `goal_grams` adds goal context only when positive.
    pub fn build(
        drinks: &[DrinkEntry],
        analysis: &ImpactAnalysis,
        goal_grams: Option<f64>,
        localizer: &impl Localizer,
    ) -> Option<Self> {
        if drinks.len() < MIN_DRINKS {
            return None;
        }
        let highest = analysis.highest()?;
        let region = BrainRegion::get(highest.region);
        let stats = SessionStats::from_drinks(drinks);

        let session_summary = drinks
            .iter()
            .map(|d| format!("{}ml of {} at {}% ABV", d.volume_ml, d.kind, d.abv_percent))
            .collect::<Vec<_>>()
            .join(", ");
        let total_grams = format!("{:.1}", stats.total_grams);

        let mut pacing = format!(
            "The user has had {} drinks over {:.0} minutes.",
            stats.drink_count, stats.duration_minutes
        );
        pacing.push_str(if stats.rapid_pace {
            " This is a rapid pace."
        } else {
            " This is a moderate pace."
        });
        let composition = format!(
            "The session includes {} high-ABV drink(s).",
            stats.high_abv_count
        );
        let goal = goal_context(stats.total_grams, goal_grams);
        let region_name = localizer.text(MessageKey::region(region.id), &[]);

        let mut text = String::new();
        let _ = writeln!(
            text,
            "As an expert on the science of alcohol's effects, you are an AI Coach for the app LumenDose."
        );
        let _ = writeln!(text, "A user has logged the following drinks: {session_summary}.");
        let _ = writeln!(text, "This amounts to {total_grams}g of alcohol.");
        let _ = writeln!(text, "Session context: {pacing} {composition}");
        let _ = writeln!(
            text,
            "The current analysis shows the highest impact is on the {region_name}, which affects {}",
            region.functions
        );
        if let Some(goal) = goal {
            let _ = writeln!(text, "{goal}");
        }
        text.push_str(INSTRUCTIONS);

        Some(Self { text, stats })
    }
}

fn goal_context(total_grams: f64, goal_grams: Option<f64>) -> Option<String> {
    let goal = goal_grams.filter(|g| *g > 0.0)?;
    // Compare against the one-decimal figure shown in the prompt.
    let current = (total_grams * 10.0).round() / 10.0;
    Some(if current > goal {
        format!(
            "They have exceeded their daily goal of {goal}g by {:.1}g.",
            current - goal
        )
    } else {
        format!("They are currently at {current}g towards their daily goal of {goal}g.")
    })
}

const INSTRUCTIONS: &str = "
Based on all this context, provide a single, concise, actionable, and non-judgmental insight (around 20-30 words).
Focus on a specific, helpful suggestion related to their current drinking pattern (pacing, composition, hydration, etc., and goal adherence if applicable).
Do not use generic phrases like \"drink responsibly\". Be specific and encouraging.
Example for rapid pace: \"We've noticed a rapid pace. A 30-minute break before your next drink can help lessen the overall impact.\"
Example for high-ABV drinks: \"This session is focused on high-ABV drinks. Considering a lower-ABV option next could moderate the effects on your coordination.\"
Example for goal exceeded: \"You've passed your daily goal. Consider switching to water or stopping for the night to support your health.\"
";
