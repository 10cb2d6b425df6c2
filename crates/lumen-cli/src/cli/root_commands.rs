use clap::{Args, Subcommand};

use crate::cli::subcommands::{GoalCommands, PresetCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compute grams of pure alcohol for a serving.
    Grams(GramsArgs),
    /// Log a drink to the journal.
    Log(LogArgs),
    /// List logged drinks, newest first.
    List(ListArgs),
    /// Remove a logged drink by id.
    Remove(RemoveArgs),
    /// Estimate per-region impact of logged drinks.
    Analyze(AnalyzeArgs),
    /// Daily total against the goal, with a shareable message.
    Summary(SummaryArgs),
    /// Drinks per week over the last eight weeks with data.
    Trends,
    /// Quick-add servings: market presets and your own.
    Presets {
        #[command(subcommand)]
        action: Option<PresetCommands>,
    },
    /// Set, show, or clear the daily goal.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Ask the AI coach about today's session.
    Coach,
}

#[derive(Clone, Debug, Args)]
pub struct GramsArgs {
    /// Serving volume in millilitres
    #[arg(long, allow_negative_numbers = true)]
    pub volume: f64,
    /// Alcohol by volume, in percent
    #[arg(long, allow_negative_numbers = true)]
    pub abv: f64,
}

#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// Drink kind (beer, wine, spirit, liqueur, sake, soju, cider, cocktail, custom)
    #[arg(long, required_unless_present = "preset")]
    pub kind: Option<String>,
    /// Volume in millilitres; defaults to the preset's
    #[arg(long, allow_negative_numbers = true, required_unless_present = "preset")]
    pub volume: Option<f64>,
    /// ABV in percent; defaults to the preset's
    #[arg(long, allow_negative_numbers = true, required_unless_present = "preset")]
    pub abv: Option<f64>,
    /// Custom quick-add label or id, or a kind for the market's standard serving
    #[arg(long, conflicts_with = "kind")]
    pub preset: Option<String>,
    /// When the drink was had (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only today's drinks (UTC)
    #[arg(long)]
    pub today: bool,
    /// Max entries to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct RemoveArgs {
    /// Drink id (e.g. drk-a3f8b2c1)
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Only today's drinks (UTC)
    #[arg(long)]
    pub today: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SummaryArgs {
    /// Daily goal in grams; overrides `general.daily_goal_grams`
    #[arg(long)]
    pub goal: Option<f64>,
    /// Day to summarize (YYYY-MM-DD, UTC); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}
