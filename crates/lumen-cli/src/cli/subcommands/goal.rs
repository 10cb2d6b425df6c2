use clap::Subcommand;

/// Daily goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Show the goal in effect and where it comes from.
    Show,
    /// Store a daily goal in grams (must be positive).
    Set {
        #[arg(allow_negative_numbers = true)]
        grams: f64,
    },
    /// Remove the stored goal.
    Clear,
}
