use clap::Subcommand;

/// Custom quick-add commands. Without one, `lumen presets` lists market
/// presets and custom quick-adds.
#[derive(Clone, Debug, Subcommand)]
pub enum PresetCommands {
    /// Save a custom quick-add.
    Add {
        #[arg(long)]
        label: String,
        /// Drink kind (beer, wine, spirit, ...)
        #[arg(long)]
        kind: String,
        /// Volume in millilitres
        #[arg(long, allow_negative_numbers = true)]
        volume: f64,
        /// ABV in percent
        #[arg(long, allow_negative_numbers = true)]
        abv: f64,
    },
    /// Edit a custom quick-add; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        volume: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        abv: Option<f64>,
    },
    /// Delete a custom quick-add.
    Rm { id: String },
}
