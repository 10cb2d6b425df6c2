use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lumen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lumen",
    version,
    about = "LumenDose - log drinks and see their estimated effect on each brain region"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Display language (en, de, fr-CA, es, ja); overrides config
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Journal file; overrides `general.journal_path`
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            locale: self.locale.clone(),
            journal: self.journal.clone(),
        }
    }
}
