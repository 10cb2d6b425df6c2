use anyhow::Context;
use lumen_config::LumenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `grams` only needs the input policy, so it runs before the journal is
/// opened.
pub async fn dispatch(command: Commands, config: LumenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Commands::Grams(args) = &command {
        return commands::grams::handle(args, &config, flags);
    }

    let ctx = AppContext::init(config).context("failed to open the drink journal")?;
    match command {
        Commands::Log(args) => commands::log::handle(&args, &ctx, flags),
        Commands::List(args) => commands::list::handle(&args, &ctx, flags),
        Commands::Remove(args) => commands::remove::handle(&args, &ctx, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, &ctx, flags),
        Commands::Summary(args) => commands::summary::handle(&args, &ctx, flags),
        Commands::Trends => commands::trends::handle(&ctx, flags),
        Commands::Presets { action } => commands::presets::handle(action.as_ref(), &ctx, flags),
        Commands::Goal { action } => commands::goal::handle(&action, &ctx, flags),
        Commands::Coach => commands::coach::handle(&ctx, flags).await,
        Commands::Grams(args) => commands::grams::handle(&args, &ctx.config, flags),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::{GramsArgs, ListArgs};

    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            locale: None,
            journal: None,
        }
    }

    fn config_with_corrupt_journal(dir: &tempfile::TempDir) -> LumenConfig {
        let journal = dir.path().join("drinks.jsonl");
        std::fs::write(&journal, "not a drink\n").unwrap();
        let mut config = LumenConfig::default();
        config.general.journal_path = journal;
        config
    }

    #[tokio::test]
    async fn grams_runs_without_opening_the_journal() {
        let dir = tempfile::tempdir().unwrap();
        let command = Commands::Grams(GramsArgs {
            volume: 330.0,
            abv: 5.0,
        });
        dispatch(command, config_with_corrupt_journal(&dir), &flags())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn journal_commands_report_an_unreadable_journal() {
        let dir = tempfile::tempdir().unwrap();
        let command = Commands::List(ListArgs {
            today: false,
            limit: None,
        });
        let err = dispatch(command, config_with_corrupt_journal(&dir), &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to open the drink journal"));
    }
}
