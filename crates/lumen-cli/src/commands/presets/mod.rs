mod add;
mod edit;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PresetCommands;
use crate::context::AppContext;

/// Handle `lumen presets` and its subcommands.
pub fn handle(action: Option<&PresetCommands>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        None => list::run(ctx, flags),
        Some(PresetCommands::Add {
            label,
            kind,
            volume,
            abv,
        }) => add::run(label, kind, *volume, *abv, ctx, flags),
        Some(PresetCommands::Edit {
            id,
            label,
            kind,
            volume,
            abv,
        }) => edit::run(
            id,
            &edit::Changes {
                label: label.as_deref(),
                kind: kind.as_deref(),
                volume: *volume,
                abv: *abv,
            },
            ctx,
            flags,
        ),
        Some(PresetCommands::Rm { id }) => remove::run(id, ctx, flags),
    }
}
