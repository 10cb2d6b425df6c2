use lumen_i18n::{Localizer, MessageKey};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::context::{AppContext, GoalSource};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq)]
pub struct GoalResponse {
    pub goal_grams: Option<f64>,
    pub source: Option<GoalSource>,
}

impl GoalResponse {
    fn from_effective(effective: Option<(f64, GoalSource)>) -> Self {
        Self {
            goal_grams: effective.map(|(grams, _)| grams),
            source: effective.map(|(_, source)| source),
        }
    }
}

/// Handle `lumen goal`.
pub fn handle(action: &GoalCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GoalCommands::Show => {
            let effective = ctx.daily_goal(None)?;
            if effective.is_none() && !flags.quiet {
                eprintln!("{}", ctx.translator.text(MessageKey::GoalNotSet, &[]));
            }
            output(&GoalResponse::from_effective(effective), flags.format)
        }
        GoalCommands::Set { grams } => {
            let goal = ctx.goals.set(*grams)?;
            tracing::info!(goal_grams = goal.goal_grams, "daily goal stored");
            if !flags.quiet {
                eprintln!("{}", ctx.translator.text(MessageKey::GoalSetSuccess, &[]));
            }
            output(
                &GoalResponse::from_effective(Some((goal.goal_grams, GoalSource::Stored))),
                flags.format,
            )
        }
        GoalCommands::Clear => {
            let removed = ctx.goals.clear()?;
            if removed && !flags.quiet {
                eprintln!("{}", ctx.translator.text(MessageKey::GoalDeleteSuccess, &[]));
            }
            // Whatever remains in effect, usually the config goal or none.
            output(&GoalResponse::from_effective(ctx.daily_goal(None)?), flags.format)
        }
    }
}
