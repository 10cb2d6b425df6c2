use lumen_impact::DailySummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummaryArgs;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: DailySummary,
    pub status: String,
    pub share_message: String,
}

/// Handle `lumen summary`.
pub fn handle(args: &SummaryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let day = parse_date(args.date.as_deref())?;
    if let Some(goal) = args.goal {
        anyhow::ensure!(
            goal.is_finite() && goal >= 0.0,
            "invalid --goal '{goal}': must be a non-negative number"
        );
    }
    // An explicit `--goal 0` means "no goal" for this run.
    let goal = match args.goal {
        Some(goal) => Some(goal),
        None => ctx.daily_goal(None)?.map(|(goal, _)| goal),
    };

    let summary = DailySummary::for_day(&ctx.log.entries(), day, goal);
    let response = SummaryResponse {
        status: summary.goal_status(&ctx.translator),
        share_message: summary.share_message(&ctx.translator),
        summary,
    };
    output(&response, flags.format)
}
