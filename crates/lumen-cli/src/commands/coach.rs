use lumen_coach::{Coach, Insight};
use lumen_impact::analyze_consumption;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub drink_count: usize,
    pub total_grams: f64,
    #[serde(flatten)]
    pub insight: Insight,
}

/// Handle `lumen coach`: ask for an insight on today's drinks.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let coach = Coach::from_config(&ctx.config.coach)?;
    if !coach.is_enabled() {
        tracing::debug!("coach disabled: no api key configured");
    }

    let drinks = ctx.drinks(true);
    let analysis = analyze_consumption(&drinks, &ctx.translator);
    let goal = ctx.daily_goal(None)?.map(|(goal, _)| goal);
    let insight = coach
        .insight(&drinks, &analysis, goal, &ctx.translator)
        .await;

    output(
        &CoachResponse {
            drink_count: drinks.len(),
            total_grams: analysis.total_grams,
            insight,
        },
        flags.format,
    )
}
