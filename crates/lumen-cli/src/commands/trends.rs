use lumen_impact::weekly_trends;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lumen trends`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let trends = weekly_trends(&ctx.log.entries());
    tracing::debug!(weeks = trends.len(), "weekly trends computed");
    output(&trends, flags.format)
}
