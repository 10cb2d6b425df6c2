use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.quick_adds.remove(id)?;
    tracing::info!(id, label = %removed.label, "quick-add removed");
    output(&removed, flags.format)
}
