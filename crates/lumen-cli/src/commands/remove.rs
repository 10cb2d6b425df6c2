use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RemoveArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse<'a> {
    id: &'a str,
    removed: bool,
}

/// Handle `lumen remove`.
pub fn handle(args: &RemoveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.log.remove(&args.id)?;
    output(
        &RemoveResponse {
            id: &args.id,
            removed: true,
        },
        flags.format,
    )
}
