use lumen_core::entities::NewQuickAdd;
use lumen_core::enums::DrinkKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    label: &str,
    kind: &str,
    volume: f64,
    abv: f64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind: DrinkKind = parse_enum(kind, "kind")?;
    let quick = ctx.quick_adds.add(NewQuickAdd::new(label, kind, volume, abv))?;
    tracing::info!(id = %quick.id, label = %quick.label, "quick-add saved");
    output(&quick, flags.format)
}
