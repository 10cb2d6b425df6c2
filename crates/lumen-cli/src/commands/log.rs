use chrono::{DateTime, Utc};
use lumen_core::entities::{CustomQuickAdd, NewDrink};
use lumen_core::enums::{DrinkKind, Market};
use lumen_core::presets::preset_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::commands::shared::parse::{parse_enum, parse_timestamp};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lumen log`.
pub fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let timestamp = parse_timestamp(args.at.as_deref())?;
    let custom = if args.preset.is_some() {
        ctx.quick_adds.list()?
    } else {
        Vec::new()
    };
    let drink = resolve(args, ctx.config.general.market, &custom, timestamp)?;
    let entry = ctx.log.record(drink, ctx.config.general.input_policy)?;
    tracing::info!(id = %entry.id, grams = entry.alcohol_grams, "drink logged");
    output(&entry, flags.format)
}

/// Build the submitted drink from explicit values, a custom quick-add or a
/// market preset. `--preset` names a custom quick-add by id or label first,
/// then a drink kind. Explicit `--volume` and `--abv` override either.
fn resolve(
    args: &LogArgs,
    market: Market,
    custom: &[CustomQuickAdd],
    timestamp: DateTime<Utc>,
) -> anyhow::Result<NewDrink> {
    if let Some(raw) = args.preset.as_deref() {
        if let Some(quick) = custom.iter().find(|q| q.id == raw || q.matches_label(raw)) {
            let mut drink = quick.to_new_drink(timestamp);
            drink.volume_ml = args.volume.unwrap_or(drink.volume_ml);
            drink.abv_percent = args.abv.unwrap_or(drink.abv_percent);
            return Ok(drink);
        }
        let requested: DrinkKind = parse_enum(raw, "preset")?;
        let preset = preset_for(market, requested);
        if preset.kind != requested {
            tracing::warn!(
                requested = requested.as_str(),
                used = preset.kind.as_str(),
                market = market.as_str(),
                "no standard serving for kind; using the market's beer preset"
            );
        }
        return Ok(NewDrink::new(
            preset.kind,
            args.volume.unwrap_or(preset.volume_ml),
            args.abv.unwrap_or(preset.abv_percent),
            timestamp,
        ));
    }

    let kind_raw = args
        .kind
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--kind is required without --preset"))?;
    let kind: DrinkKind = parse_enum(kind_raw, "kind")?;
    let volume = args
        .volume
        .ok_or_else(|| anyhow::anyhow!("--volume is required without --preset"))?;
    let abv = args
        .abv
        .ok_or_else(|| anyhow::anyhow!("--abv is required without --preset"))?;
    Ok(NewDrink::new(kind, volume, abv, timestamp))
}
