use lumen_core::alcohol::alcohol_grams;
use lumen_core::entities::CustomQuickAdd;
use lumen_core::enums::{DrinkKind, Market};
use lumen_core::presets::presets_for;
use lumen_i18n::{Localizer, MessageKey};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetSource {
    Market,
    Custom,
}

#[derive(Debug, Serialize)]
pub struct PresetRow {
    pub source: PresetSource,
    pub id: Option<String>,
    pub label: String,
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub alcohol_grams: f64,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let custom = ctx.quick_adds.list()?;
    if custom.is_empty() && !flags.quiet {
        eprintln!("{}", ctx.translator.text(MessageKey::NoCustomQuickAdds, &[]));
    }
    let mut rows = market_rows(ctx.config.general.market, &ctx.translator);
    rows.extend(custom.iter().map(custom_row));
    output(&rows, flags.format)
}

fn market_rows(market: Market, localizer: &impl Localizer) -> Vec<PresetRow> {
    presets_for(market)
        .iter()
        .map(|preset| PresetRow {
            source: PresetSource::Market,
            id: None,
            label: MessageKey::from_key(preset.label_key)
                .map_or_else(|| preset.label_key.to_string(), |key| localizer.text(key, &[])),
            kind: preset.kind,
            volume_ml: preset.volume_ml,
            abv_percent: preset.abv_percent,
            alcohol_grams: alcohol_grams(preset.volume_ml, preset.abv_percent),
        })
        .collect()
}

fn custom_row(quick: &CustomQuickAdd) -> PresetRow {
    PresetRow {
        source: PresetSource::Custom,
        id: Some(quick.id.clone()),
        label: quick.label.clone(),
        kind: quick.kind,
        volume_ml: quick.volume_ml,
        abv_percent: quick.abv_percent,
        alcohol_grams: alcohol_grams(quick.volume_ml, quick.abv_percent),
    }
}
