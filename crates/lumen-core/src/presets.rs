//! Quick-add serving presets per market.

use serde::Serialize;

use crate::enums::{DrinkKind, Market};

/// A standard serving offered as a one-tap log action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
    /// Message key of the button label.
    pub label_key: &'static str,
}

const fn preset(kind: DrinkKind, volume_ml: f64, abv_percent: f64, label_key: &'static str) -> Preset {
    Preset {
        kind,
        volume_ml,
        abv_percent,
        label_key,
    }
}

static UK_PRESETS: [Preset; 5] = [
    preset(DrinkKind::Beer, 568.0, 4.5, "quick_add_beer_standard"),
    preset(DrinkKind::Wine, 175.0, 13.0, "quick_add_wine_glass"),
    preset(DrinkKind::Spirit, 25.0, 40.0, "quick_add_spirit_single"),
    preset(DrinkKind::Cider, 568.0, 4.5, "quick_add_cider"),
    preset(DrinkKind::Cocktail, 100.0, 20.0, "quick_add_cocktail"),
];

static US_PRESETS: [Preset; 5] = [
    preset(DrinkKind::Beer, 355.0, 5.0, "quick_add_beer_can"),
    preset(DrinkKind::Wine, 147.0, 12.0, "quick_add_wine_glass_us"),
    preset(DrinkKind::Spirit, 44.0, 40.0, "quick_add_spirit_shot_us"),
    preset(DrinkKind::Cider, 355.0, 5.0, "quick_add_cider_can"),
    preset(DrinkKind::Cocktail, 150.0, 20.0, "quick_add_cocktail_us"),
];

/// All presets for `market`. The first entry is the market's beer serving.
#[must_use]
pub fn presets_for(market: Market) -> &'static [Preset] {
    match market {
        Market::Uk => &UK_PRESETS,
        Market::Us => &US_PRESETS,
    }
}

/// Preset for `kind` in `market`, falling back to the market's beer serving
/// for kinds without a standard size.
#[must_use]
pub fn preset_for(market: Market, kind: DrinkKind) -> &'static Preset {
    let presets = presets_for(market);
    presets
        .iter()
        .find(|p| p.kind == kind)
        .unwrap_or(&presets[0])
}
