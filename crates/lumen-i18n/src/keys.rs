use std::fmt;

use lumen_core::enums::{DrinkKind, RegionId, Severity};

macro_rules! message_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// Closed set of message keys shared by every locale.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The key as it appears in catalogs and static tables.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}

message_keys! {
    AppTitle => "app_title",
    LabelTotalAlcohol => "label_total_alcohol",
    LogEmpty => "log_empty",
    ChartNoData => "chart_no_data",

    ImpactLow => "impact_low",
    ImpactModerate => "impact_moderate",
    ImpactHigh => "impact_high",
    ImpactNominal => "impact_nominal",
    ImpactNoticeable => "impact_noticeable",
    ImpactSignificant => "impact_significant",

    RegionFrontalLobe => "region_frontalLobe",
    RegionParietalLobe => "region_parietalLobe",
    RegionOccipitalLobe => "region_occipitalLobe",
    RegionTemporalLobe => "region_temporalLobe",
    RegionCerebellum => "region_cerebellum",
    RegionBrainstem => "region_brainstem",

    DrinkBeer => "drink_beer",
    DrinkWine => "drink_wine",
    DrinkSpirit => "drink_spirit",
    DrinkLiqueur => "drink_liqueur",
    DrinkSake => "drink_sake",
    DrinkSoju => "drink_soju",
    DrinkCider => "drink_cider",
    DrinkCocktail => "drink_cocktail",
    DrinkCustom => "drink_custom",

    QuickAddBeerStandard => "quick_add_beer_standard",
    QuickAddWineGlass => "quick_add_wine_glass",
    QuickAddSpiritSingle => "quick_add_spirit_single",
    QuickAddCider => "quick_add_cider",
    QuickAddCocktail => "quick_add_cocktail",
    QuickAddBeerCan => "quick_add_beer_can",
    QuickAddWineGlassUs => "quick_add_wine_glass_us",
    QuickAddSpiritShotUs => "quick_add_spirit_shot_us",
    QuickAddCiderCan => "quick_add_cider_can",
    QuickAddCocktailUs => "quick_add_cocktail_us",
    NoCustomQuickAdds => "no_custom_quick_adds",

    GoalNotSet => "goal_not_set",
    GoalSetSuccess => "goal_set_success",
    GoalDeleteSuccess => "goal_delete_success",
    GoalExceeded => "goal_exceeded",
    GoalRemaining => "goal_remaining",
    ShareMessageGoal => "share_message_goal",
    ShareMessageOverGoal => "share_message_over_goal",
    ShareMessageNoGoal => "share_message_no_goal",

    AiCoachTitle => "ai_coach_title",
    AiCoachNoKey => "ai_coach_no_key",
    AiCoachUnavailable => "ai_coach_unavailable",
    AiCoachConnectionError => "ai_coach_connection_error",
}

impl MessageKey {
    /// Resolve a key string from a static table (region names, preset labels).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }

    #[must_use]
    pub const fn region(id: RegionId) -> Self {
        match id {
            RegionId::FrontalLobe => Self::RegionFrontalLobe,
            RegionId::ParietalLobe => Self::RegionParietalLobe,
            RegionId::OccipitalLobe => Self::RegionOccipitalLobe,
            RegionId::TemporalLobe => Self::RegionTemporalLobe,
            RegionId::Cerebellum => Self::RegionCerebellum,
            RegionId::Brainstem => Self::RegionBrainstem,
        }
    }

    #[must_use]
    pub const fn drink(kind: DrinkKind) -> Self {
        match kind {
            DrinkKind::Beer => Self::DrinkBeer,
            DrinkKind::Wine => Self::DrinkWine,
            DrinkKind::Spirit => Self::DrinkSpirit,
            DrinkKind::Liqueur => Self::DrinkLiqueur,
            DrinkKind::Sake => Self::DrinkSake,
            DrinkKind::Soju => Self::DrinkSoju,
            DrinkKind::Cider => Self::DrinkCider,
            DrinkKind::Cocktail => Self::DrinkCocktail,
            DrinkKind::Custom => Self::DrinkCustom,
        }
    }

    /// Word shown next to an impact score.
    #[must_use]
    pub const fn impact_word(severity: Severity) -> Self {
        match severity {
            Severity::Low => Self::ImpactLow,
            Severity::Moderate => Self::ImpactModerate,
            Severity::High => Self::ImpactHigh,
        }
    }

    /// Effect description for a severity tier. The moderate and high
    /// messages are templates taking the region's functions as argument 0.
    #[must_use]
    pub const fn impact_effect(severity: Severity) -> Self {
        match severity {
            Severity::Low => Self::ImpactNominal,
            Severity::Moderate => Self::ImpactNoticeable,
            Severity::High => Self::ImpactSignificant,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use lumen_core::entities::BRAIN_REGIONS;
    use lumen_core::enums::Market;
    use lumen_core::presets::presets_for;

    use super::*;

    #[test]
    fn key_strings_are_unique() {
        let unique: HashSet<&str> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(unique.len(), MessageKey::ALL.len());
    }

    #[test]
    fn region_table_keys_resolve() {
        for region in &BRAIN_REGIONS {
            assert_eq!(
                MessageKey::from_key(region.name_key),
                Some(MessageKey::region(region.id))
            );
        }
    }

    #[test]
    fn preset_label_keys_resolve() {
        for market in [Market::Uk, Market::Us] {
            for preset in presets_for(market) {
                assert!(
                    MessageKey::from_key(preset.label_key).is_some(),
                    "missing key {}",
                    preset.label_key
                );
            }
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(MessageKey::from_key("achievement_first_log_name"), None);
    }
}
