//! English. Complete: every key resolves here.

use super::{Message, MessageKey, arg};

pub(super) fn message(key: MessageKey) -> Message {
    use Message::{Literal, Template};
    match key {
        MessageKey::AppTitle => Literal("LumenDose"),
        MessageKey::LabelTotalAlcohol => Literal("Total Alcohol"),
        MessageKey::LogEmpty => Literal("No drinks logged yet."),
        MessageKey::ChartNoData => {
            Literal("Not enough data to display trends. Keep logging your drinks!")
        }

        MessageKey::ImpactLow => Literal("Low"),
        MessageKey::ImpactModerate => Literal("Moderate"),
        MessageKey::ImpactHigh => Literal("High"),
        MessageKey::ImpactNominal => Literal("Nominal impact at this level."),
        MessageKey::ImpactNoticeable => {
            Template(|args| format!("Noticeable impairment to {}", arg(args, 0)))
        }
        MessageKey::ImpactSignificant => {
            Template(|args| format!("Significant disruption of {}", arg(args, 0)))
        }

        MessageKey::RegionFrontalLobe => Literal("Frontal Lobe"),
        MessageKey::RegionParietalLobe => Literal("Parietal Lobe"),
        MessageKey::RegionOccipitalLobe => Literal("Occipital Lobe"),
        MessageKey::RegionTemporalLobe => Literal("Temporal Lobe"),
        MessageKey::RegionCerebellum => Literal("Cerebellum"),
        MessageKey::RegionBrainstem => Literal("Brainstem"),

        MessageKey::DrinkBeer => Literal("Beer"),
        MessageKey::DrinkWine => Literal("Wine"),
        MessageKey::DrinkSpirit => Literal("Spirit (Shot)"),
        MessageKey::DrinkLiqueur => Literal("Liqueur"),
        MessageKey::DrinkSake => Literal("Sake"),
        MessageKey::DrinkSoju => Literal("Soju"),
        MessageKey::DrinkCider => Literal("Cider"),
        MessageKey::DrinkCocktail => Literal("Cocktail"),
        MessageKey::DrinkCustom => Literal("Custom"),

        MessageKey::QuickAddBeerStandard => Literal("Pint of Beer (4.5%)"),
        MessageKey::QuickAddWineGlass => Literal("Large Wine (175ml, 13%)"),
        MessageKey::QuickAddSpiritSingle => Literal("Single Shot (25ml, 40%)"),
        MessageKey::QuickAddCider => Literal("Pint of Cider (4.5%)"),
        MessageKey::QuickAddCocktail => Literal("Cocktail (100ml, 20%)"),
        MessageKey::QuickAddBeerCan => Literal("Can of Beer (355ml, 5%)"),
        MessageKey::QuickAddWineGlassUs => Literal("Glass of Wine (147ml, 12%)"),
        MessageKey::QuickAddSpiritShotUs => Literal("Shot (44ml, 40%)"),
        MessageKey::QuickAddCiderCan => Literal("Can of Cider (355ml, 5%)"),
        MessageKey::QuickAddCocktailUs => Literal("Cocktail (150ml, 20%)"),
        MessageKey::NoCustomQuickAdds => Literal("No custom quick adds yet."),

        MessageKey::GoalNotSet => Literal("No daily goal set."),
        MessageKey::GoalSetSuccess => Literal("Daily goal set!"),
        MessageKey::GoalDeleteSuccess => Literal("Daily goal removed."),
        MessageKey::GoalExceeded => Literal("Goal Exceeded!"),
        MessageKey::GoalRemaining => Literal("remaining"),
        MessageKey::ShareMessageGoal => Template(|args| {
            format!(
                "Today I consumed {}g of alcohol, staying within my goal of {}g with LumenDose! #ResponsibleDrinking #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageOverGoal => Template(|args| {
            format!(
                "Today I consumed {}g of alcohol, exceeding my goal of {}g. Time to reflect with LumenDose! #HealthJourney #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageNoGoal => Template(|args| {
            format!(
                "Today I consumed {}g of alcohol. Track your intake with LumenDose! #HealthApp",
                arg(args, 0)
            )
        }),

        MessageKey::AiCoachTitle => Literal("AI Coach Insight"),
        MessageKey::AiCoachNoKey => Literal(
            "AI Coach is disabled. A Gemini API key is required for this feature.",
        ),
        MessageKey::AiCoachUnavailable => Literal("Could not generate an insight at this time."),
        MessageKey::AiCoachConnectionError => {
            Literal("There was an issue connecting to the AI coach.")
        }
    }
}
