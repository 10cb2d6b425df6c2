use super::{Message, MessageKey, arg};

pub(super) fn message(key: MessageKey) -> Option<Message> {
    use Message::{Literal, Template};
    let message = match key {
        MessageKey::AppTitle => Literal("LumenDosis"),
        MessageKey::LabelTotalAlcohol => Literal("Gesamtalkohol"),
        MessageKey::LogEmpty => Literal("Noch keine Getränke protokolliert."),

        MessageKey::ImpactLow => Literal("Niedrig"),
        MessageKey::ImpactModerate => Literal("Mittel"),
        MessageKey::ImpactHigh => Literal("Hoch"),
        MessageKey::ImpactNominal => Literal("Nominale Auswirkung auf diesem Niveau."),
        MessageKey::ImpactNoticeable => {
            Template(|args| format!("Merkliche Beeinträchtigung von {}", arg(args, 0)))
        }
        MessageKey::ImpactSignificant => {
            Template(|args| format!("Erhebliche Störung von {}", arg(args, 0)))
        }

        MessageKey::RegionFrontalLobe => Literal("Frontallappen"),
        MessageKey::RegionParietalLobe => Literal("Parietallappen"),
        MessageKey::RegionOccipitalLobe => Literal("Okzipitallappen"),
        MessageKey::RegionTemporalLobe => Literal("Temporallappen"),
        MessageKey::RegionCerebellum => Literal("Kleinhirn"),
        MessageKey::RegionBrainstem => Literal("Hirnstamm"),

        MessageKey::DrinkBeer => Literal("Bier"),
        MessageKey::DrinkWine => Literal("Wein"),
        MessageKey::DrinkSpirit => Literal("Spirituose (Shot)"),
        MessageKey::DrinkLiqueur => Literal("Likör"),
        MessageKey::DrinkSake => Literal("Sake"),
        MessageKey::DrinkSoju => Literal("Soju"),

        MessageKey::QuickAddBeerStandard => Literal("Pint Bier (4.5%)"),
        MessageKey::QuickAddWineGlass => Literal("Großes Glas Wein (175ml, 13%)"),
        MessageKey::QuickAddSpiritSingle => Literal("Einzelner Shot (25ml, 40%)"),
        MessageKey::QuickAddCider => Literal("Pint Apfelwein (4.5%)"),
        MessageKey::QuickAddCocktail => Literal("Cocktail (100ml, 20%)"),
        MessageKey::QuickAddBeerCan => Literal("Bierdose (355ml, 5%)"),
        MessageKey::QuickAddWineGlassUs => Literal("Glas Wein (147ml, 12%)"),
        MessageKey::QuickAddSpiritShotUs => Literal("Shot (44ml, 40%)"),
        MessageKey::QuickAddCiderCan => Literal("Apfelwein Dose (355ml, 5%)"),
        MessageKey::QuickAddCocktailUs => Literal("Cocktail (150ml, 20%)"),
        MessageKey::NoCustomQuickAdds => Literal("Noch keine benutzerdefinierten Schnell-Hinzufügungen."),

        MessageKey::GoalNotSet => Literal("Kein tägliches Ziel festgelegt."),
        MessageKey::GoalSetSuccess => Literal("Tägliches Ziel festgelegt!"),
        MessageKey::GoalDeleteSuccess => Literal("Tägliches Ziel entfernt."),
        MessageKey::GoalExceeded => Literal("Ziel überschritten!"),
        MessageKey::GoalRemaining => Literal("verbleibend"),
        MessageKey::ShareMessageGoal => Template(|args| {
            format!(
                "Heute habe ich {}g Alkohol konsumiert und bleibe mit LumenDosis innerhalb meines Ziels von {}g! #VerantwortungsvollesTrinken #LumenDosis",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageOverGoal => Template(|args| {
            format!(
                "Heute habe ich {}g Alkohol konsumiert und mein Ziel von {}g überschritten. Zeit zum Nachdenken mit LumenDosis! #Gesundheitsreise #LumenDosis",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageNoGoal => Template(|args| {
            format!(
                "Heute habe ich {}g Alkohol konsumiert. Verfolgen Sie Ihre Aufnahme mit LumenDosis! #GesundheitsApp",
                arg(args, 0)
            )
        }),

        MessageKey::AiCoachNoKey => Literal(
            "KI-Coach ist deaktiviert. Ein Gemini-API-Schlüssel ist für diese Funktion erforderlich.",
        ),
        _ => return None,
    };
    Some(message)
}
