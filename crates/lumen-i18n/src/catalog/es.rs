use super::{Message, MessageKey, arg};

pub(super) fn message(key: MessageKey) -> Option<Message> {
    use Message::{Literal, Template};
    let message = match key {
        MessageKey::AppTitle => Literal("LumenDosis"),
        MessageKey::LabelTotalAlcohol => Literal("Alcohol total"),
        MessageKey::LogEmpty => Literal("No hay bebidas registradas aún."),

        MessageKey::ImpactLow => Literal("Bajo"),
        MessageKey::ImpactModerate => Literal("Moderado"),
        MessageKey::ImpactHigh => Literal("Alto"),
        MessageKey::ImpactNominal => Literal("Impacto nominal en este nivel."),
        MessageKey::ImpactNoticeable => {
            Template(|args| format!("Deterioro notable de {}", arg(args, 0)))
        }
        MessageKey::ImpactSignificant => {
            Template(|args| format!("Disrupción significativa de {}", arg(args, 0)))
        }

        MessageKey::RegionFrontalLobe => Literal("Lóbulo frontal"),
        MessageKey::RegionParietalLobe => Literal("Lóbulo parietal"),
        MessageKey::RegionOccipitalLobe => Literal("Lóbulo occipital"),
        MessageKey::RegionTemporalLobe => Literal("Lóbulo temporal"),
        MessageKey::RegionCerebellum => Literal("Cerebelo"),
        MessageKey::RegionBrainstem => Literal("Tronco encefálico"),

        MessageKey::DrinkBeer => Literal("Cerveza"),
        MessageKey::DrinkWine => Literal("Vino"),
        MessageKey::DrinkSpirit => Literal("Licor (Chupito)"),
        MessageKey::DrinkLiqueur => Literal("Licor"),
        MessageKey::DrinkSake => Literal("Sake"),
        MessageKey::DrinkSoju => Literal("Soju"),

        MessageKey::QuickAddBeerStandard => Literal("Pinta de Cerveza (4.5%)"),
        MessageKey::QuickAddWineGlass => Literal("Copa Grande de Vino (175ml, 13%)"),
        MessageKey::QuickAddSpiritSingle => Literal("Chupito Individual (25ml, 40%)"),
        MessageKey::QuickAddCider => Literal("Pinta de Sidra (4.5%)"),
        MessageKey::QuickAddCocktail => Literal("Cóctel (100ml, 20%)"),
        MessageKey::QuickAddBeerCan => Literal("Lata de Cerveza (355ml, 5%)"),
        MessageKey::QuickAddWineGlassUs => Literal("Copa de Vino (147ml, 12%)"),
        MessageKey::QuickAddSpiritShotUs => Literal("Chupito (44ml, 40%)"),
        MessageKey::QuickAddCiderCan => Literal("Lata de Sidra (355ml, 5%)"),
        MessageKey::QuickAddCocktailUs => Literal("Cóctel (150ml, 20%)"),
        MessageKey::NoCustomQuickAdds => Literal("No hay adiciones rápidas personalizadas aún."),

        MessageKey::GoalNotSet => Literal("No hay meta diaria establecida."),
        MessageKey::GoalSetSuccess => Literal("¡Meta diaria establecida!"),
        MessageKey::GoalDeleteSuccess => Literal("Meta diaria eliminada."),
        MessageKey::GoalExceeded => Literal("¡Meta excedida!"),
        MessageKey::GoalRemaining => Literal("restante"),
        MessageKey::ShareMessageGoal => Template(|args| {
            format!(
                "¡Hoy consumí {}g de alcohol, manteniéndome dentro de mi objetivo de {}g con LumenDose! #ConsumoResponsable #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageOverGoal => Template(|args| {
            format!(
                "Hoy consumí {}g de alcohol, superando mi objetivo de {}g. ¡Es hora de reflexionar con LumenDose! #ViajeDeSalud #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageNoGoal => Template(|args| {
            format!(
                "Hoy consumí {}g de alcohol. ¡Registra tu consumo con LumenDose! #AppDeSalud",
                arg(args, 0)
            )
        }),

        MessageKey::AiCoachNoKey => Literal(
            "El Coach de IA está deshabilitado. Se requiere una clave API de Gemini para esta función.",
        ),
        _ => return None,
    };
    Some(message)
}
