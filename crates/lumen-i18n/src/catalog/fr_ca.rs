use super::{Message, MessageKey, arg};

pub(super) fn message(key: MessageKey) -> Option<Message> {
    use Message::{Literal, Template};
    let message = match key {
        MessageKey::LabelTotalAlcohol => Literal("Alcool total"),
        MessageKey::LogEmpty => Literal("Aucune boisson enregistrée pour le moment."),

        MessageKey::ImpactLow => Literal("Faible"),
        MessageKey::ImpactModerate => Literal("Modéré"),
        MessageKey::ImpactHigh => Literal("Élevé"),
        MessageKey::ImpactNominal => Literal("Impact nominal à ce niveau."),
        MessageKey::ImpactNoticeable => {
            Template(|args| format!("Altération notable de {}", arg(args, 0)))
        }
        MessageKey::ImpactSignificant => {
            Template(|args| format!("Perturbation significative de {}", arg(args, 0)))
        }

        MessageKey::RegionFrontalLobe => Literal("Lobe frontal"),
        MessageKey::RegionParietalLobe => Literal("Lobe pariétal"),
        MessageKey::RegionOccipitalLobe => Literal("Lobe occipital"),
        MessageKey::RegionTemporalLobe => Literal("Lobe temporal"),
        MessageKey::RegionCerebellum => Literal("Cervelet"),
        MessageKey::RegionBrainstem => Literal("Tronc cérébral"),

        MessageKey::DrinkBeer => Literal("Bière"),
        MessageKey::DrinkWine => Literal("Vin"),
        MessageKey::DrinkSpirit => Literal("Spiritueux (Shot)"),
        MessageKey::DrinkLiqueur => Literal("Liqueur"),
        MessageKey::DrinkSake => Literal("Saké"),
        MessageKey::DrinkSoju => Literal("Soju"),

        MessageKey::QuickAddBeerStandard => Literal("Pinte de bière (4.5%)"),
        MessageKey::QuickAddWineGlass => Literal("Grand verre de vin (175ml, 13%)"),
        MessageKey::QuickAddSpiritSingle => Literal("Simple shot (25ml, 40%)"),
        MessageKey::QuickAddCider => Literal("Pinte de cidre (4.5%)"),
        MessageKey::QuickAddCocktail => Literal("Cocktail (100ml, 20%)"),
        MessageKey::QuickAddBeerCan => Literal("Canette de bière (355ml, 5%)"),
        MessageKey::QuickAddWineGlassUs => Literal("Verre de vin (147ml, 12%)"),
        MessageKey::QuickAddSpiritShotUs => Literal("Shot (44ml, 40%)"),
        MessageKey::QuickAddCiderCan => Literal("Canette de cidre (355ml, 5%)"),
        MessageKey::QuickAddCocktailUs => Literal("Cocktail (150ml, 20%)"),
        MessageKey::NoCustomQuickAdds => Literal("Aucun ajout rapide personnalisé pour le moment."),

        MessageKey::GoalNotSet => Literal("Aucun objectif quotidien défini."),
        MessageKey::GoalSetSuccess => Literal("Objectif quotidien défini!"),
        MessageKey::GoalDeleteSuccess => Literal("Objectif quotidien supprimé."),
        MessageKey::GoalExceeded => Literal("Objectif dépassé!"),
        MessageKey::GoalRemaining => Literal("restant"),
        MessageKey::ShareMessageGoal => Template(|args| {
            format!(
                "Aujourd'hui, j'ai consommé {}g d'alcool, restant dans mon objectif de {}g avec LumenDose! #ConsommationResponsable #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageOverGoal => Template(|args| {
            format!(
                "Aujourd'hui, j'ai consommé {}g d'alcool, dépassant mon objectif de {}g. Temps de réfléchir avec LumenDose! #ParcoursDeSanté #LumenDose",
                arg(args, 0),
                arg(args, 1)
            )
        }),
        MessageKey::ShareMessageNoGoal => Template(|args| {
            format!(
                "Aujourd'hui, j'ai consommé {}g d'alcool. Suivez votre consommation avec LumenDose! #ApplicationSanté",
                arg(args, 0)
            )
        }),

        MessageKey::AiCoachNoKey => Literal(
            "Le Coach IA est désactivé. Une clé API Gemini est requise pour cette fonction.",
        ),
        _ => return None,
    };
    Some(message)
}
