use super::{Message, MessageKey, arg};

pub(super) fn message(key: MessageKey) -> Option<Message> {
    use Message::{Literal, Template};
    let message = match key {
        MessageKey::AppTitle => Literal("ルーメンドーズ"),
        MessageKey::LabelTotalAlcohol => Literal("総アルコール量"),
        MessageKey::LogEmpty => Literal("まだ飲酒が記録されていません。"),

        MessageKey::ImpactLow => Literal("低い"),
        MessageKey::ImpactModerate => Literal("中程度"),
        MessageKey::ImpactHigh => Literal("高い"),
        MessageKey::ImpactNominal => Literal("このレベルでの名目上の影響。"),
        MessageKey::ImpactNoticeable => Template(|args| format!("{}への顕著な障害", arg(args, 0))),
        MessageKey::ImpactSignificant => Template(|args| format!("{}の重大な中断", arg(args, 0))),

        MessageKey::RegionFrontalLobe => Literal("前頭葉"),
        MessageKey::RegionParietalLobe => Literal("頭頂葉"),
        MessageKey::RegionOccipitalLobe => Literal("後頭葉"),
        MessageKey::RegionTemporalLobe => Literal("側頭葉"),
        MessageKey::RegionCerebellum => Literal("小脳"),
        MessageKey::RegionBrainstem => Literal("脳幹"),

        MessageKey::DrinkBeer => Literal("ビール"),
        MessageKey::DrinkWine => Literal("ワイン"),
        MessageKey::DrinkSpirit => Literal("スピリッツ (ショット)"),
        MessageKey::DrinkLiqueur => Literal("リキュール"),
        MessageKey::DrinkSake => Literal("日本酒"),
        MessageKey::DrinkSoju => Literal("焼酎"),

        MessageKey::QuickAddBeerStandard => Literal("パイントビール (4.5%)"),
        MessageKey::QuickAddWineGlass => Literal("大きなワイングラス (175ml, 13%)"),
        MessageKey::QuickAddSpiritSingle => Literal("シングルショット (25ml, 40%)"),
        MessageKey::QuickAddCider => Literal("パイントサイダー (4.5%)"),
        MessageKey::QuickAddCocktail => Literal("カクテル (100ml, 20%)"),
        MessageKey::QuickAddBeerCan => Literal("缶ビール (355ml, 5%)"),
        MessageKey::QuickAddWineGlassUs => Literal("ワイングラス (147ml, 12%)"),
        MessageKey::QuickAddSpiritShotUs => Literal("ショット (44ml, 40%)"),
        MessageKey::QuickAddCiderCan => Literal("缶サイダー (355ml, 5%)"),
        MessageKey::QuickAddCocktailUs => Literal("カクテル (150ml, 20%)"),
        MessageKey::NoCustomQuickAdds => Literal("カスタムクイック追加はまだありません。"),

        MessageKey::GoalNotSet => Literal("1日の目標が設定されていません。"),
        MessageKey::GoalSetSuccess => Literal("1日の目標が設定されました！"),
        MessageKey::GoalDeleteSuccess => Literal("1日の目標が削除されました。"),
        MessageKey::GoalExceeded => Literal("目標超過！"),
        MessageKey::GoalRemaining => Literal("残り"),

        MessageKey::AiCoachNoKey => {
            Literal("AIコーチは無効です。この機能にはGemini APIキーが必要です。")
        }
        _ => return None,
    };
    Some(message)
}
