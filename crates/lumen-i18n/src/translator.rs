use tracing::debug;

use crate::catalog;
use crate::keys::MessageKey;
use crate::locale::Locale;

/// Resolves message keys to display text.
///
/// The analyzer and summary code take `&impl Localizer` so they stay
/// independent of how catalogs are stored.
pub trait Localizer {
    /// Text for `key`, rendered with positional `args`. Never fails: a key
    /// missing from every catalog renders as the key string itself.
    fn text(&self, key: MessageKey, args: &[&str]) -> String;

    /// Active locale, for callers that format numbers or dates.
    fn locale(&self) -> Locale;
}

/// Catalog-backed [`Localizer`] bound to one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Whether the active locale has its own entry for `key`.
    #[must_use]
    pub fn has_translation(&self, key: MessageKey) -> bool {
        catalog::lookup(self.locale, key).is_some()
    }
}

impl Localizer for Translator {
    fn text(&self, key: MessageKey, args: &[&str]) -> String {
        if let Some(message) = catalog::lookup(self.locale, key) {
            return message.render(args);
        }
        debug!(locale = %self.locale, key = %key, "message missing, falling back to English");
        let rendered = catalog::english(key).render(args);
        if rendered.is_empty() {
            key.as_str().to_string()
        } else {
            rendered
        }
    }

    fn locale(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn english_catalog_covers_every_key() {
        let en = Translator::new(Locale::En);
        for key in MessageKey::ALL {
            assert!(en.has_translation(*key), "missing English text for {key}");
            assert!(!en.text(*key, &["x", "y"]).is_empty());
        }
    }

    #[rstest]
    #[case(Locale::En, "High")]
    #[case(Locale::De, "Hoch")]
    #[case(Locale::FrCa, "Élevé")]
    #[case(Locale::Es, "Alto")]
    #[case(Locale::Ja, "高い")]
    fn impact_high_per_locale(#[case] locale: Locale, #[case] expected: &str) {
        assert_eq!(Translator::new(locale).text(MessageKey::ImpactHigh, &[]), expected);
    }

    #[test]
    fn noticeable_template_inserts_functions() {
        let en = Translator::new(Locale::En);
        assert_eq!(
            en.text(
                MessageKey::ImpactNoticeable,
                &["coordination, balance, and motor control."]
            ),
            "Noticeable impairment to coordination, balance, and motor control."
        );
        let de = Translator::new(Locale::De);
        assert_eq!(
            de.text(MessageKey::ImpactSignificant, &["x"]),
            "Erhebliche Störung von x"
        );
    }

    #[test]
    fn japanese_share_message_falls_back_to_english() {
        let ja = Translator::new(Locale::Ja);
        assert!(!ja.has_translation(MessageKey::ShareMessageNoGoal));
        assert_eq!(
            ja.text(MessageKey::ShareMessageNoGoal, &["12.5"]),
            "Today I consumed 12.5g of alcohol. Track your intake with LumenDose! #HealthApp"
        );
    }

    #[test]
    fn french_app_title_falls_back_to_english() {
        assert_eq!(
            Translator::new(Locale::FrCa).text(MessageKey::AppTitle, &[]),
            "LumenDose"
        );
    }

    #[test]
    fn added_drink_kinds_fall_back_outside_english() {
        assert_eq!(
            Translator::new(Locale::Es).text(MessageKey::DrinkCocktail, &[]),
            "Cocktail"
        );
    }

    #[rstest]
    #[case(Locale::FrCa, "Impact nominal à ce niveau.")]
    #[case(Locale::Es, "Impacto nominal en este nivel.")]
    fn latin_script_catalogs_end_sentences_with_ascii_period(
        #[case] locale: Locale,
        #[case] nominal: &str,
    ) {
        let t = Translator::new(locale);
        assert_eq!(t.text(MessageKey::ImpactNominal, &[]), nominal);
        for key in MessageKey::ALL {
            let text = t.text(*key, &["12.5", "20.0"]);
            assert!(!text.contains('\u{3002}'), "{locale} {key}: {text}");
        }
    }

    #[test]
    fn goal_confirmations_are_localized() {
        assert_eq!(
            Translator::new(Locale::De).text(MessageKey::GoalSetSuccess, &[]),
            "Tägliches Ziel festgelegt!"
        );
        assert_eq!(
            Translator::new(Locale::Ja).text(MessageKey::GoalDeleteSuccess, &[]),
            "1日の目標が削除されました。"
        );
    }

    #[test]
    fn share_messages_carry_both_numbers() {
        let text = Translator::default().text(MessageKey::ShareMessageOverGoal, &["42.0", "30.0"]);
        assert!(text.contains("42.0g"));
        assert!(text.contains("goal of 30.0g"));
    }
}
