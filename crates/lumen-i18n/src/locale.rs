use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "fr-CA", alias = "fr", alias = "fr-ca", alias = "fr_ca")]
    FrCa,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "ja")]
    Ja,
}

impl Locale {
    pub const ALL: [Self; 5] = [Self::En, Self::De, Self::FrCa, Self::Es, Self::Ja];

    /// Language tag as written in config files and on the command line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::FrCa => "fr-CA",
            Self::Es => "es",
            Self::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a language tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "de" | "de-de" => Ok(Self::De),
            "fr" | "fr-ca" => Ok(Self::FrCa),
            "es" | "es-es" => Ok(Self::Es),
            "ja" | "ja-jp" => Ok(Self::Ja),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", Locale::En)]
    #[case("EN-GB", Locale::En)]
    #[case("de", Locale::De)]
    #[case("fr-CA", Locale::FrCa)]
    #[case("fr_ca", Locale::FrCa)]
    #[case("fr", Locale::FrCa)]
    #[case("es", Locale::Es)]
    #[case("ja", Locale::Ja)]
    fn parses_tags(#[case] tag: &str, #[case] expected: Locale) {
        assert_eq!(tag.parse::<Locale>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "pt-BR".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported locale 'pt-BR'");
    }

    #[test]
    fn serde_uses_tags() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.tag()));
            let back: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locale);
        }
        let alias: Locale = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(alias, Locale::FrCa);
    }
}
