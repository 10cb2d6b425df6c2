//! Drink kinds, brain regions, severity tiers, markets, and input policies.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the same representation outside serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DrinkKind
// ---------------------------------------------------------------------------

/// Beverage category of a logged drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DrinkKind {
    Beer,
    Wine,
    Spirit,
    Liqueur,
    Sake,
    Soju,
    Cider,
    Cocktail,
    Custom,
}

impl DrinkKind {
    pub const ALL: [Self; 9] = [
        Self::Beer,
        Self::Wine,
        Self::Spirit,
        Self::Liqueur,
        Self::Sake,
        Self::Soju,
        Self::Cider,
        Self::Cocktail,
        Self::Custom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beer => "beer",
            Self::Wine => "wine",
            Self::Spirit => "spirit",
            Self::Liqueur => "liqueur",
            Self::Sake => "sake",
            Self::Soju => "soju",
            Self::Cider => "cider",
            Self::Cocktail => "cocktail",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown drink kind '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// RegionId
// ---------------------------------------------------------------------------

/// One of the six anatomical regions of the impact model.
///
/// Declaration order is the table order used for iteration and tie-breaking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    FrontalLobe,
    ParietalLobe,
    OccipitalLobe,
    TemporalLobe,
    Cerebellum,
    Brainstem,
}

impl RegionId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontalLobe => "frontal_lobe",
            Self::ParietalLobe => "parietal_lobe",
            Self::OccipitalLobe => "occipital_lobe",
            Self::TemporalLobe => "temporal_lobe",
            Self::Cerebellum => "cerebellum",
            Self::Brainstem => "brainstem",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Upper bound (inclusive) of the low tier.
pub const LOW_CEILING: f64 = 1.5;

/// Upper bound (inclusive) of the moderate tier.
pub const MODERATE_CEILING: f64 = 3.5;

/// Severity bucket of a region's impact score.
///
/// ```text
/// impact <= 1.5        → low
/// 1.5 < impact <= 3.5  → moderate
/// impact > 3.5         → high
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Bucket an impact score. Boundaries are inclusive on the low side.
    #[must_use]
    pub fn classify(impact: f64) -> Self {
        if impact > MODERATE_CEILING {
            Self::High
        } else if impact > LOW_CEILING {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn color(self) -> ImpactColor {
        match self {
            Self::Low => ImpactColor::Green,
            Self::Moderate => ImpactColor::Yellow,
            Self::High => ImpactColor::Red,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ImpactColor
// ---------------------------------------------------------------------------

/// Display color tied to a severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImpactColor {
    Green,
    Yellow,
    Red,
}

impl ImpactColor {
    /// Style token consumed by the presentation layer.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Green => "text-green-400",
            Self::Yellow => "text-yellow-400",
            Self::Red => "text-red-500",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for ImpactColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// Market whose serving sizes drive the quick-add presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    #[default]
    Uk,
    Us,
}

impl Market {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uk => "uk",
            Self::Us => "us",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" => Ok(Self::Uk),
            "us" => Ok(Self::Us),
            other => Err(CoreError::Validation(format!("unknown market '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// InputPolicy
// ---------------------------------------------------------------------------

/// What to do with negative or out-of-range volume/ABV before computing grams.
///
/// Non-finite values are rejected under both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Return a validation error naming the offending field.
    #[default]
    Reject,
    /// Clamp volume to `>= 0` and ABV to `0..=100`.
    Clamp,
}

impl InputPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
