use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ImpactColor, RegionId, Severity};

/// Analyzer output for one region.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RegionImpact {
    pub region: RegionId,
    /// Message key of the region's display name.
    pub name_key: String,
    /// Impact score in `[0, 5]`.
    pub impact: f64,
    pub severity: Severity,
    /// Localized severity word ("Low", "Moderate", "High").
    pub impact_word: String,
    /// Localized effect description.
    pub effect_text: String,
    pub color: ImpactColor,
}

/// Analyzer output over the whole region table.
///
/// Always holds all six regions. Created fresh on every analysis; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImpactAnalysis {
    /// Session-cumulative grams of pure alcohol.
    pub total_grams: f64,
    /// Log-scaled overall level in `[0, 5]`, before region scaling.
    pub overall_impact: f64,
    pub regions: BTreeMap<RegionId, RegionImpact>,
}

impl ImpactAnalysis {
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&RegionImpact> {
        self.regions.get(&id)
    }

    /// Region with the largest impact. Ties go to the earlier region in table order.
    #[must_use]
    pub fn highest(&self) -> Option<&RegionImpact> {
        self.regions
            .values()
            .fold(None, |best: Option<&RegionImpact>, candidate| match best {
                Some(current) if current.impact >= candidate.impact => Some(current),
                _ => Some(candidate),
            })
    }
}
