use serde::Serialize;

use crate::enums::RegionId;

/// Static reference data for one anatomical region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrainRegion {
    pub id: RegionId,
    /// Message key of the localized display name.
    pub name_key: &'static str,
    /// Plain-English description of the functions the region governs.
    pub functions: &'static str,
    /// Multiplier applied to the overall impact level.
    pub sensitivity: f64,
}

/// The six-region table, in display order. Never mutated at runtime.
pub static BRAIN_REGIONS: [BrainRegion; 6] = [
    BrainRegion {
        id: RegionId::FrontalLobe,
        name_key: "region_frontalLobe",
        functions: "Judgment, planning, social conduct, and speech.",
        sensitivity: 1.2,
    },
    BrainRegion {
        id: RegionId::ParietalLobe,
        name_key: "region_parietalLobe",
        functions: "Sensory information, perception, and spatial awareness.",
        sensitivity: 0.9,
    },
    BrainRegion {
        id: RegionId::OccipitalLobe,
        name_key: "region_occipitalLobe",
        functions: "Visual processing and interpretation.",
        sensitivity: 0.8,
    },
    BrainRegion {
        id: RegionId::TemporalLobe,
        name_key: "region_temporalLobe",
        functions: "Auditory processing and language comprehension.",
        sensitivity: 1.0,
    },
    BrainRegion {
        id: RegionId::Cerebellum,
        name_key: "region_cerebellum",
        functions: "Coordination, balance, and motor control.",
        sensitivity: 1.5,
    },
    BrainRegion {
        id: RegionId::Brainstem,
        name_key: "region_brainstem",
        functions: "Controls vital functions like breathing, heart rate, and consciousness.",
        sensitivity: 2.0,
    },
];

impl BrainRegion {
    /// Look up a region in [`BRAIN_REGIONS`].
    #[must_use]
    pub fn get(id: RegionId) -> &'static Self {
        // The table holds exactly one row per `RegionId`, in declaration order.
        &BRAIN_REGIONS[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_has_one_row_per_region_in_order() {
        let ids: Vec<RegionId> = BRAIN_REGIONS.iter().map(|r| r.id).collect();
        let unique: HashSet<RegionId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn get_returns_matching_row() {
        for region in &BRAIN_REGIONS {
            assert_eq!(BrainRegion::get(region.id).id, region.id);
        }
    }

    #[test]
    fn sensitivities_are_within_calibrated_range() {
        for region in &BRAIN_REGIONS {
            assert!((0.8..=2.0).contains(&region.sensitivity), "{}", region.id);
        }
        assert!((BrainRegion::get(RegionId::Brainstem).sensitivity - 2.0).abs() < f64::EPSILON);
    }
}
