//! Serde roundtrip and JsonSchema validation tests for persisted and emitted types.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use lumen_core::entities::*;
use lumen_core::enums::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

// Float fields use binary-exact values so the serde roundtrip is bit-identical.
macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    drink_entry_roundtrip,
    DrinkEntry,
    DrinkEntry {
        id: "drk-a3f8b2c1".into(),
        kind: DrinkKind::Beer,
        volume_ml: 500.0,
        abv_percent: 4.5,
        alcohol_grams: 17.75,
        timestamp: Utc.with_ymd_and_hms(2026, 2, 8, 21, 30, 0).unwrap(),
    }
);

roundtrip_and_validate!(
    new_drink_roundtrip,
    NewDrink,
    NewDrink {
        kind: DrinkKind::Soju,
        volume_ml: 50.0,
        abv_percent: 16.5,
        timestamp: Utc.with_ymd_and_hms(2026, 2, 8, 22, 0, 0).unwrap(),
    }
);

roundtrip_and_validate!(
    custom_quick_add_roundtrip,
    CustomQuickAdd,
    CustomQuickAdd {
        id: "qad-0b1c2d3e".into(),
        label: "Tallboy".into(),
        kind: DrinkKind::Beer,
        volume_ml: 473.0,
        abv_percent: 5.5,
    }
);

roundtrip_and_validate!(
    daily_goal_roundtrip,
    DailyGoal,
    DailyGoal { goal_grams: 24.5 }
);

roundtrip_and_validate!(
    region_impact_roundtrip,
    RegionImpact,
    RegionImpact {
        region: RegionId::Cerebellum,
        name_key: "region_cerebellum".into(),
        impact: 2.25,
        severity: Severity::Moderate,
        impact_word: "Moderate".into(),
        effect_text: "Noticeable impairment to coordination, balance, and motor control.".into(),
        color: ImpactColor::Yellow,
    }
);

roundtrip_and_validate!(
    impact_analysis_roundtrip,
    ImpactAnalysis,
    ImpactAnalysis {
        total_grams: 0.0,
        overall_impact: 0.0,
        regions: BRAIN_REGIONS
            .iter()
            .map(|region| {
                (
                    region.id,
                    RegionImpact {
                        region: region.id,
                        name_key: region.name_key.into(),
                        impact: 0.0,
                        severity: Severity::Low,
                        impact_word: "Low".into(),
                        effect_text: "Nominal impact at this level.".into(),
                        color: ImpactColor::Green,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>(),
    }
);

#[test]
fn drink_entry_json_uses_snake_case_fields() {
    let entry = DrinkEntry {
        id: "drk-00000001".into(),
        kind: DrinkKind::Cocktail,
        volume_ml: 150.0,
        abv_percent: 20.0,
        alcohol_grams: 23.67,
        timestamp: Utc.with_ymd_and_hms(2026, 2, 8, 21, 30, 0).unwrap(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["kind"], "cocktail");
    assert!(value.get("alcohol_grams").is_some());
    assert!(value.get("volume_ml").is_some());
}

#[test]
fn analysis_regions_serialize_keyed_by_region_id() {
    let region = BrainRegion::get(RegionId::Brainstem);
    let mut regions = BTreeMap::new();
    regions.insert(
        region.id,
        RegionImpact {
            region: region.id,
            name_key: region.name_key.into(),
            impact: 4.0,
            severity: Severity::High,
            impact_word: "High".into(),
            effect_text: "x".into(),
            color: ImpactColor::Red,
        },
    );
    let analysis = ImpactAnalysis {
        total_grams: 64.0,
        overall_impact: 2.0,
        regions,
    };
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["regions"]["brainstem"]["severity"], "high");
}
