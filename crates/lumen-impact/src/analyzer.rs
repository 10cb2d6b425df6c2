use std::collections::BTreeMap;

use lumen_core::entities::{BRAIN_REGIONS, BrainRegion, DrinkEntry, ImpactAnalysis, RegionImpact};
use lumen_core::enums::Severity;
use lumen_i18n::{Localizer, MessageKey};
use tracing::trace;

/// Upper bound for both the overall level and every region's impact.
pub const MAX_IMPACT: f64 = 5.0;

/// Log-scaled overall impact level for `total_grams`, before region scaling.
///
/// `ln(1 + g/10) * 1.5`, capped at [`MAX_IMPACT`]. Zero or negative totals
/// yield 0.
#[must_use]
pub fn overall_impact(total_grams: f64) -> f64 {
    if total_grams > 0.0 {
        ((total_grams / 10.0).ln_1p() * 1.5).min(MAX_IMPACT)
    } else {
        0.0
    }
}

/// Analyze `drinks` against the built-in region table.
///
/// Input order does not matter. The result always holds all six regions.
pub fn analyze_consumption(drinks: &[DrinkEntry], localizer: &impl Localizer) -> ImpactAnalysis {
    analyze_with_regions(drinks, &BRAIN_REGIONS, localizer)
}

/// Analyze `drinks` against an explicit region table.
pub fn analyze_with_regions(
    drinks: &[DrinkEntry],
    regions: &[BrainRegion],
    localizer: &impl Localizer,
) -> ImpactAnalysis {
    let total_grams = session_total(drinks);
    let overall = overall_impact(total_grams);
    trace!(drinks = drinks.len(), total_grams, overall, "analyzing consumption");

    let regions = regions
        .iter()
        .map(|region| (region.id, region_impact(region, overall, localizer)))
        .collect::<BTreeMap<_, _>>();

    ImpactAnalysis {
        total_grams,
        overall_impact: overall,
        regions,
    }
}

/// Sum of grams, added in ascending order so every permutation of `drinks`
/// produces the same bits.
fn session_total(drinks: &[DrinkEntry]) -> f64 {
    let mut grams: Vec<f64> = drinks.iter().map(|d| d.alcohol_grams).collect();
    grams.sort_by(f64::total_cmp);
    grams.iter().sum()
}

fn region_impact(region: &BrainRegion, overall: f64, localizer: &impl Localizer) -> RegionImpact {
    let impact = (overall * region.sensitivity).min(MAX_IMPACT);
    let severity = Severity::classify(impact);
    let functions = region.functions.to_lowercase();
    let effect_text = match severity {
        Severity::Low => localizer.text(MessageKey::ImpactNominal, &[]),
        Severity::Moderate | Severity::High => {
            localizer.text(MessageKey::impact_effect(severity), &[&functions])
        }
    };

    RegionImpact {
        region: region.id,
        name_key: region.name_key.to_string(),
        impact,
        severity,
        impact_word: localizer.text(MessageKey::impact_word(severity), &[]),
        effect_text,
        color: severity.color(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use lumen_core::enums::{DrinkKind, ImpactColor, RegionId};
    use lumen_i18n::{Locale, Translator};
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(grams: f64) -> DrinkEntry {
        DrinkEntry {
            id: "drk-00000000".into(),
            kind: DrinkKind::Beer,
            volume_ml: 0.0,
            abv_percent: 0.0,
            alcohol_grams: grams,
            timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_input_is_all_low_and_nominal() {
        let analysis = analyze_consumption(&[], &Translator::default());
        assert_eq!(analysis.regions.len(), 6);
        assert!(analysis.total_grams.abs() < f64::EPSILON);
        for region in analysis.regions.values() {
            assert!(region.impact.abs() < f64::EPSILON);
            assert_eq!(region.severity, Severity::Low);
            assert_eq!(region.color, ImpactColor::Green);
            assert_eq!(region.impact_word, "Low");
            assert_eq!(region.effect_text, "Nominal impact at this level.");
        }
    }

    #[test]
    fn us_can_of_beer_reaches_moderate_in_brainstem_only() {
        let grams = lumen_core::alcohol::alcohol_grams(355.0, 5.0);
        let analysis = analyze_consumption(&[entry(grams)], &Translator::default());

        assert!((analysis.overall_impact - 1.3135).abs() < 1e-3);
        let brainstem = analysis.region(RegionId::Brainstem).unwrap();
        assert!((brainstem.impact - 2.627).abs() < 1e-3);
        assert_eq!(brainstem.severity, Severity::Moderate);
        assert_eq!(
            brainstem.effect_text,
            "Noticeable impairment to controls vital functions like breathing, heart rate, and consciousness."
        );

        let cerebellum = analysis.region(RegionId::Cerebellum).unwrap();
        assert_eq!(cerebellum.severity, Severity::Moderate);
        let occipital = analysis.region(RegionId::OccipitalLobe).unwrap();
        assert_eq!(occipital.severity, Severity::Low);
    }

    #[test]
    fn permuted_session_is_identical() {
        let t = Translator::default();
        let forward = [entry(0.1), entry(0.2), entry(0.3)];
        let reversed = [entry(0.3), entry(0.2), entry(0.1)];
        let shuffled = [entry(0.2), entry(0.3), entry(0.1)];

        let expected = analyze_consumption(&forward, &t);
        assert_eq!(analyze_consumption(&reversed, &t), expected);
        assert_eq!(analyze_consumption(&shuffled, &t), expected);
    }

    #[test]
    fn overall_exactly_at_low_boundary() {
        // 10 * (e - 1) grams puts the overall level on 1.5.
        let grams = 17.182_818_284_590_45;
        let analysis = analyze_consumption(&[entry(grams)], &Translator::default());
        assert!((analysis.overall_impact - 1.5).abs() < 1e-12);

        let temporal = analysis.region(RegionId::TemporalLobe).unwrap();
        assert!((temporal.impact - 1.5).abs() < 1e-12);
        assert_eq!(temporal.severity, Severity::Low);
        assert_eq!(temporal.effect_text, "Nominal impact at this level.");
        assert_eq!(
            analysis.region(RegionId::FrontalLobe).unwrap().severity,
            Severity::Moderate
        );
        assert_eq!(
            analysis.region(RegionId::ParietalLobe).unwrap().severity,
            Severity::Low
        );
    }

    #[test]
    fn overall_exactly_at_moderate_boundary() {
        // 10 * (e^(7/3) - 1) grams puts the overall level on 3.5.
        let grams = 93.122_585_013_257_66;
        let analysis = analyze_consumption(&[entry(grams)], &Translator::default());
        assert!((analysis.overall_impact - 3.5).abs() < 1e-12);

        let temporal = analysis.region(RegionId::TemporalLobe).unwrap();
        assert_eq!(temporal.severity, Severity::Moderate);
        assert_eq!(temporal.color, ImpactColor::Yellow);
        assert_eq!(
            analysis.region(RegionId::FrontalLobe).unwrap().severity,
            Severity::High
        );
        let cerebellum = analysis.region(RegionId::Cerebellum).unwrap();
        assert!((cerebellum.impact - MAX_IMPACT).abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_session_saturates() {
        let drinks: Vec<DrinkEntry> = (0..100)
            .map(|_| entry(lumen_core::alcohol::alcohol_grams(1000.0, 99.0)))
            .collect();
        let analysis = analyze_consumption(&drinks, &Translator::default());
        assert!((analysis.overall_impact - MAX_IMPACT).abs() < f64::EPSILON);
        for region in analysis.regions.values() {
            assert!(region.impact <= MAX_IMPACT);
        }
        let occipital = analysis.region(RegionId::OccipitalLobe).unwrap();
        assert!((occipital.impact - 4.0).abs() < 1e-9);
        assert_eq!(occipital.severity, Severity::High);
        assert_eq!(occipital.color, ImpactColor::Red);
    }

    #[test]
    fn text_follows_localizer() {
        let analysis = analyze_consumption(&[entry(200.0)], &Translator::new(Locale::De));
        let brainstem = analysis.region(RegionId::Brainstem).unwrap();
        assert_eq!(brainstem.impact_word, "Hoch");
        assert!(brainstem.effect_text.starts_with("Erhebliche Störung von "));
        assert_eq!(brainstem.name_key, "region_brainstem");
    }

    #[test]
    fn overall_impact_of_zero_or_negative_is_zero() {
        assert!(overall_impact(0.0).abs() < f64::EPSILON);
        assert!(overall_impact(-5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_region_table_is_respected() {
        let only = [BRAIN_REGIONS[0]];
        let analysis = analyze_with_regions(&[entry(10.0)], &only, &Translator::default());
        assert_eq!(analysis.regions.len(), 1);
        assert!(analysis.region(RegionId::FrontalLobe).is_some());
    }
}
