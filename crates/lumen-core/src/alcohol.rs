//! Volume and strength to grams of pure ethanol.

/// Density of ethanol in grams per millilitre.
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

/// Grams of pure alcohol in `volume_ml` of a beverage at `abv_percent`.
///
/// `volume_ml * (abv_percent / 100) * 0.789`. Total over its domain: callers
/// reject or clamp out-of-domain input first (see [`crate::enums::InputPolicy`]).
#[must_use]
pub fn alcohol_grams(volume_ml: f64, abv_percent: f64) -> f64 {
    volume_ml * (abv_percent / 100.0) * ETHANOL_DENSITY_G_PER_ML
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn us_beer_can_is_fourteen_grams() {
        let grams = alcohol_grams(355.0, 5.0);
        assert!((grams - 14.004_75).abs() < EPS, "got {grams}");
        assert_eq!(format!("{grams:.2}"), "14.00");
    }

    #[rstest]
    #[case(0.0, 40.0)]
    #[case(0.0, 0.0)]
    #[case(500.0, 0.0)]
    #[case(1_000_000.0, 0.0)]
    fn zero_volume_or_abv_is_zero(#[case] volume: f64, #[case] abv: f64) {
        assert!(alcohol_grams(volume, abv).abs() < EPS);
    }

    #[rstest]
    #[case(568.0, 4.5, 20.166_84)]
    #[case(175.0, 13.0, 17.949_75)]
    #[case(25.0, 40.0, 7.89)]
    #[case(44.0, 40.0, 13.886_4)]
    fn matches_formula_for_presets(#[case] volume: f64, #[case] abv: f64, #[case] expected: f64) {
        assert!((alcohol_grams(volume, abv) - expected).abs() < 1e-6);
    }

    #[test]
    fn very_large_inputs_stay_finite() {
        let grams = alcohol_grams(1.0e9, 100.0);
        assert!(grams.is_finite());
        assert!((grams - 7.89e8).abs() < 1.0);
    }

    #[test]
    fn negative_input_propagates_sign() {
        // The calculator itself does not police its domain.
        assert!(alcohol_grams(-100.0, 5.0) < 0.0);
    }
}
