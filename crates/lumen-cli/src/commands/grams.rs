use lumen_config::LumenConfig;
use lumen_core::alcohol::alcohol_grams;
use lumen_core::entities::NewDrink;
use lumen_core::enums::DrinkKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GramsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct GramsResponse {
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub alcohol_grams: f64,
}

/// Handle `lumen grams`.
pub fn handle(args: &GramsArgs, config: &LumenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = compute(args, config)?;
    output(&response, flags.format)
}

fn compute(args: &GramsArgs, config: &LumenConfig) -> anyhow::Result<GramsResponse> {
    // Kind and time do not affect the result; validation only looks at volume and ABV.
    let drink = NewDrink::new(DrinkKind::Custom, args.volume, args.abv, chrono::Utc::now())
        .validate(config.general.input_policy)?;
    Ok(GramsResponse {
        volume_ml: drink.volume_ml,
        abv_percent: drink.abv_percent,
        alcohol_grams: alcohol_grams(drink.volume_ml, drink.abv_percent),
    })
}

#[cfg(test)]
mod tests {
    use lumen_core::enums::InputPolicy;

    use super::*;

    fn args(volume: f64, abv: f64) -> GramsArgs {
        GramsArgs { volume, abv }
    }

    #[test]
    fn us_can_of_beer() {
        let response = compute(&args(355.0, 5.0), &LumenConfig::default()).unwrap();
        assert!((response.alcohol_grams - 14.004_75).abs() < 1e-9);
    }

    #[test]
    fn negative_volume_rejected_by_default() {
        let err = compute(&args(-10.0, 5.0), &LumenConfig::default()).unwrap_err();
        assert!(err.to_string().contains("volume_ml"));
    }

    #[test]
    fn clamp_policy_clamps() {
        let mut config = LumenConfig::default();
        config.general.input_policy = InputPolicy::Clamp;
        let response = compute(&args(100.0, 140.0), &config).unwrap();
        assert!((response.abv_percent - 100.0).abs() < f64::EPSILON);
        assert!((response.alcohol_grams - 78.9).abs() < 1e-9);
    }
}
