use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A persisted daily alcohol goal, in grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DailyGoal {
    pub goal_grams: f64,
}

impl DailyGoal {
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfDomain`] unless `goal_grams` is a finite
    /// number greater than zero.
    pub fn new(goal_grams: f64) -> Result<Self, CoreError> {
        if goal_grams.is_finite() && goal_grams > 0.0 {
            Ok(Self { goal_grams })
        } else {
            Err(CoreError::OutOfDomain {
                field: "goal_grams",
                reason: format!("{goal_grams} is not a positive number"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_goal_is_accepted() {
        assert!((DailyGoal::new(20.0).unwrap().goal_grams - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(DailyGoal::new(bad).is_err(), "{bad} should be rejected");
        }
    }
}
