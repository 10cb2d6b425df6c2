use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alcohol::alcohol_grams;
use crate::enums::{DrinkKind, InputPolicy};
use crate::errors::CoreError;
use crate::ids::{PREFIX_DRINK, generate_id};

/// One logged beverage.
///
/// `alcohol_grams` is derived from volume and ABV once, when the entry is
/// created, and is never recomputed downstream. Entries are immutable; the
/// only mutation a log supports is removal by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DrinkEntry {
    pub id: String,
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub alcohol_grams: f64,
    pub timestamp: DateTime<Utc>,
}

/// A drink as submitted by the user, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewDrink {
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub timestamp: DateTime<Utc>,
}

impl NewDrink {
    #[must_use]
    pub const fn new(
        kind: DrinkKind,
        volume_ml: f64,
        abv_percent: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            volume_ml,
            abv_percent,
            timestamp,
        }
    }

    /// Apply `policy` to volume and ABV.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfDomain`] for non-finite values under any
    /// policy, and for negative volume, negative ABV, or ABV above 100 under
    /// [`InputPolicy::Reject`].
    pub fn validate(self, policy: InputPolicy) -> Result<Self, CoreError> {
        let volume_ml = check_field("volume_ml", self.volume_ml, f64::INFINITY, policy)?;
        let abv_percent = check_field("abv_percent", self.abv_percent, 100.0, policy)?;
        Ok(Self {
            volume_ml,
            abv_percent,
            ..self
        })
    }

    /// Validate and turn into an immutable entry with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Self::validate`], or
    /// [`CoreError::Other`] if no ID could be generated.
    pub fn into_entry(self, policy: InputPolicy) -> Result<DrinkEntry, CoreError> {
        let id = generate_id(PREFIX_DRINK)?;
        self.into_entry_with_id(id, policy)
    }

    /// Same as [`Self::into_entry`] with a caller-supplied ID.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Self::validate`].
    pub fn into_entry_with_id(
        self,
        id: impl Into<String>,
        policy: InputPolicy,
    ) -> Result<DrinkEntry, CoreError> {
        let valid = self.validate(policy)?;
        Ok(DrinkEntry {
            id: id.into(),
            kind: valid.kind,
            volume_ml: valid.volume_ml,
            abv_percent: valid.abv_percent,
            alcohol_grams: alcohol_grams(valid.volume_ml, valid.abv_percent),
            timestamp: valid.timestamp,
        })
    }
}

fn check_field(
    field: &'static str,
    value: f64,
    max: f64,
    policy: InputPolicy,
) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::OutOfDomain {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    match policy {
        InputPolicy::Clamp => Ok(value.clamp(0.0, max)),
        InputPolicy::Reject if value < 0.0 => Err(CoreError::OutOfDomain {
            field,
            reason: format!("{value} is negative"),
        }),
        InputPolicy::Reject if value > max => Err(CoreError::OutOfDomain {
            field,
            reason: format!("{value} exceeds {max}"),
        }),
        InputPolicy::Reject => Ok(value),
    }
}
