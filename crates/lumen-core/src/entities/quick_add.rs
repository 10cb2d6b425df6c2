use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::NewDrink;
use crate::enums::DrinkKind;
use crate::errors::CoreError;
use crate::ids::{PREFIX_QUICK_ADD, generate_id};

/// A user-defined serving, logged by label like a market preset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CustomQuickAdd {
    pub id: String,
    pub label: String,
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
}

impl CustomQuickAdd {
    /// Case-insensitive label comparison, ignoring surrounding whitespace.
    #[must_use]
    pub fn matches_label(&self, label: &str) -> bool {
        self.label.trim().eq_ignore_ascii_case(label.trim())
    }

    /// The drink this serving logs at `timestamp`.
    #[must_use]
    pub fn to_new_drink(&self, timestamp: DateTime<Utc>) -> NewDrink {
        NewDrink::new(self.kind, self.volume_ml, self.abv_percent, timestamp)
    }
}

/// A custom quick-add as submitted, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewQuickAdd {
    pub label: String,
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub abv_percent: f64,
}

impl NewQuickAdd {
    #[must_use]
    pub fn new(label: impl Into<String>, kind: DrinkKind, volume_ml: f64, abv_percent: f64) -> Self {
        Self {
            label: label.into(),
            kind,
            volume_ml,
            abv_percent,
        }
    }

    /// Trim the label and check the serving.
    ///
    /// Quick-adds are always strict: the label must be non-empty, volume
    /// positive, ABV within `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfDomain`] naming the first offending field.
    pub fn validate(self) -> Result<Self, CoreError> {
        let label = self.label.trim().to_string();
        if label.is_empty() {
            return Err(CoreError::OutOfDomain {
                field: "label",
                reason: "must not be empty".into(),
            });
        }
        if !self.volume_ml.is_finite() || self.volume_ml <= 0.0 {
            return Err(CoreError::OutOfDomain {
                field: "volume_ml",
                reason: format!("{} is not a positive volume", self.volume_ml),
            });
        }
        if !(0.0..=100.0).contains(&self.abv_percent) {
            return Err(CoreError::OutOfDomain {
                field: "abv_percent",
                reason: format!("{} is outside 0..=100", self.abv_percent),
            });
        }
        Ok(Self { label, ..self })
    }

    /// Validate and assign a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Self::validate`], or
    /// [`CoreError::Other`] if no ID could be generated.
    pub fn into_quick_add(self) -> Result<CustomQuickAdd, CoreError> {
        let id = generate_id(PREFIX_QUICK_ADD)?;
        self.into_quick_add_with_id(id)
    }

    /// Validate and keep `id`; used when editing an existing quick-add.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Self::validate`].
    pub fn into_quick_add_with_id(self, id: impl Into<String>) -> Result<CustomQuickAdd, CoreError> {
        let valid = self.validate()?;
        Ok(CustomQuickAdd {
            id: id.into(),
            label: valid.label,
            kind: valid.kind,
            volume_ml: valid.volume_ml,
            abv_percent: valid.abv_percent,
        })
    }
}
