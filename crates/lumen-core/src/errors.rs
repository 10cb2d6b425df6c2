//! Cross-cutting error types for LumenDose.
//!
//! Domain-specific errors (`StoreError`, `ConfigError`, `CoachError`) live in
//! their respective crates. The calculator and analyzer are infallible; this
//! enum covers input validation and entity lookups.

use thiserror::Error;

/// Errors that can be raised by any LumenDose crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A drink field is outside its accepted domain.
    #[error("Invalid {field}: {reason}")]
    OutOfDomain { field: &'static str, reason: String },

    /// Data failed validation (unknown enum value, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
