//! ID prefixes and generation.
//!
//! IDs look like `drk-a3f8b2c1`: a three-letter prefix, a dash, and eight
//! lowercase hex characters from the OS entropy source.

use crate::errors::CoreError;

/// Prefix for logged drinks.
pub const PREFIX_DRINK: &str = "drk";

/// Prefix for user-defined quick-add servings.
pub const PREFIX_QUICK_ADD: &str = "qad";

/// Every prefix in use.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_DRINK, PREFIX_QUICK_ADD];

/// Generate a prefixed random ID.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS entropy source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| anyhow::anyhow!("failed to read entropy for id: {e}"))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
