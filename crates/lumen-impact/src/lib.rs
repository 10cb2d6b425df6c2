//! # lumen-impact
//!
//! Pure computations over a list of logged drinks:
//! - [`analyze_consumption`]: per-region impact scores with localized text
//! - [`DailySummary`]: today's total against an optional daily goal
//! - [`weekly_trends`]: drink counts bucketed by week
//! - [`SessionStats`]: pacing and composition of a drinking session
//!
//! Nothing here does I/O or fails. Localization is injected through
//! [`lumen_i18n::Localizer`].

pub mod analyzer;
pub mod pacing;
pub mod summary;
pub mod trends;

pub use analyzer::{analyze_consumption, analyze_with_regions, overall_impact};
pub use pacing::SessionStats;
pub use summary::DailySummary;
pub use trends::{WeeklyTrend, weekly_trends};
