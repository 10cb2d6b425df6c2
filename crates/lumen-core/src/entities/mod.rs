//! Entity structs for LumenDose domain objects.
//!
//! Drink entries, custom quick-adds and the daily goal are user data; the
//! region table is static reference data; impact results are derived on
//! demand and never stored.

mod drink;
mod goal;
mod impact;
mod quick_add;
mod region;

pub use drink::{DrinkEntry, NewDrink};
pub use goal::DailyGoal;
pub use impact::{ImpactAnalysis, RegionImpact};
pub use quick_add::{CustomQuickAdd, NewQuickAdd};
pub use region::{BRAIN_REGIONS, BrainRegion};
