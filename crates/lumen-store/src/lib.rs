//! # lumen-store
//!
//! Local persistence for logged drinks, custom quick-adds and the daily goal.
//!
//! - [`DrinkJournal`]: append-only JSONL file, one `DrinkEntry` per line
//! - [`LiveLog`]: in-memory list that publishes snapshots to subscribers
//! - [`DrinkLog`]: both together; every mutation hits the journal first and
//!   is then published
//! - [`QuickAddStore`]: user-defined servings with unique labels
//! - [`GoalStore`]: the daily goal, set or cleared

pub mod error;
pub mod goal;
pub mod journal;
mod jsonl;
pub mod live;
pub mod quick_adds;
pub mod service;

pub use error::StoreError;
pub use goal::GoalStore;
pub use journal::DrinkJournal;
pub use live::{LiveLog, Snapshot, Subscription};
pub use quick_adds::QuickAddStore;
pub use service::DrinkLog;
