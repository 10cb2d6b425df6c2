pub mod analyze;
pub mod coach;
pub mod dispatch;
pub mod goal;
pub mod grams;
pub mod list;
pub mod log;
pub mod presets;
pub mod remove;
pub mod shared;
pub mod summary;
pub mod trends;
