mod goal;
mod presets;

pub use goal::GoalCommands;
pub use presets::PresetCommands;
