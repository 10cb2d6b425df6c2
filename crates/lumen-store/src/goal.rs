//! The persisted daily goal: a single JSON document, absent when unset.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lumen_core::entities::DailyGoal;

use crate::error::StoreError;
use crate::jsonl;

#[derive(Debug, Clone)]
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored goal, or `None` when none has been set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalFile` if the file does not hold a positive
    /// goal, or an I/O error.
    pub fn get(&self) -> Result<Option<DailyGoal>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        let stored: DailyGoal = serde_json::from_str(&raw).map_err(|source| StoreError::GoalFile {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(DailyGoal::new(stored.goal_grams)?))
    }

    /// Store `goal_grams` as the daily goal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` unless the goal is a positive number,
    /// or an I/O error.
    pub fn set(&self, goal_grams: f64) -> Result<DailyGoal, StoreError> {
        let goal = DailyGoal::new(goal_grams)?;
        jsonl::ensure_parent(&self.path)?;
        let json = serde_json::to_string_pretty(&goal).map_err(|e| anyhow::anyhow!(e))?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(goal_grams, path = %self.path.display(), "daily goal set");
        Ok(goal)
    }

    /// Remove the goal. Returns whether one was set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<bool, StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "daily goal cleared");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}
