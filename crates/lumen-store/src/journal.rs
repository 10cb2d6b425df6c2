//! JSONL drink journal.
//!
//! Entries are appended with `serde_jsonlines::append_json_lines`, one record
//! per line. Removal rewrites the file without the removed line.

use std::path::{Path, PathBuf};

use lumen_core::entities::DrinkEntry;

use crate::error::StoreError;
use crate::jsonl;

/// Drink entries persisted in a single `.jsonl` file.
#[derive(Debug, Clone)]
pub struct DrinkJournal {
    path: PathBuf,
}

impl DrinkJournal {
    /// Point a journal at `path`. Nothing is touched on disk until the first
    /// write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the parent directory cannot be created or
    /// the write fails.
    pub fn append(&self, entry: &DrinkEntry) -> Result<(), StoreError> {
        jsonl::append(&self.path, entry)?;
        tracing::debug!(id = %entry.id, path = %self.path.display(), "journal append");
        Ok(())
    }

    /// Read every entry in file order. A missing file is an empty journal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be opened and
    /// `StoreError::Corrupt` for a line that does not parse.
    pub fn load(&self) -> Result<Vec<DrinkEntry>, StoreError> {
        jsonl::load(&self.path)
    }

    /// Find one entry by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this id.
    pub fn get(&self, id: &str) -> Result<DrinkEntry, StoreError> {
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Remove the entry with `id`. Returns whether it existed; the file is
    /// left untouched when it did not.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the journal cannot be read or rewritten.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let entries = self.load()?;
        let before = entries.len();
        let kept: Vec<DrinkEntry> = entries.into_iter().filter(|e| e.id != id).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.rewrite(&kept)?;
        tracing::debug!(id, path = %self.path.display(), "journal remove");
        Ok(true)
    }

    /// Replace the whole journal with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the write fails.
    pub fn rewrite(&self, entries: &[DrinkEntry]) -> Result<(), StoreError> {
        jsonl::rewrite(&self.path, entries)
    }
}
