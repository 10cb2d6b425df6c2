//! User-defined quick-add servings, one JSONL record each.

use std::path::{Path, PathBuf};

use lumen_core::entities::{CustomQuickAdd, NewQuickAdd};

use crate::error::StoreError;
use crate::jsonl;

/// Custom quick-adds persisted in a single `.jsonl` file, in creation order.
///
/// Labels are unique, compared case-insensitively, so a label alone
/// identifies the serving to log.
#[derive(Debug, Clone)]
pub struct QuickAddStore {
    path: PathBuf,
}

impl QuickAddStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every quick-add in creation order. A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Corrupt` if the file cannot
    /// be read.
    pub fn list(&self) -> Result<Vec<CustomQuickAdd>, StoreError> {
        jsonl::load(&self.path)
    }

    /// Look a quick-add up by id or by label.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be read.
    pub fn find(&self, id_or_label: &str) -> Result<Option<CustomQuickAdd>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|q| q.id == id_or_label || q.matches_label(id_or_label)))
    }

    /// Validate and save a new quick-add.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` for a bad serving,
    /// `StoreError::DuplicateLabel` if the label is taken, or an I/O error.
    pub fn add(&self, new: NewQuickAdd) -> Result<CustomQuickAdd, StoreError> {
        let quick = new.into_quick_add()?;
        let existing = self.list()?;
        ensure_label_free(&existing, &quick)?;
        jsonl::append(&self.path, &quick)?;
        tracing::debug!(id = %quick.id, label = %quick.label, "quick-add saved");
        Ok(quick)
    }

    /// Replace the quick-add with `id`, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, plus the errors of
    /// [`Self::add`].
    pub fn update(&self, id: &str, new: NewQuickAdd) -> Result<CustomQuickAdd, StoreError> {
        let updated = new.into_quick_add_with_id(id)?;
        let mut all = self.list()?;
        let index = all
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        ensure_label_free(&all, &updated)?;
        all[index] = updated.clone();
        jsonl::rewrite(&self.path, &all)?;
        tracing::debug!(id, label = %updated.label, "quick-add updated");
        Ok(updated)
    }

    /// Delete the quick-add with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or an I/O error.
    pub fn remove(&self, id: &str) -> Result<CustomQuickAdd, StoreError> {
        let mut all = self.list()?;
        let index = all
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = all.remove(index);
        jsonl::rewrite(&self.path, &all)?;
        tracing::debug!(id, "quick-add removed");
        Ok(removed)
    }
}

fn ensure_label_free(existing: &[CustomQuickAdd], candidate: &CustomQuickAdd) -> Result<(), StoreError> {
    if existing
        .iter()
        .any(|q| q.id != candidate.id && q.matches_label(&candidate.label))
    {
        return Err(StoreError::DuplicateLabel(candidate.label.clone()));
    }
    Ok(())
}
