//! Error types for lumen-store.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a store file failed.
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not a valid record.
    #[error("corrupt record at {path}:{line}: {source}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The submitted drink, quick-add or goal failed validation.
    #[error(transparent)]
    Invalid(#[from] lumen_core::errors::CoreError),

    /// No record with this id exists.
    #[error("not found: {0}")]
    NotFound(String),

    /// Another quick-add already uses this label.
    #[error("quick-add label already in use: {0}")]
    DuplicateLabel(String),

    /// The goal file does not hold a goal.
    #[error("invalid goal file {path}: {source}")]
    GoalFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
