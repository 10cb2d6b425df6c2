//! Journal-backed live log.

use lumen_core::entities::{DrinkEntry, NewDrink};
use lumen_core::enums::InputPolicy;

use crate::error::StoreError;
use crate::journal::DrinkJournal;
use crate::live::{LiveLog, Snapshot, Subscription};

/// The user's drink log: persisted in a [`DrinkJournal`], observed through a
/// [`LiveLog`].
///
/// Every mutation is written to the journal before it is published, so
/// subscribers never see an entry that is not on disk.
#[derive(Debug, Clone)]
pub struct DrinkLog {
    journal: DrinkJournal,
    live: LiveLog,
}

impl DrinkLog {
    /// Load the journal and seed the live log from it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the journal cannot be read.
    pub fn open(journal: DrinkJournal) -> Result<Self, StoreError> {
        let entries = journal.load()?;
        tracing::debug!(count = entries.len(), path = %journal.path().display(), "drink log opened");
        Ok(Self {
            journal,
            live: LiveLog::new(entries),
        })
    }

    #[must_use]
    pub const fn journal(&self) -> &DrinkJournal {
        &self.journal
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> Snapshot {
        self.live.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        self.live.subscribe()
    }

    /// Validate `drink` under `policy`, persist it, and publish it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if validation fails, or
    /// `StoreError::Io` if the append fails.
    pub fn record(&self, drink: NewDrink, policy: InputPolicy) -> Result<DrinkEntry, StoreError> {
        let entry = drink.into_entry(policy)?;
        self.journal.append(&entry)?;
        self.live.add(entry.clone());
        Ok(entry)
    }

    /// Remove by id from both journal and live view.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has this id.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        if !self.journal.remove(id)? {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.live.remove(id);
        Ok(())
    }

    /// Re-read the journal, picking up writes from other processes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the journal cannot be read.
    pub fn reload(&self) -> Result<(), StoreError> {
        self.live.replace_all(self.journal.load()?);
        Ok(())
    }
}
