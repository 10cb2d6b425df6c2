//! In-memory drink list with snapshot subscriptions.
//!
//! Backed by a `tokio::sync::watch` channel: writers replace the current
//! snapshot, readers observe the latest one. Intermediate snapshots may be
//! skipped by a slow subscriber; the one it sees is always complete.

use std::sync::Arc;

use lumen_core::entities::DrinkEntry;
use tokio::sync::watch;

/// An immutable view of the log, newest entry first.
pub type Snapshot = Arc<Vec<DrinkEntry>>;

/// Live drink list. Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct LiveLog {
    tx: Arc<watch::Sender<Snapshot>>,
}

impl LiveLog {
    #[must_use]
    pub fn new(entries: Vec<DrinkEntry>) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(sorted(entries)));
        Self { tx: Arc::new(tx) }
    }

    /// Current contents.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tx.borrow())
    }

    /// Start observing. The first [`Subscription::next`] returns the current
    /// snapshot without waiting.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
            primed: false,
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn add(&self, entry: DrinkEntry) {
        self.tx.send_modify(|snapshot| {
            let entries = Arc::make_mut(snapshot);
            entries.push(entry);
            sort_newest_first(entries);
        });
    }

    /// Remove by id. Subscribers are notified only when something was removed.
    pub fn remove(&self, id: &str) -> bool {
        self.tx.send_if_modified(|snapshot| {
            let Some(index) = snapshot.iter().position(|e| e.id == id) else {
                return false;
            };
            Arc::make_mut(snapshot).remove(index);
            true
        })
    }

    pub fn replace_all(&self, entries: Vec<DrinkEntry>) {
        self.tx.send_replace(Arc::new(sorted(entries)));
    }
}

impl Default for LiveLog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A handle that yields successive snapshots of a [`LiveLog`].
///
/// Dropping it, or calling [`Subscription::unsubscribe`], stops delivery.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<Snapshot>,
    primed: bool,
}

impl Subscription {
    /// Next snapshot. Returns `None` once every `LiveLog` handle is dropped.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if self.primed {
            self.rx.changed().await.ok()?;
        }
        self.primed = true;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }

    /// Whether a snapshot newer than the last one returned is waiting.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        !self.primed || self.rx.has_changed().unwrap_or(false)
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

fn sorted(mut entries: Vec<DrinkEntry>) -> Vec<DrinkEntry> {
    sort_newest_first(&mut entries);
    entries
}

fn sort_newest_first(entries: &mut [DrinkEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
