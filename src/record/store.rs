//! Shared win record store.

use tokio::sync::RwLock;
use tracing::debug;

use super::types::{WinRecord, Winner};
use crate::metrics;

/// Process-lifetime store for the win record.
///
/// Created once at startup with every counter at zero and shared with the
/// HTTP handlers through [`crate::api::AppState`]. Nothing is persisted.
#[derive(Debug, Default)]
pub struct WinRecordStore {
    record: RwLock<WinRecord>,
}

impl WinRecordStore {
    /// Create a store with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current counters.
    pub async fn get(&self) -> WinRecord {
        *self.record.read().await
    }

    /// Count one game for `winner` and return the updated record.
    ///
    /// The increment and the returned snapshot happen under the same write
    /// lock, so concurrent callers never lose an update.
    pub async fn record(&self, winner: Winner) -> WinRecord {
        let mut record = self.record.write().await;
        record.increment(winner);
        metrics::inc_results_recorded(winner);
        debug!(
            %winner,
            count = record.count(winner),
            total = record.total(),
            "Recorded game result"
        );
        *record
    }

    /// Record a result from a raw winner label.
    ///
    /// Unknown or missing labels leave the counters untouched and return the
    /// current record.
    pub async fn record_result(&self, label: Option<&str>) -> WinRecord {
        match label.and_then(Winner::from_label) {
            Some(winner) => self.record(winner).await,
            None => {
                metrics::inc_results_ignored();
                debug!(label = ?label, "Ignoring unrecognized winner label");
                self.get().await
            }
        }
    }
}
