//! Reconciliation service: fetch, push, merge, persist, notify.

use std::sync::{Arc, Mutex};

use futures::future::join_all;
use log::{debug, warn};

use crate::errors::Result;
use crate::quotes::{now_millis, QuoteRecord};
use crate::store::QuoteStore;
use crate::sync::merge::merge_quotes;
use crate::sync::sync_model::{
    PushReport, RemoteEndpoint, SyncEventSink, SyncOutcome, SyncTrigger,
};

/// Keeps the local collection consistent with the remote source of truth
/// under an at-least-once, last-writer-wins policy, tolerant of transient
/// remote failures.
///
/// Manual and scheduled triggers share [`SyncService::sync`]; whole cycles
/// are serialized behind an async mutex so overlapping invocations cannot
/// interleave the read-merge-write region of the store.
pub struct SyncService {
    store: Arc<dyn QuoteStore>,
    remote: Arc<dyn RemoteEndpoint>,
    events: Arc<dyn SyncEventSink>,
    cycle_mutex: tokio::sync::Mutex<()>,
    last_sync_at: Mutex<Option<i64>>,
}

impl SyncService {
    pub fn new(
        store: Arc<dyn QuoteStore>,
        remote: Arc<dyn RemoteEndpoint>,
        events: Arc<dyn SyncEventSink>,
    ) -> Self {
        Self {
            store,
            remote,
            events,
            cycle_mutex: tokio::sync::Mutex::new(()),
            last_sync_at: Mutex::new(None),
        }
    }

    /// Instant of the last successfully persisted cycle, in milliseconds.
    pub fn last_sync_at(&self) -> Option<i64> {
        *self.last_sync_at.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run one full reconciliation cycle and return the merged collection.
    ///
    /// Load local, fetch remote (a failure aborts the cycle with the store
    /// untouched), push unsynced records best-effort, merge, persist, then
    /// notify subscribers of the outcome. The error of a failed cycle is
    /// both surfaced through the sink and propagated to the caller.
    pub async fn sync(&self, trigger: SyncTrigger) -> Result<Vec<QuoteRecord>> {
        let _cycle_guard = self.cycle_mutex.lock().await;

        match self.run_cycle().await {
            Ok((merged, report)) => {
                *self.last_sync_at.lock().unwrap_or_else(|e| e.into_inner()) =
                    Some(now_millis());
                debug!(
                    "Sync cycle complete: {} records ({}/{} pushes succeeded)",
                    merged.len(),
                    report.succeeded,
                    report.attempted
                );
                self.events.notify(
                    trigger,
                    &SyncOutcome::Completed {
                        count: merged.len(),
                    },
                );
                Ok(merged)
            }
            Err(err) => {
                self.events.notify(
                    trigger,
                    &SyncOutcome::Failed {
                        error: err.to_string(),
                    },
                );
                Err(err)
            }
        }
    }

    async fn run_cycle(&self) -> Result<(Vec<QuoteRecord>, PushReport)> {
        let local = self.store.load_all().await?;
        let remote = self.remote.fetch_quotes().await?;
        let (local, report) = self.push_unsynced(local).await;

        let merged = merge_quotes(&local, &remote);
        self.store.save_all(&merged).await?;
        Ok((merged, report))
    }

    /// Push every record lacking a `server_id`, concurrently, with
    /// all-settle semantics: one failing push never aborts the others.
    ///
    /// A successful push annotates the record with the returned identifier
    /// so it is not re-pushed on the next cycle; a failed record stays
    /// unsynced and is retried then.
    async fn push_unsynced(&self, mut records: Vec<QuoteRecord>) -> (Vec<QuoteRecord>, PushReport) {
        let unsynced: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_synced())
            .map(|(index, _)| index)
            .collect();

        let mut pushes = Vec::with_capacity(unsynced.len());
        for &index in &unsynced {
            let record = records[index].clone();
            pushes.push(async move { self.remote.push_quote(&record).await });
        }
        let outcomes = join_all(pushes).await;

        let mut report = PushReport {
            attempted: unsynced.len(),
            ..PushReport::default()
        };
        for (&index, outcome) in unsynced.iter().zip(&outcomes) {
            match outcome {
                Ok(server_id) => {
                    records[index].server_id = Some(*server_id);
                    report.succeeded += 1;
                }
                Err(err) => {
                    warn!(
                        "Push failed for quote in category '{}': {}",
                        records[index].category, err
                    );
                    report.failed += 1;
                }
            }
        }

        (records, report)
    }
}
