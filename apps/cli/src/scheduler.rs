//! Background scheduler for periodic sync.

use std::sync::Arc;

use log::{info, warn};
use rand::Rng;
use tokio::time::Duration;

use quotesync_core::sync::{backoff_seconds, SyncService, SyncTrigger, SYNC_INTERVAL_JITTER_MS};

/// Starts the periodic sync loop for the lifetime of the process.
///
/// The loop shares the manual `sync()` entry point, so overlapping manual
/// triggers serialize against it. Failed cycles back off exponentially and
/// never stop the loop; process shutdown abandons whatever cycle is
/// pending.
pub fn start_sync_scheduler(
    service: Arc<SyncService>,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!("Sync scheduler started ({}s interval)", interval_secs);
        let mut consecutive_failures: u32 = 0;

        loop {
            let base_secs = if consecutive_failures == 0 {
                interval_secs
            } else {
                backoff_seconds(consecutive_failures)
            };
            let jitter_ms = rand::thread_rng().gen_range(0..=SYNC_INTERVAL_JITTER_MS);
            tokio::time::sleep(Duration::from_secs(base_secs) + Duration::from_millis(jitter_ms))
                .await;

            match service.sync(SyncTrigger::Periodic).await {
                Ok(_) => consecutive_failures = 0,
                Err(err) => {
                    consecutive_failures = consecutive_failures.saturating_add(1);
                    warn!(
                        "Scheduled sync failed ({} in a row): {}",
                        consecutive_failures, err
                    );
                }
            }
        }
    })
}
