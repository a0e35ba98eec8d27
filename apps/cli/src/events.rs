//! CLI-facing sync notification sink.

use log::{info, warn};

use quotesync_core::sync::{SyncEventSink, SyncOutcome, SyncTrigger};

/// Logs every sync outcome; the CLI's analog of a UI notification area.
#[derive(Debug, Clone, Default)]
pub struct LogSyncEventSink;

impl SyncEventSink for LogSyncEventSink {
    fn notify(&self, trigger: SyncTrigger, outcome: &SyncOutcome) {
        let trigger = match trigger {
            SyncTrigger::Manual => "manual",
            SyncTrigger::Periodic => "periodic",
        };
        match outcome {
            SyncOutcome::Completed { count } => {
                info!("Sync complete ({}): {} quotes in collection", trigger, count);
            }
            SyncOutcome::Failed { error } => {
                warn!("Sync failed ({}): {}", trigger, error);
            }
        }
    }
}
