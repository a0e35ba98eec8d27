//! Commands for remote reconciliation.

use std::sync::Arc;

use quotesync_core::sync::{SyncService, SyncTrigger};

use crate::scheduler::start_sync_scheduler;

pub async fn run_sync(service: &SyncService) -> anyhow::Result<()> {
    let merged = service.sync(SyncTrigger::Manual).await?;
    println!("Synced: {} quotes in the local collection", merged.len());
    Ok(())
}

/// Run an immediate cycle, then keep the periodic scheduler alive until the
/// process is interrupted.
pub async fn run_watch(service: Arc<SyncService>, interval_secs: u64) -> anyhow::Result<()> {
    if let Err(err) = service.sync(SyncTrigger::Manual).await {
        log::warn!("Initial sync failed: {}", err);
    }

    let scheduler = start_sync_scheduler(Arc::clone(&service), interval_secs);
    tokio::signal::ctrl_c().await?;
    scheduler.abort();
    println!("Stopped.");
    Ok(())
}
