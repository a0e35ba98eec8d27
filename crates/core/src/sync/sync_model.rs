//! Sync domain models and collaborator contracts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::quotes::QuoteRecord;

/// Trigger source for sync cycles. Manual and periodic triggers share the
/// same entry point and the same serialization guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncTrigger {
    Manual,
    Periodic,
}

/// What a subscriber observes after every sync attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// The cycle persisted a merged collection of `count` records.
    Completed { count: usize },
    /// The cycle aborted before persistence; the store was left untouched.
    Failed { error: String },
}

/// Per-record outcomes of one push batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Abstract remote endpoint providing and accepting quote records.
///
/// Implementations own transport, timeouts, and the mapping between the
/// remote item shape and [`QuoteRecord`].
#[async_trait]
pub trait RemoteEndpoint: Send + Sync {
    /// Fetch the remote collection, mapped into local record shape with a
    /// populated `server_id` and a fetch-instant timestamp on every record.
    async fn fetch_quotes(&self) -> Result<Vec<QuoteRecord>>;

    /// Push one unsynced record; returns the identifier assigned remotely.
    async fn push_quote(&self, record: &QuoteRecord) -> Result<i64>;
}

/// Subscriber interface for sync notifications.
///
/// Implementations translate outcomes into platform-specific surfaces (CLI
/// output, log lines). `notify` must be fast and non-blocking, and a failing
/// subscriber must not affect the cycle.
pub trait SyncEventSink: Send + Sync {
    fn notify(&self, trigger: SyncTrigger, outcome: &SyncOutcome);
}

/// No-op sink for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoOpSyncEventSink;

impl SyncEventSink for NoOpSyncEventSink {
    fn notify(&self, _trigger: SyncTrigger, _outcome: &SyncOutcome) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serialization_is_tagged_snake_case() {
        let completed = serde_json::to_string(&SyncOutcome::Completed { count: 3 }).unwrap();
        assert_eq!(completed, r#"{"status":"completed","count":3}"#);

        let failed = serde_json::to_string(&SyncOutcome::Failed {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(failed, r#"{"status":"failed","error":"boom"}"#);
    }
}
