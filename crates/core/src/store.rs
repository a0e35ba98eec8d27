//! Local store contract for the quote collection.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::quotes::QuoteRecord;

/// Persistence surface for the authoritative local collection.
///
/// Backends expose whole-collection semantics only: there is no partial
/// update API. An absent or unparseable slot must behave as an empty
/// collection rather than an error, so a corrupted slot self-heals on the
/// next write.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// The persisted collection, or empty when no data exists.
    async fn load_all(&self) -> Result<Vec<QuoteRecord>>;

    /// Overwrite the entire persisted collection.
    async fn save_all(&self, records: &[QuoteRecord]) -> Result<()>;
}

/// In-memory store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryQuoteStore {
    records: RwLock<Vec<QuoteRecord>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<QuoteRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn load_all(&self) -> Result<Vec<QuoteRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn save_all(&self, records: &[QuoteRecord]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
