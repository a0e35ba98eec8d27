//! File-backed implementation of the core store trait.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::warn;

use quotesync_core::errors::{Error, Result};
use quotesync_core::quotes::QuoteRecord;
use quotesync_core::store::QuoteStore;

/// Store holding the whole collection in a single JSON document.
///
/// Saves are atomic: the document is written to a sibling temp file and
/// renamed over the slot, so an interrupted write cannot corrupt it.
#[derive(Debug, Clone)]
pub struct JsonFileQuoteStore {
    path: PathBuf,
}

impl JsonFileQuoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.as_os_str().to_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    fn store_error(&self, action: &str, err: impl std::fmt::Display) -> Error {
        Error::Store(format!("{} {}: {}", action, self.path.display(), err))
    }
}

#[async_trait]
impl QuoteStore for JsonFileQuoteStore {
    async fn load_all(&self) -> Result<Vec<QuoteRecord>> {
        let payload = match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.store_error("failed to read", err)),
        };

        match serde_json::from_str(&payload) {
            Ok(records) => Ok(records),
            Err(err) => {
                // Unparseable content is "no data", not a fatal error; the
                // slot heals on the next save.
                warn!(
                    "Ignoring malformed quote store at {}: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_all(&self, records: &[QuoteRecord]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)
            .map_err(|e| Error::Store(format!("failed to serialize quotes: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| self.store_error("failed to create parent of", err))?;
            }
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, payload)
            .await
            .map_err(|err| self.store_error("failed to write", err))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|err| self.store_error("failed to replace", err))?;
        Ok(())
    }
}
