//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

use quotesync_core::sync::SYNC_INTERVAL_SECS;
use quotesync_remote::DEFAULT_REMOTE_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub remote_base_url: String,
    pub store_path: PathBuf,
    pub sync_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let remote_base_url = std::env::var("QUOTESYNC_REMOTE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REMOTE_BASE_URL.to_string());

        let store_path = std::env::var("QUOTESYNC_STORE_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("quotes.json"));

        let sync_interval_secs = std::env::var("QUOTESYNC_SYNC_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(SYNC_INTERVAL_SECS);

        Self {
            remote_base_url,
            store_path,
            sync_interval_secs,
        }
    }

    /// Slot remembering the last category passed to `random --category`.
    pub fn category_pref_path(&self) -> PathBuf {
        self.store_path.with_extension("category")
    }
}
