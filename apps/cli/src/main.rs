//! Thin composition layer: wires the JSON store, the remote client, and the
//! reconciliation service behind a small CLI.

mod cli;
mod commands;
mod config;
mod events;
mod scheduler;

use std::sync::Arc;

use clap::Parser;

use quotesync_core::quotes::QuoteService;
use quotesync_core::sync::SyncService;
use quotesync_remote::RemoteSyncClient;
use quotesync_storage_json::JsonFileQuoteStore;

use cli::{Cli, Command};
use config::Config;
use events::LogSyncEventSink;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store = Arc::new(JsonFileQuoteStore::new(config.store_path.clone()));
    let quotes = QuoteService::new(store.clone());
    let remote = Arc::new(RemoteSyncClient::new(&config.remote_base_url));
    let sync = Arc::new(SyncService::new(store, remote, Arc::new(LogSyncEventSink)));

    match cli.cmd {
        Command::Add { text, category } => {
            commands::quotes::run_add(&quotes, &text, &category).await
        }
        Command::List { category } => {
            commands::quotes::run_list(&quotes, category.as_deref()).await
        }
        Command::Random { category } => {
            commands::quotes::run_random(&quotes, category.as_deref(), &config.category_pref_path())
                .await
        }
        Command::Categories => commands::quotes::run_categories(&quotes).await,
        Command::Export { output } => commands::quotes::run_export(&quotes, output.as_deref()).await,
        Command::Import { path } => commands::quotes::run_import(&quotes, &path).await,
        Command::Sync => commands::sync::run_sync(&sync).await,
        Command::Watch => commands::sync::run_watch(sync, config.sync_interval_secs).await,
    }
}
