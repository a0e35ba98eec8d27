//! Commands for the local quote collection.

use std::path::Path;

use quotesync_core::quotes::{QuoteRecord, QuoteService};

pub async fn run_add(service: &QuoteService, text: &str, category: &str) -> anyhow::Result<()> {
    let record = service.add_quote(text, category).await?;
    println!("Added {}", format_quote(&record));
    Ok(())
}

pub async fn run_list(service: &QuoteService, category: Option<&str>) -> anyhow::Result<()> {
    let records = match category {
        Some(category) => service.quotes_by_category(category).await?,
        None => service.list().await?,
    };
    if records.is_empty() {
        println!("No quotes.");
        return Ok(());
    }
    for record in records {
        println!("{}", format_quote(&record));
    }
    Ok(())
}

/// Pick a random quote. A `--category` flag is remembered in a small
/// preference slot; later invocations without the flag reuse it.
pub async fn run_random(
    service: &QuoteService,
    category: Option<&str>,
    pref_path: &Path,
) -> anyhow::Result<()> {
    let category = match category {
        Some(category) => {
            if let Err(err) = std::fs::write(pref_path, category) {
                log::debug!("Could not remember category filter: {}", err);
            }
            Some(category.to_string())
        }
        None => std::fs::read_to_string(pref_path)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
    };

    match service.random_quote(category.as_deref()).await? {
        Some(record) => println!("{}", format_quote(&record)),
        None => println!("No quotes."),
    }
    Ok(())
}

pub async fn run_categories(service: &QuoteService) -> anyhow::Result<()> {
    let categories = service.categories().await?;
    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }
    for category in categories {
        println!("{}", category);
    }
    Ok(())
}

pub async fn run_export(service: &QuoteService, output: Option<&str>) -> anyhow::Result<()> {
    let json = service.export_json().await?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Exported to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub async fn run_import(service: &QuoteService, path: &str) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(path)?;
    let count = service.import_json(&payload).await?;
    println!("Imported {} quotes", count);
    Ok(())
}

fn format_quote(record: &QuoteRecord) -> String {
    let marker = if record.is_synced() { "" } else { " (unsynced)" };
    format!("\"{}\" [{}]{}", record.text, record.category, marker)
}
