//! Quote collection service: create, filter, pick, import/export.

use std::sync::Arc;

use log::debug;
use rand::Rng;

use crate::errors::{Error, Result, ValidationError};
use crate::quotes::quote_model::{validate_fields, QuoteRecord};
use crate::store::QuoteStore;

/// Service owning caller-facing operations on the local collection.
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// The whole local collection in insertion order.
    pub async fn list(&self) -> Result<Vec<QuoteRecord>> {
        self.store.load_all().await
    }

    /// Validate, stamp, and persist a new local quote.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<QuoteRecord> {
        let record = QuoteRecord::new(text, category)?;
        let mut records = self.store.load_all().await?;
        records.push(record.clone());
        self.store.save_all(&records).await?;
        debug!("Added quote in category '{}'", record.category);
        Ok(record)
    }

    /// Quotes whose category matches `category`, case-insensitively.
    pub async fn quotes_by_category(&self, category: &str) -> Result<Vec<QuoteRecord>> {
        let records = self.store.load_all().await?;
        Ok(records
            .into_iter()
            .filter(|q| q.category.eq_ignore_ascii_case(category))
            .collect())
    }

    /// Distinct categories in the collection, sorted.
    pub async fn categories(&self) -> Result<Vec<String>> {
        let records = self.store.load_all().await?;
        let mut categories: Vec<String> = records.into_iter().map(|q| q.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Uniformly random quote, optionally restricted to one category.
    /// `None` when the (filtered) collection is empty.
    pub async fn random_quote(&self, category: Option<&str>) -> Result<Option<QuoteRecord>> {
        let records = match category {
            Some(category) => self.quotes_by_category(category).await?,
            None => self.list().await?,
        };
        if records.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..records.len());
        Ok(records.into_iter().nth(index))
    }

    /// The whole collection as a pretty-printed JSON array.
    pub async fn export_json(&self) -> Result<String> {
        let records = self.store.load_all().await?;
        serde_json::to_string_pretty(&records)
            .map_err(|e| Error::Unexpected(format!("failed to serialize quotes: {}", e)))
    }

    /// Append the records in a JSON array payload to the collection.
    ///
    /// The payload is all-or-nothing: if it is not an array, or any entry
    /// lacks text or category, nothing is imported.
    pub async fn import_json(&self, payload: &str) -> Result<usize> {
        let imported: Vec<QuoteRecord> = serde_json::from_str(payload)
            .map_err(|e| ValidationError::InvalidPayload(e.to_string()))?;
        for quote in &imported {
            validate_fields(&quote.text, &quote.category)?;
        }

        let mut records = self.store.load_all().await?;
        let count = imported.len();
        records.extend(imported);
        self.store.save_all(&records).await?;
        debug!("Imported {} quotes", count);
        Ok(count)
    }
}
