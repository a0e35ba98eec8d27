//! Quote record model and creation validation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// One quote entry in the local collection.
///
/// Merge identity is `server_id`: records without one are purely local and
/// are never matched against remote records. Insertion order within the
/// collection is preserved but carries no semantic weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub text: String,
    pub category: String,
    /// Identifier assigned by the remote endpoint once the record has been
    /// accepted there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<i64>,
    /// Creation/update instant in wall-clock milliseconds. Records
    /// persisted before timestamping existed may lack it; a missing
    /// timestamp always loses a merge comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl QuoteRecord {
    /// Validate and create a new local record with a fresh timestamp and no
    /// remote identifier.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();
        validate_fields(text, category)?;

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
            server_id: None,
            timestamp: Some(now_millis()),
        })
    }

    /// Whether this record has been accepted by the remote endpoint.
    pub fn is_synced(&self) -> bool {
        self.server_id.is_some()
    }
}

/// Current wall-clock instant in milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Required-field check shared by creation and import paths.
pub(crate) fn validate_fields(
    text: &str,
    category: &str,
) -> std::result::Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn new_record_trims_and_stamps() {
        let record = QuoteRecord::new("  Stay hungry, stay foolish.  ", " Success ").unwrap();
        assert_eq!(record.text, "Stay hungry, stay foolish.");
        assert_eq!(record.category, "Success");
        assert!(record.server_id.is_none());
        assert!(record.timestamp.is_some());
        assert!(!record.is_synced());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = QuoteRecord::new("   ", "Success").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyText)
        ));

        let err = QuoteRecord::new("Be the change.", "").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyCategory)
        ));
    }

    #[test]
    fn legacy_record_without_timestamp_deserializes() {
        let record: QuoteRecord =
            serde_json::from_str(r#"{"text":"old","category":"Legacy"}"#).unwrap();
        assert_eq!(record.text, "old");
        assert!(record.timestamp.is_none());
        assert!(record.server_id.is_none());
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let record = QuoteRecord {
            text: "t".to_string(),
            category: "c".to_string(),
            server_id: None,
            timestamp: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"text":"t","category":"c"}"#);

        let record = QuoteRecord {
            server_id: Some(9),
            timestamp: Some(5),
            ..record
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""serverId":9"#));
        assert!(json.contains(r#""timestamp":5"#));
    }
}
