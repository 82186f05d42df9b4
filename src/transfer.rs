//! Backup and restore
//!
//! Exports the entire document as pretty-printed JSON and imports a
//! previously exported document, replacing the stored state wholesale. Import
//! validates only the minimum shape (an `expenses` array and a `categories`
//! object); unknown fields are dropped and missing optional fields take their
//! defaults, the same leniency the loader applies to the stored file.

use std::io::Write;

use serde_json::Value;
use tracing::info;

use crate::error::{SpendError, SpendResult};
use crate::models::AppDocument;
use crate::repository::Repository;

/// Serialize the current document to the given writer as pretty JSON
pub fn export_json<W: Write>(repo: &Repository, writer: W) -> SpendResult<()> {
    let doc = repo.snapshot()?;
    serde_json::to_writer_pretty(writer, &doc)
        .map_err(|e| SpendError::Export(format!("Failed to serialize data: {}", e)))?;
    info!(
        expenses = doc.expenses.len(),
        custom_categories = doc.categories.custom.len(),
        "exported document"
    );
    Ok(())
}

/// Replace the stored document with the parsed contents of `input`.
///
/// The payload must at minimum carry an `expenses` array and a `categories`
/// object; anything less is rejected without touching stored data. On
/// success the document is written to disk and the repository cache
/// refreshed from it.
pub fn import_json(repo: &Repository, input: &str) -> SpendResult<AppDocument> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| SpendError::Import(format!("Not valid JSON: {}", e)))?;

    if !value.get("expenses").map(Value::is_array).unwrap_or(false) {
        return Err(SpendError::Import(
            "Missing or invalid 'expenses' array".into(),
        ));
    }
    if !value
        .get("categories")
        .map(Value::is_object)
        .unwrap_or(false)
    {
        return Err(SpendError::Import(
            "Missing or invalid 'categories' object".into(),
        ));
    }

    let doc: AppDocument = serde_json::from_value(value)
        .map_err(|e| SpendError::Import(format!("Unrecognized data format: {}", e)))?;

    if !repo.store().save(&doc) {
        return Err(SpendError::Import(
            "Failed to write imported data to storage".into(),
        ));
    }
    repo.refresh()?;

    let doc = repo.snapshot()?;
    info!(
        expenses = doc.expenses.len(),
        custom_categories = doc.categories.custom.len(),
        "imported document"
    );
    Ok(doc)
}
