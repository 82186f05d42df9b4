//! Persistence store for the application document
//!
//! The store owns the canonical on-disk representation: one JSON file holding
//! the whole document. Loading never fails from the caller's perspective: a
//! missing, unreadable, or unparseable file degrades to the default document
//! so the application stays usable with storage disabled or corrupted.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::SmartSpendPaths;
use crate::models::{default_categories, AppDocument};

use super::file_io::{read_json, write_json_atomic};

/// Loads and saves the application document as a single unit
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the standard data file location
    pub fn new(paths: &SmartSpendPaths) -> Self {
        Self {
            path: paths.data_file(),
        }
    }

    /// Create a store backed by an explicit file path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the document from disk.
    ///
    /// Returns the default document when nothing is stored or the stored data
    /// cannot be read or parsed (the failure is logged, not raised). A stored
    /// document is merged over the defaults: expenses and custom categories
    /// are kept verbatim, while the default category set is always taken from
    /// the current code-defined list so built-ins can evolve without a
    /// migration.
    pub fn load(&self) -> AppDocument {
        match read_json::<AppDocument, _>(&self.path) {
            Ok(Some(mut doc)) => {
                doc.categories.default = default_categories();
                debug!(expenses = doc.expenses.len(), "loaded document from storage");
                doc
            }
            Ok(None) => {
                debug!("no stored document, using defaults");
                AppDocument::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load document, using defaults");
                AppDocument::default()
            }
        }
    }

    /// Save the whole document to disk in a single atomic write.
    ///
    /// Returns `false` instead of raising on failure so callers can surface
    /// the problem without crashing.
    pub fn save(&self, doc: &AppDocument) -> bool {
        match write_json_atomic(&self.path, doc) {
            Ok(()) => {
                debug!(expenses = doc.expenses.len(), "saved document to storage");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save document");
                false
            }
        }
    }
}
