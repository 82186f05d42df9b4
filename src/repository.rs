//! In-memory data repository
//!
//! Holds at most one loaded document per session and mediates every read and
//! write. Centralizing the cache avoids re-reading storage on each
//! interaction while keeping a single flush point; callers mutate through the
//! domain services, never by editing the document directly.

use std::sync::RwLock;

use crate::error::{SpendError, SpendResult};
use crate::models::{AppDocument, Settings};
use crate::storage::Store;

/// Session-scoped cache of the loaded document
pub struct Repository {
    store: Store,
    cache: RwLock<Option<AppDocument>>,
}

/// Partial settings update; absent fields keep their prior values
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub currency: Option<String>,
    pub budget_alerts: Option<bool>,
}

fn lock_error<E: std::fmt::Display>(e: E) -> SpendError {
    SpendError::Storage(format!("Failed to acquire document lock: {}", e))
}

impl Repository {
    /// Create a repository over the given store; nothing is loaded yet
    pub fn new(store: Store) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    /// Run a read-only closure against the document, loading it lazily on
    /// first access
    pub fn with<T>(&self, f: impl FnOnce(&AppDocument) -> T) -> SpendResult<T> {
        let mut cache = self.cache.write().map_err(lock_error)?;
        let doc = cache.get_or_insert_with(|| self.store.load());
        Ok(f(doc))
    }

    /// Run a mutating closure against the document, loading it lazily on
    /// first access. Does not persist; callers pair this with `save`.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut AppDocument) -> T) -> SpendResult<T> {
        let mut cache = self.cache.write().map_err(lock_error)?;
        let doc = cache.get_or_insert_with(|| self.store.load());
        Ok(f(doc))
    }

    /// Persist the cached document. No-ops (returning `true`) when nothing
    /// has been loaded; returns `false` when the underlying write failed.
    pub fn save(&self) -> SpendResult<bool> {
        let cache = self.cache.read().map_err(lock_error)?;
        match cache.as_ref() {
            Some(doc) => Ok(self.store.save(doc)),
            None => Ok(true),
        }
    }

    /// Discard the cached document and reload from storage.
    ///
    /// Used after external mutation (e.g. import) so in-memory state stays
    /// consistent with what is on disk.
    pub fn refresh(&self) -> SpendResult<()> {
        let mut cache = self.cache.write().map_err(lock_error)?;
        *cache = Some(self.store.load());
        Ok(())
    }

    /// Return a deep, independent copy of the current document
    pub fn snapshot(&self) -> SpendResult<AppDocument> {
        self.with(|doc| doc.clone())
    }

    /// Read the current settings
    pub fn settings(&self) -> SpendResult<Settings> {
        self.with(|doc| doc.settings.clone())
    }

    /// Apply a partial settings update and persist
    pub fn update_settings(&self, updates: SettingsUpdate) -> SpendResult<Settings> {
        let settings = self.with_mut(|doc| {
            if let Some(theme) = updates.theme {
                doc.settings.theme = theme;
            }
            if let Some(currency) = updates.currency {
                doc.settings.currency = currency;
            }
            if let Some(alerts) = updates.budget_alerts {
                doc.settings.budget_alerts = alerts;
            }
            doc.settings.clone()
        })?;
        self.save()?;
        Ok(settings)
    }

    /// Access the underlying store (used by import to overwrite wholesale)
    pub fn store(&self) -> &Store {
        &self.store
    }
}
