//! SmartSpend - Personal expense tracker
//!
//! This library provides the core functionality for the SmartSpend expense
//! tracker: a single-document JSON store, a session-scoped repository, and
//! services for expenses, categories, budgets, and monthly summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, settings)
//! - `validation`: Input normalization and format checks
//! - `storage`: Atomic single-file JSON storage
//! - `repository`: Session cache over the store
//! - `services`: Business logic layer
//! - `transfer`: JSON backup export and import
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use smartspend::config::paths::SmartSpendPaths;
//! use smartspend::repository::Repository;
//! use smartspend::storage::Store;
//!
//! let paths = SmartSpendPaths::new()?;
//! let repo = Repository::new(Store::new(&paths));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;
pub mod transfer;
pub mod validation;

pub use error::{SpendError, SpendResult};
