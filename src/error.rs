//! Custom error types for SmartSpend
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Callers distinguish three failure classes: validation failures (bad input,
//! nothing mutated), constraint violations (the operation is understood but
//! blocked, e.g. deleting a category that still has expenses), and storage
//! failures (swallowed at the store boundary, surfaced as a `bool` there).

use thiserror::Error;

/// The main error type for SmartSpend operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A category cannot be deleted while expenses still reference it.
    /// Reported distinctly from validation so callers can offer reassignment.
    #[error("Category '{name}' still has {expense_count} expense(s); reassign them first")]
    CategoryInUse { name: String, expense_count: usize },

    /// Attempted to modify one of the built-in categories
    #[error("Default category '{0}' cannot be modified or deleted")]
    DefaultCategory(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is the category-in-use constraint violation
    pub fn is_category_in_use(&self) -> bool {
        matches!(self, Self::CategoryInUse { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SmartSpend operations
pub type SpendResult<T> = Result<T, SpendError>;
