//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod data;
pub mod expense;

pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_data_command, DataCommands};
pub use expense::{handle_expense_command, ExpenseCommands};

use crate::error::{SpendError, SpendResult};
use crate::models::{Category, CategoryId};
use crate::repository::Repository;

/// Resolve a user-supplied category reference (id or name, case-insensitive)
pub(crate) fn resolve_category(repo: &Repository, reference: &str) -> SpendResult<Category> {
    let needle = reference.to_lowercase();
    repo.with(|doc| {
        doc.all_categories()
            .find(|c| c.id == CategoryId::from(reference) || c.name.to_lowercase() == needle)
            .cloned()
    })?
    .ok_or_else(|| SpendError::category_not_found(reference))
}
