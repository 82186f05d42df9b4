//! Core data models for SmartSpend
//!
//! This module contains the data structures that represent the expense
//! tracking domain: the persisted document, categories, and expenses.

pub mod category;
pub mod document;
pub mod expense;
pub mod ids;

pub use category::{default_categories, Category, DEFAULT_COLOR};
pub use document::{AppDocument, CategorySets, Settings, SCHEMA_VERSION};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId};
