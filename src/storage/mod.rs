//! Storage layer for SmartSpend
//!
//! Provides single-document JSON storage with atomic writes and
//! load-time defaulting.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::Store;
