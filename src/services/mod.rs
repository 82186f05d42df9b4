//! Business logic layer
//!
//! Services wrap the repository with validate-then-commit operations. Every
//! operation runs to completion synchronously: read, validate, mutate,
//! persist. A failed validation mutates and persists nothing.

pub mod category;
pub mod expense;

pub use category::{BudgetStatus, CategoryService, CategoryUpdate};
pub use expense::{
    EditOutcome, ExpenseService, ExpenseUpdate, FilterCriteria, MonthlySummary, SortKey,
};

use chrono::Local;

/// Today's date as a `YYYY-MM-DD` string (device-local calendar)
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// First day of the current month as a `YYYY-MM-DD` string.
///
/// The "monthly window" everywhere in the crate is `date >= month_start`,
/// compared as strings.
pub fn month_start_string() -> String {
    Local::now().format("%Y-%m-01").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_string_shape() {
        let today = today_string();
        assert!(crate::validation::is_valid_date(&today));
    }

    #[test]
    fn test_month_start_is_first_of_today_month() {
        let today = today_string();
        let start = month_start_string();
        assert_eq!(&start[..8], &today[..8]);
        assert_eq!(&start[8..], "01");
        assert!(today >= start);
    }
}
