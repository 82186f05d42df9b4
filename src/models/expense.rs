//! Expense model
//!
//! An expense is a single logged spend: a positive amount (rounded to two
//! decimal places), a short description, a category reference, and a
//! calendar date. Dates are kept as `YYYY-MM-DD` strings because every
//! comparison in the system (filters, the monthly window) is a plain string
//! comparison over that format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Positive amount, rounded to 2 decimal places
    pub amount: f64,

    /// Free text, trimmed and truncated to 100 characters
    #[serde(default)]
    pub description: String,

    /// The category this expense belongs to
    pub category_id: CategoryId,

    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,

    /// Timestamp of creation, immutable after the fact
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record with a fresh id and creation timestamp.
    ///
    /// Amount and description are stored as given; the service layer rounds
    /// and truncates before calling this.
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category_id: CategoryId,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::generate(),
            amount,
            description: description.into(),
            category_id,
            date: date.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} {}", self.date, self.amount, self.description)
    }
}
