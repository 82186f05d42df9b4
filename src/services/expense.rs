//! Expense service
//!
//! CRUD for expense records plus filtering, sorting, and the monthly
//! aggregate summary. Invalid amounts and unknown category references are
//! rejected outright; cosmetic fields (description, date) are normalized.

use std::collections::HashSet;

use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryId, Expense, ExpenseId};
use crate::repository::Repository;
use crate::validation::{is_valid_date, normalize_description, round_amount};

use super::{month_start_string, today_string};

/// Service for expense management
pub struct ExpenseService<'a> {
    repo: &'a Repository,
}

/// Partial expense update; absent fields keep their prior values
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub date: Option<String>,
}

/// What an edit did to the record
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Fields were applied and the record persisted
    Updated(Expense),
    /// The edit drove the amount to zero or below, so the record was deleted
    Removed,
}

/// Sort order for filtered expense lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    DateAsc,
    #[default]
    DateDesc,
    AmountAsc,
    AmountDesc,
    Category,
}

impl From<&str> for SortKey {
    /// Parse a sort key, falling back to date-desc for unknown values
    fn from(s: &str) -> Self {
        match s {
            "date-asc" => Self::DateAsc,
            "date-desc" => Self::DateDesc,
            "amount-asc" => Self::AmountAsc,
            "amount-desc" => Self::AmountDesc,
            "category" => Self::Category,
            _ => Self::DateDesc,
        }
    }
}

/// Filter and sort criteria for `filter_expenses`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Keep only these categories; empty means no category filter
    pub category_ids: HashSet<CategoryId>,
    /// Inclusive lower date bound (`YYYY-MM-DD`); `None` = unbounded
    pub start_date: Option<String>,
    /// Inclusive upper date bound (`YYYY-MM-DD`); `None` = unbounded
    pub end_date: Option<String>,
    /// Case-insensitive substring match on description or category name
    pub search: String,
    /// Sort order for the result
    pub sort: SortKey,
}

/// Aggregates over the current monthly window
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub total: f64,
    pub count: usize,
    pub avg: f64,
    /// Name of the category with the highest summed amount this month; ties
    /// go to the category encountered first in stored expense order
    pub top_category: Option<String>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    /// Add an expense.
    ///
    /// The amount must be a positive number and the category must exist. The
    /// amount is rounded to 2 decimals, the description trimmed and truncated
    /// to 100 characters, and a blank or malformed date replaced with today.
    /// Persists and returns the created record.
    pub fn add_expense(
        &self,
        amount: f64,
        description: &str,
        category_id: &CategoryId,
        date: Option<&str>,
    ) -> SpendResult<Expense> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SpendError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        if category_id.as_str().is_empty() {
            return Err(SpendError::Validation("a category is required".into()));
        }

        let date = match date {
            Some(d) if is_valid_date(d) => d.to_string(),
            _ => today_string(),
        };

        let expense = self.repo.with_mut(|doc| {
            if doc.category_by_id(category_id).is_none() {
                return Err(SpendError::category_not_found(category_id.to_string()));
            }

            let expense = Expense::new(
                round_amount(amount),
                normalize_description(description),
                category_id.clone(),
                date,
            );
            doc.expenses.push(expense.clone());
            Ok(expense)
        })??;

        self.repo.save()?;
        Ok(expense)
    }

    /// Edit an expense, applying only the fields present in `updates`.
    ///
    /// An updated amount is clamped to at least 0.01, unless it is zero or
    /// negative, in which case the record is deleted instead of kept with a
    /// non-positive amount. An updated date that does not match `YYYY-MM-DD`
    /// is silently ignored for that field.
    pub fn edit_expense(&self, id: &ExpenseId, updates: ExpenseUpdate) -> SpendResult<EditOutcome> {
        if let Some(amount) = updates.amount {
            if !amount.is_finite() {
                return Err(SpendError::Validation(
                    "amount must be a positive number".into(),
                ));
            }
        }

        let outcome = self.repo.with_mut(|doc| {
            let idx = doc
                .expenses
                .iter()
                .position(|e| &e.id == id)
                .ok_or_else(|| SpendError::expense_not_found(id.to_string()))?;

            if let Some(ref category_id) = updates.category_id {
                if doc.category_by_id(category_id).is_none() {
                    return Err(SpendError::category_not_found(category_id.to_string()));
                }
            }

            // An amount pushed to zero or below removes the record outright
            if matches!(updates.amount, Some(a) if a <= 0.0) {
                doc.expenses.remove(idx);
                return Ok(EditOutcome::Removed);
            }

            let expense = &mut doc.expenses[idx];
            if let Some(amount) = updates.amount {
                expense.amount = round_amount(amount).max(0.01);
            }
            if let Some(ref description) = updates.description {
                expense.description = normalize_description(description);
            }
            if let Some(category_id) = updates.category_id {
                expense.category_id = category_id;
            }
            if let Some(date) = updates.date {
                if is_valid_date(&date) {
                    expense.date = date;
                }
            }

            Ok(EditOutcome::Updated(expense.clone()))
        })??;

        self.repo.save()?;
        Ok(outcome)
    }

    /// Delete an expense by id; returns whether a record was actually
    /// removed. Persists only when something changed.
    pub fn delete_expense(&self, id: &ExpenseId) -> SpendResult<bool> {
        let removed = self.repo.with_mut(|doc| {
            let before = doc.expenses.len();
            doc.expenses.retain(|e| &e.id != id);
            doc.expenses.len() < before
        })?;

        if removed {
            self.repo.save()?;
        }
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list_expenses(&self) -> SpendResult<Vec<Expense>> {
        self.repo.with(|doc| doc.expenses.clone())
    }

    /// Remove every expense (maintenance operation); persists
    pub fn clear_all(&self) -> SpendResult<()> {
        self.repo.with_mut(|doc| doc.expenses.clear())?;
        self.repo.save()?;
        Ok(())
    }

    /// Filter, search, and sort expenses.
    ///
    /// A pure function of the criteria and the current stored expenses: the
    /// underlying collection is never mutated, and identical inputs produce
    /// identical ordered output.
    pub fn filter_expenses(&self, criteria: &FilterCriteria) -> SpendResult<Vec<Expense>> {
        self.repo.with(|doc| {
            let term = criteria.search.to_lowercase();

            let mut results: Vec<Expense> = doc
                .expenses
                .iter()
                .filter(|e| {
                    criteria.category_ids.is_empty()
                        || criteria.category_ids.contains(&e.category_id)
                })
                .filter(|e| match criteria.start_date {
                    Some(ref start) => e.date.as_str() >= start.as_str(),
                    None => true,
                })
                .filter(|e| match criteria.end_date {
                    Some(ref end) => e.date.as_str() <= end.as_str(),
                    None => true,
                })
                .filter(|e| {
                    if term.is_empty() {
                        return true;
                    }
                    if e.description.to_lowercase().contains(&term) {
                        return true;
                    }
                    doc.category_by_id(&e.category_id)
                        .map(|c| c.name.to_lowercase().contains(&term))
                        .unwrap_or(false)
                })
                .cloned()
                .collect();

            let resolved_name = |e: &Expense| -> String {
                doc.category_by_id(&e.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default()
            };

            // Stable sort, so equal keys keep insertion order
            match criteria.sort {
                SortKey::DateAsc => results.sort_by(|a, b| a.date.cmp(&b.date)),
                SortKey::DateDesc => results.sort_by(|a, b| b.date.cmp(&a.date)),
                SortKey::AmountAsc => results.sort_by(|a, b| {
                    a.amount
                        .partial_cmp(&b.amount)
                        .unwrap_or(std::cmp::Ordering::Equal)
                }),
                SortKey::AmountDesc => results.sort_by(|a, b| {
                    b.amount
                        .partial_cmp(&a.amount)
                        .unwrap_or(std::cmp::Ordering::Equal)
                }),
                SortKey::Category => {
                    results.sort_by(|a, b| resolved_name(a).cmp(&resolved_name(b)))
                }
            }

            results
        })
    }

    /// Aggregate summary over the current monthly window.
    ///
    /// The top category is the one with the highest summed amount; on a tie
    /// the category first encountered while iterating expenses in stored
    /// order wins.
    pub fn monthly_summary(&self) -> SpendResult<MonthlySummary> {
        let month_start = month_start_string();
        self.repo.with(|doc| {
            let monthly: Vec<&Expense> = doc
                .expenses
                .iter()
                .filter(|e| e.date >= month_start)
                .collect();

            let total: f64 = monthly.iter().map(|e| e.amount).sum();
            let count = monthly.len();
            let avg = if count > 0 { total / count as f64 } else { 0.0 };

            // Accumulate per-category totals preserving first-encounter order
            let mut totals: Vec<(&CategoryId, f64)> = Vec::new();
            for expense in &monthly {
                match totals.iter_mut().find(|(id, _)| *id == &expense.category_id) {
                    Some((_, sum)) => *sum += expense.amount,
                    None => totals.push((&expense.category_id, expense.amount)),
                }
            }

            let mut top: Option<(&CategoryId, f64)> = None;
            for (id, sum) in totals {
                match top {
                    // Strictly greater, so earlier entries win ties
                    Some((_, best)) if sum <= best => {}
                    _ => top = Some((id, sum)),
                }
            }

            let top_category =
                top.and_then(|(id, _)| doc.category_by_id(id).map(|c| c.name.clone()));

            MonthlySummary {
                total,
                count,
                avg,
                top_category,
            }
        })
    }
}
