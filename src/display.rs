//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, categories, and summaries
//! for terminal display.

use crate::models::{AppDocument, Category, Expense};
use crate::services::{BudgetStatus, MonthlySummary};

/// Format a single expense for display (list row)
pub fn format_expense_row(expense: &Expense, doc: &AppDocument, currency: &str) -> String {
    let category_display = doc
        .category_by_id(&expense.category_id)
        .map(|c| format!("{} {}", c.emoji, c.name))
        .unwrap_or_else(|| "(unknown)".to_string());

    format!(
        "{} {:>12} {:18} {}",
        expense.date,
        format!("{}{:.2}", currency, expense.amount),
        truncate(&category_display, 18),
        truncate(&expense.description, 30)
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense], doc: &AppDocument, currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>12} {:18} {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, doc, currency));
        output.push('\n');
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(74));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:>12}\n",
        "Total:",
        format!("{}{:.2}", currency, total)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, doc: &AppDocument, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!(
        "Amount:      {}{:.2}\n",
        currency, expense.amount
    ));

    match doc.category_by_id(&expense.category_id) {
        Some(category) => output.push_str(&format!("Category:    {}\n", category)),
        None => output.push_str("Category:    (unknown)\n"),
    }

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format a category list, with this month's spend against each budget
pub fn format_category_list(
    categories: &[(Category, BudgetStatus)],
    currency: &str,
) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:24} {:>12} {:>12}  {}\n",
        "Category", "Spent", "Budget", "Status"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (category, status) in categories {
        let budget_display = if category.budget > 0.0 {
            format!("{}{:.2}", currency, category.budget)
        } else {
            "-".to_string()
        };

        let mut markers = String::new();
        if status.exceeded {
            markers.push_str("over budget");
        }
        if category.archived {
            if !markers.is_empty() {
                markers.push_str(", ");
            }
            markers.push_str("archived");
        }

        output.push_str(&format!(
            "{:24} {:>12} {:>12}  {}\n",
            truncate(&format!("{} {}", category.emoji, category.name), 24),
            format!("{}{:.2}", currency, status.actual),
            budget_display,
            markers
        ));
    }

    output
}

/// Format the monthly summary block
pub fn format_summary(summary: &MonthlySummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("This month\n");
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "Total spent:  {}{:.2}\n",
        currency, summary.total
    ));
    output.push_str(&format!("Expenses:     {}\n", summary.count));
    output.push_str(&format!("Average:      {}{:.2}\n", currency, summary.avg));

    match &summary.top_category {
        Some(name) => output.push_str(&format!("Top category: {}\n", name)),
        None => output.push_str("Top category: -\n"),
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
