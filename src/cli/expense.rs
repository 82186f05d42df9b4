//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, editing, and deleting
//! expenses, plus the monthly summary.

use clap::Subcommand;

use crate::display::{format_expense_details, format_expense_list, format_summary};
use crate::error::SpendResult;
use crate::models::ExpenseId;
use crate::repository::Repository;
use crate::services::{ExpenseService, ExpenseUpdate, EditOutcome, FilterCriteria, SortKey};

use super::resolve_category;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent
        amount: f64,
        /// What the money was spent on
        description: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, with optional filters
    List {
        /// Filter by category name or ID (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Match descriptions or category names containing this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order: date-asc, date-desc, amount-asc, amount-desc, category
        #[arg(long, default_value = "date-desc")]
        sort: String,
    },

    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount (0 or below deletes the expense)
        #[arg(short, long)]
        amount: Option<f64>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show this month's spending summary
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(repo: &Repository, cmd: ExpenseCommands) -> SpendResult<()> {
    let service = ExpenseService::new(repo);
    let currency = repo.settings()?.currency;

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let category = resolve_category(repo, &category)?;
            let expense =
                service.add_expense(amount, &description, &category.id, date.as_deref())?;

            println!("Added expense: {}{:.2}", currency, expense.amount);
            println!("  Category: {}", category);
            println!("  Date: {}", expense.date);
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            search,
            sort,
        } => {
            let mut criteria = FilterCriteria {
                start_date: from,
                end_date: to,
                search: search.unwrap_or_default(),
                sort: SortKey::from(sort.as_str()),
                ..Default::default()
            };
            for reference in &category {
                criteria
                    .category_ids
                    .insert(resolve_category(repo, reference)?.id);
            }

            let expenses = service.filter_expenses(&criteria)?;
            repo.with(|doc| {
                print!("{}", format_expense_list(&expenses, doc, &currency));
            })?;
        }

        ExpenseCommands::Show { id } => {
            let id = ExpenseId::from(id);
            let expense = service
                .list_expenses()?
                .into_iter()
                .find(|e| e.id == id)
                .ok_or_else(|| crate::error::SpendError::expense_not_found(id.to_string()))?;

            repo.with(|doc| {
                print!("{}", format_expense_details(&expense, doc, &currency));
            })?;
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            if amount.is_none() && description.is_none() && category.is_none() && date.is_none() {
                println!("No changes specified. Use --amount, --description, --category, or --date.");
                return Ok(());
            }

            let category_id = match category {
                Some(ref reference) => Some(resolve_category(repo, reference)?.id),
                None => None,
            };

            let outcome = service.edit_expense(
                &ExpenseId::from(id),
                ExpenseUpdate {
                    amount,
                    description,
                    category_id,
                    date,
                },
            )?;

            match outcome {
                EditOutcome::Updated(expense) => {
                    println!("Updated expense: {}{:.2}", currency, expense.amount);
                    println!("  Date: {}", expense.date);
                    println!("  Description: {}", expense.description);
                }
                EditOutcome::Removed => {
                    println!("Amount set to zero or below; expense deleted.");
                }
            }
        }

        ExpenseCommands::Delete { id } => {
            if service.delete_expense(&ExpenseId::from(id.clone()))? {
                println!("Deleted expense: {}", id);
            } else {
                println!("No expense found with ID: {}", id);
            }
        }

        ExpenseCommands::Summary => {
            let summary = service.monthly_summary()?;
            print!("{}", format_summary(&summary, &currency));
        }
    }

    Ok(())
}
