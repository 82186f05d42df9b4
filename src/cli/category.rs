//! Category CLI commands
//!
//! Implements CLI commands for category management, including reassignment
//! of expenses when deleting a category that still has some.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{SpendError, SpendResult};
use crate::models::DEFAULT_COLOR;
use crate::repository::Repository;
use crate::services::{CategoryService, CategoryUpdate};

use super::resolve_category;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with this month's spending
    List {
        /// Include archived categories
        #[arg(short, long)]
        all: bool,
    },

    /// Create a new category
    Add {
        /// Category name (2-20 letters, digits, and spaces)
        name: String,
        /// Emoji shown next to the name
        #[arg(short, long, default_value = "💰")]
        emoji: String,
        /// Hex color like #aabbcc
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: String,
        /// Monthly budget (0 = no budget)
        #[arg(short, long, default_value = "0")]
        budget: f64,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New emoji
        #[arg(short, long)]
        emoji: Option<String>,
        /// New hex color
        #[arg(short, long)]
        color: Option<String>,
        /// New monthly budget
        #[arg(short, long)]
        budget: Option<f64>,
        /// Archive the category (hidden from pickers, expenses kept)
        #[arg(long, conflicts_with = "restore")]
        archive: bool,
        /// Restore an archived category
        #[arg(long)]
        restore: bool,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
        /// Move this category's expenses to another category first
        #[arg(long)]
        reassign_to: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(repo: &Repository, cmd: CategoryCommands) -> SpendResult<()> {
    let service = CategoryService::new(repo);

    match cmd {
        CategoryCommands::List { all } => {
            let currency = repo.settings()?.currency;
            let categories = service.list_categories(all)?;
            let mut rows = Vec::with_capacity(categories.len());
            for category in categories {
                // budget_status zeroes its figures for unbudgeted categories,
                // but the list should still show what was spent
                let mut status = service.budget_status(&category.id)?;
                status.actual = service.monthly_total(&category.id)?;
                rows.push((category, status));
            }
            print!("{}", format_category_list(&rows, &currency));
        }

        CategoryCommands::Add {
            name,
            emoji,
            color,
            budget,
        } => {
            let category = service.add_category(&name, &color, &emoji, budget)?;
            println!("Created category: {}", category);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            emoji,
            color,
            budget,
            archive,
            restore,
        } => {
            let target = resolve_category(repo, &category)?;

            let archived = if archive {
                Some(true)
            } else if restore {
                Some(false)
            } else {
                None
            };

            if name.is_none()
                && emoji.is_none()
                && color.is_none()
                && budget.is_none()
                && archived.is_none()
            {
                println!("No changes specified. Use --name, --emoji, --color, --budget, --archive, or --restore.");
                return Ok(());
            }

            let updated = service.edit_category(
                &target.id,
                CategoryUpdate {
                    name,
                    emoji,
                    color,
                    budget,
                    archived,
                },
            )?;
            println!("Updated category: {}", updated);
        }

        CategoryCommands::Delete {
            category,
            reassign_to,
        } => {
            let target = resolve_category(repo, &category)?;

            if let Some(ref destination) = reassign_to {
                let destination = resolve_category(repo, destination)?;
                let moved = service.reassign_expenses(&target.id, &destination.id)?;
                if moved > 0 {
                    println!("Moved {} expense(s) to {}", moved, destination);
                }
            }

            match service.delete_category(&target.id) {
                Ok(()) => println!("Deleted category: {}", target.name),
                Err(err @ SpendError::CategoryInUse { .. }) => {
                    println!("{}", err);
                    println!("Retry with --reassign-to <category> to move them.");
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}
