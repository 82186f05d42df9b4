//! Data management CLI commands
//!
//! Implements backup export, import, and the destructive clear operation.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{SpendError, SpendResult};
use crate::repository::Repository;
use crate::services::ExpenseService;
use crate::transfer::{export_json, import_json};

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Export all data as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import data from a JSON export, replacing everything stored
    Import {
        /// Path to a previously exported JSON file
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every expense (categories and settings are kept)
    #[command(name = "clear-expenses")]
    ClearExpenses {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a data command
pub fn handle_data_command(repo: &Repository, cmd: DataCommands) -> SpendResult<()> {
    match cmd {
        DataCommands::Export { output } => match output {
            Some(path) => {
                let file = fs::File::create(&path)
                    .map_err(|e| SpendError::Export(format!("Cannot create {:?}: {}", path, e)))?;
                export_json(repo, file)?;
                println!("Exported data to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                export_json(repo, stdout.lock())?;
                println!();
            }
        },

        DataCommands::Import { file, yes } => {
            if !yes && !confirm("This replaces ALL stored data. Continue? [y/N] ")? {
                println!("Import cancelled.");
                return Ok(());
            }

            let contents = fs::read_to_string(&file)
                .map_err(|e| SpendError::Import(format!("Cannot read {:?}: {}", file, e)))?;
            let doc = import_json(repo, &contents)?;
            println!(
                "Imported {} expense(s) and {} custom category(ies).",
                doc.expenses.len(),
                doc.categories.custom.len()
            );
        }

        DataCommands::ClearExpenses { yes } => {
            if !yes && !confirm("Delete ALL expenses? This cannot be undone. [y/N] ")? {
                println!("Clear cancelled.");
                return Ok(());
            }

            ExpenseService::new(repo).clear_all()?;
            println!("All expenses deleted.");
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> SpendResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
