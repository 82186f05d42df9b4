use anyhow::Result;
use clap::{Parser, Subcommand};

use smartspend::cli::{
    handle_category_command, handle_data_command, handle_expense_command, CategoryCommands,
    DataCommands, ExpenseCommands,
};
use smartspend::config::paths::SmartSpendPaths;
use smartspend::repository::{Repository, SettingsUpdate};
use smartspend::storage::Store;

#[derive(Parser)]
#[command(
    name = "smartspend",
    version,
    about = "Local-first personal expense tracker",
    long_about = "SmartSpend tracks daily expenses against categorized monthly \
                  budgets. All data lives in a single local JSON document; \
                  nothing ever leaves your machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Export, import, and bulk data commands
    #[command(subcommand)]
    Data(DataCommands),

    /// Show this month's spending summary
    Summary,

    /// View or change settings
    Settings {
        /// Currency symbol used when displaying amounts
        #[arg(long)]
        currency: Option<String>,
        /// UI theme name
        #[arg(long)]
        theme: Option<String>,
        /// Enable or disable budget alerts (true/false)
        #[arg(long)]
        budget_alerts: Option<bool>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SmartSpendPaths::new()?;
    paths.ensure_directories()?;
    let repo = Repository::new(Store::new(&paths));

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&repo, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&repo, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&repo, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_expense_command(&repo, ExpenseCommands::Summary)?;
        }
        Some(Commands::Settings {
            currency,
            theme,
            budget_alerts,
        }) => {
            if currency.is_none() && theme.is_none() && budget_alerts.is_none() {
                let settings = repo.settings()?;
                println!("Settings:");
                println!("  Theme:         {}", settings.theme);
                println!("  Currency:      {}", settings.currency);
                println!("  Budget alerts: {}", settings.budget_alerts);
            } else {
                let settings = repo.update_settings(SettingsUpdate {
                    theme,
                    currency,
                    budget_alerts,
                })?;
                println!("Settings updated:");
                println!("  Theme:         {}", settings.theme);
                println!("  Currency:      {}", settings.currency);
                println!("  Budget alerts: {}", settings.budget_alerts);
            }
        }
        Some(Commands::Config) => {
            println!("SmartSpend Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
        }
        None => {
            println!("SmartSpend - Local-first expense tracking");
            println!();
            println!("Run 'smartspend --help' for usage information.");
            println!("Run 'smartspend summary' for this month at a glance.");
        }
    }

    Ok(())
}
