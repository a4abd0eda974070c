use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use finance_tracker::cli::{
    handle_budget_command, handle_dashboard, handle_report_command, handle_transaction_command,
    BudgetCommands, ReportCommands, TransactionCommands,
};
use finance_tracker::config::paths::DATA_DIR_ENV;
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::display::format_category_presets;
use finance_tracker::logging::init_tracing;
use finance_tracker::models::MonthKey;
use finance_tracker::storage::open_file_store;
use finance_tracker::Tracker;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Track income and expenses against monthly budgets",
    long_about = "fintrack records income and expense transactions, keeps a budget \
                  per category and month, and reports where the money went."
)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings and data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Totals, budget status and recent activity
    Dashboard {
        /// Month for the budget status (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// List the preset categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Using data directory");

    let Some(command) = cli.command else {
        println!("fintrack - personal finance tracker");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Categories => {
            print!("{}", format_category_presets());
        }
        Commands::Config => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Page size:         {}", settings.page_size);
            println!("  Recent count:      {}", settings.recent_count);
            println!("  Notification secs: {}", settings.notification_secs);
        }
        command => {
            let storage = open_file_store(&paths)?;
            let mut tracker = Tracker::load(storage, &settings);

            match command {
                Commands::Transaction(cmd) => {
                    handle_transaction_command(&mut tracker, &settings, cmd)?
                }
                Commands::Budget(cmd) => handle_budget_command(&mut tracker, &settings, cmd)?,
                Commands::Report(cmd) => handle_report_command(&tracker, &settings, cmd)?,
                Commands::Dashboard { month } => handle_dashboard(&tracker, &settings, month)?,
                Commands::Categories | Commands::Config => {}
            }
        }
    }

    Ok(())
}
