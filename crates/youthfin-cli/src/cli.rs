//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// YouthFin - Youth banking onboarding, savings goals and spending insights
#[derive(Parser)]
#[command(name = "youthfin")]
#[command(about = "Youth personal finance companion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to ~/.local/share/youthfin)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to <data-dir>/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `transactions` and `insights`
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive substring of the description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Transaction type: all, credit, debit, transfer
    #[arg(short = 't', long = "type", default_value = "all")]
    pub transaction_type: String,

    /// Category name, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// CSV file with transaction history (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the youth dashboard, or the parent dashboard with --parent
    Dashboard {
        /// Show the parent's view of the child's account
        #[arg(long)]
        parent: bool,

        /// CSV file with transaction history (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Last day of the spending week (YYYY-MM-DD, defaults to the newest transaction)
        #[arg(long)]
        today: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List transactions, optionally filtered
    Transactions {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories available for filtering
    Categories {
        /// CSV file with transaction history (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show spending insights for the filtered transactions
    Insights {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Run the onboarding wizard from an answers file
    ///
    /// The answers file is TOML with one table per step, keyed by
    /// basic_details, parental_consent, kyc and security.
    Onboard {
        /// Answers file (TOML)
        #[arg(short, long)]
        answers: PathBuf,

        /// Date used for the age check (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,

        /// Answer "later" in the parental consent dialog
        #[arg(long)]
        defer_consent: bool,
    },

    /// Show where a path routes for the stored session
    Route {
        /// Request path, e.g. /savings-goals-manager
        path: String,
    },

    /// Show or change parental controls
    Controls {
        /// Set a control, e.g. --set atmWithdrawal=on
        #[arg(long, value_name = "ID=on|off")]
        set: Vec<String>,
    },

    /// Validate parent settings (allowance and spending limit)
    Settings {
        /// Weekly allowance
        #[arg(long)]
        allowance: Option<f64>,

        /// Spending limit
        #[arg(long)]
        limit: Option<f64>,
    },

    /// Validate the youth profile form
    Profile {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Theme: light, dark, system
        #[arg(long)]
        theme: Option<String>,
    },

    /// Forget the stored onboarding state
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List savings goals (default)
    List,

    /// Create a new savings goal
    Add {
        /// Goal name
        #[arg(short, long)]
        name: String,

        /// Target amount
        #[arg(short, long)]
        target: f64,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,

        /// Optional image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<String>,
    },
}
