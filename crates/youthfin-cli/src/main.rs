//! YouthFin CLI - Youth personal finance companion
//!
//! Usage:
//!   youthfin onboard --answers answers.toml   Run the onboarding wizard
//!   youthfin route /youth-dashboard           Check where a path leads
//!   youthfin dashboard --parent               Parent view with spending alerts
//!   youthfin transactions --type debit        List filtered transactions
//!   youthfin insights --category Food         Spending insights
//!   youthfin goals add --name Bike --target 120

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use youthfin_core::config::{default_data_dir, AppConfig};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir().context("Could not determine a data directory; pass --data-dir")?,
    };
    let config = AppConfig::load(cli.config.as_deref(), &data_dir)?;

    match cli.command {
        Commands::Dashboard {
            parent,
            file,
            today,
            json,
        } => commands::cmd_dashboard(
            &config,
            &data_dir,
            parent,
            file.as_deref(),
            today.as_deref(),
            json,
        ),
        Commands::Transactions { filters, json } => {
            commands::cmd_transactions(&config, &filters, json)
        }
        Commands::Categories { file } => commands::cmd_categories(&config, file.as_deref()),
        Commands::Insights { filters, json } => commands::cmd_insights(&config, &filters, json),
        Commands::Goals { action } => match action {
            None | Some(GoalsAction::List) => commands::cmd_goals_list(&config),
            Some(GoalsAction::Add {
                name,
                target,
                description,
                image_url,
                target_date,
            }) => commands::cmd_goals_add(
                &config,
                &name,
                target,
                description,
                image_url,
                target_date.as_deref(),
            ),
        },
        Commands::Onboard {
            answers,
            today,
            defer_consent,
        } => commands::cmd_onboard(
            &config,
            &data_dir,
            &answers,
            today.as_deref(),
            defer_consent,
        ),
        Commands::Route { path } => commands::cmd_route(&data_dir, &path),
        Commands::Controls { set } => commands::cmd_controls(&set),
        Commands::Settings { allowance, limit } => {
            commands::cmd_settings(&config, allowance, limit)
        }
        Commands::Profile {
            name,
            email,
            phone,
            theme,
        } => commands::cmd_profile(&name, &email, phone, theme.as_deref()),
        Commands::Reset { yes } => commands::cmd_reset(&data_dir, yes),
    }
}
