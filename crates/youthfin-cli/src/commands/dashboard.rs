//! Dashboard command (youth and parent views)

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use youthfin_core::{
    dashboard::{parent_dashboard, youth_dashboard, AlertSeverity},
    route,
    sample_data::{child_goals, child_transactions, sample_account, sample_goals},
    AppConfig, GoalBook, Route, RouteTarget, SessionStore, TransactionRecord,
};

use super::{format_amount, load_records, truncate};

/// History for the parent view: an explicit or configured CSV, else the
/// child's demo activity
pub fn parent_records(config: &AppConfig, file: Option<&Path>) -> Result<Vec<TransactionRecord>> {
    if file.is_some() || config.transactions_file.is_some() {
        load_records(config, file)
    } else {
        Ok(child_transactions())
    }
}

/// End of the spending week: `--today`, else the newest transaction, else today
pub fn resolve_week_end(today: Option<&str>, records: &[TransactionRecord]) -> Result<NaiveDate> {
    match today {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today '{}', expected YYYY-MM-DD", d)),
        None => Ok(records
            .iter()
            .map(|r| r.date)
            .max()
            .unwrap_or_else(|| chrono::Local::now().date_naive())),
    }
}

fn print_transactions(records: &[TransactionRecord], empty: &str) {
    if records.is_empty() {
        println!("   {}", empty);
        return;
    }
    for tx in records {
        println!(
            "   {} │ {:>18} │ {}",
            tx.date,
            format_amount(tx),
            truncate(&tx.description, 35)
        );
    }
}

pub fn cmd_dashboard(
    config: &AppConfig,
    data_dir: &Path,
    parent: bool,
    file: Option<&Path>,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let view_route = if parent {
        Route::ParentDashboard
    } else {
        Route::YouthDashboard
    };
    let store = SessionStore::in_dir(data_dir);
    let session = store
        .load()
        .with_context(|| format!("Failed to read session from {}", store.path().display()))?;
    if let RouteTarget::Redirect(to) = route(&session, view_route.path()) {
        println!("Onboarding is not complete yet ({} redirects to {}).", view_route, to);
        println!("  youthfin onboard --answers answers.toml");
        return Ok(());
    }

    let account = sample_account();

    if !parent {
        let records = load_records(config, file)?;
        let goals = GoalBook::new(sample_goals()).with_reward(config.new_goal_reward.clone());
        let view = youth_dashboard(&account, &goals, &records);

        if json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        println!();
        println!("👋 Hi, {}!", view.account.first_name());
        println!("   ─────────────────────────────────────────────────────────────");
        println!("   Current balance: ${:.2}", view.account.balance);
        println!();
        println!("   Goals:");
        for goal in &view.goals {
            println!(
                "   🎯 {:<30} {:>5.0}%",
                truncate(&goal.goal_name, 30),
                goal.progress_percentage()
            );
        }
        println!();
        println!("   Recent transactions:");
        print_transactions(&view.recent_transactions, "No recent transactions.");
        return Ok(());
    }

    let records = parent_records(config, file)?;
    let week_end = resolve_week_end(today, &records)?;
    let goals = GoalBook::new(child_goals());
    let view = parent_dashboard(&account, &goals, &records, &config.parent_defaults, week_end);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!();
    println!("👪 Parent Dashboard: {}", view.child.name);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Current balance: ${:.2}", view.child.balance);
    println!("   Total saved:     ${:.2}", view.total_savings);
    println!(
        "   Weekly spending: ${:.2} (week ending {}, limit ${:.2})",
        view.weekly_spending, week_end, config.parent_defaults.spending_limit
    );

    if !view.alerts.is_empty() {
        println!();
        println!("   Important alerts:");
        for alert in &view.alerts {
            let icon = match alert.severity {
                AlertSeverity::Warning => "⚠️ ",
                AlertSeverity::Info => "ℹ️ ",
            };
            println!("   {} {}", icon, alert.message);
        }
    }

    println!();
    println!("   Goals:");
    for goal in &view.goals {
        println!(
            "   🎯 {:<30} ${:.2} of ${:.2}",
            truncate(&goal.goal_name, 30),
            goal.current_amount,
            goal.target_amount
        );
    }
    println!();
    println!("   Recent activity:");
    let empty = format!("No recent transactions for {}.", view.child.first_name());
    print_transactions(&view.recent_activity, &empty);

    Ok(())
}
