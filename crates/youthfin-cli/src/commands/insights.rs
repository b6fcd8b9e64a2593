//! Spending insights command

use anyhow::Result;
use youthfin_core::{summarize, AppConfig};

use super::transactions::{build_criteria, load_records};
use crate::cli::FilterArgs;

pub fn cmd_insights(config: &AppConfig, filters: &FilterArgs, json: bool) -> Result<()> {
    let records = load_records(config, filters.file.as_deref())?;
    let criteria = build_criteria(filters)?;
    let view = summarize(&records, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Filters: search='{}' type={} category={}",
        criteria.search, criteria.transaction_type, criteria.category
    );
    println!("   Transactions: {}", view.total_count);

    let sign = if view.net_change >= 0.0 { "+" } else { "-" };
    println!("   Net change:   {}${:.2}", sign, view.net_change.abs());

    if view.spending_by_category.is_empty() {
        println!();
        println!("   No spending in the selected transactions.");
        return Ok(());
    }

    let total: f64 = view.spending_by_category.iter().map(|s| s.amount).sum();

    println!();
    println!("   By category:");
    for entry in &view.spending_by_category {
        let pct = if total > 0.0 {
            entry.amount / total * 100.0
        } else {
            0.0
        };
        let bar_len = (pct / 5.0).round() as usize;
        println!(
            "   {:<15} ${:>8.2}  {:>5.1}%  {}",
            entry.category,
            entry.amount,
            pct,
            "█".repeat(bar_len)
        );
    }

    println!();
    println!("   By month:");
    for month in &view.monthly_spending {
        println!("   {:<15} ${:>8.2}", month.label, month.amount);
    }

    Ok(())
}
