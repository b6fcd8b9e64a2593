//! Transaction command implementations

use std::path::Path;

use anyhow::{Context, Result};
use youthfin_core::{
    import::load_csv,
    insights::{available_categories, filter},
    sample_data::sample_transactions,
    AppConfig, CategoryFilter, FilterCriteria, TransactionRecord, TypeFilter,
};

use super::{format_amount, truncate};
use crate::cli::FilterArgs;

/// Load the history: `--file`, then the configured CSV, then demo data
pub fn load_records(config: &AppConfig, file: Option<&Path>) -> Result<Vec<TransactionRecord>> {
    match file.or(config.transactions_file.as_deref()) {
        Some(path) => load_csv(path)
            .with_context(|| format!("Failed to load transactions from {}", path.display())),
        None => {
            tracing::debug!("No transaction file configured, using demo data");
            Ok(sample_transactions())
        }
    }
}

/// Turn CLI filter flags into criteria
pub fn build_criteria(filters: &FilterArgs) -> Result<FilterCriteria> {
    let transaction_type: TypeFilter = filters
        .transaction_type
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut criteria = FilterCriteria::new()
        .transaction_type(transaction_type)
        .category(CategoryFilter::from(filters.category.as_str()));
    if let Some(search) = &filters.search {
        criteria = criteria.search(search.as_str());
    }
    Ok(criteria)
}

pub fn cmd_transactions(config: &AppConfig, filters: &FilterArgs, json: bool) -> Result<()> {
    let records = load_records(config, filters.file.as_deref())?;
    let criteria = build_criteria(filters)?;
    let matching = filter(&records, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("No transactions found for the selected filters.");
        return Ok(());
    }

    println!();
    println!("📝 Transactions ({} of {})", matching.len(), records.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in &matching {
        println!(
            "   {} │ {:>18} │ {:<13} │ {}",
            tx.date,
            format_amount(tx),
            truncate(&tx.category, 13),
            truncate(&tx.description, 30)
        );
    }

    Ok(())
}

pub fn cmd_categories(config: &AppConfig, file: Option<&Path>) -> Result<()> {
    let records = load_records(config, file)?;

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    for category in available_categories(&records) {
        println!("   {}", category);
    }

    Ok(())
}
