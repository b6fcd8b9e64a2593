//! Aggregate views over a (usually filtered) transaction list

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::filter::{available_categories, filter, CategoryFilter, FilterCriteria};
use crate::models::TransactionRecord;

/// Debit spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
}

/// Debit spending in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySpending {
    /// `YYYY-MM`
    pub month: String,
    /// e.g. "July 2024"
    pub label: String,
    pub amount: f64,
}

/// Everything the history & insights view renders for one set of criteria
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub criteria: FilterCriteria,
    pub categories: Vec<CategoryFilter>,
    pub transactions: Vec<TransactionRecord>,
    pub total_count: usize,
    pub net_change: f64,
    pub spending_by_category: Vec<CategorySpending>,
    pub monthly_spending: Vec<MonthlySpending>,
}

/// Sum of |amount| over debits, grouped by category in first-seen order
pub fn spending_by_category(records: &[TransactionRecord]) -> Vec<CategorySpending> {
    let mut spending: Vec<CategorySpending> = Vec::new();
    for record in records.iter().filter(|r| r.is_debit()) {
        match spending.iter_mut().find(|s| s.category == record.category) {
            Some(entry) => entry.amount += record.amount.abs(),
            None => spending.push(CategorySpending {
                category: record.category.clone(),
                amount: record.amount.abs(),
            }),
        }
    }
    spending
}

/// Signed sum of all amounts
pub fn net_change(records: &[TransactionRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

pub fn total_count(records: &[TransactionRecord]) -> usize {
    records.len()
}

/// Sum of |amount| over debits, per calendar month, oldest first
pub fn monthly_spending(records: &[TransactionRecord]) -> Vec<MonthlySpending> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_debit()) {
        *months
            .entry((record.date.year(), record.date.month()))
            .or_insert(0.0) += record.amount.abs();
    }

    months
        .into_iter()
        .map(|((year, month), amount)| {
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%B %Y").to_string())
                .unwrap_or_default();
            MonthlySpending {
                month: format!("{:04}-{:02}", year, month),
                label,
                amount,
            }
        })
        .collect()
}

/// Filter the source and compute every aggregate in one pass over the result
pub fn summarize(records: &[TransactionRecord], criteria: &FilterCriteria) -> InsightsView {
    let transactions = filter(records, criteria);
    debug!(
        "Recomputed insights: {} of {} transactions match",
        transactions.len(),
        records.len()
    );

    InsightsView {
        criteria: criteria.clone(),
        categories: available_categories(records),
        total_count: total_count(&transactions),
        net_change: net_change(&transactions),
        spending_by_category: spending_by_category(&transactions),
        monthly_spending: monthly_spending(&transactions),
        transactions,
    }
}
