//! Youth and parent dashboard views
//!
//! Both dashboards are read-only summaries assembled from the account
//! summary, the goal list and the transaction history. The parent view adds
//! weekly spending and alerts checked against the parent's spending limit.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::goals::{GoalBook, SavingsGoal};
use crate::insights::spending_by_category;
use crate::models::TransactionRecord;
use crate::profile::ParentSettings;

/// Number of transactions in the "recent" lists
pub const RECENT_LIMIT: usize = 3;

/// A single debit at or above this amount raises an info alert
pub const LARGE_TRANSACTION: f64 = 20.0;

/// Days in the spending window, including the anchor day
const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub balance: f64,
}

impl AccountSummary {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingAlert {
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YouthDashboardView {
    pub account: AccountSummary,
    pub goals: Vec<SavingsGoal>,
    pub recent_transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentDashboardView {
    pub child: AccountSummary,
    pub total_savings: f64,
    pub weekly_spending: f64,
    pub alerts: Vec<SpendingAlert>,
    pub goals: Vec<SavingsGoal>,
    pub recent_activity: Vec<TransactionRecord>,
}

/// Newest `limit` transactions, newest first
pub fn recent_transactions(records: &[TransactionRecord], limit: usize) -> Vec<TransactionRecord> {
    let mut sorted = records.to_vec();
    // Stable sort keeps source order for same-day entries
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Transactions dated within the seven days ending on `today`
pub fn week_ending(records: &[TransactionRecord], today: NaiveDate) -> Vec<TransactionRecord> {
    let start = today - Duration::days(WEEK_DAYS - 1);
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= today)
        .cloned()
        .collect()
}

/// Sum of |amount| over debits in the week ending on `today`
pub fn weekly_spending(records: &[TransactionRecord], today: NaiveDate) -> f64 {
    week_ending(records, today)
        .iter()
        .filter(|r| r.is_debit())
        .map(|r| r.amount.abs())
        .sum()
}

/// Alerts for the week ending on `today`, warnings first
pub fn spending_alerts(
    records: &[TransactionRecord],
    settings: &ParentSettings,
    today: NaiveDate,
) -> Vec<SpendingAlert> {
    let week = week_ending(records, today);
    let limit = settings.spending_limit;
    let mut alerts = Vec::new();

    let total = weekly_spending(records, today);
    if total > limit {
        alerts.push(SpendingAlert {
            severity: AlertSeverity::Warning,
            message: format!(
                "Weekly spending of ${:.2} is over the ${:.2} limit.",
                total, limit
            ),
        });
    }

    for entry in spending_by_category(&week) {
        if entry.amount > limit / 2.0 {
            alerts.push(SpendingAlert {
                severity: AlertSeverity::Warning,
                message: format!("High spending in '{}' category this week.", entry.category),
            });
        }
    }

    for tx in week.iter().filter(|r| r.is_debit()) {
        if tx.amount.abs() >= LARGE_TRANSACTION {
            alerts.push(SpendingAlert {
                severity: AlertSeverity::Info,
                message: format!(
                    "Large transaction of ${:.2} at '{}'.",
                    tx.amount.abs(),
                    tx.description
                ),
            });
        }
    }

    debug!("{} spending alerts for week ending {}", alerts.len(), today);
    alerts
}

pub fn youth_dashboard(
    account: &AccountSummary,
    goals: &GoalBook,
    records: &[TransactionRecord],
) -> YouthDashboardView {
    YouthDashboardView {
        account: account.clone(),
        goals: goals.goals().to_vec(),
        recent_transactions: recent_transactions(records, RECENT_LIMIT),
    }
}

pub fn parent_dashboard(
    child: &AccountSummary,
    goals: &GoalBook,
    records: &[TransactionRecord],
    settings: &ParentSettings,
    today: NaiveDate,
) -> ParentDashboardView {
    ParentDashboardView {
        child: child.clone(),
        total_savings: goals.total_saved(),
        weekly_spending: weekly_spending(records, today),
        alerts: spending_alerts(records, settings, today),
        goals: goals.goals().to_vec(),
        recent_activity: recent_transactions(records, RECENT_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use crate::sample_data::{child_goals, child_transactions, sample_account, sample_transactions};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(limit: f64) -> ParentSettings {
        ParentSettings {
            allowance_amount: 10.0,
            spending_limit: limit,
        }
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let mut records = child_transactions();
        records.reverse();
        let recent = recent_transactions(&records, 2);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ctx1", "ctx2"]);
    }

    #[test]
    fn test_weekly_spending_window() {
        let records = child_transactions();
        // ctx1 (30th) and ctx3 (28th) are debits inside the week
        assert_eq!(weekly_spending(&records, date(2024, 7, 30)), 37.5);
        // Window is 7 days inclusive: Jul 28..=Aug 3
        assert_eq!(weekly_spending(&records, date(2024, 8, 3)), 37.5);
        assert_eq!(weekly_spending(&records, date(2024, 8, 4)), 25.0);
        // Nothing after the anchor day counts
        assert_eq!(weekly_spending(&records, date(2024, 7, 29)), 12.5);
    }

    #[test]
    fn test_weekly_spending_ignores_transfers_and_credits() {
        let records = vec![
            TransactionRecord::new("a", date(2024, 7, 2), "Gift", 50.0, TransactionType::Credit, "Gifts"),
            TransactionRecord::new("b", date(2024, 7, 2), "Savings", -10.0, TransactionType::Transfer, "Savings"),
            TransactionRecord::new("c", date(2024, 7, 2), "Snack", 3.0, TransactionType::Debit, "Food"),
        ];
        assert_eq!(weekly_spending(&records, date(2024, 7, 2)), 3.0);
    }

    #[test]
    fn test_large_transaction_alert() {
        let alerts = spending_alerts(&child_transactions(), &settings(50.0), date(2024, 7, 30));
        assert_eq!(
            alerts,
            vec![SpendingAlert {
                severity: AlertSeverity::Info,
                message: "Large transaction of $25.00 at 'TechStore Purchase'.".to_string(),
            }]
        );
    }

    #[test]
    fn test_limit_and_category_warnings() {
        let alerts = spending_alerts(&child_transactions(), &settings(30.0), date(2024, 7, 30));
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].message.contains("$37.50"));
        assert_eq!(
            alerts[1].message,
            "High spending in 'Electronics' category this week."
        );
        assert_eq!(alerts[2].severity, AlertSeverity::Info);
    }

    #[test]
    fn test_no_alerts_outside_week() {
        assert!(spending_alerts(&child_transactions(), &settings(0.0), date(2024, 9, 1)).is_empty());
    }

    #[test]
    fn test_youth_dashboard() {
        let view = youth_dashboard(
            &sample_account(),
            &GoalBook::new(child_goals()),
            &sample_transactions(),
        );
        assert_eq!(view.account.balance, 125.5);
        assert_eq!(view.goals.len(), 2);
        let ids: Vec<&str> = view.recent_transactions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tx1", "tx2", "tx3"]);
    }

    #[test]
    fn test_parent_dashboard() {
        let view = parent_dashboard(
            &sample_account(),
            &GoalBook::new(child_goals()),
            &child_transactions(),
            &settings(50.0),
            date(2024, 7, 30),
        );
        assert_eq!(view.child.first_name(), "Alex");
        assert_eq!(view.total_savings, 245.0);
        assert_eq!(view.weekly_spending, 37.5);
        assert_eq!(view.alerts.len(), 1);
        assert_eq!(view.recent_activity.len(), 3);
    }
}
