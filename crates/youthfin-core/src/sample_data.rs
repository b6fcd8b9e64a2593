//! Built-in demo data for the youth and parent views

use chrono::NaiveDate;

use crate::dashboard::AccountSummary;
use crate::goals::SavingsGoal;
use crate::models::{TransactionRecord, TransactionType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Youth transaction history, newest first
pub fn sample_transactions() -> Vec<TransactionRecord> {
    use TransactionType::*;
    vec![
        TransactionRecord::new("tx1", date(2024, 7, 28), "Pocket Money", 20.00, Credit, "Allowance"),
        TransactionRecord::new("tx2", date(2024, 7, 27), "Cafe Treats", -5.50, Debit, "Food"),
        TransactionRecord::new("tx3", date(2024, 7, 26), "Book Store", -12.00, Debit, "Education"),
        TransactionRecord::new("tx4", date(2024, 7, 25), "Online Game Credit", -10.00, Debit, "Entertainment"),
        TransactionRecord::new("tx5", date(2024, 7, 24), "Birthday Money from Gran", 50.00, Credit, "Gifts"),
        TransactionRecord::new("tx6", date(2024, 7, 23), "Cinema Ticket", -8.00, Debit, "Entertainment"),
        TransactionRecord::new("tx7", date(2024, 7, 20), "Savings Transfer", -10.00, Transfer, "Savings"),
    ]
}

/// Recent activity shown on the parent dashboard
pub fn child_transactions() -> Vec<TransactionRecord> {
    use TransactionType::*;
    vec![
        TransactionRecord::new("ctx1", date(2024, 7, 30), "TechStore Purchase", -25.00, Debit, "Electronics"),
        TransactionRecord::new("ctx2", date(2024, 7, 29), "Weekly Allowance", 15.00, Credit, "Allowance"),
        TransactionRecord::new("ctx3", date(2024, 7, 28), "Book for School", -12.50, Debit, "Education"),
    ]
}

/// Goals on the savings goal manager
pub fn sample_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal {
            image_url: Some("https://placekitten.com/300/200?image=3".to_string()),
            reward: Some("Audio Pro!".to_string()),
            ..SavingsGoal::new("sg1", "New Headphones", 75.0, 150.0)
        },
        SavingsGoal {
            description: Some("Saving for a trip with friends.".to_string()),
            reward: Some("Explorer Badge!".to_string()),
            ..SavingsGoal::new("sg2", "Summer Trip Fund", 200.0, 500.0)
        },
        SavingsGoal {
            image_url: Some("https://placekitten.com/300/200?image=4".to_string()),
            ..SavingsGoal::new("sg3", "Learn to Code Course", 25.0, 100.0)
        },
    ]
}

/// Goals shown on the parent dashboard
pub fn child_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal {
            image_url: Some("https://placekitten.com/300/200?image=1".to_string()),
            reward: Some("Level Up!".to_string()),
            ..SavingsGoal::new("sg1", "New Video Game", 30.0, 60.0)
        },
        SavingsGoal {
            image_url: Some("https://placekitten.com/300/200?image=2".to_string()),
            reward: Some("Adventure Awaits!".to_string()),
            ..SavingsGoal::new("sg2", "Summer Camp", 215.0, 400.0)
        },
    ]
}

/// Account holder shown on both dashboards
pub fn sample_account() -> AccountSummary {
    AccountSummary {
        name: "Alex Youth".to_string(),
        balance: 125.50,
    }
}
