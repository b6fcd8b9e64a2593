//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `dashboard` - Youth and parent dashboards
//! - `transactions` - Transaction listing and category commands, plus the
//!   shared record loader
//! - `insights` - Spending insights for a filtered history
//! - `goals` - Savings goal commands (list, add)
//! - `onboard` - Onboarding wizard driven by an answers file
//! - `session` - Route and reset commands
//! - `profile` - Profile, parent settings and parental controls

pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod onboard;
pub mod profile;
pub mod session;
pub mod transactions;

// Re-export command functions for main.rs
pub use dashboard::*;
pub use goals::*;
pub use insights::*;
pub use onboard::*;
pub use profile::*;
pub use session::*;
pub use transactions::*;

use youthfin_core::TransactionRecord;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a record's amount the way the history list shows it.
///
/// Sign and colour follow the transaction type, not the sign of the amount.
pub fn format_amount(tx: &TransactionRecord) -> String {
    if tx.is_credit() {
        format!("\x1b[32m{}\x1b[0m", tx.display_amount()) // Green for income
    } else {
        format!("\x1b[31m{}\x1b[0m", tx.display_amount()) // Red for spending
    }
}

/// Render field errors one per line
pub fn print_field_errors(errors: &youthfin_core::FieldErrors) {
    for error in errors.iter() {
        println!("   ❌ {}: {}", error.field, error.message);
    }
}
