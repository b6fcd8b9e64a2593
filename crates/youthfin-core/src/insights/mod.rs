//! Transaction history filtering and spending insights
//!
//! Pure functions over an immutable transaction list. Callers recompute the
//! view whenever the criteria change; nothing is cached.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use youthfin_core::insights::{summarize, FilterCriteria, TypeFilter};
//!
//! let criteria = FilterCriteria::new().search("cinema");
//! let view = summarize(&records, &criteria);
//! println!("{} transactions, net {:.2}", view.total_count, view.net_change);
//! ```

pub mod filter;
pub mod summary;

pub use filter::{available_categories, filter, CategoryFilter, FilterCriteria, TypeFilter};
pub use summary::{
    monthly_spending, net_change, spending_by_category, summarize, total_count,
    CategorySpending, InsightsView, MonthlySpending,
};
