//! Transaction filter criteria
//!
//! Builder for the (search, type, category) tuple that decides which
//! transactions are visible. Filtering never touches the source list; the
//! result is a fresh vector in source order.

use serde::{Deserialize, Serialize};

use crate::models::{TransactionRecord, TransactionType};

const ALL: &str = "all";

/// Type selector: everything, or one transaction type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, transaction_type: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == transaction_type,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse::<TransactionType>().map(Self::Only)
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL),
            Self::Only(t) => write!(f, "{}", t),
        }
    }
}

/// Category selector: everything, or one exact category label
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(c) => c,
        }
    }
}

impl From<&str> for CategoryFilter {
    /// `"all"` selects everything; any other text is an exact category
    fn from(s: &str) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter criteria for the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub transaction_type: TypeFilter,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    /// Criteria that let every transaction through
    pub fn new() -> Self {
        Self::default()
    }

    /// Set search text (case-insensitive substring of the description)
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Set type filter
    pub fn transaction_type(mut self, filter: TypeFilter) -> Self {
        self.transaction_type = filter;
        self
    }

    /// Set category filter
    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.transaction_type == TypeFilter::All
            && self.category == CategoryFilter::All
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        record
            .description
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.transaction_type.matches(record.transaction_type)
            && self.category.matches(&record.category)
    }
}

/// Records that satisfy all three criteria, in source order
pub fn filter(records: &[TransactionRecord], criteria: &FilterCriteria) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// `all` followed by every category of the full data set, in first-seen order
pub fn available_categories(records: &[TransactionRecord]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];
    for record in records {
        let seen = categories
            .iter()
            .any(|c| matches!(c, CategoryFilter::Only(name) if *name == record.category));
        if !seen {
            categories.push(CategoryFilter::Only(record.category.clone()));
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_transactions;

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let records = sample_transactions();
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unfiltered());
        assert_eq!(filter(&records, &criteria), records);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample_transactions();
        let result = filter(&records, &FilterCriteria::new().search("CINEMA"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Cinema Ticket");

        let result = filter(&records, &FilterCriteria::new().search("money"));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tx1", "tx5"]);
    }

    #[test]
    fn test_type_and_category_combine() {
        let records = sample_transactions();
        let criteria = FilterCriteria::new()
            .transaction_type(TypeFilter::Only(TransactionType::Debit))
            .category(CategoryFilter::from("Entertainment"));
        let ids: Vec<String> = filter(&records, &criteria)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["tx4", "tx6"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_transactions();
        let criteria = FilterCriteria::new()
            .search("e")
            .transaction_type(TypeFilter::Only(TransactionType::Debit));
        let once = filter(&records, &criteria);
        assert_eq!(filter(&once, &criteria), once);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = sample_transactions();
        assert!(filter(&records, &FilterCriteria::new().search("zzz")).is_empty());
    }

    #[test]
    fn test_available_categories_first_seen() {
        let records = sample_transactions();
        let names: Vec<String> = available_categories(&records)
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "all",
                "Allowance",
                "Food",
                "Education",
                "Entertainment",
                "Gifts",
                "Savings"
            ]
        );
    }

    #[test]
    fn test_available_categories_empty_source() {
        assert_eq!(available_categories(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "transfer".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(TransactionType::Transfer))
        );
        assert!("refund".parse::<TypeFilter>().is_err());
    }
}
