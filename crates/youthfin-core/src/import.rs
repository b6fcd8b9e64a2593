//! CSV import of transaction history
//!
//! Expected header: `id,date,description,amount,type,category`. The `id`
//! column is optional; rows without one get a stable id derived from their
//! content so the same file always yields the same ids.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{TransactionRecord, TransactionType};

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    id: Option<String>,
    date: String,
    description: String,
    amount: String,
    #[serde(rename = "type")]
    transaction_type: String,
    #[serde(default)]
    category: Option<String>,
}

/// Parse transaction records from CSV data, keeping file order
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line, result) in rdr.deserialize::<RawRow>().enumerate() {
        let row = result?;
        // Header is line 1
        let line = line + 2;

        let date = parse_date(&row.date)?;
        let amount = parse_amount(&row.amount)?;
        let transaction_type: TransactionType = row
            .transaction_type
            .parse()
            .map_err(|e: String| Error::Import(format!("line {}: {}", line, e)))?;
        let category = row
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string());
        let id = match row.id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => generate_id(&date, &row.description, amount),
        };

        records.push(TransactionRecord {
            id,
            date,
            description: row.description,
            amount,
            transaction_type,
            category,
        });
    }

    debug!("Parsed {} transactions", records.len());
    Ok(records)
}

/// Load transaction records from a CSV file
pub fn load_csv(path: &Path) -> Result<Vec<TransactionRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::Import(format!("Cannot open {}: {}", path.display(), e)))?;
    parse_csv(file)
}

/// Content-derived id for rows that lack one
fn generate_id(date: &NaiveDate, description: &str, amount: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.to_string().as_bytes());
    hasher.update(description.as_bytes());
    hasher.update(amount.to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("tx-{}", &digest[..12])
}

/// Parse a date string in the common formats
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-07-28
        "%m/%d/%Y", // 07/28/2024
        "%d/%m/%Y", // 28/07/2024 (European)
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', '£', '€', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}
