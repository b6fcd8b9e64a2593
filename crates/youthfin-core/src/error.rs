//! Error types for YouthFin

use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Control is locked: {0}")]
    ControlLocked(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),
}

pub type Result<T> = std::result::Result<T, Error>;
