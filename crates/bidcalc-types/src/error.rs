//! Error types for bidcalc

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Numeric failures inside a calculator.
///
/// These never reach the caller of a public calculator: they are logged and
/// replaced with an all-zero result at the calculator boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Non-finite value in {field}")]
    NonFinite { field: &'static str },

    #[error("Rental plan has no phases or no catalog")]
    EmptyPlan,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error in row {row}: {message}")]
    Catalog { row: usize, message: String },

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
