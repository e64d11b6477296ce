use thiserror::Error;
use uuid::Uuid;

use crate::ledger::YearMonth;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Error type that captures ledger validation and forecast failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Invalid window: {0}")]
    InvalidWindow(String),
    #[error("Month not found in forecast: {0}")]
    MonthNotFound(YearMonth),
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
