//! Errors for the ASC conversion pipeline.
//!
//! Contains error variants for:
//! - Row validation failures (missing required field, unparseable value)
//! - Input limits (file larger than the configured maximum)
//! - Technical failures bubbling up from CSV parsing, I/O and task joins
//!
//! Row numbers are 1-based positions among the data records, header excluded.
//! Any row-level error aborts the whole batch: no partial output is produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("row {row}: missing required field `{field}`")]
    MissingRequiredField { row: usize, field: &'static str },

    #[error("row {row}: invalid amount {value:?}")]
    InvalidAmount { row: usize, value: String },

    #[error("row {row}: invalid date {value:?} in field `{field}`")]
    InvalidDate {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: invalid integer {value:?} in field `{field}`")]
    InvalidInteger {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("input file is {size} bytes, above the limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV error: {0}")]
    AsyncCsv(#[from] csv_async::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
