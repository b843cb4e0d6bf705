pub mod config;
pub mod csv_utils;
pub mod dto;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod format;
mod runner;

pub use config::Config;
pub use dto::{InputRow, RowRecord};
pub use engine::{convert, convert_records, ConversionResult, Converter, Ledger};
pub use error::{Error, Result};
pub use runner::{run, run_async, write_asc_files, RunOutput};
