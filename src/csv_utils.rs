//! CSV loading utilities.
//!
//! Provides generic record reading plus the input-size guard and row
//! validation shared by the runners.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::dto::{InputRow, RowRecord};
use crate::error::{Error, Result};

/// Creates an iterator that reads CSV records from a file.
/// Each record is deserialized into type T.
///
/// Cells are not trimmed: leading whitespace can be meaningful (tax codes).
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_path(path)?
        .into_deserialize())
}

/// Fails with [`Error::InputTooLarge`] when the file exceeds the configured limit.
pub fn check_input_size(size: u64, config: &Config) -> Result<()> {
    if size > config.max_input_bytes {
        return Err(Error::InputTooLarge {
            size,
            limit: config.max_input_bytes,
        });
    }
    Ok(())
}

/// Reads and validates every row of the input file.
/// The first malformed record aborts the load.
pub fn load_rows<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<InputRow>> {
    let path = path.as_ref();
    check_input_size(fs::metadata(path)?.len(), config)?;

    let mut rows = Vec::new();
    for (index, record) in read_csv::<RowRecord, _>(path)?.enumerate() {
        rows.push(record?.validate(index + 1)?);
    }
    Ok(rows)
}
