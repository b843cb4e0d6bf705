//! The runner is responsible for loading the input CSV, converting its rows,
//! and writing `Avere.ASC` and `Dare.ASC` into the output directory.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

use std::path::{Path, PathBuf};

use crate::engine::{ConversionResult, Ledger};

pub use async_runner::run as run_async;
pub use sync_runner::{run, write_asc_files};

/// What a runner produced: the converted batch and the files it wrote,
/// in `[Avere, Dare]` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub result: ConversionResult,
    pub files: [PathBuf; 2],
}

fn asc_paths(out_dir: &Path) -> [(Ledger, PathBuf); 2] {
    [Ledger::Avere, Ledger::Dare].map(|ledger| (ledger, out_dir.join(ledger.file_name())))
}
