use std::path::PathBuf;

use asc_converter::config::DEFAULT_MAX_INPUT_BYTES;
use asc_converter::Config;
use clap::Parser;

/// Convert a spreadsheet CSV export into the Avere.ASC and Dare.ASC ledger files
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Path to the CSV export of the ledger sheet
    pub input: PathBuf,

    /// Directory receiving Avere.ASC and Dare.ASC
    #[arg(short, long, env = "ASC_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Reject inputs larger than this many bytes
    #[arg(long, env = "ASC_MAX_INPUT_BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: u64,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::with_max_input_bytes(self.max_input_bytes)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
