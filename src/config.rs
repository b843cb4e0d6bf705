/// 100 MiB, the largest upload the back-office form accepted.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 100 * 1024 * 1024;

/// Runtime settings shared by the sync and async runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Inputs larger than this are rejected before any row is read.
    pub max_input_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    pub fn with_max_input_bytes(max_input_bytes: u64) -> Self {
        Self { max_input_bytes }
    }
}
