//! Error types
//!
//! None of these are fatal. Navigation errors are steady-state boundary
//! conditions (nothing before the seed, nothing after the result) that the UI
//! reports in the status bar. Configuration errors are reported before the
//! terminal is taken over.

use thiserror::Error;

/// A navigation request that cannot move from the current snapshot
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Already at the beginning of the run")]
    AtStart,
    #[error("No more steps available (the array is sorted)")]
    RunExhausted,
}

/// Unknown algorithm name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm '{0}' (expected bubble, selection, cycle or heap)")]
pub struct ParseAlgorithmError(pub String);

/// Invalid command-line configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Array length must be between 1 and {max}, got {got}")]
    InvalidLength { got: usize, max: usize },
    #[error("Maximum value must be at least 1, got {0}")]
    InvalidMaxValue(i64),
    #[error("Playback interval must be at least {min} ms, got {got} ms")]
    InvalidInterval { got: u64, min: u64 },
    #[error("Invalid array value '{0}'")]
    InvalidValue(String),
    #[error("At most {max} values can be visualized, got {got}")]
    TooManyValues { got: usize, max: usize },
}
