//! Error types for the aggregation engine

use crate::physical::{GroupKey, GroupStats};
use thiserror::Error;

/// Result type alias for aggregation operations
pub type Result<T> = std::result::Result<T, AggError>;

/// Main error type for the aggregation engine
#[derive(Error, Debug)]
pub enum AggError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Worker {worker} panicked during aggregation")]
    WorkerPanicked { worker: usize },

    #[error("Result mismatch for group {key}: expected {expected:?}, got {actual:?}")]
    ResultMismatch {
        key: GroupKey,
        expected: Option<GroupStats>,
        actual: Option<GroupStats>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
