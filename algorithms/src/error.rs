//! Error types for the algorithm examples.

use sleipnir_hal::HalError;
use thiserror::Error;

/// Errors raised by the example builders and decoders.
///
/// Input validation fails immediately; execution failures pass through from
/// the HAL unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgorithmError {
    /// Oracle builders need at least one input qubit.
    #[error("qubit count must be at least 1, got {0}")]
    InvalidQubitCount(usize),

    /// The hidden string must be a non-empty string over '0'/'1'.
    #[error("invalid hidden string '{0}': expected a non-empty string over '0'/'1'")]
    InvalidHiddenString(String),

    /// The task's result carried no probability vector to decode.
    #[error("task result contains no probability vector")]
    MissingProbability,

    /// An execution-layer failure, passed through unchanged.
    #[error(transparent)]
    Hal(#[from] HalError),
}

/// Result type for algorithm operations.
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
