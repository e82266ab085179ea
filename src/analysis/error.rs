//! Analysis error types

use thiserror::Error;

/// Errors that can occur while analysing a TAC
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The requested curve is not part of the TAC
    #[error("Unknown curve label '{0}'")]
    UnknownLabel(String),

    /// The time window selected no samples, so there is no maximum
    #[error("No samples at or after start time {start}")]
    EmptySelection { start: f64 },
}
