//! Error types for time-activity curve construction
//!
//! [`TacError`] covers violations of the [`Tac`](crate::data::tac::Tac) invariants:
//! curve lengths, time ordering, finiteness and label uniqueness. These are
//! data-level errors raised while a TAC is being assembled, before any
//! analysis runs.

use thiserror::Error;

/// Errors arising from TAC construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TacError {
    /// A curve does not have one sample per time point
    #[error("Curve '{label}' has {found} samples, time axis has {expected}")]
    LengthMismatch {
        /// Label of the offending curve
        label: String,
        /// Number of time points
        expected: usize,
        /// Number of samples in the curve
        found: usize,
    },

    /// Time values are not monotonically increasing
    #[error("Invalid time sequence: times must be non-decreasing (index {index})")]
    InvalidTimeSequence {
        /// First index whose time is smaller than its predecessor
        index: usize,
    },

    /// A time or activity value is NaN or infinite
    #[error("Non-finite value in '{label}' at index {index}")]
    NonFinite {
        /// Label of the offending curve (the time axis label for times)
        label: String,
        /// Index of the offending sample
        index: usize,
    },

    /// The same label was added twice
    #[error("Duplicate curve label '{0}'")]
    DuplicateLabel(String),

    /// The reserved time-axis label was used for a curve
    #[error("Label '{0}' is reserved for the time axis")]
    ReservedLabel(String),
}
