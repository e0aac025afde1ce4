//! Error types for the toggle solver.

use thiserror::Error;

/// Errors that stop a solve before any result is produced.
///
/// An unreachable target is not an error; see [`crate::Outcome`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// One half has more buttons than the enumeration limit allows.
    #[error("half of {half_buttons} buttons exceeds enumeration limit of {limit}")]
    CapacityExceeded { half_buttons: usize, limit: usize },

    /// Requested split point lies beyond the end of the button list.
    #[error("split point {split} is out of range for {buttons} buttons")]
    InvalidSplit { split: usize, buttons: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
