//! Error types for the tunecal ecosystem.

use thiserror::Error;

/// Errors that can occur in tunecal operations.
///
/// The layout engine itself is total over well-formed input; these cover
/// the validation edges where outside data enters the core types.
#[derive(Error, Debug)]
pub enum TuneCalError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Unknown branch '{0}'. Expected 'msk' or 'rnd'")]
    UnknownBranch(String),
}

/// Result type alias for tunecal operations.
pub type TuneCalResult<T> = Result<T, TuneCalError>;
