//! Error types for profile intake.
//!
//! The derivations themselves are total; only turning raw form input into a
//! [`Profile`](crate::Profile) can fail.

use thiserror::Error;

/// Errors raised while building a profile from raw input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The name is empty or whitespace only.
    #[error("full name is empty")]
    EmptyName,

    /// No birth date was supplied.
    #[error("birth date is empty")]
    EmptyBirthDate,

    /// The birth date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid birth date {input:?}: {reason}")]
    InvalidBirthDate { input: String, reason: String },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
