//! Error types for the course stackers.

use thiserror::Error;

/// Errors that can occur computing course counts and positions.
///
/// These are programmer-error preconditions (a non-positive divisor, a
/// backwards extent), not user-parameter problems — those go through the
/// per-pattern validators and come back as a `ValidationReport`.
#[derive(Error, Debug)]
pub enum SidingError {
    /// A repeating-unit size was zero or negative.
    #[error("{0} must be positive, got {1}")]
    NonPositiveUnit(&'static str, f64),

    /// A wall extent was negative.
    #[error("{0} must be non-negative, got {1}")]
    NegativeExtent(&'static str, f64),
}

/// Result type for course stacker operations.
pub type Result<T> = std::result::Result<T, SidingError>;
