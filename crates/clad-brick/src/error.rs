//! Error types for the bond layout engine.

use thiserror::Error;

/// Errors that can occur constructing a wall layout.
///
/// These are precondition violations — there is no sensible partial layout
/// to return for them. Expected-invalid user parameters should be caught by
/// a validator before construction; the engine still re-checks.
#[derive(Error, Debug)]
pub enum BrickError {
    /// A wall or brick dimension was zero or negative.
    #[error("all dimensions must be positive: {0}")]
    NonPositiveDimension(String),

    /// Common bond was configured with no stretcher courses between headers.
    #[error("common bond requires at least 1 stretcher course between headers, got {0}")]
    InvalidCommonCount(u32),
}

/// Result type for bond layout operations.
pub type Result<T> = std::result::Result<T, BrickError>;
