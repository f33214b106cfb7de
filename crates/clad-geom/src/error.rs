//! Error types for geometry analysis.

use thiserror::Error;

/// Errors that can occur during geometry analysis.
#[derive(Error, Debug)]
pub enum GeomError {
    /// A bounding box or frame was requested from an empty vertex list.
    #[error("cannot compute bounds from an empty point list")]
    EmptyPointSet,
}

/// Result type for geometry analysis operations.
pub type Result<T> = std::result::Result<T, GeomError>;
