//! Error types for the radial layout engine.

use thiserror::Error;

/// Errors that can occur constructing a radial brick layout.
#[derive(Error, Debug)]
pub enum RadialError {
    /// The surface has no height.
    #[error("z_max ({z_max}) must be greater than z_min ({z_min})")]
    InvalidHeightRange {
        /// Bottom of the surface.
        z_min: f64,
        /// Top of the surface.
        z_max: f64,
    },

    /// A radius or brick dimension was zero or negative.
    #[error("all dimensions must be positive: {0}")]
    NonPositiveDimension(String),

    /// Running-bond offset outside `[0, 1]`.
    #[error("bond_offset must be between 0 and 1, got {0}")]
    InvalidBondOffset(f64),

    /// The narrow end of the surface cannot fit the minimum brick count.
    #[error(
        "radius too small: minimum circumference ({circumference:.2}) only fits \
         {bricks} bricks per course, minimum is {minimum}"
    )]
    RadiusTooSmall {
        /// Circumference at the smaller end radius.
        circumference: f64,
        /// Bricks that would fit there.
        bricks: usize,
        /// Configured minimum bricks per course.
        minimum: usize,
    },
}

/// Result type for radial layout operations.
pub type Result<T> = std::result::Result<T, RadialError>;
