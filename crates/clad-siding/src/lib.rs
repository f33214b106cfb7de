#![warn(missing_docs)]

//! Linear course stackers for siding patterns.
//!
//! Four covering families share one shape: tile a rectangular face with a
//! repeating unit along one or both axes, then emit per-unit positions. The
//! variants differ only in what is tiled:
//!
//! - [`clapboard`]: horizontal courses stacked up the wall, no stagger;
//! - [`shingle`]: courses with a periodic half/third horizontal stagger and
//!   an over-generation margin trimmed downstream;
//! - [`board_batten`]: vertical boards plus a batten centered on each seam;
//! - [`bead_board`]: evenly spaced groove centerlines with a fixed-width
//!   groove around each.
//!
//! Each pattern carries its own parameter validator returning an accumulated
//! [`ValidationReport`](clad_geom::ValidationReport); layout helpers only
//! fault on true preconditions (non-positive unit sizes, negative extents).

pub mod bead_board;
pub mod board_batten;
pub mod clapboard;
pub mod error;
pub mod shingle;

pub use error::{Result, SidingError};

/// Number of repeating units needed to cover `extent`.
///
/// `ceil(extent / unit)`: one partial unit still takes a whole unit of
/// stock. Zero extent needs zero units; a negative extent or a non-positive
/// unit size is a fault.
pub fn unit_count(extent: f64, unit: f64) -> Result<usize> {
    if unit <= 0.0 {
        return Err(SidingError::NonPositiveUnit("unit size", unit));
    }
    if extent < 0.0 {
        return Err(SidingError::NegativeExtent("extent", extent));
    }
    Ok((extent / unit).ceil() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_count_is_ceiling() {
        assert_eq!(unit_count(100.0, 10.0).unwrap(), 10);
        assert_eq!(unit_count(101.0, 10.0).unwrap(), 11);
        assert_eq!(unit_count(99.9, 10.0).unwrap(), 10);
    }

    #[test]
    fn partial_wall_takes_one_unit() {
        assert_eq!(unit_count(3.0, 10.0).unwrap(), 1);
    }

    #[test]
    fn zero_extent_takes_no_units() {
        assert_eq!(unit_count(0.0, 10.0).unwrap(), 0);
    }

    #[test]
    fn bad_inputs_fault() {
        assert!(matches!(
            unit_count(10.0, 0.0),
            Err(SidingError::NonPositiveUnit(_, _))
        ));
        assert!(matches!(
            unit_count(-1.0, 10.0),
            Err(SidingError::NegativeExtent(_, _))
        ));
    }
}
