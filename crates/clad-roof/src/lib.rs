#![warn(missing_docs)]

//! Roof face analysis for the clad layout kernel.
//!
//! Two concerns live here. [`slope`] derives a course-layout frame for a
//! sloped roof face from its vertex heights — eave and ridge groups, the
//! upslope direction, and a handedness-corrected across-slope direction, so
//! the two faces meeting at a ridge produce congruently oriented shingle
//! courses. [`seam`] classifies the intersection between two adjacent roof
//! faces as a ridge or a valley and derives the dihedral and miter angles
//! for trim stock.
//!
//! Degenerate inputs (no shared edge, ambiguous heights) are expected
//! conditions and come back as result values, never as errors; the caller
//! decides whether to skip the face or warn the user.

pub mod seam;
pub mod slope;

pub use seam::{
    analyze_roof_intersection, classify_seam, dihedral_angle, find_coincident_edges,
    Confidence, DihedralAngle, RoofIntersection, SeamClassification, SeamKind, SharedEdge,
};
pub use slope::{RoofFrame, SlopeExtremes, DEFAULT_Z_TOLERANCE};
