#![warn(missing_docs)]

//! Trim placement analysis.
//!
//! Before trim stock can be applied to a sided wall, its boundary edges
//! must be sorted into the trim kinds they carry — corner trim on vertical
//! edges, eave trim on horizontal ones, gable trim on diagonals — and the
//! edges that take no trim at all (the foundation line, door and window
//! openings) filtered out. Boundary corners get classified as external or
//! internal so mitered pieces can meet flush.

pub mod corner;
pub mod edges;

pub use corner::{
    classify_corner, detect_corners, filter_corners_for_trim, interior_angle, Corner,
    CornerKind,
};
pub use edges::{classify_edge, classify_edges, filter_trim_edges, EdgeClass, TrimParams};
