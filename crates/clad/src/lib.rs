#![warn(missing_docs)]

//! clad — parametric wall and roof covering layout.
//!
//! A family of pure layout engines for scale-model building coverings:
//! brick bond patterns on flat walls and surfaces of revolution, siding
//! courses (clapboard, shingle, board-and-batten, bead-board), roof slope
//! frames and ridge/valley seam analysis, plus the pre-flight validators
//! every generator runs first.
//!
//! Everything is data-in/data-out. The CAD integration layer reads faces
//! from a model, hands over plain points, edges, and settings, and turns
//! the returned placement records into solids; no crate here touches a
//! solid modeler.
//!
//! # Example
//!
//! ```
//! use clad::brick::{layout_wall, BondPattern, WallSpec};
//!
//! let spec = WallSpec {
//!     wall_width: 150.0,
//!     wall_height: 80.0,
//!     bond: BondPattern::Flemish,
//!     ..Default::default()
//! };
//! let layout = layout_wall(&spec).unwrap();
//! for brick in &layout.bricks {
//!     // extrude a solid at (brick.u, brick.v) downstream
//!     let _ = (brick.u, brick.v, brick.width);
//! }
//! ```

/// Flat-wall brick bond layout.
pub use clad_brick as brick;
/// Bounding boxes, orientation, and wire validation.
pub use clad_geom as geom;
/// Math types and tolerances.
pub use clad_math as math;
/// Radial (cylinder/cone) brick layout.
pub use clad_radial as radial;
/// Roof slope frames and seam classification.
pub use clad_roof as roof;
/// Linear siding course stackers.
pub use clad_siding as siding;
/// Trim edge and corner analysis.
pub use clad_trim as trim;

/// The types most integrations need, in one import.
pub mod prelude {
    pub use clad_brick::{layout_wall, BondPattern, BrickPlacement, BrickUnit, EdgeFit, WallSpec};
    pub use clad_geom::{
        validate_wire, Axis, BoundingBox, Edge, FaceOrientation, ValidationReport,
    };
    pub use clad_math::{Point3, Tolerance, Vec3};
    pub use clad_radial::{RadialBrickPlacement, RadialSpec, RadialWall};
    pub use clad_roof::{analyze_roof_intersection, RoofFrame, SeamKind};
    pub use clad_siding::{
        bead_board::BeadBoardParams, board_batten::BoardBattenParams,
        clapboard::ClapboardParams, shingle::ShingleParams, shingle::StaggerPattern,
    };
    pub use clad_trim::{detect_corners, EdgeClass, TrimParams};
}
