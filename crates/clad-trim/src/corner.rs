//! Boundary corner detection and miter angles.

use clad_geom::Edge;
use clad_math::{angle_between_deg, Point3, Vec3};
use serde::{Deserialize, Serialize};

/// How two boundary edges meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerKind {
    /// Convex corner, interior angle below 180 degrees.
    External,
    /// Concave corner, interior angle above 180 degrees.
    Internal,
    /// Collinear edges, no corner to trim.
    Straight,
}

/// A corner in a face boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Where the two edges meet.
    pub position: Point3,
    /// Corner classification.
    pub kind: CornerKind,
    /// Interior angle in degrees, `(0, 360)`.
    pub angle: f64,
    /// Index of the edge leading into the corner.
    pub edge_before: usize,
    /// Index of the edge leading out of the corner.
    pub edge_after: usize,
}

impl Corner {
    /// The miter cut angle: each of the two meeting pieces is cut at half
    /// the interior angle so they close flush.
    pub fn miter_angle(&self) -> f64 {
        self.angle / 2.0
    }
}

/// Interior angle between two consecutive boundary directions, in degrees.
///
/// The turn angle between the directions is always reported in `[0, 180]`;
/// the cross product's Z sign tells which way the boundary turned. For a
/// counterclockwise boundary in a plane with +Z-ish normal, a left turn is
/// a convex corner (`180 - turn`), a right turn a concave one
/// (`180 + turn`).
pub fn interior_angle(direction_in: &Vec3, direction_out: &Vec3) -> f64 {
    let turn = angle_between_deg(direction_in, direction_out);
    let cross = direction_in.cross(direction_out);
    if cross.z > 0.0 {
        180.0 - turn
    } else {
        180.0 + turn
    }
}

/// Classify a corner by its interior angle.
pub fn classify_corner(angle: f64, tolerance_deg: f64) -> CornerKind {
    if (angle - 180.0).abs() < tolerance_deg {
        CornerKind::Straight
    } else if angle < 180.0 {
        CornerKind::External
    } else {
        CornerKind::Internal
    }
}

/// Detect and classify every corner of a closed boundary.
///
/// `boundary` must hold the ordered edges of a closed wire; each corner
/// sits where edge `i` ends and edge `(i + 1) % n` begins.
pub fn detect_corners(boundary: &[Edge], angle_tolerance_deg: f64) -> Vec<Corner> {
    let n = boundary.len();
    let mut corners = Vec::with_capacity(n);

    for i in 0..n {
        let before = &boundary[i];
        let after = &boundary[(i + 1) % n];

        let direction_in = before.end - before.start;
        let direction_out = after.end - after.start;
        let angle = interior_angle(&direction_in, &direction_out);

        corners.push(Corner {
            position: before.end,
            kind: classify_corner(angle, angle_tolerance_deg),
            angle,
            edge_before: i,
            edge_after: (i + 1) % n,
        });
    }

    corners
}

/// Keep only the corners that need trim pieces.
pub fn filter_corners_for_trim(corners: &[Corner], include_straight: bool) -> Vec<Corner> {
    corners
        .iter()
        .copied()
        .filter(|c| include_straight || c.kind != CornerKind::Straight)
        .collect()
}
