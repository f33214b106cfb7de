//! Eave/ridge detection and the roof-face layout frame.
//!
//! A roof face's orientation cannot come from its bounding box the way a
//! wall's can — the face is tilted by construction. Instead the frame is
//! derived from vertex heights: the vertices at the minimum Z form the eave,
//! those at the maximum Z the ridge, and the eave-to-ridge centroid vector
//! points up the slope.

use clad_geom::{GeomError, Result};
use clad_math::{Point3, Vec3};

/// Z grouping tolerance for eave/ridge membership, in mm.
pub const DEFAULT_Z_TOLERANCE: f64 = 0.1;

/// The lowest and highest vertex groups of a sloped face.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeExtremes {
    /// Z of the eave (face minimum).
    pub eave_z: f64,
    /// Z of the ridge (face maximum).
    pub ridge_z: f64,
    /// Vertices within tolerance of the eave Z.
    pub eave_vertices: Vec<Point3>,
    /// Vertices within tolerance of the ridge Z.
    pub ridge_vertices: Vec<Point3>,
    /// Centroid of the eave group.
    pub eave_center: Point3,
    /// Centroid of the ridge group.
    pub ridge_center: Point3,
    /// Vertical rise from eave to ridge.
    pub rise: f64,
}

fn centroid(points: &[Point3]) -> Point3 {
    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(Vec3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / n)
}

impl SlopeExtremes {
    /// Group a face's vertices into eave and ridge sets.
    ///
    /// Membership is by Z within `z_tolerance` of the face minimum and
    /// maximum. On a flat face every vertex lands in both groups and the
    /// rise is zero.
    pub fn find(vertices: &[Point3], z_tolerance: f64) -> Result<Self> {
        if vertices.is_empty() {
            return Err(GeomError::EmptyPointSet);
        }

        let eave_z = vertices.iter().map(|p| p.z).fold(f64::INFINITY, f64::min);
        let ridge_z = vertices
            .iter()
            .map(|p| p.z)
            .fold(f64::NEG_INFINITY, f64::max);

        let eave_vertices: Vec<Point3> = vertices
            .iter()
            .copied()
            .filter(|p| (p.z - eave_z).abs() <= z_tolerance)
            .collect();
        let ridge_vertices: Vec<Point3> = vertices
            .iter()
            .copied()
            .filter(|p| (p.z - ridge_z).abs() <= z_tolerance)
            .collect();

        Ok(Self {
            eave_z,
            ridge_z,
            eave_center: centroid(&eave_vertices),
            ridge_center: centroid(&ridge_vertices),
            eave_vertices,
            ridge_vertices,
            rise: ridge_z - eave_z,
        })
    }

    /// Unit vector from the eave centroid toward the ridge centroid.
    ///
    /// Degenerates to +Z on a flat face, where the two centroids coincide.
    pub fn upslope(&self) -> Vec3 {
        let direction = self.ridge_center - self.eave_center;
        if direction.norm() < 1e-10 {
            return Vec3::z();
        }
        direction.normalize()
    }

    /// Across-slope direction, taken from the eave itself.
    ///
    /// When at least two eave vertices exist, this is the vector between
    /// the two most-distant ones — the actual eave run, not a generic cross
    /// product — canonicalized to point along whichever of +X/+Y the eave
    /// predominantly follows, so the two faces of a gable produce congruent
    /// course directions. A single-vertex eave falls back to
    /// `normal × upslope`.
    pub fn across(&self, normal: &Vec3) -> Vec3 {
        if self.eave_vertices.len() >= 2 {
            let (mut best_a, mut best_b) = (self.eave_vertices[0], self.eave_vertices[1]);
            let mut best_dist = -1.0;
            for i in 0..self.eave_vertices.len() {
                for j in (i + 1)..self.eave_vertices.len() {
                    let d = (self.eave_vertices[j] - self.eave_vertices[i]).norm_squared();
                    if d > best_dist {
                        best_dist = d;
                        best_a = self.eave_vertices[i];
                        best_b = self.eave_vertices[j];
                    }
                }
            }
            let mut across = (best_b - best_a).normalize();
            // Canonical direction: along the eave's dominant horizontal axis.
            if across.x.abs() >= across.y.abs() {
                if across.x < 0.0 {
                    across = -across;
                }
            } else if across.y < 0.0 {
                across = -across;
            }
            across
        } else {
            normal.cross(&self.upslope()).normalize()
        }
    }
}

/// An orthogonal-enough layout frame for one roof face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofFrame {
    /// Course direction, across the slope.
    pub across: Vec3,
    /// Course stacking direction, up the slope.
    pub upslope: Vec3,
    /// The face normal as supplied.
    pub normal: Vec3,
}

impl RoofFrame {
    /// Build the layout frame for a roof face.
    ///
    /// `across` is flipped if `across × upslope` disagrees in sign with the
    /// supplied face normal, so the frame is always right-handed relative
    /// to the face's outward side.
    pub fn from_face(vertices: &[Point3], normal: &Vec3) -> Result<Self> {
        let extremes = SlopeExtremes::find(vertices, DEFAULT_Z_TOLERANCE)?;
        let upslope = extremes.upslope();
        let mut across = extremes.across(normal);

        if across.cross(&upslope).dot(normal) < 0.0 {
            across = -across;
        }

        Ok(Self {
            across,
            upslope,
            normal: *normal,
        })
    }
}
