#![warn(missing_docs)]

//! Math types for the clad layout kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! covering-pattern layout: points, vectors, directions, and the tolerance
//! constants shared by every analysis pass. All lengths are millimeters.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Tolerance constants for geometric comparisons.
///
/// The defaults are the thresholds the generators have always used against
/// scale-model geometry: coarse enough to absorb CAD-kernel noise, fine
/// enough not to merge real features at HO/O scale.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// General linear coincidence tolerance in mm (edge endpoints, lengths).
    pub linear: f64,
    /// Bounding-box extent below which an axis counts as the face normal (mm).
    pub plane_extent: f64,
    /// Maximum out-of-plane distance for a vertex of a "planar" face (mm).
    pub planarity: f64,
    /// Angular tolerance in degrees for direction classification.
    pub angular_deg: f64,
}

impl Tolerance {
    /// Default layout tolerances (0.001 mm linear, 0.1 mm extent,
    /// 0.01 mm planarity, 5 degrees angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-3,
        plane_extent: 0.1,
        planarity: 0.01,
        angular_deg: 5.0,
    };

    /// Check if two points are coincident within the linear tolerance.
    pub fn points_coincident(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// The dot product is clamped before `acos` so near-parallel inputs cannot
/// produce NaN. Zero-length input yields 0.
pub fn angle_between_deg(a: &Vec3, b: &Vec3) -> f64 {
    let na = a.norm();
    let nb = b.norm();
    if na < 1e-10 || nb < 1e-10 {
        return 0.0;
    }
    let dot = (a.dot(b) / (na * nb)).clamp(-1.0, 1.0);
    dot.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_coincident_within_tolerance() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-4, 2.0, 3.0);
        assert!(tol.points_coincident(&a, &b));
        let c = Point3::new(1.01, 2.0, 3.0);
        assert!(!tol.points_coincident(&a, &c));
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        let a = Vec3::x();
        let b = Vec3::y();
        assert!((angle_between_deg(&a, &b) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_parallel_and_opposite() {
        let a = Vec3::new(0.0, 0.0, 2.0);
        assert!(angle_between_deg(&a, &Vec3::z()).abs() < 1e-9);
        assert!((angle_between_deg(&a, &-Vec3::z()) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_zero_vector_is_zero() {
        assert_eq!(angle_between_deg(&Vec3::zeros(), &Vec3::x()), 0.0);
    }
}
