//! Axis-aligned bounding boxes over face vertex lists.

use clad_math::Point3;

use crate::error::{GeomError, Result};
use crate::orientation::Axis;

/// An axis-aligned bounding box.
///
/// Always derived from a vertex list, never persisted independently of its
/// source vertices; recompute it whenever orientation must be classified.
/// All six fields are required — there is no silent zero default for a
/// missing coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X.
    pub x_min: f64,
    /// Maximum X.
    pub x_max: f64,
    /// Minimum Y.
    pub y_min: f64,
    /// Maximum Y.
    pub y_max: f64,
    /// Minimum Z.
    pub z_min: f64,
    /// Maximum Z.
    pub z_max: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a vertex list.
    ///
    /// Errors on an empty list; a bounding box of nothing is a programmer
    /// error, not a degenerate face.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        let first = points.first().ok_or(GeomError::EmptyPointSet)?;
        let mut bbox = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
            z_min: first.z,
            z_max: first.z,
        };
        for p in &points[1..] {
            bbox.x_min = bbox.x_min.min(p.x);
            bbox.x_max = bbox.x_max.max(p.x);
            bbox.y_min = bbox.y_min.min(p.y);
            bbox.y_max = bbox.y_max.max(p.y);
            bbox.z_min = bbox.z_min.min(p.z);
            bbox.z_max = bbox.z_max.max(p.z);
        }
        Ok(bbox)
    }

    /// Extent along one axis.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_max - self.x_min,
            Axis::Y => self.y_max - self.y_min,
            Axis::Z => self.z_max - self.z_min,
        }
    }

    /// Minimum coordinate along one axis.
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_min,
            Axis::Y => self.y_min,
            Axis::Z => self.z_min,
        }
    }

    /// Maximum coordinate along one axis.
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_max,
            Axis::Y => self.y_max,
            Axis::Z => self.z_max,
        }
    }

    /// The box grown by `margin` on every side.
    ///
    /// Used as the clip volume when trimming over-generated units back to a
    /// face: the face bounds plus one material thickness.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x_min: self.x_min - margin,
            x_max: self.x_max + margin,
            y_min: self.y_min - margin,
            y_max: self.y_max + margin,
            z_min: self.z_min - margin,
            z_max: self.z_max + margin,
        }
    }
}
