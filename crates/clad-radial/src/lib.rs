#![warn(missing_docs)]

//! Brick layout for surfaces of revolution.
//!
//! Generates a running-bond brick pattern around a cylinder or cone
//! (smokestacks, water towers, silos). Each course holds an integer number
//! of bricks whose angular spans tile the full circle exactly — unlike the
//! flat-wall engine there are never closer units and never an overrun
//! margin; the circle closes by construction.
//!
//! Coordinate system: Z up the axis of revolution, angles in radians
//! counterclockwise from +X, radius measured from the axis. For cones the
//! radius varies linearly with Z.

pub mod error;

pub use error::{RadialError, Result};

use clad_math::Point3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Minimum bricks per course unless overridden in the spec.
pub const DEFAULT_MIN_BRICKS_PER_COURSE: usize = 8;

/// Surface and brick dimensions for one radial layout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialSpec {
    /// Bottom Z of the surface.
    pub z_min: f64,
    /// Top Z of the surface.
    pub z_max: f64,
    /// Radius at `z_min`.
    pub radius_at_z_min: f64,
    /// Radius at `z_max` (equal to `radius_at_z_min` for a cylinder).
    pub radius_at_z_max: f64,
    /// Brick length along the circumference.
    pub brick_length: f64,
    /// Brick height along Z.
    pub brick_height: f64,
    /// Brick thickness, radially.
    pub brick_thickness: f64,
    /// Average mortar joint thickness.
    pub mortar: f64,
    /// True for an inner surface (bricks project inward).
    pub concave: bool,
    /// Running-bond offset ratio in `[0, 1]` (0.5 = half brick).
    pub bond_offset: f64,
    /// Fewest bricks allowed in any course.
    pub min_bricks_per_course: usize,
}

impl Default for RadialSpec {
    fn default() -> Self {
        Self {
            z_min: 0.0,
            z_max: 100.0,
            radius_at_z_min: 50.0,
            radius_at_z_max: 50.0,
            brick_length: 2.32,
            brick_height: 0.65,
            brick_thickness: 1.09,
            mortar: 0.11,
            concave: false,
            bond_offset: 0.5,
            min_bricks_per_course: DEFAULT_MIN_BRICKS_PER_COURSE,
        }
    }
}

/// One brick on a radial surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialBrickPlacement {
    /// Sequential number, dense from 0 across the whole surface.
    pub index: usize,
    /// Course number, 0-indexed from the bottom.
    pub course: usize,
    /// Brick position within the course, 0-indexed.
    pub position_in_course: usize,
    /// Z of the brick bottom.
    pub z: f64,
    /// Start angle in radians, normalized to `[0, 2π)`.
    pub angle_start: f64,
    /// End angle in radians; exceeds `2π` for the brick spanning the seam.
    pub angle_end: f64,
    /// Course radius at this Z.
    pub radius: f64,
    /// Brick height.
    pub height: f64,
    /// Brick radial thickness.
    pub thickness: f64,
    /// True when the brick projects inward.
    pub concave: bool,
}

impl RadialBrickPlacement {
    /// Copy of this placement with a different sequential index.
    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Inner and outer face radii.
    ///
    /// Convex bricks project thickness outward from the course radius,
    /// concave bricks inward.
    pub fn radii(&self) -> (f64, f64) {
        if self.concave {
            (self.radius - self.thickness, self.radius)
        } else {
            (self.radius, self.radius + self.thickness)
        }
    }

    /// The brick's 8 corner vertices.
    ///
    /// Order: bottom inner-start, inner-end, outer-end, outer-start, then
    /// the same four at the top.
    pub fn vertices(&self) -> [Point3; 8] {
        let (r_inner, r_outer) = self.radii();
        let z_bottom = self.z;
        let z_top = self.z + self.height;

        let at = |r: f64, a: f64, z: f64| Point3::new(r * a.cos(), r * a.sin(), z);
        let (a0, a1) = (self.angle_start, self.angle_end);

        [
            at(r_inner, a0, z_bottom),
            at(r_inner, a1, z_bottom),
            at(r_outer, a1, z_bottom),
            at(r_outer, a0, z_bottom),
            at(r_inner, a0, z_top),
            at(r_inner, a1, z_top),
            at(r_outer, a1, z_top),
            at(r_outer, a0, z_top),
        ]
    }

    /// The 4 vertices of the visible face.
    ///
    /// Outer-radius face for convex surfaces, inner-radius face for concave.
    /// Order: bottom-start, bottom-end, top-end, top-start.
    pub fn visible_face(&self) -> [Point3; 4] {
        let v = self.vertices();
        if self.concave {
            [v[0], v[1], v[5], v[4]]
        } else {
            [v[3], v[2], v[6], v[7]]
        }
    }
}

/// Summary of a generated radial layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialStats {
    /// Courses generated.
    pub courses: usize,
    /// Total bricks placed.
    pub total_bricks: usize,
    /// Fewest bricks in any course.
    pub min_bricks_per_course: usize,
    /// Most bricks in any course.
    pub max_bricks_per_course: usize,
    /// Mean bricks per course.
    pub avg_bricks_per_course: f64,
    /// True when the two end radii differ.
    pub is_tapered: bool,
    /// Radius change per unit Z (negative when narrowing upward).
    pub taper_rate: f64,
}

/// A complete generated radial layout.
#[derive(Debug, Clone)]
pub struct RadialLayout {
    /// All placements, course-major, indexed densely from 0.
    pub bricks: Vec<RadialBrickPlacement>,
    /// Generation summary.
    pub stats: RadialStats,
}

/// A validated radial surface, ready to generate.
#[derive(Debug, Clone)]
pub struct RadialWall {
    spec: RadialSpec,
    surface_height: f64,
    course_pitch: f64,
    courses: usize,
    taper_rate: f64,
}

impl RadialWall {
    /// Validate the spec and derive the course grid.
    ///
    /// The minimum-brick-count check is a construction-time precondition:
    /// if the narrower end radius cannot fit `min_bricks_per_course` bricks,
    /// no course there could close the circle sensibly, so the whole layout
    /// is refused up front.
    pub fn new(spec: RadialSpec) -> Result<Self> {
        if spec.z_max <= spec.z_min {
            return Err(RadialError::InvalidHeightRange {
                z_min: spec.z_min,
                z_max: spec.z_max,
            });
        }
        let dims = [
            ("radius_at_z_min", spec.radius_at_z_min),
            ("radius_at_z_max", spec.radius_at_z_max),
            ("brick_length", spec.brick_length),
            ("brick_height", spec.brick_height),
            ("brick_thickness", spec.brick_thickness),
            ("mortar", spec.mortar),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(RadialError::NonPositiveDimension(format!(
                    "{name} = {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&spec.bond_offset) {
            return Err(RadialError::InvalidBondOffset(spec.bond_offset));
        }

        let min_radius = spec.radius_at_z_min.min(spec.radius_at_z_max);
        let min_circumference = TAU * min_radius;
        let brick_pitch = spec.brick_length + spec.mortar;
        let min_bricks = (min_circumference / brick_pitch) as usize;
        if min_bricks < spec.min_bricks_per_course {
            return Err(RadialError::RadiusTooSmall {
                circumference: min_circumference,
                bricks: min_bricks,
                minimum: spec.min_bricks_per_course,
            });
        }

        let surface_height = spec.z_max - spec.z_min;
        let course_pitch = spec.brick_height + spec.mortar;
        // No overrun margin here: the flat-wall engine over-generates for
        // clipping, but a radial course either exists whole or not at all.
        let courses = ((surface_height / course_pitch) as usize).max(1);
        let taper_rate = (spec.radius_at_z_max - spec.radius_at_z_min) / surface_height;

        Ok(Self {
            spec,
            surface_height,
            course_pitch,
            courses,
            taper_rate,
        })
    }

    /// The validated spec.
    pub fn spec(&self) -> &RadialSpec {
        &self.spec
    }

    /// Radius change per unit Z.
    pub fn taper_rate(&self) -> f64 {
        self.taper_rate
    }

    /// Number of courses that will be generated.
    pub fn course_count(&self) -> usize {
        self.courses
    }

    /// Radius at a Z position: constant for cylinders, linearly
    /// interpolated for cones, clamped outside `[z_min, z_max]`.
    pub fn radius_at(&self, z: f64) -> f64 {
        if z <= self.spec.z_min {
            return self.spec.radius_at_z_min;
        }
        if z >= self.spec.z_max {
            return self.spec.radius_at_z_max;
        }
        let t = (z - self.spec.z_min) / self.surface_height;
        self.spec.radius_at_z_min + t * (self.spec.radius_at_z_max - self.spec.radius_at_z_min)
    }

    /// Bricks that fit around the circumference at `radius`, and the angle
    /// each one subtends.
    ///
    /// The count is an integer so the course wraps cleanly; the per-brick
    /// angle absorbs the rounding, so the circle always divides evenly.
    pub fn bricks_per_course(&self, radius: f64) -> (usize, f64) {
        let circumference = TAU * radius;
        let brick_pitch = self.spec.brick_length + self.spec.mortar;
        let count = ((circumference / brick_pitch) as usize).max(1);
        (count, TAU / count as f64)
    }

    /// Generate the complete radial brick layout.
    pub fn generate(&self) -> RadialLayout {
        let mut bricks = Vec::new();
        let mut per_course = Vec::with_capacity(self.courses);

        for course in 0..self.courses {
            let z = self.spec.z_min + course as f64 * self.course_pitch;
            let radius = self.radius_at(z);
            let (count, angle_per_brick) = self.bricks_per_course(radius);
            per_course.push(count);

            let start_offset = if course % 2 == 1 {
                angle_per_brick * self.spec.bond_offset
            } else {
                0.0
            };

            for position in 0..count {
                let mut angle_start =
                    (start_offset + position as f64 * angle_per_brick).rem_euclid(TAU);
                let mut angle_end = (angle_start + angle_per_brick).rem_euclid(TAU);
                if angle_end < angle_start {
                    angle_end += TAU; // the brick spanning the wrap seam
                }
                // rem_euclid can land exactly on TAU when the sum rounds up
                if angle_start >= TAU {
                    angle_start -= TAU;
                    angle_end -= TAU;
                }

                bricks.push(RadialBrickPlacement {
                    index: 0,
                    course,
                    position_in_course: position,
                    z,
                    angle_start,
                    angle_end,
                    radius,
                    height: self.spec.brick_height,
                    thickness: self.spec.brick_thickness,
                    concave: self.spec.concave,
                });
            }
        }

        let bricks: Vec<_> = bricks
            .into_iter()
            .enumerate()
            .map(|(i, b)| b.with_index(i))
            .collect();

        let total = bricks.len();
        let stats = RadialStats {
            courses: self.courses,
            total_bricks: total,
            min_bricks_per_course: per_course.iter().copied().min().unwrap_or(0),
            max_bricks_per_course: per_course.iter().copied().max().unwrap_or(0),
            avg_bricks_per_course: if per_course.is_empty() {
                0.0
            } else {
                total as f64 / per_course.len() as f64
            },
            is_tapered: self.spec.radius_at_z_min != self.spec.radius_at_z_max,
            taper_rate: self.taper_rate,
        };

        RadialLayout { bricks, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder() -> RadialSpec {
        RadialSpec::default()
    }

    fn cone() -> RadialSpec {
        RadialSpec {
            radius_at_z_min: 60.0,
            radius_at_z_max: 40.0,
            ..RadialSpec::default()
        }
    }

    #[test]
    fn cylinder_has_no_taper() {
        let wall = RadialWall::new(cylinder()).unwrap();
        assert_eq!(wall.taper_rate(), 0.0);
        assert_relative_eq!(wall.radius_at(37.0), 50.0);
    }

    #[test]
    fn cone_interpolates_and_clamps_radius() {
        let wall = RadialWall::new(cone()).unwrap();
        assert_relative_eq!(wall.taper_rate(), -0.2);
        assert_relative_eq!(wall.radius_at(0.0), 60.0);
        assert_relative_eq!(wall.radius_at(50.0), 50.0);
        assert_relative_eq!(wall.radius_at(100.0), 40.0);
        assert_relative_eq!(wall.radius_at(-10.0), 60.0);
        assert_relative_eq!(wall.radius_at(200.0), 40.0);
    }

    #[test]
    fn cylinder_courses_are_identical() {
        let wall = RadialWall::new(cylinder()).unwrap();
        let layout = wall.generate();
        let (count0, _) = wall.bricks_per_course(50.0);
        for course in 0..wall.course_count() {
            let n = layout
                .bricks
                .iter()
                .filter(|b| b.course == course)
                .count();
            assert_eq!(n, count0);
        }
        assert!(layout.bricks.iter().all(|b| b.radius == 50.0));
    }

    #[test]
    fn narrowing_cone_courses_shrink() {
        let wall = RadialWall::new(cone()).unwrap();
        let layout = wall.generate();
        let mut previous = usize::MAX;
        for course in 0..wall.course_count() {
            let n = layout
                .bricks
                .iter()
                .filter(|b| b.course == course)
                .count();
            assert!(n <= previous, "course {course} grew: {n} > {previous}");
            previous = n;
        }
    }

    #[test]
    fn every_course_tiles_the_full_circle() {
        let wall = RadialWall::new(cone()).unwrap();
        let layout = wall.generate();
        for course in 0..wall.course_count() {
            let span: f64 = layout
                .bricks
                .iter()
                .filter(|b| b.course == course)
                .map(|b| b.angle_end - b.angle_start)
                .sum();
            assert_relative_eq!(span, TAU, epsilon = 1e-9);
        }
    }

    #[test]
    fn odd_courses_start_at_bond_offset() {
        let wall = RadialWall::new(cylinder()).unwrap();
        let layout = wall.generate();
        let (_, angle_per_brick) = wall.bricks_per_course(50.0);

        let first_even = layout
            .bricks
            .iter()
            .find(|b| b.course == 0 && b.position_in_course == 0)
            .unwrap();
        let first_odd = layout
            .bricks
            .iter()
            .find(|b| b.course == 1 && b.position_in_course == 0)
            .unwrap();
        assert_relative_eq!(first_even.angle_start, 0.0);
        assert_relative_eq!(first_odd.angle_start, angle_per_brick * 0.5);
    }

    #[test]
    fn angles_normalized_with_wrap_seam() {
        let wall = RadialWall::new(cylinder()).unwrap();
        let layout = wall.generate();
        for b in &layout.bricks {
            assert!(b.angle_start >= 0.0 && b.angle_start < TAU);
            assert!(b.angle_end > b.angle_start);
        }
        // Odd courses are offset, so exactly one brick spans the seam.
        let wrapping = layout
            .bricks
            .iter()
            .filter(|b| b.course == 1 && b.angle_end > TAU)
            .count();
        assert_eq!(wrapping, 1);
    }

    #[test]
    fn convex_brick_projects_outward() {
        let wall = RadialWall::new(cylinder()).unwrap();
        let brick = wall.generate().bricks[0];
        let (r_inner, r_outer) = brick.radii();
        assert_relative_eq!(r_inner, 50.0);
        assert_relative_eq!(r_outer, 50.0 + brick.thickness);
        // Visible face sits at the outer radius.
        for v in brick.visible_face() {
            assert_relative_eq!((v.x * v.x + v.y * v.y).sqrt(), r_outer, epsilon = 1e-9);
        }
    }

    #[test]
    fn concave_brick_projects_inward() {
        let spec = RadialSpec {
            concave: true,
            ..cylinder()
        };
        let wall = RadialWall::new(spec).unwrap();
        let brick = wall.generate().bricks[0];
        let (r_inner, r_outer) = brick.radii();
        assert_relative_eq!(r_outer, 50.0);
        assert_relative_eq!(r_inner, 50.0 - brick.thickness);
        for v in brick.visible_face() {
            assert_relative_eq!((v.x * v.x + v.y * v.y).sqrt(), r_inner, epsilon = 1e-9);
        }
    }

    #[test]
    fn brick_vertices_span_course_height() {
        let wall = RadialWall::new(cylinder()).unwrap();
        let brick = wall.generate().bricks[0];
        let v = brick.vertices();
        for corner in &v[..4] {
            assert_relative_eq!(corner.z, brick.z);
        }
        for corner in &v[4..] {
            assert_relative_eq!(corner.z, brick.z + brick.height);
        }
    }

    #[test]
    fn generation_is_pure() {
        let wall = RadialWall::new(cone()).unwrap();
        assert_eq!(wall.generate().bricks, wall.generate().bricks);
    }

    #[test]
    fn inverted_height_range_rejected() {
        let spec = RadialSpec {
            z_min: 100.0,
            z_max: 50.0,
            ..cylinder()
        };
        assert!(matches!(
            RadialWall::new(spec),
            Err(RadialError::InvalidHeightRange { .. })
        ));
    }

    #[test]
    fn non_positive_dimension_rejected() {
        let spec = RadialSpec {
            brick_length: -2.32,
            ..cylinder()
        };
        assert!(matches!(
            RadialWall::new(spec),
            Err(RadialError::NonPositiveDimension(_))
        ));
    }

    #[test]
    fn bond_offset_out_of_range_rejected() {
        let spec = RadialSpec {
            bond_offset: 1.5,
            ..cylinder()
        };
        assert!(matches!(
            RadialWall::new(spec),
            Err(RadialError::InvalidBondOffset(_))
        ));
    }

    #[test]
    fn radius_too_small_rejected() {
        let spec = RadialSpec {
            radius_at_z_min: 1.0,
            radius_at_z_max: 1.0,
            ..cylinder()
        };
        match RadialWall::new(spec) {
            Err(RadialError::RadiusTooSmall { bricks, minimum, .. }) => {
                assert!(bricks < minimum);
            }
            other => panic!("expected RadiusTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn stats_summarize_taper() {
        let wall = RadialWall::new(cone()).unwrap();
        let layout = wall.generate();
        assert!(layout.stats.is_tapered);
        assert!(layout.stats.min_bricks_per_course <= layout.stats.max_bricks_per_course);
        assert_eq!(
            layout.stats.total_bricks,
            layout.bricks.len()
        );
    }
}
