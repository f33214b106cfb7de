#![warn(missing_docs)]

//! Flat-wall brick bond layout engine.
//!
//! Computes per-course brick placements for a rectangular wall face in the
//! face's local UV frame (U across, V up). Four masonry bonds are supported:
//!
//! - **Stretcher (running) bond**: every course of full stretchers, odd
//!   courses offset by half a pitch.
//! - **English bond**: alternating all-stretcher and all-header courses.
//! - **Flemish bond**: stretchers and headers alternating within each course.
//! - **Common bond**: N stretcher courses between header courses.
//!
//! Two edge treatments exist. [`EdgeFit::Overhang`] runs units one pitch past
//! both wall edges and two courses past the top — deliberate over-generation
//! so downstream clipping against the real face boundary never runs short.
//! [`EdgeFit::Closers`] instead fits english and flemish courses exactly to
//! the wall width with queen closers at both ends. The two policies produce
//! different edge appearance and are intentionally not unified.
//!
//! ```
//! use clad_brick::{layout_wall, BondPattern, WallSpec};
//!
//! let spec = WallSpec {
//!     wall_width: 100.0,
//!     wall_height: 50.0,
//!     bond: BondPattern::Stretcher,
//!     ..Default::default()
//! };
//! let layout = layout_wall(&spec).unwrap();
//! assert!(layout.stats.total_bricks > 0);
//! ```

pub mod closers;
mod courses;
pub mod error;

pub use error::{BrickError, Result};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Bond pattern governing unit arrangement across courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BondPattern {
    /// Running bond: all stretchers, half-pitch stagger.
    #[default]
    Stretcher,
    /// Alternating stretcher and header courses.
    English,
    /// Stretchers and headers alternating within each course.
    Flemish,
    /// `stretcher_courses` stretcher courses, then one header course.
    Common {
        /// Stretcher courses between header courses (at least 1).
        stretcher_courses: u32,
    },
}

/// How courses meet the wall's side edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeFit {
    /// Units overhang one pitch past both edges; clipped downstream.
    #[default]
    Overhang,
    /// English and flemish courses end in queen closers fitted to the exact
    /// wall width. Stretcher and common bonds always overhang — the running
    /// stagger leaves no clean closer width.
    Closers,
}

/// The orientation of a single laid unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickUnit {
    /// Long face exposed.
    Stretcher,
    /// Short face exposed.
    Header,
    /// Cut-down unit closing a course to the exact wall width.
    Closer,
}

/// Wall and brick dimensions for one layout run.
///
/// All lengths in mm of model scale. `skin_depth` overrides the rendered
/// depth of every unit (headers in a single-skin wall are only rendered as
/// deep as the skin); it defaults to `brick_depth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpec {
    /// Wall width along U.
    pub wall_width: f64,
    /// Wall height along V.
    pub wall_height: f64,
    /// Brick width along the wall (stretcher orientation).
    pub brick_width: f64,
    /// Brick height, always along V.
    pub brick_height: f64,
    /// Brick depth perpendicular to the wall; also the header face width.
    pub brick_depth: f64,
    /// Mortar joint thickness.
    pub mortar: f64,
    /// Bond pattern.
    pub bond: BondPattern,
    /// Treatment of side edges.
    pub edge_fit: EdgeFit,
    /// Rendered unit depth override.
    pub skin_depth: Option<f64>,
}

impl Default for WallSpec {
    fn default() -> Self {
        // HO-scale brick (2.32 x 0.65 x 1.09 mm, 0.11 mm joints).
        Self {
            wall_width: 200.0,
            wall_height: 100.0,
            brick_width: 2.32,
            brick_height: 0.65,
            brick_depth: 1.09,
            mortar: 0.11,
            bond: BondPattern::Stretcher,
            edge_fit: EdgeFit::Overhang,
            skin_depth: None,
        }
    }
}

impl WallSpec {
    /// Check the layout preconditions.
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("wall_width", self.wall_width),
            ("wall_height", self.wall_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("brick_depth", self.brick_depth),
            ("mortar", self.mortar),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(BrickError::NonPositiveDimension(format!(
                    "{name} = {value}"
                )));
            }
        }
        if let BondPattern::Common { stretcher_courses } = self.bond {
            if stretcher_courses < 1 {
                return Err(BrickError::InvalidCommonCount(stretcher_courses));
            }
        }
        Ok(())
    }

    /// Stretcher pitch: brick width plus one mortar joint.
    pub fn stretcher_pitch(&self) -> f64 {
        self.brick_width + self.mortar
    }

    /// Header pitch: brick depth plus one mortar joint.
    pub fn header_pitch(&self) -> f64 {
        self.brick_depth + self.mortar
    }

    /// Course pitch: brick height plus one mortar joint.
    pub fn course_pitch(&self) -> f64 {
        self.brick_height + self.mortar
    }

    /// Number of courses generated.
    ///
    /// Two courses beyond the wall's vertical extent, so clipping against
    /// the true boundary never runs short.
    pub fn course_count(&self) -> usize {
        (self.wall_height / self.course_pitch()).ceil() as usize + 2
    }

    /// Rendered depth of every unit.
    pub fn skin_depth(&self) -> f64 {
        self.skin_depth.unwrap_or(self.brick_depth)
    }
}

/// One brick in the wall, in the face's local UV frame.
///
/// Placements are values: generated in one call, never mutated afterward.
/// [`BrickPlacement::with_index`] is the only way to derive a changed copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickPlacement {
    /// Sequential number, dense from 0 across the whole wall.
    pub index: usize,
    /// Position along the wall width.
    pub u: f64,
    /// Position along the wall height.
    pub v: f64,
    /// Course number, 0-indexed from the bottom.
    pub course: usize,
    /// Unit orientation.
    pub unit: BrickUnit,
    /// Unit dimension along U.
    pub width: f64,
    /// Unit dimension along V.
    pub height: f64,
    /// Rendered dimension perpendicular to the wall.
    pub depth: f64,
}

impl BrickPlacement {
    /// Copy of this placement with a different sequential index.
    pub fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }
}

/// Summary of a generated wall layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallStats {
    /// Bond pattern that was laid.
    pub bond: BondPattern,
    /// Courses generated (including the two-course overrun).
    pub courses: usize,
    /// Total units placed.
    pub total_bricks: usize,
    /// Wall width the layout was computed for.
    pub wall_width: f64,
    /// Wall height the layout was computed for.
    pub wall_height: f64,
}

/// A complete generated wall layout.
#[derive(Debug, Clone)]
pub struct WallLayout {
    /// All placements, course-major, indexed densely from 0.
    pub bricks: Vec<BrickPlacement>,
    /// Generation summary.
    pub stats: WallStats,
}

/// Generate the complete brick layout for a wall.
///
/// Courses are independent of one another, so they are generated in
/// parallel and flattened in course order before sequential indices are
/// assigned.
pub fn layout_wall(spec: &WallSpec) -> Result<WallLayout> {
    spec.validate()?;

    // Closer fits depend only on the wall, not the course; compute once.
    let fitted = match (spec.edge_fit, spec.bond) {
        (EdgeFit::Closers, BondPattern::English) => {
            Some(closers::FittedPlan::english(spec))
        }
        (EdgeFit::Closers, BondPattern::Flemish) => {
            Some(closers::FittedPlan::flemish(spec))
        }
        _ => None,
    };

    let per_course: Vec<Vec<BrickPlacement>> = (0..spec.course_count())
        .into_par_iter()
        .map(|course| courses::generate_course(spec, fitted.as_ref(), course))
        .collect();

    let bricks: Vec<BrickPlacement> = per_course
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, b)| b.with_index(i))
        .collect();

    let stats = WallStats {
        bond: spec.bond,
        courses: spec.course_count(),
        total_bricks: bricks.len(),
        wall_width: spec.wall_width,
        wall_height: spec.wall_height,
    };

    Ok(WallLayout { bricks, stats })
}
