//! Shingle courses with periodic horizontal stagger.

use clad_geom::{is_planar, BoundingBox, ValidationReport};
use clad_math::{Point3, Tolerance};
use serde::{Deserialize, Serialize};

/// Shingle dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShingleParams {
    /// Width of each shingle.
    pub shingle_width: f64,
    /// Height (length) of each shingle.
    pub shingle_height: f64,
    /// Material thickness.
    pub material_thickness: f64,
    /// Exposed portion per course.
    pub shingle_exposure: f64,
}

impl ShingleParams {
    /// Validate the parameters, accumulating every violated rule.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.shingle_width <= 0.0 {
            report.push(format!(
                "shingle_width must be positive, got {}",
                self.shingle_width
            ));
        }
        if self.shingle_height <= 0.0 {
            report.push(format!(
                "shingle_height must be positive, got {}",
                self.shingle_height
            ));
        }
        if self.material_thickness <= 0.0 {
            report.push(format!(
                "material_thickness must be positive, got {}",
                self.material_thickness
            ));
        }
        if self.shingle_exposure <= 0.0 {
            report.push(format!(
                "shingle_exposure must be positive, got {}",
                self.shingle_exposure
            ));
        }
        if self.shingle_exposure > self.shingle_height {
            report.push(format!(
                "shingle_exposure ({}) cannot exceed shingle_height ({})",
                self.shingle_exposure, self.shingle_height
            ));
        }
        if self.material_thickness > self.shingle_height {
            report.push(format!(
                "material_thickness ({}) cannot exceed shingle_height ({})",
                self.material_thickness, self.shingle_height
            ));
        }

        report
    }
}

/// Horizontal stagger rule applied per course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaggerPattern {
    /// Alternate courses offset by half a shingle (period 2).
    #[default]
    Half,
    /// Courses cycle through thirds of a shingle (period 3).
    Third,
    /// Vertical seams aligned on every course.
    None,
}

impl StaggerPattern {
    /// Largest offset this pattern ever produces for a given width.
    pub fn max_offset(self, shingle_width: f64) -> f64 {
        match self {
            StaggerPattern::Half => shingle_width / 2.0,
            StaggerPattern::Third => shingle_width / 3.0,
            StaggerPattern::None => 0.0,
        }
    }
}

/// Horizontal stagger offset for a course.
///
/// Course 0 is always unstaggered; the pattern repeats with period 2 (half)
/// or 3 (third).
pub fn stagger_offset(course: usize, pattern: StaggerPattern, shingle_width: f64) -> f64 {
    match pattern {
        StaggerPattern::Half => (course % 2) as f64 * (shingle_width / 2.0),
        StaggerPattern::Third => (course % 3) as f64 * (shingle_width / 3.0),
        StaggerPattern::None => 0.0,
    }
}

/// Course/column grid for one face, before trimming.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShingleLayout {
    /// Courses needed, including the over-generation margin.
    pub courses: usize,
    /// Shingles per course, including the margin.
    pub shingles_per_course: usize,
    /// Largest stagger offset the pattern produces.
    pub max_stagger: f64,
    /// Width that must be covered (face width plus stagger on both sides).
    pub total_width_needed: f64,
    /// Total shingle count before trimming to the face.
    pub total_before_trim: usize,
}

impl ShingleLayout {
    /// Plan the shingle grid for a face.
    ///
    /// Both counts carry a +3 safety margin: the grid is over-generated and
    /// trimmed against the real face boundary downstream, and the margin
    /// guarantees full coverage under any stagger.
    pub fn plan(
        face_width: f64,
        face_height: f64,
        params: &ShingleParams,
        pattern: StaggerPattern,
    ) -> Self {
        let courses = (face_height / params.shingle_exposure).ceil() as usize + 3;

        let max_stagger = pattern.max_offset(params.shingle_width);
        let total_width_needed = face_width + 2.0 * max_stagger;
        let shingles_per_course =
            (total_width_needed / params.shingle_width).ceil() as usize + 3;

        Self {
            courses,
            shingles_per_course,
            max_stagger,
            total_width_needed,
            total_before_trim: courses * shingles_per_course,
        }
    }
}

/// UV position of one shingle in the grid.
///
/// Course 0 sits one exposure below the face origin so the bottom course's
/// butt edge overhangs the eave before trimming.
pub fn shingle_position(
    course: usize,
    column: usize,
    params: &ShingleParams,
    pattern: StaggerPattern,
) -> (f64, f64) {
    let stagger = stagger_offset(course, pattern, params.shingle_width);
    let u = column as f64 * params.shingle_width + stagger;
    let v = course as f64 * params.shingle_exposure - params.shingle_exposure;
    (u, v)
}

/// Margin for the trim collar around an over-generated grid.
///
/// Three times the largest shingle dimension captures any stagger overhang.
pub fn collar_margin(shingle_width: f64, shingle_height: f64) -> f64 {
    shingle_width.max(shingle_height) * 3.0
}

/// Whether individual shingles should be clipped to the face boundary.
///
/// Thin material (< 1 mm) must be clipped: overhanging slivers need print
/// supports that flat clipped edges avoid.
pub fn should_clip(material_thickness: f64) -> bool {
    material_thickness < 1.0
}

/// Validate a face for shingling.
///
/// Requires at least a quad, planarity, and minimum in-plane extents. All
/// findings are accumulated; degenerate geometry is reported, never raised.
pub fn validate_face(
    points: &[Point3],
    min_width: f64,
    min_height: f64,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if points.len() < 4 {
        report.push(format!(
            "Face has {} vertices, need at least 4",
            points.len()
        ));
        return report;
    }

    if !is_planar(points, Tolerance::DEFAULT.planarity) {
        report.push("Face is not planar - cannot generate shingles".to_string());
        return report;
    }

    let Ok(bbox) = BoundingBox::from_points(points) else {
        // Unreachable: the vertex count was checked above.
        return report;
    };
    let mut extents = [
        bbox.x_max - bbox.x_min,
        bbox.y_max - bbox.y_min,
        bbox.z_max - bbox.z_min,
    ];
    extents.sort_by(|a, b| a.partial_cmp(b).unwrap());

    // The smallest extent is along the face normal; the other two are in-plane.
    if extents[1] < min_width || extents[2] < min_height {
        report.push(format!(
            "Face too small: {:.1}x{:.1}mm, need {min_width}x{min_height}mm minimum",
            extents[1], extents[2]
        ));
    }
    if extents[2] < 10.0 {
        report.push(format!(
            "Face height {:.1}mm is very small for realistic shingling",
            extents[2]
        ));
    }

    report
}
