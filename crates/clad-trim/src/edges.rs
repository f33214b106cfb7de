//! Boundary edge classification and trim-edge filtering.

use std::collections::HashSet;

use clad_geom::{Axis, BoundingBox, Edge, ValidationReport};
use clad_math::{angle_between_deg, Point3, Vec3};
use serde::{Deserialize, Serialize};

/// The trim kind an edge direction calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeClass {
    /// Aligned with the wall's vertical axis: corner trim.
    Vertical,
    /// Perpendicular to vertical: eave trim.
    Horizontal,
    /// Diagonal: gable trim.
    Gable,
}

/// Classify an edge direction against the wall's vertical axis.
///
/// Parallel or antiparallel to vertical (within `angle_tolerance_deg`) is
/// vertical; within tolerance of 90 degrees is horizontal; anything else is
/// a gable edge.
pub fn classify_edge(
    direction: &Vec3,
    vertical: Axis,
    angle_tolerance_deg: f64,
) -> EdgeClass {
    let angle = angle_between_deg(direction, &vertical.unit());

    if angle < angle_tolerance_deg || angle > 180.0 - angle_tolerance_deg {
        EdgeClass::Vertical
    } else if (angle - 90.0).abs() < angle_tolerance_deg {
        EdgeClass::Horizontal
    } else {
        EdgeClass::Gable
    }
}

/// Classify every edge of a boundary, by index.
pub fn classify_edges(
    edges: &[Edge],
    vertical: Axis,
    angle_tolerance_deg: f64,
) -> Vec<(usize, EdgeClass)> {
    edges
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let direction = e.end - e.start;
            (i, classify_edge(&direction, vertical, angle_tolerance_deg))
        })
        .collect()
}

/// Endpoint signature rounded to 0.01 mm, orientation-independent matching.
fn signature(start: &Point3, end: &Point3) -> (i64, i64, i64, i64, i64, i64) {
    let r = |v: f64| (v * 100.0).round() as i64;
    (r(start.x), r(start.y), r(start.z), r(end.x), r(end.y), r(end.z))
}

/// Decide which boundary edges should receive trim.
///
/// Skips the bottom edge (both endpoints at the boundary's vertical
/// minimum, within `bottom_tolerance`) when `skip_bottom` is set — the
/// foundation line takes no trim — and any edge matching a hole edge
/// (door/window openings), in either orientation. Returns
/// `(index, should_trim)` per edge.
pub fn filter_trim_edges(
    edges: &[Edge],
    hole_edges: &[Edge],
    vertical: Axis,
    skip_bottom: bool,
    bottom_tolerance: f64,
) -> Vec<(usize, bool)> {
    if edges.is_empty() {
        return Vec::new();
    }

    let points: Vec<Point3> = edges
        .iter()
        .flat_map(|e| [e.start, e.end])
        .collect();
    let Ok(bbox) = BoundingBox::from_points(&points) else {
        return Vec::new();
    };
    let v_min = bbox.min(vertical);

    let mut hole_signatures = HashSet::new();
    for hole in hole_edges {
        hole_signatures.insert(signature(&hole.start, &hole.end));
        hole_signatures.insert(signature(&hole.end, &hole.start));
    }

    edges
        .iter()
        .enumerate()
        .map(|(i, e)| {
            if skip_bottom {
                let start_v = vertical.component(&e.start);
                let end_v = vertical.component(&e.end);
                if (start_v - v_min).abs() < bottom_tolerance
                    && (end_v - v_min).abs() < bottom_tolerance
                {
                    return (i, false);
                }
            }
            if !hole_signatures.is_empty()
                && hole_signatures.contains(&signature(&e.start, &e.end))
            {
                return (i, false);
            }
            (i, true)
        })
        .collect()
}

/// Trim stock dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrimParams {
    /// Width of the trim profile.
    pub trim_width: f64,
    /// Thickness of the trim.
    pub trim_thickness: f64,
}

impl TrimParams {
    /// Validate the parameters, accumulating every violated rule.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.trim_width <= 0.0 {
            report.push(format!(
                "trim_width must be positive, got {}",
                self.trim_width
            ));
        }
        if self.trim_thickness <= 0.0 {
            report.push(format!(
                "trim_thickness must be positive, got {}",
                self.trim_thickness
            ));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(s: (f64, f64, f64), e: (f64, f64, f64)) -> Edge {
        Edge::new(
            Point3::new(s.0, s.1, s.2),
            Point3::new(e.0, e.1, e.2),
        )
    }

    #[test]
    fn vertical_edges_both_directions() {
        assert_eq!(
            classify_edge(&Vec3::new(0.0, 0.0, 1.0), Axis::Z, 5.0),
            EdgeClass::Vertical
        );
        assert_eq!(
            classify_edge(&Vec3::new(0.0, 0.0, -1.0), Axis::Z, 5.0),
            EdgeClass::Vertical
        );
    }

    #[test]
    fn horizontal_edges_in_both_plan_axes() {
        assert_eq!(
            classify_edge(&Vec3::new(1.0, 0.0, 0.0), Axis::Z, 5.0),
            EdgeClass::Horizontal
        );
        assert_eq!(
            classify_edge(&Vec3::new(0.0, 1.0, 0.0), Axis::Z, 5.0),
            EdgeClass::Horizontal
        );
    }

    #[test]
    fn diagonal_is_gable() {
        assert_eq!(
            classify_edge(&Vec3::new(1.0, 0.0, 1.0), Axis::Z, 5.0),
            EdgeClass::Gable
        );
    }

    #[test]
    fn near_vertical_within_tolerance() {
        // ~3 degrees off vertical.
        let direction = Vec3::new(0.05, 0.0, 1.0);
        assert_eq!(classify_edge(&direction, Axis::Z, 5.0), EdgeClass::Vertical);
    }

    #[test]
    fn y_up_walls_classify_against_y() {
        assert_eq!(
            classify_edge(&Vec3::new(0.0, 1.0, 0.0), Axis::Y, 5.0),
            EdgeClass::Vertical
        );
        assert_eq!(
            classify_edge(&Vec3::new(1.0, 0.0, 0.0), Axis::Y, 5.0),
            EdgeClass::Horizontal
        );
    }

    #[test]
    fn batch_classification_keeps_indices() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((10.0, 0.0, 0.0), (10.0, 0.0, 8.0)),
            edge((10.0, 0.0, 8.0), (5.0, 0.0, 12.0)),
        ];
        let classes = classify_edges(&edges, Axis::Z, 5.0);
        assert_eq!(
            classes,
            vec![
                (0, EdgeClass::Horizontal),
                (1, EdgeClass::Vertical),
                (2, EdgeClass::Gable),
            ]
        );
    }

    #[test]
    fn bottom_edge_skipped() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)), // bottom
            edge((10.0, 0.0, 0.0), (10.0, 0.0, 8.0)),
            edge((10.0, 0.0, 8.0), (0.0, 0.0, 8.0)),
            edge((0.0, 0.0, 8.0), (0.0, 0.0, 0.0)),
        ];
        let result = filter_trim_edges(&edges, &[], Axis::Z, true, 1.0);
        assert_eq!(result[0], (0, false));
        assert!(result[1..].iter().all(|&(_, trim)| trim));
    }

    #[test]
    fn bottom_kept_when_skip_disabled() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((10.0, 0.0, 0.0), (10.0, 0.0, 8.0)),
        ];
        let result = filter_trim_edges(&edges, &[], Axis::Z, false, 1.0);
        assert!(result.iter().all(|&(_, trim)| trim));
    }

    #[test]
    fn hole_edges_skipped_either_orientation() {
        let edges = vec![
            edge((0.0, 0.0, 2.0), (10.0, 0.0, 2.0)),
            edge((3.0, 0.0, 3.0), (5.0, 0.0, 3.0)), // window sill
        ];
        let holes = vec![edge((5.0, 0.0, 3.0), (3.0, 0.0, 3.0))];
        let result = filter_trim_edges(&edges, &holes, Axis::Z, false, 1.0);
        assert_eq!(result[0], (0, true));
        assert_eq!(result[1], (1, false));
    }

    #[test]
    fn trim_params_validated() {
        let good = TrimParams {
            trim_width: 2.0,
            trim_thickness: 0.5,
        };
        assert!(good.validate().is_valid());

        let bad = TrimParams {
            trim_width: 0.0,
            trim_thickness: -1.0,
        };
        let report = bad.validate();
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("trim_width"));
        assert!(report.errors[1].contains("trim_thickness"));
    }
}
