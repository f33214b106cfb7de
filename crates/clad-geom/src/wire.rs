//! Edge and wire pre-flight validation.
//!
//! Every generator runs these checks on a face's boundary wire before laying
//! out a pattern: a wire with degenerate or duplicated edges will make the
//! downstream solid operations fail in far less explicable ways.

use clad_math::{Point3, Tolerance};

use crate::report::ValidationReport;

/// A straight boundary edge between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// Length as recorded by the CAD layer, if available.
    ///
    /// Curved edges report their true arc length here, which the chord
    /// between the endpoints would underestimate. When absent, the chord
    /// length is used.
    pub length: Option<f64>,
}

impl Edge {
    /// Edge between two points, length computed from the endpoints.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            length: None,
        }
    }

    /// Edge with a precomputed length from the CAD layer.
    pub fn with_length(start: Point3, end: Point3, length: f64) -> Self {
        Self {
            start,
            end,
            length: Some(length),
        }
    }

    /// Recorded length, or the endpoint distance when none was recorded.
    pub fn length(&self) -> f64 {
        self.length.unwrap_or_else(|| (self.end - self.start).norm())
    }

    /// Midpoint of the chord.
    pub fn midpoint(&self) -> Point3 {
        Point3::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
            (self.start.z + self.end.z) / 2.0,
        )
    }
}

/// Detect edges with zero or near-zero length.
///
/// Returns `(index, length)` for every edge shorter than the linear
/// tolerance (0.001 mm).
pub fn degenerate_edges(edges: &[Edge]) -> Vec<(usize, f64)> {
    let tolerance = Tolerance::DEFAULT.linear;
    edges
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            let length = e.length();
            (length < tolerance).then_some((i, length))
        })
        .collect()
}

/// Detect duplicate or overlapping edges.
///
/// Two edges are duplicates when their endpoints coincide within tolerance,
/// in the same or reversed order. This is an O(n²) scan over all unordered
/// pairs; boundary wires run to tens of edges, so no spatial index is
/// needed or used.
pub fn duplicate_edges(edges: &[Edge]) -> Vec<(usize, usize)> {
    let tol = Tolerance::DEFAULT;
    let mut duplicates = Vec::new();

    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let a = &edges[i];
            let b = &edges[j];
            let same = tol.points_coincident(&a.start, &b.start)
                && tol.points_coincident(&a.end, &b.end);
            let reversed = tol.points_coincident(&a.start, &b.end)
                && tol.points_coincident(&a.end, &b.start);
            if same || reversed {
                duplicates.push((i, j));
            }
        }
    }

    duplicates
}

/// Validate a wire for common geometry errors.
///
/// Aggregates the degenerate and duplicate checks into one report;
/// `wire_name` prefixes every message so multi-wire faces stay attributable.
pub fn validate_wire(edges: &[Edge], wire_name: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (i, length) in degenerate_edges(edges) {
        report.push(format!(
            "{wire_name}: Edge {i} has degenerate length {length:.6}mm"
        ));
    }
    for (i, j) in duplicate_edges(edges) {
        report.push(format!("{wire_name}: Edges {i} and {j} are duplicates"));
    }

    report
}

/// Check whether a set of 3D points is coplanar within `tolerance`.
///
/// The plane is fitted to the first three points; fewer than four points are
/// trivially planar, and a collinear first triple reports non-planar (no
/// plane to test against).
pub fn is_planar(points: &[Point3], tolerance: f64) -> bool {
    if points.len() < 4 {
        return true;
    }

    let v1 = points[1] - points[0];
    let v2 = points[2] - points[0];
    let normal = v1.cross(&v2);
    let norm = normal.norm();
    if norm < 1e-3 {
        return false;
    }
    let normal = normal / norm;
    let plane_d = -normal.dot(&points[0].coords);

    points[3..]
        .iter()
        .all(|p| (normal.dot(&p.coords) + plane_d).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edge(s: (f64, f64, f64), e: (f64, f64, f64)) -> Edge {
        Edge::new(Point3::new(s.0, s.1, s.2), Point3::new(e.0, e.1, e.2))
    }

    #[test]
    fn short_edge_flagged_by_index() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            Edge::with_length(
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(10.0, 0.0005, 0.0),
                0.0005,
            ),
            edge((10.0, 0.0, 0.0), (10.0, 10.0, 0.0)),
        ];
        let flagged = degenerate_edges(&edges);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0, 1);
        assert_relative_eq!(flagged[0].1, 0.0005);
    }

    #[test]
    fn recorded_length_overrides_chord() {
        // An arc whose chord is short but whose recorded length is real.
        let arc = Edge::with_length(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0005, 0.0, 0.0),
            3.2,
        );
        assert!(degenerate_edges(&[arc]).is_empty());
    }

    #[test]
    fn reversed_edge_pair_is_duplicate() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((10.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
        ];
        assert_eq!(duplicate_edges(&edges), vec![(0, 1)]);
    }

    #[test]
    fn same_direction_pair_is_duplicate() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
        ];
        assert_eq!(duplicate_edges(&edges), vec![(0, 1)]);
    }

    #[test]
    fn distinct_edges_not_flagged() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((10.0, 0.0, 0.0), (10.0, 10.0, 0.0)),
            edge((10.0, 10.0, 0.0), (0.0, 10.0, 0.0)),
            edge((0.0, 10.0, 0.0), (0.0, 0.0, 0.0)),
        ];
        assert!(duplicate_edges(&edges).is_empty());
        assert!(validate_wire(&edges, "OuterWire").is_valid());
    }

    #[test]
    fn wire_report_names_wire_and_indices() {
        let edges = vec![
            edge((0.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
            edge((0.0, 0.0, 0.0), (5.0, 0.0, 0.0)),
            edge((5.0, 0.0, 0.0), (0.0, 0.0, 0.0)),
        ];
        let report = validate_wire(&edges, "Wire1");
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("Wire1"));
        assert!(report.errors[0].contains("Edge 0"));
        assert!(report
            .errors
            .iter()
            .any(|m| m.contains("Edges 1 and 2 are duplicates")));
    }

    #[test]
    fn flat_quads_are_planar() {
        let xy = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ];
        assert!(is_planar(&xy, 0.01));

        // Points on the plane z = x + y.
        let tilted = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 10.0),
            Point3::new(10.0, 10.0, 20.0),
            Point3::new(0.0, 10.0, 10.0),
        ];
        assert!(is_planar(&tilted, 0.01));
    }

    #[test]
    fn non_coplanar_quad_rejected() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(0.0, 0.0, 10.0),
        ];
        assert!(!is_planar(&points, 0.01));
    }

    #[test]
    fn triangles_and_fewer_always_planar() {
        assert!(is_planar(&[], 0.01));
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 7.0),
            Point3::new(3.0, 9.0, 2.0),
        ];
        assert!(is_planar(&tri, 0.01));
    }
}
