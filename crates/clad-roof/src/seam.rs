//! Ridge/valley classification of roof seams and miter angle derivation.

use clad_geom::Edge;
use clad_math::{Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

/// What kind of seam two adjacent roof faces form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeamKind {
    /// Both faces fall away below the shared edge.
    Ridge,
    /// Both faces rise above the shared edge.
    Valley,
    /// Mixed or near-level heights; no clean call.
    Ambiguous,
    /// The faces share no edge at all.
    NoSharedEdge,
}

impl SeamKind {
    /// Uppercase label for recommendation text.
    pub fn label(self) -> &'static str {
        match self {
            SeamKind::Ridge => "RIDGE",
            SeamKind::Valley => "VALLEY",
            SeamKind::Ambiguous => "AMBIGUOUS",
            SeamKind::NoSharedEdge => "NO SHARED EDGE",
        }
    }
}

/// How clean the height evidence for a classification was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// Both faces clearly on the same side of the edge.
    High,
    /// Mixed, near-level, or missing evidence.
    Low,
}

/// An edge found coincident between two faces.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedEdge {
    /// The edge geometry (as recorded on the first face).
    pub edge: Edge,
    /// Edge length.
    pub length: f64,
    /// Index of the edge in the first face's edge list.
    pub index_a: usize,
    /// Index of the matching edge in the second face's edge list.
    pub index_b: usize,
}

/// Find edges shared between two faces.
///
/// Two edges coincide when their endpoints match within `tolerance`, in
/// either orientation. All pairs are checked; boundary wires are tens of
/// edges at most.
pub fn find_coincident_edges(
    face_a: &[Edge],
    face_b: &[Edge],
    tolerance: f64,
) -> Vec<SharedEdge> {
    let close = |p: &Point3, q: &Point3| (p - q).norm() < tolerance;
    let mut shared = Vec::new();

    for (i, a) in face_a.iter().enumerate() {
        for (j, b) in face_b.iter().enumerate() {
            let same = close(&a.start, &b.start) && close(&a.end, &b.end);
            let reversed = close(&a.start, &b.end) && close(&a.end, &b.start);
            if same || reversed {
                shared.push(SharedEdge {
                    edge: *a,
                    length: a.length(),
                    index_a: i,
                    index_b: j,
                });
            }
        }
    }

    shared
}

/// A seam classification with its height evidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamClassification {
    /// Ridge, valley, or ambiguous.
    pub kind: SeamKind,
    /// Confidence of the call.
    pub confidence: Confidence,
    /// Mean Z of the first face's non-shared vertices.
    pub face_a_mean_z: f64,
    /// Mean Z of the second face's non-shared vertices.
    pub face_b_mean_z: f64,
    /// Mean Z of the shared edge.
    pub edge_z: f64,
}

fn mean_z_of_non_shared(vertices: &[Point3], shared: &Edge, tolerance: f64) -> Option<f64> {
    let close = |p: &Point3, q: &Point3| (p - q).norm() < tolerance;
    let others: Vec<f64> = vertices
        .iter()
        .filter(|v| !close(v, &shared.start) && !close(v, &shared.end))
        .map(|v| v.z)
        .collect();
    if others.is_empty() {
        return None;
    }
    Some(others.iter().sum::<f64>() / others.len() as f64)
}

/// Classify the seam between two faces from vertex heights.
///
/// The faces' non-shared vertices are averaged and compared to the shared
/// edge's mean Z: both clearly below is a ridge, both clearly above a
/// valley, anything else ambiguous. "Clearly" means beyond `tolerance`.
pub fn classify_seam(
    face_a: &[Point3],
    face_b: &[Point3],
    shared: &Edge,
    tolerance: f64,
) -> SeamClassification {
    let edge_z = (shared.start.z + shared.end.z) / 2.0;

    let mean_a = mean_z_of_non_shared(face_a, shared, tolerance);
    let mean_b = mean_z_of_non_shared(face_b, shared, tolerance);

    let (face_a_mean_z, face_b_mean_z) = (
        mean_a.unwrap_or(edge_z),
        mean_b.unwrap_or(edge_z),
    );

    let below = |z: f64| z < edge_z - tolerance;
    let above = |z: f64| z > edge_z + tolerance;

    let (kind, confidence) = match (mean_a, mean_b) {
        (Some(a), Some(b)) if below(a) && below(b) => (SeamKind::Ridge, Confidence::High),
        (Some(a), Some(b)) if above(a) && above(b) => (SeamKind::Valley, Confidence::High),
        _ => (SeamKind::Ambiguous, Confidence::Low),
    };

    SeamClassification {
        kind,
        confidence,
        face_a_mean_z,
        face_b_mean_z,
        edge_z,
    }
}

/// The angle two faces meet at, and the miter cut it implies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DihedralAngle {
    /// Angle between the face normals, degrees.
    pub angle_degrees: f64,
    /// Per-side trim cut: half the dihedral angle, degrees.
    pub trim_angle_degrees: f64,
}

/// Dihedral angle between two face normals.
pub fn dihedral_angle(normal_a: &Vec3, normal_b: &Vec3) -> DihedralAngle {
    let angle_degrees = clad_math::angle_between_deg(normal_a, normal_b);
    DihedralAngle {
        angle_degrees,
        trim_angle_degrees: angle_degrees / 2.0,
    }
}

/// Complete analysis of the intersection between two roof faces.
#[derive(Debug, Clone, PartialEq)]
pub struct RoofIntersection {
    /// Seam kind, [`SeamKind::NoSharedEdge`] when the faces never touch.
    pub kind: SeamKind,
    /// Confidence of the classification.
    pub confidence: Confidence,
    /// The longest shared edge, when one exists.
    pub shared_edge: Option<SharedEdge>,
    /// Height evidence, when a shared edge exists.
    pub classification: Option<SeamClassification>,
    /// Angle between the faces, when a shared edge exists.
    pub dihedral: Option<DihedralAngle>,
    /// Human-readable trim recommendation.
    pub recommendation: String,
}

/// Analyze the seam between two roof faces.
///
/// Finds the coincident edges (none → no shared edge), takes the longest,
/// classifies the seam from vertex heights, and derives the dihedral/miter
/// angles from the supplied normals.
pub fn analyze_roof_intersection(
    face_a_vertices: &[Point3],
    face_a_normal: &Vec3,
    face_a_edges: &[Edge],
    face_b_vertices: &[Point3],
    face_b_normal: &Vec3,
    face_b_edges: &[Edge],
) -> RoofIntersection {
    let tolerance = Tolerance::DEFAULT.plane_extent;
    let mut shared = find_coincident_edges(face_a_edges, face_b_edges, tolerance);

    if shared.is_empty() {
        return RoofIntersection {
            kind: SeamKind::NoSharedEdge,
            confidence: Confidence::Low,
            shared_edge: None,
            classification: None,
            dihedral: None,
            recommendation: "No shared edge between faces - no seam trim applies".to_string(),
        };
    }

    shared.sort_by(|a, b| b.length.partial_cmp(&a.length).unwrap());
    let longest = shared.swap_remove(0);

    let classification = classify_seam(
        face_a_vertices,
        face_b_vertices,
        &longest.edge,
        tolerance,
    );
    let dihedral = dihedral_angle(face_a_normal, face_b_normal);

    let recommendation = match classification.kind {
        SeamKind::Ridge | SeamKind::Valley => format!(
            "{} seam along {:.1}mm edge: cut trim at {:.1} degree miter",
            classification.kind.label(),
            longest.length,
            dihedral.trim_angle_degrees
        ),
        _ => format!(
            "{} seam - inspect face heights manually before trimming",
            classification.kind.label()
        ),
    };

    RoofIntersection {
        kind: classification.kind,
        confidence: classification.confidence,
        shared_edge: Some(longest),
        classification: Some(classification),
        dihedral: Some(dihedral),
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn edge(s: (f64, f64, f64), e: (f64, f64, f64)) -> Edge {
        Edge::new(p(s.0, s.1, s.2), p(e.0, e.1, e.2))
    }

    fn gable_left_edges() -> Vec<Edge> {
        vec![
            edge((0.0, 0.0, 0.0), (0.0, 100.0, 0.0)),
            edge((0.0, 100.0, 0.0), (50.0, 100.0, 50.0)),
            edge((50.0, 100.0, 50.0), (50.0, 0.0, 50.0)),
            edge((50.0, 0.0, 50.0), (0.0, 0.0, 0.0)),
        ]
    }

    fn gable_right_edges() -> Vec<Edge> {
        vec![
            edge((50.0, 0.0, 50.0), (50.0, 100.0, 50.0)),
            edge((50.0, 100.0, 50.0), (100.0, 100.0, 0.0)),
            edge((100.0, 100.0, 0.0), (100.0, 0.0, 0.0)),
            edge((100.0, 0.0, 0.0), (50.0, 0.0, 50.0)),
        ]
    }

    #[test]
    fn shared_ridge_edge_found_despite_reversal() {
        let shared = find_coincident_edges(&gable_left_edges(), &gable_right_edges(), 0.5);
        assert_eq!(shared.len(), 1);
        assert_relative_eq!(shared[0].length, 100.0);
        assert_eq!(shared[0].index_a, 2);
        assert_eq!(shared[0].index_b, 0);
    }

    #[test]
    fn disjoint_faces_share_nothing() {
        let a = vec![
            edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0)),
            edge((10.0, 0.0, 0.0), (10.0, 10.0, 0.0)),
        ];
        let b = vec![
            edge((100.0, 0.0, 0.0), (110.0, 0.0, 0.0)),
            edge((110.0, 0.0, 0.0), (110.0, 10.0, 0.0)),
        ];
        assert!(find_coincident_edges(&a, &b, 0.5).is_empty());
    }

    #[test]
    fn ridge_when_faces_fall_away() {
        let shared = edge((50.0, 0.0, 50.0), (50.0, 100.0, 50.0));
        let face_a = [
            p(0.0, 0.0, 0.0),
            p(0.0, 100.0, 0.0),
            p(50.0, 100.0, 50.0),
            p(50.0, 0.0, 50.0),
        ];
        let face_b = [
            p(50.0, 0.0, 50.0),
            p(50.0, 100.0, 50.0),
            p(100.0, 100.0, 0.0),
            p(100.0, 0.0, 0.0),
        ];
        let result = classify_seam(&face_a, &face_b, &shared, 0.1);
        assert_eq!(result.kind, SeamKind::Ridge);
        assert_eq!(result.confidence, Confidence::High);
        assert_relative_eq!(result.face_a_mean_z, 0.0);
        assert_relative_eq!(result.edge_z, 50.0);
    }

    #[test]
    fn valley_when_faces_rise() {
        let shared = edge((50.0, 0.0, 0.0), (50.0, 100.0, 0.0));
        let face_a = [
            p(0.0, 0.0, 50.0),
            p(0.0, 100.0, 50.0),
            p(50.0, 100.0, 0.0),
            p(50.0, 0.0, 0.0),
        ];
        let face_b = [
            p(50.0, 0.0, 0.0),
            p(50.0, 100.0, 0.0),
            p(100.0, 100.0, 50.0),
            p(100.0, 0.0, 50.0),
        ];
        let result = classify_seam(&face_a, &face_b, &shared, 0.1);
        assert_eq!(result.kind, SeamKind::Valley);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn mixed_heights_are_ambiguous() {
        let shared = edge((50.0, 0.0, 25.0), (50.0, 100.0, 25.0));
        let face_a = [
            p(0.0, 0.0, 0.0),
            p(0.0, 100.0, 0.0),
            p(50.0, 100.0, 25.0),
            p(50.0, 0.0, 25.0),
        ];
        let face_b = [
            p(50.0, 0.0, 25.0),
            p(50.0, 100.0, 25.0),
            p(100.0, 100.0, 50.0),
            p(100.0, 0.0, 50.0),
        ];
        let result = classify_seam(&face_a, &face_b, &shared, 0.1);
        assert_eq!(result.kind, SeamKind::Ambiguous);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn orthogonal_normals_give_45_degree_miter() {
        let result = dihedral_angle(&Vec3::x(), &Vec3::y());
        assert_relative_eq!(result.angle_degrees, 90.0, epsilon = 0.1);
        assert_relative_eq!(result.trim_angle_degrees, 45.0, epsilon = 0.1);
    }

    #[test]
    fn forty_five_degree_normals() {
        let result = dihedral_angle(&Vec3::x(), &Vec3::new(0.707, 0.707, 0.0));
        assert_relative_eq!(result.angle_degrees, 45.0, epsilon = 1.0);
        assert_relative_eq!(result.trim_angle_degrees, 22.5, epsilon = 0.5);
    }

    #[test]
    fn parallel_normals_need_no_miter() {
        let result = dihedral_angle(&Vec3::z(), &Vec3::z());
        assert!(result.angle_degrees < 0.1);
        assert!(result.trim_angle_degrees < 0.1);
    }

    #[test]
    fn full_ridge_analysis() {
        let face_a = [
            p(0.0, 0.0, 0.0),
            p(0.0, 100.0, 0.0),
            p(50.0, 100.0, 50.0),
            p(50.0, 0.0, 50.0),
        ];
        let face_b = [
            p(50.0, 0.0, 50.0),
            p(50.0, 100.0, 50.0),
            p(100.0, 100.0, 0.0),
            p(100.0, 0.0, 0.0),
        ];
        let normal_a = Vec3::new(-0.707, 0.0, 0.707);
        let normal_b = Vec3::new(0.707, 0.0, 0.707);

        let result = analyze_roof_intersection(
            &face_a,
            &normal_a,
            &gable_left_edges(),
            &face_b,
            &normal_b,
            &gable_right_edges(),
        );

        assert_eq!(result.kind, SeamKind::Ridge);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.shared_edge.is_some());
        assert!(result.recommendation.contains("RIDGE"));
        let dihedral = result.dihedral.unwrap();
        assert_relative_eq!(dihedral.angle_degrees, 90.0, epsilon = 0.1);
    }

    #[test]
    fn disjoint_faces_report_no_shared_edge() {
        let face_a = [p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0)];
        let face_b = [
            p(100.0, 0.0, 0.0),
            p(110.0, 0.0, 0.0),
            p(110.0, 10.0, 0.0),
        ];
        let edges_a = vec![edge((0.0, 0.0, 0.0), (10.0, 0.0, 0.0))];
        let edges_b = vec![edge((100.0, 0.0, 0.0), (110.0, 0.0, 0.0))];

        let result = analyze_roof_intersection(
            &face_a,
            &Vec3::z(),
            &edges_a,
            &face_b,
            &Vec3::z(),
            &edges_b,
        );
        assert_eq!(result.kind, SeamKind::NoSharedEdge);
        assert!(result.shared_edge.is_none());
        assert!(result.dihedral.is_none());
    }

    #[test]
    fn analysis_is_pure() {
        let face_a = [
            p(0.0, 0.0, 0.0),
            p(0.0, 100.0, 0.0),
            p(50.0, 100.0, 50.0),
            p(50.0, 0.0, 50.0),
        ];
        let face_b = [
            p(50.0, 0.0, 50.0),
            p(50.0, 100.0, 50.0),
            p(100.0, 100.0, 0.0),
            p(100.0, 0.0, 0.0),
        ];
        let run = || {
            analyze_roof_intersection(
                &face_a,
                &Vec3::new(-0.707, 0.0, 0.707),
                &gable_left_edges(),
                &face_b,
                &Vec3::new(0.707, 0.0, 0.707),
                &gable_right_edges(),
            )
        };
        assert_eq!(run(), run());
    }
}
