//! Bead board: vertical ribs separated by thin recessed grooves.

use clad_geom::ValidationReport;
use serde::{Deserialize, Serialize};

use crate::{unit_count, Result, SidingError};

/// Bead board dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeadBoardParams {
    /// Horizontal spacing between bead centers.
    pub bead_spacing: f64,
    /// How deep each groove is cut.
    pub bead_depth: f64,
    /// Width of each groove.
    pub bead_gap: f64,
}

impl BeadBoardParams {
    /// Validate the parameters, accumulating every violated rule.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.bead_spacing <= 0.0 {
            report.push(format!(
                "bead_spacing must be positive, got {}",
                self.bead_spacing
            ));
        }
        if self.bead_depth <= 0.0 {
            report.push(format!(
                "bead_depth must be positive, got {}",
                self.bead_depth
            ));
        }
        if self.bead_gap <= 0.0 {
            report.push(format!("bead_gap must be positive, got {}", self.bead_gap));
        }
        if self.bead_gap >= self.bead_spacing {
            report.push(format!(
                "bead_gap ({}) must be less than bead_spacing ({})",
                self.bead_gap, self.bead_spacing
            ));
        }

        report
    }
}

/// Number of beads needed for a wall width.
pub fn bead_count(wall_width: f64, bead_spacing: f64) -> Result<usize> {
    if bead_spacing <= 0.0 {
        return Err(SidingError::NonPositiveUnit("bead_spacing", bead_spacing));
    }
    if wall_width < 0.0 {
        return Err(SidingError::NegativeExtent("wall_width", wall_width));
    }
    unit_count(wall_width, bead_spacing)
}

/// Bead center positions across a wall.
///
/// Starts at the left edge — a carpenter works from one edge — and steps at
/// the bead spacing, keeping only centers inside the wall.
pub fn bead_positions(h_min: f64, h_max: f64, bead_spacing: f64) -> Result<Vec<f64>> {
    let wall_width = h_max - h_min;
    let count = bead_count(wall_width, bead_spacing)?;

    Ok((0..count)
        .map(|i| h_min + i as f64 * bead_spacing)
        .filter(|&center| center < h_max)
        .collect())
}

/// Groove `(start, end)` spans: a `bead_gap`-wide cut centered on each bead.
pub fn groove_spans(bead_centers: &[f64], bead_gap: f64) -> Vec<(f64, f64)> {
    let half_gap = bead_gap / 2.0;
    bead_centers
        .iter()
        .map(|&center| (center - half_gap, center + half_gap))
        .collect()
}
