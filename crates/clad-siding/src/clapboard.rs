//! Clapboard siding: horizontal courses stacked up the wall.

use clad_geom::ValidationReport;
use serde::{Deserialize, Serialize};

use crate::{unit_count, Result, SidingError};

/// Clapboard dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClapboardParams {
    /// Exposed height of each course (the reveal).
    pub clapboard_height: f64,
    /// Board thickness at the bottom edge.
    pub clapboard_thickness: f64,
}

impl ClapboardParams {
    /// Validate the parameters, accumulating every violated rule.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.clapboard_height <= 0.0 {
            report.push(format!(
                "clapboard_height must be positive, got {}",
                self.clapboard_height
            ));
        }
        if self.clapboard_thickness <= 0.0 {
            report.push(format!(
                "clapboard_thickness must be positive, got {}",
                self.clapboard_thickness
            ));
        }
        if self.clapboard_thickness > self.clapboard_height {
            report.push(format!(
                "clapboard_thickness ({}) cannot exceed clapboard_height ({})",
                self.clapboard_thickness, self.clapboard_height
            ));
        }

        report
    }
}

/// Number of courses needed to cover a wall height.
pub fn course_count(wall_height: f64, clapboard_height: f64) -> Result<usize> {
    if clapboard_height <= 0.0 {
        return Err(SidingError::NonPositiveUnit(
            "clapboard_height",
            clapboard_height,
        ));
    }
    if wall_height < 0.0 {
        return Err(SidingError::NegativeExtent("wall_height", wall_height));
    }
    unit_count(wall_height, clapboard_height)
}
