//! Board-and-batten siding: vertical boards with battens over the seams.

use clad_geom::ValidationReport;
use serde::{Deserialize, Serialize};

use crate::{unit_count, Result, SidingError};

/// Board-and-batten dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoardBattenParams {
    /// Width of each board.
    pub board_width: f64,
    /// Width of the batten strips.
    pub batten_width: f64,
    /// Board thickness.
    pub board_thickness: f64,
    /// How far battens project from the board surface.
    pub batten_projection: f64,
}

impl BoardBattenParams {
    /// Validate the parameters, accumulating every violated rule.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.board_width <= 0.0 {
            report.push(format!(
                "board_width must be positive, got {}",
                self.board_width
            ));
        }
        if self.batten_width <= 0.0 {
            report.push(format!(
                "batten_width must be positive, got {}",
                self.batten_width
            ));
        }
        if self.board_thickness <= 0.0 {
            report.push(format!(
                "board_thickness must be positive, got {}",
                self.board_thickness
            ));
        }
        if self.batten_projection <= 0.0 {
            report.push(format!(
                "batten_projection must be positive, got {}",
                self.batten_projection
            ));
        }
        if self.batten_width > self.board_width {
            report.push(format!(
                "batten_width ({}) cannot exceed board_width ({})",
                self.batten_width, self.board_width
            ));
        }
        if self.batten_projection > self.board_thickness {
            report.push(format!(
                "batten_projection ({}) should not exceed board_thickness ({})",
                self.batten_projection, self.board_thickness
            ));
        }

        report
    }
}

/// Number of boards needed for a wall width.
pub fn board_count(wall_width: f64, board_width: f64) -> Result<usize> {
    if board_width <= 0.0 {
        return Err(SidingError::NonPositiveUnit("board_width", board_width));
    }
    if wall_width < 0.0 {
        return Err(SidingError::NegativeExtent("wall_width", wall_width));
    }
    unit_count(wall_width, board_width)
}

/// Horizontal `(start, end)` spans for boards across a wall.
///
/// Center-aligned mode distributes the total overhang symmetrically, then
/// clips each board to the wall. When the board width does not divide the
/// wall evenly the two visible end boards come out different widths — the
/// carpenter's practical layout, not an error.
pub fn board_positions(
    h_min: f64,
    h_max: f64,
    board_width: f64,
    center_align: bool,
) -> Result<Vec<(f64, f64)>> {
    let wall_width = h_max - h_min;
    let count = board_count(wall_width, board_width)?;

    let start_pos = if center_align {
        let total_width = count as f64 * board_width;
        h_min - (total_width - wall_width) / 2.0
    } else {
        h_min
    };

    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let start = start_pos + i as f64 * board_width;
        let end = start + board_width;
        if end > h_min && start < h_max {
            positions.push((start.max(h_min), end.min(h_max)));
        }
    }

    Ok(positions)
}

/// Batten center positions: one centered on each board-to-board seam.
pub fn batten_positions(boards: &[(f64, f64)]) -> Vec<f64> {
    if boards.len() < 2 {
        return Vec::new();
    }
    boards
        .windows(2)
        .map(|pair| (pair[0].1 + pair[1].0) / 2.0)
        .collect()
}
