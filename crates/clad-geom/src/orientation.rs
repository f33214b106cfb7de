//! Face orientation classification from bounding-box extents.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;

/// A coordinate axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Lowercase letter for error and log messages.
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// The component of a point along this axis.
    pub fn component(self, p: &clad_math::Point3) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }

    /// The unit vector along this axis.
    pub fn unit(self) -> clad_math::Vec3 {
        match self {
            Axis::X => clad_math::Vec3::x(),
            Axis::Y => clad_math::Vec3::y(),
            Axis::Z => clad_math::Vec3::z(),
        }
    }
}

/// Which axes span a planar (or near-planar) face.
///
/// The three axes are always pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceOrientation {
    /// Axis running up the face.
    pub vertical: Axis,
    /// Axis running across the face.
    pub horizontal: Axis,
    /// Axis perpendicular to the face.
    pub normal: Axis,
}

impl FaceOrientation {
    /// Classify a face from its bounding box.
    ///
    /// The axis whose extent is below the plane-extent tolerance (0.1 mm) is
    /// the normal. Of the two in-plane axes the larger extent runs
    /// horizontally — walls and roof faces are wider than they are tall —
    /// and the other is vertical, with ties preferring Z, then Y, as
    /// vertical. A face where no extent is near zero is tilted; its largest
    /// extent is taken as vertical, the larger of the remaining two as
    /// horizontal.
    pub fn classify(bbox: &BoundingBox) -> Self {
        let tolerance = clad_math::Tolerance::DEFAULT.plane_extent;
        let ex = bbox.extent(Axis::X);
        let ey = bbox.extent(Axis::Y);
        let ez = bbox.extent(Axis::Z);

        if ex < tolerance {
            // YZ plane (normal is X)
            let (vertical, horizontal) = if ey >= ez {
                (Axis::Z, Axis::Y)
            } else {
                (Axis::Y, Axis::Z)
            };
            return Self {
                vertical,
                horizontal,
                normal: Axis::X,
            };
        }
        if ey < tolerance {
            // XZ plane (normal is Y)
            let (vertical, horizontal) = if ex >= ez {
                (Axis::Z, Axis::X)
            } else {
                (Axis::X, Axis::Z)
            };
            return Self {
                vertical,
                horizontal,
                normal: Axis::Y,
            };
        }
        if ez < tolerance {
            // XY plane (normal is Z)
            let (vertical, horizontal) = if ex >= ey {
                (Axis::Y, Axis::X)
            } else {
                (Axis::X, Axis::Y)
            };
            return Self {
                vertical,
                horizontal,
                normal: Axis::Z,
            };
        }

        // All three extents are real: a tilted face. Largest extent is
        // vertical, larger of the remaining two is horizontal.
        if ez >= ey && ez >= ex {
            if ex > ey {
                Self {
                    vertical: Axis::Z,
                    horizontal: Axis::X,
                    normal: Axis::Y,
                }
            } else {
                Self {
                    vertical: Axis::Z,
                    horizontal: Axis::Y,
                    normal: Axis::X,
                }
            }
        } else if ey >= ex {
            if ex > ez {
                Self {
                    vertical: Axis::Y,
                    horizontal: Axis::X,
                    normal: Axis::Z,
                }
            } else {
                Self {
                    vertical: Axis::Y,
                    horizontal: Axis::Z,
                    normal: Axis::X,
                }
            }
        } else if ey > ez {
            Self {
                vertical: Axis::X,
                horizontal: Axis::Y,
                normal: Axis::Z,
            }
        } else {
            Self {
                vertical: Axis::X,
                horizontal: Axis::Z,
                normal: Axis::Y,
            }
        }
    }

    /// Human-readable description, e.g. `"XZ plane"`.
    pub fn plane_description(&self) -> String {
        let mut letters = [
            self.horizontal.letter().to_ascii_uppercase(),
            self.vertical.letter().to_ascii_uppercase(),
        ];
        letters.sort_unstable();
        format!("{}{} plane", letters[0], letters[1])
    }
}

/// Check whether a vertical edge sits at a building corner.
///
/// An edge is a corner edge when its horizontal-axis coordinate lies within
/// `tolerance` of either extreme of the bounding box along that axis. Used
/// to distinguish wall corners (which get corner trim) from interior seams.
pub fn is_building_corner(
    edge_h_pos: f64,
    bbox: &BoundingBox,
    horizontal: Axis,
    tolerance: f64,
) -> bool {
    let at_min = (edge_h_pos - bbox.min(horizontal)).abs() < tolerance;
    let at_max = (edge_h_pos - bbox.max(horizontal)).abs() < tolerance;
    at_min || at_max
}
