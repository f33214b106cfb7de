//! Per-course placement generation for the overhang edge fit.

use crate::closers::FittedPlan;
use crate::{BondPattern, BrickPlacement, BrickUnit, WallSpec};

/// Generate all placements for one course.
pub(crate) fn generate_course(
    spec: &WallSpec,
    fitted: Option<&FittedPlan>,
    course: usize,
) -> Vec<BrickPlacement> {
    if let Some(plan) = fitted {
        return plan.course(spec, course);
    }

    match spec.bond {
        BondPattern::Stretcher => stretcher_course(spec, course, course % 2 == 1),
        BondPattern::English => {
            if course % 2 == 1 {
                header_course(spec, course)
            } else {
                stretcher_course(spec, course, false)
            }
        }
        BondPattern::Flemish => flemish_course(spec, course),
        BondPattern::Common { stretcher_courses } => {
            let group = stretcher_courses as usize + 1;
            let position = course % group;
            if position == stretcher_courses as usize {
                header_course(spec, course)
            } else {
                // Stagger follows the position within the stretcher group,
                // resetting after each header course.
                stretcher_course(spec, course, position % 2 == 1)
            }
        }
    }
}

pub(crate) fn place(
    spec: &WallSpec,
    course: usize,
    u: f64,
    unit: BrickUnit,
    width: f64,
) -> BrickPlacement {
    BrickPlacement {
        index: 0, // assigned after all courses are flattened
        u,
        v: course as f64 * spec.course_pitch(),
        course,
        unit,
        width,
        height: spec.brick_height,
        depth: spec.skin_depth(),
    }
}

/// Full-bleed stretcher course, optionally shifted right half a pitch.
fn stretcher_course(spec: &WallSpec, course: usize, stagger: bool) -> Vec<BrickPlacement> {
    let pitch = spec.stretcher_pitch();
    let offset = if stagger { pitch / 2.0 } else { 0.0 };

    let mut bricks = Vec::new();
    let mut u = offset - pitch; // start one pitch before the wall edge
    while u < spec.wall_width + pitch {
        bricks.push(place(spec, course, u, BrickUnit::Stretcher, spec.brick_width));
        u += pitch;
    }
    bricks
}

/// Full-bleed header course.
fn header_course(spec: &WallSpec, course: usize) -> Vec<BrickPlacement> {
    let pitch = spec.header_pitch();

    let mut bricks = Vec::new();
    let mut u = -pitch;
    while u < spec.wall_width + pitch {
        bricks.push(place(spec, course, u, BrickUnit::Header, spec.brick_depth));
        u += pitch;
    }
    bricks
}

/// Full-bleed flemish course: units alternate individually, with the lead
/// unit type flipping between even and odd courses.
fn flemish_course(spec: &WallSpec, course: usize) -> Vec<BrickPlacement> {
    let mut bricks = Vec::new();
    let mut u = -spec.stretcher_pitch();
    let mut is_stretcher = course % 2 == 0;

    while u < spec.wall_width + spec.header_pitch() {
        if is_stretcher {
            bricks.push(place(spec, course, u, BrickUnit::Stretcher, spec.brick_width));
            u += spec.stretcher_pitch();
        } else {
            bricks.push(place(spec, course, u, BrickUnit::Header, spec.brick_depth));
            u += spec.header_pitch();
        }
        is_stretcher = !is_stretcher;
    }
    bricks
}
