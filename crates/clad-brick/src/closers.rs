//! Closer-fitted course layout.
//!
//! Instead of overhanging the wall edges, english and flemish courses can be
//! closed with queen closers: cut-down units at both course ends sized so
//! the course fills the wall width exactly, one mortar joint between every
//! adjacent unit including the closers.

use crate::courses::place;
use crate::{BrickPlacement, BrickUnit, WallSpec};

/// How many whole units fit in a course, and the closer width at each end.
///
/// Solves `2c + n*unit + (n+1)*mortar == wall_width` for the largest `n`
/// that keeps the closer practical (`c >= 2 * mortar`). If even a single
/// unit leaves no room, `n` bottoms out at 1 and the closer clamps to zero
/// (no closer is laid).
pub fn course_fit(wall_width: f64, unit_width: f64, mortar: f64) -> (usize, f64) {
    let spacing = unit_width + mortar;
    let mut n = ((wall_width + mortar) / spacing) as usize;
    if n < 1 {
        n = 1;
    }

    let closer_for = |n: usize| {
        let used = n as f64 * unit_width + (n as f64 - 1.0) * mortar;
        (wall_width - used - 2.0 * mortar) / 2.0
    };

    let min_closer = mortar * 2.0;
    let mut closer = closer_for(n);
    while closer < min_closer && n > 1 {
        n -= 1;
        closer = closer_for(n);
    }
    if closer < 0.0 {
        closer = 0.0;
    }

    (n, closer)
}

/// Flemish closer fit.
///
/// An even course is `C0, S, H, S, ..., S, C0` — `n + 1` stretchers and `n`
/// headers. Maximizes `n` over `2*C0 + (n+1)*S + n*H + 2*(n+1)*m == W`
/// subject to `C0 >= 2m`. The odd-course closer is offset so headers center
/// over the joints of the course below: `C1 = C0 + (S - H) / 2`.
pub fn flemish_fit(
    wall_width: f64,
    stretcher_width: f64,
    header_width: f64,
    mortar: f64,
) -> (usize, f64, f64) {
    let min_closer = mortar * 2.0;
    let mut pairs = 0usize;
    let mut even_closer = 0.0;

    for test_n in 0..100usize {
        let mortars = 2.0 * (test_n as f64 + 1.0);
        let closer = (wall_width
            - (test_n as f64 + 1.0) * stretcher_width
            - test_n as f64 * header_width
            - mortars * mortar)
            / 2.0;
        if closer >= min_closer {
            pairs = test_n;
            even_closer = closer;
        } else {
            break;
        }
    }

    let odd_closer = even_closer + (stretcher_width - header_width) / 2.0;
    (pairs, even_closer, odd_closer)
}

/// Precomputed closer layout for a wall; the fit depends only on the wall,
/// not the course, so it is solved once per layout run.
#[derive(Debug, Clone)]
pub(crate) enum FittedPlan {
    English {
        n_stretchers: usize,
        stretcher_closer: f64,
        n_headers: usize,
        header_closer: f64,
    },
    Flemish {
        pairs: usize,
        even_closer: f64,
        odd_closer: f64,
    },
}

impl FittedPlan {
    pub(crate) fn english(spec: &WallSpec) -> Self {
        let (n_stretchers, stretcher_closer) =
            course_fit(spec.wall_width, spec.brick_width, spec.mortar);
        let (n_headers, header_closer) =
            course_fit(spec.wall_width, spec.brick_depth, spec.mortar);
        Self::English {
            n_stretchers,
            stretcher_closer,
            n_headers,
            header_closer,
        }
    }

    pub(crate) fn flemish(spec: &WallSpec) -> Self {
        let (pairs, even_closer, odd_closer) = flemish_fit(
            spec.wall_width,
            spec.brick_width,
            spec.brick_depth,
            spec.mortar,
        );
        Self::Flemish {
            pairs,
            even_closer,
            odd_closer,
        }
    }

    pub(crate) fn course(&self, spec: &WallSpec, course: usize) -> Vec<BrickPlacement> {
        match *self {
            Self::English {
                n_stretchers,
                stretcher_closer,
                n_headers,
                header_closer,
            } => {
                let (count, closer, unit, width) = if course % 2 == 1 {
                    (n_headers, header_closer, BrickUnit::Header, spec.brick_depth)
                } else {
                    (
                        n_stretchers,
                        stretcher_closer,
                        BrickUnit::Stretcher,
                        spec.brick_width,
                    )
                };
                uniform_fitted_course(spec, course, count, closer, unit, width)
            }
            Self::Flemish {
                pairs,
                even_closer,
                odd_closer,
            } => flemish_fitted_course(spec, course, pairs, even_closer, odd_closer),
        }
    }
}

/// `closer, unit * n, closer` with a mortar joint between every neighbor.
fn uniform_fitted_course(
    spec: &WallSpec,
    course: usize,
    count: usize,
    closer: f64,
    unit: BrickUnit,
    unit_width: f64,
) -> Vec<BrickPlacement> {
    let mut bricks = Vec::with_capacity(count + 2);
    let mut u = 0.0;

    if closer > 0.0 {
        bricks.push(place(spec, course, u, BrickUnit::Closer, closer));
        u += closer + spec.mortar;
    }
    for _ in 0..count {
        bricks.push(place(spec, course, u, unit, unit_width));
        u += unit_width + spec.mortar;
    }
    if closer > 0.0 {
        bricks.push(place(spec, course, u, BrickUnit::Closer, closer));
    }

    bricks
}

/// Flemish course between closers. Even courses lead (and end) with a
/// stretcher, odd courses with a header.
fn flemish_fitted_course(
    spec: &WallSpec,
    course: usize,
    pairs: usize,
    even_closer: f64,
    odd_closer: f64,
) -> Vec<BrickPlacement> {
    let odd = course % 2 == 1;
    let closer = if odd { odd_closer } else { even_closer };
    let (lead_unit, lead_width, infill_unit, infill_width) = if odd {
        (
            BrickUnit::Header,
            spec.brick_depth,
            BrickUnit::Stretcher,
            spec.brick_width,
        )
    } else {
        (
            BrickUnit::Stretcher,
            spec.brick_width,
            BrickUnit::Header,
            spec.brick_depth,
        )
    };

    let mut bricks = Vec::with_capacity(2 * pairs + 3);
    let mut u = 0.0;

    if closer > 0.0 {
        bricks.push(place(spec, course, u, BrickUnit::Closer, closer));
        u += closer + spec.mortar;
    }
    for i in 0..=pairs {
        bricks.push(place(spec, course, u, lead_unit, lead_width));
        u += lead_width + spec.mortar;
        if i < pairs {
            bricks.push(place(spec, course, u, infill_unit, infill_width));
            u += infill_width + spec.mortar;
        }
    }
    if closer > 0.0 {
        bricks.push(place(spec, course, u, BrickUnit::Closer, closer));
    }

    bricks
}
