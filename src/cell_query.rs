//! Cell membership and centre-point queries over already-emitted cells.
//!
//! These are query helpers, not a persistence/index layer: they let a test
//! (or a downstream consumer) sample a cell without re-running the
//! decomposition.

use crate::common::{rat, Signed};
use crate::error::VdError;
use crate::geometry::{Axis, Line3D, Point3D};
use crate::predicates::height_point_plane;
use crate::vd::Cell3D;
use crate::vd2d::Cell2D;

fn line_y_at_x(line: &Line3D, x: &crate::common::Rat) -> crate::common::Rat {
    let dir = line.direction();
    let t = (x - &line.p1.x) / &dir.x;
    &line.p1.y + &dir.y * &t
}

/// A representative point strictly inside `cell`'s 2D extent, at z = 0.
///
/// Corrects a known off-by-one in the source this is derived from, which
/// computed the unbounded-x fallback from the wrong bound (`x_ceil` instead
/// of `x_floor`, or vice versa); see `DESIGN.md`.
pub fn find_center_point(cell: &Cell2D) -> Point3D {
    let one = rat(1);
    let x = match (&cell.x_floor, &cell.x_ceil) {
        (Some(lo), Some(hi)) => (lo + hi) / rat(2),
        (Some(lo), None) => lo + &one,
        (None, Some(hi)) => hi - &one,
        (None, None) => rat(0),
    };
    let y = match (&cell.y_floor, &cell.y_ceil) {
        (Some(lo), Some(hi)) => {
            let ylo = line_y_at_x(lo, &x);
            let yhi = line_y_at_x(hi, &x);
            (ylo + yhi) / rat(2)
        }
        (Some(lo), None) => line_y_at_x(lo, &x) + &one,
        (None, Some(hi)) => line_y_at_x(hi, &x) - &one,
        (None, None) => rat(0),
    };
    Point3D::new(x, y, rat(0))
}

/// Strict interior membership test.
pub fn is_point_in_cell(cell: &Cell3D, point: &Point3D) -> Result<bool, VdError> {
    membership(cell, point, false)
}

/// Boundary-inclusive membership test.
pub fn is_point_in_cell_or_on_boundary(cell: &Cell3D, point: &Point3D) -> Result<bool, VdError> {
    membership(cell, point, true)
}

fn membership(cell: &Cell3D, point: &Point3D, inclusive: bool) -> Result<bool, VdError> {
    if let Some(lo) = &cell.x_floor {
        if !(if inclusive { &point.x >= lo } else { &point.x > lo }) {
            return Ok(false);
        }
    }
    if let Some(hi) = &cell.x_ceil {
        if !(if inclusive { &point.x <= hi } else { &point.x < hi }) {
            return Ok(false);
        }
    }
    if let Some(lo) = &cell.y_floor {
        let y_at = line_y_at_x(lo, &point.x);
        if !(if inclusive { point.y >= y_at } else { point.y > y_at }) {
            return Ok(false);
        }
    }
    if let Some(hi) = &cell.y_ceil {
        let y_at = line_y_at_x(hi, &point.x);
        if !(if inclusive { point.y <= y_at } else { point.y < y_at }) {
            return Ok(false);
        }
    }
    if let Some(floor) = &cell.z_floor {
        let h = height_point_plane(point, floor, Axis::Z)?;
        if !(if inclusive { h >= crate::common::Rat::from_integer(0.into()) } else { h.is_positive() }) {
            return Ok(false);
        }
    }
    if let Some(ceil) = &cell.z_ceil {
        let h = height_point_plane(point, ceil, Axis::Z)?;
        if !(if inclusive { h <= crate::common::Rat::from_integer(0.into()) } else { h.is_negative() }) {
            return Ok(false);
        }
    }
    Ok(true)
}
