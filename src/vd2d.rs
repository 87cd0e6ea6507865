//! 2D vertical decomposition: trapezoidal cells of a plane's induced segments/rays.

use std::collections::HashMap;

use crate::common::{Rat, Signed};
use crate::error::VdError;
use crate::geometry::{Axis, Carrier, Line3D, Plane, Point3D};
use crate::intersect::{intersect_carriers, parallel};
use crate::primitives::{break_element, BreakOutcome};
use crate::project::{project_point_ray, project_point_segment};

/// A pseudo-trapezoidal region of a single plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell2D {
    pub x_floor: Option<Rat>,
    pub x_ceil: Option<Rat>,
    pub y_floor: Option<Line3D>,
    pub y_ceil: Option<Line3D>,
}

fn supporting_line(carrier: &Carrier) -> Line3D {
    match carrier {
        Carrier::Segment(s) => Line3D::new(s.p1.clone(), s.p2.clone()),
        Carrier::Ray(r) => Line3D::new(r.p1.clone(), r.second_point()),
    }
}

fn project_onto(point: &Point3D, carrier: &Carrier) -> Result<Option<Point3D>, VdError> {
    match carrier {
        Carrier::Segment(s) => project_point_segment(point, s, Axis::Y),
        Carrier::Ray(r) => project_point_ray(point, r, Axis::Y),
    }
}

/// Splits `carrier` at every x-value in `xs` that falls strictly inside its
/// own domain, preserving its original bounds (never extending it to an
/// infinite line — that is what `break_line_at_xs` is for, building a fresh
/// chain from scratch, not what re-breaking an already-finite element needs).
fn break_carrier_at_xs(carrier: &Carrier, xs: &[Rat]) -> Result<Vec<Carrier>, VdError> {
    let mut sorted: Vec<Rat> = xs.to_vec();
    sorted.sort();
    sorted.dedup();
    let (lo, hi) = carrier.x_extent();

    let mut pieces = vec![carrier.clone()];
    for x in sorted {
        if let Some(lo) = &lo {
            if x <= *lo {
                continue;
            }
        }
        if let Some(hi) = &hi {
            if x >= *hi {
                continue;
            }
        }
        let last = pieces.pop().expect("pieces is never empty");
        match break_element(&last, &x, Axis::X)? {
            BreakOutcome::Unchanged(c) => pieces.push(c),
            BreakOutcome::Split(left, right) => {
                pieces.push(left);
                pieces.push(right);
            }
        }
    }
    Ok(pieces)
}

/// Wraps a carrier's supporting line as a fake "plane-like" height candidate
/// by delegating to `find_directly_above`/`find_directly_below` over the
/// infinite lines each carrier lies on, restricted to elements whose
/// projected-y domain actually contains the query point.
fn directly_above_index(point: &Point3D, elements: &[Carrier]) -> Result<Option<usize>, VdError> {
    let mut best: Option<(usize, Rat)> = None;
    for (i, c) in elements.iter().enumerate() {
        let proj = project_onto(point, c)?;
        let target = match proj {
            Some(p) => p,
            None => continue,
        };
        let h = &target.y - &point.y;
        if !h.is_positive() {
            continue;
        }
        match &best {
            Some((_, best_h)) if h >= *best_h => {}
            _ => best = Some((i, h)),
        }
    }
    Ok(best.map(|(i, _)| i))
}

fn directly_below_index(point: &Point3D, elements: &[Carrier]) -> Result<Option<usize>, VdError> {
    let mut best: Option<(usize, Rat)> = None;
    for (i, c) in elements.iter().enumerate() {
        let proj = project_onto(point, c)?;
        let target = match proj {
            Some(p) => p,
            None => continue,
        };
        let h = &target.y - &point.y;
        if !h.is_negative() {
            continue;
        }
        match &best {
            Some((_, best_h)) if h <= *best_h => {}
            _ => best = Some((i, h)),
        }
    }
    Ok(best.map(|(i, _)| i))
}

/// Decomposes a single plane's set of elements (segments/rays assumed to lie
/// on `_plane`) into trapezoidal cells.
///
/// Tracing maps (`points_above`/`points_below`) are local to this call — they
/// never escape as ambient/global state.
pub fn decompose(_plane: &Plane, elements: Vec<Carrier>) -> Result<Vec<Cell2D>, VdError> {
    let n = elements.len();
    let mut points_above: HashMap<usize, Vec<Point3D>> = HashMap::new();
    let mut points_below: HashMap<usize, Vec<Point3D>> = HashMap::new();
    for i in 0..n {
        points_above.entry(i).or_default();
        points_below.entry(i).or_default();
    }

    let mut p_points: Vec<Point3D> = Vec::new();
    for elem in &elements {
        p_points.extend(elem.endpoints());
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if parallel(&elements[i], &elements[j]) {
                continue;
            }
            if let Some(pt) = intersect_carriers(&elements[i], &elements[j])? {
                p_points.push(pt.clone());
                points_above.get_mut(&i).unwrap().push(pt.clone());
                points_above.get_mut(&j).unwrap().push(pt.clone());
                points_below.get_mut(&i).unwrap().push(pt.clone());
                points_below.get_mut(&j).unwrap().push(pt);
            }
        }
    }

    for pt in &p_points {
        if let Some(i) = directly_above_index(pt, &elements)? {
            if let Some(proj) = project_onto(pt, &elements[i])? {
                points_below.get_mut(&i).unwrap().push(proj);
            }
        }
        if let Some(i) = directly_below_index(pt, &elements)? {
            if let Some(proj) = project_onto(pt, &elements[i])? {
                points_above.get_mut(&i).unwrap().push(proj);
            }
        }
    }

    let mut segs_above: Vec<Carrier> = Vec::new();
    let mut segs_below: Vec<Carrier> = Vec::new();
    for i in 0..n {
        let xs_above: Vec<Rat> = points_above[&i].iter().map(|p| p.x.clone()).collect();
        segs_above.extend(break_carrier_at_xs(&elements[i], &xs_above)?);
        let xs_below: Vec<Rat> = points_below[&i].iter().map(|p| p.x.clone()).collect();
        segs_below.extend(break_carrier_at_xs(&elements[i], &xs_below)?);
    }

    let mut cells = Vec::new();

    for s in &segs_above {
        let (x_floor, x_ceil) = s.x_extent();
        let y_floor = Some(supporting_line(s));
        let mid = s.mid_point();
        let y_ceil = match directly_above_index(&mid, &segs_above)? {
            Some(i) => Some(supporting_line(&segs_above[i])),
            None => None,
        };
        cells.push(Cell2D { x_floor, x_ceil, y_floor, y_ceil });
    }

    for s in &segs_below {
        let mid = s.mid_point();
        if directly_below_index(&mid, &segs_below)?.is_none() {
            let (x_floor, x_ceil) = s.x_extent();
            cells.push(Cell2D {
                x_floor,
                x_ceil,
                y_floor: None,
                y_ceil: Some(supporting_line(s)),
            });
        }
    }

    Ok(cells)
}
