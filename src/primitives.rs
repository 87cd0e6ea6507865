//! Breaking carriers along the x axis, endpoint/midpoint extraction.
//!
//! Breaking is defined only along [`Axis::X`]: both the worked decomposition
//! algorithm (see `SPEC_FULL.md` §4.6-4.7) and its break-preserves-endpoints
//! property consistently split elements by x-coordinate. A prior y-axis
//! variant existed in an earlier iteration of this code and is not carried
//! forward; see `DESIGN.md`.

use crate::common::{Rat, Signed};
use crate::error::VdError;
use crate::geometry::{Axis, Carrier, Point3D, Ray3D, Segment3D};

/// Result of attempting to break a carrier at a given x-coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakOutcome {
    /// `v` coincided with an existing endpoint; nothing changed.
    Unchanged(Carrier),
    /// Split into two pieces, left-to-right in x.
    Split(Carrier, Carrier),
}

fn point_at_x(p1: &Point3D, dir: &Point3D, x: &Rat) -> Point3D {
    let t = (x - &p1.x) / &dir.x;
    Point3D::new(x.clone(), &p1.y + &dir.y * &t, &p1.z + &dir.z * &t)
}

/// Breaks `carrier` at x-coordinate `v`.
pub fn break_element(carrier: &Carrier, v: &Rat, axis: Axis) -> Result<BreakOutcome, VdError> {
    if axis != Axis::X {
        return Err(VdError::UnsupportedAxis(axis));
    }
    match carrier {
        Carrier::Segment(s) => {
            let (lo, hi) = s.x_range();
            if *v < lo || *v > hi {
                return Err(VdError::OutOfRange { axis, value: v.clone() });
            }
            if *v == s.p1.x {
                return Ok(BreakOutcome::Unchanged(Carrier::Segment(s.clone())));
            }
            if *v == s.p2.x {
                return Ok(BreakOutcome::Unchanged(Carrier::Segment(s.clone())));
            }
            let dir = &s.p2 - &s.p1;
            let mid = point_at_x(&s.p1, &dir, v);
            let (left, right) = if s.p1.x < s.p2.x {
                (s.p1.clone(), s.p2.clone())
            } else {
                (s.p2.clone(), s.p1.clone())
            };
            Ok(BreakOutcome::Split(
                Carrier::Segment(Segment3D::new(left, mid.clone())),
                Carrier::Segment(Segment3D::new(mid, right)),
            ))
        }
        Carrier::Ray(r) => {
            let in_range = if r.direction.x.is_positive() {
                *v >= r.p1.x
            } else if r.direction.x.is_negative() {
                *v <= r.p1.x
            } else {
                *v == r.p1.x
            };
            if !in_range {
                return Err(VdError::OutOfRange { axis, value: v.clone() });
            }
            if *v == r.p1.x {
                return Ok(BreakOutcome::Unchanged(Carrier::Ray(r.clone())));
            }
            let mid = point_at_x(&r.p1, &r.direction, v);
            let (near, far) = if r.direction.x.is_positive() {
                (r.p1.clone(), mid.clone())
            } else {
                (mid.clone(), r.p1.clone())
            };
            Ok(BreakOutcome::Split(
                Carrier::Segment(Segment3D::new(near, far)),
                Carrier::Ray(Ray3D::new(mid, r.direction.clone())),
            ))
        }
    }
}

/// Breaks an infinite line, represented by one of its finite carriers
/// extended conceptually to infinity, at a sorted set of x-values, producing
/// the full chain: a leftward-pointing ray, the interior segments, and a
/// rightward-pointing ray.
///
/// Builds the whole chain in one pass from a fully-accumulated break-point
/// set, rather than mutating a shared list while iterating over it.
pub fn break_line_at_xs(anchor: &Point3D, direction: &Point3D, xs: &[Rat]) -> Vec<Carrier> {
    let mut sorted: Vec<Rat> = xs.to_vec();
    sorted.sort();
    sorted.dedup();

    if sorted.is_empty() {
        let left = Ray3D::new(anchor.clone(), -direction);
        let right = Ray3D::new(anchor.clone(), direction.clone());
        return vec![Carrier::Ray(left), Carrier::Ray(right)];
    }

    let points: Vec<Point3D> = sorted.iter().map(|x| point_at_x(anchor, direction, x)).collect();

    let mut out = Vec::with_capacity(points.len() + 1);
    // Leftmost unbounded end points away from the chain, i.e. in -direction.
    out.push(Carrier::Ray(Ray3D::new(points[0].clone(), -direction)));
    for pair in points.windows(2) {
        out.push(Carrier::Segment(Segment3D::new(pair[0].clone(), pair[1].clone())));
    }
    // Rightmost unbounded end points away from the chain, i.e. in +direction.
    out.push(Carrier::Ray(Ray3D::new(
        points[points.len() - 1].clone(),
        direction.clone(),
    )));
    out
}

pub fn endpoints(carrier: &Carrier) -> Vec<Point3D> {
    carrier.endpoints()
}

pub fn mid_point(carrier: &Carrier) -> Point3D {
    carrier.mid_point()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rat;

    #[test]
    fn break_ray_at_x() {
        let ray = Ray3D::new(Point3D::new(rat(0), rat(0), rat(0)), Point3D::new(rat(1), rat(0), rat(0)));
        let outcome = break_element(&Carrier::Ray(ray), &rat(3), Axis::X).unwrap();
        match outcome {
            BreakOutcome::Split(Carrier::Segment(s), Carrier::Ray(r)) => {
                assert_eq!(s.p1, Point3D::new(rat(0), rat(0), rat(0)));
                assert_eq!(s.p2, Point3D::new(rat(3), rat(0), rat(0)));
                assert_eq!(r.p1, Point3D::new(rat(3), rat(0), rat(0)));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
