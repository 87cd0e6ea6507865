//! Pairwise intersection and parallelism tests for planes, lines, rays, segments.

use crate::common::{Rat, Zero};
use crate::error::VdError;
use crate::geometry::{Carrier, Line3D, Plane, Point3D, Ray3D, Segment3D};

/// Solves `a*x + b*y = c`, `d*x + e*y = f` via Cramer's rule. `None` if singular.
fn solve2x2(a: &Rat, b: &Rat, c: &Rat, d: &Rat, e: &Rat, f: &Rat) -> Option<(Rat, Rat)> {
    let det = a * e - b * d;
    if det.is_zero() {
        return None;
    }
    let x = (c * e - b * f) / &det;
    let y = (a * f - c * d) / &det;
    Some((x, y))
}

/// Intersects two planes, returning the infinite line they share, or `Ok(None)`
/// if they are parallel (including coincident).
pub fn intersect_plane_plane(p: &Plane, q: &Plane) -> Result<Option<Line3D>, VdError> {
    let n1 = p.normal();
    let n2 = q.normal();
    let dir = Point3D::new(
        &n1.y * &n2.z - &n1.z * &n2.y,
        &n1.z * &n2.x - &n1.x * &n2.z,
        &n1.x * &n2.y - &n1.y * &n2.x,
    );
    if dir.x.is_zero() && dir.y.is_zero() && dir.z.is_zero() {
        return Ok(None);
    }
    // Find a point on both planes by zeroing out whichever coordinate the
    // direction vector has a non-zero component in (that axis is free;
    // solve the other two from the plane equations).
    let anchor = if !dir.z.is_zero() {
        let (x, y) = solve2x2(&p.a, &p.b, &-&p.d, &q.a, &q.b, &-&q.d)
            .ok_or_else(|| VdError::DegenerateGeometry("planes parallel".into()))?;
        Point3D::new(x, y, Rat::zero())
    } else if !dir.y.is_zero() {
        let (x, z) = solve2x2(&p.a, &p.c, &-&p.d, &q.a, &q.c, &-&q.d)
            .ok_or_else(|| VdError::DegenerateGeometry("planes parallel".into()))?;
        Point3D::new(x, Rat::zero(), z)
    } else {
        let (y, z) = solve2x2(&p.b, &p.c, &-&p.d, &q.b, &q.c, &-&q.d)
            .ok_or_else(|| VdError::DegenerateGeometry("planes parallel".into()))?;
        Point3D::new(Rat::zero(), y, z)
    };
    let second = &anchor + &dir;
    Ok(Some(Line3D::new(anchor, second)))
}

/// Intersects a line with a plane, returning the point they share, or
/// `Ok(None)` if the line is parallel to the plane.
pub fn intersect_line_plane(line: &Line3D, plane: &Plane) -> Result<Option<Point3D>, VdError> {
    let dir = line.direction();
    let denom = &plane.a * &dir.x + &plane.b * &dir.y + &plane.c * &dir.z;
    if denom.is_zero() {
        return Ok(None);
    }
    let t = -(plane.eval(&line.p1)) / denom;
    Ok(Some(&line.p1 + &dir.scale(&t)))
}

/// Intersects two coplanar lines (solved in x/y, cross-checked against z).
pub fn intersect_line_line(a: &Line3D, b: &Line3D) -> Result<Option<Point3D>, VdError> {
    let da = a.direction();
    let db = b.direction();
    // a.p1 + t*da == b.p1 + s*db, solved for (t, -s) from the x,y rows.
    let rhs_x = &b.p1.x - &a.p1.x;
    let rhs_y = &b.p1.y - &a.p1.y;
    let (t, _s) = match solve2x2(&da.x, &(-&db.x), &rhs_x, &da.y, &(-&db.y), &rhs_y) {
        Some(ts) => ts,
        None => return Ok(None),
    };
    let candidate = &a.p1 + &da.scale(&t);
    let rhs_z = &b.p1.z - &a.p1.z;
    // Validate against z using whichever line actually has a z-extent.
    if !db.z.is_zero() {
        let s = (&candidate.z - &b.p1.z) / &db.z;
        let check = &b.p1 + &db.scale(&s);
        if check.z != candidate.z {
            return Ok(None);
        }
    } else if !rhs_z.is_zero() && !da.z.is_zero() {
        return Ok(None);
    }
    Ok(Some(candidate))
}

/// Direction-ratio based parallelism test: two free vectors are "parallel"
/// here if each non-zero component pairs with a matching-sign non-zero
/// component of the other at the same consistent ratio, and any component
/// that is zero in one is zero in the other.
pub fn parallel_directions(d1: &Point3D, d2: &Point3D) -> bool {
    let comps = [(&d1.x, &d2.x), (&d1.y, &d2.y), (&d1.z, &d2.z)];
    let mut ratio: Option<Rat> = None;
    for (c1, c2) in comps {
        match (c1.is_zero(), c2.is_zero()) {
            (true, true) => continue,
            (true, false) | (false, true) => return false,
            (false, false) => {
                let r = c1 / c2;
                match &ratio {
                    None => ratio = Some(r),
                    Some(existing) => {
                        if *existing != r {
                            return false;
                        }
                    }
                }
            }
        }
    }
    true
}

/// True iff the two carriers' directions are parallel.
pub fn parallel(a: &Carrier, b: &Carrier) -> bool {
    parallel_directions(&a.direction(), &b.direction())
}

fn in_x_range(carrier: &Carrier, x: &Rat) -> bool {
    let (lo, hi) = carrier.x_extent();
    if let Some(lo) = lo {
        if *x < lo {
            return false;
        }
    }
    if let Some(hi) = hi {
        if *x > hi {
            return false;
        }
    }
    true
}

fn carrier_as_line(c: &Carrier) -> Line3D {
    match c {
        Carrier::Segment(s) => Line3D::new(s.p1.clone(), s.p2.clone()),
        Carrier::Ray(r) => Line3D::new(r.p1.clone(), r.second_point()),
    }
}

/// Intersects two carriers (segments/rays), clipping the infinite-line
/// intersection point to both arguments' domains. `Ok(None)` if parallel or
/// if the intersection point falls outside either domain.
pub fn intersect_carriers(a: &Carrier, b: &Carrier) -> Result<Option<Point3D>, VdError> {
    if parallel(a, b) {
        return Ok(None);
    }
    let la = carrier_as_line(a);
    let lb = carrier_as_line(b);
    let point = match intersect_line_line(&la, &lb)? {
        Some(p) => p,
        None => return Ok(None),
    };
    if in_x_range(a, &point.x) && in_x_range(b, &point.x) {
        Ok(Some(point))
    } else {
        Ok(None)
    }
}

pub fn intersect_segment_segment(a: &Segment3D, b: &Segment3D) -> Result<Option<Point3D>, VdError> {
    intersect_carriers(&Carrier::Segment(a.clone()), &Carrier::Segment(b.clone()))
}

pub fn intersect_ray_segment(a: &Ray3D, b: &Segment3D) -> Result<Option<Point3D>, VdError> {
    intersect_carriers(&Carrier::Ray(a.clone()), &Carrier::Segment(b.clone()))
}

pub fn intersect_ray_ray(a: &Ray3D, b: &Ray3D) -> Result<Option<Point3D>, VdError> {
    intersect_carriers(&Carrier::Ray(a.clone()), &Carrier::Ray(b.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rat;

    fn p(x: i64, y: i64, z: i64) -> Point3D {
        Point3D::new(rat(x), rat(y), rat(z))
    }

    #[test]
    fn plane_plane_crossing() {
        // z = 0, and y = z: the two planes meet along the x-axis.
        let z0 = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
        let yz = Plane::from_points(&p(0, 0, 0), &p(0, 1, 1), &p(1, 0, 0)).unwrap();
        let line = intersect_plane_plane(&z0, &yz).unwrap().unwrap();
        let dir = line.direction();
        assert!(dir.y.is_zero() && dir.z.is_zero() && !dir.x.is_zero());
        assert!(z0.eval(&line.p1).is_zero() && yz.eval(&line.p1).is_zero());
    }

    #[test]
    fn plane_plane_parallel() {
        let z0 = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
        let z1 = Plane::from_points(&p(0, 0, 1), &p(1, 0, 1), &p(0, 1, 1)).unwrap();
        assert!(intersect_plane_plane(&z0, &z1).unwrap().is_none());
    }

    #[test]
    fn segments_cross_at_origin() {
        let a = Segment3D::new(p(-5, 0, 0), p(5, 0, 0));
        let b = Segment3D::new(p(0, -5, 0), p(0, 5, 0));
        let i = intersect_segment_segment(&a, &b).unwrap().unwrap();
        assert_eq!(i, p(0, 0, 0));
    }
}
