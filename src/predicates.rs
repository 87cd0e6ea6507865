//! Height, incidence, and "directly above/below" predicates.
//!
//! `height` is the workhorse: every other predicate in this module is
//! expressed in terms of it. An `Ok(None)` return is a genuine, distinguishable
//! "undefined here" value (e.g. a point whose x falls outside a segment's
//! domain) — it is never collapsed into a sentinel number.

use crate::common::{Rat, Signed, Zero};
use crate::error::VdError;
use crate::geometry::{Axis, Plane, Point3D, Ray3D, Segment3D};

/// Height of `point` above `plane` along `axis`. Positive means `point` is on
/// the positive side of `axis` relative to the plane.
pub fn height_point_plane(point: &Point3D, plane: &Plane, axis: Axis) -> Result<Rat, VdError> {
    let coeff = plane.coefficient(axis);
    if coeff.is_zero() {
        return Err(VdError::ZeroCoefficient(axis));
    }
    // Solve the plane equation for `axis`'s coordinate at the point's other two,
    // then subtract from the point's actual coordinate on that axis.
    let numerator = match axis {
        Axis::X => &plane.b * &point.y + &plane.c * &point.z + &plane.d,
        Axis::Y => &plane.a * &point.x + &plane.c * &point.z + &plane.d,
        Axis::Z => &plane.a * &point.x + &plane.b * &point.y + &plane.d,
    };
    let surface_coord = -(numerator) / coeff;
    Ok(point.coord(axis) - &surface_coord)
}

/// Height of `point` above the vertical (z-extruded) plane through `segment`,
/// along y, or `Ok(None)` if `point`'s x falls outside the segment's domain.
pub fn height_point_segment(point: &Point3D, segment: &Segment3D) -> Result<Option<Rat>, VdError> {
    let (lo, hi) = segment.x_range();
    if point.x < lo || point.x > hi {
        return Ok(None);
    }
    let lifted = &segment.p1
        + &Point3D::new(Rat::zero(), Rat::zero(), Rat::from_integer(num_bigint::BigInt::from(1)));
    let vertical_plane = Plane::from_points(&segment.p1, &segment.p2, &lifted)?;
    height_point_plane(point, &vertical_plane, Axis::Y).map(Some)
}

/// Height of `point` above the vertical plane through `ray`, along y, or
/// `Ok(None)` if `point`'s x falls outside the ray's half-line domain.
pub fn height_point_ray(point: &Point3D, ray: &Ray3D) -> Result<Option<Rat>, VdError> {
    let in_domain = if ray.direction.x.is_positive() {
        point.x >= ray.p1.x
    } else if ray.direction.x.is_negative() {
        point.x <= ray.p1.x
    } else {
        point.x == ray.p1.x
    };
    if !in_domain {
        return Ok(None);
    }
    let second = ray.second_point();
    let lifted = &ray.p1
        + &Point3D::new(Rat::zero(), Rat::zero(), Rat::from_integer(num_bigint::BigInt::from(1)));
    let vertical_plane = Plane::from_points(&ray.p1, &second, &lifted)?;
    height_point_plane(point, &vertical_plane, Axis::Y).map(Some)
}

/// Height of `segment`'s midpoint above `plane` along z. This mirrors the
/// representative-point convention used for all segment/ray-vs-plane heights:
/// both endpoints are not independently checked.
pub fn height_segment_plane(segment: &Segment3D, plane: &Plane) -> Result<Rat, VdError> {
    height_point_plane(&segment.mid_point(), plane, Axis::Z)
}

/// Height of `ray`'s anchor point above `plane` along z.
pub fn height_ray_plane(ray: &Ray3D, plane: &Plane) -> Result<Rat, VdError> {
    height_point_plane(&ray.p1, plane, Axis::Z)
}

pub fn incident_point_plane(point: &Point3D, plane: &Plane) -> bool {
    plane.eval(point).is_zero()
}

pub fn is_above_point_plane(point: &Point3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(height_point_plane(point, plane, Axis::Z)?.is_positive())
}

pub fn is_below_point_plane(point: &Point3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(height_point_plane(point, plane, Axis::Z)?.is_negative())
}

pub fn is_above_segment_plane(segment: &Segment3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(is_above_point_plane(&segment.p1, plane)? && is_above_point_plane(&segment.p2, plane)?)
}

pub fn is_below_segment_plane(segment: &Segment3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(is_below_point_plane(&segment.p1, plane)? && is_below_point_plane(&segment.p2, plane)?)
}

pub fn is_above_ray_plane(ray: &Ray3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(is_above_point_plane(&ray.p1, plane)? && ray.direction.z > Rat::zero())
}

pub fn is_below_ray_plane(ray: &Ray3D, plane: &Plane) -> Result<bool, VdError> {
    Ok(is_below_point_plane(&ray.p1, plane)? && ray.direction.z < Rat::zero())
}

/// Among `planes`, finds the one directly above `point` along z: the
/// candidate with strictly positive height, minimized.
///
/// This resolves a known inconsistency in the source this algorithm is
/// derived from, where the sign checks in this function and its `below`
/// counterpart were swapped relative to their own documentation (and
/// relative to the independently-written `is_directly_above` predicate).
/// The semantics implemented here — strictly positive, minimal — is the
/// self-consistent one and is treated as authoritative; see `DESIGN.md`.
pub fn find_directly_above<'a>(
    point: &Point3D,
    planes: &'a [Plane],
) -> Result<Option<&'a Plane>, VdError> {
    Ok(find_directly_above_idx(point, planes)?.map(|i| &planes[i]))
}

/// Index-returning variant of [`find_directly_above`], used by callers that
/// need to key a side table by plane identity without an equality search.
pub fn find_directly_above_idx(point: &Point3D, planes: &[Plane]) -> Result<Option<usize>, VdError> {
    let mut best: Option<(usize, Rat)> = None;
    for (i, plane) in planes.iter().enumerate() {
        let h = height_point_plane(point, plane, Axis::Z)?;
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

/// Mirror of [`find_directly_above`]: the plane with strictly negative height
/// closest to zero.
pub fn find_directly_below<'a>(
    point: &Point3D,
    planes: &'a [Plane],
) -> Result<Option<&'a Plane>, VdError> {
    Ok(find_directly_below_idx(point, planes)?.map(|i| &planes[i]))
}

/// Index-returning variant of [`find_directly_below`].
pub fn find_directly_below_idx(point: &Point3D, planes: &[Plane]) -> Result<Option<usize>, VdError> {
    let mut best: Option<(usize, Rat)> = None;
    for (i, plane) in planes.iter().enumerate() {
        let h = height_point_plane(point, plane, Axis::Z)?;
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

/// True iff `plane` is the one [`find_directly_above`] would return for `point`.
pub fn is_directly_above(point: &Point3D, plane: &Plane, planes: &[Plane]) -> Result<bool, VdError> {
    Ok(find_directly_above(point, planes)?.map(|p| p == plane).unwrap_or(false))
}
