//! Projection of points and carriers onto a plane along a chosen axis.

use crate::common::{Rat, Zero};
use crate::error::VdError;
use crate::geometry::{Axis, Carrier, Line3D, Plane, Point3D, Ray3D, Segment3D};
use crate::predicates::{height_point_ray, height_point_segment};

/// The canonical horizontal plane `z = 0` through the origin.
pub fn xy_plane() -> Plane {
    Plane::new(Rat::zero(), Rat::zero(), Rat::from_integer(1.into()), Rat::zero())
}

/// Projects `point` onto `plane` along `axis`, leaving the other two
/// coordinates unchanged.
pub fn project_point_plane(point: &Point3D, plane: &Plane, axis: Axis) -> Result<Point3D, VdError> {
    let coeff = plane.coefficient(axis);
    if coeff.is_zero() {
        return Err(VdError::ZeroCoefficient(axis));
    }
    let mut out = point.clone();
    let numerator = match axis {
        Axis::X => &plane.b * &point.y + &plane.c * &point.z + &plane.d,
        Axis::Y => &plane.a * &point.x + &plane.c * &point.z + &plane.d,
        Axis::Z => &plane.a * &point.x + &plane.b * &point.y + &plane.d,
    };
    let surface_coord = -(numerator) / coeff;
    match axis {
        Axis::X => out.x = surface_coord,
        Axis::Y => out.y = surface_coord,
        Axis::Z => out.z = surface_coord,
    }
    Ok(out)
}

/// Shorthand for `project_point_plane(point, &xy_plane(), Axis::Z)`.
pub fn project_point_onto_xy(point: &Point3D) -> Point3D {
    Point3D::new(point.x.clone(), point.y.clone(), Rat::zero())
}

/// Projects `point` onto `line` along `axis` by walking the line's parameter
/// until the non-axis coordinates match.
pub fn project_point_line(point: &Point3D, line: &Line3D, axis: Axis) -> Result<Point3D, VdError> {
    let dir = line.direction();
    match axis {
        Axis::Y => {
            if !dir.x.is_zero() {
                let t = (&point.x - &line.p1.x) / &dir.x;
                let z = &line.p1.z + &dir.z * &t;
                if z != point.z {
                    return Err(VdError::ProjectionUndefined(axis));
                }
                Ok(Point3D::new(point.x.clone(), &line.p1.y + &dir.y * &t, point.z.clone()))
            } else {
                Err(VdError::ProjectionUndefined(axis))
            }
        }
        Axis::Z => {
            if !dir.x.is_zero() {
                let t = (&point.x - &line.p1.x) / &dir.x;
                Ok(Point3D::new(
                    point.x.clone(),
                    point.y.clone(),
                    &line.p1.z + &dir.z * &t,
                ))
            } else if !dir.y.is_zero() {
                let t = (&point.y - &line.p1.y) / &dir.y;
                Ok(Point3D::new(
                    point.x.clone(),
                    point.y.clone(),
                    &line.p1.z + &dir.z * &t,
                ))
            } else {
                Err(VdError::ProjectionUndefined(axis))
            }
        }
        Axis::X => Err(VdError::UnsupportedAxis(axis)),
    }
}

/// Projects `point` onto `segment`'s domain along `axis`. Returns `Ok(None)`,
/// not an error, when `point`'s x falls outside the segment's range — this is
/// the one in-band "no projection here" case in the module.
pub fn project_point_segment(
    point: &Point3D,
    segment: &Segment3D,
    axis: Axis,
) -> Result<Option<Point3D>, VdError> {
    match axis {
        Axis::Y => {
            let h = height_point_segment(point, segment)?;
            match h {
                None => Ok(None),
                Some(_) => {
                    let line = Line3D::new(segment.p1.clone(), segment.p2.clone());
                    project_point_line(point, &line, Axis::Y).map(Some)
                }
            }
        }
        _ => Err(VdError::UnsupportedAxis(axis)),
    }
}

/// Projects `point` onto `ray`'s half-line domain along `axis`. `Ok(None)` if
/// out of the ray's domain.
pub fn project_point_ray(point: &Point3D, ray: &Ray3D, axis: Axis) -> Result<Option<Point3D>, VdError> {
    match axis {
        Axis::Y => {
            let h = height_point_ray(point, ray)?;
            match h {
                None => Ok(None),
                Some(_) => {
                    let line = Line3D::new(ray.p1.clone(), ray.second_point());
                    project_point_line(point, &line, Axis::Y).map(Some)
                }
            }
        }
        _ => Err(VdError::UnsupportedAxis(axis)),
    }
}

/// Projects a segment onto `plane` along `axis` by projecting both endpoints.
pub fn project_segment_plane(
    segment: &Segment3D,
    plane: &Plane,
    axis: Axis,
) -> Result<Segment3D, VdError> {
    let p1 = project_point_plane(&segment.p1, plane, axis)?;
    let p2 = project_point_plane(&segment.p2, plane, axis)?;
    Ok(Segment3D::new(p1, p2))
}

/// Projects a ray onto `plane` along `axis` by projecting its anchor and
/// second point, rebuilding the direction from the two projected points.
pub fn project_ray_plane(ray: &Ray3D, plane: &Plane, axis: Axis) -> Result<Ray3D, VdError> {
    let p1 = project_point_plane(&ray.p1, plane, axis)?;
    let p2 = project_point_plane(&ray.second_point(), plane, axis)?;
    Ok(Ray3D::new(p1.clone(), &p2 - &p1))
}

/// Projects a line onto `plane` along `axis`.
pub fn project_line_plane(line: &Line3D, plane: &Plane, axis: Axis) -> Result<Line3D, VdError> {
    let p1 = project_point_plane(&line.p1, plane, axis)?;
    let p2 = project_point_plane(&line.p2, plane, axis)?;
    Ok(Line3D::new(p1, p2))
}

/// Projects a carrier (segment or ray) onto `plane` along `axis`.
pub fn project_carrier_plane(carrier: &Carrier, plane: &Plane, axis: Axis) -> Result<Carrier, VdError> {
    match carrier {
        Carrier::Segment(s) => project_segment_plane(s, plane, axis).map(Carrier::Segment),
        Carrier::Ray(r) => project_ray_plane(r, plane, axis).map(Carrier::Ray),
    }
}

/// Shorthand: projects a carrier onto the canonical xy-plane along z.
pub fn project_carrier_onto_xy(carrier: &Carrier) -> Carrier {
    match carrier {
        Carrier::Segment(s) => Carrier::Segment(Segment3D::new(
            project_point_onto_xy(&s.p1),
            project_point_onto_xy(&s.p2),
        )),
        Carrier::Ray(r) => {
            let p1 = project_point_onto_xy(&r.p1);
            let p2 = project_point_onto_xy(&r.second_point());
            Carrier::Ray(Ray3D::new(p1.clone(), &p2 - &p1))
        }
    }
}
