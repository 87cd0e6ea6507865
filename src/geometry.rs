//! Exact-arithmetic geometric primitives: points, planes, lines, rays, segments.
//!
//! Every coordinate is a [`Rat`] (`num_rational::BigRational`); nothing here ever
//! rounds. Predicates built on top of this module (see [`crate::predicates`])
//! depend on that exactness to make strict sign decisions.

use std::ops::{Add, Neg, Sub};

use crate::common::{rat, Rat, Signed, Zero};
use crate::error::VdError;

/// One of the three coordinate axes, used to parameterize height, projection,
/// and breaking operations that are otherwise axis-polymorphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// An exact point in 3-space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point3D {
    pub x: Rat,
    pub y: Rat,
    pub z: Rat,
}

impl Point3D {
    pub fn new(x: Rat, y: Rat, z: Rat) -> Self {
        Point3D { x, y, z }
    }

    pub fn origin() -> Self {
        Point3D::new(rat(0), rat(0), rat(0))
    }

    pub fn coord(&self, axis: Axis) -> &Rat {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<'a, 'b> Add<&'b Point3D> for &'a Point3D {
    type Output = Point3D;
    fn add(self, rhs: &'b Point3D) -> Point3D {
        Point3D::new(&self.x + &rhs.x, &self.y + &rhs.y, &self.z + &rhs.z)
    }
}

impl<'a, 'b> Sub<&'b Point3D> for &'a Point3D {
    type Output = Point3D;
    fn sub(self, rhs: &'b Point3D) -> Point3D {
        Point3D::new(&self.x - &rhs.x, &self.y - &rhs.y, &self.z - &rhs.z)
    }
}

impl<'a> Neg for &'a Point3D {
    type Output = Point3D;
    fn neg(self) -> Point3D {
        Point3D::new(-&self.x, -&self.y, -&self.z)
    }
}

impl Point3D {
    /// Scales this point (treated as a free vector) by a rational factor.
    pub fn scale(&self, k: &Rat) -> Point3D {
        Point3D::new(&self.x * k, &self.y * k, &self.z * k)
    }
}

/// An infinite plane `Ax + By + Cz + D = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    pub a: Rat,
    pub b: Rat,
    pub c: Rat,
    pub d: Rat,
}

impl Plane {
    pub fn new(a: Rat, b: Rat, c: Rat, d: Rat) -> Self {
        Plane { a, b, c, d }
    }

    /// Builds the plane through three non-collinear points.
    pub fn from_points(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> Result<Self, VdError> {
        let v1 = p2 - p1;
        let v2 = p3 - p1;
        let a = &v1.y * &v2.z - &v1.z * &v2.y;
        let b = &v1.z * &v2.x - &v1.x * &v2.z;
        let c = &v1.x * &v2.y - &v1.y * &v2.x;
        if a.is_zero() && b.is_zero() && c.is_zero() {
            return Err(VdError::DegenerateGeometry(
                "three collinear points cannot define a plane".into(),
            ));
        }
        let d = -(&a * &p1.x + &b * &p1.y + &c * &p1.z);
        Ok(Plane { a, b, c, d })
    }

    /// Evaluates `Ax + By + Cz + D` at a point. Zero iff the point is on the plane.
    pub fn eval(&self, p: &Point3D) -> Rat {
        &self.a * &p.x + &self.b * &p.y + &self.c * &p.z + &self.d
    }

    pub fn coefficient(&self, axis: Axis) -> &Rat {
        match axis {
            Axis::X => &self.a,
            Axis::Y => &self.b,
            Axis::Z => &self.c,
        }
    }

    pub fn normal(&self) -> Point3D {
        Point3D::new(self.a.clone(), self.b.clone(), self.c.clone())
    }
}

/// An infinite line through two distinct points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line3D {
    pub p1: Point3D,
    pub p2: Point3D,
}

impl Line3D {
    pub fn new(p1: Point3D, p2: Point3D) -> Self {
        Line3D { p1, p2 }
    }

    pub fn direction(&self) -> Point3D {
        &self.p2 - &self.p1
    }
}

/// A half-line anchored at `p1`, extending indefinitely along `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray3D {
    pub p1: Point3D,
    pub direction: Point3D,
}

impl Ray3D {
    pub fn new(p1: Point3D, direction: Point3D) -> Self {
        Ray3D { p1, direction }
    }

    /// The point the ray would reach after advancing one unit of `direction`.
    pub fn second_point(&self) -> Point3D {
        &self.p1 + &self.direction
    }
}

/// A bounded segment between two distinct points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment3D {
    pub p1: Point3D,
    pub p2: Point3D,
}

impl Segment3D {
    pub fn new(p1: Point3D, p2: Point3D) -> Self {
        Segment3D { p1, p2 }
    }

    pub fn mid_point(&self) -> Point3D {
        let half = Rat::new(num_bigint::BigInt::from(1), num_bigint::BigInt::from(2));
        (&self.p1 + &self.p2).scale(&half)
    }

    pub fn x_range(&self) -> (Rat, Rat) {
        if self.p1.x <= self.p2.x {
            (self.p1.x.clone(), self.p2.x.clone())
        } else {
            (self.p2.x.clone(), self.p1.x.clone())
        }
    }
}

/// A segment or a ray: the element type `vd2d` and the 3D driver's per-plane
/// edge lists operate on. Lines only appear transiently, before being broken
/// into a chain of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Carrier {
    Segment(Segment3D),
    Ray(Ray3D),
}

impl Carrier {
    pub fn endpoints(&self) -> Vec<Point3D> {
        match self {
            Carrier::Segment(s) => vec![s.p1.clone(), s.p2.clone()],
            Carrier::Ray(r) => vec![r.p1.clone()],
        }
    }

    pub fn mid_point(&self) -> Point3D {
        match self {
            Carrier::Segment(s) => s.mid_point(),
            Carrier::Ray(r) => r.second_point(),
        }
    }

    pub fn direction(&self) -> Point3D {
        match self {
            Carrier::Segment(s) => &s.p2 - &s.p1,
            Carrier::Ray(r) => r.direction.clone(),
        }
    }

    pub fn anchor(&self) -> &Point3D {
        match self {
            Carrier::Segment(s) => &s.p1,
            Carrier::Ray(r) => &r.p1,
        }
    }

    /// `x_floor`/`x_ceil` of this carrier's extent, `None` meaning unbounded
    /// on that side (only possible for a [`Carrier::Ray`]).
    pub fn x_extent(&self) -> (Option<Rat>, Option<Rat>) {
        match self {
            Carrier::Segment(s) => {
                let (lo, hi) = s.x_range();
                (Some(lo), Some(hi))
            }
            Carrier::Ray(r) => {
                if r.direction.x.is_positive() {
                    (Some(r.p1.x.clone()), None)
                } else if r.direction.x.is_negative() {
                    (None, Some(r.p1.x.clone()))
                } else {
                    (Some(r.p1.x.clone()), Some(r.p1.x.clone()))
                }
            }
        }
    }
}

impl From<Segment3D> for Carrier {
    fn from(s: Segment3D) -> Self {
        Carrier::Segment(s)
    }
}

impl From<Ray3D> for Carrier {
    fn from(r: Ray3D) -> Self {
        Carrier::Ray(r)
    }
}
