use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use vd3d::{break_element, Axis, BreakOutcome, Carrier, Plane, Point3D, Segment3D};
use vd3d::{height_point_plane, project_point_plane};

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn small_int() -> impl Strategy<Value = i64> {
    -20i64..20i64
}

/// A non-vertical plane `z = slope*x + intercept`, so projecting along z is
/// always defined.
fn tilted_plane() -> impl Strategy<Value = Plane> {
    (small_int(), small_int()).prop_map(|(slope, intercept)| {
        let p0 = Point3D::new(rat(0), rat(0), rat(intercept));
        let p1 = Point3D::new(rat(1), rat(0), rat(intercept + slope));
        let p2 = Point3D::new(rat(0), rat(1), rat(intercept));
        Plane::from_points(&p0, &p1, &p2).unwrap()
    })
}

proptest! {
    #[test]
    fn project_then_height_round_trips_to_zero(
        plane in tilted_plane(),
        x in small_int(), y in small_int(), z in small_int(),
    ) {
        let point = Point3D::new(rat(x), rat(y), rat(z));
        let projected = project_point_plane(&point, &plane, Axis::Z).unwrap();
        let h = height_point_plane(&projected, &plane, Axis::Z).unwrap();
        prop_assert_eq!(h, rat(0));
    }

    #[test]
    fn projection_is_idempotent(
        plane in tilted_plane(),
        x in small_int(), y in small_int(), z in small_int(),
    ) {
        let point = Point3D::new(rat(x), rat(y), rat(z));
        let once = project_point_plane(&point, &plane, Axis::Z).unwrap();
        let twice = project_point_plane(&once, &plane, Axis::Z).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn break_preserves_endpoints(
        lo in small_int(), d1 in 1i64..20, d2 in 1i64..20,
    ) {
        prop_assume!(d1 != d2);
        let (near, far) = if d1 < d2 { (d1, d2) } else { (d2, d1) };
        let hi = lo + far;
        let xb = lo + near;
        let seg = Segment3D::new(
            Point3D::new(rat(lo), rat(0), rat(0)),
            Point3D::new(rat(hi), rat(0), rat(0)),
        );
        let outcome = break_element(&Carrier::Segment(seg), &rat(xb), Axis::X).unwrap();
        match outcome {
            BreakOutcome::Split(left, right) => {
                let mut xs: Vec<BigRational> = left
                    .endpoints()
                    .into_iter()
                    .chain(right.endpoints())
                    .map(|p| p.x)
                    .collect();
                xs.sort();
                prop_assert_eq!(xs.first().unwrap(), &rat(lo));
                prop_assert_eq!(xs.last().unwrap(), &rat(hi));
            }
            BreakOutcome::Unchanged(_) => prop_assert!(false, "interior break point should split"),
        }
    }
}
