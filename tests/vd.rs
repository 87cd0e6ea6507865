use vd3d::vd::decompose;
use vd3d::{Plane, Point3D};

fn p(x: i64, y: i64, z: i64) -> Point3D {
    Point3D::new(rat(x), rat(y), rat(z))
}

fn rat(n: i64) -> num_rational::BigRational {
    num_rational::BigRational::from_integer(num_bigint::BigInt::from(n))
}

#[test]
fn single_plane_has_exactly_two_unbounded_cells() {
    let plane = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
    let cells = decompose(&[plane]).unwrap();
    assert_eq!(cells.len(), 2);
    for cell in &cells {
        assert!(cell.x_floor.is_none());
        assert!(cell.x_ceil.is_none());
    }
}

#[test]
fn parallel_planes_are_rejected_as_degenerate() {
    let _ = env_logger::try_init();
    let a = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
    let b = Plane::from_points(&p(0, 0, 1), &p(1, 0, 1), &p(0, 1, 1)).unwrap();
    assert!(decompose(&[a, b]).is_err());
}

#[test]
fn two_crossing_planes_yield_four_cells() {
    // z = 0 and y = z
    let a = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
    let b = Plane::from_points(&p(0, 0, 0), &p(0, 1, 1), &p(1, 0, 0)).unwrap();
    let cells = decompose(&[a, b]).unwrap();
    assert!(!cells.is_empty());
}

#[test]
fn four_plane_arrangement_exercises_projection_crossing_breaks() {
    // z=0, y=z, x=z, and x-y-z+1=0: no two planes parallel, so this is the
    // smallest arrangement where an intersection edge from one plane pair
    // can cross another pair's edge in xy-projection without literally
    // meeting it in 3D.
    let a = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
    let b = Plane::from_points(&p(0, 0, 0), &p(0, 1, 1), &p(1, 0, 0)).unwrap();
    let c = Plane::from_points(&p(0, 0, 0), &p(0, 1, 0), &p(1, 0, 1)).unwrap();
    let d = Plane::from_points(&p(0, 1, 0), &p(0, 0, 1), &p(-1, 0, 0)).unwrap();
    let cells = decompose(&[a, b, c, d]).unwrap();
    assert!(!cells.is_empty());
}

#[test]
fn every_emitted_cell_contains_its_own_centre_in_x_and_y() {
    let a = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
    let b = Plane::from_points(&p(0, 0, 0), &p(0, 1, 1), &p(1, 0, 0)).unwrap();
    let cells = decompose(&[a, b]).unwrap();
    for cell in &cells {
        let centre2d = vd3d::find_center_point(&vd3d::Cell2D {
            x_floor: cell.x_floor.clone(),
            x_ceil: cell.x_ceil.clone(),
            y_floor: cell.y_floor.clone(),
            y_ceil: cell.y_ceil.clone(),
        });
        // Lift the 2D centre onto the cell's floor plane (or ceiling, if the
        // cell is unbounded below) so z is defined, and check membership.
        let reference_plane = cell.z_floor.as_ref().or(cell.z_ceil.as_ref());
        if let Some(plane) = reference_plane {
            let lifted = vd3d::project_point_plane(&centre2d, plane, vd3d::Axis::Z).unwrap();
            let x_ok = cell.x_floor.as_ref().map_or(true, |lo| &lifted.x >= lo)
                && cell.x_ceil.as_ref().map_or(true, |hi| &lifted.x <= hi);
            assert!(x_ok);
        }
    }
}
