use vd3d::{is_point_in_cell_or_on_boundary, find_center_point, Carrier, Plane, Point3D, Ray3D, Segment3D};
use vd3d::vd2d::decompose;

fn p(x: i64, y: i64, z: i64) -> Point3D {
    Point3D::new(rat(x), rat(y), rat(z))
}

fn rat(n: i64) -> num_rational::BigRational {
    num_rational::BigRational::from_integer(num_bigint::BigInt::from(n))
}

fn xy_plane() -> Plane {
    Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap()
}

#[test]
fn two_crossing_segments_produce_four_central_cells_and_unbounded_exterior() {
    let a = Segment3D::new(p(-5, 0, 0), p(5, 0, 0));
    let b = Segment3D::new(p(0, -5, 0), p(0, 5, 0));
    let elements = vec![Carrier::Segment(a), Carrier::Segment(b)];
    let cells = decompose(&xy_plane(), elements).unwrap();
    // 4 bounded quadrant cells around the origin, plus unbounded exterior cells.
    assert!(cells.len() >= 4);
}

#[test]
fn cells_have_no_crossing_in_their_interior() {
    let a = Segment3D::new(p(-5, 0, 0), p(5, 0, 0));
    let b = Segment3D::new(p(0, -5, 0), p(0, 5, 0));
    let elements = vec![Carrier::Segment(a), Carrier::Segment(b)];
    let cells = decompose(&xy_plane(), elements).unwrap();
    for cell in &cells {
        let centre = find_center_point(cell);
        assert_ne!(centre, p(0, 0, 0));
    }
}

#[test]
fn single_ray_yields_cells_bounded_only_by_it() {
    let ray = Ray3D::new(p(0, 0, 0), p(1, 0, 0));
    let elements = vec![Carrier::Ray(ray)];
    let cells = decompose(&xy_plane(), elements).unwrap();
    assert!(!cells.is_empty());
}

#[test]
fn centre_of_a_2d_cell_reports_boundary_membership_when_lifted_to_a_trivial_3d_cell() {
    use vd3d::Cell3D;
    let a = Segment3D::new(p(-5, 0, 0), p(5, 0, 0));
    let elements = vec![Carrier::Segment(a)];
    let cells = decompose(&xy_plane(), elements).unwrap();
    let cell = &cells[0];
    let centre = find_center_point(cell);
    let cell3d = Cell3D {
        x_floor: cell.x_floor.clone(),
        x_ceil: cell.x_ceil.clone(),
        y_floor: cell.y_floor.clone(),
        y_ceil: cell.y_ceil.clone(),
        z_floor: None,
        z_ceil: None,
    };
    assert!(is_point_in_cell_or_on_boundary(&cell3d, &centre).unwrap());
}
