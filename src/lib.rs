//! Vertical decomposition of an arrangement of planes in 3-space into
//! pseudo-trapezoidal cells. See `vd::decompose` for the entry point.

pub mod cell_query;
pub mod common;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod predicates;
pub mod primitives;
pub mod project;
pub mod vd;
pub mod vd2d;

pub use cell_query::{find_center_point, is_point_in_cell, is_point_in_cell_or_on_boundary};
pub use error::VdError;
pub use geometry::{Axis, Carrier, Line3D, Plane, Point3D, Ray3D, Segment3D};
pub use intersect::{
    intersect_carriers, intersect_line_line, intersect_line_plane, intersect_plane_plane,
    intersect_ray_ray, intersect_ray_segment, intersect_segment_segment, parallel,
};
pub use predicates::{
    find_directly_above, find_directly_below, height_point_plane, height_point_ray,
    height_point_segment, height_ray_plane, height_segment_plane, incident_point_plane,
    is_above_point_plane, is_above_ray_plane, is_above_segment_plane, is_below_point_plane,
    is_below_ray_plane, is_below_segment_plane, is_directly_above,
};
pub use primitives::{break_element, break_line_at_xs, endpoints, mid_point, BreakOutcome};
pub use project::{
    project_carrier_plane, project_line_plane, project_point_line, project_point_plane,
    project_point_ray, project_point_segment, project_ray_plane, project_segment_plane, xy_plane,
};
pub use vd::Cell3D;
pub use vd2d::Cell2D;
