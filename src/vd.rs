//! 3D vertical decomposition: drives `vd2d` per plane and stitches the
//! resulting 2D cells into 3D cells bounded above/below by planes.

use std::collections::HashMap;

use crate::cell_query::find_center_point;
use crate::common::Rat;
use crate::error::VdError;
use crate::geometry::{Axis, Carrier, Line3D, Plane};
use crate::intersect::{intersect_line_line, intersect_plane_plane};
use crate::predicates::{find_directly_above, find_directly_above_idx, find_directly_below, find_directly_below_idx};
use crate::primitives::break_line_at_xs;
use crate::project::{
    project_carrier_onto_xy, project_carrier_plane, project_line_plane, project_point_line,
    project_point_plane, xy_plane,
};
use crate::vd2d;

/// A pseudo-trapezoidal cell of 3-space: an x/y trapezoid extruded between
/// two bounding planes (either of which may be absent for an unbounded cell).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell3D {
    pub x_floor: Option<Rat>,
    pub x_ceil: Option<Rat>,
    pub y_floor: Option<Line3D>,
    pub y_ceil: Option<Line3D>,
    pub z_floor: Option<Plane>,
    pub z_ceil: Option<Plane>,
}

/// Decomposes the arrangement of `planes` (assumed in general position: no
/// two parallel, no three sharing a line) into pseudo-trapezoidal cells.
pub fn decompose(planes: &[Plane]) -> Result<Vec<Cell3D>, VdError> {
    let n = planes.len();

    if n == 0 {
        return Ok(Vec::new());
    }
    if n == 1 {
        return Ok(vec![
            Cell3D {
                x_floor: None,
                x_ceil: None,
                y_floor: None,
                y_ceil: None,
                z_floor: None,
                z_ceil: Some(planes[0].clone()),
            },
            Cell3D {
                x_floor: None,
                x_ceil: None,
                y_floor: None,
                y_ceil: None,
                z_floor: Some(planes[0].clone()),
                z_ceil: None,
            },
        ]);
    }

    // intersection_lines[i] = the lines plane i shares with every other plane,
    // tagged with the partner's index.
    let mut intersection_lines: Vec<Vec<(usize, Line3D)>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            match intersect_plane_plane(&planes[i], &planes[j])? {
                Some(line) => {
                    intersection_lines[i].push((j, line.clone()));
                    intersection_lines[j].push((i, line));
                }
                None => {
                    log::warn!("planes {i} and {j} are parallel; arrangement is not in general position");
                    return Err(VdError::DegenerateGeometry(format!(
                        "planes {i} and {j} are parallel"
                    )));
                }
            }
        }
    }

    // All unordered pairs, each with the infinite line the two planes share.
    let mut pairs: Vec<(usize, usize, Line3D)> = Vec::new();
    for i in 0..n {
        for &(j, ref line) in &intersection_lines[i] {
            if j > i {
                pairs.push((i, j, line.clone()));
            }
        }
    }

    // Each intersection edge, broken at two independent x-value sets: the
    // triple-plane points (shared by both the above- and below-face break
    // sets) and the projection-crossing points (§4.7 step 2's second
    // bullet), classified as an above- or below-event by a visibility-guarded
    // height comparison against every unrelated edge in the arrangement.
    let mut own_segs_above: Vec<Vec<Carrier>> = vec![Vec::new(); n];
    let mut own_segs_below: Vec<Vec<Carrier>> = vec![Vec::new(); n];
    let xy = xy_plane();
    for &(i, j, ref line) in &pairs {
        let mut xs_above: Vec<Rat> = Vec::new();
        let mut xs_below: Vec<Rat> = Vec::new();

        for (k, plane_k) in planes.iter().enumerate() {
            if k == i || k == j {
                continue;
            }
            if let Some(pt) = crate::intersect::intersect_line_plane(line, plane_k)? {
                xs_above.push(pt.x.clone());
                xs_below.push(pt.x);
            }
        }

        let flat_focus = project_line_plane(line, &xy, Axis::Z)?;
        for &(k, l, ref peer_line) in &pairs {
            if (k, l) == (i, j) {
                continue;
            }
            let flat_peer = project_line_plane(peer_line, &xy, Axis::Z)?;
            let xy_pt = match intersect_line_line(&flat_focus, &flat_peer)? {
                Some(pt) => pt,
                None => continue,
            };
            let q = match project_point_line(&xy_pt, line, Axis::Z) {
                Ok(pt) => pt,
                Err(_) => continue,
            };
            let q_peer = match project_point_line(&xy_pt, peer_line, Axis::Z) {
                Ok(pt) => pt,
                Err(_) => continue,
            };
            if q.z == q_peer.z {
                // literal 3D intersection (already covered by a triple-plane point)
                continue;
            }
            let (lo, hi) = if q.z < q_peer.z { (&q.z, &q_peer.z) } else { (&q_peer.z, &q.z) };

            let mut occluded = false;
            for (m, plane_m) in planes.iter().enumerate() {
                if m == i || m == j || m == k || m == l {
                    continue;
                }
                if let Ok(proj) = project_point_plane(&xy_pt, plane_m, Axis::Z) {
                    if &proj.z > lo && &proj.z < hi {
                        occluded = true;
                        break;
                    }
                }
            }
            if occluded {
                continue;
            }

            if q.z < q_peer.z {
                xs_above.push(xy_pt.x);
            } else {
                xs_below.push(xy_pt.x);
            }
        }

        let anchor = line.p1.clone();
        let direction = line.direction();
        let chain_above = break_line_at_xs(&anchor, &direction, &xs_above);
        let chain_below = break_line_at_xs(&anchor, &direction, &xs_below);
        own_segs_above[i].extend(chain_above.clone());
        own_segs_above[j].extend(chain_above);
        own_segs_below[i].extend(chain_below.clone());
        own_segs_below[j].extend(chain_below);
    }

    // For every above-face edge, find the plane directly above its midpoint
    // and record a z-projected copy as a below-face contribution of that
    // neighbour (and mirror for below-face edges). See SPEC_FULL.md §4.7 step 4.
    let mut contrib_above: HashMap<usize, Vec<Carrier>> = HashMap::new();
    let mut contrib_below: HashMap<usize, Vec<Carrier>> = HashMap::new();
    for edges in &own_segs_above {
        for edge in edges {
            let mid = edge.mid_point();
            if let Some(idx) = find_directly_above_idx(&mid, planes)? {
                let projected = project_carrier_plane(edge, &planes[idx], Axis::Z)?;
                contrib_below.entry(idx).or_default().push(projected);
            }
        }
    }
    for edges in &own_segs_below {
        for edge in edges {
            let mid = edge.mid_point();
            if let Some(idx) = find_directly_below_idx(&mid, planes)? {
                let projected = project_carrier_plane(edge, &planes[idx], Axis::Z)?;
                contrib_above.entry(idx).or_default().push(projected);
            }
        }
    }

    let mut cells = Vec::new();

    for (i, plane) in planes.iter().enumerate() {
        let mut segs_above = own_segs_above[i].clone();
        segs_above.extend(contrib_above.remove(&i).unwrap_or_default());
        let mut segs_below = own_segs_below[i].clone();
        segs_below.extend(contrib_below.remove(&i).unwrap_or_default());

        let flat_above: Vec<Carrier> = segs_above.iter().map(project_carrier_onto_xy).collect();
        let flat_below: Vec<Carrier> = segs_below.iter().map(project_carrier_onto_xy).collect();

        let upper_cells = vd2d::decompose(plane, flat_above)?;
        let lower_cells = vd2d::decompose(plane, flat_below)?;

        for cell in &upper_cells {
            let centre_xy = find_center_point(cell);
            let lifted = project_point_plane(&centre_xy, plane, Axis::Z)?;
            let z_ceil = find_directly_above(&lifted, planes)?.cloned();
            cells.push(Cell3D {
                x_floor: cell.x_floor.clone(),
                x_ceil: cell.x_ceil.clone(),
                y_floor: cell.y_floor.clone(),
                y_ceil: cell.y_ceil.clone(),
                z_floor: Some(plane.clone()),
                z_ceil,
            });
        }

        for cell in &lower_cells {
            let centre_xy = find_center_point(cell);
            let lifted = project_point_plane(&centre_xy, plane, Axis::Z)?;
            if find_directly_below(&lifted, planes)?.is_none() {
                cells.push(Cell3D {
                    x_floor: cell.x_floor.clone(),
                    x_ceil: cell.x_ceil.clone(),
                    y_floor: cell.y_floor.clone(),
                    y_ceil: cell.y_ceil.clone(),
                    z_floor: None,
                    z_ceil: Some(plane.clone()),
                });
            }
        }
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rat;
    use crate::geometry::Point3D;

    fn p(x: i64, y: i64, z: i64) -> Point3D {
        Point3D::new(rat(x), rat(y), rat(z))
    }

    #[test]
    fn single_plane_two_cells() {
        let z0 = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
        let cells = decompose(&[z0.clone()]).unwrap();
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().any(|c| c.z_floor.is_none() && c.z_ceil == Some(z0.clone())));
        assert!(cells.iter().any(|c| c.z_ceil.is_none() && c.z_floor == Some(z0.clone())));
    }

    #[test]
    fn parallel_planes_are_degenerate() {
        let z0 = Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap();
        let z1 = Plane::from_points(&p(0, 0, 1), &p(1, 0, 1), &p(0, 1, 1)).unwrap();
        assert!(matches!(decompose(&[z0, z1]), Err(VdError::DegenerateGeometry(_))));
    }
}
