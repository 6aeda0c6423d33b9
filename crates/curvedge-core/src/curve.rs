//! Cubic handle placement shared by the deriver and the path renderer.
//!
//! Both callers recompute handles from the same inputs through [`segment_handles`], so the
//! synthetic points a user sees and the curve that gets drawn can never disagree.
//!
//! Rules, for points `p_0..p_n`, chord `c_i = |p_{i+1} - p_i|`, curvature `k` and `N(side)` the
//! outward normal of a side:
//!
//! - `Bezier`: endpoint handles sit at `p_0 + N(from) * k * c_0` and `p_n + N(to) * k * c_{n-1}`;
//!   interior handles point along the chord, `k` of the way towards the neighbor.
//! - `CatmullRom`: uniform parametrization, tangent `m_j = (p_{j+1} - p_{j-1}) / 2`; endpoint
//!   tangents are `N(from) * c_0` and `-N(to) * c_{n-1}`; handles are `p_i + m_i / 3` and
//!   `p_{i+1} - m_{i+1} / 3`.
//! - `BezierCatmullRom`: interior handles from the Catmull-Rom tangents, endpoint handles as in
//!   `Bezier`.

use crate::geom::{Coordinate, Point, Vector};
use crate::{Algorithm, Orientation};

/// The two cubic control coordinates of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHandles {
    pub c1: Coordinate,
    pub c2: Coordinate,
}

/// Returns one entry per consecutive pair of `positions`, or nothing for `Linear` and for
/// sequences shorter than two points.
pub fn segment_handles(
    positions: &[Coordinate],
    algorithm: Algorithm,
    orientation: Orientation,
    curvature: f64,
) -> Vec<SegmentHandles> {
    if positions.len() < 2 || algorithm == Algorithm::Linear {
        return Vec::new();
    }

    let pts: Vec<Point> = positions.iter().map(|c| c.to_point()).collect();
    let last = pts.len() - 1;
    let chord = |i: usize| (pts[i + 1] - pts[i]).length();

    let source_handle = pts[0] + orientation.from_side.normal() * (curvature * chord(0));
    let target_handle = pts[last] + orientation.to_side.normal() * (curvature * chord(last - 1));

    let bezier_ends = algorithm.has_synthetic_handles();
    let uses_tangents = matches!(
        algorithm,
        Algorithm::CatmullRom | Algorithm::BezierCatmullRom
    );

    let mut out = Vec::with_capacity(last);
    for i in 0..last {
        let c1 = if i == 0 && bezier_ends {
            source_handle
        } else if uses_tangents {
            pts[i] + catmull_rom_tangent(&pts, i, orientation) / 3.0
        } else {
            pts[i] + (pts[i + 1] - pts[i]) * curvature
        };
        let c2 = if i + 1 == last && bezier_ends {
            target_handle
        } else if uses_tangents {
            pts[i + 1] - catmull_rom_tangent(&pts, i + 1, orientation) / 3.0
        } else {
            pts[i + 1] + (pts[i] - pts[i + 1]) * curvature
        };
        out.push(SegmentHandles {
            c1: c1.into(),
            c2: c2.into(),
        });
    }
    out
}

/// Uniform Catmull-Rom tangent at `pts[j]`. Endpoints follow the exit/entry sides.
pub fn catmull_rom_tangent(pts: &[Point], j: usize, orientation: Orientation) -> Vector {
    let last = pts.len() - 1;
    if j == 0 {
        orientation.from_side.normal() * (pts[1] - pts[0]).length()
    } else if j == last {
        -orientation.to_side.normal() * (pts[last] - pts[last - 1]).length()
    } else {
        (pts[j + 1] - pts[j - 1]) / 2.0
    }
}
