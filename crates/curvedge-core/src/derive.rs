//! Control point derivation.
//!
//! Produces every point a handle renderer may need: anchors and stored user points (active), plus
//! the handles `Bezier`-style algorithms insert between them (inactive).

use crate::curve::segment_handles;
use crate::model::{AnchorEnd, DerivedPoint, PathPoint, PointId, PointOrigin};
use crate::{Algorithm, Orientation};

/// Derives the full point list for `points` (the anchor-inclusive sequence).
///
/// Output order follows input order; synthetic handles sit between the two points of the segment
/// they serve. Sequences with fewer than two points come back unchanged.
pub fn derive(
    points: &[PathPoint],
    algorithm: Algorithm,
    orientation: Orientation,
    curvature: f64,
) -> Vec<DerivedPoint> {
    let last = points.len().saturating_sub(1);
    let carried = |i: usize, p: &PathPoint| -> DerivedPoint {
        match p {
            PathPoint::Anchor(position) => {
                let end = if i == 0 {
                    AnchorEnd::Source
                } else if i == last {
                    AnchorEnd::Target
                } else {
                    AnchorEnd::Interior(i)
                };
                DerivedPoint {
                    id: Some(PointId::anchor(end)),
                    position: *position,
                    active: true,
                    origin: PointOrigin::Anchor { end },
                }
            }
            PathPoint::Control(cp) => DerivedPoint {
                id: Some(cp.id.clone()),
                position: cp.position(),
                active: true,
                origin: PointOrigin::User,
            },
        }
    };

    if points.len() < 2 || !algorithm.has_synthetic_handles() {
        return points.iter().enumerate().map(|(i, p)| carried(i, p)).collect();
    }

    let positions: Vec<_> = points.iter().map(PathPoint::position).collect();
    let handles = segment_handles(&positions, algorithm, orientation, curvature);

    let mut out = Vec::with_capacity(points.len() + handles.len() * 2);
    for (i, p) in points.iter().enumerate() {
        out.push(carried(i, p));
        let Some(h) = handles.get(i) else {
            continue;
        };
        let insert_after = p.control_id().cloned();
        for position in [h.c1, h.c2] {
            out.push(DerivedPoint {
                id: None,
                position,
                active: false,
                origin: PointOrigin::Synthetic {
                    segment: i,
                    insert_after: insert_after.clone(),
                },
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coordinate;
    use crate::model::{ControlPoint, path_points};

    fn sample(stored: &[ControlPoint]) -> Vec<PathPoint> {
        path_points(Coordinate::new(0.0, 0.0), stored, Coordinate::new(300.0, 0.0))
    }

    #[test]
    fn bezier_interleaves_two_handles_per_segment() {
        let stored = [
            ControlPoint::new("a", 100.0, 50.0),
            ControlPoint::new("b", 200.0, -50.0),
        ];
        let out = derive(&sample(&stored), Algorithm::Bezier, Orientation::default(), 0.25);
        // 4 carried points, 3 segments.
        assert_eq!(out.len(), 4 + 3 * 2);
        let active: Vec<_> = out.iter().map(|p| p.active).collect();
        assert_eq!(
            active,
            [true, false, false, true, false, false, true, false, false, true]
        );
        assert_eq!(out[0].id, Some(PointId::anchor(AnchorEnd::Source)));
        assert_eq!(out[3].id, Some(PointId::new("a")));
        assert_eq!(out[9].id, Some(PointId::anchor(AnchorEnd::Target)));
        assert!(out.iter().filter(|p| !p.active).all(|p| p.id.is_none()));
    }

    #[test]
    fn synthetic_points_reference_the_segment_start() {
        let stored = [ControlPoint::new("a", 100.0, 50.0)];
        let out = derive(
            &sample(&stored),
            Algorithm::BezierCatmullRom,
            Orientation::default(),
            0.25,
        );
        let refs: Vec<_> = out
            .iter()
            .filter_map(|p| match &p.origin {
                PointOrigin::Synthetic {
                    segment,
                    insert_after,
                } => Some((*segment, insert_after.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            refs,
            [
                (0, None),
                (0, None),
                (1, Some(PointId::new("a"))),
                (1, Some(PointId::new("a"))),
            ]
        );
    }

    #[test]
    fn catmull_rom_adds_no_synthetic_points() {
        let stored = [ControlPoint::new("a", 100.0, 50.0)];
        let out = derive(&sample(&stored), Algorithm::CatmullRom, Orientation::default(), 0.25);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| p.active));
        assert_eq!(out[1].position, Coordinate::new(100.0, 50.0));
    }

    #[test]
    fn degenerate_sequences_are_returned_unchanged() {
        let lone = [PathPoint::Anchor(Coordinate::new(1.0, 2.0))];
        for alg in Algorithm::ALL {
            let out = derive(&lone, alg, Orientation::default(), 0.25);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].position, Coordinate::new(1.0, 2.0));
            assert!(out[0].active);
            assert!(derive(&[], alg, Orientation::default(), 0.25).is_empty());
        }
    }

    #[test]
    fn stored_points_are_reported_active_even_if_persisted_inactive() {
        let mut cp = ControlPoint::new("a", 10.0, 10.0);
        cp.active = false;
        let out = derive(&sample(&[cp]), Algorithm::Linear, Orientation::default(), 0.25);
        assert!(out.iter().all(|p| p.active));
    }
}
