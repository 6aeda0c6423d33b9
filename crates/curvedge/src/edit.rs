//! Point edits a handle widget can request.
//!
//! Each edit is a pure function over the stored point list; the surface feeds it through the
//! host store so nothing but `points` changes.

use curvedge_core::{ControlPoint, Coordinate, PointId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PointEdit {
    /// Drag a user point.
    Move { id: PointId, to: Coordinate },
    /// Turn an inactive handle into a user point that keeps the handle's id, so an in-flight
    /// drag keeps addressing the same point.
    #[serde(rename_all = "camelCase")]
    Activate {
        id: PointId,
        insert_after: Option<PointId>,
        at: Coordinate,
    },
    /// Insert a fresh user point at `index` (clamped to the list length).
    Insert { index: usize, at: Coordinate },
    Remove { id: PointId },
}

impl PointEdit {
    pub fn apply(self, mut points: Vec<ControlPoint>) -> Vec<ControlPoint> {
        match self {
            PointEdit::Move { id, to } => {
                if let Some(p) = points.iter_mut().find(|p| p.id == id) {
                    p.x = to.x;
                    p.y = to.y;
                }
            }
            PointEdit::Activate {
                id,
                insert_after,
                at,
            } => {
                // A repeated activation (e.g. a second pointer-down before the host re-rendered)
                // must not duplicate the point.
                if let Some(p) = points.iter_mut().find(|p| p.id == id) {
                    p.x = at.x;
                    p.y = at.y;
                    p.active = true;
                    return points;
                }
                let index = insert_after
                    .and_then(|after| points.iter().position(|p| p.id == after))
                    .map_or(0, |i| i + 1);
                points.insert(
                    index,
                    ControlPoint {
                        id,
                        x: at.x,
                        y: at.y,
                        active: true,
                    },
                );
            }
            PointEdit::Insert { index, at } => {
                let index = index.min(points.len());
                points.insert(index, ControlPoint::at(at));
            }
            PointEdit::Remove { id } => {
                points.retain(|p| p.id != id);
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> Vec<ControlPoint> {
        vec![
            ControlPoint::new("a", 10.0, 10.0),
            ControlPoint::new("b", 20.0, 20.0),
        ]
    }

    fn ids(points: &[ControlPoint]) -> Vec<&str> {
        points.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn move_updates_only_the_addressed_point() {
        let out = PointEdit::Move {
            id: PointId::new("b"),
            to: Coordinate::new(-1.5, 2.25),
        }
        .apply(stored());
        assert_eq!(out[0], ControlPoint::new("a", 10.0, 10.0));
        assert_eq!(out[1], ControlPoint::new("b", -1.5, 2.25));

        let untouched = PointEdit::Move {
            id: PointId::new("zzz"),
            to: Coordinate::new(0.0, 0.0),
        }
        .apply(stored());
        assert_eq!(untouched, stored());
    }

    #[test]
    fn activate_inserts_after_the_referenced_point() {
        let out = PointEdit::Activate {
            id: PointId::new("h"),
            insert_after: Some(PointId::new("a")),
            at: Coordinate::new(15.0, 12.0),
        }
        .apply(stored());
        assert_eq!(ids(&out), ["a", "h", "b"]);
        assert!(out[1].active);

        let front = PointEdit::Activate {
            id: PointId::new("h"),
            insert_after: None,
            at: Coordinate::new(1.0, 1.0),
        }
        .apply(stored());
        assert_eq!(ids(&front), ["h", "a", "b"]);

        let dangling = PointEdit::Activate {
            id: PointId::new("h"),
            insert_after: Some(PointId::new("gone")),
            at: Coordinate::new(1.0, 1.0),
        }
        .apply(stored());
        assert_eq!(ids(&dangling), ["h", "a", "b"]);
    }

    #[test]
    fn activating_twice_does_not_duplicate() {
        let edit = PointEdit::Activate {
            id: PointId::new("h"),
            insert_after: Some(PointId::new("b")),
            at: Coordinate::new(30.0, 30.0),
        };
        let once = edit.clone().apply(stored());
        let twice = edit.apply(once.clone());
        assert_eq!(once, twice);
        assert_eq!(ids(&twice), ["a", "b", "h"]);
    }

    #[test]
    fn insert_clamps_and_generates_ids() {
        let out = PointEdit::Insert {
            index: 99,
            at: Coordinate::new(5.0, 5.0),
        }
        .apply(stored());
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].position(), Coordinate::new(5.0, 5.0));
        assert!(out[2].active);
        assert!(out[2].id != out[0].id && out[2].id != out[1].id);
    }

    #[test]
    fn remove_deletes_by_id() {
        let out = PointEdit::Remove {
            id: PointId::new("a"),
        }
        .apply(stored());
        assert_eq!(ids(&out), ["b"]);
    }

    #[test]
    fn edits_have_a_tagged_json_form() {
        let edit: PointEdit = serde_json::from_value(json!({
            "op": "activate",
            "id": "h",
            "insertAfter": "a",
            "at": { "x": 1.0, "y": 2.0 }
        }))
        .unwrap();
        assert_eq!(
            edit,
            PointEdit::Activate {
                id: PointId::new("h"),
                insert_after: Some(PointId::new("a")),
                at: Coordinate::new(1.0, 2.0),
            }
        );
    }
}
