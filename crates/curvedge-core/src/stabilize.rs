//! Render-to-render identity for derived points.
//!
//! Synthetic points have no identity of their own; they borrow the id the previous render used at
//! the same index as long as the point count is unchanged. Whenever the count changes every
//! position is re-keyed, and likewise when a positional id has meanwhile been taken by an active
//! point. Active points never trade their own id for a positional one.

use crate::model::{DerivedPoint, PointId, StablePoint};
use std::collections::HashSet;

/// Ids handed out by the previous render, one per position.
///
/// Owned by exactly one edge instance; drop or [`IdLedger::reset`] it when the edge goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdLedger {
    ids: Vec<PointId>,
}

impl IdLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_count(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Assigns ids to `points` and updates the ledger for the next render.
    pub fn stabilize(&mut self, points: Vec<DerivedPoint>) -> Vec<StablePoint> {
        let (out, next) = stabilize(points, &self.ids);
        if let Some(next) = next {
            self.ids = next;
        }
        out
    }
}

/// Pure form of [`IdLedger::stabilize`].
///
/// Returns the stable points and, when positions were re-keyed, the replacement ledger. `None`
/// means the previous ids stay in effect.
pub fn stabilize(
    points: Vec<DerivedPoint>,
    previous_ids: &[PointId],
) -> (Vec<StablePoint>, Option<Vec<PointId>>) {
    if points.len() == previous_ids.len() {
        // A promoted handle keeps its positional id, so after edits that leave the count
        // unchanged that id may now belong to an active point at another index.
        let taken = {
            let owned: HashSet<&PointId> = points.iter().filter_map(own_id).collect();
            points
                .iter()
                .zip(previous_ids)
                .any(|(p, prev)| own_id(p).is_none() && owned.contains(prev))
        };
        if !taken {
            let out = points
                .into_iter()
                .zip(previous_ids)
                .map(|(p, prev)| {
                    let id = own_id(&p).unwrap_or(prev).clone();
                    keyed(p, id)
                })
                .collect();
            return (out, None);
        }
        tracing::debug!(
            count = points.len(),
            "positional id already owned by an active point; re-keying control points"
        );
    } else {
        tracing::debug!(
            previous = previous_ids.len(),
            current = points.len(),
            "point count changed; re-keying control points"
        );
    }

    let fresh: Vec<PointId> = (0..points.len()).map(|_| PointId::generate()).collect();
    let out = points
        .into_iter()
        .zip(&fresh)
        .map(|(p, fresh_id)| {
            let id = own_id(&p).unwrap_or(fresh_id).clone();
            keyed(p, id)
        })
        .collect();
    (out, Some(fresh))
}

/// The id an active point carries itself; `None` means it takes a positional one.
fn own_id(p: &DerivedPoint) -> Option<&PointId> {
    p.id.as_ref().filter(|_| p.active)
}

fn keyed(p: DerivedPoint, id: PointId) -> StablePoint {
    StablePoint {
        id,
        position: p.position,
        active: p.active,
        origin: p.origin,
    }
}
