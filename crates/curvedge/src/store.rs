//! The host's edge collection, as seen by an editable edge.

use curvedge_core::{ControlPoint, EdgeData};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Edge type tag of edges this crate may edit.
pub const EDITABLE_EDGE_TYPE: &str = "editable-edge";

/// Write access to the host's edges.
///
/// Implementations must apply `update` to the edge's data in one step and report whether the
/// edge was found. Missing or foreign edges are not an error.
pub trait EdgeStore {
    fn update_data(&mut self, edge_id: &str, update: &mut dyn FnMut(&mut EdgeData)) -> bool;

    /// Replaces only the `points` of an edge.
    fn update_points(
        &mut self,
        edge_id: &str,
        update: impl FnOnce(Vec<ControlPoint>) -> Vec<ControlPoint>,
    ) -> bool
    where
        Self: Sized,
    {
        let mut update = Some(update);
        self.update_data(edge_id, &mut |data| {
            if let Some(update) = update.take() {
                let points = std::mem::take(&mut data.points);
                data.points = update(points);
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEdge {
    pub id: String,
    #[serde(rename = "type", default = "default_edge_type")]
    pub edge_type: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

fn default_edge_type() -> String {
    EDITABLE_EDGE_TYPE.to_string()
}

impl HostEdge {
    pub fn editable(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            edge_type: EDITABLE_EDGE_TYPE.to_string(),
            source: source.into(),
            target: target.into(),
            data: Some(EdgeData::default()),
        }
    }

    pub fn is_editable(&self) -> bool {
        self.edge_type == EDITABLE_EDGE_TYPE
    }
}

/// In-memory edge list keyed by edge id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeCollection {
    edges: IndexMap<String, HostEdge>,
}

impl EdgeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge: HostEdge) -> Option<HostEdge> {
        self.edges.insert(edge.id.clone(), edge)
    }

    /// Removes an edge, keeping the order of the others.
    pub fn remove(&mut self, edge_id: &str) -> Option<HostEdge> {
        self.edges.shift_remove(edge_id)
    }

    pub fn get(&self, edge_id: &str) -> Option<&HostEdge> {
        self.edges.get(edge_id)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostEdge> {
        self.edges.values()
    }
}

impl FromIterator<HostEdge> for EdgeCollection {
    fn from_iter<I: IntoIterator<Item = HostEdge>>(iter: I) -> Self {
        let mut out = Self::new();
        for edge in iter {
            out.insert(edge);
        }
        out
    }
}

impl EdgeStore for EdgeCollection {
    fn update_data(&mut self, edge_id: &str, update: &mut dyn FnMut(&mut EdgeData)) -> bool {
        let Some(edge) = self.edges.get_mut(edge_id) else {
            tracing::debug!(edge_id, "edge no longer exists; ignoring point update");
            return false;
        };
        if !edge.is_editable() {
            tracing::debug!(edge_id, edge_type = %edge.edge_type, "not an editable edge; ignoring point update");
            return false;
        }
        update(edge.data.get_or_insert_with(EdgeData::default));
        true
    }
}
