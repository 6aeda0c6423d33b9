use crate::surface::{EdgeFrame, EdgeRenderInput, EditableEdge};
use curvedge_core::{DerivedPoint, EdgeConfig, EdgeData, Engine, Result, path_points};
use serde::{Deserialize, Serialize};

/// Everything needed to render one edge, as a single JSON document.
///
/// ```json
/// { "id": "e1", "source": { "x": 0, "y": 0 }, "target": { "x": 100, "y": 0 },
///   "sourceSide": "right", "targetSide": "left", "selected": true,
///   "data": { "algorithm": "catmull-rom", "points": [{ "id": "p", "x": 50, "y": 50 }] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSnapshot {
    #[serde(default = "default_edge_id")]
    pub id: String,
    #[serde(flatten)]
    pub input: EdgeRenderInput,
    #[serde(default)]
    pub data: EdgeData,
}

fn default_edge_id() -> String {
    "edge".to_string()
}

impl EdgeSnapshot {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders the snapshot with a fresh edge instance.
    pub fn render(&self, config: &EdgeConfig) -> EdgeFrame {
        let mut edge = EditableEdge::with_config(self.id.clone(), config.clone());
        edge.render(&self.input, &self.data)
    }

    /// The deriver's raw output, before ids are stabilized.
    pub fn derive(&self, config: &EdgeConfig) -> Vec<DerivedPoint> {
        let engine = Engine::new().with_config(config.clone());
        let seq = path_points(self.input.source, &self.data.points, self.input.target);
        engine.derive(&seq, self.data.algorithm, self.input.orientation())
    }
}
