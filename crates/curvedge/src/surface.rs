//! The per-edge runtime: composes derivation, path rendering and identity stabilization on every
//! render, and routes handle interactions back into the host's edge list.

use crate::edit::PointEdit;
use crate::store::EdgeStore;
use curvedge_core::{
    Algorithm, ControlPoint, Coordinate, EdgeConfig, EdgeData, Engine, IdLedger, Orientation,
    PathDescription, PointId, Side, path_points,
};
use serde::{Deserialize, Serialize};

/// Live host geometry and selection state for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRenderInput {
    pub source: Coordinate,
    pub target: Coordinate,
    #[serde(default = "default_source_side")]
    pub source_side: Side,
    #[serde(default = "default_target_side")]
    pub target_side: Side,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub source_selected: bool,
    #[serde(default)]
    pub target_selected: bool,
}

fn default_source_side() -> Side {
    Orientation::default().from_side
}

fn default_target_side() -> Side {
    Orientation::default().to_side
}

impl EdgeRenderInput {
    pub fn new(source: Coordinate, target: Coordinate) -> Self {
        Self {
            source,
            target,
            source_side: default_source_side(),
            target_side: default_target_side(),
            selected: false,
            source_selected: false,
            target_selected: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.source_side, self.target_side)
    }

    /// Handles show while the edge or either endpoint node is selected.
    pub fn shows_handles(&self) -> bool {
        self.selected || self.source_selected || self.target_selected
    }
}

/// What a host handle widget needs to draw and drive one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleDescriptor {
    pub id: PointId,
    pub position: Coordinate,
    pub active: bool,
    pub index: usize,
    pub color: String,
    /// For inactive handles: the stored point a promoted handle is inserted after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_after: Option<PointId>,
}

impl HandleDescriptor {
    /// The edit a drag on this handle should start with.
    pub fn drag_to(&self, to: Coordinate) -> PointEdit {
        if self.active {
            PointEdit::Move {
                id: self.id.clone(),
                to,
            }
        } else {
            PointEdit::Activate {
                id: self.id.clone(),
                insert_after: self.insert_after.clone(),
                at: to,
            }
        }
    }

    /// Deleting only makes sense for user points; synthetic handles yield `None`.
    pub fn delete(&self) -> Option<PointEdit> {
        self.active.then(|| PointEdit::Remove {
            id: self.id.clone(),
        })
    }
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeFrame {
    pub id: String,
    pub algorithm: Algorithm,
    pub path: PathDescription,
    /// `path` as SVG path data.
    pub d: String,
    pub color: String,
    pub stroke_width: f64,
    /// `None` while handles are hidden.
    pub handles: Option<Vec<HandleDescriptor>>,
}

/// One editable edge instance. Owns the id ledger that keeps handle identities stable from one
/// render to the next; dropping the instance discards it.
#[derive(Debug, Clone)]
pub struct EditableEdge {
    id: String,
    engine: Engine,
    ledger: IdLedger,
}

impl EditableEdge {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_engine(id, Engine::new())
    }

    pub fn with_config(id: impl Into<String>, config: EdgeConfig) -> Self {
        Self::with_engine(id, Engine::new().with_config(config))
    }

    pub fn with_engine(id: impl Into<String>, engine: Engine) -> Self {
        Self {
            id: id.into(),
            engine,
            ledger: IdLedger::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ledger(&self) -> &IdLedger {
        &self.ledger
    }

    /// Forgets render-to-render state, as when the edge is unmounted.
    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    pub fn render(&mut self, input: &EdgeRenderInput, data: &EdgeData) -> EdgeFrame {
        let config = self.engine.config();
        let algorithm = self.engine.resolve_algorithm(data.algorithm);
        let color = config.color(algorithm);
        let orientation = input.orientation();

        let seq = path_points(input.source, &data.points, input.target);
        let path = self.engine.render_path(&seq, Some(algorithm), orientation);
        let derived = self.engine.derive(&seq, Some(algorithm), orientation);
        // Runs on every render, visible or not, so ids survive hiding and showing handles.
        let stable = self.ledger.stabilize(derived);

        let handles = input.shows_handles().then(|| {
            stable
                .iter()
                .filter(|p| !p.is_anchor())
                .enumerate()
                .map(|(index, p)| HandleDescriptor {
                    id: p.id.clone(),
                    position: p.position,
                    active: p.active,
                    index,
                    color: color.clone(),
                    insert_after: p.insert_after().cloned(),
                })
                .collect::<Vec<_>>()
        });

        tracing::trace!(
            edge_id = %self.id,
            %algorithm,
            points = data.points.len(),
            derived = stable.len(),
            visible = handles.is_some(),
            "rendered editable edge"
        );

        EdgeFrame {
            id: self.id.clone(),
            algorithm,
            d: path.to_svg_d(),
            path,
            color,
            stroke_width: config.stroke_width(),
            handles,
        }
    }

    /// Replaces this edge's stored points with `update(points)`. Returns `false` (and changes
    /// nothing) when the edge is gone from `store`.
    pub fn set_control_points<S: EdgeStore>(
        &self,
        store: &mut S,
        update: impl FnOnce(Vec<ControlPoint>) -> Vec<ControlPoint>,
    ) -> bool {
        store.update_points(&self.id, update)
    }

    pub fn apply_edit<S: EdgeStore>(&self, store: &mut S, edit: PointEdit) -> bool {
        self.set_control_points(store, |points| edit.apply(points))
    }

    /// Switches the interpolation algorithm; `None` restores the configured default.
    pub fn set_algorithm<S: EdgeStore>(&self, store: &mut S, algorithm: Option<Algorithm>) -> bool {
        store.update_data(&self.id, &mut |data| data.algorithm = algorithm)
    }
}
