#![forbid(unsafe_code)]

//! Control-point engine for editable diagram edges (headless).
//!
//! Given the two anchors of an edge and the points a user placed between them, this crate:
//! - derives the full point list an algorithm needs (user points plus synthetic bezier handles)
//! - renders the edge as move/line/cubic draw commands
//! - keeps point ids stable across renders so handle widgets are not torn down needlessly
//!
//! Everything except [`IdLedger`] is a pure function of its inputs.

pub mod config;
pub mod curve;
pub mod derive;
pub mod error;
pub mod generated;
pub mod geom;
pub mod model;
pub mod path;
pub mod stabilize;

pub use config::EdgeConfig;
pub use error::{Error, Result};
pub use geom::{Coordinate, Side};
pub use model::{
    Algorithm, AnchorEnd, ControlPoint, DerivedPoint, EdgeData, Orientation, PathPoint, PointId,
    PointOrigin, StablePoint, path_points,
};
pub use path::{PathCommand, PathDescription};
pub use stabilize::IdLedger;

/// Config-bound entry point to the pure engine functions.
///
/// Resolves missing algorithm selectors to the configured default and supplies the configured
/// curvature, so callers only deal with points and orientation.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EdgeConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EdgeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }

    pub fn resolve_algorithm(&self, algorithm: Option<Algorithm>) -> Algorithm {
        self.config.resolve_algorithm(algorithm)
    }

    pub fn derive(
        &self,
        points: &[PathPoint],
        algorithm: Option<Algorithm>,
        orientation: Orientation,
    ) -> Vec<DerivedPoint> {
        derive::derive(
            points,
            self.resolve_algorithm(algorithm),
            orientation,
            self.config.curvature(),
        )
    }

    pub fn render_path(
        &self,
        points: &[PathPoint],
        algorithm: Option<Algorithm>,
        orientation: Orientation,
    ) -> PathDescription {
        path::render_path(
            points,
            self.resolve_algorithm(algorithm),
            orientation,
            self.config.curvature(),
        )
    }
}

#[cfg(test)]
mod tests;
