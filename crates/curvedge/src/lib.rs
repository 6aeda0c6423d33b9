#![forbid(unsafe_code)]

//! `curvedge` renders user-reshapeable diagram edges and keeps their handles stable while the user
//! drags, inserts and deletes points.
//!
//! The pure engine lives in `curvedge-core` and is re-exported here. This crate adds the
//! per-edge runtime ([`EditableEdge`]), the host boundary ([`EdgeStore`]) and the point edits
//! handle widgets request ([`PointEdit`]).

pub use curvedge_core::*;

pub mod edit;
pub mod snapshot;
pub mod store;
pub mod surface;

pub use edit::PointEdit;
pub use snapshot::EdgeSnapshot;
pub use store::{EDITABLE_EDGE_TYPE, EdgeCollection, EdgeStore, HostEdge};
pub use surface::{EdgeFrame, EdgeRenderInput, EditableEdge, HandleDescriptor};
