//! Core layer - entities, reports, and the scene access trait.
//!
//! This module provides:
//! - [`SceneObject`] / [`Collection`] - the scene data blocks
//! - [`ObjectId`] / [`CollectionId`] - arena handles for them
//! - [`Report`] / [`ReportList`] - leveled operator-to-user messages
//! - [`SceneGraph`] - the abstract scene interface operators run against

mod entities;
mod report;
mod traits;

pub use entities::{Collection, CollectionId, ObjectId, SceneObject};
pub use report::{Report, ReportLevel, ReportList};
pub use traits::SceneGraph;
