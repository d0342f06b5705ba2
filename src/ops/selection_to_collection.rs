//! The selection-to-collection operator.
//!
//! Creates a new collection, links it under the scene root, and moves
//! every selected object into it. With nothing selected the operator
//! warns and cancels without touching the scene.

use tracing::debug;

use crate::core::ReportLevel;
use crate::ops::{Context, Operator, OperatorDescriptor, OperatorFlags, OperatorType, Status};
use crate::ui::dialog::DialogForm;
use crate::util::{Error, Result};

/// Idname the operator registers under.
pub const IDNAME: &str = "object.selection_to_collection";

/// Default name offered for the new collection.
pub const DEFAULT_NAME: &str = "New Collection";

/// Dialog field key for the collection name.
pub const NAME_FIELD: &str = "collection_name";

pub const DESCRIPTOR: OperatorDescriptor = OperatorDescriptor {
    idname: IDNAME,
    label: "Create New Collection from Selection",
    description: "Create a new collection from selected objects",
    flags: OperatorFlags::REGISTER_UNDO,
};

/// The registrable operator type.
pub fn operator_type() -> OperatorType {
    OperatorType::of::<SelectionToCollection>(DESCRIPTOR)
}

/// Moves the selected objects into a newly created collection.
#[derive(Clone, Debug)]
pub struct SelectionToCollection {
    /// Name for the new collection, editable in the invoke dialog.
    ///
    /// The scene uniques it on collision; reports quote the name as
    /// requested here.
    pub collection_name: String,
}

impl Default for SelectionToCollection {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Operator for SelectionToCollection {
    fn dialog(&self) -> Option<DialogForm> {
        Some(
            DialogForm::new(DESCRIPTOR.label).with_field(
                NAME_FIELD,
                "Collection Name",
                self.collection_name.as_str(),
            ),
        )
    }

    fn apply_dialog(&mut self, form: &DialogForm) {
        if let Some(value) = form.value(NAME_FIELD) {
            self.collection_name = value.to_string();
        }
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Result<Status> {
        let selected = ctx.scene.selected_objects();
        if selected.is_empty() {
            ctx.report(ReportLevel::Warning, Error::EmptySelection.to_string());
            return Ok(Status::Cancelled);
        }

        let collection = ctx.scene.create_collection(&self.collection_name);
        let root = ctx.scene.root_collection();
        ctx.scene.link_collection(root, collection)?;

        for &object in &selected {
            // Objects must never go collection-less; link the new home first.
            let previous = ctx.scene.object_collections(object);
            ctx.scene.link_object(collection, object)?;
            for old in previous {
                if old != collection {
                    ctx.scene.unlink_object(old, object)?;
                }
            }
        }

        debug!(
            "moved {} objects into '{}'",
            selected.len(),
            self.collection_name
        );
        ctx.report(
            ReportLevel::Info,
            format!(
                "Created collection '{}' with {} objects.",
                self.collection_name,
                selected.len()
            ),
        );
        Ok(Status::Finished)
    }
}
