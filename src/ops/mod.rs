//! Operator layer - registrable, undoable actions on a scene.
//!
//! An operator is a short-lived object: the window manager builds a fresh
//! instance per run from its registered [`OperatorType`], hands it a
//! [`Context`], and throws it away afterwards. Each run therefore starts
//! from the operator's default settings; the invoke dialog is where the
//! user departs from them.
//!
//! ## Key Concepts
//!
//! - **Idname**: stable `"group.name"` identifier, e.g.
//!   `"object.selection_to_collection"`. Keymaps and menus refer to
//!   operators by idname only.
//! - **Execute vs invoke**: [`Operator::execute`] runs with the current
//!   settings; [`Operator::invoke`] may first show a property dialog.
//! - **Status**: every run ends [`Status::Finished`] or
//!   [`Status::Cancelled`]; hard failures are `Err` instead.

pub mod selection_to_collection;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::core::{ReportLevel, ReportList, SceneGraph};
use crate::ui::dialog::{DialogChoice, DialogDriver, DialogForm};
use crate::util::{Error, Result};

// ============================================================================
// Outcomes and Call Modes
// ============================================================================

/// Outcome of an operator run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The operator ran and changed the scene.
    Finished,
    /// The operator declined to run; the scene is untouched.
    Cancelled,
}

/// How an operator run was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallMode {
    /// Run directly with current settings, no dialog.
    Execute,
    /// Interactive call; the operator may present its dialog first.
    Invoke,
}

/// Behavior flags of an operator type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorFlags {
    /// Show the run in the info log and allow repeat.
    pub register: bool,
    /// Push an undo step after a finished run.
    pub undo: bool,
}

impl OperatorFlags {
    /// The usual flags for scene-editing operators.
    pub const REGISTER_UNDO: Self = Self {
        register: true,
        undo: true,
    };
}

/// Static description of an operator type.
#[derive(Clone, Copy, Debug)]
pub struct OperatorDescriptor {
    /// Stable identifier, `"group.name"`.
    pub idname: &'static str,
    /// Button and menu label.
    pub label: &'static str,
    /// Tooltip sentence.
    pub description: &'static str,
    pub flags: OperatorFlags,
}

// ============================================================================
// Execution Context
// ============================================================================

/// Everything an operator may touch while running.
pub struct Context<'a> {
    /// The scene being edited.
    pub scene: &'a mut dyn SceneGraph,
    reports: &'a ReportList,
}

impl<'a> Context<'a> {
    pub fn new(scene: &'a mut dyn SceneGraph, reports: &'a ReportList) -> Self {
        Self { scene, reports }
    }

    /// Emit a user-facing report.
    pub fn report(&self, level: ReportLevel, message: impl Into<String>) {
        self.reports.add(level, message);
    }
}

// ============================================================================
// Operator Trait
// ============================================================================

/// A single undoable action on the scene.
pub trait Operator: Send {
    /// The property dialog to show on interactive calls, if any.
    fn dialog(&self) -> Option<DialogForm> {
        None
    }

    /// Read edited dialog values back into the operator.
    fn apply_dialog(&mut self, _form: &DialogForm) {}

    /// Run with the current settings.
    fn execute(&mut self, ctx: &mut Context<'_>) -> Result<Status>;

    /// Interactive entry point: present the dialog, then execute.
    ///
    /// Operators without a dialog fall through to [`execute`]; a
    /// dismissed dialog ends the run [`Status::Cancelled`] without
    /// touching the scene.
    ///
    /// [`execute`]: Operator::execute
    fn invoke(&mut self, ctx: &mut Context<'_>, dialogs: &mut dyn DialogDriver) -> Result<Status> {
        let Some(mut form) = self.dialog() else {
            return self.execute(ctx);
        };
        match dialogs.prompt(&mut form) {
            DialogChoice::Confirm => {
                self.apply_dialog(&form);
                self.execute(ctx)
            }
            DialogChoice::Cancel => Ok(Status::Cancelled),
        }
    }
}

// ============================================================================
// Operator Types and Registry
// ============================================================================

/// A registered operator type: its description plus an instance factory.
#[derive(Clone, Copy, Debug)]
pub struct OperatorType {
    pub descriptor: OperatorDescriptor,
    build: fn() -> Box<dyn Operator>,
}

impl OperatorType {
    /// Describe an operator type backed by `T`.
    pub fn of<T: Operator + Default + 'static>(descriptor: OperatorDescriptor) -> Self {
        Self {
            descriptor,
            build: || Box::new(T::default()),
        }
    }

    /// Build a fresh instance with default settings.
    pub fn instance(&self) -> Box<dyn Operator> {
        (self.build)()
    }
}

/// All operator types known to a window manager, keyed by idname.
#[derive(Debug, Default)]
pub struct OperatorRegistry {
    types: HashMap<&'static str, OperatorType>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operator type.
    ///
    /// Fails if the idname is already taken; types are identities, not
    /// values to overwrite.
    pub fn register_type(&mut self, ty: OperatorType) -> Result<()> {
        let idname = ty.descriptor.idname;
        match self.types.entry(idname) {
            Entry::Occupied(_) => Err(Error::AlreadyRegistered(idname.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(ty);
                debug!("registered operator '{}'", idname);
                Ok(())
            }
        }
    }

    /// Remove a registered type. Fails if the idname is unknown.
    pub fn unregister_type(&mut self, idname: &str) -> Result<()> {
        match self.types.remove(idname) {
            Some(_) => {
                debug!("unregistered operator '{}'", idname);
                Ok(())
            }
            None => Err(Error::UnknownOperator(idname.to_string())),
        }
    }

    /// Descriptor of a registered type.
    pub fn descriptor(&self, idname: &str) -> Option<&OperatorDescriptor> {
        self.types.get(idname).map(|ty| &ty.descriptor)
    }

    pub fn contains(&self, idname: &str) -> bool {
        self.types.contains_key(idname)
    }

    /// Build a fresh instance of a registered type.
    pub fn instance(&self, idname: &str) -> Result<Box<dyn Operator>> {
        self.types
            .get(idname)
            .map(OperatorType::instance)
            .ok_or_else(|| Error::UnknownOperator(idname.to_string()))
    }

    /// Registered idnames, sorted.
    pub fn idnames(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.types.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Nop;

    impl Operator for Nop {
        fn execute(&mut self, _ctx: &mut Context<'_>) -> Result<Status> {
            Ok(Status::Finished)
        }
    }

    fn nop_type() -> OperatorType {
        OperatorType::of::<Nop>(OperatorDescriptor {
            idname: "test.nop",
            label: "Nop",
            description: "Does nothing",
            flags: OperatorFlags::REGISTER_UNDO,
        })
    }

    #[test]
    fn test_registry_register_unregister() {
        let mut registry = OperatorRegistry::new();
        registry.register_type(nop_type()).unwrap();
        assert!(registry.contains("test.nop"));
        assert_eq!(registry.descriptor("test.nop").unwrap().label, "Nop");

        assert!(registry.register_type(nop_type()).is_err());

        registry.unregister_type("test.nop").unwrap();
        assert!(!registry.contains("test.nop"));
        assert!(registry.unregister_type("test.nop").is_err());
    }

    #[test]
    fn test_registry_instance_unknown() {
        let registry = OperatorRegistry::new();
        assert!(registry.instance("no.such").is_err());
    }

    #[test]
    fn test_invoke_without_dialog_executes() {
        use crate::scene::Scene;
        use crate::ui::dialog::AcceptDefaults;

        let mut scene = Scene::new("Scene");
        let reports = ReportList::new();
        let mut ctx = Context::new(&mut scene, &reports);

        let mut op = Nop;
        let status = op.invoke(&mut ctx, &mut AcceptDefaults).unwrap();
        assert_eq!(status, Status::Finished);
    }
}
