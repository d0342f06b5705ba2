//! UI layer - window manager, keymaps, menus, and dialogs.
//!
//! The [`WindowManager`] is the runtime hub an add-on registers into and
//! a host (or test) drives events through. It owns:
//!
//! - the [`OperatorRegistry`] of runnable operator types
//! - the [`KeyConfig`] mapping shortcuts to operators
//! - the [`MenuSet`] of appended menu entries
//! - the [`ReportList`] collecting operator output
//! - the active [`DialogDriver`] answering property dialogs
//!
//! ## Example
//!
//! ```ignore
//! let mut wm = WindowManager::new();
//! let addon = addon::register(&mut wm)?;
//! wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))?;
//! addon.unregister(&mut wm)?;
//! ```
//!
//! [`OperatorRegistry`]: crate::ops::OperatorRegistry
//! [`ReportList`]: crate::core::ReportList

pub mod dialog;
pub mod keymap;
pub mod menu;

use tracing::debug;

use crate::core::{ReportList, SceneGraph};
use crate::ops::{CallMode, Context, OperatorRegistry, Status};
use crate::util::Result;

use self::dialog::{AcceptDefaults, DialogDriver};
use self::keymap::{KeyChord, KeyConfig, SpaceType};
use self::menu::{MenuId, MenuSet};

/// Runtime hub for operators, bindings, menus, and reports.
pub struct WindowManager {
    operators: OperatorRegistry,
    keyconfig: KeyConfig,
    menus: MenuSet,
    reports: ReportList,
    dialogs: Box<dyn DialogDriver>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// A window manager with nothing registered.
    ///
    /// Dialogs start on [`AcceptDefaults`]; swap in a scripted driver
    /// with [`set_dialog_driver`] to simulate user edits.
    ///
    /// [`set_dialog_driver`]: WindowManager::set_dialog_driver
    pub fn new() -> Self {
        Self {
            operators: OperatorRegistry::new(),
            keyconfig: KeyConfig::new(),
            menus: MenuSet::new(),
            reports: ReportList::new(),
            dialogs: Box::new(AcceptDefaults),
        }
    }

    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.operators
    }

    pub fn keyconfig(&self) -> &KeyConfig {
        &self.keyconfig
    }

    pub fn keyconfig_mut(&mut self) -> &mut KeyConfig {
        &mut self.keyconfig
    }

    pub fn menus(&self) -> &MenuSet {
        &self.menus
    }

    pub fn menus_mut(&mut self) -> &mut MenuSet {
        &mut self.menus
    }

    /// Reports emitted by operator runs so far.
    pub fn reports(&self) -> &ReportList {
        &self.reports
    }

    /// Replace the dialog driver.
    pub fn set_dialog_driver(&mut self, driver: impl DialogDriver + 'static) {
        self.dialogs = Box::new(driver);
    }

    /// Run a registered operator on a scene.
    ///
    /// A fresh instance is built per run. [`CallMode::Invoke`] routes
    /// through the operator's dialog via the active driver;
    /// [`CallMode::Execute`] skips straight to execution.
    pub fn run_operator(
        &mut self,
        idname: &str,
        scene: &mut dyn SceneGraph,
        mode: CallMode,
    ) -> Result<Status> {
        let mut op = self.operators.instance(idname)?;
        debug!("running operator '{}' ({:?})", idname, mode);
        let mut ctx = Context::new(scene, &self.reports);
        match mode {
            CallMode::Execute => op.execute(&mut ctx),
            CallMode::Invoke => op.invoke(&mut ctx, self.dialogs.as_mut()),
        }
    }

    /// Deliver a key press in `space`.
    ///
    /// Resolves the chord through the key configuration and invokes the
    /// bound operator. `Ok(None)` means no binding matched.
    pub fn press_key(
        &mut self,
        scene: &mut dyn SceneGraph,
        space: SpaceType,
        chord: KeyChord,
    ) -> Result<Option<Status>> {
        let Some(idname) = self.keyconfig.resolve(space, chord).map(|s| s.to_owned()) else {
            debug!("no binding for {} in {}", chord, space);
            return Ok(None);
        };
        let status = self.run_operator(&idname, scene, CallMode::Invoke)?;
        Ok(Some(status))
    }

    /// Click a menu entry by its label.
    ///
    /// Invokes the entry's operator. `Ok(None)` means the menu has no
    /// such entry.
    pub fn click_menu(
        &mut self,
        scene: &mut dyn SceneGraph,
        menu: MenuId,
        label: &str,
    ) -> Result<Option<Status>> {
        let Some(idname) = self.menus.find(menu, label).map(|s| s.to_owned()) else {
            debug!("no entry '{}' in menu {}", label, menu);
            return Ok(None);
        };
        let status = self.run_operator(&idname, scene, CallMode::Invoke)?;
        Ok(Some(status))
    }
}
