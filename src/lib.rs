//! # Selection2Collection
//!
//! Group the selected objects of a scene into a freshly created
//! collection, the way the original CDMJ add-on does it: one operator,
//! two menu entries, a Ctrl+G binding in the 3D viewport and the
//! outliner, and a clean unregister that takes back exactly what
//! register contributed.
//!
//! The host surface is abstracted: operators run against the
//! [`SceneGraph`] trait, the [`WindowManager`] stands in for the host's
//! event plumbing, and the bundled in-memory [`Scene`] makes everything
//! drivable headless.
//!
//! ## Modules
//!
//! - [`util`] - Errors and name uniquing
//! - [`core`] - Entities, reports, the [`SceneGraph`] trait
//! - [`scene`] - Concrete in-memory scene
//! - [`ops`] - Operator machinery and the selection-to-collection operator
//! - [`ui`] - Window manager, keymaps, menus, dialogs
//! - [`addon`] - Registration lifecycle
//!
//! ## Example
//!
//! ```ignore
//! use sel2coll::prelude::*;
//!
//! let mut scene = Scene::new("Scene");
//! let cube = scene.add_object("Cube");
//! scene.select([cube]);
//!
//! let mut wm = WindowManager::new();
//! let addon = sel2coll::addon::register(&mut wm)?;
//! wm.press_key(&mut scene, SpaceType::View3d, KeyChord::ctrl(Key::G))?;
//! addon.unregister(&mut wm)?;
//! ```
//!
//! [`SceneGraph`]: crate::core::SceneGraph

pub mod util;
pub mod core;
pub mod scene;
pub mod ops;
pub mod ui;
pub mod addon;

// Re-export commonly used types
pub use scene::Scene;
pub use ui::WindowManager;
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::addon::{register, Addon, AddonInfo};
    pub use crate::core::{ReportLevel, SceneGraph};
    pub use crate::ops::{CallMode, Operator, Status};
    pub use crate::scene::Scene;
    pub use crate::ui::dialog::{AcceptDefaults, DialogChoice, DialogForm};
    pub use crate::ui::keymap::{Key, KeyChord, SpaceType};
    pub use crate::ui::menu::MenuId;
    pub use crate::ui::WindowManager;
    pub use crate::util::{Error, Result};
}
