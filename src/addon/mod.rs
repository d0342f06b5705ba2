//! Add-on lifecycle - registration and symmetric teardown.
//!
//! [`register`] installs everything the add-on contributes to a window
//! manager: the operator type, two menu entries, and two Ctrl+G key
//! bindings. Every contribution is recorded in the returned [`Addon`]
//! handle, and [`Addon::unregister`] removes exactly those again, in
//! reverse order, leaving registrations by others untouched.

use tracing::{debug, info, warn};

use crate::ops::selection_to_collection;
use crate::ui::keymap::{Key, KeyChord, KeymapItemHandle, SpaceType};
use crate::ui::menu::{MenuEntryHandle, MenuId};
use crate::ui::WindowManager;
use crate::util::Result;

/// Add-on metadata, the manifest shown in an add-on browser.
#[derive(Clone, Copy, Debug)]
pub struct AddonInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub version: (u32, u32, u32),
    /// Minimum host version the add-on targets.
    pub host_version: (u32, u32, u32),
    /// Where the user finds the feature.
    pub location: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl AddonInfo {
    /// Version as a dotted string, e.g. "1.0.0".
    pub fn version_string(&self) -> String {
        let (major, minor, patch) = self.version;
        format!("{major}.{minor}.{patch}")
    }
}

pub const INFO: AddonInfo = AddonInfo {
    name: "Selection2Collection",
    author: "CDMJ",
    version: (1, 0, 0),
    host_version: (3, 0, 0),
    location: "3D View and Outliner",
    description: "Create a collection from a selection of objects with Ctrl G",
    category: "Material",
};

/// Live registration handle.
///
/// Holds one handle per contributed menu entry and key binding. The
/// add-on stays installed until [`Addon::unregister`] gives them back;
/// dropping the handle without unregistering leaks the registrations
/// and logs a warning.
#[must_use = "dropping the handle leaks the registrations; call unregister"]
#[derive(Debug)]
pub struct Addon {
    operator: &'static str,
    menu_entries: Vec<MenuEntryHandle>,
    keymap_items: Vec<KeymapItemHandle>,
    released: bool,
}

/// Install the add-on into a window manager.
///
/// Order matches the host convention: operator type first, then menu
/// entries, then key bindings. Fails without side effects if the
/// operator idname is already taken.
pub fn register(wm: &mut WindowManager) -> Result<Addon> {
    wm.operators_mut()
        .register_type(selection_to_collection::operator_type())?;

    let label = selection_to_collection::DESCRIPTOR.label;
    let menu_entries = vec![
        wm.menus_mut()
            .append(MenuId::View3dObject, selection_to_collection::IDNAME, label),
        wm.menus_mut().append(
            MenuId::OutlinerCollection,
            selection_to_collection::IDNAME,
            label,
        ),
    ];

    // Object Mode is a window-level keymap, the Outliner one is scoped.
    let chord = KeyChord::ctrl(Key::G);
    let keymap_items = vec![
        wm.keyconfig_mut().add_item(
            "Object Mode",
            SpaceType::Empty,
            chord,
            selection_to_collection::IDNAME,
        ),
        wm.keyconfig_mut().add_item(
            "Outliner",
            SpaceType::Outliner,
            chord,
            selection_to_collection::IDNAME,
        ),
    ];

    info!("registered '{}' v{}", INFO.name, INFO.version_string());
    Ok(Addon {
        operator: selection_to_collection::IDNAME,
        menu_entries,
        keymap_items,
        released: false,
    })
}

impl Addon {
    /// Remove everything [`register`] installed, in reverse order.
    pub fn unregister(mut self, wm: &mut WindowManager) -> Result<()> {
        while let Some(handle) = self.keymap_items.pop() {
            if !wm.keyconfig_mut().remove_item(&handle) {
                warn!("key binding was already removed");
            }
        }
        while let Some(handle) = self.menu_entries.pop() {
            if !wm.menus_mut().remove(&handle) {
                warn!("menu entry was already removed");
            }
        }
        self.released = true;
        wm.operators_mut().unregister_type(self.operator)?;
        debug!("unregistered '{}'", INFO.name);
        Ok(())
    }
}

impl Drop for Addon {
    fn drop(&mut self) {
        if !self.released {
            warn!("addon '{}' dropped without unregister", INFO.name);
        }
    }
}
