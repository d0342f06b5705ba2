//! Menu extension points.
//!
//! Built-in menus are fixed; add-ons append entries to them and remove
//! exactly those entries again on teardown. Like keymap items, every
//! append hands back a [`MenuEntryHandle`] for the later removal.

use std::collections::HashMap;
use std::fmt;

/// A built-in menu that accepts appended entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// The Object menu of the 3D viewport.
    View3dObject,
    /// The collection context menu of the outliner.
    OutlinerCollection,
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuId::View3dObject => write!(f, "3D View > Object"),
            MenuId::OutlinerCollection => write!(f, "Outliner > Collection"),
        }
    }
}

/// An appended menu entry: a label that runs an operator.
#[derive(Clone, Debug)]
pub struct MenuEntry {
    id: u64,
    /// Idname of the operator the entry runs.
    pub operator: String,
    /// Text shown in the menu.
    pub label: String,
}

/// Identifies one appended entry for later removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntryHandle {
    menu: MenuId,
    entry: u64,
}

impl MenuEntryHandle {
    /// The menu this entry was appended to.
    pub fn menu(&self) -> MenuId {
        self.menu
    }
}

/// Appended entries of all extensible menus.
#[derive(Debug, Default)]
pub struct MenuSet {
    menus: HashMap<MenuId, Vec<MenuEntry>>,
    next_entry: u64,
}

impl MenuSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a menu.
    pub fn append(&mut self, menu: MenuId, operator: &str, label: &str) -> MenuEntryHandle {
        let id = self.next_entry;
        self.next_entry += 1;
        self.menus.entry(menu).or_default().push(MenuEntry {
            id,
            operator: operator.to_string(),
            label: label.to_string(),
        });
        MenuEntryHandle { menu, entry: id }
    }

    /// Remove the entry behind `handle`. Returns false if already gone.
    pub fn remove(&mut self, handle: &MenuEntryHandle) -> bool {
        let Some(entries) = self.menus.get_mut(&handle.menu) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != handle.entry);
        entries.len() != before
    }

    /// Appended entries of a menu, in append order.
    pub fn entries(&self, menu: MenuId) -> &[MenuEntry] {
        self.menus.get(&menu).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find the operator behind an entry label in a menu.
    pub fn find(&self, menu: MenuId, label: &str) -> Option<&str> {
        self.entries(menu)
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.operator.as_str())
    }

    /// Total number of appended entries across all menus.
    pub fn num_entries(&self) -> usize {
        self.menus.values().map(Vec::len).sum()
    }
}
