//! Keymaps - shortcut-to-operator bindings.
//!
//! A [`KeyConfig`] holds named keymaps, each scoped to a space type.
//! Registering a binding returns a [`KeymapItemHandle`]; whoever
//! registered it removes exactly that item again on teardown, leaving
//! bindings added by others untouched.

use std::fmt;

/// Editor space a keymap is scoped to.
///
/// [`SpaceType::Empty`] is the window-level scope: its keymaps are
/// consulted for key presses in every space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceType {
    /// No specific space; active everywhere.
    Empty,
    /// The 3D viewport.
    View3d,
    /// The outliner.
    Outliner,
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceType::Empty => write!(f, "Empty"),
            SpaceType::View3d => write!(f, "3D View"),
            SpaceType::Outliner => write!(f, "Outliner"),
        }
    }
}

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A key plus modifier state, e.g. Ctrl+G.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    /// A bare key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// A Ctrl+key press.
    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// One binding inside a keymap.
#[derive(Clone, Debug)]
pub struct KeymapItem {
    id: u64,
    /// Shortcut that triggers the binding.
    pub chord: KeyChord,
    /// Idname of the operator to run.
    pub operator: String,
}

/// A named group of bindings scoped to one space type.
#[derive(Clone, Debug)]
pub struct Keymap {
    /// Keymap name, e.g. "Object Mode".
    pub name: String,
    /// Space the keymap is active in.
    pub space: SpaceType,
    items: Vec<KeymapItem>,
}

impl Keymap {
    fn new(name: impl Into<String>, space: SpaceType) -> Self {
        Self {
            name: name.into(),
            space,
            items: Vec::new(),
        }
    }

    /// Whether this keymap is consulted for presses in `space`.
    pub fn active_in(&self, space: SpaceType) -> bool {
        self.space == space || self.space == SpaceType::Empty
    }

    pub fn items(&self) -> &[KeymapItem] {
        &self.items
    }
}

/// Identifies one registered binding for later removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeymapItemHandle {
    keymap: String,
    item: u64,
}

/// The set of keymaps known to a window manager.
#[derive(Debug, Default)]
pub struct KeyConfig {
    keymaps: Vec<Keymap>,
    next_item: u64,
}

impl KeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a keymap by name, creating it with `space` if missing.
    ///
    /// An existing keymap keeps its space type; callers registering into
    /// a well-known keymap ("Object Mode") share one instance.
    fn keymap_or_new(&mut self, name: &str, space: SpaceType) -> &mut Keymap {
        let pos = match self.keymaps.iter().position(|km| km.name == name) {
            Some(pos) => pos,
            None => {
                self.keymaps.push(Keymap::new(name, space));
                self.keymaps.len() - 1
            }
        };
        &mut self.keymaps[pos]
    }

    /// Register a binding, creating the keymap on first use.
    pub fn add_item(
        &mut self,
        keymap: &str,
        space: SpaceType,
        chord: KeyChord,
        operator: &str,
    ) -> KeymapItemHandle {
        let id = self.next_item;
        self.next_item += 1;
        let km = self.keymap_or_new(keymap, space);
        km.items.push(KeymapItem {
            id,
            chord,
            operator: operator.to_string(),
        });
        KeymapItemHandle {
            keymap: km.name.clone(),
            item: id,
        }
    }

    /// Remove the binding behind `handle`.
    ///
    /// Returns false if it was already gone. Empty keymaps are kept;
    /// other registrants may still add into them.
    pub fn remove_item(&mut self, handle: &KeymapItemHandle) -> bool {
        let Some(km) = self.keymaps.iter_mut().find(|km| km.name == handle.keymap) else {
            return false;
        };
        let before = km.items.len();
        km.items.retain(|item| item.id != handle.item);
        km.items.len() != before
    }

    /// Resolve a key press in `space` to an operator idname.
    ///
    /// Keymaps are consulted in registration order; the first matching
    /// binding wins.
    pub fn resolve(&self, space: SpaceType, chord: KeyChord) -> Option<&str> {
        self.keymaps
            .iter()
            .filter(|km| km.active_in(space))
            .flat_map(|km| km.items.iter())
            .find(|item| item.chord == chord)
            .map(|item| item.operator.as_str())
    }

    /// Look up a keymap by name.
    pub fn keymap(&self, name: &str) -> Option<&Keymap> {
        self.keymaps.iter().find(|km| km.name == name)
    }

    /// Iterate over all keymaps, in registration order.
    pub fn keymaps(&self) -> impl Iterator<Item = &Keymap> {
        self.keymaps.iter()
    }

    /// Total number of bindings across all keymaps.
    pub fn num_items(&self) -> usize {
        self.keymaps.iter().map(|km| km.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_display() {
        assert_eq!(KeyChord::ctrl(Key::G).to_string(), "Ctrl+G");
        assert_eq!(KeyChord::new(Key::X).to_string(), "X");

        let mut chord = KeyChord::ctrl(Key::G);
        chord.shift = true;
        assert_eq!(chord.to_string(), "Ctrl+Shift+G");
    }

    #[test]
    fn test_add_resolve_remove() {
        let mut config = KeyConfig::new();
        let handle = config.add_item(
            "Object Mode",
            SpaceType::Empty,
            KeyChord::ctrl(Key::G),
            "object.selection_to_collection",
        );

        assert_eq!(
            config.resolve(SpaceType::View3d, KeyChord::ctrl(Key::G)),
            Some("object.selection_to_collection")
        );
        assert_eq!(config.resolve(SpaceType::View3d, KeyChord::new(Key::G)), None);

        assert!(config.remove_item(&handle));
        assert!(!config.remove_item(&handle), "second removal is reported");
        assert_eq!(config.resolve(SpaceType::View3d, KeyChord::ctrl(Key::G)), None);
        assert!(config.keymap("Object Mode").is_some(), "keymap itself stays");
    }

    #[test]
    fn test_empty_space_matches_everywhere() {
        let mut config = KeyConfig::new();
        config.add_item("Window", SpaceType::Empty, KeyChord::ctrl(Key::S), "wm.save");

        for space in [SpaceType::Empty, SpaceType::View3d, SpaceType::Outliner] {
            assert_eq!(config.resolve(space, KeyChord::ctrl(Key::S)), Some("wm.save"));
        }
    }

    #[test]
    fn test_space_scoped_keymap() {
        let mut config = KeyConfig::new();
        config.add_item(
            "Outliner",
            SpaceType::Outliner,
            KeyChord::ctrl(Key::G),
            "outliner.op",
        );

        assert_eq!(
            config.resolve(SpaceType::Outliner, KeyChord::ctrl(Key::G)),
            Some("outliner.op")
        );
        assert_eq!(config.resolve(SpaceType::View3d, KeyChord::ctrl(Key::G)), None);
    }

    #[test]
    fn test_shared_keymap_keeps_other_items() {
        let mut config = KeyConfig::new();
        let mine = config.add_item("Object Mode", SpaceType::Empty, KeyChord::ctrl(Key::G), "a.b");
        let other = config.add_item("Object Mode", SpaceType::Empty, KeyChord::ctrl(Key::J), "c.d");

        assert!(config.remove_item(&mine));
        assert_eq!(config.num_items(), 1);
        assert_eq!(config.resolve(SpaceType::View3d, KeyChord::ctrl(Key::J)), Some("c.d"));
        assert!(config.remove_item(&other));
        assert_eq!(config.num_items(), 0);
    }
}
