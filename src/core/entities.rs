//! Scene entities - objects and collections.
//!
//! These are the data-block types shared by the [`SceneGraph`] host seam
//! and the in-memory scene implementation. Identity is the arena id;
//! collection membership lives on the collection, never on the object
//! (matching the host application, where an object's collection set is a
//! derived query).
//!
//! [`SceneGraph`]: crate::core::SceneGraph

use glam::Vec3;
use id_arena::Id;
use smallvec::SmallVec;

/// Handle to a [`SceneObject`] in a scene's arena.
pub type ObjectId = Id<SceneObject>;

/// Handle to a [`Collection`] in a scene's arena.
pub type CollectionId = Id<Collection>;

/// A scene object: an entity with identity, a name and a position.
#[derive(Clone, Debug)]
pub struct SceneObject {
    /// Display name, unique within the scene.
    pub name: String,
    /// World-space position.
    pub location: Vec3,
}

impl SceneObject {
    /// Create an object at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self::at(name, Vec3::ZERO)
    }

    /// Create an object at a position.
    pub fn at(name: impl Into<String>, location: Vec3) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A named grouping container for scene objects.
///
/// Collections nest (children) and hold object memberships (members). Both
/// relations are many-to-many: the host allows a collection to be linked
/// under several parents and an object to sit in several collections.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Display name, unique within the scene.
    pub name: String,
    members: SmallVec<[ObjectId; 8]>,
    children: SmallVec<[CollectionId; 4]>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Objects linked into this collection.
    pub fn members(&self) -> &[ObjectId] {
        &self.members
    }

    /// Child collections linked under this one.
    pub fn children(&self) -> &[CollectionId] {
        &self.children
    }

    /// Check if an object is a member.
    pub fn contains(&self, object: ObjectId) -> bool {
        self.members.contains(&object)
    }

    /// Check if a collection is a direct child.
    pub fn has_child(&self, collection: CollectionId) -> bool {
        self.children.contains(&collection)
    }

    /// Number of member objects.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over member ids.
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.members.iter().copied()
    }

    /// Add a membership. Returns false if the object was already a member.
    pub(crate) fn link(&mut self, object: ObjectId) -> bool {
        if self.members.contains(&object) {
            return false;
        }
        self.members.push(object);
        true
    }

    /// Remove a membership. Returns false if the object was not a member.
    pub(crate) fn unlink(&mut self, object: ObjectId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| *m != object);
        self.members.len() != before
    }

    /// Add a child collection. Returns false if it was already a child.
    pub(crate) fn link_child(&mut self, collection: CollectionId) -> bool {
        if self.children.contains(&collection) {
            return false;
        }
        self.children.push(collection);
        true
    }
}
