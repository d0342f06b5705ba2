//! In-memory scene - concrete [`SceneGraph`] implementation.
//!
//! A [`Scene`] owns its objects and collections in arenas and tracks the
//! active selection. It enforces the host rules operators rely on:
//!
//! - every scene has a root collection ("Scene Collection")
//! - object and collection names are unique per scene; a taken name gets
//!   a numeric suffix ("Cube.001", "Cube.002", ...)
//! - membership links are idempotent
//! - the collection hierarchy never cycles
//!
//! ## Example
//!
//! ```ignore
//! let mut scene = Scene::new("Scene");
//! let cube = scene.add_object("Cube");
//! scene.select([cube]);
//! ```

use glam::Vec3;
use id_arena::Arena;
use tracing::debug;

use crate::core::{Collection, CollectionId, ObjectId, SceneGraph, SceneObject};
use crate::util::{naming, Error, Result};

/// Name of the implicit root collection of every scene.
pub const ROOT_COLLECTION: &str = "Scene Collection";

/// An in-memory scene: objects, collections, and a selection.
#[derive(Debug)]
pub struct Scene {
    /// Scene name.
    pub name: String,
    objects: Arena<SceneObject>,
    collections: Arena<Collection>,
    root: CollectionId,
    selection: Vec<ObjectId>,
}

impl Scene {
    /// Create an empty scene with its root collection.
    pub fn new(name: impl Into<String>) -> Self {
        let mut collections = Arena::new();
        let root = collections.alloc(Collection::new(ROOT_COLLECTION));
        Self {
            name: name.into(),
            objects: Arena::new(),
            collections,
            root,
            selection: Vec::new(),
        }
    }

    /// Add an object at the origin, linked into the root collection.
    ///
    /// The name is uniqued against existing objects.
    pub fn add_object(&mut self, name: &str) -> ObjectId {
        self.add_object_at(name, Vec3::ZERO)
    }

    /// Add an object at a position, linked into the root collection.
    pub fn add_object_at(&mut self, name: &str, location: Vec3) -> ObjectId {
        let unique = naming::unique_name(name, |n| self.is_object_name_taken(n));
        let id = self.objects.alloc(SceneObject::at(unique.clone(), location));
        self.collections[self.root].link(id);
        debug!("added object '{}'", unique);
        id
    }

    /// Replace the selection.
    ///
    /// Unknown ids and duplicates are dropped; the rest keep their order.
    pub fn select(&mut self, objects: impl IntoIterator<Item = ObjectId>) {
        self.selection.clear();
        for id in objects {
            if self.objects.get(id).is_some() && !self.selection.contains(&id) {
                self.selection.push(id);
            }
        }
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// The current selection, in selection order.
    pub fn selection(&self) -> &[ObjectId] {
        &self.selection
    }

    /// Look up an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Look up a collection by id.
    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    /// Find an object by name.
    pub fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, obj)| obj.name == name)
            .map(|(id, _)| id)
    }

    /// Find a collection by name.
    pub fn find_collection(&self, name: &str) -> Option<CollectionId> {
        self.collections
            .iter()
            .find(|(_, coll)| coll.name == name)
            .map(|(id, _)| id)
    }

    /// Number of objects in the scene.
    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    /// Number of collections in the scene, including the root.
    pub fn num_collections(&self) -> usize {
        self.collections.len()
    }

    /// Iterate over all objects.
    pub fn iter_objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterate over all collections.
    pub fn iter_collections(&self) -> impl Iterator<Item = (CollectionId, &Collection)> {
        self.collections.iter()
    }

    fn is_object_name_taken(&self, name: &str) -> bool {
        self.objects.iter().any(|(_, obj)| obj.name == name)
    }

    fn is_collection_name_taken(&self, name: &str) -> bool {
        self.collections.iter().any(|(_, coll)| coll.name == name)
    }

    /// Check whether `to` is reachable from `from` through child links.
    ///
    /// `reaches(c, c)` is true; used to reject hierarchy cycles before
    /// they are created.
    fn reaches(&self, from: CollectionId, to: CollectionId) -> bool {
        let mut stack = vec![from];
        let mut visited: Vec<CollectionId> = Vec::new();
        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            if let Some(coll) = self.collections.get(current) {
                stack.extend(coll.children().iter().copied());
            }
        }
        false
    }
}

impl SceneGraph for Scene {
    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selection.clone()
    }

    fn root_collection(&self) -> CollectionId {
        self.root
    }

    fn create_collection(&mut self, name: &str) -> CollectionId {
        let unique = naming::unique_name(name, |n| self.is_collection_name_taken(n));
        let id = self.collections.alloc(Collection::new(unique.clone()));
        debug!("created collection '{}'", unique);
        id
    }

    fn link_collection(&mut self, parent: CollectionId, child: CollectionId) -> Result<()> {
        let parent_name = self
            .collection_name(parent)
            .ok_or_else(|| Error::CollectionNotFound(format!("{parent:?}")))?
            .to_string();
        let child_name = self
            .collection_name(child)
            .ok_or_else(|| Error::CollectionNotFound(format!("{child:?}")))?
            .to_string();

        // A link parent -> child cycles iff parent is already below child.
        if self.reaches(child, parent) {
            return Err(Error::CollectionCycle {
                parent: parent_name,
                child: child_name,
            });
        }

        if self.collections[parent].link_child(child) {
            debug!("linked collection '{}' under '{}'", child_name, parent_name);
        }
        Ok(())
    }

    fn link_object(&mut self, collection: CollectionId, object: ObjectId) -> Result<()> {
        if self.objects.get(object).is_none() {
            return Err(Error::ObjectNotFound(format!("{object:?}")));
        }
        let coll = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::CollectionNotFound(format!("{collection:?}")))?;
        if coll.link(object) {
            let coll_name = coll.name.clone();
            debug!("linked object '{}' into '{}'", self.objects[object].name, coll_name);
        }
        Ok(())
    }

    fn unlink_object(&mut self, collection: CollectionId, object: ObjectId) -> Result<()> {
        if self.objects.get(object).is_none() {
            return Err(Error::ObjectNotFound(format!("{object:?}")));
        }
        let coll = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::CollectionNotFound(format!("{collection:?}")))?;
        if coll.unlink(object) {
            let coll_name = coll.name.clone();
            debug!("unlinked object '{}' from '{}'", self.objects[object].name, coll_name);
        }
        Ok(())
    }

    fn object_collections(&self, object: ObjectId) -> Vec<CollectionId> {
        self.collections
            .iter()
            .filter(|(_, coll)| coll.contains(object))
            .map(|(id, _)| id)
            .collect()
    }

    fn collection_name(&self, collection: CollectionId) -> Option<&str> {
        self.collections.get(collection).map(|c| c.name.as_str())
    }

    fn object_name(&self, object: ObjectId) -> Option<&str> {
        self.objects.get(object).map(|o| o.name.as_str())
    }
}
