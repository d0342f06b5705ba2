//! Abstract scene access for operators.
//!
//! Operators never touch a concrete scene type. They run against this
//! trait, so the same operator code drives the in-memory scene, a test
//! fake, or any future host binding.

use crate::core::{CollectionId, ObjectId};
use crate::util::Result;

// ============================================================================
// Scene Graph Trait
// ============================================================================

/// Mutable view of a scene for operator execution.
///
/// Implementations own object and collection storage and enforce the
/// structural rules: names are unique per scene, membership links are
/// idempotent, and the collection hierarchy stays acyclic.
pub trait SceneGraph: Send {
    /// Ids of the currently selected objects, in selection order.
    fn selected_objects(&self) -> Vec<ObjectId>;

    /// The scene's root collection. Every scene has exactly one.
    fn root_collection(&self) -> CollectionId;

    /// Create a new, unlinked collection.
    ///
    /// If `name` is already taken the implementation picks a unique
    /// variant of it; read the result back with [`collection_name`]
    /// to learn the final name.
    ///
    /// [`collection_name`]: SceneGraph::collection_name
    fn create_collection(&mut self, name: &str) -> CollectionId;

    /// Link `child` under `parent` in the collection hierarchy.
    ///
    /// Fails if either id is unknown or the link would create a cycle
    /// (including `child == parent`). Linking an existing child again
    /// is a no-op.
    fn link_collection(&mut self, parent: CollectionId, child: CollectionId) -> Result<()>;

    /// Add `object` to `collection`'s members.
    ///
    /// Idempotent: linking an existing member is a no-op.
    fn link_object(&mut self, collection: CollectionId, object: ObjectId) -> Result<()>;

    /// Remove `object` from `collection`'s members.
    ///
    /// A no-op when the object is not a member.
    fn unlink_object(&mut self, collection: CollectionId, object: ObjectId) -> Result<()>;

    /// All collections `object` is currently a member of.
    fn object_collections(&self, object: ObjectId) -> Vec<CollectionId>;

    /// Name of a collection, or `None` for an unknown id.
    fn collection_name(&self, collection: CollectionId) -> Option<&str>;

    /// Name of an object, or `None` for an unknown id.
    fn object_name(&self, object: ObjectId) -> Option<&str>;
}
