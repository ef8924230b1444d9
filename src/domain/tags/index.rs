//! Tag index
//!
//! `TagIndex` is the facade over the tag tree: it owns the root node, the
//! global id table of stored objects, and the id watermark. Objects gain
//! identity and tag membership through the index; their side of the
//! bookkeeping lives in an embedded [`TagRecord`], exposed through the
//! [`Tagged`] trait.
//!
//! Objects record the textual paths of the nodes they are registered at,
//! never node handles, so deleting a tag subtree can only ever strip
//! memberships — it cannot dangle.

use crate::domain::tags::node::TagNode;
use crate::domain::tags::{ObjectId, Tag, TagSet};
use crate::error::{MemorizeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identity lifecycle of a stored object.
///
/// `Unassigned → Assigned` via [`TagIndex::assign`], `Assigned → Retired`
/// via [`TagIndex::unassign`]. Retirement is terminal: identity is
/// single-use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
enum BindState {
    #[default]
    Unassigned,
    Assigned(ObjectId),
    Retired,
}

/// Per-object identity and tag-membership bookkeeping.
///
/// Embed one of these in any type stored in a [`TagIndex`] and expose it
/// through [`Tagged`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    state: BindState,
    tags: BTreeSet<Tag>,
}

impl TagRecord {
    pub fn new() -> Self {
        TagRecord::default()
    }

    /// The unique id of this object within its index.
    pub fn get_id(&self) -> Result<ObjectId> {
        match self.state {
            BindState::Assigned(id) => Ok(id),
            _ => Err(MemorizeError::NotIndexed),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self.state, BindState::Assigned(_))
    }

    /// True iff `tag`'s path is a prefix of (or equal to) any exact
    /// recorded path. This is how ancestor tags are inherited: they are
    /// computed, never materialized.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|recorded| tag.is_prefix_of(recorded))
    }

    /// The exact recorded paths only, in tag order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Capability of objects stored in a [`TagIndex`]: access to the embedded
/// [`TagRecord`].
pub trait Tagged {
    fn record(&self) -> &TagRecord;
    fn record_mut(&mut self) -> &mut TagRecord;
}

/// Facade over the tag tree: tag lifecycle, object identity, multi-tag
/// queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagIndex<T> {
    root: TagNode,
    objects: BTreeMap<ObjectId, T>,
    next_id: ObjectId,
}

impl<T: Tagged> Default for TagIndex<T> {
    fn default() -> Self {
        TagIndex::new()
    }
}

impl<T: Tagged> TagIndex<T> {
    pub fn new() -> Self {
        TagIndex {
            root: TagNode::new(),
            objects: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Creates the whole chain of tag nodes for `tag`'s path. Idempotent.
    pub fn create_tag(&mut self, tag: &Tag) {
        let mut node = &mut self.root;
        for segment in tag {
            node = node.ensure_child(segment);
        }
    }

    /// True if the node for `tag`'s exact path exists.
    pub fn tag_exists(&self, tag: &Tag) -> bool {
        self.root.descend(tag.segments()).is_some()
    }

    /// Deletes the node for `tag` and its whole subtree.
    ///
    /// Every membership recorded at or below the deleted path is stripped
    /// from the affected objects; the objects themselves survive and stay
    /// valid under any tags they hold elsewhere. Once started the cascade
    /// runs to completion.
    pub fn delete_tag(&mut self, tag: &Tag) -> Result<()> {
        let (last, parent) = tag
            .segments()
            .split_last()
            .ok_or_else(|| MemorizeError::UnknownTag(tag.to_string()))?;
        let removed = self
            .root
            .descend_mut(parent)
            .and_then(|node| node.delete_child(last).ok())
            .ok_or_else(|| MemorizeError::UnknownTag(tag.to_string()))?;

        for id in removed.subtree_ids() {
            if let Some(object) = self.objects.get_mut(&id) {
                let record = object.record_mut();
                record.tags.retain(|path| !tag.is_prefix_of(path));
            }
        }
        Ok(())
    }

    /// Binds an object to this index, giving it a unique id.
    ///
    /// With an explicit id the binding is deterministic (reimported data
    /// keeps its ids) and the watermark is raised past it when needed.
    /// Without one, the current watermark is allocated and advanced.
    /// Binding is irrevocable: an object that has ever been assigned
    /// cannot be assigned again.
    pub fn assign(&mut self, mut object: T, id: Option<ObjectId>) -> Result<ObjectId> {
        if object.record().state != BindState::Unassigned {
            return Err(MemorizeError::AlreadyAssigned);
        }
        let id = match id {
            Some(id) => {
                if self.objects.contains_key(&id) {
                    return Err(MemorizeError::DuplicateId(id));
                }
                self.next_id = self.next_id.max(id + 1);
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };
        object.record_mut().state = BindState::Assigned(id);
        self.objects.insert(id, object);
        Ok(id)
    }

    /// Removes an object from the index, unregistering every tag
    /// membership it holds, and returns it. The object is retired: it can
    /// never be assigned again.
    pub fn unassign(&mut self, id: ObjectId) -> Result<T> {
        let mut object = self
            .objects
            .remove(&id)
            .ok_or(MemorizeError::NotAssigned)?;
        let record = object.record_mut();
        for path in std::mem::take(&mut record.tags) {
            if let Some(node) = self.root.descend_mut(path.segments()) {
                node.unregister(id);
            }
        }
        record.state = BindState::Retired;
        Ok(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Result<&T> {
        self.objects
            .get(&id)
            .ok_or(MemorizeError::UnknownObject(id))
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Result<&mut T> {
        self.objects
            .get_mut(&id)
            .ok_or(MemorizeError::UnknownObject(id))
    }

    /// Registers the object at the node for `tag`'s exact path.
    ///
    /// The node must already exist (via [`TagIndex::create_tag`]); tagging
    /// never creates nodes.
    pub fn add_tag(&mut self, id: ObjectId, tag: &Tag) -> Result<()> {
        let object = self.objects.get(&id).ok_or(MemorizeError::NotIndexed)?;
        if object.record().tags.contains(tag) {
            return Err(MemorizeError::DuplicateTag(tag.to_string()));
        }
        let node = self
            .root
            .descend_mut(tag.segments())
            .ok_or_else(|| MemorizeError::UnknownTag(tag.to_string()))?;
        node.register(id)?;
        if let Some(object) = self.objects.get_mut(&id) {
            object.record_mut().tags.insert(tag.clone());
        }
        Ok(())
    }

    /// Removes the membership for `tag`'s exact path.
    pub fn remove_tag(&mut self, id: ObjectId, tag: &Tag) -> Result<()> {
        let object = self.objects.get_mut(&id).ok_or(MemorizeError::NotIndexed)?;
        if !object.record_mut().tags.remove(tag) {
            return Err(MemorizeError::UnknownTag(tag.to_string()));
        }
        if let Some(node) = self.root.descend_mut(tag.segments()) {
            node.unregister(id);
        }
        Ok(())
    }

    /// Returns every object tagged by all of `tags` (exactly or through an
    /// ancestor prefix) which passes the predicate.
    ///
    /// The first tag's node is used as the search root — any one suffices,
    /// since candidates are filtered against the rest with
    /// [`TagRecord::has_tag`].
    pub fn get_objects<F>(&self, tags: &TagSet, pred: F) -> Result<Vec<(ObjectId, &T)>>
    where
        F: Fn(&T) -> bool,
    {
        let Some((first, rest)) = tags.tags().split_first() else {
            return Ok(Vec::new());
        };
        let node = self.root.resolve(first)?;

        let mut ids = BTreeSet::new();
        node.collect(
            &|id| self.objects.get(&id).map_or(false, &pred),
            &mut ids,
        );

        Ok(ids
            .into_iter()
            .filter_map(|id| self.objects.get(&id).map(|object| (id, object)))
            .filter(|(_, object)| rest.iter().all(|tag| object.record().has_tag(tag)))
            .collect())
    }

    /// Like [`TagIndex::get_objects`] for a single tag, without a filter.
    pub fn get_objects_by_tag(&self, tag: &Tag) -> Result<Vec<(ObjectId, &T)>> {
        self.get_objects(&TagSet::new([tag.clone()]), |_| true)
    }

    /// All stored objects in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &T)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut T)> {
        self.objects.iter_mut().map(|(id, object)| (*id, object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The next id to be allocated.
    pub fn watermark(&self) -> ObjectId {
        self.next_id
    }

    /// Textual paths of every tag node, depth-first in name order.
    pub fn tag_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.root.visit_paths(&mut Vec::new(), &mut paths);
        paths
    }
}
