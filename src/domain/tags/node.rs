//! Tag tree nodes
//!
//! A node is identified by its path from the root; the root itself is
//! unnamed. Nodes own their children and the set of object ids registered
//! exactly at their path. Objects are referenced by id only — the global
//! id table lives in the index, so destroying a node can never leave a
//! dangling object handle.

use crate::domain::tags::{ObjectId, Tag};
use crate::error::{MemorizeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A node of the tag tree.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    children: BTreeMap<String, TagNode>,
    entries: BTreeSet<ObjectId>,
}

impl TagNode {
    pub fn new() -> Self {
        TagNode::default()
    }

    /// Creates a child node with the given segment name.
    pub fn create_child(&mut self, name: &str) -> Result<&mut TagNode> {
        if self.children.contains_key(name) {
            return Err(MemorizeError::DuplicateChild(name.to_string()));
        }
        Ok(self.children.entry(name.to_string()).or_default())
    }

    /// Returns the child with the given name, creating it if absent.
    pub fn ensure_child(&mut self, name: &str) -> &mut TagNode {
        self.children.entry(name.to_string()).or_default()
    }

    pub fn get_child(&self, name: &str) -> Result<&TagNode> {
        self.children
            .get(name)
            .ok_or_else(|| MemorizeError::UnknownChild(name.to_string()))
    }

    pub fn get_child_mut(&mut self, name: &str) -> Result<&mut TagNode> {
        self.children
            .get_mut(name)
            .ok_or_else(|| MemorizeError::UnknownChild(name.to_string()))
    }

    /// Removes a child and returns its whole subtree.
    ///
    /// The caller is responsible for stripping the memberships recorded
    /// anywhere under the removed subtree from the affected objects.
    pub fn delete_child(&mut self, name: &str) -> Result<TagNode> {
        self.children
            .remove(name)
            .ok_or_else(|| MemorizeError::UnknownChild(name.to_string()))
    }

    /// Walks down the tree along the given segments, or None at the first
    /// missing one. Never creates nodes.
    pub fn descend(&self, segments: &[String]) -> Option<&TagNode> {
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    pub fn descend_mut(&mut self, segments: &[String]) -> Option<&mut TagNode> {
        let mut node = self;
        for segment in segments {
            node = node.children.get_mut(segment)?;
        }
        Some(node)
    }

    /// Walks down the tree along the tag's segments.
    ///
    /// Fails at the first missing segment; never creates nodes.
    pub fn resolve(&self, tag: &Tag) -> Result<&TagNode> {
        self.descend(tag.segments())
            .ok_or_else(|| MemorizeError::UnknownTag(tag.to_string()))
    }

    pub fn resolve_mut(&mut self, tag: &Tag) -> Result<&mut TagNode> {
        self.descend_mut(tag.segments())
            .ok_or_else(|| MemorizeError::UnknownTag(tag.to_string()))
    }

    /// Adds an object id to the entries registered exactly at this node.
    pub fn register(&mut self, id: ObjectId) -> Result<()> {
        if !self.entries.insert(id) {
            return Err(MemorizeError::DuplicateRegistration(id));
        }
        Ok(())
    }

    /// Removes an object id from this node's entries. Returns whether the
    /// id was present.
    pub fn unregister(&mut self, id: ObjectId) -> bool {
        self.entries.remove(&id)
    }

    pub fn is_registered(&self, id: ObjectId) -> bool {
        self.entries.contains(&id)
    }

    /// Unions the ids registered at this node and every descendant for
    /// which the predicate holds. Cost is proportional to subtree size.
    pub fn collect<F>(&self, pred: &F, out: &mut BTreeSet<ObjectId>)
    where
        F: Fn(ObjectId) -> bool,
    {
        out.extend(self.entries.iter().copied().filter(|id| pred(*id)));
        for child in self.children.values() {
            child.collect(pred, out);
        }
    }

    /// All ids registered anywhere in this subtree, this node included.
    pub fn subtree_ids(&self) -> BTreeSet<ObjectId> {
        let mut out = BTreeSet::new();
        self.collect(&|_| true, &mut out);
        out
    }

    /// Appends the textual path of every descendant node to `out`,
    /// depth-first in name order.
    pub fn visit_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<String>) {
        for (name, child) in &self.children {
            prefix.push(name.clone());
            out.push(prefix.join("."));
            child.visit_paths(prefix, out);
            prefix.pop();
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MemorizeError;

    #[test]
    fn test_create_and_get_child() {
        let mut root = TagNode::new();
        root.create_child("a").unwrap();
        assert!(root.get_child("a").is_ok());
        assert!(matches!(
            root.get_child("b"),
            Err(MemorizeError::UnknownChild(_))
        ));
    }

    #[test]
    fn test_create_duplicate_child_fails() {
        let mut root = TagNode::new();
        root.create_child("a").unwrap();
        assert!(matches!(
            root.create_child("a"),
            Err(MemorizeError::DuplicateChild(_))
        ));
    }

    #[test]
    fn test_delete_child() {
        let mut root = TagNode::new();
        root.create_child("a").unwrap();
        root.delete_child("a").unwrap();
        assert!(root.get_child("a").is_err());
        assert!(matches!(
            root.delete_child("a"),
            Err(MemorizeError::UnknownChild(_))
        ));
    }

    #[test]
    fn test_resolve_walks_segments() {
        let mut root = TagNode::new();
        root.create_child("a")
            .unwrap()
            .create_child("b")
            .unwrap()
            .create_child("c")
            .unwrap();

        let tag = Tag::parse("a.b.c").unwrap();
        assert!(root.resolve(&tag).is_ok());

        let missing = Tag::parse("a.b.x").unwrap();
        match root.resolve(&missing) {
            Err(MemorizeError::UnknownTag(text)) => assert_eq!(text, "a.b.x"),
            other => panic!("expected UnknownTag, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_never_creates() {
        let root = TagNode::new();
        assert!(root.resolve(&Tag::parse("a").unwrap()).is_err());
        assert!(!root.has_children());
    }

    #[test]
    fn test_register_and_unregister() {
        let mut node = TagNode::new();
        node.register(1).unwrap();
        node.register(2).unwrap();
        assert!(matches!(
            node.register(1),
            Err(MemorizeError::DuplicateRegistration(1))
        ));
        assert!(node.is_registered(1));
        assert!(node.unregister(1));
        assert!(!node.unregister(1));
        assert!(!node.is_registered(1));
    }

    #[test]
    fn test_collect_unions_subtree() {
        let mut root = TagNode::new();
        root.register(1).unwrap();
        {
            let a = root.create_child("a").unwrap();
            a.register(2).unwrap();
            let b = a.create_child("b").unwrap();
            b.register(3).unwrap();
        }
        root.create_child("c").unwrap().register(4).unwrap();

        assert_eq!(
            root.subtree_ids().into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );

        let a = root.get_child("a").unwrap();
        assert_eq!(a.subtree_ids().into_iter().collect::<Vec<_>>(), vec![2, 3]);

        let mut even = BTreeSet::new();
        root.collect(&|id| id % 2 == 0, &mut even);
        assert_eq!(even.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_visit_paths() {
        let mut root = TagNode::new();
        root.create_child("a")
            .unwrap()
            .create_child("b")
            .unwrap();
        root.create_child("c").unwrap();

        let mut paths = Vec::new();
        root.visit_paths(&mut Vec::new(), &mut paths);
        assert_eq!(paths, vec!["a", "a.b", "c"]);
    }
}
