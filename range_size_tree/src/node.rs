/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! RangeSizeNode - A node in the range size tree.

use crate::arena::NodeIndex;

/// A single stored key, its links, and the cached size of its subtree.
///
/// Nodes are owned by the tree's arena. `left`, `right` and `parent` are
/// indices into that arena; `parent` is `None` only for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSizeNode<K> {
    key: K,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
    parent: Option<NodeIndex>,
    /// Number of nodes in the subtree rooted here, this node included.
    subtree_size: usize,
}

impl<K> RangeSizeNode<K> {
    /// Create a childless node attached under `parent`.
    pub(crate) const fn leaf(key: K, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
            subtree_size: 1,
        }
    }

    /// The key stored in this node.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Consume the node, returning its key.
    pub fn into_key(self) -> K {
        self.key
    }

    pub const fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    pub const fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// The node holding this one as a child, or `None` for the root.
    pub const fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub const fn subtree_size(&self) -> usize {
        self.subtree_size
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of present children, between 0 and 2.
    pub const fn num_children(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    /// Return both child indices if this node has two children.
    pub const fn child_indices(&self) -> Option<(NodeIndex, NodeIndex)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// The only child of a node with exactly one child, else `None`.
    pub(crate) const fn sole_child(&self) -> Option<NodeIndex> {
        match (self.left, self.right) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }

    pub(crate) const fn set_left(&mut self, left: Option<NodeIndex>) {
        self.left = left;
    }

    pub(crate) const fn set_right(&mut self, right: Option<NodeIndex>) {
        self.right = right;
    }

    pub(crate) const fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }

    pub(crate) const fn increment_subtree(&mut self) {
        self.subtree_size += 1;
    }

    /// # Panics
    ///
    /// Panics if the cached size would drop below 1.
    pub(crate) fn decrement_subtree(&mut self) {
        assert!(
            self.subtree_size > 1,
            "subtree size underflow: a node always counts itself"
        );
        self.subtree_size -= 1;
    }

    /// Sever every link, leaving a standalone node that counts only itself.
    pub(crate) fn detach(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
        self.subtree_size = 1;
    }
}
