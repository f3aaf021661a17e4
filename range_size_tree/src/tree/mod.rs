/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Range size tree implementation.
//!
//! This module contains the core tree structure. The operations are split into
//! sub-modules by concern:
//! - [`insert`]: Write path (leaf attachment, size increments)
//! - [`find`]: Read path (key lookup, range counting)
//! - [`remove`]: Excision of leaf and single-child nodes
//! - [`invariants`]: Structural self-checks

mod find;
mod insert;
mod invariants;
mod remove;

use crate::RangeSizeNode;
use crate::arena::{NodeArena, NodeIndex};
use crate::iter::PreOrderDfsIterator;

/// An unbalanced binary search tree whose nodes cache their subtree sizes.
///
/// Keys equal to a node's key are stored in its left subtree, so all copies
/// of a key sit on one downward path. The cached sizes are kept exact by
/// [`insert`](Self::insert) and [`remove`](Self::remove), which is what allows
/// [`count_range`](Self::count_range) to fold whole subtrees into its count.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children and parents are
/// referenced by [`NodeIndex`] rather than `Box`, so the upward walk a removal
/// needs is a chain of index lookups.
///
/// # Balancing
///
/// There is none. Inserting keys in sorted order produces a linked list of
/// height `n`, and every operation degrades to `O(n)` on such a tree.
#[derive(Debug, Clone)]
pub struct RangeSizeTree<K> {
    /// The root node index, `None` while the tree is empty.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena<K>,
    /// Revision ID, incremented whenever a node is attached or excised.
    ///
    /// A [`NodeIndex`] obtained before the revision changed may point to a
    /// removed or reused slot.
    revision_id: u32,
}

impl<K> RangeSizeTree<K> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            revision_id: 0,
        }
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not refer to a node currently in the tree.
    pub fn node(&self, idx: NodeIndex) -> &RangeSizeNode<K> {
        &self.nodes[idx]
    }

    /// Resolve a [`NodeIndex`], returning `None` if its node has been removed.
    pub fn get(&self, idx: NodeIndex) -> Option<&RangeSizeNode<K>> {
        self.nodes.get(idx)
    }

    /// Get a reference to the root node, if any.
    pub fn root(&self) -> Option<&RangeSizeNode<K>> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Get the root node index, if any.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Number of keys stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.root().map_or(0, RangeSizeNode::subtree_size)
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path. Zero for an empty tree.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        // Iterative to survive the degenerate, list-shaped trees that sorted
        // insertions produce.
        let mut max_depth = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((idx, depth)) = stack.pop() {
            let node = &self.nodes[idx];
            max_depth = max_depth.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        max_depth
    }

    /// Get the revision ID of the tree.
    pub const fn revision_id(&self) -> u32 {
        self.revision_id
    }

    /// Remove every node from the tree.
    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            self.nodes.clear();
            self.bump_revision();
        }
    }

    /// Returns an iterator over all nodes in the tree (pre-order depth-first traversal).
    pub fn iter(&self) -> PreOrderDfsIterator<'_, K> {
        PreOrderDfsIterator::new(self)
    }

    /// Calculate the memory usage of the tree, in bytes.
    ///
    /// Heap memory owned by the keys themselves is not included.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.nodes.mem_usage()
    }

    const fn bump_revision(&mut self) {
        self.revision_id = self.revision_id.wrapping_add(1);
    }
}

impl<K> Default for RangeSizeTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for RangeSizeTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RangeSizeTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
