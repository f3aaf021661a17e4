/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for range size tree nodes.
//!
//! Nodes live in a single slab and refer to each other through [`NodeIndex`]
//! handles. The parent back-reference is just another index, so the tree has
//! no ownership cycles and upward walks cost one slab lookup per step.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::RangeSizeNode;

/// Index into the node arena.
///
/// Wraps a [`slab::Slab`] key. The handle is stable across mutations to other
/// slots. It is invalidated when the node it points to is removed, after which
/// the slot may be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Return the underlying slab key.
    pub const fn key(self) -> usize {
        self.0
    }
}

/// Arena storage for [`RangeSizeNode`]s.
///
/// This is a newtype wrapper around [`Slab<RangeSizeNode<K>>`] that provides
/// type-safe indexing via [`NodeIndex`] instead of raw `usize` keys.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    nodes: Slab<RangeSizeNode<K>>,
}

impl<K> NodeArena<K> {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Get the number of nodes currently stored in the arena.
    ///
    /// This is not to be confused with the current _capacity_ of the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get the capacity of the arena.
    ///
    /// This is the maximum number of nodes that can be stored in the arena
    /// without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get a shared reference to a node in the arena, if it exists.
    pub fn get(&self, idx: NodeIndex) -> Option<&RangeSizeNode<K>> {
        self.nodes.get(idx.key())
    }

    /// Insert a node into the arena, returning its index.
    pub fn insert(&mut self, node: RangeSizeNode<K>) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index is invalid.
    pub fn remove(&mut self, idx: NodeIndex) -> RangeSizeNode<K> {
        self.nodes.remove(idx.key())
    }

    /// Remove every node, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate over all nodes in the arena, in slot order.
    ///
    /// Yields `(NodeIndex, &RangeSizeNode)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &RangeSizeNode<K>)> {
        self.nodes.iter().map(|(key, node)| (NodeIndex(key), node))
    }

    /// Get the memory usage of the arena, in bytes.
    ///
    /// Counts allocated slots, occupied or not. Heap memory owned by the keys
    /// themselves is not included.
    pub fn mem_usage(&self) -> usize {
        self.capacity() * std::mem::size_of::<RangeSizeNode<K>>()
    }
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<NodeIndex> for NodeArena<K> {
    type Output = RangeSizeNode<K>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.key()]
    }
}

impl<K> IndexMut<NodeIndex> for NodeArena<K> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.key()]
    }
}
