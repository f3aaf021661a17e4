/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterator for traversing the range size tree.
//!
//! Provides a depth-first traversal over all nodes in the tree, useful for
//! debugging, collecting statistics, or checking the tree against a model.

use crate::arena::NodeIndex;
use crate::{RangeSizeNode, RangeSizeTree};

/// An iterator that performs a depth-first traversal of the range size tree.
///
/// This iterator visits all nodes in the tree, yielding each node exactly once.
/// The traversal is done iteratively using an explicit stack to avoid recursion,
/// which matters here: the tree is never rebalanced, so its depth can equal
/// the number of stored keys.
///
/// # Traversal Order
///
/// Nodes are visited in pre-order (parent before children), with left children
/// visited before right children.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a, K> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a RangeSizeTree<K>,
    /// Stack of node indices to visit. Nodes are pushed right-first so left is
    /// processed first (LIFO order).
    stack: Vec<NodeIndex>,
}

impl<'a, K> PreOrderDfsIterator<'a, K> {
    /// Create a new iterator starting from the root of the given tree.
    pub fn new(tree: &'a RangeSizeTree<K>) -> Self {
        Self {
            tree,
            stack: tree.root_index().into_iter().collect(),
        }
    }

    /// Create a new iterator starting from the given node index in the tree.
    pub fn from_node(tree: &'a RangeSizeTree<K>, node_idx: NodeIndex) -> Self {
        Self {
            tree,
            stack: vec![node_idx],
        }
    }
}

impl<'a, K> Iterator for PreOrderDfsIterator<'a, K> {
    type Item = &'a RangeSizeNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);

        // Push children onto stack (right first so left is processed first)
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

impl<'a, K> IntoIterator for &'a RangeSizeTree<K> {
    type Item = &'a RangeSizeNode<K>;
    type IntoIter = PreOrderDfsIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrderDfsIterator::new(self)
    }
}
