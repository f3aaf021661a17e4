/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Removal of leaf and single-child nodes.
//!
//! The target is the deepest node carrying the key on the canonical search
//! path. It is excised by splicing its only child (if any) into its place,
//! after which every ancestor's cached size shrinks by one.

use super::RangeSizeTree;
use super::insert::Side;
use crate::arena::NodeIndex;
use crate::{RangeSizeNode, RemoveError};

impl<K: Ord> RangeSizeTree<K> {
    /// Remove one occurrence of `key`, returning the detached node.
    ///
    /// Returns `None` without touching the tree if `key` is not stored, or if
    /// the occurrence selected for removal has two children.
    /// See [`try_remove`](Self::try_remove) for the selection rule.
    pub fn remove(&mut self, key: &K) -> Option<RangeSizeNode<K>> {
        self.try_remove(key).ok()
    }

    /// Remove one occurrence of `key`, reporting why nothing was removed.
    ///
    /// The target is the _first deepest occurrence_: the last node with key
    /// `key` met while descending the search path for `key` (left on ties)
    /// until it falls off the tree. Occurrences closer to the root are never
    /// considered, even if the target itself cannot be removed.
    ///
    /// The returned node has all of its links cleared and a subtree size of 1.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::NotFound`] if no node stores `key`.
    /// - [`RemoveError::HasTwoChildren`] if the target has two children. The
    ///   tree, cached sizes included, is left unchanged.
    pub fn try_remove(&mut self, key: &K) -> Result<RangeSizeNode<K>, RemoveError> {
        let result = self._try_remove(key);

        #[cfg(all(feature = "unittest", not(miri)))]
        if result.is_ok() {
            self.check_tree_invariants();
        }

        result
    }

    fn _try_remove(&mut self, key: &K) -> Result<RangeSizeNode<K>, RemoveError> {
        let target = self.deepest_match(key).ok_or(RemoveError::NotFound)?;

        let node = &self.nodes[target];
        if node.child_indices().is_some() {
            tracing::debug!(reason = %RemoveError::HasTwoChildren, "removal declined");
            return Err(RemoveError::HasTwoChildren);
        }
        let replacement = node.sole_child();
        let parent = node.parent();

        match parent {
            None => self.root = replacement,
            Some(parent) => self.replace_child(parent, target, replacement),
        }
        if let Some(replacement) = replacement {
            self.nodes[replacement].set_parent(parent);
        }

        // The replacement's own size already reflects its subtree, only the
        // ancestors lose a node.
        let mut current = parent;
        while let Some(idx) = current {
            let ancestor = &mut self.nodes[idx];
            ancestor.decrement_subtree();
            current = ancestor.parent();
        }

        self.bump_revision();

        let mut removed = self.nodes.remove(target);
        removed.detach();
        Ok(removed)
    }

    /// Point whichever child slot of `parent` holds `old` at `new` instead.
    fn replace_child(&mut self, parent: NodeIndex, old: NodeIndex, new: Option<NodeIndex>) {
        let parent = &mut self.nodes[parent];
        let side = if parent.left() == Some(old) {
            Side::Left
        } else {
            debug_assert_eq!(parent.right(), Some(old), "`old` is not a child of `parent`");
            Side::Right
        };
        match side {
            Side::Left => parent.set_left(new),
            Side::Right => parent.set_right(new),
        }
    }
}
