/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: leaf attachment.
//!
//! Insertion walks the left-inclusive search path, bumping the cached size of
//! every node it passes, and hangs the new key off the first empty child slot.

use super::RangeSizeTree;
use crate::RangeSizeNode;
use crate::arena::NodeIndex;

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<K: Ord> RangeSizeTree<K> {
    /// Insert `key` as a new leaf, returning the index of its node.
    ///
    /// Duplicates are never rejected: a key equal to a node's key descends to
    /// the left, so repeated keys accumulate along a left-tending path.
    pub fn insert(&mut self, key: K) -> NodeIndex {
        let idx = self._insert(key);

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();

        idx
    }

    fn _insert(&mut self, key: K) -> NodeIndex {
        self.bump_revision();

        let Some(mut current) = self.root else {
            let idx = self.nodes.insert(RangeSizeNode::leaf(key, None));
            self.root = Some(idx);
            tracing::trace!(depth = 0, "inserted new root");
            return idx;
        };

        let mut depth = 1usize;
        let side = loop {
            let node = &mut self.nodes[current];
            // The new node will end up below `current`.
            node.increment_subtree();

            let (side, next) = if key <= *node.key() {
                (Side::Left, node.left())
            } else {
                (Side::Right, node.right())
            };
            match next {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => break side,
            }
        };

        let idx = self.nodes.insert(RangeSizeNode::leaf(key, Some(current)));
        let parent = &mut self.nodes[current];
        match side {
            Side::Left => parent.set_left(Some(idx)),
            Side::Right => parent.set_right(Some(idx)),
        }
        tracing::trace!(depth, "inserted leaf");
        idx
    }
}
