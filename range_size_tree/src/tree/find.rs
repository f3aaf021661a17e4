/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: key lookup and range counting.
//!
//! Every occurrence of a key lies on the single left-preferring search path
//! for that key, so lookups never branch. Range counting walks two such paths
//! and uses the cached subtree sizes to account for everything in between.

use super::RangeSizeTree;
use crate::RangeSizeNode;
use crate::arena::NodeIndex;

impl<K: Ord> RangeSizeTree<K> {
    /// Find every node whose key equals `key`.
    ///
    /// The nodes are ordered from the deepest match to the shallowest, i.e.
    /// the last element is the occurrence closest to the root. Returns an
    /// empty vector if `key` is not stored.
    pub fn find_all<'a>(&'a self, key: &K) -> Vec<&'a RangeSizeNode<K>> {
        self.find_all_indices(key)
            .into_iter()
            .map(|idx| &self.nodes[idx])
            .collect()
    }

    /// Like [`find_all`](Self::find_all), but yields arena indices.
    pub fn find_all_indices(&self, key: &K) -> Vec<NodeIndex> {
        let mut matches: Vec<_> = self
            .search_path(key)
            .filter(|&idx| self.nodes[idx].key() == key)
            .collect();
        matches.reverse();
        matches
    }

    /// Whether at least one node stores `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.search_path(key).any(|idx| self.nodes[idx].key() == key)
    }

    /// Number of stored occurrences of `key`.
    pub fn count(&self, key: &K) -> usize {
        self.search_path(key)
            .filter(|&idx| self.nodes[idx].key() == key)
            .count()
    }

    /// The deepest node storing `key` on its search path, if any.
    pub(crate) fn deepest_match(&self, key: &K) -> Option<NodeIndex> {
        self.search_path(key)
            .filter(|&idx| self.nodes[idx].key() == key)
            .last()
    }

    /// Count the stored keys `x` with `min(a, b) <= x <= max(a, b)`.
    ///
    /// The order of `a` and `b` is irrelevant.
    ///
    /// # Algorithm
    ///
    /// The search paths for the two bounds coincide until they reach the
    /// _split node_, the shallowest node whose key lies inside the bound.
    /// Every in-range key is either the split node itself, in its left subtree
    /// (and therefore `<= high`), or in its right subtree (and therefore
    /// `>= low`). So:
    ///
    /// - The **lower pass** walks the split node's left subtree towards `low`.
    ///   Each node `>= low` is counted, together with its entire right
    ///   subtree, which is sandwiched between that node and the split node.
    /// - The **upper pass** walks the split node's right subtree towards
    ///   `high`. Each node `<= high` is counted, together with its entire left
    ///   subtree.
    ///
    /// Each pass follows a single downward path and folds whole subtrees in
    /// using their cached size, so the cost is proportional to the tree height
    /// rather than to the number of matches.
    pub fn count_range(&self, a: &K, b: &K) -> usize {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        if self.root.is_none() {
            return 0;
        }
        if low == high {
            return self.count(low);
        }

        let Some(split) = self.split_node(low, high) else {
            tracing::trace!("range holds no keys");
            return 0;
        };
        let split_node = &self.nodes[split];

        let low_count = self.lower_pass(split_node.left(), low);
        let high_count = self.upper_pass(split_node.right(), high);
        let count = 1 + low_count + high_count;
        tracing::trace!(low_count, high_count, count, "counted range");
        count
    }

    /// Descend from the root to the first node inside `[low, high]`.
    fn split_node(&self, low: &K, high: &K) -> Option<NodeIndex> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = if high < node.key() {
                node.left()
            } else if node.key() < low {
                node.right()
            } else {
                return Some(idx);
            };
        }
        None
    }

    /// Count the keys `>= low` in a subtree whose keys are all within the upper bound.
    fn lower_pass(&self, start: Option<NodeIndex>, low: &K) -> usize {
        let mut count = 0;
        let mut current = start;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = if low <= node.key() {
                count += 1 + self.size_of(node.right());
                node.left()
            } else {
                node.right()
            };
        }
        count
    }

    /// Count the keys `<= high` in a subtree whose keys are all within the lower bound.
    fn upper_pass(&self, start: Option<NodeIndex>, high: &K) -> usize {
        let mut count = 0;
        let mut current = start;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = if node.key() <= high {
                count += 1 + self.size_of(node.left());
                node.right()
            } else {
                node.left()
            };
        }
        count
    }

    /// Cached size of an optional subtree; an absent subtree is empty.
    fn size_of(&self, idx: Option<NodeIndex>) -> usize {
        idx.map_or(0, |idx| self.nodes[idx].subtree_size())
    }

    /// Iterate over the canonical search path for `key`, root first.
    ///
    /// At each node the path continues left when `key <= node.key`, and right
    /// otherwise, until it falls off the tree.
    fn search_path<'a>(&'a self, key: &'a K) -> impl Iterator<Item = NodeIndex> + 'a {
        std::iter::successors(self.root, move |&idx| {
            let node = &self.nodes[idx];
            if key <= node.key() {
                node.left()
            } else {
                node.right()
            }
        })
    }
}
