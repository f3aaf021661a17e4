/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks for the range size tree.
//!
//! With the `unittest` feature these run after every mutation (`insert` and
//! successful removals) to catch violations at the operation that caused them.

use super::RangeSizeTree;
use crate::arena::NodeIndex;

impl<K: Ord> RangeSizeTree<K> {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated:
    /// 1. **Ordering**: left subtree keys are `<=` the node key, right subtree
    ///    keys are `>` it.
    /// 2. **Size consistency**: every cached subtree size equals
    ///    `1 + size(left) + size(right)`.
    /// 3. **Parent consistency**: every child points back at its parent, and
    ///    the root has no parent.
    /// 4. **No orphans**: the arena holds exactly the nodes reachable from
    ///    the root.
    pub fn check_tree_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(
                self.nodes.len(),
                0,
                "empty tree still owns {} arena nodes",
                self.nodes.len()
            );
            return;
        };

        assert_eq!(
            self.node(root).parent(),
            None,
            "root {root:?} has a parent link"
        );

        // --- Invariant 4: no orphans ---
        // Every arena node must be the root or a child of its recorded parent.
        for (idx, node) in self.nodes.iter() {
            match node.parent() {
                None => assert_eq!(idx, root, "node {idx:?} has no parent but is not the root"),
                Some(parent) => {
                    let parent_node = self.nodes.get(parent).unwrap_or_else(|| {
                        panic!("node {idx:?} points at removed parent {parent:?}")
                    });
                    assert!(
                        parent_node.left() == Some(idx) || parent_node.right() == Some(idx),
                        "node {idx:?} is not a child of its parent {parent:?}",
                    );
                }
            }
        }

        let reachable = self.check_subtree(root);
        assert_eq!(
            reachable,
            self.nodes.len(),
            "arena holds {} nodes but only {reachable} are reachable from the root",
            self.nodes.len(),
        );
    }

    /// Check every node below (and including) `root`, returning the number of
    /// nodes visited.
    ///
    /// The walk is iterative: an unbalanced tree can be as deep as it is large.
    fn check_subtree(&self, root: NodeIndex) -> usize {
        /// A pending node together with the open bounds its key must respect.
        /// `lower` is exclusive, `upper` inclusive.
        struct Frame<'a, K> {
            idx: NodeIndex,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
        }

        let mut visited = 0;
        let mut stack = vec![Frame {
            idx: root,
            lower: None,
            upper: None,
        }];

        while let Some(Frame { idx, lower, upper }) = stack.pop() {
            visited += 1;
            let node = self.node(idx);
            let key = node.key();

            // --- Invariant 1: ordering ---
            if let Some(lower) = lower {
                assert!(
                    key > lower,
                    "node {idx:?} is in a right subtree but its key is not > the ancestor's key",
                );
            }
            if let Some(upper) = upper {
                assert!(
                    key <= upper,
                    "node {idx:?} is in a left subtree but its key is not <= the ancestor's key",
                );
            }

            // --- Invariant 2: size consistency ---
            let left_size = node.left().map_or(0, |left| self.node(left).subtree_size());
            let right_size = node
                .right()
                .map_or(0, |right| self.node(right).subtree_size());
            assert_eq!(
                node.subtree_size(),
                1 + left_size + right_size,
                "subtree_size mismatch at node {idx:?}: \
                 stored {}, expected 1 + {left_size} + {right_size}",
                node.subtree_size(),
            );

            // --- Invariant 3: parent consistency ---
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert_eq!(
                    self.node(child).parent(),
                    Some(idx),
                    "child {child:?} of node {idx:?} points at parent {:?}",
                    self.node(child).parent(),
                );
            }

            if let Some(left) = node.left() {
                stack.push(Frame {
                    idx: left,
                    lower,
                    upper: Some(key),
                });
            }
            if let Some(right) = node.right() {
                stack.push(Frame {
                    idx: right,
                    lower: Some(key),
                    upper,
                });
            }
        }

        visited
    }
}
