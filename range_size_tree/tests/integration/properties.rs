/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the range size tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use proptest::prelude::*;
    use range_size_tree::{RangeSizeTree, RemoveError};

    use crate::helpers::{brute_force_count, sorted_keys};

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        // A narrow key space forces plenty of duplicates.
        prop_oneof![
            3 => (-20i32..20).prop_map(Op::Insert),
            1 => (-20i32..20).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_after_every_operation(
            ops in proptest::collection::vec(op_strategy(), 0..200)
        ) {
            let mut tree = RangeSizeTree::new();
            // Reference multiset of the keys the tree should hold.
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::Insert(key) => {
                        tree.insert(key);
                        model.push(key);
                    }
                    Op::Remove(key) => {
                        let count_before = tree.count(&key);
                        match tree.try_remove(&key) {
                            Ok(node) => {
                                prop_assert_eq!(*node.key(), key);
                                let pos = model.iter().position(|&k| k == key).unwrap();
                                model.swap_remove(pos);
                                prop_assert_eq!(tree.count(&key), count_before - 1);
                            }
                            Err(RemoveError::NotFound) => {
                                prop_assert!(!model.contains(&key));
                            }
                            Err(RemoveError::HasTwoChildren) => {
                                prop_assert_eq!(tree.count(&key), count_before);
                            }
                        }
                    }
                }
                tree.check_tree_invariants();
                prop_assert_eq!(tree.len(), model.len());
            }

            model.sort();
            prop_assert_eq!(sorted_keys(&tree), model);
        }

        #[test]
        fn prop_count_range_matches_brute_force(
            keys in proptest::collection::vec(-100i32..100, 0..150),
            bounds in proptest::collection::vec((-110i32..110, -110i32..110), 1..20),
        ) {
            let tree: RangeSizeTree<i32> = keys.iter().copied().collect();
            for (a, b) in bounds {
                prop_assert_eq!(
                    tree.count_range(&a, &b),
                    brute_force_count(&tree, &a, &b),
                    "range ({}, {})", a, b
                );
            }
        }

        #[test]
        fn prop_count_range_matches_brute_force_after_removals(
            keys in proptest::collection::vec(0i32..30, 1..100),
            removals in proptest::collection::vec(0i32..30, 0..50),
            bounds in proptest::collection::vec((0i32..30, 0i32..30), 1..10),
        ) {
            let mut tree: RangeSizeTree<i32> = keys.iter().copied().collect();
            for key in removals {
                let _ = tree.remove(&key);
            }
            tree.check_tree_invariants();
            for (a, b) in bounds {
                prop_assert_eq!(tree.count_range(&a, &b), brute_force_count(&tree, &a, &b));
            }
        }

        #[test]
        fn prop_degenerate_range_equals_find_all(
            keys in proptest::collection::vec(-10i32..10, 0..100),
            probe in -12i32..12,
        ) {
            let tree: RangeSizeTree<i32> = keys.iter().copied().collect();
            let found = tree.find_all(&probe);
            prop_assert_eq!(tree.count_range(&probe, &probe), found.len());
            prop_assert_eq!(found.len(), keys.iter().filter(|&&k| k == probe).count());
            prop_assert!(found.iter().all(|node| *node.key() == probe));
        }

        #[test]
        fn prop_declined_removal_changes_nothing(
            keys in proptest::collection::vec(-50i32..50, 1..100),
            probe in -50i32..50,
        ) {
            let mut tree: RangeSizeTree<i32> = keys.iter().copied().collect();
            let before = crate::helpers::snapshot(&tree);
            let revision = tree.revision_id();
            if tree.try_remove(&probe).is_err() {
                prop_assert_eq!(crate::helpers::snapshot(&tree), before);
                prop_assert_eq!(tree.revision_id(), revision);
            }
        }
    }
}
