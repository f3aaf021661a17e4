/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for range counting.

use range_size_tree::RangeSizeTree;

use crate::helpers::{SAMPLE_KEYS, brute_force_count, build_tree};

#[test]
fn test_count_range_small_tree() {
    //   2
    //  / \
    // 1   3
    let tree = build_tree(&[2, 1, 3]);
    assert_eq!(tree.count_range(&1, &1), 1);
    assert_eq!(tree.count_range(&1, &3), 3);
    assert_eq!(tree.count_range(&2, &3), 2);
}

#[test]
fn test_count_range_with_duplicate_bounds() {
    //             5
    //         /       \
    //       3          7
    //     /   \      /   \
    //   2      4    6     8
    //  / \      \        /  \
    // 1   3      5      8   10
    let tree = build_tree(&[5, 3, 7, 2, 4, 6, 8, 1, 3, 5, 8, 10]);
    assert_eq!(tree.count_range(&3, &7), 7);
    assert_eq!(tree.count_range(&7, &3), 7);
    assert_eq!(tree.count_range(&8, &8), 2);
    assert_eq!(tree.count_range(&0, &100), tree.len());
}

#[test]
fn test_count_range_sample_tree() {
    let tree = build_tree(&SAMPLE_KEYS);
    assert_eq!(tree.count_range(&1, &1), 2);
    assert_eq!(tree.count_range(&1, &2), 3);
    assert_eq!(tree.count_range(&2, &5), 4);
    assert_eq!(tree.count_range(&4, &6), 3);
    assert_eq!(tree.count_range(&0, &7), 7);
}

#[test]
fn test_count_range_bounds_between_keys() {
    let tree = build_tree(&[10, 20, 30, 40, 50]);
    assert_eq!(tree.count_range(&11, &19), 0);
    assert_eq!(tree.count_range(&15, &35), 2);
    assert_eq!(tree.count_range(&-5, &5), 0);
    assert_eq!(tree.count_range(&55, &60), 0);
}

#[test]
fn test_count_range_both_bounds_on_one_side_of_root() {
    let tree = build_tree(&[100, 20, 60, 10, 40, 80, 30]);
    for (a, b) in [(0, 25), (25, 65), (35, 45), (61, 99), (101, 200)] {
        assert_eq!(
            tree.count_range(&a, &b),
            brute_force_count(&tree, &a, &b),
            "range [{a}, {b}]"
        );
    }
}

#[test]
fn test_degenerate_range_matches_find_all() {
    let tree = build_tree(&[4, 2, 3, 4, 3, 4, 1, 9]);
    for key in 0..=10 {
        assert_eq!(tree.count_range(&key, &key), tree.find_all(&key).len());
    }
}

#[test]
fn test_count_range_on_empty_tree() {
    let tree = RangeSizeTree::<i32>::new();
    assert_eq!(tree.count_range(&1, &5), 0);
    assert_eq!(tree.count_range(&3, &3), 0);
}

#[test]
fn test_count_range_on_skewed_tree() {
    let ascending: Vec<i32> = (0..200).collect();
    let tree = build_tree(&ascending);
    assert_eq!(tree.count_range(&50, &149), 100);

    let descending: Vec<i32> = (0..200).rev().collect();
    let tree = build_tree(&descending);
    assert_eq!(tree.count_range(&50, &149), 100);
}

#[test]
fn test_count_range_tracks_removals() {
    let mut tree = build_tree(&[50, 25, 75, 10, 30, 60, 90, 30, 30]);
    assert_eq!(tree.count_range(&20, &40), 4);

    tree.remove(&30).unwrap();
    assert_eq!(tree.count_range(&20, &40), 3);
    assert_eq!(tree.count_range(&20, &40), brute_force_count(&tree, &20, &40));
}
