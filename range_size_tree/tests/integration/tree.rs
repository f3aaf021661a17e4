/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for RangeSizeTree bookkeeping.

use range_size_tree::RangeSizeTree;

use crate::helpers::{SAMPLE_KEYS, build_tree};

#[test]
fn test_new_tree() {
    let tree = RangeSizeTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.revision_id(), 0);
    assert!(tree.root().is_none());
    assert!(tree.root_index().is_none());
    tree.check_tree_invariants();
}

#[test]
fn test_default_is_empty() {
    let tree: RangeSizeTree<u64> = RangeSizeTree::default();
    assert!(tree.is_empty());
}

#[test]
fn test_len_tracks_inserts_and_removes() {
    let mut tree = build_tree(&SAMPLE_KEYS);
    assert_eq!(tree.len(), 7);

    tree.insert(10);
    assert_eq!(tree.len(), 8);

    tree.remove(&10).unwrap();
    assert_eq!(tree.len(), 7);

    // Declined: the root has two children.
    assert!(tree.remove(&3).is_none());
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_height() {
    assert_eq!(build_tree(&[1]).height(), 1);
    assert_eq!(build_tree(&SAMPLE_KEYS).height(), 3);
    assert_eq!(build_tree(&[1, 2, 3, 4]).height(), 4);
    assert_eq!(build_tree(&[4, 3, 2, 1]).height(), 4);
}

#[test]
fn test_revision_id_changes_only_on_mutation() {
    let mut tree = RangeSizeTree::new();
    let r0 = tree.revision_id();

    tree.insert(2);
    tree.insert(1);
    tree.insert(3);
    let r1 = tree.revision_id();
    assert_ne!(r0, r1);

    // Reads never change the revision.
    let _ = tree.find_all(&1);
    let _ = tree.count_range(&1, &3);
    assert_eq!(tree.revision_id(), r1);

    // Neither do failed removals.
    assert!(tree.remove(&2).is_none());
    assert!(tree.remove(&9).is_none());
    assert_eq!(tree.revision_id(), r1);

    tree.remove(&1).unwrap();
    assert_ne!(tree.revision_id(), r1);
}

#[test]
fn test_clear() {
    let mut tree = build_tree(&SAMPLE_KEYS);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.count_range(&0, &10), 0);
    tree.check_tree_invariants();

    tree.insert(1);
    assert_eq!(tree.len(), 1);
    tree.check_tree_invariants();
}

#[test]
fn test_stale_index_after_remove() {
    let mut tree = build_tree(&[2, 1]);
    let one = tree.find_all_indices(&1)[0];
    tree.remove(&1).unwrap();
    assert!(tree.get(one).is_none());
}

#[test]
fn test_mem_usage_grows_with_inserts() {
    let mut tree = RangeSizeTree::new();
    let empty = tree.mem_usage();
    for key in 0..64 {
        tree.insert(key);
    }
    assert!(tree.mem_usage() > empty);
}

#[test]
fn test_clone_is_independent() {
    let mut tree = build_tree(&SAMPLE_KEYS);
    let copy = tree.clone();

    tree.remove(&1).unwrap();
    assert_eq!(copy.len(), 7);
    assert_eq!(copy.count_range(&1, &1), 2);
    copy.check_tree_invariants();
}
