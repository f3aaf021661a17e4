/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! RangeSizeTree - An unbalanced binary search tree augmented with subtree sizes.
//!
//! The tree stores a multiset of ordered keys. Every node caches the number of
//! nodes in its own subtree, which lets [`RangeSizeTree::count_range`] count the
//! keys inside an inclusive bound by walking two root-to-boundary paths instead
//! of enumerating every match.
//!
//! # Overview
//!
//! - Duplicates are accepted and always descend to the left, so every occurrence
//!   of a key lies on the single left-preferring search path for that key.
//! - Nodes live in a slab-backed arena. Children and parents are [`NodeIndex`]
//!   handles into that arena rather than pointers.
//! - The tree never rebalances. Its shape, and therefore the cost of every
//!   operation, follows insertion order.
//!
//! # Example
//!
//! ```
//! use range_size_tree::RangeSizeTree;
//!
//! let mut tree = RangeSizeTree::new();
//! for key in [3, 1, 5, 1, 2, 4, 6] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.find_all(&1).len(), 2);
//! assert_eq!(tree.count_range(&2, &5), 4);
//!
//! // The deepest `1` is a leaf, so it can be removed.
//! let removed = tree.remove(&1).unwrap();
//! assert_eq!(removed.key(), &1);
//! assert_eq!(tree.count_range(&1, &1), 1);
//! ```

mod arena;
mod error;
mod iter;
mod node;
mod tree;

pub use arena::NodeIndex;
pub use error::RemoveError;
pub use iter::PreOrderDfsIterator;
pub use node::RangeSizeNode;
pub use tree::RangeSizeTree;
