/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Failure reasons for [`RangeSizeTree::try_remove`](crate::RangeSizeTree::try_remove).

use thiserror::Error;

/// Why a removal left the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// No node on the search path carries the requested key.
    #[error("key not found")]
    NotFound,
    /// The removal target has two children. Only leaves and single-child
    /// nodes can be spliced out.
    #[error("removal declined: target node has two children")]
    HasTwoChildren,
}
