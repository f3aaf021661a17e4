/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Deterministic key corpora for the benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng as _, SeedableRng as _};

/// Seed shared by every corpus, so runs are comparable.
pub const SEED: u64 = 0x5eed_2006;

/// Number of keys in the default corpus.
pub const DEFAULT_SIZE: usize = 10_000;

/// The shape of key sequence to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusType {
    /// Distinct keys `0..n` in random order; yields a tree of roughly
    /// logarithmic height.
    Shuffled,
    /// Distinct keys `0..n` in ascending order; the tree degenerates into a
    /// right-leaning list.
    Ascending,
    /// `n` keys drawn from a small domain, so most keys repeat many times.
    Duplicates,
}

impl CorpusType {
    /// Human-readable label, used to name benchmark groups.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shuffled => "Shuffled",
            Self::Ascending => "Ascending",
            Self::Duplicates => "Duplicates",
        }
    }

    /// Generate `n` keys for this corpus type.
    pub fn create_keys(self, n: usize) -> Vec<u64> {
        let mut rng = StdRng::seed_from_u64(SEED);
        match self {
            Self::Shuffled => {
                let mut keys: Vec<u64> = (0..n as u64).collect();
                keys.shuffle(&mut rng);
                keys
            }
            Self::Ascending => (0..n as u64).collect(),
            Self::Duplicates => {
                let domain = (n as u64 / 100).max(1);
                (0..n).map(|_| rng.gen_range(0..domain)).collect()
            }
        }
    }
}
