/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use range_size_tree_bencher::BenchTree;
use range_size_tree_bencher::corpus::{CorpusType, DEFAULT_SIZE};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    init_tracing();
    report_tree_shapes();
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default: `info`).
fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a tree from every corpus and report its shape and memory usage.
///
/// Also cross-checks a full-range count against the number of inserted keys.
fn report_tree_shapes() {
    for corpus in [CorpusType::Shuffled, CorpusType::Ascending, CorpusType::Duplicates] {
        let keys = corpus.create_keys(DEFAULT_SIZE);
        let tree: BenchTree = keys.iter().copied().collect();

        let max = keys.iter().copied().max().unwrap_or(0);
        let counted = tree.count_range(&0, &max);
        assert_eq!(counted, keys.len(), "{} corpus: full-range count mismatch", corpus.label());

        tracing::info!(
            corpus = corpus.label(),
            keys = tree.len(),
            height = tree.height(),
            mem_usage_bytes = tree.mem_usage(),
            "built tree"
        );
    }
}
