/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::Measurement};

use crate::BenchTree;

/// A helper struct for benchmarking operations on a tree built from one corpus.
#[derive(Debug)]
pub struct OperationBencher {
    prefix: String,
    keys: Vec<u64>,
    tree: BenchTree,
}

impl OperationBencher {
    /// Build the tree that every benchmark in this bencher starts from.
    ///
    /// Benchmark groups are labelled with `prefix` to tell corpora apart.
    pub fn new(prefix: String, keys: Vec<u64>) -> Self {
        let tree = keys.iter().copied().collect();
        Self { prefix, keys, tree }
    }

    /// Benchmark building the tree from scratch.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = c.benchmark_group(format!("{}|Load", self.prefix));
        load_benchmark(&mut group, &self.keys);
        group.finish();
    }

    /// Benchmark inserting `key` into the prebuilt tree.
    pub fn insert_group(&self, c: &mut Criterion, key: u64, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        insert_benchmark(&mut group, &self.tree, key);
        group.finish();
    }

    /// Benchmark retrieving every occurrence of `key`.
    pub fn find_group(&self, c: &mut Criterion, key: u64, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        find_benchmark(&mut group, &self.tree, key);
        group.finish();
    }

    /// Benchmark removing one occurrence of `key`.
    pub fn remove_group(&self, c: &mut Criterion, key: u64, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        remove_benchmark(&mut group, &self.tree, key);
        group.finish();
    }

    /// Benchmark counting the keys in `[low, high]`, alongside a full scan
    /// that computes the same answer.
    pub fn count_range_group(&self, c: &mut Criterion, low: u64, high: u64, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.prefix));
        count_range_benchmark(&mut group, &self.tree, low, high);
        group.finish();
    }
}

fn load_benchmark<M: Measurement>(c: &mut BenchmarkGroup<'_, M>, keys: &[u64]) {
    c.bench_function("Rust", |b| {
        b.iter(|| black_box(keys).iter().copied().collect::<BenchTree>())
    });
}

fn insert_benchmark<M: Measurement>(c: &mut BenchmarkGroup<'_, M>, tree: &BenchTree, key: u64) {
    c.bench_function("Rust", |b| {
        b.iter_batched_ref(
            || tree.clone(),
            |data| data.insert(black_box(key)),
            BatchSize::LargeInput,
        )
    });
}

fn find_benchmark<M: Measurement>(c: &mut BenchmarkGroup<'_, M>, tree: &BenchTree, key: u64) {
    c.bench_function("Rust", |b| b.iter(|| tree.find_all(black_box(&key)).len()));
}

fn remove_benchmark<M: Measurement>(c: &mut BenchmarkGroup<'_, M>, tree: &BenchTree, key: u64) {
    c.bench_function("Rust", |b| {
        b.iter_batched_ref(
            || tree.clone(),
            |data| data.remove(black_box(&key)).is_some(),
            BatchSize::LargeInput,
        )
    });
}

fn count_range_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    tree: &BenchTree,
    low: u64,
    high: u64,
) {
    c.bench_function("Rust", |b| {
        b.iter(|| tree.count_range(black_box(&low), black_box(&high)))
    });
    c.bench_function("Scan", |b| {
        b.iter(|| {
            tree.iter()
                .filter(|node| (low..=high).contains(node.key()))
                .count()
        })
    });
}
