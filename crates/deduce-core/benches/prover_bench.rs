//! # Prover Benchmarks
//!
//! Performance benchmarks for deduce-core forward chaining.
//!
//! Run with: `cargo bench -p deduce-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deduce_core::{
    Formula, Implication, ImplicationIndex, Traits, deduce_traits, prove_theorem,
};
use std::hint::black_box;

/// P0 => P1, P1 => P2, ..., P(n-1) => Pn
fn create_chain(size: u32) -> ImplicationIndex<u32, u32> {
    let implications = (0..size)
        .map(|i| Implication::new(i, Formula::atom(i, true), Formula::atom(i + 1, true)))
        .collect();
    ImplicationIndex::new(implications).expect("index")
}

/// P(i) => P(2i+1) + P(2i+2): every given property fans out to two.
fn create_tree(size: u32) -> ImplicationIndex<u32, u32> {
    let implications = (0..size)
        .map(|i| {
            Implication::new(
                i,
                Formula::atom(i, true),
                Formula::and(vec![
                    Formula::atom(2 * i + 1, true),
                    Formula::atom(2 * i + 2, true),
                ]),
            )
        })
        .collect();
    ImplicationIndex::new(implications).expect("index")
}

/// P(i) + P(i+1) => P(i+2) | Q(i): disjunctions resolved by falsifying Q.
fn create_disjunctive(size: u32) -> ImplicationIndex<u32, u32> {
    let offset = size + 2;
    let implications = (0..size)
        .map(|i| {
            Implication::new(
                i,
                Formula::and(vec![Formula::atom(i, true), Formula::atom(i + 1, true)]),
                Formula::or(vec![
                    Formula::atom(i + 2, true),
                    Formula::atom(offset + i, true),
                ]),
            )
        })
        .collect();
    ImplicationIndex::new(implications).expect("index")
}

fn given(pairs: &[(u32, bool)]) -> Traits<u32> {
    pairs.iter().copied().collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_tree(size)));
        });
    }

    group.finish();
}

fn bench_chain_deduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_deduction");

    for size in [100, 1000, 10000].iter() {
        let index = create_chain(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(deduce_traits(&index, given(&[(0, true)]))));
        });
    }

    group.finish();
}

fn bench_tree_deduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_deduction");

    for size in [100, 1000, 10000].iter() {
        let index = create_tree(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(deduce_traits(&index, given(&[(0, true)]))));
        });
    }

    group.finish();
}

fn bench_disjunctive_deduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjunctive_deduction");

    for size in [100, 1000].iter() {
        let index = create_disjunctive(*size);
        let mut known = given(&[(0, true), (1, true)]);
        for i in 0..*size {
            known.insert(size + 2 + i, false);
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(deduce_traits(&index, known.clone())));
        });
    }

    group.finish();
}

fn bench_prove_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove_chain");

    for size in [100, 1000].iter() {
        let index = create_chain(*size);
        let when = Formula::atom(0, true);
        let then = Formula::atom(*size, true);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(prove_theorem(&index, &when, &then)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_chain_deduction,
    bench_tree_deduction,
    bench_disjunctive_deduction,
    bench_prove_chain,
);
criterion_main!(benches);
