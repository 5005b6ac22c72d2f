//! # Pattern Store Benchmark
//!
//! Measures residency lookups for a full hand of cards and the dirty-set
//! iteration that drives every present.

#![allow(missing_docs)]

use ants_core::{DirtySet, PatternStore, SlotRange};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn hand_store() -> PatternStore<u8, 9> {
    let mut ranges = [SlotRange::new(0, 0); 9];
    for (i, range) in ranges.iter_mut().enumerate() {
        *range = SlotRange::new(49 + i as u16 * 24, 24);
    }
    PatternStore::new(ranges)
}

fn bench_residency(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_store");

    group.bench_function("hit", |b| {
        let mut store = hand_store();
        for slot in 0..9 {
            store.ensure_resident(slot, slot as u8, |_| {});
        }
        b.iter(|| {
            for slot in 0..9 {
                black_box(store.ensure_resident(slot, black_box(slot as u8), |_| {}));
            }
        });
    });

    group.bench_function("miss", |b| {
        let mut store = hand_store();
        let mut key = 0u8;
        b.iter(|| {
            key = key.wrapping_add(1);
            for slot in 0..9 {
                black_box(store.ensure_resident(slot, key, |range| {
                    black_box(range);
                }));
            }
        });
    });

    group.finish();
}

fn bench_dirty_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dirty_set_iter");

    for dirty in [8usize, 64, 448] {
        let mut set = DirtySet::<7>::new();
        for i in (0..448).step_by(448 / dirty) {
            set.mark(i);
        }
        group.bench_with_input(BenchmarkId::from_parameter(dirty), &set, |b, set| {
            b.iter(|| black_box(set.iter().sum::<usize>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_residency, bench_dirty_iter);
criterion_main!(benches);
