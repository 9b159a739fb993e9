// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use overlook_selection::Selection;

fn bench_replace_with_vs_hashed(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/replace_with");

    // Hypothesis: `replace_with` is O(n^2) due to de-dup scanning, while
    // `replace_with_hashed` is O(n) for select-all style inputs.
    for len in [128_usize, 512, 2_048, 8_192] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("replace_with", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<u32>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("replace_with_hashed", len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    Selection::<u32>::new,
                    |mut sel| {
                        sel.replace_with_hashed(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_replace_with_vs_hashed);
criterion_main!(benches);
