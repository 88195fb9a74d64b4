// Copyright 2025 the eratos developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Criterion benchmarks for the three sieve algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eratos_core::sieve::SieveKind;
use std::hint::black_box;

fn bench_sieves(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieves");
    group.sample_size(20);

    for limit in [10_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(limit as u64));
        for kind in SieveKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), limit), &limit, |b, &limit| {
                b.iter(|| kind.generate(black_box(limit)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sieves);
criterion_main!(benches);
