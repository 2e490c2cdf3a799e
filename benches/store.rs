// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ontic::build::build_store_from_hierarchy;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `store.find`, `store.build`
// - Case IDs must remain stable across refactors so results stay
//   comparable over time (e.g. `small`, `large`).
fn benches_store(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("store.find");

        for (case_id, definitions, fields) in [("small", 10, 10), ("large", 200, 50)] {
            let store = fixtures::store(definitions, fields);
            group.throughput(Throughput::Elements(definitions as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let mut found = 0usize;
                    for d in 0..definitions {
                        let id = format!("def{d}");
                        if store.find(black_box(&id)).is_some() {
                            found += 1;
                        }
                    }
                    black_box(found)
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("store.build");

        for (case_id, classes, definitions) in [("small", 5, 10), ("large", 20, 100)] {
            let hierarchy = fixtures::hierarchy(classes, definitions);
            group.throughput(Throughput::Elements((classes * definitions) as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let store =
                        build_store_from_hierarchy(black_box(&hierarchy)).expect("build");
                    black_box(store.definitions().len())
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, benches_store);
criterion_main!(benches);
