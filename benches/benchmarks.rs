//! Performance benchmarks for dircnt

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dircnt::test_utils::TestTree;
use dircnt::{ClassifyStrategy, CollectingReporter, Walker, WalkerConfig};

fn create_tree() -> TestTree {
    let tree = TestTree::new();
    tree.populate(50, 40);
    tree
}

fn bench_walk(c: &mut Criterion) {
    let tree = create_tree();

    let mut group = c.benchmark_group("walk");

    let configs = [
        ("fast_hint", WalkerConfig::default()),
        (
            "metadata",
            WalkerConfig {
                strategy: ClassifyStrategy::Metadata,
                ..Default::default()
            },
        ),
        (
            "sizes",
            WalkerConfig {
                count_sizes: true,
                ..Default::default()
            },
        ),
    ];

    for (name, config) in configs {
        let walker = Walker::new(config);
        group.bench_function(name, |b| {
            b.iter(|| {
                walker
                    .count(black_box(tree.path()), &mut CollectingReporter::default())
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
