//! Benchmarks for ingredient suggestions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recipegen_search::{autocomplete, levenshtein_distance, suggest, POPULAR_INGREDIENTS};

fn create_catalog(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let base = POPULAR_INGREDIENTS[i % POPULAR_INGREDIENTS.len()];
            format!("{base} {}", i / POPULAR_INGREDIENTS.len())
        })
        .collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("levenshtein_single", |b| {
        b.iter(|| levenshtein_distance(black_box("mozzarella"), black_box("mozarela")))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for size in [100, 600, 5000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::new("near_miss", size), size, |b, _| {
            b.iter(|| suggest(black_box("tomatoe"), black_box(&catalog), 5))
        });
    }

    group.finish();
}

fn bench_autocomplete(c: &mut Criterion) {
    let catalog = create_catalog(600);
    let chosen = vec!["chicken 0".to_string()];

    c.bench_function("autocomplete_600", |b| {
        b.iter(|| autocomplete(black_box("chi"), black_box(&catalog), black_box(&chosen), 8))
    });
}

criterion_group!(benches, bench_edit_distance, bench_suggest, bench_autocomplete);
criterion_main!(benches);
