//! Benchmarks for route resolution and catalog lookup
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::catalog::Catalog;
use folio::router::{Navigator, RouteTable};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let table = RouteTable::global();

    for path in ["/", "/contact", "/projects/1", "/projects/%31?ref=nav", "/missing/page"] {
        group.bench_function(path, |b| b.iter(|| table.resolve(black_box(path))));
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let catalog = Catalog::global();

    c.bench_function("lookup_hit", |b| b.iter(|| catalog.lookup(black_box("1"))));
    c.bench_function("lookup_miss", |b| b.iter(|| catalog.lookup(black_box("999"))));
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("navigate_push_back", |b| {
        let (mut nav, _) = Navigator::start("/");
        b.iter(|| {
            nav.push(black_box("/projects/0"));
            nav.back().ok()
        })
    });
}

criterion_group!(benches, bench_resolve, bench_lookup, bench_navigation);
criterion_main!(benches);
