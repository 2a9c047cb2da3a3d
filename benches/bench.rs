use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use range_map::RangeMap;
use std::hint::black_box;

struct RangeGenerator {
    rng: StdRng,
    limit: u32,
}
impl RangeGenerator {
    fn new() -> Self {
        const LIMIT: u32 = 1000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> (u32, u32) {
        let low = self.rng.gen_range(0..self.limit - 1);
        let high = self.rng.gen_range(low + 1..=self.limit);
        (low, high)
    }
}

// insert helper fn
fn range_map_insert(count: usize, bench: &mut Bencher) {
    let mut gen = RangeGenerator::new();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut map = RangeMap::new();
        for &(low, high) in &ranges {
            black_box(map.insert(low, high, ()));
        }
    });
}

// inject helper fn
fn range_map_inject(count: usize, bench: &mut Bencher) {
    let mut gen = RangeGenerator::new();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut map = RangeMap::new();
        for &(low, high) in &ranges {
            black_box(map.inject(low, high, ()));
        }
    });
}

// erase_range helper fn
fn range_map_erase_range(count: usize, bench: &mut Bencher) {
    let mut gen = RangeGenerator::new();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut map = RangeMap::new();
    for &(low, high) in &ranges {
        map.inject(low, high, ());
    }
    let holes: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut map = map.clone();
        for &(low, high) in &holes {
            map.erase_range(low, high);
        }
        black_box(map.len())
    });
}

// point lookup helper fn
fn range_map_get(count: usize, bench: &mut Bencher) {
    let mut gen = RangeGenerator::new();
    let ranges: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut map = RangeMap::new();
    for &(low, high) in &ranges {
        map.inject(low, high, ());
    }
    let points: Vec<u32> = std::iter::repeat_with(|| gen.rng.gen_range(0..gen.limit))
        .take(count)
        .collect();
    bench.iter(|| {
        for p in &points {
            black_box(map.get(p));
        }
    });
}

fn bench_range_map_insert(c: &mut Criterion) {
    c.bench_function("bench_range_map_insert_100", |b| range_map_insert(100, b));
    c.bench_function("bench_range_map_insert_1000", |b| range_map_insert(1000, b));
    c.bench_function("bench_range_map_insert_10,000", |b| {
        range_map_insert(10_000, b)
    });
}

fn bench_range_map_inject(c: &mut Criterion) {
    c.bench_function("bench_range_map_inject_100", |b| range_map_inject(100, b));
    c.bench_function("bench_range_map_inject_1000", |b| range_map_inject(1000, b));
    c.bench_function("bench_range_map_inject_10,000", |b| {
        range_map_inject(10_000, b)
    });
}

fn bench_range_map_erase_range(c: &mut Criterion) {
    c.bench_function("bench_range_map_erase_range_100", |b| {
        range_map_erase_range(100, b)
    });
    c.bench_function("bench_range_map_erase_range_1000", |b| {
        range_map_erase_range(1000, b)
    });
}

fn bench_range_map_get(c: &mut Criterion) {
    c.bench_function("bench_range_map_get_100", |b| range_map_get(100, b));
    c.bench_function("bench_range_map_get_1000", |b| range_map_get(1000, b));
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_range_map_insert, bench_range_map_inject, bench_range_map_erase_range,
}

criterion_group! {
    name = benches_query;
    config = criterion_config();
    targets = bench_range_map_get
}

criterion_main!(benches_basic_op, benches_query);
