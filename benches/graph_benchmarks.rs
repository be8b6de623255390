use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grafo::algo::{eulerian, shortest_path};
use grafo::graph::{EdgeSpec, GraphMode, GraphStore, Vertex};

/// Ring of `size` vertices with a chord every 7 steps
fn ring_edges(size: usize, weighted: bool) -> Vec<EdgeSpec> {
    let mut edges = Vec::with_capacity(size + size / 7);
    for i in 0..size {
        let weight = weighted.then(|| ((i % 5) + 1) as f64);
        edges.push(EdgeSpec::new(format!("v{}", i), format!("v{}", (i + 1) % size), weight));
        if i % 7 == 0 {
            let weight = weighted.then(|| 3.0);
            edges.push(EdgeSpec::new(format!("v{}", i), format!("v{}", (i + size / 2) % size), weight));
        }
    }
    edges
}

fn build(size: usize, mode: GraphMode) -> GraphStore {
    let mut store = GraphStore::new(mode);
    store.insert_batch(Vec::<Vertex>::new(), ring_edges(size, mode.weighted));
    store
}

/// Benchmark batch insertion throughput
fn bench_batch_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_insert");

    for size in [100, 1000, 10_000].iter() {
        let edges = ring_edges(*size, true);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut store = GraphStore::new(GraphMode::new(false, true));
                let outcome = store.insert_batch(Vec::<Vertex>::new(), edges.clone());
                black_box(outcome.edges_added);
            });
        });
    }
    group.finish();
}

/// Benchmark BFS and Dijkstra across the ring
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [100, 1000, 10_000].iter() {
        let target = format!("v{}", size / 2 + 3);

        let unweighted = build(*size, GraphMode::new(false, false));
        group.bench_with_input(BenchmarkId::new("bfs", size), size, |b, _| {
            b.iter(|| black_box(shortest_path(&unweighted, "v1", &target).ok()));
        });

        let weighted = build(*size, GraphMode::new(false, true));
        group.bench_with_input(BenchmarkId::new("dijkstra", size), size, |b, _| {
            b.iter(|| black_box(shortest_path(&weighted, "v1", &target).ok()));
        });
    }
    group.finish();
}

fn bench_eulerian(c: &mut Criterion) {
    let mut group = c.benchmark_group("eulerian");

    for size in [1000, 10_000].iter() {
        let undirected = build(*size, GraphMode::new(false, false));
        group.bench_with_input(BenchmarkId::new("undirected", size), size, |b, _| {
            b.iter(|| black_box(eulerian(&undirected).kind));
        });

        let directed = build(*size, GraphMode::new(true, false));
        group.bench_with_input(BenchmarkId::new("directed", size), size, |b, _| {
            b.iter(|| black_box(eulerian(&directed).kind));
        });
    }
    group.finish();
}

/// Benchmark neighbor and degree lookups
fn bench_lookups(c: &mut Criterion) {
    let store = build(10_000, GraphMode::new(false, false));

    c.bench_function("neighbors", |b| {
        b.iter(|| black_box(store.neighbors("v700").map(|n| n.len()).ok()));
    });
    c.bench_function("degree", |b| {
        b.iter(|| black_box(store.degree("v700").map(|d| d.total()).ok()));
    });
}

criterion_group!(
    benches,
    bench_batch_insert,
    bench_shortest_path,
    bench_eulerian,
    bench_lookups
);
criterion_main!(benches);
