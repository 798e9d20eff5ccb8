//! Benchmarks for the graph algorithms.
//!
//! Every benchmark runs on square grid graphs with deterministic weights:
//! - Traversals (BFS, DFS)
//! - Shortest paths (unweighted BFS, Dijkstra, Floyd-Warshall)
//! - Spanning trees (Kruskal, Prim)
//! - Structure checks (components, bipartite, coloring)
//! - Heap sort

extern crate graphcore;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphcore::{heap::heap_sort, WeightedGraph};
use std::hint::black_box;

/// Builds a `side` x `side` undirected grid. Vertex `(r, c)` has key `r * side + c`
/// and connects to its right and lower neighbors.
fn create_grid(side: u32) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::with_capacity(false, (side * side) as usize);
    for id in 0..side * side {
        graph.add_vertex(id).unwrap();
    }
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            // Weights cycle through 1..=7 so ties stay rare
            let weight = f64::from((id * 31 + 7) % 7 + 1);
            if col + 1 < side {
                graph.add_edge(&id, &(id + 1), weight).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(&id, &(id + side), weight + 0.5).unwrap();
            }
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for side in [16, 64] {
        let graph = create_grid(side);
        group.throughput(Throughput::Elements(graph.vertex_count() as u64));
        group.bench_with_input(BenchmarkId::new("bfs", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.bfs_traversal(black_box(&0)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("dfs", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.dfs_traversal(black_box(&0)).unwrap()));
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for side in [16, 64] {
        let graph = create_grid(side);
        let corner = side * side - 1;
        group.bench_with_input(BenchmarkId::new("bfs_path", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.find_shortest_path(&0, black_box(&corner)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, graph| {
            b.iter(|| {
                black_box(
                    graph
                        .find_weighted_shortest_path(&0, black_box(&corner))
                        .unwrap(),
                )
            });
        });
    }

    // Cubic, so keep the grid small
    let graph = create_grid(12);
    group.bench_function("floyd_warshall_12", |b| {
        b.iter(|| black_box(graph.floyd_warshall().unwrap()));
    });
    group.finish();
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_trees");
    for side in [16, 64] {
        let graph = create_grid(side);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        group.bench_with_input(BenchmarkId::new("kruskal", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.kruskal().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("prim", side), &graph, |b, graph| {
            b.iter(|| black_box(graph.prim().unwrap()));
        });
    }
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let graph = create_grid(64);

    c.bench_function("connected_components_64", |b| {
        b.iter(|| black_box(graph.connected_components()));
    });
    c.bench_function("is_bipartite_64", |b| {
        b.iter(|| black_box(graph.is_bipartite()));
    });
    c.bench_function("greedy_coloring_64", |b| {
        b.iter(|| black_box(graph.greedy_coloring()));
    });
    c.bench_function("contains_cycle_64", |b| {
        b.iter(|| black_box(graph.contains_cycle()));
    });
}

fn bench_heap_sort(c: &mut Criterion) {
    let items: Vec<u64> = (0..10_000u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40)
        .collect();

    let mut group = c.benchmark_group("heap");
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("heap_sort_10k", |b| {
        b.iter(|| black_box(heap_sort(black_box(items.clone()))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_shortest_paths,
    bench_spanning_trees,
    bench_structure,
    bench_heap_sort,
);
criterion_main!(benches);
