use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis::graph::algorithms::{BellmanFord, CycleDetector, Dijkstra, ShortestPathSearch};
use trellis::graph::{AdjacencyListGraph, BasicWeightedEdge, GraphKind};

fn weighted_digraph(n: usize, degree: usize, acyclic: bool) -> AdjacencyListGraph<BasicWeightedEdge<f64>> {
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut edges = Vec::with_capacity(n * degree);
    for _ in 0..n * degree {
        let mut u = (next() % n as u64) as usize;
        let mut v = (next() % n as u64) as usize;
        if acyclic {
            if u == v {
                continue;
            }
            if u > v {
                std::mem::swap(&mut u, &mut v);
            }
        }
        let weight = (next() % 1_000) as f64 / 100.0;
        edges.push(BasicWeightedEdge::new(u, v, weight));
    }
    AdjacencyListGraph::from_edges(GraphKind::Directed, n, edges)
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for n in [1_000, 10_000] {
        let graph = weighted_digraph(n, 8, false);

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| black_box(Dijkstra::new(g.clone(), 0).weight_to(n - 1)));
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| black_box(BellmanFord::new(g.clone(), 0).weight_to(n - 1)));
        });

        let dag = weighted_digraph(n, 8, true);
        group.bench_with_input(BenchmarkId::new("acyclic", n), &dag, |b, g| {
            b.iter(|| {
                let detector = CycleDetector::new(g.clone());
                let sp = detector.shortest_paths(0);
                black_box(sp.map(|sp| sp.weight_to(n - 1)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
