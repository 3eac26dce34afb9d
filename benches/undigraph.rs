use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use undigraph::Graph;

fn make_chain_graph(size: usize) -> Graph<usize, usize> {
    let mut graph = Graph::with_capacity(size, size);
    let mut prev = graph.add_vertex(0);

    for i in 1..size {
        let vertex = graph.add_vertex(i);
        graph.add_edge(prev, vertex, i).unwrap();
        prev = vertex;
    }

    graph
}

fn bench_make_graph(c: &mut Criterion) {
    let mut g = c.benchmark_group("graph creation");

    for size in [100, 10_000, 1_000_000] {
        g.bench_with_input(
            BenchmarkId::new("make_chain_graph", size),
            &size,
            |b, size| b.iter(|| black_box(make_chain_graph(*size))),
        );
    }
}

fn bench_clone_graph(c: &mut Criterion) {
    let mut g = c.benchmark_group("graph cloning");

    for size in [100, 10_000, 1_000_000] {
        g.bench_with_input(
            BenchmarkId::new("clone_chain_graph", size),
            &size,
            |b, size| {
                let graph = make_chain_graph(*size);
                b.iter(|| black_box(graph.clone()))
            },
        );
    }
}

fn bench_bfs(c: &mut Criterion) {
    let mut g = c.benchmark_group("breadth-first reachability");

    for size in [100, 10_000, 1_000_000] {
        g.bench_with_input(BenchmarkId::new("bfs_chain_graph", size), &size, |b, size| {
            let graph = make_chain_graph(*size);
            let start = graph.vertex_indices().next().unwrap();
            b.iter(|| black_box(graph.connected_vertices_bfs(start)))
        });
    }
}

criterion_group!(benches, bench_make_graph, bench_clone_graph, bench_bfs);
criterion_main!(benches);
