//! Criterion benchmarks for the heavier codex routines: sorts, shortest
//! paths, maximum flow, string matching and the FFT.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use codex_core::algorithm::dynamic::edit_distance;
use codex_core::algorithm::graph::{dijkstra, FlowNetwork, MaxFlowAlgorithm, MaxFlowSolver};
use codex_core::algorithm::paradigms::{multiply_polynomials, MoSolver};
use codex_core::algorithm::sorting::{merge_sort, quick_sort, radix_sort};
use codex_core::algorithm::string::{build_suffix_array, kmp_search, AhoCorasick, RabinKarp};
use codex_core::data_structures::{Graph, SegmentTree};

/// Deterministic pseudo-random sequence (xorshift)
fn pseudo_random(n: usize, seed: u64) -> Vec<u64> {
    let mut x = seed.max(1);
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        })
        .collect()
}

/// Grid graph with `side * side` nodes and pseudo-random positive weights
fn grid_graph(side: usize) -> Graph {
    let weights = pseudo_random(4 * side * side, 7);
    let mut graph = Graph::directed(side * side);
    let mut w = weights.iter().map(|&x| (x % 100 + 1) as i64);
    for r in 0..side {
        for c in 0..side {
            let node = r * side + c;
            if c + 1 < side {
                let _ = graph.add_edge(node, node + 1, w.next().unwrap_or(1));
                let _ = graph.add_edge(node + 1, node, w.next().unwrap_or(1));
            }
            if r + 1 < side {
                let _ = graph.add_edge(node, node + side, w.next().unwrap_or(1));
                let _ = graph.add_edge(node + side, node, w.next().unwrap_or(1));
            }
        }
    }
    graph
}

/// Layered network: source, `layers` layers of `width` nodes, sink
fn layered_network(layers: usize, width: usize) -> FlowNetwork {
    let n = layers * width + 2;
    let (source, sink) = (0, n - 1);
    let caps = pseudo_random(layers * width * width + 2 * width, 11);
    let mut cap = caps.iter().map(|&x| (x % 20 + 1) as i64);
    let mut network = FlowNetwork::new(n);
    let node = |layer: usize, i: usize| 1 + layer * width + i;
    for i in 0..width {
        let _ = network.add_edge(source, node(0, i), cap.next().unwrap_or(1));
        let _ = network.add_edge(node(layers - 1, i), sink, cap.next().unwrap_or(1));
    }
    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                let _ = network.add_edge(node(layer, i), node(layer + 1, j), cap.next().unwrap_or(1));
            }
        }
    }
    network
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    for size in [1_000usize, 10_000] {
        let data = pseudo_random(size, 42);
        group.bench_with_input(BenchmarkId::new("merge_sort", size), &data, |b, data| {
            b.iter(|| merge_sort(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("quick_sort", size), &data, |b, data| {
            b.iter(|| quick_sort(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("radix_sort", size), &data, |b, data| {
            b.iter(|| radix_sort(black_box(data)))
        });
    }
    group.finish();
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    for side in [16usize, 64] {
        let graph = grid_graph(side);
        group.bench_with_input(BenchmarkId::new("dijkstra", side * side), &graph, |b, graph| {
            b.iter(|| dijkstra(black_box(graph), 0))
        });
    }
    group.finish();
}

fn bench_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_flow");
    let template = layered_network(6, 12);
    let sink = template.node_count() - 1;
    for algorithm in [MaxFlowAlgorithm::EdmondsKarp, MaxFlowAlgorithm::Dinic] {
        let solver = MaxFlowSolver::new(algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut network = template.clone();
                solver.solve(black_box(&mut network), 0, sink)
            })
        });
    }
    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");
    let text: String = pseudo_random(50_000, 3)
        .into_iter()
        .map(|x| (b'a' + (x % 4) as u8) as char)
        .collect();
    let pattern = "abcabdab";
    let rabin_karp = RabinKarp::default();
    let automaton = AhoCorasick::new(&["abca", "bdab", "cccc", "dabc"]);

    group.bench_function("kmp_search", |b| b.iter(|| kmp_search(black_box(&text), pattern)));
    group.bench_function("rabin_karp", |b| {
        b.iter(|| rabin_karp.search(black_box(&text), pattern))
    });
    if let Ok(automaton) = automaton {
        group.bench_function("aho_corasick", |b| b.iter(|| automaton.search(black_box(&text))));
    }
    group.bench_function("suffix_array", |b| {
        b.iter(|| build_suffix_array(black_box(&text[..5_000])))
    });
    group.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box(&text[..500]), black_box(&text[500..1_000])))
    });
    group.finish();
}

fn bench_range_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_queries");
    let data: Vec<i64> = pseudo_random(10_000, 5).into_iter().map(|x| (x % 1_000) as i64).collect();
    let queries: Vec<(usize, usize)> = pseudo_random(2_000, 9)
        .chunks(2)
        .map(|pair| {
            let (a, b) = ((pair[0] % 10_000) as usize, (pair[1] % 10_000) as usize);
            (a.min(b), a.max(b))
        })
        .collect();

    let tree = SegmentTree::new(&data);
    group.bench_function("segment_tree", |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|&(l, r)| tree.query(l, r + 1).unwrap_or(0))
                .sum::<i64>()
        })
    });
    let mo = MoSolver::new();
    group.bench_function("mo", |b| b.iter(|| mo.solve(black_box(&data), &queries)));
    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let a: Vec<i64> = (0..2_048).map(|i| i % 10).collect();
    let b_coeffs: Vec<i64> = (0..2_048).map(|i| (i * 7) % 10).collect();
    c.bench_function("multiply_polynomials_2048", |b| {
        b.iter(|| multiply_polynomials(black_box(&a), black_box(&b_coeffs)))
    });
}

criterion_group!(sorting_benches, bench_sorting);
criterion_group!(graph_benches, bench_graph, bench_max_flow);
criterion_group!(string_benches, bench_strings);
criterion_group!(numeric_benches, bench_range_queries, bench_fft);

criterion_main!(sorting_benches, graph_benches, string_benches, numeric_benches);
