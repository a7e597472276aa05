//! Benchmarks for Geodesic Y
//!
//! Measures performance of:
//! - Graph generation
//! - Random playouts to the end of the game
//! - MCTS search from the empty board

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geodesic_y::core::GameRng;
use geodesic_y::graph::{cell_count, shared_graph, GeodesicGraph};
use geodesic_y::mcts::{MCTSConfig, MCTSSearch};
use geodesic_y::GeodesicYState;

const ORDERS: [u16; 4] = [5, 9, 13, 19];

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for order in ORDERS {
        group.throughput(Throughput::Elements(cell_count(order) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| GeodesicGraph::build(black_box(order)))
        });
    }
    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");

    for order in ORDERS {
        let graph = shared_graph(order).expect("valid order");
        let empty = GeodesicYState::with_graph(graph);
        let mut rng = GameRng::new(7);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| {
                let mut state = empty.clone();
                let mut cells = state.legal_actions();
                rng.shuffle(&mut cells);
                for node in cells {
                    if state.is_terminal() {
                        break;
                    }
                    state.apply_move(node);
                }
                black_box(state.winner())
            })
        });
    }
    group.finish();
}

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.sample_size(10);

    for order in [5u16, 9] {
        let state = GeodesicYState::new(order);
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter(|| {
                let mut search = MCTSSearch::new(MCTSConfig::default());
                black_box(search.search(&state, 500))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_random_playout, bench_mcts_search);
criterion_main!(benches);
