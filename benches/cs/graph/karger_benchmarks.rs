use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karger_cut::cs::graph::{
    contract_to_single_edge, karger_min_cut_with_config, ContractableGraph, KargerConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Two cliques of `size` nodes joined by `bridges` edges.
fn barbell(size: usize, bridges: usize) -> ContractableGraph {
    let mut graph = ContractableGraph::new();
    for side in ["l", "r"] {
        for i in 0..size {
            for j in (i + 1)..size {
                graph
                    .add_edge(&format!("{side}{i}"), &format!("{side}{j}"), 1)
                    .unwrap();
            }
        }
    }
    for i in 0..bridges {
        graph.add_edge(&format!("l{i}"), &format!("r{i}"), 1).unwrap();
    }
    graph
}

fn bench_single_contraction_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("contract_to_single_edge");
    for size in [8, 16, 32] {
        let graph = barbell(size, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            b.iter(|| contract_to_single_edge(black_box(graph.clone()), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_min_cut(c: &mut Criterion) {
    let graph = barbell(8, 3);
    let mut group = c.benchmark_group("karger_min_cut");
    for parallel in [false, true] {
        let config = KargerConfig {
            max_attempts: Some(100_000),
            seed: Some(7),
            parallel,
        };
        group.bench_with_input(
            BenchmarkId::new("barbell_8", if parallel { "parallel" } else { "sequential" }),
            &config,
            |b, config| {
                b.iter(|| karger_min_cut_with_config(black_box(&graph), 3, config).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_contraction_run, bench_min_cut);
criterion_main!(benches);
