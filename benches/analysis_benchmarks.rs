use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nexus_intel::algo::{compute_centrality, CentralityConfig, GraphIndex};
use nexus_intel::analysis::{AnalysisConfig, InvestigationAnalyzer};
use nexus_intel::graph::{Connection, GraphSnapshot, IntelNode, NodeCategory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CATEGORIES: [NodeCategory; 6] = [
    NodeCategory::Entity,
    NodeCategory::Organization,
    NodeCategory::PhoneNumber,
    NodeCategory::Email,
    NodeCategory::Domain,
    NodeCategory::IpAddress,
];

/// Random investigation graph with about three connections per node
fn random_snapshot(size: usize, seed: u64) -> GraphSnapshot {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes = (0..size)
        .map(|i| {
            let mut node = IntelNode::new(format!("n{}", i), CATEGORIES[i % CATEGORIES.len()])
                .with_title(format!("Node {}", i));
            if rng.gen_bool(0.4) {
                node = node.with_content("Collected from open sources");
            }
            if rng.gen_bool(0.6) {
                node = node.with_attribute("source", "osint");
            }
            if rng.gen_bool(0.1) {
                node = node.with_attribute("confidence", rng.gen_range(0.0f64..1.0));
            }
            node
        })
        .collect();

    let connections = (0..size * 3 / 2)
        .map(|i| {
            let source = rng.gen_range(0..size);
            let target = rng.gen_range(0..size);
            Connection::new(format!("c{}", i), format!("n{}", source), format!("n{}", target))
        })
        .collect();

    GraphSnapshot::new(nodes, connections)
}

/// Benchmark the full analysis pipeline
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let analyzer = InvestigationAnalyzer::new(AnalysisConfig::seeded(1));

    for size in [100, 1000, 10_000].iter() {
        let snapshot = random_snapshot(*size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| analyzer.analyze(&snapshot));
        });
    }
    group.finish();
}

/// Benchmark index construction plus centrality alone
fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("centrality");
    let config = CentralityConfig::default();

    for size in [1000, 10_000].iter() {
        let snapshot = random_snapshot(*size, 11);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let index = GraphIndex::build(&snapshot.nodes, &snapshot.connections);
                compute_centrality(&index, &config)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_analysis, bench_centrality);
criterion_main!(benches);
