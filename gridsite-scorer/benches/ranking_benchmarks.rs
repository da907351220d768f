//! Criterion benchmarks for node validation and ranking.
//!
//! Measures a full ranking call, validation included, and ranking of an
//! already validated table across table sizes.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package gridsite-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gridsite_core::{LoadType, LocationFilter, RankingRequest, ResourceConfig, validate_nodes};
use gridsite_scorer::{NodeRanker, rank_nodes};


use bench_support::{BENCHMARK_SEED, generate_nodes};

/// Table sizes to benchmark.
const TABLE_SIZES: &[usize] = &[10_000, 50_000];

fn build_benchmark_request() -> RankingRequest {
    RankingRequest::new(LoadType::DataCenterAlwaysOn, 250.0)
        .with_emissions_preference(70.0)
        .with_resource_config(ResourceConfig::SolarBattery)
        .with_top_n(25)
}

/// Benchmark validation plus ranking from a raw table.
fn bench_rank_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_nodes");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));
    let request = build_benchmark_request();

    for &size in TABLE_SIZES {
        let nodes = generate_nodes(size, BENCHMARK_SEED);
        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("nodes", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking ranking performance, result is intentionally discarded"
                )]
                let _ = rank_nodes(&nodes, &request);
            });
        });
    }

    group.finish();
}

/// Benchmark ranking a validated table, with and without a radial filter.
fn bench_ranker(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_ranker");
    group.sample_size(20);
    let ranker = NodeRanker::default();
    let unfiltered = build_benchmark_request();
    let Ok(radial) = LocationFilter::radius(35.0, -97.0, 800.0) else {
        return;
    };
    let filtered = build_benchmark_request().with_location_filter(radial);

    for &size in TABLE_SIZES {
        let Ok((table, _)) = validate_nodes(&generate_nodes(size, BENCHMARK_SEED)) else {
            continue;
        };
        for (label, request) in [("all", &unfiltered), ("radius", &filtered)] {
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking ranking performance, result is intentionally discarded"
                    )]
                    let _ = ranker.rank(&table, request);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rank_nodes, bench_ranker);
criterion_main!(benches);
