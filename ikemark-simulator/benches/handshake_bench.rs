#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use ikemark_config::catalog::{default_algorithms, default_scenarios};
use ikemark_simulator::{HandshakeSimulator, SimulationRunner};
use ikemark_telemetry::MetricsRecorder;

/// Benchmark raw sample synthesis for one hybrid suite.
fn benchmark_sample_generation(c: &mut Criterion) {
    let spec = default_algorithms()["hybrid"][1].clone();
    let network = default_scenarios()[1].network_conditions;

    c.bench_function("sample_generation", |b| {
        let mut simulator = HandshakeSimulator::from_seed(42);
        b.iter(|| black_box(simulator.simulate_handshake(&spec, &network)))
    });
}

/// Benchmark a full catalogue run with the default profile.
fn benchmark_full_run(c: &mut Criterion) {
    c.bench_function("full_run", |b| {
        b.iter(|| {
            let runner = SimulationRunner::new(
                default_algorithms(),
                default_scenarios(),
                42,
                MetricsRecorder::new(),
            );
            black_box(runner.run().unwrap())
        })
    });
}

criterion_group!(benches, benchmark_sample_generation, benchmark_full_run);
criterion_main!(benches);
