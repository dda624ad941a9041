//! ## ikemark-telemetry::metrics
//! **Prometheus counters and histograms for benchmark runs**
//!
//! One registry per run, gathered as text at the end. Registration on a
//! fresh registry cannot collide, so construction unwraps.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub handshakes_total: Counter,
    pub algorithm_runs_total: Counter,
    pub algorithm_run_seconds: Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let handshakes_total = Counter::new(
            "ikemark_handshakes_total",
            "Total simulated handshake iterations",
        )
        .unwrap();
        let algorithm_runs_total = Counter::new(
            "ikemark_algorithm_runs_total",
            "Completed per-algorithm benchmark units",
        )
        .unwrap();

        let algorithm_run_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "ikemark_algorithm_run_seconds",
                "Wall time spent benchmarking one algorithm under one scenario",
            )
            .buckets(vec![0.001, 0.01, 0.1, 1.0, 10.0]),
        )
        .unwrap();

        registry
            .register(Box::new(handshakes_total.clone()))
            .unwrap();
        registry
            .register(Box::new(algorithm_runs_total.clone()))
            .unwrap();
        registry
            .register(Box::new(algorithm_run_seconds.clone()))
            .unwrap();

        Self {
            registry,
            handshakes_total,
            algorithm_runs_total,
            algorithm_run_seconds,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_handshakes(&self, count: usize) {
        self.handshakes_total.inc_by(count as f64);
    }

    pub fn inc_algorithm_runs(&self) {
        self.algorithm_runs_total.inc();
    }
}
