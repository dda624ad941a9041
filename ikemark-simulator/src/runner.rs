//! Scenario runner: drives the simulator across the full catalogue.
//!
//! Iterates scenario x crypto family x algorithm in catalogue order and
//! reduces each unit's samples into an [`AlgorithmStats`] record. Structural
//! problems (empty catalogues, zero iterations) fail fast before any
//! sampling starts.

use std::time::Instant;

use tracing::{debug, info, instrument};

use ikemark_config::IkemarkConfig;
use ikemark_core::algorithm::{AlgorithmCatalog, AlgorithmSpec};
use ikemark_core::result::{FamilyResult, ScenarioResult, SimulationResult};
use ikemark_core::scenario::Scenario;
use ikemark_core::stats::AlgorithmStats;
use ikemark_core::SimulationError;
use ikemark_telemetry::MetricsRecorder;

use crate::seed::unit_seed;
use crate::HandshakeSimulator;

/// Runs the whole benchmark matrix and assembles the nested result set.
pub struct SimulationRunner {
    algorithms: AlgorithmCatalog,
    scenarios: Vec<Scenario>,
    master_seed: u64,
    metrics: MetricsRecorder,
}

impl SimulationRunner {
    pub fn new(
        algorithms: AlgorithmCatalog,
        scenarios: Vec<Scenario>,
        master_seed: u64,
        metrics: MetricsRecorder,
    ) -> Self {
        Self {
            algorithms,
            scenarios,
            master_seed,
            metrics,
        }
    }

    pub fn from_config(config: &IkemarkConfig, metrics: MetricsRecorder) -> Self {
        Self::new(
            config.algorithms.clone(),
            config.scenarios.clone(),
            config.simulation.seed,
            metrics,
        )
    }

    /// Runs every scenario against every crypto family in catalogue order.
    #[instrument(skip(self), fields(seed = self.master_seed))]
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.validate()?;

        let mut result = SimulationResult::default();
        for scenario in &self.scenarios {
            info!("Testing scenario: {}", scenario.name);
            let mut per_scenario = ScenarioResult::default();
            for family in self.algorithms.keys() {
                let family_result = self.run_family(family, scenario)?;
                per_scenario.families.insert(family.clone(), family_result);
            }
            result.scenarios.insert(scenario.name.clone(), per_scenario);
        }
        info!(
            scenarios = result.scenarios.len(),
            "Simulation run complete"
        );
        Ok(result)
    }

    /// Benchmarks every algorithm of one family under one scenario.
    pub fn run_family(
        &self,
        family: &str,
        scenario: &Scenario,
    ) -> Result<FamilyResult, SimulationError> {
        let algorithms = self.algorithms.get(family).ok_or_else(|| {
            SimulationError::Validation(format!("unknown crypto family '{family}'"))
        })?;

        let mut results = Vec::with_capacity(algorithms.len());
        for spec in algorithms {
            results.push(self.run_algorithm(spec, family, scenario)?);
        }

        Ok(FamilyResult {
            crypto_type: family.to_string(),
            scenario: scenario.name.clone(),
            results,
            network_conditions: scenario.network_conditions,
        })
    }

    fn run_algorithm(
        &self,
        spec: &AlgorithmSpec,
        family: &str,
        scenario: &Scenario,
    ) -> Result<AlgorithmStats, SimulationError> {
        let started = Instant::now();
        let iterations = scenario.test_parameters.handshake_iterations;

        let seed = unit_seed(self.master_seed, &scenario.name, family, &spec.name);
        let mut simulator = HandshakeSimulator::from_seed(seed);

        let mut samples = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            samples.push(simulator.simulate_handshake(spec, &scenario.network_conditions));
        }
        let stats = AlgorithmStats::aggregate(spec, &samples)?;

        self.metrics.inc_handshakes(iterations);
        self.metrics.inc_algorithm_runs();
        self.metrics
            .algorithm_run_seconds
            .observe(started.elapsed().as_secs_f64());
        debug!(
            algorithm = %spec.name,
            success_rate = stats.success_rate,
            mean_ms = stats.mean_handshake_time_ms,
            "Algorithm run complete"
        );
        Ok(stats)
    }

    /// Structural checks; catalogue content is validated at load time.
    fn validate(&self) -> Result<(), SimulationError> {
        if self.algorithms.is_empty() {
            return Err(SimulationError::Validation(
                "algorithm catalogue is empty".into(),
            ));
        }
        for (family, algorithms) in &self.algorithms {
            if algorithms.is_empty() {
                return Err(SimulationError::Validation(format!(
                    "crypto family '{family}' has no algorithms"
                )));
            }
        }
        if self.scenarios.is_empty() {
            return Err(SimulationError::Validation("scenario list is empty".into()));
        }
        for scenario in &self.scenarios {
            if scenario.test_parameters.handshake_iterations == 0 {
                return Err(SimulationError::Validation(format!(
                    "scenario '{}' requests zero handshake iterations",
                    scenario.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikemark_config::catalog::{default_algorithms, default_scenarios};
    use ikemark_core::algorithm::{Authentication, KeyExchange};
    use ikemark_core::network::NetworkCondition;
    use ikemark_core::scenario::TestParameters;

    fn small_scenarios() -> Vec<Scenario> {
        let mut scenarios = default_scenarios();
        scenarios.truncate(2);
        for scenario in &mut scenarios {
            scenario.test_parameters.handshake_iterations = 20;
        }
        scenarios
    }

    fn runner(algorithms: AlgorithmCatalog, scenarios: Vec<Scenario>, seed: u64) -> SimulationRunner {
        SimulationRunner::new(algorithms, scenarios, seed, MetricsRecorder::new())
    }

    #[test]
    fn runs_are_deterministic_for_a_fixed_seed() {
        let first = runner(default_algorithms(), small_scenarios(), 42)
            .run()
            .unwrap();
        let second = runner(default_algorithms(), small_scenarios(), 42)
            .run()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn master_seed_changes_the_numbers() {
        let first = runner(default_algorithms(), small_scenarios(), 42)
            .run()
            .unwrap();
        let second = runner(default_algorithms(), small_scenarios(), 1042)
            .run()
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn unit_results_do_not_depend_on_the_rest_of_the_catalogue() {
        let full = runner(default_algorithms(), small_scenarios(), 42)
            .run()
            .unwrap();

        let mut hybrid_only = AlgorithmCatalog::new();
        hybrid_only.insert("hybrid".into(), default_algorithms()["hybrid"].clone());
        let isolated = runner(hybrid_only, small_scenarios(), 42).run().unwrap();

        assert_eq!(
            full.scenarios["ideal_network"].families["hybrid"],
            isolated.scenarios["ideal_network"].families["hybrid"],
        );
    }

    #[test]
    fn result_set_follows_catalogue_order() {
        let result = runner(default_algorithms(), small_scenarios(), 42)
            .run()
            .unwrap();
        let order: Vec<(&str, &str)> = result
            .iter_families()
            .map(|(scenario, family, _)| (scenario, family))
            .collect();
        assert_eq!(
            order,
            vec![
                ("ideal_network", "classical"),
                ("ideal_network", "hybrid"),
                ("ideal_network", "post_quantum"),
                ("home_broadband", "classical"),
                ("home_broadband", "hybrid"),
                ("home_broadband", "post_quantum"),
            ]
        );
    }

    #[test]
    fn single_iteration_fixture_matches_hand_computed_sizes() {
        // IKE_SA_INIT = 200 + 256 + 32 and IKE_AUTH = 200 + 256 + 100,
        // 1044 bytes in total.
        let spec = AlgorithmSpec {
            name: "RSA-2048".into(),
            key_size: 2048,
            key_gen_time_ms: 1.0,
            verify_time_ms: 1.0,
            key_exchange: KeyExchange::Single {
                public_key_size: 256,
            },
            authentication: Authentication::Single {
                signature_size: 256,
            },
        };
        let mut catalogue = AlgorithmCatalog::new();
        catalogue.insert("classical".into(), vec![spec]);
        let scenarios = vec![Scenario {
            name: "ideal_network".into(),
            network_conditions: NetworkCondition {
                latency_ms: 0.0,
                bandwidth_mbps: 1000.0,
                jitter_ms: 0.0,
                packet_loss_percent: 0.0,
            },
            test_parameters: TestParameters {
                handshake_iterations: 1,
            },
        }];

        let result = runner(catalogue, scenarios, 42).run().unwrap();
        let stats = &result.scenarios["ideal_network"].families["classical"].results[0];
        assert_eq!(stats.mean_message_size, 1044.0);
        assert_eq!(stats.median_message_size, 1044.0);
        assert_eq!(stats.success_rate, 100.0);
        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.successful_iterations, 1);
        // Millisecond base costs under bounded variance cannot approach
        // the 30 s timeout on an ideal link.
        assert!(stats.max_handshake_time_ms < 10.0);
    }

    #[test]
    fn hopeless_network_produces_the_timeout_sentinel() {
        let scenarios = vec![Scenario {
            name: "deep_space".into(),
            network_conditions: NetworkCondition {
                latency_ms: 1e9,
                bandwidth_mbps: 10.0,
                jitter_ms: 0.0,
                packet_loss_percent: 0.0,
            },
            test_parameters: TestParameters {
                handshake_iterations: 5,
            },
        }];
        let result = runner(default_algorithms(), scenarios, 42).run().unwrap();
        for (_, _, family_result) in result.iter_families() {
            for stats in &family_result.results {
                assert_eq!(stats.success_rate, 0.0);
                assert_eq!(stats.mean_handshake_time_ms, 0.0);
                assert_eq!(stats.iterations, 5);
                assert_eq!(stats.successful_iterations, 0);
            }
        }
    }

    #[test]
    fn zero_iterations_fail_before_sampling() {
        let mut scenarios = small_scenarios();
        scenarios[1].test_parameters.handshake_iterations = 0;
        let err = runner(default_algorithms(), scenarios, 42)
            .run()
            .unwrap_err();
        assert!(matches!(err, SimulationError::Validation(_)));
    }

    #[test]
    fn empty_catalogue_fails_before_sampling() {
        let err = runner(AlgorithmCatalog::new(), small_scenarios(), 42)
            .run()
            .unwrap_err();
        assert!(matches!(err, SimulationError::Validation(_)));
    }

    #[test]
    fn unknown_family_is_rejected() {
        let r = runner(default_algorithms(), small_scenarios(), 42);
        let err = r
            .run_family("quantum_annealing", &small_scenarios()[0])
            .unwrap_err();
        assert!(matches!(err, SimulationError::Validation(_)));
    }

    #[test]
    fn metrics_count_every_handshake() {
        let metrics = MetricsRecorder::new();
        let r = SimulationRunner::new(
            default_algorithms(),
            small_scenarios(),
            42,
            metrics.clone(),
        );
        r.run().unwrap();
        // 2 scenarios x 3 families x 3 algorithms x 20 iterations.
        assert_eq!(metrics.handshakes_total.get(), 360.0);
        assert_eq!(metrics.algorithm_runs_total.get(), 18.0);
    }
}
