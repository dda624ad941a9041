//! ## ikemark-core::result
//! **Ordered result containers for a full benchmark run**
//!
//! Three nesting levels: scenario name -> crypto family -> per-algorithm
//! statistics. Both keyed levels preserve catalogue insertion order so that
//! serialized output and downstream rankings are stable across runs.

use indexmap::IndexMap;
use serde::Serialize;

use crate::network::NetworkCondition;
use crate::stats::AlgorithmStats;

/// Statistics for every algorithm of one crypto family under one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyResult {
    pub crypto_type: String,
    pub scenario: String,
    pub results: Vec<AlgorithmStats>,
    pub network_conditions: NetworkCondition,
}

/// Family results of one scenario, keyed by crypto family.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScenarioResult {
    pub families: IndexMap<String, FamilyResult>,
}

/// The complete result set of one run, keyed by scenario name.
/// Built once by the runner and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimulationResult {
    pub scenarios: IndexMap<String, ScenarioResult>,
}

impl SimulationResult {
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Iterates `(scenario, family, result)` triples in insertion order.
    pub fn iter_families(&self) -> impl Iterator<Item = (&str, &str, &FamilyResult)> {
        self.scenarios.iter().flat_map(|(scenario, per_scenario)| {
            per_scenario
                .families
                .iter()
                .map(move |(family, result)| (scenario.as_str(), family.as_str(), result))
        })
    }
}
