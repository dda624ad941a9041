//! ## ikemark-analysis::types
//! **Serializable analysis sections**
//!
//! Section and field names here are the wire contract of the JSON report;
//! renaming any of them breaks downstream consumers.

use indexmap::IndexMap;
use serde::Serialize;

/// Complete analysis of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub scenario_comparisons: IndexMap<String, ScenarioComparison>,
    pub crypto_type_comparisons: CryptoTypeComparison,
    pub algorithm_rankings: AlgorithmRankings,
    pub network_impact_analysis: NetworkImpactAnalysis,
    pub summary_insights: Vec<String>,
}

/// Per-family summaries and the winners within a single scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioComparison {
    pub crypto_performance: IndexMap<String, FamilySummary>,
    pub fastest_algorithm: FastestAlgorithm,
    pub smallest_messages: SmallestMessages,
    /// Every algorithm of the scenario, descending success rate. Ties keep
    /// catalogue order.
    pub reliability_ranking: Vec<ReliabilityEntry>,
}

/// Summary statistics over the per-algorithm means of one crypto family.
#[derive(Debug, Clone, Serialize)]
pub struct FamilySummary {
    pub mean_handshake_time_ms: f64,
    pub min_handshake_time_ms: f64,
    pub max_handshake_time_ms: f64,
    pub std_handshake_time_ms: f64,
    pub mean_message_size: f64,
    pub min_message_size: f64,
    pub max_message_size: f64,
    pub mean_success_rate: f64,
    pub algorithms_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FastestAlgorithm {
    pub name: String,
    pub crypto_type: String,
    pub time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmallestMessages {
    pub name: String,
    pub crypto_type: String,
    pub size_bytes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReliabilityEntry {
    pub name: String,
    pub crypto_type: String,
    pub success_rate: f64,
}

/// Cross-family aggregates over every scenario of the run.
#[derive(Debug, Clone, Serialize)]
pub struct CryptoTypeComparison {
    pub speed_comparison: IndexMap<String, SpeedStats>,
    pub size_comparison: IndexMap<String, SizeStats>,
    pub reliability_comparison: IndexMap<String, ReliabilityStats>,
    /// Overheads against the `"classical"` family. Empty when no classical
    /// family exists or its means are zero, so no baseline is available.
    pub relative_performance: IndexMap<String, RelativePerformance>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeedStats {
    pub mean_time_ms: f64,
    pub std_time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeStats {
    pub mean_size_bytes: f64,
    pub std_size_bytes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReliabilityStats {
    pub mean_success_rate: f64,
    pub std_success_rate: f64,
}

/// One family's cost relative to the classical baseline. A factor of 1.0
/// (0 percent) means parity; the classical family itself always reports it.
#[derive(Debug, Clone, Serialize)]
pub struct RelativePerformance {
    pub time_overhead_factor: f64,
    pub size_overhead_factor: f64,
    pub time_overhead_percent: f64,
    pub size_overhead_percent: f64,
}

/// Global leaderboards over all (scenario, family, algorithm) entries.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRankings {
    pub by_speed: Vec<RankedAlgorithm>,
    pub by_message_size: Vec<RankedAlgorithm>,
    pub by_reliability: Vec<RankedAlgorithm>,
    pub balanced_score: Vec<RankedAlgorithm>,
}

/// One algorithm's showing under one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct RankedAlgorithm {
    pub scenario: String,
    pub crypto_type: String,
    pub algorithm: String,
    pub time_ms: f64,
    pub size_bytes: f64,
    pub success_rate: f64,
    /// Weighted composite in `[0, 1]`: 0.4 speed + 0.3 size + 0.3
    /// reliability, speed and size max-normalized over the whole run.
    /// Carried on every leaderboard entry, not only the balanced one.
    pub balanced_score: f64,
}

/// How strongly each family reacts to changing network conditions.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkImpactAnalysis {
    /// Per family; populated only when the run covers more than one scenario.
    pub latency_sensitivity: IndexMap<String, LatencySensitivity>,
    pub recommendations: NetworkRecommendations,
}

/// Spread of one family's mean handshake time across scenarios.
#[derive(Debug, Clone, Serialize)]
pub struct LatencySensitivity {
    pub variance: f64,
    pub coefficient_of_variation: f64,
    pub scenarios: IndexMap<String, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkRecommendations {
    pub high_latency_networks: Vec<String>,
    pub general_guidelines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_section_names_are_stable() {
        let analysis = AnalysisResult {
            scenario_comparisons: IndexMap::new(),
            crypto_type_comparisons: CryptoTypeComparison {
                speed_comparison: IndexMap::new(),
                size_comparison: IndexMap::new(),
                reliability_comparison: IndexMap::new(),
                relative_performance: IndexMap::new(),
            },
            algorithm_rankings: AlgorithmRankings {
                by_speed: vec![],
                by_message_size: vec![],
                by_reliability: vec![],
                balanced_score: vec![],
            },
            network_impact_analysis: NetworkImpactAnalysis {
                latency_sensitivity: IndexMap::new(),
                recommendations: NetworkRecommendations {
                    high_latency_networks: vec![],
                    general_guidelines: vec![],
                },
            },
            summary_insights: vec![],
        };

        let value = serde_json::to_value(&analysis).unwrap();
        for section in [
            "scenario_comparisons",
            "crypto_type_comparisons",
            "algorithm_rankings",
            "network_impact_analysis",
            "summary_insights",
        ] {
            assert!(value.get(section).is_some(), "missing section {section}");
        }
        for section in [
            "speed_comparison",
            "size_comparison",
            "reliability_comparison",
            "relative_performance",
        ] {
            assert!(
                value["crypto_type_comparisons"].get(section).is_some(),
                "missing section {section}"
            );
        }
        for board in [
            "by_speed",
            "by_message_size",
            "by_reliability",
            "balanced_score",
        ] {
            assert!(
                value["algorithm_rankings"].get(board).is_some(),
                "missing board {board}"
            );
        }
        assert!(value["network_impact_analysis"]["latency_sensitivity"].is_object());
        assert!(value["network_impact_analysis"]["recommendations"].is_object());
    }
}
