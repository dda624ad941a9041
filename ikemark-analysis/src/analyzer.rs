//! ## ikemark-analysis::analyzer
//! **Cross-scenario reduction of a finished run**
//!
//! Four passes over the completed result set: per-scenario winners and
//! family summaries, cross-family aggregates with classical-baseline
//! overheads, global top-N leaderboards, and per-family network
//! sensitivity. Tie-break policy everywhere: the first entry in catalogue
//! order wins.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::{info, instrument};

use ikemark_core::algorithm::CLASSICAL_FAMILY;
use ikemark_core::result::{ScenarioResult, SimulationResult};
use ikemark_core::stats::{mean, population_std, variance, AlgorithmStats};
use ikemark_core::SimulationError;

use crate::insights;
use crate::types::{
    AlgorithmRankings, AnalysisResult, CryptoTypeComparison, FamilySummary, FastestAlgorithm,
    LatencySensitivity, NetworkImpactAnalysis, NetworkRecommendations, RankedAlgorithm,
    RelativePerformance, ReliabilityEntry, ReliabilityStats, ScenarioComparison, SizeStats,
    SmallestMessages, SpeedStats,
};

/// Leaderboard length for the global rankings.
const RANKING_SIZE: usize = 10;

const GENERAL_GUIDELINES: [&str; 4] = [
    "Classical algorithms perform best in constrained networks",
    "Hybrid algorithms provide good balance of security and performance",
    "Post-quantum algorithms require careful network condition assessment",
    "Consider timeout adjustments for post-quantum in high-latency scenarios",
];

/// Analyzes a completed run: per-scenario comparisons, cross-family
/// comparisons, global rankings, network sensitivity, and insights.
///
/// Pure over its input; errors on structurally empty result sets (no
/// scenarios, a scenario without families, a family without records) so
/// downstream statistics never divide by zero.
#[instrument(skip(results))]
pub fn analyze(results: &SimulationResult) -> Result<AnalysisResult, SimulationError> {
    ensure_populated(results)?;
    info!(
        scenarios = results.scenarios.len(),
        "Analyzing benchmark results"
    );

    let mut scenario_comparisons = IndexMap::new();
    for (name, scenario) in &results.scenarios {
        scenario_comparisons.insert(name.clone(), analyze_scenario(scenario));
    }

    let crypto_type_comparisons = compare_crypto_types(results);
    let algorithm_rankings = rank_algorithms(results);
    let network_impact_analysis = analyze_network_impact(results);
    let summary_insights = insights::summarize(&crypto_type_comparisons, &algorithm_rankings);

    Ok(AnalysisResult {
        scenario_comparisons,
        crypto_type_comparisons,
        algorithm_rankings,
        network_impact_analysis,
        summary_insights,
    })
}

fn ensure_populated(results: &SimulationResult) -> Result<(), SimulationError> {
    if results.is_empty() {
        return Err(SimulationError::Analysis(
            "no simulation results to analyze".into(),
        ));
    }
    for (name, scenario) in &results.scenarios {
        if scenario.families.is_empty() {
            return Err(SimulationError::Analysis(format!(
                "scenario '{name}' has no crypto families"
            )));
        }
        for (family, family_result) in &scenario.families {
            if family_result.results.is_empty() {
                return Err(SimulationError::Analysis(format!(
                    "scenario '{name}' family '{family}' has no algorithm results"
                )));
            }
        }
    }
    Ok(())
}

/// Winners and per-family summaries within one scenario.
///
/// Callers guarantee at least one family with at least one record.
fn analyze_scenario(scenario: &ScenarioResult) -> ScenarioComparison {
    let mut crypto_performance = IndexMap::new();
    let mut flattened: Vec<(&str, &AlgorithmStats)> = Vec::new();
    for (family, family_result) in &scenario.families {
        crypto_performance.insert(family.clone(), summarize_family(&family_result.results));
        for record in &family_result.results {
            flattened.push((family.as_str(), record));
        }
    }

    let mut fastest = &flattened[0];
    let mut smallest = &flattened[0];
    for entry in &flattened[1..] {
        if entry.1.mean_handshake_time_ms < fastest.1.mean_handshake_time_ms {
            fastest = entry;
        }
        if entry.1.mean_message_size < smallest.1.mean_message_size {
            smallest = entry;
        }
    }

    let mut reliability_ranking: Vec<ReliabilityEntry> = flattened
        .iter()
        .map(|(family, record)| ReliabilityEntry {
            name: record.algorithm.clone(),
            crypto_type: (*family).to_string(),
            success_rate: record.success_rate,
        })
        .collect();
    reliability_ranking.sort_by(|a, b| b.success_rate.total_cmp(&a.success_rate));

    ScenarioComparison {
        crypto_performance,
        fastest_algorithm: FastestAlgorithm {
            name: fastest.1.algorithm.clone(),
            crypto_type: fastest.0.to_string(),
            time_ms: fastest.1.mean_handshake_time_ms,
        },
        smallest_messages: SmallestMessages {
            name: smallest.1.algorithm.clone(),
            crypto_type: smallest.0.to_string(),
            size_bytes: smallest.1.mean_message_size,
        },
        reliability_ranking,
    }
}

fn summarize_family(results: &[AlgorithmStats]) -> FamilySummary {
    let times: Vec<f64> = results.iter().map(|r| r.mean_handshake_time_ms).collect();
    let sizes: Vec<f64> = results.iter().map(|r| r.mean_message_size).collect();
    let success_rates: Vec<f64> = results.iter().map(|r| r.success_rate).collect();

    FamilySummary {
        mean_handshake_time_ms: mean(&times),
        min_handshake_time_ms: min_of(&times),
        max_handshake_time_ms: max_of(&times),
        std_handshake_time_ms: population_std(&times),
        mean_message_size: mean(&sizes),
        min_message_size: min_of(&sizes),
        max_message_size: max_of(&sizes),
        mean_success_rate: mean(&success_rates),
        algorithms_count: results.len(),
    }
}

#[derive(Default)]
struct FamilyAggregate {
    times: Vec<f64>,
    sizes: Vec<f64>,
    success_rates: Vec<f64>,
}

/// Pools every algorithm's per-scenario means by crypto family and derives
/// mean/std per metric, plus overheads against the classical baseline when
/// one exists.
fn compare_crypto_types(results: &SimulationResult) -> CryptoTypeComparison {
    let mut aggregates: IndexMap<String, FamilyAggregate> = IndexMap::new();
    for (_, family, family_result) in results.iter_families() {
        let pooled = aggregates.entry(family.to_string()).or_default();
        for record in &family_result.results {
            pooled.times.push(record.mean_handshake_time_ms);
            pooled.sizes.push(record.mean_message_size);
            pooled.success_rates.push(record.success_rate);
        }
    }

    let mut speed_comparison = IndexMap::new();
    let mut size_comparison = IndexMap::new();
    let mut reliability_comparison = IndexMap::new();
    for (family, pooled) in &aggregates {
        speed_comparison.insert(
            family.clone(),
            SpeedStats {
                mean_time_ms: mean(&pooled.times),
                std_time_ms: population_std(&pooled.times),
            },
        );
        size_comparison.insert(
            family.clone(),
            SizeStats {
                mean_size_bytes: mean(&pooled.sizes),
                std_size_bytes: population_std(&pooled.sizes),
            },
        );
        reliability_comparison.insert(
            family.clone(),
            ReliabilityStats {
                mean_success_rate: mean(&pooled.success_rates),
                std_success_rate: population_std(&pooled.success_rates),
            },
        );
    }

    let mut relative_performance = IndexMap::new();
    let baseline = speed_comparison
        .get(CLASSICAL_FAMILY)
        .map(|s| s.mean_time_ms)
        .zip(
            size_comparison
                .get(CLASSICAL_FAMILY)
                .map(|s| s.mean_size_bytes),
        );
    if let Some((baseline_time, baseline_size)) = baseline {
        // An all-timeout classical family has zero means and cannot serve
        // as a baseline; the section stays empty rather than emitting
        // non-finite ratios.
        if baseline_time > 0.0 && baseline_size > 0.0 {
            for ((family, speed), size) in speed_comparison.iter().zip(size_comparison.values()) {
                relative_performance.insert(
                    family.clone(),
                    RelativePerformance {
                        time_overhead_factor: speed.mean_time_ms / baseline_time,
                        size_overhead_factor: size.mean_size_bytes / baseline_size,
                        time_overhead_percent: (speed.mean_time_ms / baseline_time - 1.0) * 100.0,
                        size_overhead_percent: (size.mean_size_bytes / baseline_size - 1.0) * 100.0,
                    },
                );
            }
        }
    }

    CryptoTypeComparison {
        speed_comparison,
        size_comparison,
        reliability_comparison,
        relative_performance,
    }
}

/// Flattens every (scenario, family, algorithm) entry, scores it, and cuts
/// the four leaderboards.
fn rank_algorithms(results: &SimulationResult) -> AlgorithmRankings {
    let mut entries: Vec<RankedAlgorithm> = Vec::new();
    for (scenario, family, family_result) in results.iter_families() {
        for record in &family_result.results {
            entries.push(RankedAlgorithm {
                scenario: scenario.to_string(),
                crypto_type: family.to_string(),
                algorithm: record.algorithm.clone(),
                time_ms: record.mean_handshake_time_ms,
                size_bytes: record.mean_message_size,
                success_rate: record.success_rate,
                balanced_score: 0.0,
            });
        }
    }
    score_entries(&mut entries);

    AlgorithmRankings {
        by_speed: leaderboard(&entries, |a, b| a.time_ms.total_cmp(&b.time_ms)),
        by_message_size: leaderboard(&entries, |a, b| a.size_bytes.total_cmp(&b.size_bytes)),
        by_reliability: leaderboard(&entries, |a, b| b.success_rate.total_cmp(&a.success_rate)),
        balanced_score: leaderboard(&entries, |a, b| b.balanced_score.total_cmp(&a.balanced_score)),
    }
}

/// Assigns the weighted composite score. A degenerate run where every entry
/// has zero time or zero size keeps score 0 for all entries.
fn score_entries(entries: &mut [RankedAlgorithm]) {
    let max_time = entries.iter().map(|e| e.time_ms).fold(0.0, f64::max);
    let max_size = entries.iter().map(|e| e.size_bytes).fold(0.0, f64::max);
    if max_time <= 0.0 || max_size <= 0.0 {
        return;
    }
    for entry in entries {
        let time_score = 1.0 - entry.time_ms / max_time;
        let size_score = 1.0 - entry.size_bytes / max_size;
        let reliability_score = entry.success_rate / 100.0;
        entry.balanced_score = 0.4 * time_score + 0.3 * size_score + 0.3 * reliability_score;
    }
}

fn leaderboard<F>(entries: &[RankedAlgorithm], compare: F) -> Vec<RankedAlgorithm>
where
    F: FnMut(&RankedAlgorithm, &RankedAlgorithm) -> Ordering,
{
    let mut board = entries.to_vec();
    // Stable sort: equal keys keep catalogue order.
    board.sort_by(compare);
    board.truncate(RANKING_SIZE);
    board
}

/// Per-family spread of mean handshake time across scenarios. Sensitivity
/// needs at least two scenarios to be meaningful.
fn analyze_network_impact(results: &SimulationResult) -> NetworkImpactAnalysis {
    let mut times_by_family: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
    for (scenario, family, family_result) in results.iter_families() {
        let times: Vec<f64> = family_result
            .results
            .iter()
            .map(|r| r.mean_handshake_time_ms)
            .collect();
        times_by_family
            .entry(family.to_string())
            .or_default()
            .insert(scenario.to_string(), mean(&times));
    }

    let mut latency_sensitivity = IndexMap::new();
    for (family, by_scenario) in times_by_family {
        if by_scenario.len() < 2 {
            continue;
        }
        let values: Vec<f64> = by_scenario.values().copied().collect();
        let m = mean(&values);
        let cov = if m == 0.0 {
            0.0
        } else {
            population_std(&values) / m
        };
        latency_sensitivity.insert(
            family,
            LatencySensitivity {
                variance: variance(&values),
                coefficient_of_variation: cov,
                scenarios: by_scenario,
            },
        );
    }

    let recommendations = network_recommendations(&latency_sensitivity);
    NetworkImpactAnalysis {
        latency_sensitivity,
        recommendations,
    }
}

fn network_recommendations(
    latency_sensitivity: &IndexMap<String, LatencySensitivity>,
) -> NetworkRecommendations {
    let mut high_latency_networks = Vec::new();

    let mut least_sensitive: Option<(&str, f64)> = None;
    for (family, sensitivity) in latency_sensitivity {
        let cov = sensitivity.coefficient_of_variation;
        if least_sensitive.map_or(true, |(_, best)| cov < best) {
            least_sensitive = Some((family, cov));
        }
    }
    if let Some((family, _)) = least_sensitive {
        high_latency_networks.push(format!(
            "Use {family} algorithms for high-latency networks"
        ));
    }

    NetworkRecommendations {
        high_latency_networks,
        general_guidelines: GENERAL_GUIDELINES.iter().map(|s| s.to_string()).collect(),
    }
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
