//! ## ikemark-report::summary
//! **The versioned JSON summary report**
//!
//! Restates the headline numbers of an analysis in report form and writes
//! them as pretty-printed JSON into the output directory. The full result
//! set and analysis are embedded verbatim for downstream tooling.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use ikemark_analysis::types::{AnalysisResult, NetworkRecommendations, RankedAlgorithm};
use ikemark_core::result::SimulationResult;

use crate::error::ReportError;

/// Schema version stamped into every report.
pub const REPORT_VERSION: &str = "1.0.0";

/// File name of the JSON summary inside the output directory.
pub const SUMMARY_FILE_NAME: &str = "summary_report.json";

/// Leaderboard length in the overview and comparison sections.
const OVERVIEW_RANKING_SIZE: usize = 5;

const USE_CASE_RECOMMENDATIONS: [(&str, &str); 4] = [
    (
        "high_security_requirements",
        "Consider hybrid or post-quantum algorithms",
    ),
    (
        "performance_critical",
        "Use classical algorithms for now, monitor PQ development",
    ),
    (
        "balanced_approach",
        "Deploy hybrid algorithms for future-proofing",
    ),
    (
        "constrained_networks",
        "Stick with classical, evaluate hybrid carefully",
    ),
];

const MIGRATION_STRATEGY: [&str; 4] = [
    "Phase 1: Deploy hybrid algorithms in controlled environments",
    "Phase 2: Gradually expand to production systems",
    "Phase 3: Monitor performance and adjust configurations",
    "Phase 4: Evaluate pure post-quantum for high-security applications",
];

const IMPLEMENTATION_PRIORITIES: [&str; 4] = [
    "Implement timeout adjustments for post-quantum algorithms",
    "Deploy network monitoring for message size tracking",
    "Establish fallback mechanisms to classical algorithms",
    "Create performance baseline measurements",
];

/// Complete summary report with the raw run and analysis embedded.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub metadata: ReportMetadata,
    pub executive_summary: ExecutiveSummary,
    pub performance_overview: PerformanceOverview,
    pub algorithm_comparison: AlgorithmComparison,
    pub network_impact: NetworkImpactSummary,
    pub recommendations: DeploymentRecommendations,
    pub detailed_results: SimulationResult,
    pub detailed_analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Local generation timestamp, RFC 3339.
    pub generation_time: String,
    pub version: String,
    pub scenarios_tested: Vec<String>,
    /// Unique crypto families of the run, sorted by name.
    pub crypto_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveSummary {
    pub key_findings: Vec<String>,
    /// Pre-formatted overhead percentages per family, e.g. `"42.3%"`.
    pub performance_impact: IndexMap<String, PerformanceImpact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceImpact {
    pub time_overhead: String,
    pub size_overhead: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceOverview {
    pub crypto_type_performance: IndexMap<String, FamilyAverages>,
    pub speed_rankings: Vec<SpeedRanking>,
    pub size_rankings: Vec<SizeRanking>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyAverages {
    pub avg_handshake_time_ms: f64,
    pub avg_message_size_bytes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeedRanking {
    pub algorithm: String,
    pub crypto_type: String,
    pub time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeRanking {
    pub algorithm: String,
    pub crypto_type: String,
    pub size_bytes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmComparison {
    pub top_performers: TopPerformers,
    pub balanced_rankings: Vec<RankedAlgorithm>,
}

/// Category winners; a key is absent when the run produced no ranking.
#[derive(Debug, Clone, Serialize)]
pub struct TopPerformers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<RankedAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smallest: Option<RankedAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_reliable: Option<RankedAlgorithm>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkImpactSummary {
    pub latency_sensitivity: IndexMap<String, StabilityEntry>,
    pub recommendations_by_network: NetworkRecommendations,
}

#[derive(Debug, Clone, Serialize)]
pub struct StabilityEntry {
    pub variance: f64,
    /// `1 / (1 + CoV)`; 1.0 means identical means across every scenario.
    pub stability_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRecommendations {
    pub by_use_case: IndexMap<String, String>,
    pub migration_strategy: Vec<String>,
    pub implementation_priorities: Vec<String>,
}

impl SummaryReport {
    /// Assembles the report from a finished run and its analysis.
    pub fn build(results: &SimulationResult, analysis: &AnalysisResult) -> Self {
        info!("Generating summary report");
        Self {
            metadata: metadata(results),
            executive_summary: executive_summary(analysis),
            performance_overview: performance_overview(analysis),
            algorithm_comparison: algorithm_comparison(analysis),
            network_impact: network_impact(analysis),
            recommendations: deployment_recommendations(),
            detailed_results: results.clone(),
            detailed_analysis: analysis.clone(),
        }
    }

    /// Writes the report as pretty-printed JSON, creating the output
    /// directory if needed. Returns the path of the written file.
    pub fn write_json(&self, output_dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(SUMMARY_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), "Summary report written");
        Ok(path)
    }
}

fn metadata(results: &SimulationResult) -> ReportMetadata {
    let mut crypto_types = BTreeSet::new();
    for (_, family, _) in results.iter_families() {
        crypto_types.insert(family.to_string());
    }
    ReportMetadata {
        generation_time: Local::now().to_rfc3339(),
        version: REPORT_VERSION.to_string(),
        scenarios_tested: results.scenarios.keys().cloned().collect(),
        crypto_types: crypto_types.into_iter().collect(),
    }
}

fn executive_summary(analysis: &AnalysisResult) -> ExecutiveSummary {
    let mut performance_impact = IndexMap::new();
    for (family, overhead) in &analysis.crypto_type_comparisons.relative_performance {
        performance_impact.insert(
            family.clone(),
            PerformanceImpact {
                time_overhead: format!("{:.1}%", overhead.time_overhead_percent),
                size_overhead: format!("{:.1}%", overhead.size_overhead_percent),
            },
        );
    }
    ExecutiveSummary {
        key_findings: analysis.summary_insights.clone(),
        performance_impact,
    }
}

fn performance_overview(analysis: &AnalysisResult) -> PerformanceOverview {
    let comparisons = &analysis.crypto_type_comparisons;
    let mut crypto_type_performance = IndexMap::new();
    // The speed and size maps are built over the same families in the same
    // order.
    for ((family, speed), size) in comparisons
        .speed_comparison
        .iter()
        .zip(comparisons.size_comparison.values())
    {
        crypto_type_performance.insert(
            family.clone(),
            FamilyAverages {
                avg_handshake_time_ms: speed.mean_time_ms,
                avg_message_size_bytes: size.mean_size_bytes,
            },
        );
    }

    let rankings = &analysis.algorithm_rankings;
    PerformanceOverview {
        crypto_type_performance,
        speed_rankings: rankings
            .by_speed
            .iter()
            .take(OVERVIEW_RANKING_SIZE)
            .map(|entry| SpeedRanking {
                algorithm: entry.algorithm.clone(),
                crypto_type: entry.crypto_type.clone(),
                time_ms: entry.time_ms,
            })
            .collect(),
        size_rankings: rankings
            .by_message_size
            .iter()
            .take(OVERVIEW_RANKING_SIZE)
            .map(|entry| SizeRanking {
                algorithm: entry.algorithm.clone(),
                crypto_type: entry.crypto_type.clone(),
                size_bytes: entry.size_bytes,
            })
            .collect(),
    }
}

fn algorithm_comparison(analysis: &AnalysisResult) -> AlgorithmComparison {
    let rankings = &analysis.algorithm_rankings;
    AlgorithmComparison {
        top_performers: TopPerformers {
            fastest: rankings.by_speed.first().cloned(),
            smallest: rankings.by_message_size.first().cloned(),
            most_reliable: rankings.by_reliability.first().cloned(),
        },
        balanced_rankings: rankings
            .balanced_score
            .iter()
            .take(OVERVIEW_RANKING_SIZE)
            .cloned()
            .collect(),
    }
}

fn network_impact(analysis: &AnalysisResult) -> NetworkImpactSummary {
    let impact = &analysis.network_impact_analysis;
    let mut latency_sensitivity = IndexMap::new();
    for (family, sensitivity) in &impact.latency_sensitivity {
        latency_sensitivity.insert(
            family.clone(),
            StabilityEntry {
                variance: sensitivity.variance,
                stability_score: 1.0 / (1.0 + sensitivity.coefficient_of_variation),
            },
        );
    }
    NetworkImpactSummary {
        latency_sensitivity,
        recommendations_by_network: impact.recommendations.clone(),
    }
}

fn deployment_recommendations() -> DeploymentRecommendations {
    DeploymentRecommendations {
        by_use_case: USE_CASE_RECOMMENDATIONS
            .iter()
            .map(|(case, advice)| (case.to_string(), advice.to_string()))
            .collect(),
        migration_strategy: MIGRATION_STRATEGY.iter().map(|s| s.to_string()).collect(),
        implementation_priorities: IMPLEMENTATION_PRIORITIES
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
