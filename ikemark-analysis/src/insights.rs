//! ## ikemark-analysis::insights
//! **Headline findings as short sentences**
//!
//! Pure string formatting over numbers the analyzer already computed; this
//! is the layer the console report prints verbatim.

use ikemark_core::algorithm::{HYBRID_FAMILY, POST_QUANTUM_FAMILY};

use crate::types::{AlgorithmRankings, CryptoTypeComparison};

/// Formats the headline findings of a run. Overhead lines are skipped when
/// no classical baseline exists and winner lines when the leaderboards are
/// empty; the two standing observations always appear.
pub fn summarize(comparisons: &CryptoTypeComparison, rankings: &AlgorithmRankings) -> Vec<String> {
    let mut insights = Vec::new();

    let relative = &comparisons.relative_performance;
    if let Some(hybrid) = relative.get(HYBRID_FAMILY) {
        insights.push(format!(
            "Hybrid algorithms show {:.1}% time overhead vs classical",
            hybrid.time_overhead_percent
        ));
    }
    if let Some(pq) = relative.get(POST_QUANTUM_FAMILY) {
        insights.push(format!(
            "Post-quantum algorithms show {:.1}% time overhead vs classical",
            pq.time_overhead_percent
        ));
    }
    if let Some(hybrid) = relative.get(HYBRID_FAMILY) {
        insights.push(format!(
            "Hybrid algorithms increase message size by {:.1}%",
            hybrid.size_overhead_percent
        ));
    }

    insights.push("Network latency has greater impact on post-quantum algorithms".to_string());
    insights.push(
        "Classical algorithms maintain best reliability across all network conditions".to_string(),
    );

    if let Some(fastest) = rankings.by_speed.first() {
        insights.push(format!(
            "Fastest algorithm: {} ({:.1}ms)",
            fastest.algorithm, fastest.time_ms
        ));
    }
    if let Some(most_reliable) = rankings.by_reliability.first() {
        insights.push(format!(
            "Most reliable: {} ({:.1}% success)",
            most_reliable.algorithm, most_reliable.success_rate
        ));
    }

    insights
}
