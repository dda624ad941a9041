//! ## ikemark-report::console
//! **Sectioned plain-text summary on stdout**
//!
//! Prints the same headline numbers the JSON report carries, formatted for
//! a terminal. Output goes straight to stdout rather than the tracing
//! pipeline because it is the product of the run, not diagnostics.

use ikemark_analysis::types::AnalysisResult;

const RULER: &str = "============================================================";

/// Console leaderboard length.
const CONSOLE_RANKING_SIZE: usize = 3;

const CONSOLE_MIGRATION_STEPS: [&str; 4] = [
    "Start with hybrid algorithms in test environments",
    "Monitor performance impact carefully",
    "Implement gradual rollout strategy",
    "Maintain classical fallback options",
];

/// Prints the full sectioned summary of an analysis.
pub fn print_summary(analysis: &AnalysisResult) {
    println!();
    println!("{RULER}");
    println!("IKEv2 POST-QUANTUM RESULTS SUMMARY");
    println!("{RULER}");
    println!();

    print_performance_overview(analysis);
    print_algorithm_rankings(analysis);
    print_key_insights(analysis);
    print_recommendations(analysis);
}

fn print_performance_overview(analysis: &AnalysisResult) {
    println!("PERFORMANCE OVERVIEW");
    println!("  {:<16} {:>14} {:>12}", "Crypto Type", "Avg Handshake", "Std Dev");
    for (family, speed) in &analysis.crypto_type_comparisons.speed_comparison {
        println!(
            "  {:<16} {:>11.1} ms {:>9.1} ms",
            family, speed.mean_time_ms, speed.std_time_ms
        );
    }
    println!();
}

fn print_algorithm_rankings(analysis: &AnalysisResult) {
    let rankings = &analysis.algorithm_rankings;
    println!("TOP PERFORMING ALGORITHMS");

    println!();
    println!("Fastest Algorithms:");
    for (i, entry) in rankings
        .by_speed
        .iter()
        .take(CONSOLE_RANKING_SIZE)
        .enumerate()
    {
        println!(
            "  #{} {:<24} {:<14} {:>8.1} ms",
            i + 1,
            entry.algorithm,
            entry.crypto_type,
            entry.time_ms
        );
    }

    println!();
    println!("Smallest Message Sizes:");
    for (i, entry) in rankings
        .by_message_size
        .iter()
        .take(CONSOLE_RANKING_SIZE)
        .enumerate()
    {
        println!(
            "  #{} {:<24} {:<14} {:>8.0} bytes",
            i + 1,
            entry.algorithm,
            entry.crypto_type,
            entry.size_bytes
        );
    }
    println!();
}

fn print_key_insights(analysis: &AnalysisResult) {
    println!("KEY INSIGHTS");
    if analysis.summary_insights.is_empty() {
        println!("  No insights available");
    } else {
        for (i, insight) in analysis.summary_insights.iter().enumerate() {
            println!("  {}. {insight}", i + 1);
        }
    }
    println!();
}

fn print_recommendations(analysis: &AnalysisResult) {
    println!("RECOMMENDATIONS");
    let recommendations = &analysis.network_impact_analysis.recommendations;
    if !recommendations.general_guidelines.is_empty() {
        println!();
        println!("General Guidelines:");
        for (i, guideline) in recommendations.general_guidelines.iter().enumerate() {
            println!("  {}. {guideline}", i + 1);
        }
    }

    println!();
    println!("Migration Strategy:");
    for (i, step) in CONSOLE_MIGRATION_STEPS.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikemark_analysis::analyze;
    use ikemark_core::algorithm::{AlgorithmSpec, Authentication, KeyExchange};
    use ikemark_core::network::NetworkCondition;
    use ikemark_core::result::{FamilyResult, ScenarioResult, SimulationResult};
    use ikemark_core::stats::AlgorithmStats;

    #[test]
    fn summary_prints_without_panicking() {
        let spec = AlgorithmSpec {
            name: "ECDSA-P256".into(),
            key_size: 256,
            key_gen_time_ms: 0.8,
            verify_time_ms: 1.2,
            key_exchange: KeyExchange::Single { public_key_size: 64 },
            authentication: Authentication::Single { signature_size: 64 },
        };
        let mut record = AlgorithmStats::timed_out(&spec, 10);
        record.success_rate = 100.0;
        record.mean_handshake_time_ms = 9.5;
        record.mean_message_size = 660.0;

        let mut scenario = ScenarioResult::default();
        scenario.families.insert(
            "classical".into(),
            FamilyResult {
                crypto_type: "classical".into(),
                scenario: "ideal_network".into(),
                results: vec![record],
                network_conditions: NetworkCondition {
                    latency_ms: 1.0,
                    bandwidth_mbps: 1000.0,
                    jitter_ms: 0.1,
                    packet_loss_percent: 0.0,
                },
            },
        );
        let mut results = SimulationResult::default();
        results.scenarios.insert("ideal_network".into(), scenario);

        let analysis = analyze(&results).unwrap();
        print_summary(&analysis);
    }
}
