//! Custom validation functions for configuration.
//!
//! Catalogue problems are configuration errors and must surface before any
//! simulation runs.

use ikemark_core::algorithm::AlgorithmCatalog;
use ikemark_core::scenario::Scenario;
use validator::ValidationError;

/// Validate that the catalogue has at least one family and every family at
/// least one fully-specified suite.
pub fn validate_catalog(catalog: &AlgorithmCatalog) -> Result<(), ValidationError> {
    if catalog.is_empty() {
        return Err(ValidationError::new("empty_catalog"));
    }
    for (family, algorithms) in catalog {
        if family.is_empty() {
            return Err(ValidationError::new("unnamed_family"));
        }
        if algorithms.is_empty() {
            return Err(ValidationError::new("empty_family"));
        }
        for spec in algorithms {
            if spec.name.is_empty() {
                return Err(ValidationError::new("unnamed_algorithm"));
            }
            if !spec.key_gen_time_ms.is_finite()
                || spec.key_gen_time_ms < 0.0
                || !spec.verify_time_ms.is_finite()
                || spec.verify_time_ms < 0.0
            {
                return Err(ValidationError::new("invalid_base_timing"));
            }
        }
    }
    Ok(())
}

/// Validate the scenario list: non-empty, positive iteration counts, and
/// plausible network parameters.
pub fn validate_scenarios(scenarios: &[Scenario]) -> Result<(), ValidationError> {
    if scenarios.is_empty() {
        return Err(ValidationError::new("empty_scenarios"));
    }
    for scenario in scenarios {
        if scenario.name.is_empty() {
            return Err(ValidationError::new("unnamed_scenario"));
        }
        if scenario.test_parameters.handshake_iterations == 0 {
            return Err(ValidationError::new("zero_iterations"));
        }
        let net = &scenario.network_conditions;
        if !net.latency_ms.is_finite() || net.latency_ms < 0.0 {
            return Err(ValidationError::new("invalid_latency"));
        }
        if !net.bandwidth_mbps.is_finite() || net.bandwidth_mbps <= 0.0 {
            return Err(ValidationError::new("invalid_bandwidth"));
        }
        if !net.jitter_ms.is_finite() || net.jitter_ms < 0.0 {
            return Err(ValidationError::new("invalid_jitter"));
        }
        if !net.packet_loss_percent.is_finite()
            || !(0.0..=100.0).contains(&net.packet_loss_percent)
        {
            return Err(ValidationError::new("invalid_packet_loss"));
        }
    }
    Ok(())
}
