//! ## ikemark-core::stats
//! **Reduction of handshake samples into per-algorithm statistics**
//!
//! [`AlgorithmStats::aggregate`] filters a run to its successful samples and
//! summarizes them. An all-timeout run is an expected outcome of network
//! modeling, not an error: it reduces to an all-zero sentinel record. Only
//! an empty sample set is rejected.
//!
//! Numeric conventions: population standard deviation and
//! linear-interpolation percentiles, with the median as the 50th percentile.

use serde::Serialize;

use crate::algorithm::AlgorithmSpec;
use crate::error::SimulationError;
use crate::sample::HandshakeSample;

/// Statistics for one algorithm under one scenario.
///
/// Invariant: `successful_iterations == 0` implies every numeric field is
/// zero and `success_rate == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmStats {
    pub algorithm: String,
    /// Percentage of all iterations (not just successful ones) in `[0, 100]`.
    pub success_rate: f64,
    pub mean_handshake_time_ms: f64,
    pub median_handshake_time_ms: f64,
    pub std_handshake_time_ms: f64,
    pub min_handshake_time_ms: f64,
    pub max_handshake_time_ms: f64,
    pub p95_handshake_time_ms: f64,
    pub p99_handshake_time_ms: f64,
    pub mean_message_size: f64,
    pub median_message_size: f64,
    pub iterations: usize,
    pub successful_iterations: usize,
    pub algorithm_details: AlgorithmSpec,
}

impl AlgorithmStats {
    /// Reduces one run's samples into a statistics record.
    ///
    /// Timing statistics cover the successful subset only; the success rate
    /// is relative to all samples. Errors on an empty sample set.
    pub fn aggregate(
        spec: &AlgorithmSpec,
        samples: &[HandshakeSample],
    ) -> Result<Self, SimulationError> {
        if samples.is_empty() {
            return Err(SimulationError::Validation(format!(
                "no samples to aggregate for algorithm '{}'",
                spec.name
            )));
        }

        let successful: Vec<&HandshakeSample> = samples.iter().filter(|s| s.success).collect();
        if successful.is_empty() {
            return Ok(Self::timed_out(spec, samples.len()));
        }

        let mut times: Vec<f64> = successful.iter().map(|s| s.total_time_ms).collect();
        times.sort_unstable_by(f64::total_cmp);
        let mut sizes: Vec<f64> = successful
            .iter()
            .map(|s| f64::from(s.message_sizes.total))
            .collect();
        sizes.sort_unstable_by(f64::total_cmp);

        Ok(Self {
            algorithm: spec.name.clone(),
            success_rate: successful.len() as f64 / samples.len() as f64 * 100.0,
            mean_handshake_time_ms: mean(&times),
            median_handshake_time_ms: percentile_sorted(&times, 50.0),
            std_handshake_time_ms: population_std(&times),
            min_handshake_time_ms: times[0],
            max_handshake_time_ms: times[times.len() - 1],
            p95_handshake_time_ms: percentile_sorted(&times, 95.0),
            p99_handshake_time_ms: percentile_sorted(&times, 99.0),
            mean_message_size: mean(&sizes),
            median_message_size: percentile_sorted(&sizes, 50.0),
            iterations: samples.len(),
            successful_iterations: successful.len(),
            algorithm_details: spec.clone(),
        })
    }

    /// Sentinel record for a run where every iteration timed out.
    pub fn timed_out(spec: &AlgorithmSpec, iterations: usize) -> Self {
        Self {
            algorithm: spec.name.clone(),
            success_rate: 0.0,
            mean_handshake_time_ms: 0.0,
            median_handshake_time_ms: 0.0,
            std_handshake_time_ms: 0.0,
            min_handshake_time_ms: 0.0,
            max_handshake_time_ms: 0.0,
            p95_handshake_time_ms: 0.0,
            p99_handshake_time_ms: 0.0,
            mean_message_size: 0.0,
            median_message_size: 0.0,
            iterations,
            successful_iterations: 0,
            algorithm_details: spec.clone(),
        }
    }
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`, not `n - 1`).
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn population_std(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Percentile of an ascending-sorted slice with linear interpolation
/// between closest ranks; `0.0` for an empty slice.
pub fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (sorted.len() - 1) as f64 * pct / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let weight = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * weight
    }
}
