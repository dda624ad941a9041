//! ## ikemark-core::network
//! **Network condition parameters for handshake simulation**

use serde::{Deserialize, Serialize};

/// Network conditions a scenario runs under. All fields are non-negative;
/// `packet_loss_percent` is a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkCondition {
    pub latency_ms: f64,
    pub bandwidth_mbps: f64,
    pub jitter_ms: f64,
    pub packet_loss_percent: f64,
}
