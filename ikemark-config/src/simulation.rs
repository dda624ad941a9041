//! Simulation configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Parameters of the sampling run itself.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulationConfig {
    /// Master seed; every (scenario, family, algorithm) unit derives its own
    /// stream seed from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}
