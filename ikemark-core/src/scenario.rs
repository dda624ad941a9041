//! ## ikemark-core::scenario
//! **Named network scenarios and their test parameters**

use serde::{Deserialize, Serialize};

use crate::network::NetworkCondition;

/// One benchmark scenario: a name, the network it emulates, and how many
/// handshake iterations to draw per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub network_conditions: NetworkCondition,
    pub test_parameters: TestParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestParameters {
    pub handshake_iterations: usize,
}
