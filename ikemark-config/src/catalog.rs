//! Built-in algorithm and scenario catalogues.
//!
//! Loaded when no configuration file overrides them, so the binary produces
//! a meaningful comparison out of the box. Payload sizes follow the
//! published ML-KEM / ML-DSA / Falcon parameter sets; base timings are
//! representative relative costs, not measurements.

use ikemark_core::algorithm::{
    AlgorithmCatalog, AlgorithmSpec, Authentication, KeyExchange, CLASSICAL_FAMILY, HYBRID_FAMILY,
    POST_QUANTUM_FAMILY,
};
use ikemark_core::network::NetworkCondition;
use ikemark_core::scenario::{Scenario, TestParameters};

/// Handshake iterations per algorithm and scenario in the default profile.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Three families with three suites each: classical baselines, hybrid
/// key-exchange/authentication pairings, and pure post-quantum suites.
pub fn default_algorithms() -> AlgorithmCatalog {
    let mut catalog = AlgorithmCatalog::new();

    catalog.insert(
        CLASSICAL_FAMILY.into(),
        vec![
            AlgorithmSpec {
                name: "RSA-2048".into(),
                key_size: 2048,
                key_gen_time_ms: 2.5,
                verify_time_ms: 0.9,
                key_exchange: KeyExchange::Single {
                    public_key_size: 256,
                },
                authentication: Authentication::Single {
                    signature_size: 256,
                },
            },
            AlgorithmSpec {
                name: "ECDSA-P256".into(),
                key_size: 256,
                key_gen_time_ms: 0.8,
                verify_time_ms: 1.2,
                key_exchange: KeyExchange::Single { public_key_size: 64 },
                authentication: Authentication::Single { signature_size: 64 },
            },
            AlgorithmSpec {
                name: "X25519-Ed25519".into(),
                key_size: 256,
                key_gen_time_ms: 0.4,
                verify_time_ms: 0.6,
                key_exchange: KeyExchange::Single { public_key_size: 32 },
                authentication: Authentication::Single { signature_size: 64 },
            },
        ],
    );

    catalog.insert(
        HYBRID_FAMILY.into(),
        vec![
            AlgorithmSpec {
                name: "ECDH-ML-KEM-512".into(),
                key_size: 512,
                key_gen_time_ms: 0.9,
                verify_time_ms: 1.2,
                key_exchange: KeyExchange::Hybrid {
                    classical_size: 64,
                    pq_size: 800,
                },
                authentication: Authentication::Hybrid {
                    classical_size: 96,
                    pq_size: 2420,
                },
            },
            AlgorithmSpec {
                name: "ECDH-ML-KEM-768".into(),
                key_size: 768,
                key_gen_time_ms: 1.0,
                verify_time_ms: 1.4,
                key_exchange: KeyExchange::Hybrid {
                    classical_size: 64,
                    pq_size: 1184,
                },
                authentication: Authentication::Hybrid {
                    classical_size: 96,
                    pq_size: 3309,
                },
            },
            AlgorithmSpec {
                name: "ECDH-ML-KEM-1024".into(),
                key_size: 1024,
                key_gen_time_ms: 1.3,
                verify_time_ms: 1.8,
                key_exchange: KeyExchange::Hybrid {
                    classical_size: 64,
                    pq_size: 1568,
                },
                authentication: Authentication::Hybrid {
                    classical_size: 96,
                    pq_size: 4627,
                },
            },
        ],
    );

    catalog.insert(
        POST_QUANTUM_FAMILY.into(),
        vec![
            AlgorithmSpec {
                name: "ML-KEM-512-Falcon-512".into(),
                key_size: 512,
                key_gen_time_ms: 0.6,
                verify_time_ms: 2.2,
                key_exchange: KeyExchange::Single {
                    public_key_size: 800,
                },
                authentication: Authentication::Single {
                    signature_size: 666,
                },
            },
            AlgorithmSpec {
                name: "ML-KEM-768-ML-DSA-65".into(),
                key_size: 768,
                key_gen_time_ms: 0.7,
                verify_time_ms: 1.1,
                key_exchange: KeyExchange::Single {
                    public_key_size: 1184,
                },
                authentication: Authentication::Single {
                    signature_size: 3309,
                },
            },
            AlgorithmSpec {
                name: "ML-KEM-1024-ML-DSA-87".into(),
                key_size: 1024,
                key_gen_time_ms: 0.9,
                verify_time_ms: 1.6,
                key_exchange: KeyExchange::Single {
                    public_key_size: 1568,
                },
                authentication: Authentication::Single {
                    signature_size: 4627,
                },
            },
        ],
    );

    catalog
}

/// Four network profiles from near-ideal fibre to geostationary satellite.
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        scenario("ideal_network", 1.0, 1000.0, 0.1, 0.0),
        scenario("home_broadband", 20.0, 100.0, 5.0, 0.5),
        scenario("mobile_lte", 60.0, 20.0, 15.0, 2.0),
        scenario("satellite", 550.0, 10.0, 40.0, 3.0),
    ]
}

fn scenario(
    name: &str,
    latency_ms: f64,
    bandwidth_mbps: f64,
    jitter_ms: f64,
    packet_loss_percent: f64,
) -> Scenario {
    Scenario {
        name: name.into(),
        network_conditions: NetworkCondition {
            latency_ms,
            bandwidth_mbps,
            jitter_ms,
            packet_loss_percent,
        },
        test_parameters: TestParameters {
            handshake_iterations: DEFAULT_ITERATIONS,
        },
    }
}
