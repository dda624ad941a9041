//! ## ikemark-core::sample
//! **One synthetic handshake measurement**
//!
//! Message sizing is a pure function of the algorithm descriptor: no
//! randomness, no network dependence. Timing fields are synthesized by the
//! simulator and summed here; a handshake counts as successful when the
//! total stays under [`HANDSHAKE_TIMEOUT_MS`].

use crate::algorithm::AlgorithmSpec;

/// Handshakes slower than this are counted as timeouts.
pub const HANDSHAKE_TIMEOUT_MS: f64 = 30_000.0;

/// Fixed IKEv2 framing overhead per message, in bytes.
pub const MESSAGE_BASE_OVERHEAD: u32 = 200;

/// Nonce payload carried in IKE_SA_INIT.
pub const NONCE_SIZE: u32 = 32;

/// Certificate payload overhead carried in IKE_AUTH.
pub const CERT_OVERHEAD: u32 = 100;

/// Sizes of the two IKEv2 handshake messages for one algorithm suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSizes {
    pub ike_sa_init: u32,
    pub ike_auth: u32,
    pub total: u32,
    pub key_exchange_payload: u32,
    pub authentication_payload: u32,
}

impl MessageSizes {
    /// Computes message sizes for a suite.
    ///
    /// IKE_SA_INIT carries the key-exchange payload plus a nonce; IKE_AUTH
    /// carries the authentication payload plus certificate overhead. Both
    /// include the fixed framing overhead.
    pub fn for_algorithm(spec: &AlgorithmSpec) -> Self {
        let key_exchange_payload = spec.key_exchange.payload_size();
        let authentication_payload = spec.authentication.payload_size();
        let ike_sa_init = MESSAGE_BASE_OVERHEAD + key_exchange_payload + NONCE_SIZE;
        let ike_auth = MESSAGE_BASE_OVERHEAD + authentication_payload + CERT_OVERHEAD;
        Self {
            ike_sa_init,
            ike_auth,
            total: ike_sa_init + ike_auth,
            key_exchange_payload,
            authentication_payload,
        }
    }
}

/// One simulated handshake. Ephemeral; reduced into [`AlgorithmStats`]
/// immediately after a run.
///
/// [`AlgorithmStats`]: crate::stats::AlgorithmStats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandshakeSample {
    pub phase1_time_ms: f64,
    pub phase2_time_ms: f64,
    pub transmission_time_ms: f64,
    pub total_time_ms: f64,
    pub message_sizes: MessageSizes,
    pub success: bool,
}

impl HandshakeSample {
    pub fn new(
        phase1_time_ms: f64,
        phase2_time_ms: f64,
        transmission_time_ms: f64,
        message_sizes: MessageSizes,
    ) -> Self {
        let total_time_ms = phase1_time_ms + phase2_time_ms + transmission_time_ms;
        Self {
            phase1_time_ms,
            phase2_time_ms,
            transmission_time_ms,
            total_time_ms,
            message_sizes,
            success: total_time_ms < HANDSHAKE_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Authentication, KeyExchange};

    fn classical_spec() -> AlgorithmSpec {
        AlgorithmSpec {
            name: "RSA-2048".into(),
            key_size: 2048,
            key_gen_time_ms: 1.0,
            verify_time_ms: 1.0,
            key_exchange: KeyExchange::Single {
                public_key_size: 256,
            },
            authentication: Authentication::Single {
                signature_size: 256,
            },
        }
    }

    fn hybrid_spec() -> AlgorithmSpec {
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
                pq_size: 1500,
            },
        }
    }

    #[test]
    fn classical_message_sizes() {
        let sizes = MessageSizes::for_algorithm(&classical_spec());
        assert_eq!(sizes.ike_sa_init, 200 + 256 + 32);
        assert_eq!(sizes.ike_auth, 200 + 256 + 100);
        assert_eq!(sizes.total, 1044);
    }

    #[test]
    fn hybrid_message_sizes_include_both_components() {
        let sizes = MessageSizes::for_algorithm(&hybrid_spec());
        assert_eq!(sizes.key_exchange_payload, 864);
        assert_eq!(sizes.authentication_payload, 1596);
        assert_eq!(sizes.ike_sa_init, 200 + 864 + 32);
        assert_eq!(sizes.ike_auth, 200 + 1596 + 100);
        assert_eq!(sizes.total, 2992);
    }

    #[test]
    fn message_sizing_is_pure() {
        let spec = hybrid_spec();
        assert_eq!(
            MessageSizes::for_algorithm(&spec),
            MessageSizes::for_algorithm(&spec)
        );
    }

    #[test]
    fn sample_totals_and_success_flag() {
        let sizes = MessageSizes::for_algorithm(&classical_spec());

        let fast = HandshakeSample::new(1.0, 2.0, 3.0, sizes);
        assert_eq!(fast.total_time_ms, 6.0);
        assert!(fast.success);

        let slow = HandshakeSample::new(HANDSHAKE_TIMEOUT_MS, 0.0, 0.0, sizes);
        assert!(!slow.success);

        let boundary = HandshakeSample::new(HANDSHAKE_TIMEOUT_MS - 0.001, 0.0, 0.0, sizes);
        assert!(boundary.success);
    }
}
