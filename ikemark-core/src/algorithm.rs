//! ## ikemark-core::algorithm
//! **Declarative algorithm suite descriptors**
//!
//! An [`AlgorithmSpec`] carries everything the simulator needs to synthesize
//! handshake timings and message sizes for one IKEv2 suite: base
//! computation costs plus a key-exchange and an authentication descriptor.
//! Hybrid descriptors pair a classical component with a post-quantum one;
//! the payload carried on the wire is the sum of both.
//!
//! Catalogues group suites into crypto families (`classical`, `hybrid`,
//! `post_quantum`) and are immutable once loaded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Family name treated as the baseline for relative-overhead comparisons.
pub const CLASSICAL_FAMILY: &str = "classical";
/// Family of suites mixing a classical and a post-quantum component.
pub const HYBRID_FAMILY: &str = "hybrid";
/// Family of pure post-quantum suites.
pub const POST_QUANTUM_FAMILY: &str = "post_quantum";

/// Ordered mapping of crypto family name to the suites of that family.
/// Iteration order is the catalogue order and is significant for output
/// ordering and tie-breaking.
pub type AlgorithmCatalog = IndexMap<String, Vec<AlgorithmSpec>>;

/// Key-exchange descriptor for one suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyExchange {
    /// One scheme, classical or pure post-quantum; `public_key_size` is the
    /// full payload.
    Single { public_key_size: u32 },
    /// Classical and post-quantum components negotiated together.
    Hybrid {
        #[serde(default = "default_classical_ke_size")]
        classical_size: u32,
        pq_size: u32,
    },
}

impl KeyExchange {
    /// Key-exchange payload bytes carried in IKE_SA_INIT.
    pub fn payload_size(&self) -> u32 {
        match self {
            Self::Single { public_key_size } => *public_key_size,
            Self::Hybrid {
                classical_size,
                pq_size,
            } => classical_size + pq_size,
        }
    }
}

/// Authentication descriptor for one suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Authentication {
    /// One signature scheme; `signature_size` is the full payload.
    Single { signature_size: u32 },
    /// Classical and post-quantum signatures sent side by side.
    Hybrid {
        #[serde(default = "default_classical_auth_size")]
        classical_size: u32,
        pq_size: u32,
    },
}

impl Authentication {
    /// Authentication payload bytes carried in IKE_AUTH.
    pub fn payload_size(&self) -> u32 {
        match self {
            Self::Single { signature_size } => *signature_size,
            Self::Hybrid {
                classical_size,
                pq_size,
            } => classical_size + pq_size,
        }
    }
}

/// ECDH-equivalent public value size assumed for the classical half of a
/// hybrid key exchange.
fn default_classical_ke_size() -> u32 {
    64
}

/// ECDSA-equivalent signature size assumed for the classical half of a
/// hybrid authentication.
fn default_classical_auth_size() -> u32 {
    96
}

/// Performance profile of one IKEv2 algorithm suite.
///
/// Timing fields are base costs in milliseconds before network scaling and
/// random variance are applied. Immutable once loaded from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSpec {
    pub name: String,
    /// Nominal key size in bits. Informational only.
    pub key_size: u32,
    pub key_gen_time_ms: f64,
    pub verify_time_ms: f64,
    pub key_exchange: KeyExchange,
    pub authentication: Authentication,
}
