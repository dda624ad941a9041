//! # ikemark-core
//!
//! Domain model for IKEv2 handshake performance benchmarking.
//! Holds the algorithm and scenario catalogues, per-iteration sample types,
//! message sizing, and the statistical reduction from samples to per-algorithm
//! records. No I/O and no randomness live here; sampling is driven by
//! `ikemark-simulator` and the finished result set is consumed read-only by
//! `ikemark-analysis`.
//!
//! ### Key Submodules:
//! - `algorithm`: declarative algorithm suites with tagged key-exchange and
//!   authentication descriptors
//! - `sample`: one synthetic handshake measurement, message sizing constants
//! - `stats`: reduction of N samples into an [`AlgorithmStats`] record
//! - `result`: the ordered scenario -> family -> stats containers

pub mod algorithm;
pub mod error;
pub mod network;
pub mod result;
pub mod sample;
pub mod scenario;
pub mod stats;

pub mod prelude {
    pub use crate::algorithm::*;
    pub use crate::error::*;
    pub use crate::network::*;
    pub use crate::result::*;
    pub use crate::sample::*;
    pub use crate::scenario::*;
    pub use crate::stats::*;
}

pub use error::SimulationError;
pub use stats::AlgorithmStats;
