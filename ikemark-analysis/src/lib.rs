//! # ikemark-analysis
//!
//! Cross-scenario analysis of a finished benchmark run. Everything here is a
//! pure function over the completed `SimulationResult`; nothing in this crate
//! samples or touches the filesystem. The produced [`AnalysisResult`] keeps
//! its serialized section and field names stable because the report layer and
//! any external tooling key into them directly.
//!
//! ### Key Submodules:
//! - `types`: the serializable analysis sections
//! - `analyzer`: per-scenario, cross-family, ranking, and network-impact passes
//! - `insights`: natural-language summaries of the headline numbers

pub mod analyzer;
pub mod insights;
pub mod types;

pub use analyzer::analyze;
pub use types::AnalysisResult;
