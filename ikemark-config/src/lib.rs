//! # Ikemark Configuration System
//!
//! Layered configuration for the benchmark pipeline.
//!
//! ## Hierarchy
//! 1. Built-in defaults (catalogues included, so runs work out of the box)
//! 2. `config/ikemark.yaml`
//! 3. `IKEMARK_*` environment variables (`__` separates nesting levels)

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use ikemark_core::algorithm::AlgorithmCatalog;
use ikemark_core::scenario::Scenario;

pub mod catalog;
mod error;
mod report;
mod simulation;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use report::ReportConfig;
pub use simulation::SimulationConfig;
pub use telemetry::TelemetryConfig;

/// Default configuration file consulted by [`IkemarkConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "config/ikemark.yaml";

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct IkemarkConfig {
    /// Sampling parameters (master seed).
    #[serde(default)]
    #[validate(nested)]
    pub simulation: SimulationConfig,

    /// Logging and metrics behavior.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,

    /// Report output location.
    #[serde(default)]
    #[validate(nested)]
    pub report: ReportConfig,

    /// Crypto families and their suites, in catalogue order.
    #[serde(default = "catalog::default_algorithms")]
    #[validate(custom(function = validation::validate_catalog))]
    pub algorithms: AlgorithmCatalog,

    /// Network scenarios to benchmark, in run order.
    #[serde(default = "catalog::default_scenarios")]
    #[validate(custom(function = validation::validate_scenarios))]
    pub scenarios: Vec<Scenario>,
}

impl Default for IkemarkConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            telemetry: TelemetryConfig::default(),
            report: ReportConfig::default(),
            algorithms: catalog::default_algorithms(),
            scenarios: catalog::default_scenarios(),
        }
    }
}

impl IkemarkConfig {
    /// Load configuration from the default file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(IkemarkConfig::default()));

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            figment = figment.merge(Yaml::file(DEFAULT_CONFIG_FILE));
        } else {
            debug!("{DEFAULT_CONFIG_FILE} not found, using built-in defaults");
        }

        figment
            .merge(Env::prefixed("IKEMARK_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific file, for `--config` overrides and
    /// validation runs. Fields missing from the file keep their defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("IKEMARK_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_validation() {
        let config = IkemarkConfig::default();
        config.validate().expect("Default config should validate");
    }

    #[test]
    fn environment_override() {
        // Override a field via environment variable.
        std::env::set_var("IKEMARK_SIMULATION__SEED", "7");
        let config = IkemarkConfig::load().unwrap();
        std::env::remove_var("IKEMARK_SIMULATION__SEED");
        assert_eq!(config.simulation.seed, 7);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = IkemarkConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn partial_yaml_keeps_field_defaults() {
        let path = std::env::temp_dir().join("ikemark_partial_config.yaml");
        std::fs::write(&path, "report:\n  output_dir: /tmp/ikemark-out\n").unwrap();
        let config = IkemarkConfig::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.report.output_dir, PathBuf::from("/tmp/ikemark-out"));
        // Catalogue fields fall back to the built-in defaults.
        assert_eq!(config.algorithms.len(), 3);
        assert_eq!(config.scenarios.len(), 4);
    }

    #[test]
    fn invalid_scenario_fails_load() {
        let path = std::env::temp_dir().join("ikemark_invalid_config.yaml");
        let yaml = "\
scenarios:
  - name: bad
    network_conditions:
      latency_ms: 10.0
      bandwidth_mbps: 100.0
      jitter_ms: 1.0
      packet_loss_percent: 0.0
    test_parameters:
      handshake_iterations: 0
";
        std::fs::write(&path, yaml).unwrap();
        let err = IkemarkConfig::load_from_path(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
