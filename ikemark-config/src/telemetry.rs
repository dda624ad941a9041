//! Telemetry and observability configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TelemetryConfig {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Print prometheus text metrics after the run completes.
    #[serde(default)]
    pub dump_metrics: bool,
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            dump_metrics: false,
        }
    }
}
