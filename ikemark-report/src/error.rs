//! Error types for report generation

use thiserror::Error;

/// Failures while persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output directory or file could not be written.
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized to JSON.
    #[error("Report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
