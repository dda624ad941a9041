use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),
}
