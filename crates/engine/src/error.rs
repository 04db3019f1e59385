use data_loader::LoadError;
use model::TrainError;
use pipeline::PrepareError;
use thiserror::Error;

/// Fatal errors while building the engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to load data: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to prepare features: {0}")]
    Prepare(#[from] PrepareError),
}

/// Errors returned by a single engine operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("Recommendation model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Scoring failed: {0}")]
    Scoring(#[from] TrainError),

    #[error("Candidate filtering failed: {0}")]
    Filter(String),
}
