use thiserror::Error;

/// Errors that stop feature preparation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    /// Cleaning left no shoe whose attributes could be one-hot encoded
    #[error("No valid feature data available after filtering")]
    NoFeatureData,
}
