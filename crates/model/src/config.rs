use serde::{Deserialize, Serialize};

use crate::error::TrainError;

/// Hyperparameters for the latent-factor model.
///
/// Defaults: three factors, three epochs, one negative per positive and a
/// fixed seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Latent dimensions per embedding
    pub components: usize,
    pub learning_rate: f32,
    pub epochs: usize,
    /// L2 penalty applied on every update
    pub regularization: f32,
    /// Unobserved items sampled per observed interaction
    pub negatives_per_positive: usize,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            components: 3,
            learning_rate: 0.01,
            epochs: 3,
            regularization: 0.0,
            negatives_per_positive: 1,
            seed: 42,
        }
    }
}

impl TrainingConfig {
    pub fn with_components(mut self, components: usize) -> Self {
        self.components = components;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_regularization(mut self, regularization: f32) -> Self {
        self.regularization = regularization;
        self
    }

    pub fn with_negatives_per_positive(mut self, negatives: usize) -> Self {
        self.negatives_per_positive = negatives;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), TrainError> {
        if self.components == 0 {
            return Err(TrainError::InvalidConfig("components must be at least 1".to_string()));
        }
        if self.epochs == 0 {
            return Err(TrainError::InvalidConfig("epochs must be at least 1".to_string()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(TrainError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if !(self.regularization.is_finite() && self.regularization >= 0.0) {
            return Err(TrainError::InvalidConfig(format!(
                "regularization must be non-negative, got {}",
                self.regularization
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrainingConfig::default();
        assert_eq!(config.components, 3);
        assert_eq!(config.epochs, 3);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(TrainingConfig::default().with_components(0).validate().is_err());
        assert!(TrainingConfig::default().with_epochs(0).validate().is_err());
        assert!(TrainingConfig::default().with_learning_rate(-1.0).validate().is_err());
        assert!(TrainingConfig::default().with_regularization(f32::NAN).validate().is_err());
    }
}
