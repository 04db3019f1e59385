use care::CareThresholds;
use model::TrainingConfig;
use serde::{Deserialize, Serialize};

/// Everything the engine is configured with at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub training: TrainingConfig,
    pub thresholds: CareThresholds,
    /// Recommendations returned when the caller gives no limit
    pub default_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            training: TrainingConfig::default(),
            thresholds: CareThresholds::default(),
            default_limit: 5,
        }
    }
}

impl EngineConfig {
    pub fn with_training(mut self, training: TrainingConfig) -> Self {
        self.training = training;
        self
    }

    pub fn with_thresholds(mut self, thresholds: CareThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}
