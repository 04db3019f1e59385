//! # Shoe Engine
//!
//! Built once at startup, then used by shared reference:
//! 1. Load the four tables
//! 2. Clean shoes and build the matrices
//! 3. Train the model (a failure only disables recommendations)
//!
//! Every later call reads the engine without mutating it.

use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{info, instrument, warn};

use care::{ServiceReport, WeatherCondition};
use data_loader::{DataSet, Shoe, User, UserId};
use model::{LatentFactorModel, TrainError};
use pipeline::filters::ShoeTypeFilter;
use pipeline::{CleaningReport, FilterPipeline, Occasion, PreparedData};

use crate::config::EngineConfig;
use crate::error::{CallError, EngineError};
use crate::preview::{self, Preview};
use crate::recommender::{self, Recommendation};
use crate::stats::{self, Statistics};

/// Whether recommendation operations can run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ModelStatus {
    Ready,
    Unavailable(String),
}

/// Loaded data, prepared features and the trained model
pub struct ShoeEngine {
    data: DataSet,
    prepared: PreparedData,
    model: Result<LatentFactorModel, TrainError>,
    config: EngineConfig,
}

impl ShoeEngine {
    /// Load the CSV tables from `data_dir` and build the engine
    pub fn load(data_dir: &Path, config: EngineConfig) -> Result<Self, EngineError> {
        info!("Loading data from {:?}", data_dir);
        let data = DataSet::load_from_dir(data_dir)?;
        Self::from_dataset(data, config)
    }

    /// Build the engine from tables already in memory
    pub fn from_dataset(data: DataSet, config: EngineConfig) -> Result<Self, EngineError> {
        let start_time = Instant::now();

        let prepared = pipeline::prepare(data.interactions(), data.users(), data.shoes())?;
        let model = model::train(&prepared.interactions, &prepared.item_features, &config.training);
        match &model {
            Ok(_) => info!("Model ready"),
            Err(e) => warn!("Model training failed, recommendations disabled: {}", e),
        }

        info!("Engine built in {:.2?}", start_time.elapsed());
        Ok(Self {
            data,
            prepared,
            model,
            config,
        })
    }

    pub fn model_status(&self) -> ModelStatus {
        match &self.model {
            Ok(_) => ModelStatus::Ready,
            Err(e) => ModelStatus::Unavailable(e.to_string()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn trained_model(&self) -> Result<&LatentFactorModel, CallError> {
        self.model.as_ref().map_err(|e| CallError::ModelUnavailable {
            reason: e.to_string(),
        })
    }

    /// Top `n` shoes for a user among all cleaned shoes
    #[instrument(skip(self))]
    pub fn recommend(&self, user_id: UserId, n: usize) -> Result<Vec<Recommendation>, CallError> {
        let model = self.trained_model()?;
        recommender::recommend(model, &self.prepared.mapping, user_id, &self.prepared.shoes, n)
    }

    /// Top `n` shoes for a user among the types that suit an occasion
    #[instrument(skip(self))]
    pub fn recommend_for_occasion(
        &self,
        user_id: UserId,
        occasion: Occasion,
        n: usize,
    ) -> Result<Vec<Recommendation>, CallError> {
        let model = self.trained_model()?;

        let candidates = FilterPipeline::new()
            .add_filter(ShoeTypeFilter::for_occasion(occasion))
            .apply(self.prepared.shoes.clone())
            .map_err(|e| CallError::Filter(e.to_string()))?;
        info!(
            "{} candidates suit {} (types: {:?})",
            candidates.len(),
            occasion,
            occasion.shoe_types()
        );

        recommender::recommend(model, &self.prepared.mapping, user_id, &candidates, n)
    }

    /// Cleaning notifications and replacement suggestions as of now
    pub fn personalized_services(&self, weather: WeatherCondition) -> ServiceReport {
        self.personalized_services_at(weather, Local::now().naive_local())
    }

    pub fn personalized_services_at(
        &self,
        weather: WeatherCondition,
        now: NaiveDateTime,
    ) -> ServiceReport {
        care::notifications_and_replacements(
            self.data.care_history(),
            &self.prepared.shoes,
            self.data.interactions(),
            weather,
            &self.config.thresholds,
            now,
        )
    }

    /// Care tips as of now, optionally for one user only
    pub fn care_tips(&self, weather: WeatherCondition, user_filter: Option<UserId>) -> Vec<String> {
        self.care_tips_at(weather, user_filter, Local::now().naive_local())
    }

    pub fn care_tips_at(
        &self,
        weather: WeatherCondition,
        user_filter: Option<UserId>,
        now: NaiveDateTime,
    ) -> Vec<String> {
        care::care_tips(
            self.data.users(),
            self.data.care_history(),
            &self.prepared.shoes,
            weather,
            &self.config.thresholds,
            now,
            user_filter,
        )
    }

    pub fn statistics(&self) -> Statistics {
        stats::compute(&self.data, &self.prepared.shoes)
    }

    /// First `rows` records of each table
    pub fn preview(&self, rows: usize) -> Preview {
        preview::build(&self.data, &self.prepared.shoes, rows)
    }

    pub fn users(&self) -> &[User] {
        self.data.users()
    }

    /// Cleaned shoes in model index order
    pub fn shoes(&self) -> &[Shoe] {
        &self.prepared.shoes
    }

    pub fn cleaning_report(&self) -> &CleaningReport {
        &self.prepared.cleaning
    }
}
