//! Latent-factor recommendation model.
//!
//! This crate trains a small hybrid matrix-factorisation model in process:
//! - User identity embeddings
//! - Item embeddings built from identity plus type/color/material features
//! - Logistic loss over implicit positives with sampled negatives
//!
//! ## Example Usage
//! ```ignore
//! use model::{train, TrainingConfig};
//!
//! let model = train(&prepared.interactions, &prepared.item_features, &TrainingConfig::default())?;
//! let scores = model.score_all(user_index)?;
//! ```

pub mod config;
pub mod error;
pub mod initializer;
pub mod latent;

pub use config::TrainingConfig;
pub use error::TrainError;
pub use latent::{LatentFactorModel, train};
