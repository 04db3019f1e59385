//! Engine crate for the SoleMate shoe assistant.
//!
//! This crate contains the `ShoeEngine` that ties loading, preparation,
//! training, recommendation and the care rules together.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod preview;
pub mod recommender;
pub mod stats;

pub use config::EngineConfig;
pub use error::{CallError, EngineError};
pub use orchestrator::{ModelStatus, ShoeEngine};
pub use preview::{DEFAULT_ROWS, Preview};
pub use recommender::{Recommendation, recommend};
pub use stats::Statistics;
