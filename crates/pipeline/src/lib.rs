//! Feature preparation and candidate filtering for shoe recommendations.
//!
//! This crate provides:
//! - Shoe cleaning against the closed type/color/material vocabularies
//! - IdentityMapping from user/shoe ids to dense indices
//! - InteractionMatrix and ItemFeatureMatrix for the trainer
//! - Filter trait, FilterPipeline and the occasion filter
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{prepare, FilterPipeline, Occasion};
//! use pipeline::filters::ShoeTypeFilter;
//!
//! let prepared = prepare(data.interactions(), data.users(), data.shoes())?;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ShoeTypeFilter::for_occasion(Occasion::Formal));
//! let candidates = pipeline.apply(prepared.shoes.clone())?;
//! ```

pub mod cleaning;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod mapping;
pub mod matrix;
pub mod occasion;
pub mod prepare;
pub mod traits;
pub mod vocabulary;

// Re-export main types
pub use cleaning::{CleaningReport, clean_shoes};
pub use error::PrepareError;
pub use filter_pipeline::FilterPipeline;
pub use mapping::IdentityMapping;
pub use matrix::{InteractionMatrix, ItemFeatureMatrix, SparseMatrix};
pub use occasion::Occasion;
pub use prepare::{PreparedData, prepare};
pub use traits::Filter;
pub use vocabulary::FEATURE_COUNT;
