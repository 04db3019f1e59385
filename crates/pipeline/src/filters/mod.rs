//! Filter implementations for the candidate pipeline.
//!
//! This module contains the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod shoe_type;

// Re-export for convenience
pub use shoe_type::ShoeTypeFilter;
