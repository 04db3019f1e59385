//! Filter to keep only shoes of selected types.
//!
//! Used for outfit/event recommendations: the occasion decides which
//! shoe types are candidates at all.

use crate::occasion::Occasion;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Shoe, ShoeType};

/// Keeps candidates whose type is in an allowed set.
pub struct ShoeTypeFilter {
    allowed: Vec<ShoeType>,
}

impl ShoeTypeFilter {
    pub fn new(allowed: impl IntoIterator<Item = ShoeType>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Allow exactly the shoe types that suit an occasion
    pub fn for_occasion(occasion: Occasion) -> Self {
        Self::new(occasion.shoe_types().iter().copied())
    }
}

impl Filter for ShoeTypeFilter {
    fn name(&self) -> &str {
        "ShoeTypeFilter"
    }

    fn apply(&self, candidates: Vec<Shoe>) -> Result<Vec<Shoe>> {
        let filtered: Vec<Shoe> = candidates
            .into_iter()
            .filter(|shoe| self.allowed.contains(&shoe.shoe_type))
            .collect();
        Ok(filtered)
    }
}
