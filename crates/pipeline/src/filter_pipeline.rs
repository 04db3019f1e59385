use crate::traits::Filter;
use anyhow::Result;
use data_loader::Shoe;
use tracing::debug;

/// Filters applied one after another; a shoe must pass all of them.
///
/// ```ignore
/// let candidates = FilterPipeline::new()
///     .add_filter(ShoeTypeFilter::for_occasion(Occasion::Wedding))
///     .apply(prepared.shoes.clone())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in insertion order, stopping at the first error
    pub fn apply(&self, candidates: Vec<Shoe>) -> Result<Vec<Shoe>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current)?;
            debug!("{} kept {} of {} shoes", filter.name(), current.len(), before);
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
