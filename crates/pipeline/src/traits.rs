//! Candidate filter trait.

use anyhow::Result;
use data_loader::Shoe;

/// Narrows a set of candidate shoes.
///
/// Kept shoes must stay in their input order.
pub trait Filter: Send + Sync {
    /// Name used in debug logs
    fn name(&self) -> &str;

    fn apply(&self, candidates: Vec<Shoe>) -> Result<Vec<Shoe>>;
}
