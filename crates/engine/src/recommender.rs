//! Top-N recommendation from a trained model.
//!
//! ## Algorithm
//! 1. Resolve the user's model index (unknown users get nothing)
//! 2. Score every item the model knows
//! 3. Stable sort by score, highest first, ties by item index
//! 4. Keep items that are in the candidate set
//! 5. Take the first `n`

use data_loader::{Color, Shoe, ShoeId, ShoeType, UserId};
use model::LatentFactorModel;
use pipeline::IdentityMapping;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::error::CallError;

/// A recommended shoe, without its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub shoe_id: ShoeId,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub shoe_type: ShoeType,
    pub color: Color,
}

impl From<&Shoe> for Recommendation {
    fn from(shoe: &Shoe) -> Self {
        Self {
            shoe_id: shoe.shoe_id,
            brand: shoe.brand.clone(),
            model: shoe.model.clone(),
            shoe_type: shoe.shoe_type,
            color: shoe.color,
        }
    }
}

/// Rank `candidates` for `user_id` and return at most `n` of them
#[instrument(skip(model, mapping, candidates), fields(candidates = candidates.len()))]
pub fn recommend(
    model: &LatentFactorModel,
    mapping: &IdentityMapping,
    user_id: UserId,
    candidates: &[Shoe],
    n: usize,
) -> Result<Vec<Recommendation>, CallError> {
    let Some(user_index) = mapping.user_index(user_id) else {
        warn!("User {} not found in the model, returning no recommendations", user_id);
        return Ok(Vec::new());
    };

    let scores = model.score_all(user_index)?;
    let ranked = rank_items(&scores);
    let recommendations: Vec<Recommendation> = pick_candidates(&ranked, mapping, candidates, n)
        .into_iter()
        .map(Recommendation::from)
        .collect();

    debug!(
        "Returning {} recommendations for user {}",
        recommendations.len(),
        user_id
    );
    Ok(recommendations)
}

/// Item indices by score, highest first. Equal scores keep index order.
fn rank_items(scores: &[f32]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    ranked
}

/// Walk the ranking and keep the first `n` items present in `candidates`
fn pick_candidates<'a>(
    ranked: &[usize],
    mapping: &IdentityMapping,
    candidates: &'a [Shoe],
    n: usize,
) -> Vec<&'a Shoe> {
    let by_id: HashMap<ShoeId, &Shoe> = candidates.iter().map(|s| (s.shoe_id, s)).collect();
    ranked
        .iter()
        .filter_map(|&item| mapping.shoe_id(item))
        .filter_map(|shoe_id| by_id.get(&shoe_id).copied())
        .take(n)
        .collect()
}
