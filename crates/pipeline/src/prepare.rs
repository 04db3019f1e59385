//! Feature preparation: cleaned shoes, identity mapping, and both matrices.
//!
//! ## Algorithm
//! 1. Clean the raw shoe table
//! 2. Map users (from the user table) and cleaned shoes to dense indices
//! 3. Log orphaned ids in the interactions, then count resolvable ones
//!    into the interaction matrix
//! 4. One-hot encode each cleaned shoe into the item feature matrix

use crate::cleaning::{CleaningReport, clean_shoes};
use crate::error::PrepareError;
use crate::mapping::IdentityMapping;
use crate::matrix::{InteractionMatrix, ItemFeatureMatrix};
use crate::vocabulary::{feature_columns, feature_names};
use data_loader::{Interaction, RawShoe, Shoe, ShoeId, User, UserId};
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// Everything the trainer and the rule engine need from preparation
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub mapping: IdentityMapping,
    pub interactions: InteractionMatrix,
    pub item_features: ItemFeatureMatrix,
    /// Cleaned shoes in index order
    pub shoes: Vec<Shoe>,
    /// Row counts removed while cleaning
    pub cleaning: CleaningReport,
}

impl PreparedData {
    /// Look up a cleaned shoe by id
    pub fn get_shoe(&self, shoe_id: ShoeId) -> Option<&Shoe> {
        self.mapping
            .shoe_index(shoe_id)
            .and_then(|idx| self.shoes.get(idx))
    }
}

/// Run the whole preparation stage.
///
/// # Returns
/// * `Ok(PreparedData)` - Cleaned shoes, mapping and matrices
/// * `Err(PrepareError::NoFeatureData)` - No shoe survived cleaning
#[instrument(
    skip_all,
    fields(users = users.len(), shoes = shoes.len(), interactions = interactions.len())
)]
pub fn prepare(
    interactions: &[Interaction],
    users: &[User],
    shoes: &[RawShoe],
) -> Result<PreparedData, PrepareError> {
    let mut cleaning = clean_shoes(shoes);
    let shoes = std::mem::take(&mut cleaning.shoes);

    let mapping = IdentityMapping::new(
        users.iter().map(|u| u.user_id),
        shoes.iter().map(|s| s.shoe_id),
    );
    info!(
        "Fitting dataset with {} users and {} items",
        mapping.n_users(),
        mapping.n_items()
    );

    log_orphans(interactions, &mapping);

    let interaction_matrix = build_interaction_matrix(interactions, &mapping);
    let sparse = interaction_matrix.as_sparse();
    info!(
        "Interactions matrix shape: {:?}, non-zero entries: {}, density: {:.2}%",
        sparse.shape(),
        sparse.nnz(),
        sparse.density_percent()
    );

    let item_features = build_item_features(&shoes)?;
    info!(
        "Item features built successfully, shape: {:?}, features: {:?}",
        item_features.as_sparse().shape(),
        feature_names()
    );

    Ok(PreparedData {
        mapping,
        interactions: interaction_matrix,
        item_features,
        shoes,
        cleaning,
    })
}

/// Warn about interaction rows pointing at unknown users or shoes.
fn log_orphans(interactions: &[Interaction], mapping: &IdentityMapping) {
    let mut orphan_users: Vec<UserId> = Vec::new();
    let mut orphan_shoes: Vec<ShoeId> = Vec::new();
    let mut seen_users = HashSet::new();
    let mut seen_shoes = HashSet::new();

    for interaction in interactions {
        if mapping.user_index(interaction.user_id).is_none()
            && seen_users.insert(interaction.user_id)
        {
            orphan_users.push(interaction.user_id);
        }
        if mapping.shoe_index(interaction.shoe_id).is_none()
            && seen_shoes.insert(interaction.shoe_id)
        {
            orphan_shoes.push(interaction.shoe_id);
        }
    }

    if !orphan_users.is_empty() {
        warn!(
            "Found {} invalid user_id values in interactions: {:?}",
            orphan_users.len(),
            orphan_users
        );
    }
    if !orphan_shoes.is_empty() {
        warn!(
            "Found {} invalid shoe_id values in interactions: {:?}",
            orphan_shoes.len(),
            orphan_shoes
        );
    }
}

/// Count every interaction whose user and shoe both resolve.
pub fn build_interaction_matrix(
    interactions: &[Interaction],
    mapping: &IdentityMapping,
) -> InteractionMatrix {
    let mut matrix = InteractionMatrix::new(mapping.n_users(), mapping.n_items());
    for interaction in interactions {
        if let (Some(user), Some(item)) = (
            mapping.user_index(interaction.user_id),
            mapping.shoe_index(interaction.shoe_id),
        ) {
            matrix.record(user, item);
        }
    }
    matrix
}

/// One-hot encode cleaned shoes, one row per shoe in index order.
pub fn build_item_features(shoes: &[Shoe]) -> Result<ItemFeatureMatrix, PrepareError> {
    let mut matrix = ItemFeatureMatrix::new(shoes.len());
    for (item, shoe) in shoes.iter().enumerate() {
        matrix.set_features(item, &feature_columns(shoe));
    }
    if matrix.encoded_items() == 0 {
        warn!("No valid feature data to build item features");
        return Err(PrepareError::NoFeatureData);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use data_loader::{InteractionKind, Usage};

    fn user(user_id: UserId) -> User {
        User {
            user_id,
            typical_usage: Usage::Casual,
            preferred_color: "Black".to_string(),
        }
    }

    fn raw_shoe(id: u32, shoe_type: &str) -> RawShoe {
        RawShoe {
            shoe_id: Some(id),
            brand: Some("Acme".to_string()),
            model: Some(format!("Model {}", id)),
            shoe_type: Some(shoe_type.to_string()),
            color: Some("Black".to_string()),
            material: Some("Mesh".to_string()),
        }
    }

    fn interaction(user_id: UserId, shoe_id: ShoeId) -> Interaction {
        Interaction {
            user_id,
            shoe_id,
            kind: InteractionKind::View,
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_prepare_builds_matrices() {
        let users = vec![user(1), user(2)];
        let shoes = vec![raw_shoe(10, "sneaker"), raw_shoe(20, "Dress Shoe"), raw_shoe(30, "clog")];
        let interactions = vec![
            interaction(1, 10),
            interaction(1, 10),
            interaction(2, 20),
            interaction(3, 10),  // unknown user
            interaction(2, 30),  // shoe dropped by cleaning
        ];

        let prepared = prepare(&interactions, &users, &shoes).unwrap();

        assert_eq!(prepared.shoes.len(), 2);
        assert_eq!(prepared.cleaning.dropped_invalid, 1);
        assert_eq!(prepared.interactions.as_sparse().shape(), (2, 2));
        assert_eq!(prepared.interactions.as_sparse().nnz(), 2);
        assert_eq!(prepared.interactions.as_sparse().get(0, 0), 2.0);
        assert_eq!(prepared.item_features.as_sparse().shape(), (2, 10));
        // dress shoe, Black, Mesh
        assert_eq!(prepared.item_features.features_of(1).collect::<Vec<_>>(), vec![2, 3, 8]);
        assert_eq!(prepared.get_shoe(20).unwrap().model, "Model 20");
        assert!(prepared.get_shoe(30).is_none());
    }

    #[test]
    fn test_prepare_without_valid_shoes_fails() {
        let users = vec![user(1)];
        let shoes = vec![raw_shoe(1, "clog")];
        let err = prepare(&[], &users, &shoes).unwrap_err();
        assert_eq!(err, PrepareError::NoFeatureData);
    }

    #[test]
    fn test_prepare_with_no_interactions() {
        let prepared = prepare(&[], &[user(1)], &[raw_shoe(1, "sneaker")]).unwrap();
        assert_eq!(prepared.interactions.as_sparse().nnz(), 0);
        assert_eq!(prepared.mapping.n_users(), 1);
    }
}
