//! Dense index assignment for users and items.

use data_loader::{ShoeId, UserId};
use std::collections::HashMap;

/// Maps external ids to matrix rows/columns and back.
///
/// Indices are assigned in first-seen order; a repeated id keeps the
/// index of its first appearance.
#[derive(Debug, Clone, Default)]
pub struct IdentityMapping {
    user_index: HashMap<UserId, usize>,
    shoe_ids: Vec<ShoeId>,
    shoe_index: HashMap<ShoeId, usize>,
}

impl IdentityMapping {
    pub fn new<U, S>(users: U, shoes: S) -> Self
    where
        U: IntoIterator<Item = UserId>,
        S: IntoIterator<Item = ShoeId>,
    {
        let mut mapping = Self::default();
        for user_id in users {
            let next = mapping.user_index.len();
            mapping.user_index.entry(user_id).or_insert(next);
        }
        for shoe_id in shoes {
            if !mapping.shoe_index.contains_key(&shoe_id) {
                mapping.shoe_index.insert(shoe_id, mapping.shoe_ids.len());
                mapping.shoe_ids.push(shoe_id);
            }
        }
        mapping
    }

    pub fn user_index(&self, user_id: UserId) -> Option<usize> {
        self.user_index.get(&user_id).copied()
    }

    pub fn shoe_index(&self, shoe_id: ShoeId) -> Option<usize> {
        self.shoe_index.get(&shoe_id).copied()
    }

    pub fn shoe_id(&self, index: usize) -> Option<ShoeId> {
        self.shoe_ids.get(index).copied()
    }

    /// Shoe ids in index order
    pub fn shoe_ids(&self) -> &[ShoeId] {
        &self.shoe_ids
    }

    pub fn n_users(&self) -> usize {
        self.user_index.len()
    }

    pub fn n_items(&self) -> usize {
        self.shoe_ids.len()
    }
}
