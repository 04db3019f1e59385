//! DataSet loading and aggregate queries.
//!
//! This module builds the DataSet from the four CSV files and answers the
//! count-style questions the statistics view asks of the raw tables.

use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;
use tracing::info;

impl DataSet {
    /// Load the four tables from a directory
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Check the directory exists
    /// 2. Parse users, shoes, interactions, care history
    /// 3. Insert everything into a fresh DataSet
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(LoadError::DirectoryNotFound {
                path: data_dir.display().to_string(),
            });
        }

        let users = parser::parse_users(&data_dir.join(parser::USERS_FILE))?;
        let shoes = parser::parse_shoes(&data_dir.join(parser::SHOES_FILE))?;
        let interactions = parser::parse_interactions(&data_dir.join(parser::INTERACTIONS_FILE))?;
        let care_history = parser::parse_care_history(&data_dir.join(parser::CARE_HISTORY_FILE))?;

        info!(
            "Data loaded successfully: {} users, {} shoes, {} interactions, {} care records",
            users.len(),
            shoes.len(),
            interactions.len(),
            care_history.len()
        );

        let mut data = DataSet::new();
        for user in users {
            data.insert_user(user);
        }
        for shoe in shoes {
            data.insert_shoe(shoe);
        }
        for interaction in interactions {
            data.insert_interaction(interaction);
        }
        for record in care_history {
            data.insert_care_record(record);
        }
        Ok(data)
    }

    /// Number of interactions per interaction type
    pub fn interaction_type_counts(&self) -> Vec<(InteractionKind, usize)> {
        value_counts(self.interactions.iter().map(|i| i.kind))
    }

    /// The `limit` users with the most interactions
    pub fn most_active_users(&self, limit: usize) -> Vec<(UserId, usize)> {
        let mut counts = value_counts(self.interactions.iter().map(|i| i.user_id));
        counts.truncate(limit);
        counts
    }

    /// The `limit` shoes with the most care records
    pub fn most_cared_for_shoes(&self, limit: usize) -> Vec<(ShoeId, usize)> {
        let mut counts = value_counts(self.care_history.iter().map(|c| c.shoe_id));
        counts.truncate(limit);
        counts
    }
}

/// Count occurrences of each value
///
/// Sorted by descending count; equal counts keep first-seen order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for value in values {
        let slot = *position.entry(value).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
