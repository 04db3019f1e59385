//! Dataset summaries: the numbers behind the dashboard charts

use data_loader::{DataSet, Shoe, ShoeId, UserId, value_counts};
use serde::Serialize;

/// How many users and shoes the top lists hold
pub const TOP_LIMIT: usize = 10;

/// Counts sorted by descending count, ties in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub interaction_types: Vec<(String, usize)>,
    pub shoe_types: Vec<(String, usize)>,
    pub most_active_users: Vec<(UserId, usize)>,
    pub most_cared_for_shoes: Vec<(ShoeId, usize)>,
}

pub fn compute(data: &DataSet, shoes: &[Shoe]) -> Statistics {
    Statistics {
        interaction_types: data
            .interaction_type_counts()
            .into_iter()
            .map(|(kind, count)| (kind.as_str().to_string(), count))
            .collect(),
        shoe_types: value_counts(shoes.iter().map(|s| s.shoe_type))
            .into_iter()
            .map(|(t, count)| (t.to_string(), count))
            .collect(),
        most_active_users: data.most_active_users(TOP_LIMIT),
        most_cared_for_shoes: data.most_cared_for_shoes(TOP_LIMIT),
    }
}
