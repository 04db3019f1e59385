//! Per (user, shoe) aggregation of care records and interactions.
//!
//! A pair exists for every distinct (user, shoe) found in the care
//! history. Pairs come out grouped by user in first-seen order, and each
//! user's shoes in first-seen order.

use chrono::NaiveDateTime;
use data_loader::{CareRecord, Interaction, InteractionKind, ShoeId, UserId};
use std::collections::HashMap;

/// What the rules know about one (user, shoe) pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairHistory {
    pub user_id: UserId,
    pub shoe_id: ShoeId,
    pub last_care: NaiveDateTime,
    /// Whole days from `last_care` to now
    pub days_since_care: i64,
    /// Number of views by this user of this shoe
    pub wear_frequency: usize,
    /// Earliest purchase by this user of this shoe
    pub first_purchase: Option<NaiveDateTime>,
}

impl PairHistory {
    /// Fractional 30-day months since the first purchase
    pub fn usage_months(&self, now: NaiveDateTime) -> Option<f64> {
        self.first_purchase
            .map(|bought| (now - bought).num_days() as f64 / 30.0)
    }
}

/// Build the pair histories as of `now`
pub fn pair_histories(
    care_history: &[CareRecord],
    interactions: &[Interaction],
    now: NaiveDateTime,
) -> Vec<PairHistory> {
    let mut user_order: Vec<UserId> = Vec::new();
    let mut shoes_by_user: HashMap<UserId, Vec<ShoeId>> = HashMap::new();
    let mut last_care: HashMap<(UserId, ShoeId), NaiveDateTime> = HashMap::new();

    for record in care_history {
        let key = (record.user_id, record.shoe_id);
        match last_care.get_mut(&key) {
            Some(latest) => {
                if record.timestamp > *latest {
                    *latest = record.timestamp;
                }
            }
            None => {
                last_care.insert(key, record.timestamp);
                shoes_by_user
                    .entry(record.user_id)
                    .or_insert_with(|| {
                        user_order.push(record.user_id);
                        Vec::new()
                    })
                    .push(record.shoe_id);
            }
        }
    }

    let mut views: HashMap<(UserId, ShoeId), usize> = HashMap::new();
    let mut first_purchase: HashMap<(UserId, ShoeId), NaiveDateTime> = HashMap::new();
    for interaction in interactions {
        let key = (interaction.user_id, interaction.shoe_id);
        match interaction.kind {
            InteractionKind::View => *views.entry(key).or_insert(0) += 1,
            InteractionKind::Purchase => {
                first_purchase
                    .entry(key)
                    .and_modify(|earliest| {
                        if interaction.timestamp < *earliest {
                            *earliest = interaction.timestamp;
                        }
                    })
                    .or_insert(interaction.timestamp);
            }
            InteractionKind::Wishlist => {}
        }
    }

    let mut pairs = Vec::with_capacity(last_care.len());
    for user_id in user_order {
        for &shoe_id in &shoes_by_user[&user_id] {
            let key = (user_id, shoe_id);
            let last = last_care[&key];
            pairs.push(PairHistory {
                user_id,
                shoe_id,
                last_care: last,
                days_since_care: (now - last).num_days(),
                wear_frequency: views.get(&key).copied().unwrap_or(0),
                first_purchase: first_purchase.get(&key).copied(),
            });
        }
    }
    pairs
}
