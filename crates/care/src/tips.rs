//! Lifestyle and weather based care tips

use chrono::NaiveDateTime;
use data_loader::{CareRecord, Material, Shoe, ShoeType, Usage, User, UserId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

use crate::history::{PairHistory, pair_histories};
use crate::services::shoe_lookup;
use crate::thresholds::CareThresholds;
use crate::weather::{WeatherCondition, WeatherReading};

/// Evaluate the care tip rules.
///
/// Users are visited in user-table order, each user's cared-for shoes in
/// care-history order. With `user_filter` set only that user's pairs are
/// evaluated.
#[instrument(skip(users, care_history, shoes, thresholds))]
pub fn care_tips(
    users: &[User],
    care_history: &[CareRecord],
    shoes: &[Shoe],
    weather: WeatherCondition,
    thresholds: &CareThresholds,
    now: NaiveDateTime,
    user_filter: Option<UserId>,
) -> Vec<String> {
    let lookup = shoe_lookup(shoes);
    let reading = weather.reading();

    let mut pairs_by_user: HashMap<UserId, Vec<PairHistory>> = HashMap::new();
    for pair in pair_histories(care_history, &[], now) {
        pairs_by_user.entry(pair.user_id).or_default().push(pair);
    }

    let mut tips = Vec::new();
    let mut visited = HashSet::new();
    for user in users {
        if user_filter.is_some_and(|id| id != user.user_id) {
            continue;
        }
        if !visited.insert(user.user_id) {
            continue;
        }
        let Some(pairs) = pairs_by_user.remove(&user.user_id) else {
            continue;
        };

        for pair in pairs {
            let Some(shoe) = lookup.get(&pair.shoe_id) else {
                warn!("Shoe {} not found among cleaned shoes, skipping", pair.shoe_id);
                continue;
            };
            if pair.days_since_care > thresholds.tip_days {
                if let Some(tip) = tip_for(user.typical_usage, shoe, &reading, thresholds) {
                    tips.push(tip);
                }
            }
        }
    }

    let unknown: Vec<UserId> = pairs_by_user
        .keys()
        .copied()
        .filter(|id| user_filter.is_none_or(|wanted| wanted == *id))
        .collect();
    if !unknown.is_empty() {
        debug!("Skipped care history of {} users missing from the user table", unknown.len());
    }

    info!("Generated {} care tips", tips.len());
    tips
}

/// First matching rule for a shoe, if any
pub fn tip_for(
    usage: Usage,
    shoe: &Shoe,
    reading: &WeatherReading,
    thresholds: &CareThresholds,
) -> Option<String> {
    if usage == Usage::Running && shoe.shoe_type == ShoeType::RunningShoe {
        if reading.humidity >= thresholds.high_humidity {
            Some(format!(
                "For your {}, apply a waterproof spray to protect against high humidity.",
                shoe.model
            ))
        } else {
            Some(format!(
                "Use a breathable mesh cleaner for your {} to maintain ventilation.",
                shoe.model
            ))
        }
    } else if usage == Usage::Formal && shoe.material == Material::Leather {
        Some(format!(
            "Polish your {} leather shoes weekly to maintain shine for formal occasions.",
            shoe.model
        ))
    } else if reading.temperature < thresholds.cold_temperature {
        Some(format!(
            "Store your {} in a dry place to prevent cold-weather cracking.",
            shoe.model
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use data_loader::{CareKind, Color, ShoeId};

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-06-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn user(user_id: UserId, typical_usage: Usage) -> User {
        User {
            user_id,
            typical_usage,
            preferred_color: "Black".to_string(),
        }
    }

    fn shoe(shoe_id: ShoeId, shoe_type: ShoeType, material: Material) -> Shoe {
        Shoe {
            shoe_id,
            brand: "Brand".to_string(),
            model: format!("Model {}", shoe_id),
            shoe_type,
            color: Color::White,
            material,
        }
    }

    fn cared(user_id: UserId, shoe_id: ShoeId, days_ago: i64) -> CareRecord {
        CareRecord {
            user_id,
            shoe_id,
            care_type: CareKind::Polish,
            timestamp: now() - Duration::days(days_ago),
        }
    }

    fn tips(
        users: &[User],
        history: &[CareRecord],
        shoes: &[Shoe],
        weather: WeatherCondition,
    ) -> Vec<String> {
        care_tips(users, history, shoes, weather, &CareThresholds::default(), now(), None)
    }

    /// Thresholds under which the Cold reading (5 degrees) counts as cold
    fn chilly() -> CareThresholds {
        CareThresholds::default().with_cold_temperature(10.0)
    }

    #[test]
    fn test_running_tips_depend_on_humidity() {
        let users = vec![user(1, Usage::Running)];
        let shoes = vec![shoe(5, ShoeType::RunningShoe, Material::Mesh)];
        let history = vec![cared(1, 5, 20)];

        assert_eq!(
            tips(&users, &history, &shoes, WeatherCondition::Humid),
            vec!["For your Model 5, apply a waterproof spray to protect against high humidity."]
        );
        assert_eq!(
            tips(&users, &history, &shoes, WeatherCondition::Sunny),
            vec!["Use a breathable mesh cleaner for your Model 5 to maintain ventilation."]
        );
    }

    #[test]
    fn test_formal_leather_and_cold_tips() {
        let users = vec![user(1, Usage::Formal), user(2, Usage::Casual)];
        let shoes = vec![
            shoe(5, ShoeType::DressShoe, Material::Leather),
            shoe(6, ShoeType::Sneaker, Material::Synthetic),
        ];
        let history = vec![cared(2, 6, 20), cared(1, 5, 20)];

        let weather = WeatherCondition::Cold;
        let cold = care_tips(&users, &history, &shoes, weather, &chilly(), now(), None);
        assert_eq!(
            cold,
            vec![
                "Polish your Model 5 leather shoes weekly to maintain shine for formal occasions.",
                "Store your Model 6 in a dry place to prevent cold-weather cracking.",
            ]
        );
        assert_eq!(
            tips(&users, &history, &shoes, WeatherCondition::Sunny),
            vec!["Polish your Model 5 leather shoes weekly to maintain shine for formal occasions."]
        );
    }

    #[test]
    fn test_recent_care_gives_no_tip() {
        let users = vec![user(1, Usage::Formal)];
        let shoes = vec![shoe(5, ShoeType::DressShoe, Material::Leather)];
        let history = vec![cared(1, 5, 15)];
        assert!(tips(&users, &history, &shoes, WeatherCondition::Cold).is_empty());
    }

    #[test]
    fn test_storage_tip_needs_temperature_below_limit() {
        let sneaker = shoe(6, ShoeType::Sneaker, Material::Synthetic);
        let cold = WeatherCondition::Cold.reading();

        let at_limit = tip_for(Usage::Casual, &sneaker, &cold, &CareThresholds::default());
        assert_eq!(at_limit, None);

        let below_limit = tip_for(Usage::Casual, &sneaker, &cold, &chilly());
        assert_eq!(
            below_limit.as_deref(),
            Some("Store your Model 6 in a dry place to prevent cold-weather cracking.")
        );

        let users = vec![user(2, Usage::Casual)];
        let history = vec![cared(2, 6, 20)];
        assert!(tips(&users, &history, &[sneaker], WeatherCondition::Cold).is_empty());
    }

    #[test]
    fn test_unknown_users_and_shoes_are_skipped() {
        let users = vec![user(1, Usage::Casual)];
        let shoes = vec![shoe(5, ShoeType::Sneaker, Material::Mesh)];
        let history = vec![cared(9, 5, 20), cared(1, 99, 20), cared(1, 5, 20)];

        let weather = WeatherCondition::Cold;
        let cold = care_tips(&users, &history, &shoes, weather, &chilly(), now(), None);
        assert_eq!(
            cold,
            vec!["Store your Model 5 in a dry place to prevent cold-weather cracking."]
        );
    }

    #[test]
    fn test_user_filter() {
        let users = vec![user(1, Usage::Casual), user(2, Usage::Casual)];
        let shoes = vec![shoe(5, ShoeType::Sneaker, Material::Mesh)];
        let history = vec![cared(1, 5, 20), cared(2, 5, 20)];

        let only_two = care_tips(
            &users,
            &history,
            &shoes,
            WeatherCondition::Cold,
            &chilly(),
            now(),
            Some(2),
        );
        assert_eq!(only_two.len(), 1);

        let nobody = care_tips(
            &users,
            &history,
            &shoes,
            WeatherCondition::Cold,
            &chilly(),
            now(),
            Some(3),
        );
        assert!(nobody.is_empty());
    }
}
