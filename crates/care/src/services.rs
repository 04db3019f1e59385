//! Cleaning notifications and replacement suggestions

use chrono::NaiveDateTime;
use data_loader::{CareRecord, Interaction, Shoe, ShoeId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

use crate::history::pair_histories;
use crate::thresholds::CareThresholds;
use crate::weather::WeatherCondition;

/// Output of the personalized services rules
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceReport {
    pub notifications: Vec<String>,
    pub replacements: Vec<String>,
}

impl ServiceReport {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty() && self.replacements.is_empty()
    }
}

/// Index shoes by id, keeping the first row for a repeated id
pub(crate) fn shoe_lookup(shoes: &[Shoe]) -> HashMap<ShoeId, &Shoe> {
    let mut lookup = HashMap::with_capacity(shoes.len());
    for shoe in shoes {
        lookup.entry(shoe.shoe_id).or_insert(shoe);
    }
    lookup
}

/// Evaluate the cleaning and replacement rules for every cared-for pair
#[instrument(skip(care_history, shoes, interactions, thresholds))]
pub fn notifications_and_replacements(
    care_history: &[CareRecord],
    shoes: &[Shoe],
    interactions: &[Interaction],
    weather: WeatherCondition,
    thresholds: &CareThresholds,
    now: NaiveDateTime,
) -> ServiceReport {
    let lookup = shoe_lookup(shoes);
    let mut report = ServiceReport::default();

    for pair in pair_histories(care_history, interactions, now) {
        let Some(shoe) = lookup.get(&pair.shoe_id) else {
            warn!("Shoe {} not found among cleaned shoes, skipping", pair.shoe_id);
            continue;
        };
        let heavily_worn = pair.wear_frequency > thresholds.wear_count;

        if pair.days_since_care > thresholds.cleaning_days && heavily_worn && weather.is_wet() {
            report.notifications.push(format!(
                "Time to clean your {} due to frequent use and {} conditions!",
                shoe.model, weather
            ));
        }

        if let Some(months) = pair.usage_months(now) {
            if months > thresholds.lifespan_months(shoe.shoe_type) && heavily_worn {
                report.replacements.push(format!(
                    "Consider replacing your {} due to extensive use.",
                    shoe.model
                ));
            }
        }
    }

    info!(
        "Generated {} notifications and {} replacements",
        report.notifications.len(),
        report.replacements.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use data_loader::{CareKind, Color, InteractionKind, Material, ShoeType};

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-06-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn shoe(shoe_id: ShoeId, shoe_type: ShoeType) -> Shoe {
        Shoe {
            shoe_id,
            brand: "Nike".to_string(),
            model: format!("Model {}", shoe_id),
            shoe_type,
            color: Color::Black,
            material: Material::Mesh,
        }
    }

    fn cared(days_ago: i64) -> Vec<CareRecord> {
        vec![CareRecord {
            user_id: 1,
            shoe_id: 7,
            care_type: CareKind::Clean,
            timestamp: now() - Duration::days(days_ago),
        }]
    }

    fn views(count: usize) -> Vec<Interaction> {
        (0..count)
            .map(|i| Interaction {
                user_id: 1,
                shoe_id: 7,
                kind: InteractionKind::View,
                timestamp: now() - Duration::days(i as i64),
            })
            .collect()
    }

    fn purchase(days_ago: i64) -> Interaction {
        Interaction {
            user_id: 1,
            shoe_id: 7,
            kind: InteractionKind::Purchase,
            timestamp: now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_cleaning_notification_needs_wet_weather() {
        let shoes = vec![shoe(7, ShoeType::Sneaker)];
        let thresholds = CareThresholds::default();

        let rainy = notifications_and_replacements(
            &cared(40),
            &shoes,
            &views(15),
            WeatherCondition::Rainy,
            &thresholds,
            now(),
        );
        assert_eq!(
            rainy.notifications,
            vec!["Time to clean your Model 7 due to frequent use and Rainy conditions!"]
        );

        let sunny = notifications_and_replacements(
            &cared(40),
            &shoes,
            &views(15),
            WeatherCondition::Sunny,
            &thresholds,
            now(),
        );
        assert!(sunny.notifications.is_empty());
    }

    #[test]
    fn test_cleaning_thresholds_are_strict() {
        let shoes = vec![shoe(7, ShoeType::Sneaker)];
        let thresholds = CareThresholds::default();

        let recent = notifications_and_replacements(
            &cared(30),
            &shoes,
            &views(15),
            WeatherCondition::Humid,
            &thresholds,
            now(),
        );
        assert!(recent.notifications.is_empty());

        let few_views = notifications_and_replacements(
            &cared(40),
            &shoes,
            &views(10),
            WeatherCondition::Humid,
            &thresholds,
            now(),
        );
        assert!(few_views.notifications.is_empty());
    }

    #[test]
    fn test_replacement_by_lifespan() {
        let shoes = vec![shoe(7, ShoeType::Sneaker)];
        let thresholds = CareThresholds::default();

        let mut young = views(12);
        young.push(purchase(8 * 30));
        let report = notifications_and_replacements(
            &cared(5),
            &shoes,
            &young,
            WeatherCondition::Sunny,
            &thresholds,
            now(),
        );
        assert!(report.replacements.is_empty());

        let mut old = views(12);
        old.push(purchase(13 * 30));
        let report = notifications_and_replacements(
            &cared(5),
            &shoes,
            &old,
            WeatherCondition::Sunny,
            &thresholds,
            now(),
        );
        assert_eq!(
            report.replacements,
            vec!["Consider replacing your Model 7 due to extensive use."]
        );
    }

    #[test]
    fn test_no_purchase_means_no_replacement_check() {
        let shoes = vec![shoe(7, ShoeType::RunningShoe)];
        let report = notifications_and_replacements(
            &cared(400),
            &shoes,
            &views(50),
            WeatherCondition::Sunny,
            &CareThresholds::default(),
            now(),
        );
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_shoe_is_skipped() {
        let report = notifications_and_replacements(
            &cared(40),
            &[],
            &views(15),
            WeatherCondition::Rainy,
            &CareThresholds::default(),
            now(),
        );
        assert!(report.is_empty());
    }
}
