use data_loader::ShoeType;
use serde::{Deserialize, Serialize};

/// Limits the care rules compare against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareThresholds {
    /// Days without care before a cleaning notification
    pub cleaning_days: i64,
    /// Views needed before a shoe counts as heavily worn
    pub wear_count: usize,
    /// Days without care before a care tip
    pub tip_days: i64,
    /// Humidity (percent) at or above which running shoes need waterproofing
    pub high_humidity: f32,
    /// Temperature (Celsius) below which storage advice is given
    pub cold_temperature: f32,
    /// Expected lifespan in months per shoe type
    pub lifespans: Vec<(ShoeType, f64)>,
    /// Lifespan for types missing from `lifespans`
    pub default_lifespan: f64,
}

impl Default for CareThresholds {
    fn default() -> Self {
        Self {
            cleaning_days: 30,
            wear_count: 10,
            tip_days: 15,
            high_humidity: 70.0,
            cold_temperature: 5.0,
            lifespans: vec![
                (ShoeType::RunningShoe, 6.0),
                (ShoeType::Sneaker, 12.0),
                (ShoeType::DressShoe, 18.0),
            ],
            default_lifespan: 12.0,
        }
    }
}

impl CareThresholds {
    pub fn with_cleaning_days(mut self, days: i64) -> Self {
        self.cleaning_days = days;
        self
    }

    pub fn with_wear_count(mut self, count: usize) -> Self {
        self.wear_count = count;
        self
    }

    pub fn with_tip_days(mut self, days: i64) -> Self {
        self.tip_days = days;
        self
    }

    pub fn with_cold_temperature(mut self, celsius: f32) -> Self {
        self.cold_temperature = celsius;
        self
    }

    /// Set or replace the lifespan of one shoe type
    pub fn with_lifespan(mut self, shoe_type: ShoeType, months: f64) -> Self {
        match self.lifespans.iter_mut().find(|(t, _)| *t == shoe_type) {
            Some(entry) => entry.1 = months,
            None => self.lifespans.push((shoe_type, months)),
        }
        self
    }

    /// Remove a type from the lifespan table so it falls back to the default
    pub fn without_lifespan(mut self, shoe_type: ShoeType) -> Self {
        self.lifespans.retain(|(t, _)| *t != shoe_type);
        self
    }

    pub fn lifespan_months(&self, shoe_type: ShoeType) -> f64 {
        self.lifespans
            .iter()
            .find(|(t, _)| *t == shoe_type)
            .map(|&(_, months)| months)
            .unwrap_or(self.default_lifespan)
    }
}
