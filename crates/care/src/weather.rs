//! Weather conditions and the readings derived from them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown weather condition '{0}' (expected Sunny, Rainy, Humid or Cold)")]
pub struct ParseWeatherError(pub String);

/// Current weather as chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Rainy,
    Humid,
    Cold,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Rainy,
        WeatherCondition::Humid,
        WeatherCondition::Cold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Humid => "Humid",
            WeatherCondition::Cold => "Cold",
        }
    }

    /// Rainy and humid weather both call for cleaning
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherCondition::Rainy | WeatherCondition::Humid)
    }

    /// Humidity and temperature assumed for this condition
    pub fn reading(&self) -> WeatherReading {
        let humidity = match self {
            WeatherCondition::Humid => 70.0,
            _ => 40.0,
        };
        let temperature = match self {
            WeatherCondition::Cold => 5.0,
            _ => 20.0,
        };
        WeatherReading {
            condition: *self,
            humidity,
            temperature,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = ParseWeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseWeatherError(s.to_string()))
    }
}

/// Derived weather values, percent humidity and degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherReading {
    pub condition: WeatherCondition,
    pub humidity: f32,
    pub temperature: f32,
}
