//! # Care Crate
//!
//! Rule engine for shoe care, independent of the recommendation model.
//!
//! ## Components
//!
//! ### Personalized services
//! - Cleaning notifications for heavily worn shoes in wet weather
//! - Replacement suggestions once a shoe outlives its type's lifespan
//!
//! ### Care tips
//! - Advice picked from the user's typical usage, the shoe and the weather
//!
//! ## Example Usage
//!
//! ```ignore
//! use care::{care_tips, notifications_and_replacements, CareThresholds, WeatherCondition};
//!
//! let now = chrono::Local::now().naive_local();
//! let report = notifications_and_replacements(
//!     data.care_history(),
//!     &prepared.shoes,
//!     data.interactions(),
//!     WeatherCondition::Rainy,
//!     &CareThresholds::default(),
//!     now,
//! );
//! ```

pub mod history;
pub mod services;
pub mod thresholds;
pub mod tips;
pub mod weather;

pub use history::{PairHistory, pair_histories};
pub use services::{ServiceReport, notifications_and_replacements};
pub use thresholds::CareThresholds;
pub use tips::{care_tips, tip_for};
pub use weather::{ParseWeatherError, WeatherCondition, WeatherReading};
