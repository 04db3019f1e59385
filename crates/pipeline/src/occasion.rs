//! Outfits and events a user can shop for.

use data_loader::ShoeType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An outfit or event with the shoe types that suit it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    Casual,
    Formal,
    Sports,
    Wedding,
    Workout,
    Party,
}

impl Occasion {
    pub const ALL: &'static [Occasion] = &[
        Occasion::Casual,
        Occasion::Formal,
        Occasion::Sports,
        Occasion::Wedding,
        Occasion::Workout,
        Occasion::Party,
    ];

    /// Shoe types worn for this occasion
    pub fn shoe_types(&self) -> &'static [ShoeType] {
        match self {
            Occasion::Casual => &[ShoeType::Sneaker],
            Occasion::Formal | Occasion::Wedding => &[ShoeType::DressShoe],
            Occasion::Sports => &[ShoeType::RunningShoe],
            Occasion::Workout => &[ShoeType::RunningShoe, ShoeType::Sneaker],
            Occasion::Party => &[ShoeType::DressShoe, ShoeType::Sneaker],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Formal => "Formal",
            Occasion::Sports => "Sports",
            Occasion::Wedding => "Wedding",
            Occasion::Workout => "Workout",
            Occasion::Party => "Party",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = String;

    /// Case-insensitive: "wedding" and "Wedding" both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occasion::ALL
            .iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown occasion '{}'", s))
    }
}
