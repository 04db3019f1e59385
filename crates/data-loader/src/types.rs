//! Core domain types for the shoe dataset.
//!
//! This module defines the records loaded from the four input tables,
//! the closed vocabularies for shoe attributes, and `DataSet`, the
//! in-memory store the rest of the workspace reads from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::timestamp;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a shoe
pub type ShoeId = u32;

// =============================================================================
// User-related Types
// =============================================================================

/// A user row from `users.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub typical_usage: Usage,
    pub preferred_color: String,
}

/// How a user typically wears their shoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Running,
    Formal,
    Casual,
}

impl Usage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Running => "running",
            Usage::Formal => "formal",
            Usage::Casual => "casual",
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Shoe-related Types
// =============================================================================

/// A shoe row exactly as it appears in `shoes.csv`.
///
/// Every column may be empty, and the categorical columns are free text
/// until the feature preparer cleans them into a [`Shoe`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawShoe {
    pub shoe_id: Option<ShoeId>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub shoe_type: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
}

/// A cleaned shoe: every categorical attribute is inside its vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub shoe_id: ShoeId,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub shoe_type: ShoeType,
    pub color: Color,
    pub material: Material,
}

impl From<&Shoe> for RawShoe {
    fn from(shoe: &Shoe) -> Self {
        RawShoe {
            shoe_id: Some(shoe.shoe_id),
            brand: Some(shoe.brand.clone()),
            model: Some(shoe.model.clone()),
            shoe_type: Some(shoe.shoe_type.as_str().to_string()),
            color: Some(shoe.color.as_str().to_string()),
            material: Some(shoe.material.as_str().to_string()),
        }
    }
}

/// Generates a closed vocabulary enum with its canonical spellings.
///
/// `ALL` keeps declaration order, which is also the one-hot column order.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value in vocabulary order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical spelling as it appears in cleaned data
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Exact lookup of a canonical spelling
            pub fn from_canonical(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary!(
    /// Shoe category
    ShoeType {
        Sneaker => "sneaker",
        RunningShoe => "running shoe",
        DressShoe => "dress shoe",
    }
);

vocabulary!(
    /// Shoe color
    Color {
        Black => "Black",
        White => "White",
        Blue => "Blue",
        Red => "Red",
    }
);

vocabulary!(
    /// Upper material
    Material {
        Leather => "Leather",
        Mesh => "Mesh",
        Synthetic => "Synthetic",
    }
);

// =============================================================================
// Interaction and Care Types
// =============================================================================

/// Kind of implicit feedback recorded for a (user, shoe) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    View,
    Purchase,
    Wishlist,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::View => "view",
            InteractionKind::Purchase => "purchase",
            InteractionKind::Wishlist => "wishlist",
        }
    }
}

/// A row from `interactions.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub shoe_id: ShoeId,
    #[serde(rename = "interaction_type")]
    pub kind: InteractionKind,
    #[serde(rename = "interaction_timestamp", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

/// Maintenance performed on a shoe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareKind {
    Clean,
    Polish,
    Repair,
}

/// A row from `care_history.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareRecord {
    pub user_id: UserId,
    pub shoe_id: ShoeId,
    pub care_type: CareKind,
    #[serde(rename = "care_timestamp", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

// =============================================================================
// DataSet - the four tables held in memory
// =============================================================================

/// All four input tables, in file order.
///
/// Shoes are kept raw here; cleaning belongs to the feature preparer.
/// Interactions and care records are not checked against users or shoes
/// on insert, so orphaned rows survive until preparation logs them.
#[derive(Debug, Default)]
pub struct DataSet {
    pub(crate) users: Vec<User>,
    /// First row position of each user id
    pub(crate) user_index: HashMap<UserId, usize>,
    pub(crate) shoes: Vec<RawShoe>,
    pub(crate) interactions: Vec<Interaction>,
    pub(crate) care_history: Vec<CareRecord>,
}

impl DataSet {
    /// Creates a new, empty DataSet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn shoes(&self) -> &[RawShoe] {
        &self.shoes
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn care_history(&self) -> &[CareRecord] {
        &self.care_history
    }

    /// Get a user by ID (the first row wins if the id repeats)
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&pos| &self.users[pos])
    }

    pub fn insert_user(&mut self, user: User) {
        self.user_index.entry(user.user_id).or_insert(self.users.len());
        self.users.push(user);
    }

    pub fn insert_shoe(&mut self, shoe: RawShoe) {
        self.shoes.push(shoe);
    }

    pub fn insert_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    pub fn insert_care_record(&mut self, record: CareRecord) {
        self.care_history.push(record);
    }

    /// Row counts as (users, shoes, interactions, care records)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.users.len(),
            self.shoes.len(),
            self.interactions.len(),
            self.care_history.len(),
        )
    }
}
