//! # Data Loader Crate
//!
//! This crate loads the four shoe tables (users, shoes, interactions,
//! care history) into typed records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (User, RawShoe, Shoe, Interaction, CareRecord, DataSet)
//! - **parser**: Parse CSV files into Rust structs
//! - **index**: Load a whole directory and run count queries
//! - **timestamp**: Timestamp formats shared by the dated tables
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataSet;
//! use std::path::Path;
//!
//! let data = DataSet::load_from_dir(Path::new("data"))?;
//! let (users, shoes, interactions, care) = data.counts();
//! println!("{} users, {} shoes", users, shoes);
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod timestamp;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use index::value_counts;
pub use types::{
    // Type aliases
    ShoeId,
    UserId,
    // Core types
    CareRecord,
    DataSet,
    Interaction,
    RawShoe,
    Shoe,
    User,
    // Enums
    CareKind,
    Color,
    InteractionKind,
    Material,
    ShoeType,
    Usage,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_set_creation() {
        let data = DataSet::new();
        assert_eq!(data.counts(), (0, 0, 0, 0));
    }

    #[test]
    fn test_insert_user() {
        let mut data = DataSet::new();

        data.insert_user(User {
            user_id: 1,
            typical_usage: Usage::Formal,
            preferred_color: "Black".to_string(),
        });
        data.insert_user(User {
            user_id: 1,
            typical_usage: Usage::Casual,
            preferred_color: "Red".to_string(),
        });

        // First row wins for lookups, both rows are kept
        let retrieved = data.get_user(1).unwrap();
        assert_eq!(retrieved.typical_usage, Usage::Formal);
        assert_eq!(data.users().len(), 2);
    }

    #[test]
    fn test_empty_queries() {
        let data = DataSet::new();
        assert!(data.get_user(999).is_none());
        assert!(data.interaction_type_counts().is_empty());
        assert!(data.most_cared_for_shoes(10).is_empty());
    }

    #[test]
    fn test_vocabulary_round_trip_names() {
        for shoe_type in ShoeType::ALL {
            assert_eq!(ShoeType::from_canonical(shoe_type.as_str()), Some(*shoe_type));
        }
        assert_eq!(Color::ALL.len(), 4);
        assert_eq!(Material::from_canonical("leather"), None);
    }

    #[test]
    fn test_raw_shoe_from_clean_shoe() {
        let shoe = Shoe {
            shoe_id: 4,
            brand: "Acme".to_string(),
            model: "Stride 300".to_string(),
            shoe_type: ShoeType::RunningShoe,
            color: Color::Blue,
            material: Material::Mesh,
        };
        let raw = RawShoe::from(&shoe);
        assert_eq!(raw.shoe_type.as_deref(), Some("running shoe"));
        assert_eq!(raw.color.as_deref(), Some("Blue"));
    }
}
