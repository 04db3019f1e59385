//! The closed feature vocabulary and string normalisation.
//!
//! Ten one-hot columns in a fixed order: the three shoe types, then the
//! four colors, then the three materials.

use data_loader::{Color, Material, Shoe, ShoeType};

/// Width of the item feature space
pub const FEATURE_COUNT: usize = 10;

const COLOR_OFFSET: usize = 3;
const MATERIAL_OFFSET: usize = 7;

/// Feature names in column order
pub fn feature_names() -> Vec<&'static str> {
    ShoeType::ALL
        .iter()
        .map(|t| t.as_str())
        .chain(Color::ALL.iter().map(|c| c.as_str()))
        .chain(Material::ALL.iter().map(|m| m.as_str()))
        .collect()
}

/// Column indices of a shoe's three attributes
pub fn feature_columns(shoe: &Shoe) -> [usize; 3] {
    [
        shoe.shoe_type as usize,
        COLOR_OFFSET + shoe.color as usize,
        MATERIAL_OFFSET + shoe.material as usize,
    ]
}

/// Trim and collapse internal whitespace runs to a single space
fn squash_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase form used for shoe types: " Running  SHOE" -> "running shoe"
pub fn normalize_lowercase(raw: &str) -> String {
    squash_whitespace(raw).to_lowercase()
}

/// Capitalised form used for colors and materials: " bLACK" -> "Black"
pub fn normalize_capitalized(raw: &str) -> String {
    let lower = normalize_lowercase(raw);
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn parse_shoe_type(raw: &str) -> Option<ShoeType> {
    ShoeType::from_canonical(&normalize_lowercase(raw))
}

pub fn parse_color(raw: &str) -> Option<Color> {
    Color::from_canonical(&normalize_capitalized(raw))
}

pub fn parse_material(raw: &str) -> Option<Material> {
    Material::from_canonical(&normalize_capitalized(raw))
}
