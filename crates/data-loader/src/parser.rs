//! Parser for the four CSV tables.
//!
//! - users.csv: user_id,typical_usage,preferred_color
//! - shoes.csv: shoe_id,brand,model,type,color,material
//! - interactions.csv: user_id,shoe_id,interaction_type,interaction_timestamp
//! - care_history.csv: user_id,shoe_id,care_type,care_timestamp
//!
//! Each table has a `*_from_reader` variant so callers (and tests) can
//! parse from any `Read` without touching the filesystem.

use crate::error::{LoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const USERS_FILE: &str = "users.csv";
pub const SHOES_FILE: &str = "shoes.csv";
pub const INTERACTIONS_FILE: &str = "interactions.csv";
pub const CARE_HISTORY_FILE: &str = "care_history.csv";

/// Deserialize every row of a headed CSV table.
///
/// Column matching is by header name, so a file missing a required column
/// fails on its first row.
fn read_table<T, R>(reader: R, file: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<T>() {
        let row = record.map_err(|e| LoadError::from_csv(file, e))?;
        rows.push(row);
    }
    Ok(rows)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::IoError(e),
    })
}

pub fn parse_users_from_reader<R: Read>(reader: R) -> Result<Vec<User>> {
    read_table(reader, USERS_FILE)
}

pub fn parse_shoes_from_reader<R: Read>(reader: R) -> Result<Vec<RawShoe>> {
    read_table(reader, SHOES_FILE)
}

pub fn parse_interactions_from_reader<R: Read>(reader: R) -> Result<Vec<Interaction>> {
    read_table(reader, INTERACTIONS_FILE)
}

pub fn parse_care_history_from_reader<R: Read>(reader: R) -> Result<Vec<CareRecord>> {
    read_table(reader, CARE_HISTORY_FILE)
}

/// Parse the users.csv file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    parse_users_from_reader(open(path)?)
}

/// Parse the shoes.csv file
///
/// Shoe rows are kept raw: blank cells become `None`, casing is untouched.
pub fn parse_shoes(path: &Path) -> Result<Vec<RawShoe>> {
    parse_shoes_from_reader(open(path)?)
}

/// Parse the interactions.csv file
pub fn parse_interactions(path: &Path) -> Result<Vec<Interaction>> {
    parse_interactions_from_reader(open(path)?)
}

/// Parse the care_history.csv file
pub fn parse_care_history(path: &Path) -> Result<Vec<CareRecord>> {
    parse_care_history_from_reader(open(path)?)
}
