//! Shoe table cleaning.
//!
//! Raw shoe rows become typed [`Shoe`]s in three passes, applied in order:
//! 1. rows with a null `shoe_id`, `type`, `color` or `material` are dropped
//! 2. rows whose normalised attributes are outside the vocabulary are dropped
//! 3. repeated `shoe_id`s are dropped, keeping the first occurrence

use crate::vocabulary::{parse_color, parse_material, parse_shoe_type};
use data_loader::{RawShoe, Shoe, ShoeId};
use std::collections::HashSet;
use tracing::{info, warn};

/// The cleaned table plus how many rows each pass removed
#[derive(Debug, Clone, Default)]
pub struct CleaningReport {
    pub shoes: Vec<Shoe>,
    pub dropped_null: usize,
    pub dropped_invalid: usize,
    pub dropped_duplicate: usize,
}

impl CleaningReport {
    pub fn dropped_total(&self) -> usize {
        self.dropped_null + self.dropped_invalid + self.dropped_duplicate
    }
}

enum RowOutcome {
    Clean(Shoe),
    Null,
    Invalid,
}

fn clean_row(raw: &RawShoe) -> RowOutcome {
    let (Some(shoe_id), Some(shoe_type), Some(color), Some(material)) = (
        raw.shoe_id,
        raw.shoe_type.as_deref(),
        raw.color.as_deref(),
        raw.material.as_deref(),
    ) else {
        return RowOutcome::Null;
    };

    match (
        parse_shoe_type(shoe_type),
        parse_color(color),
        parse_material(material),
    ) {
        (Some(shoe_type), Some(color), Some(material)) => RowOutcome::Clean(Shoe {
            shoe_id,
            brand: raw.brand.clone().unwrap_or_default(),
            model: raw.model.clone().unwrap_or_default(),
            shoe_type,
            color,
            material,
        }),
        _ => RowOutcome::Invalid,
    }
}

/// Clean raw shoe rows into the typed shoe table.
///
/// Idempotent: converting the output back with `RawShoe::from` and cleaning
/// again yields the same table with nothing dropped.
pub fn clean_shoes(raw: &[RawShoe]) -> CleaningReport {
    let mut report = CleaningReport::default();
    let mut seen: HashSet<ShoeId> = HashSet::new();

    for row in raw {
        match clean_row(row) {
            RowOutcome::Null => report.dropped_null += 1,
            RowOutcome::Invalid => report.dropped_invalid += 1,
            RowOutcome::Clean(shoe) => {
                if seen.insert(shoe.shoe_id) {
                    report.shoes.push(shoe);
                } else {
                    report.dropped_duplicate += 1;
                }
            }
        }
    }

    if report.dropped_null > 0 {
        warn!(
            "Dropped {} rows due to null values in type, color, material, or shoe_id",
            report.dropped_null
        );
    }
    if report.dropped_invalid > 0 {
        warn!("Dropped {} rows due to invalid feature values", report.dropped_invalid);
    }
    if report.dropped_duplicate > 0 {
        warn!("Dropped {} rows with duplicate shoe_id values", report.dropped_duplicate);
    }
    info!("Cleaned shoe table: {} of {} rows kept", report.shoes.len(), raw.len());

    report
}
