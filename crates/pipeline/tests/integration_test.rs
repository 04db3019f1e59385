//! Integration tests for the pipeline.
//!
//! These tests verify that cleaning, preparation and the occasion filter
//! work together on a small realistic dataset.

use chrono::NaiveDate;
use data_loader::{Interaction, InteractionKind, RawShoe, Shoe, ShoeType, Usage, User};
use pipeline::filters::ShoeTypeFilter;
use pipeline::{FEATURE_COUNT, FilterPipeline, Occasion, PrepareError, clean_shoes, prepare};

fn raw(id: u32, shoe_type: &str, color: &str, material: &str) -> RawShoe {
    RawShoe {
        shoe_id: Some(id),
        brand: Some("Acme".to_string()),
        model: Some(format!("Model {}", id)),
        shoe_type: Some(shoe_type.to_string()),
        color: Some(color.to_string()),
        material: Some(material.to_string()),
    }
}

fn create_test_setup() -> (Vec<User>, Vec<RawShoe>, Vec<Interaction>) {
    let users = vec![
        User {
            user_id: 1,
            typical_usage: Usage::Running,
            preferred_color: "Blue".to_string(),
        },
        User {
            user_id: 2,
            typical_usage: Usage::Formal,
            preferred_color: "Black".to_string(),
        },
    ];

    let shoes = vec![
        raw(10, "running shoe", "Blue", "Mesh"),
        raw(11, " Sneaker", "white", "SYNTHETIC"),
        raw(12, "dress shoe", "Black", "Leather"),
        raw(13, "sandal", "Black", "Leather"),
        raw(10, "sneaker", "Red", "Mesh"),
        RawShoe {
            shoe_id: Some(14),
            ..RawShoe::default()
        },
    ];

    let at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let interactions = vec![
        Interaction { user_id: 1, shoe_id: 10, kind: InteractionKind::View, timestamp: at },
        Interaction { user_id: 1, shoe_id: 10, kind: InteractionKind::Purchase, timestamp: at },
        Interaction { user_id: 2, shoe_id: 12, kind: InteractionKind::Wishlist, timestamp: at },
        Interaction { user_id: 3, shoe_id: 12, kind: InteractionKind::View, timestamp: at },
        Interaction { user_id: 2, shoe_id: 13, kind: InteractionKind::View, timestamp: at },
    ];

    (users, shoes, interactions)
}

#[test]
fn test_prepare_end_to_end() {
    let (users, shoes, interactions) = create_test_setup();
    let prepared = prepare(&interactions, &users, &shoes).unwrap();

    let ids: Vec<u32> = prepared.shoes.iter().map(|s| s.shoe_id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(prepared.cleaning.dropped_null, 1);
    assert_eq!(prepared.cleaning.dropped_invalid, 1);
    assert_eq!(prepared.cleaning.dropped_duplicate, 1);

    // Repeated interactions count up; orphans are left out
    let sparse = prepared.interactions.as_sparse();
    assert_eq!(sparse.shape(), (2, 3));
    assert_eq!(sparse.get(0, 0), 2.0);
    assert_eq!(sparse.get(1, 2), 1.0);
    assert_eq!(sparse.nnz(), 2);

    assert_eq!(prepared.item_features.n_features(), FEATURE_COUNT);
    assert_eq!(prepared.item_features.encoded_items(), 3);
    assert_eq!(prepared.item_features.features_of(0).count(), 3);

    assert_eq!(prepared.get_shoe(11).unwrap().shoe_type, ShoeType::Sneaker);
    assert!(prepared.get_shoe(13).is_none());
}

#[test]
fn test_cleaning_is_idempotent() {
    let (_, shoes, _) = create_test_setup();
    let first = clean_shoes(&shoes);
    let round_trip: Vec<RawShoe> = first.shoes.iter().map(RawShoe::from).collect();
    let second = clean_shoes(&round_trip);

    assert_eq!(second.shoes, first.shoes);
    assert_eq!(second.dropped_total(), 0);
}

#[test]
fn test_no_valid_shoes_is_an_error() {
    let (users, _, interactions) = create_test_setup();
    let shoes = vec![raw(1, "boot", "Green", "Suede")];
    let err = prepare(&interactions, &users, &shoes).unwrap_err();
    assert_eq!(err, PrepareError::NoFeatureData);
}

#[test]
fn test_occasion_filter_over_prepared_shoes() {
    let (users, shoes, interactions) = create_test_setup();
    let prepared = prepare(&interactions, &users, &shoes).unwrap();

    let filtered = |occasion: Occasion| -> Vec<Shoe> {
        FilterPipeline::new()
            .add_filter(ShoeTypeFilter::for_occasion(occasion))
            .apply(prepared.shoes.clone())
            .unwrap()
    };

    let party: Vec<u32> = filtered(Occasion::Party).iter().map(|s| s.shoe_id).collect();
    assert_eq!(party, vec![11, 12]);

    let sports: Vec<u32> = filtered(Occasion::Sports).iter().map(|s| s.shoe_id).collect();
    assert_eq!(sports, vec![10]);

    assert!(filtered(Occasion::Casual).iter().all(|s| s.shoe_type == ShoeType::Sneaker));
}
