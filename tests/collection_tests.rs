//! Card collection integration tests.
//!
//! These tests verify the mutable-bag behavior of collections:
//! - Construction from records, files and other collections
//! - Random draws without replacement
//! - Shuffles that keep membership and the sorted snapshot

use std::path::PathBuf;

use ccg_decks::cards::{parse_source, Card};
use ccg_decks::collection::CardCollection;
use ccg_decks::core::{CardError, CollectionConfig};
use proptest::prelude::*;
use serde_json::{json, Value};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn all_cards() -> CardCollection {
    let records = parse_source(fixture("runner_cards.json")).expect("fixture should load");
    CardCollection::from_records(records).expect("fixture should parse")
}

/// Turn each card face-up and read its title.
fn revealed_titles<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards
        .into_iter()
        .map(|card| {
            let mut card = card.clone();
            card.flip();
            let title = card.view().title().unwrap_or("").to_string();
            title
        })
        .collect()
}

fn titled(count: usize) -> Vec<Value> {
    (0..count).map(|i| json!({ "title": format!("Card {i:02}") })).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_collection_starts_off_empty() {
    let collection = CardCollection::new();
    assert_eq!(collection.len(), 0);
    assert!(collection.iter().next().is_none());
}

#[test]
fn test_init_collection_from_file() {
    let records = parse_source(fixture("runner_cards.json")).unwrap();
    let expected = records.len();
    let collection = CardCollection::from_records(records).unwrap();
    assert_eq!(collection.len(), expected);
    assert_eq!(collection.len(), 46);
}

#[test]
fn test_init_collection_from_drawn_cards() {
    let mut collection = all_cards();
    let drawn = collection.draw(5).unwrap();
    let other = CardCollection::from_cards(drawn);
    assert_eq!(other.len(), 5);
}

#[test]
fn test_init_collection_from_other_collection() {
    let original = all_cards();
    let copy = CardCollection::from_collection(&original);
    assert_eq!(copy.len(), original.len());
    assert_eq!(revealed_titles(copy.snapshot()), revealed_titles(original.snapshot()));
}

#[test]
fn test_unrecognized_inputs() {
    for bad in [json!(42), json!("cards.json"), json!({"title": "Diesel"})] {
        assert!(matches!(
            CardCollection::from_value(bad),
            Err(CardError::UnrecognizedFormat(_))
        ));
    }
    assert!(matches!(
        CardCollection::from_value(json!([{"title": "Diesel"}, ["nested"]])),
        Err(CardError::UnrecognizedFormat(_))
    ));
}

#[test]
fn test_collection_iterable() {
    let collection = all_cards();
    let mut seen = 0;
    for card in &collection {
        assert!(!card.is_face_up());
        seen += 1;
    }
    assert_eq!(seen, collection.len());
}

// =============================================================================
// Draws and shuffles
// =============================================================================

#[test]
fn test_draw_from_collection() {
    let mut collection = all_cards();
    let original_size = collection.len();

    let drawn = collection.draw(40).unwrap();

    assert_eq!(drawn.len(), 40);
    assert_eq!(collection.len(), original_size - 40);
    assert_eq!(collection.snapshot().len(), original_size);
}

#[test]
fn test_draw_more_than_remaining() {
    let mut collection = all_cards();
    let size = collection.len();
    let err = collection.draw(size + 1).unwrap_err();
    assert!(matches!(
        err,
        CardError::InsufficientCards { requested, available } if requested == size + 1 && available == size
    ));
}

#[test]
fn test_shuffle_reorders_collection() {
    let mut collection =
        CardCollection::from_records_with(titled(20), &CollectionConfig::new().with_seed(3)).unwrap();
    let before = revealed_titles(&collection);

    // Twenty distinct cards staying in place ten times running is not a
    // realistic outcome.
    let mut changed = false;
    for _ in 0..10 {
        collection.shuffle();
        let after = revealed_titles(&collection);
        if after != before {
            changed = true;
        }
    }
    assert!(changed);
}

#[test]
fn test_drawn_face_down_cards_do_not_match_guesses() {
    let mut collection = CardCollection::from_records(vec![json!({
        "title": "Hostile Takeover",
        "type_code": "agenda",
        "side_code": "corp",
    })])
    .unwrap();
    let hidden = collection.draw_one().unwrap();
    assert!(!hidden.is_face_up());

    let right_guess = Card::from_raw(json!({
        "title": "Hostile Takeover",
        "type_code": "agenda",
        "side_code": "corp",
    }))
    .unwrap();
    let wrong_guess = Card::from_raw(json!({"title": "Ice Wall"})).unwrap();

    // Comparison answers the same for every face-down guess.
    assert_eq!(hidden == right_guess, hidden == wrong_guess);

    let mut face_up_guess = right_guess.clone();
    face_up_guess.flip();
    assert_ne!(hidden, face_up_guess);
}

#[test]
fn test_pretty_print_counts_titles() {
    let collection = CardCollection::from_records(vec![
        json!({"title": "Sure Gamble"}),
        json!({"title": "Diesel"}),
        json!({"title": "Sure Gamble"}),
    ])
    .unwrap();

    let output = collection.pretty_print();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines, vec!["1x Diesel", "2x Sure Gamble"]);
}

#[test]
fn test_pretty_print_ignores_draws() {
    let mut collection = all_cards();
    let before = collection.pretty_print();
    collection.draw(10).unwrap();
    collection.shuffle();
    assert_eq!(collection.pretty_print(), before);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_size_matches_input(count in 0usize..60) {
        let collection = CardCollection::from_records(titled(count)).unwrap();
        prop_assert_eq!(collection.len(), count);
    }

    #[test]
    fn prop_draw_removes_exactly_drawn(count in 1usize..60, seed in any::<u64>(), frac in 0.0f64..=1.0) {
        let draw = ((count as f64) * frac) as usize;
        let config = CollectionConfig::new().with_seed(seed);
        let mut collection = CardCollection::from_records_with(titled(count), &config).unwrap();

        let drawn = collection.draw(draw).unwrap();

        prop_assert_eq!(drawn.len(), draw);
        prop_assert_eq!(collection.len(), count - draw);
        let remaining = revealed_titles(&collection);
        for title in revealed_titles(&drawn) {
            prop_assert!(!remaining.contains(&title));
        }
    }

    #[test]
    fn prop_shuffle_preserves_membership(count in 0usize..40, seed in any::<u64>()) {
        let config = CollectionConfig::new().with_seed(seed);
        let mut collection = CardCollection::from_records_with(titled(count), &config).unwrap();
        let before = collection.pretty_print();

        collection.shuffle();

        prop_assert_eq!(collection.len(), count);
        let rebuilt = CardCollection::from_cards(collection.iter().cloned().collect());
        prop_assert_eq!(rebuilt.pretty_print(), before);
    }
}
