//! Card collections with random draws and shuffles.
//!
//! A `CardCollection` keeps two views of its cards:
//! - the working sequence, which draws shrink and shuffles reorder
//! - a title-sorted snapshot taken at construction, used for reporting
//!   and deck validation, which never changes afterwards

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::cards::source::into_records;
use crate::cards::Card;
use crate::core::{CardError, CollectionConfig, DeckRng};

/// An ordered multiset of cards.
///
/// ## Usage
///
/// ```
/// use ccg_decks::collection::CardCollection;
/// use serde_json::json;
///
/// let mut collection = CardCollection::from_records(vec![
///     json!({"title": "Sure Gamble"}),
///     json!({"title": "Diesel"}),
///     json!({"title": "Sure Gamble"}),
/// ])
/// .unwrap();
///
/// let hand = collection.draw(2).unwrap();
/// assert_eq!(hand.len(), 2);
/// assert_eq!(collection.len(), 1);
///
/// // The snapshot still lists every card.
/// assert_eq!(collection.pretty_print(), "1x Diesel\n2x Sure Gamble\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCollection {
    /// Working sequence. Draws remove from here, shuffles reorder it.
    cards: Vec<Card>,

    /// Cards sorted by title, fixed at construction.
    snapshot: Vec<Card>,

    rng: DeckRng,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from raw card mappings.
    ///
    /// Fails with `UnrecognizedFormat` on the first record that is not a
    /// card mapping.
    pub fn from_records<I>(records: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_records_with(records, &CollectionConfig::default())
    }

    /// Build a collection from raw card mappings with an explicit config.
    pub fn from_records_with<I>(records: I, config: &CollectionConfig) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Value>,
    {
        let cards = records
            .into_iter()
            .map(Card::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cards_with(cards, config))
    }

    /// Build a collection from a parsed JSON array of card mappings.
    ///
    /// Any other JSON shape fails with `UnrecognizedFormat`.
    pub fn from_value(value: Value) -> Result<Self, CardError> {
        Self::from_value_with(value, &CollectionConfig::default())
    }

    /// Build a collection from a parsed JSON array with an explicit config.
    pub fn from_value_with(value: Value, config: &CollectionConfig) -> Result<Self, CardError> {
        Self::from_records_with(into_records(value)?, config)
    }

    /// Copy another collection's cards and snapshot.
    ///
    /// The copy is independent: drawing from one leaves the other alone.
    #[must_use]
    pub fn from_collection(other: &CardCollection) -> Self {
        Self::from_collection_with(other, &CollectionConfig::default())
    }

    /// Copy another collection with an explicit config.
    #[must_use]
    pub fn from_collection_with(other: &CardCollection, config: &CollectionConfig) -> Self {
        Self {
            cards: other.cards.clone(),
            snapshot: other.snapshot.clone(),
            rng: config.rng(),
        }
    }

    /// Build a collection from cards already in hand, e.g. a previous draw.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self::from_cards_with(cards, &CollectionConfig::default())
    }

    /// Build a collection from cards with an explicit config.
    #[must_use]
    pub fn from_cards_with(cards: Vec<Card>, config: &CollectionConfig) -> Self {
        let mut snapshot = cards.clone();
        snapshot.sort_by(|a, b| a.record().title().cmp(&b.record().title()));

        tracing::debug!(cards = cards.len(), seeded = config.seed.is_some(), "Built card collection");

        Self {
            cards,
            snapshot,
            rng: config.rng(),
        }
    }

    /// Number of cards left in the working sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the working sequence in its current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The title-sorted snapshot taken at construction.
    #[must_use]
    pub fn snapshot(&self) -> &[Card] {
        &self.snapshot
    }

    /// Draw `count` cards uniformly at random, without replacement.
    ///
    /// Drawn cards are removed from the working sequence. The snapshot is
    /// unaffected.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, CardError> {
        let available = self.cards.len();
        if count > available {
            return Err(CardError::InsufficientCards {
                requested: count,
                available,
            });
        }

        let picked = self.rng.sample_indices(available, count);

        // Remove from the back so earlier indices stay valid.
        let mut removal_order = picked.clone();
        removal_order.sort_unstable_by(|a, b| b.cmp(a));
        let mut removed: FxHashMap<usize, Card> = removal_order
            .into_iter()
            .map(|index| (index, self.cards.remove(index)))
            .collect();

        tracing::debug!(drawn = count, remaining = self.cards.len(), "Drew cards");

        Ok(picked
            .iter()
            .filter_map(|index| removed.remove(index))
            .collect())
    }

    /// Draw a single card.
    pub fn draw_one(&mut self) -> Result<Card, CardError> {
        self.draw(1)?
            .pop()
            .ok_or(CardError::InsufficientCards { requested: 1, available: 0 })
    }

    /// Reorder the working sequence uniformly at random.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
        tracing::debug!(cards = self.cards.len(), "Shuffled collection");
    }

    /// List the snapshot as `<count>x <title>` lines, one per title.
    #[must_use]
    pub fn pretty_print(&self) -> String {
        let mut groups: Vec<(Option<&str>, usize)> = Vec::new();

        for card in &self.snapshot {
            let title = card.record().title();
            if let Some((last, count)) = groups.last_mut() {
                if *last == title {
                    *count += 1;
                    continue;
                }
            }
            groups.push((title, 1));
        }

        groups
            .into_iter()
            .map(|(title, count)| format!("{}x {}\n", count, title.unwrap_or("")))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty_print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titled(titles: &[&str]) -> Vec<Value> {
        titles.iter().map(|t| json!({ "title": t })).collect()
    }

    fn seeded(titles: &[&str]) -> CardCollection {
        CardCollection::from_records_with(titled(titles), &CollectionConfig::new().with_seed(42))
            .unwrap()
    }

    #[test]
    fn test_empty() {
        let collection = CardCollection::new();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.pretty_print(), "");
    }

    #[test]
    fn test_size_matches_input() {
        let collection = seeded(&["A", "B", "C"]);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.snapshot().len(), 3);
    }

    #[test]
    fn test_bad_record_fails() {
        let err = CardCollection::from_records(vec![json!({"title": "A"}), json!(7)]).unwrap_err();
        assert!(matches!(err, CardError::UnrecognizedFormat(_)));
    }

    #[test]
    fn test_from_value_requires_array() {
        assert!(CardCollection::from_value(json!([{"title": "A"}])).is_ok());
        assert!(matches!(
            CardCollection::from_value(json!("cards.json")),
            Err(CardError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_working_order_is_input_order() {
        let collection = seeded(&["Zeta", "Alpha", "Mu"]);
        let titles: Vec<_> = collection.iter().map(|c| c.record().title()).collect();
        assert_eq!(titles, vec![Some("Zeta"), Some("Alpha"), Some("Mu")]);

        let sorted: Vec<_> = collection.snapshot().iter().map(|c| c.record().title()).collect();
        assert_eq!(sorted, vec![Some("Alpha"), Some("Mu"), Some("Zeta")]);
    }

    #[test]
    fn test_draw_removes_cards() {
        let mut collection = seeded(&["A", "B", "C", "D", "E"]);
        let drawn = collection.draw(2).unwrap();

        assert_eq!(drawn.len(), 2);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.snapshot().len(), 5);

        // Titles are distinct, so membership is unambiguous.
        for card in &drawn {
            assert!(!collection.iter().any(|c| c.record() == card.record()));
        }
    }

    #[test]
    fn test_draw_too_many() {
        let mut collection = seeded(&["A", "B"]);
        match collection.draw(3) {
            Err(CardError::InsufficientCards { requested, available }) => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected InsufficientCards, got {:?}", other),
        }
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_draw_zero_and_all() {
        let mut collection = seeded(&["A", "B", "C"]);
        assert!(collection.draw(0).unwrap().is_empty());
        assert_eq!(collection.draw(3).unwrap().len(), 3);
        assert!(collection.is_empty());
        assert!(collection.draw_one().is_err());
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let titles = ["A", "B", "C", "D", "E", "F", "G", "H"];
        let a = seeded(&titles).draw(4).unwrap();
        let b = seeded(&titles).draw(4).unwrap();
        let records = |cards: &[Card]| cards.iter().map(|c| c.record().clone()).collect::<Vec<_>>();
        assert_eq!(records(&a[..]), records(&b[..]));
    }

    #[test]
    fn test_shuffle_keeps_snapshot() {
        let mut collection = seeded(&["C", "A", "B", "E", "D", "G", "F", "I", "H", "J"]);
        let titles = |c: &CardCollection| {
            c.snapshot().iter().map(|card| card.record().title().map(str::to_string)).collect::<Vec<_>>()
        };
        let before = titles(&collection);
        collection.shuffle();
        assert_eq!(titles(&collection), before);
        assert_eq!(collection.len(), 10);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = seeded(&["A", "B", "C", "D"]);
        let copy = CardCollection::from_collection(&original);

        original.draw(2).unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn test_from_drawn_cards() {
        let mut collection = seeded(&["A", "B", "C", "D", "E"]);
        let drawn = collection.draw(3).unwrap();
        let hand = CardCollection::from_cards(drawn);
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.snapshot().len(), 3);
    }

    #[test]
    fn test_pretty_print_groups_titles() {
        let collection = seeded(&["Sure Gamble", "Diesel", "Sure Gamble"]);
        assert_eq!(collection.pretty_print(), "1x Diesel\n2x Sure Gamble\n");
        assert_eq!(collection.to_string(), collection.pretty_print());
    }
}
