//! Decks - collections built around an identity card.
//!
//! Building a `Deck` is all-or-nothing: either exactly one identity is
//! found, the limits are read off it and every rule has run, or an error
//! comes back and no deck exists.

use serde_json::Value;

use super::rules::{self, RuleContext, RuleSet, ValidationReport};
use crate::cards::Card;
use crate::collection::CardCollection;
use crate::core::{CardError, CollectionConfig};

/// A card collection with an identity and its validation results.
///
/// ## Example
///
/// ```
/// use ccg_decks::deck::Deck;
/// use serde_json::json;
///
/// let deck = Deck::from_records(vec![
///     json!({
///         "title": "Noise: Hacker Extraordinaire",
///         "type_code": "identity",
///         "side_code": "runner",
///         "influencelimit": 15,
///         "minimumdecksize": 2,
///     }),
///     json!({"title": "Sure Gamble", "side_code": "runner"}),
/// ])
/// .unwrap();
///
/// assert!(deck.valid());
/// assert_eq!(deck.influence_limit(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    collection: CardCollection,
    identity: Card,
    influence_limit: i64,
    min_deck_size: i64,
    side: Option<String>,
    report: ValidationReport,
}

impl Deck {
    /// Build a deck from raw card mappings with the standard rules.
    pub fn from_records<I>(records: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_collection(CardCollection::from_records(records)?)
    }

    /// Build a deck from a parsed JSON array with the standard rules.
    pub fn from_value(value: Value) -> Result<Self, CardError> {
        Self::from_collection(CardCollection::from_value(value)?)
    }

    /// Build a deck from raw card mappings with an explicit config.
    pub fn from_records_with<I>(records: I, config: &CollectionConfig) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_collection(CardCollection::from_records_with(records, config)?)
    }

    /// Turn a collection into a deck with the standard rules.
    pub fn from_collection(collection: CardCollection) -> Result<Self, CardError> {
        Self::with_rules(collection, &RuleSet::standard())
    }

    /// Turn a collection into a deck, checking it against `rules`.
    ///
    /// Fails with `NoIdentityFound` unless the collection holds exactly
    /// one identity card.
    pub fn with_rules(collection: CardCollection, rules: &RuleSet) -> Result<Self, CardError> {
        let identity = find_identity(collection.snapshot())?.clone();

        let record = identity.record();
        // Missing limits mean no influence may be spent and no size minimum.
        let influence_limit = record.influence_limit().unwrap_or(0);
        let min_deck_size = record.minimum_deck_size().unwrap_or(0);
        let side = record.side_code().map(str::to_string);

        let report = rules.evaluate(&RuleContext::new(
            collection.snapshot(),
            &identity,
            influence_limit,
            min_deck_size,
        ));

        let title = record.title().unwrap_or("");
        if report.is_valid() {
            tracing::info!(identity = title, cards = collection.len(), "Deck is valid");
        } else {
            tracing::warn!(
                identity = title,
                cards = collection.len(),
                failed = ?report.failures(),
                "Deck failed validation"
            );
        }

        Ok(Self {
            collection,
            identity,
            influence_limit,
            min_deck_size,
            side,
            report,
        })
    }

    /// Whether every rule passed at construction.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Per-rule results from construction.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    #[must_use]
    pub fn identity(&self) -> &Card {
        &self.identity
    }

    #[must_use]
    pub fn influence_limit(&self) -> i64 {
        self.influence_limit
    }

    #[must_use]
    pub fn min_deck_size(&self) -> i64 {
        self.min_deck_size
    }

    /// `side_code` of the identity.
    #[must_use]
    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    /// Total influence the deck spends.
    #[must_use]
    pub fn influence_spent(&self) -> i64 {
        self.context().influence_spent()
    }

    // === Individual rules ===

    #[must_use]
    pub fn validate_deck_size(&self) -> bool {
        rules::check_deck_size(&self.context())
    }

    #[must_use]
    pub fn validate_has_only_one_identity(&self) -> bool {
        rules::check_single_identity(&self.context())
    }

    #[must_use]
    pub fn validate_composition(&self) -> bool {
        rules::check_composition(&self.context())
    }

    #[must_use]
    pub fn validate_influence(&self) -> bool {
        rules::check_influence(&self.context())
    }

    #[must_use]
    pub fn validate_agenda_points(&self) -> bool {
        rules::check_agenda_points(&self.context())
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new(
            self.collection.snapshot(),
            &self.identity,
            self.influence_limit,
            self.min_deck_size,
        )
    }

    // === Collection access ===

    #[must_use]
    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.collection.iter()
    }

    /// Draw cards from the deck. Validation results are unaffected.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, CardError> {
        self.collection.draw(count)
    }

    pub fn shuffle(&mut self) {
        self.collection.shuffle();
    }

    #[must_use]
    pub fn pretty_print(&self) -> String {
        self.collection.pretty_print()
    }
}

/// Locate the only identity card among `cards`.
fn find_identity(cards: &[Card]) -> Result<&Card, CardError> {
    let identities: Vec<&Card> = cards
        .iter()
        .filter(|card| card.record().is_identity())
        .collect();
    match identities.as_slice() {
        [identity] => Ok(*identity),
        _ => Err(CardError::NoIdentityFound {
            found: identities.len(),
        }),
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = format!("Identity: {}", self.identity.record());
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        f.write_str(&self.collection.pretty_print())
    }
}
