//! Cards - records with a visibility state.
//!
//! A `Card` owns one `CardRecord` and a face-up flag. Observers only get
//! at the attributes through [`Card::view`], which hands out a faux record
//! while the card is face-down.

use std::borrow::Cow;

use serde_json::Value;

use super::record::CardRecord;
use crate::core::CardError;

/// A card in a collection.
///
/// Cards start face-down.
///
/// ## Example
///
/// ```
/// use ccg_decks::cards::Card;
/// use serde_json::json;
///
/// let mut card = Card::from_raw(json!({"title": "Diesel"})).unwrap();
/// assert!(card.view().is_faux());
///
/// card.flip();
/// assert_eq!(card.view().title(), Some("Diesel"));
/// ```
#[derive(Clone)]
pub struct Card {
    record: CardRecord,
    face_up: bool,
}

impl Card {
    /// Wrap a record in a face-down card.
    #[must_use]
    pub fn new(record: CardRecord) -> Self {
        Self {
            record,
            face_up: false,
        }
    }

    /// Wrap a record in a face-up card.
    #[must_use]
    pub fn face_up(record: CardRecord) -> Self {
        Self {
            record,
            face_up: true,
        }
    }

    /// Build a face-down card from a raw JSON mapping.
    pub fn from_raw(raw: Value) -> Result<Self, CardError> {
        CardRecord::from_raw(raw).map(Self::new)
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// What an observer sees: the record when face-up, a faux record otherwise.
    #[must_use]
    pub fn view(&self) -> Cow<'_, CardRecord> {
        if self.face_up {
            Cow::Borrowed(&self.record)
        } else {
            Cow::Owned(CardRecord::faux())
        }
    }

    /// The real record, regardless of visibility.
    ///
    /// Only deck construction and reporting read through this.
    pub(crate) fn record(&self) -> &CardRecord {
        &self.record
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self::new(record)
    }
}

/// Cards compare by what an observer sees. Two face-down cards are always
/// equal, whatever they hide.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.face_up == other.face_up && self.view() == other.view()
    }
}

impl Eq for Card {}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("face_up", &self.face_up)
            .field("view", &self.view())
            .finish()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.record)
        } else {
            f.write_str("<face-down card>")
        }
    }
}
