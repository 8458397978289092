//! # ccg-decks
//!
//! Cards, card collections and deck construction rules for a two-sided
//! (corp vs runner) collectible card game.
//!
//! ## Design Principles
//!
//! 1. **Hidden Information**: A face-down card only ever shows a faux
//!    record. `Card::view` is the single way to read attributes.
//!
//! 2. **Atomic Decks**: A `Deck` either has exactly one identity and a
//!    complete validation report, or it was never built.
//!
//! 3. **Declared Rules**: Validation rules are a static, ordered list of
//!    named predicates. New rules are appended, never patched in.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG
//! - `cards`: Card records, face-up/face-down cards, card sources
//! - `collection`: Card collections with draw and shuffle
//! - `deck`: Decks and validation rules

pub mod core;
pub mod cards;
pub mod collection;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{CardError, CollectionConfig, DeckRng};

pub use crate::cards::{parse_source, Card, CardRecord, CardSource};

pub use crate::collection::CardCollection;

pub use crate::deck::{Deck, RuleContext, RuleSet, ValidationReport, ValidationRule};
