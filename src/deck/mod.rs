//! Deck construction and validation.
//!
//! ## Key Types
//!
//! - `Deck`: A collection with exactly one identity, validated on construction
//! - `ValidationRule`: A named, pure predicate over a deck
//! - `RuleSet`: The ordered list of rules a deck is checked against
//! - `ValidationReport`: Per-rule pass/fail results, in rule order

pub mod rules;
pub mod validated;

pub use rules::{RuleCheck, RuleContext, RuleOutcome, RuleSet, ValidationReport, ValidationRule};
pub use validated::Deck;
