//! Card collections: the working sequence of a deck, hand or pile.
//!
//! See [`CardCollection`] for draw, shuffle and reporting semantics.

pub mod container;

pub use container::CardCollection;
