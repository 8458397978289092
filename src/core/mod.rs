//! Core types shared by every module: errors, configuration, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::CollectionConfig;
pub use error::CardError;
pub use rng::DeckRng;
