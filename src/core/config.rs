//! Collection configuration.
//!
//! Collections are configured at construction by a `CollectionConfig`.
//! Unseeded configurations give non-reproducible draws and shuffles;
//! seeded ones are deterministic, which tests and replays rely on.

use serde::{Deserialize, Serialize};

use super::rng::DeckRng;

/// Configuration applied when a collection or deck is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// RNG seed for draws and shuffles. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CollectionConfig {
    /// Create a default (unseeded) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        match self.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        }
    }
}
