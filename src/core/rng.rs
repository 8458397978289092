//! Random number generation for draws and shuffles.
//!
//! ## Key Features
//!
//! - **Seedable**: Same seed produces identical draws and shuffles
//! - **Entropy fallback**: Unseeded collections pick a fresh seed
//! - **Sampling without replacement**: Uniform index sampling for draws
//!
//! ```
//! use ccg_decks::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//! assert_eq!(a.sample_indices(10, 3), b.sample_indices(10, 3));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG owned by each card collection.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices from `0..length`, uniformly at random.
    ///
    /// Callers must ensure `amount <= length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
