//! Random number generation for turn orders and faction draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Entropy-seeded sessions**: `from_entropy` for normal page visits
//! - **Non-destructive shuffles**: `shuffled` leaves the input untouched
//!
//! ## Usage
//!
//! ```
//! use faction_draft::core::DraftRng;
//!
//! let mut rng = DraftRng::new(42);
//! let names = vec!["Alice", "Bob", "Carol"];
//!
//! let order = rng.shuffled(&names);
//! assert_eq!(order.len(), 3);
//! assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing every shuffle in a draft session.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
/// Shuffles are Fisher-Yates, so every permutation is equally likely.
#[derive(Clone, Debug)]
pub struct DraftRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DraftRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so a surprising draft can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Return a uniformly shuffled copy of `items`.
    ///
    /// Empty input gives empty output and a single element comes back as is.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}

impl Default for DraftRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DraftRng::new(42);
        let mut rng2 = DraftRng::new(42);
        let items: Vec<u32> = (0..20).collect();

        for _ in 0..10 {
            assert_eq!(rng1.shuffled(&items), rng2.shuffled(&items));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DraftRng::new(1);
        let mut rng2 = DraftRng::new(2);
        let items: Vec<u32> = (0..20).collect();

        assert_ne!(rng1.shuffled(&items), rng2.shuffled(&items));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = DraftRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffled_leaves_input() {
        let mut rng = DraftRng::new(7);
        let data = vec!["a", "b", "c", "d"];

        let out = rng.shuffled(&data);

        assert_eq!(data, vec!["a", "b", "c", "d"]);
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, data);
    }

    #[test]
    fn test_shuffled_trivial_inputs() {
        let mut rng = DraftRng::new(7);

        let empty: Vec<String> = Vec::new();
        assert!(rng.shuffled(&empty).is_empty());
        assert_eq!(rng.shuffled(&["only"]), vec!["only"]);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(DraftRng::new(99).seed(), 99);

        let rng = DraftRng::from_entropy();
        let mut replay = DraftRng::new(rng.seed());
        let mut original = rng.clone();
        let items: Vec<u8> = (0..16).collect();
        assert_eq!(original.shuffled(&items), replay.shuffled(&items));
    }
}
