//! Seeded Fisher-Yates shuffle driven by a small linear-congruential generator.
//!
//! The generator is the classic `(state * 9301 + 49297) mod 233280` LCG. It is
//! nowhere near statistically strong, but it is tiny and fully reproducible:
//! the same seed and input order always produce the same permutation.

use std::time::{SystemTime, UNIX_EPOCH};

pub const LCG_MULTIPLIER: u64 = 9301;
pub const LCG_INCREMENT: u64 = 49297;
pub const LCG_MODULUS: u64 = 233280;

/// Linear-congruential generator yielding values in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        // Reducing first is equivalent modulo 233280 and keeps the
        // multiplication below u64 overflow for any seed.
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Create a generator seeded from the system clock.
    ///
    /// Sequences from this constructor are intentionally not reproducible.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(seed)
    }

    /// Advance one step and return the new state.
    pub fn step(state: u64) -> u64 {
        ((state % LCG_MODULUS) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS
    }

    /// Advance and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = Self::step(self.state);
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Index in `0..bound` derived from the next value.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }
}

/// Return a shuffled copy of `items`; the input is left untouched.
///
/// With `Some(seed)` the result is reproducible bit-for-bit. With `None`
/// the generator is seeded from the clock and the order is not
/// reproducible.
pub fn shuffle<T: Clone>(items: &[T], seed: Option<u64>) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, seed);
    shuffled
}

/// Shuffle `items` in place. See [`shuffle`].
pub fn shuffle_in_place<T>(items: &mut [T], seed: Option<u64>) {
    let mut rng = seed.map_or_else(Lcg::from_entropy, Lcg::new);
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
