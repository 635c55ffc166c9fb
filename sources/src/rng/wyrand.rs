//! wyrand random number generator
//!
//! From Wang Yi's wyhash: one wrapping add and one widening multiply per
//! draw, folding the 128-bit product back to 64 bits. Any state is valid.

use serde::{Deserialize, Serialize};

use super::Source;

const WY0: u64 = 0xa076_1d64_78bd_642f;
const WY1: u64 = 0xe703_7ed1_a0b4_28db;

/// wyrand engine: one 64-bit state word.
///
/// # Example
/// ```
/// use prng_sources::{Source, WyRand};
///
/// let mut rng = WyRand::new(42);
/// assert_eq!(rng.uint64(), 0xae4a_7cbf_dda9_b434);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WyRand {
    state: u64,
}

impl WyRand {
    /// Create a new engine seeded with `seed`
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u64 }
    }

    /// Rebuild an engine that continues from a previously captured state
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Get current state (for checkpointing/replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Source for WyRand {
    fn seed(&mut self, seed: i64) {
        self.state = seed as u64;
    }

    fn uint64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(WY0);
        wymum(self.state ^ WY1, self.state)
    }
}

/// Full 64x64 → 128 multiply, high half xor low half.
fn wymum(a: u64, b: u64) -> u64 {
    let product = u128::from(a) * u128::from(b);
    ((product >> 64) as u64) ^ (product as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_is_valid() {
        let mut rng = WyRand::new(0);
        assert_eq!(rng.uint64(), 0x111c_b3a7_8f59_a58e);
    }

    #[test]
    fn test_state_advances_by_constant() {
        let mut rng = WyRand::new(1);
        rng.uint64();
        rng.uint64();
        assert_eq!(rng.state(), 1u64.wrapping_add(WY0).wrapping_add(WY0));
    }

    #[test]
    fn test_wymum_folds_both_halves() {
        assert_eq!(wymum(u64::MAX, 2), 1 ^ (u64::MAX - 1));
        assert_eq!(wymum(0, u64::MAX), 0);
    }
}
