//! SplitMix64 random number generator
//!
//! A fixed-increment version of Java 8's `SplittableRandom`. It passes
//! BigCrush, has 64 bits of state and a period of 2^64.
//!
//! # Algorithm
//!
//! Each draw adds the golden-ratio increment to the state, then runs the
//! result through a three-round xor-shift/multiply finalizer.
//!
//! # Seed expansion
//!
//! Every state value, including zero, is valid. Consecutive draws from one
//! seed look independent, which is why the larger engines use a throwaway
//! SplitMix64 to expand a single 64-bit seed into several state words.

use serde::{Deserialize, Serialize};

use super::Source;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX_MUL_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_MUL_2: u64 = 0x94d0_49bb_1331_11eb;

/// SplitMix64 engine: one 64-bit state word.
///
/// # Example
/// ```
/// use prng_sources::{Source, SplitMix64};
///
/// let mut rng = SplitMix64::new(42);
/// assert_eq!(rng.uint64(), 0xbdd7_3226_2feb_6e95);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a new engine seeded with `seed`
    ///
    /// # Example
    /// ```
    /// use prng_sources::SplitMix64;
    ///
    /// let rng = SplitMix64::new(-1);
    /// assert_eq!(rng.state(), u64::MAX);
    /// ```
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

    /// Draw `N` consecutive words. Used to fill the state of larger engines.
    pub(crate) fn expand<const N: usize>(seed: i64) -> [u64; N] {
        let mut sm = Self::new(seed);
        std::array::from_fn(|_| sm.uint64())
    }
}

impl Source for SplitMix64 {
    fn seed(&mut self, seed: i64) {
        self.state = seed as u64;
    }

    fn uint64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
        z ^ (z >> 31)
    }
}
