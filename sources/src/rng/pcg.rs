//! PCG XSL-RR 128/64 random number generator
//!
//! Melissa O'Neill's permuted congruential generator: a 128-bit LCG whose
//! output is the xor of both halves, rotated right by the top six bits.
//! Period 2^128.
//!
//! The 128-bit state is held as two 64-bit limbs `[lo, hi]`; multiply and
//! add carry between them explicitly and keep only the low 128 bits.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Source, SplitMix64};

const MUL_HI: u64 = 0x2360_ed05_1fc6_5da4;
const MUL_LO: u64 = 0x4385_df64_9fcc_f645;
const INC_HI: u64 = 0x5851_f42d_4c95_7f2d;
const INC_LO: u64 = 0x1405_7b7e_f767_814f;

/// PCG engine: 128 bits of state as `[lo, hi]`.
///
/// # Example
/// ```
/// use prng_sources::{Pcg, Source};
///
/// let mut rng = Pcg::new(42);
/// assert_eq!(rng.uint64(), 0xdc5e_85dc_6f68_dce3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcg {
    s: [u64; 2],
}

impl Pcg {
    /// Create a new engine seeded with `seed`
    pub fn new(seed: i64) -> Self {
        Self {
            s: SplitMix64::expand(seed),
        }
    }

    /// Rebuild an engine from previously captured `[lo, hi]` limbs
    pub fn from_state(s: [u64; 2]) -> Self {
        Self { s }
    }

    /// Get current `[lo, hi]` limbs (for checkpointing/replay)
    pub fn state(&self) -> [u64; 2] {
        self.s
    }

    fn mul(&mut self) {
        let [lo, hi] = self.s;
        let wide = u128::from(lo) * u128::from(MUL_LO);
        let new_hi = ((wide >> 64) as u64)
            .wrapping_add(hi.wrapping_mul(MUL_LO))
            .wrapping_add(lo.wrapping_mul(MUL_HI));
        self.s = [wide as u64, new_hi];
    }

    fn add(&mut self) {
        let [lo, hi] = self.s;
        let (new_lo, carry) = lo.overflowing_add(INC_LO);
        let new_hi = hi.wrapping_add(INC_HI).wrapping_add(u64::from(carry));
        self.s = [new_lo, new_hi];
    }
}

impl Default for Pcg {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Source for Pcg {
    fn seed(&mut self, seed: i64) {
        trace!(seed, "seeding pcg");
        self.s = SplitMix64::expand(seed);
    }

    fn uint64(&mut self) -> u64 {
        self.mul();
        self.add();
        let [lo, hi] = self.s;
        (hi ^ lo).rotate_right((hi >> 58) as u32)
    }
}
