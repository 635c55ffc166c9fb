//! xoshiro256** random number generator
//!
//! Blackman & Vigna's scrambled linear generator: 256 bits of state, period
//! 2^256 - 1, faster and statistically stronger than the xorshift family.
//!
//! # Forbidden state
//!
//! The all-zero state is a fixed point that outputs zero forever. Seeding
//! expands the seed through [`SplitMix64`], and [`Xoshiro256::from_state`]
//! refuses an all-zero state, so no public constructor can reach it.
//!
//! # Parallel streams
//!
//! [`Xoshiro256::jump`] and [`Xoshiro256::long_jump`] return a new engine
//! 2^128 (resp. 2^192) steps ahead; the receiver only moves 256 steps.
//! Non-overlapping subsequences come from chaining jumps off the returned
//! engines, which [`Xoshiro256::jump_streams`] does for you.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{Source, SplitMix64};
use crate::error::RngError;

/// Jump polynomial for 2^128 steps.
const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Jump polynomial for 2^192 steps.
const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// xoshiro256** engine: four 64-bit state words, never all zero.
///
/// # Example
/// ```
/// use prng_sources::{Source, Xoshiro256};
///
/// let mut rng = Xoshiro256::new(42);
/// let mut worker = rng.jump();
///
/// assert_ne!(rng.uint64(), worker.uint64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct Xoshiro256 {
    s: [u64; 4],
}

impl Xoshiro256 {
    /// Create a new engine seeded with `seed`
    ///
    /// The four state words are the first four SplitMix64 draws from `seed`.
    ///
    /// # Arguments
    /// * `seed` - Any value; taken as raw 64-bit bits
    ///
    /// # Example
    /// ```
    /// use prng_sources::Xoshiro256;
    ///
    /// let rng = Xoshiro256::new(0);
    /// assert_ne!(rng.state(), [0; 4]);
    /// ```
    pub fn new(seed: i64) -> Self {
        Self {
            s: SplitMix64::expand(seed),
        }
    }

    /// Rebuild an engine from previously captured state words
    ///
    /// # Errors
    /// Returns [`RngError::ZeroState`] if every word is zero.
    ///
    /// # Example
    /// ```
    /// use prng_sources::{RngError, Xoshiro256};
    ///
    /// assert_eq!(Xoshiro256::from_state([0; 4]), Err(RngError::ZeroState));
    /// assert!(Xoshiro256::from_state([0, 0, 0, 1]).is_ok());
    /// ```
    pub fn from_state(s: [u64; 4]) -> Result<Self, RngError> {
        if s == [0; 4] {
            warn!("rejected all-zero xoshiro256 state");
            return Err(RngError::ZeroState);
        }
        Ok(Self { s })
    }

    /// Get current state words (for checkpointing/replay)
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Return the state 2^128 steps ahead as a new engine.
    ///
    /// Only the returned engine is the jumped stream. The receiver itself
    /// moves forward just 256 steps, so calling `jump()` twice on the same
    /// receiver gives two streams 256 draws apart. To split further, jump
    /// from the returned engine (or use [`Xoshiro256::jump_streams`]).
    ///
    /// # Example
    /// ```
    /// use prng_sources::Xoshiro256;
    ///
    /// let mut root = Xoshiro256::new(1);
    /// let first = root.jump();
    /// let second = first.clone().jump();
    /// assert_ne!(first, second);
    /// ```
    pub fn jump(&mut self) -> Self {
        self.jump_with(&JUMP)
    }

    /// Return the state 2^192 steps ahead as a new engine.
    ///
    /// Same receiver semantics as [`Xoshiro256::jump`]: the receiver moves
    /// 256 steps and the returned engine is the far stream. Chaining
    /// `long_jump()` off returned engines gives 2^64 starting points, and
    /// chaining `jump()` off each of those splits it 2^64 more ways.
    pub fn long_jump(&mut self) -> Self {
        self.jump_with(&LONG_JUMP)
    }

    /// Split off `count` non-overlapping streams, one per parallel worker.
    ///
    /// Stream `k` starts `(k + 1) * 2^128` steps past the receiver. Each
    /// stream is jumped from the previous one, never from the receiver
    /// twice. Afterwards the receiver sits one jump past the last stream,
    /// so it can keep drawing (or split again) without overlapping them.
    /// A `count` of zero leaves the receiver untouched.
    ///
    /// # Arguments
    /// * `count` - Number of streams to produce
    ///
    /// # Example
    /// ```
    /// use prng_sources::{Source, Xoshiro256};
    ///
    /// let mut root = Xoshiro256::new(7);
    /// let mut workers = root.jump_streams(4);
    /// assert_eq!(workers.len(), 4);
    /// assert_ne!(workers[0].uint64(), workers[1].uint64());
    /// ```
    pub fn jump_streams(&mut self, count: usize) -> Vec<Self> {
        debug!(count, "splitting xoshiro256 into jump streams");
        let mut streams = Vec::with_capacity(count);
        if count == 0 {
            return streams;
        }

        let mut cursor = self.jump();
        for _ in 0..count {
            let next = cursor.clone().jump();
            streams.push(cursor);
            cursor = next;
        }
        *self = cursor;
        streams
    }

    fn jump_with(&mut self, poly: &[u64; 4]) -> Self {
        let mut acc = [0u64; 4];
        for word in poly {
            for b in 0..64 {
                if (word >> b) & 1 == 1 {
                    for (a, s) in acc.iter_mut().zip(self.s) {
                        *a ^= s;
                    }
                }
                self.uint64();
            }
        }
        Self { s: acc }
    }
}

impl Default for Xoshiro256 {
    /// Seeded with 0; never the all-zero state.
    fn default() -> Self {
        Self::new(0)
    }
}

impl Source for Xoshiro256 {
    fn seed(&mut self, seed: i64) {
        trace!(seed, "seeding xoshiro256");
        self.s = SplitMix64::expand(seed);
    }

    fn uint64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }
}

impl TryFrom<[u64; 4]> for Xoshiro256 {
    type Error = RngError;

    fn try_from(s: [u64; 4]) -> Result<Self, Self::Error> {
        Self::from_state(s)
    }
}

impl From<Xoshiro256> for [u64; 4] {
    fn from(rng: Xoshiro256) -> Self {
        rng.s
    }
}
