//! Deterministic random number sources
//!
//! Every engine implements [`Source`]: reseed from a 64-bit value, draw a full
//! 64-bit word, or draw a non-negative 63-bit integer. Same seed → same
//! sequence, for every engine, on every platform.
//!
//! | Engine        | State    | Period       |
//! |---------------|----------|--------------|
//! | [`SplitMix64`]| 64 bits  | 2^64         |
//! | [`Xoshiro256`]| 256 bits | 2^256 - 1    |
//! | [`Pcg`]       | 128 bits | 2^128        |
//! | [`WyRand`]    | 64 bits  | 2^64         |
//!
//! Engines are plain values mutated in place. Wrap one in [`LockableSource`]
//! before sharing it between threads.

mod lockable;
mod pcg;
mod splitmix;
mod wyrand;
mod xoshiro;

pub use lockable::LockableSource;
pub use pcg::Pcg;
pub use splitmix::SplitMix64;
pub use wyrand::WyRand;
pub use xoshiro::Xoshiro256;

/// Largest value representable in 63 bits.
pub const MAX_UINT63: u64 = (1 << 63) - 1;

/// Common contract implemented by every engine.
///
/// # Example
/// ```
/// use prng_sources::{Source, SplitMix64, MAX_UINT63};
///
/// let mut a = SplitMix64::new(7);
/// let mut b = SplitMix64::new(7);
/// assert_eq!(a.int63() as u64, b.uint64() & MAX_UINT63);
/// ```
pub trait Source {
    /// Reinitialize all state from `seed`.
    ///
    /// The seed is taken as a raw 64-bit pattern; zero and negative values are
    /// valid. Reseeding discards everything drawn before.
    fn seed(&mut self, seed: i64);

    /// Advance one step and return 64 random bits.
    fn uint64(&mut self) -> u64;

    /// Advance one step and return a non-negative 63-bit integer.
    ///
    /// Always exactly one `uint64()` draw with the top bit cleared.
    fn int63(&mut self) -> i64 {
        (self.uint64() & MAX_UINT63) as i64
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn seed(&mut self, seed: i64) {
        (**self).seed(seed)
    }

    fn uint64(&mut self) -> u64 {
        (**self).uint64()
    }

    fn int63(&mut self) -> i64 {
        (**self).int63()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn seed(&mut self, seed: i64) {
        (**self).seed(seed)
    }

    fn uint64(&mut self) -> u64 {
        (**self).uint64()
    }

    fn int63(&mut self) -> i64 {
        (**self).int63()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_uint63_clears_only_top_bit() {
        assert_eq!(MAX_UINT63, u64::MAX >> 1);
        assert_eq!(MAX_UINT63 as i64, i64::MAX);
    }

    #[test]
    fn test_boxed_dyn_source_delegates() {
        let mut boxed: Box<dyn Source> = Box::new(SplitMix64::new(99));
        let mut plain = SplitMix64::new(99);

        for _ in 0..10 {
            assert_eq!(boxed.uint64(), plain.uint64());
        }
    }

    fn draw_twice<S: Source>(mut src: S) {
        src.uint64();
        src.uint64();
    }

    #[test]
    fn test_mut_ref_source_advances_owner() {
        let mut owner = WyRand::new(5);
        let mut reference = WyRand::new(5);

        draw_twice(&mut owner);
        reference.uint64();
        reference.uint64();

        assert_eq!(owner, reference);
    }
}
