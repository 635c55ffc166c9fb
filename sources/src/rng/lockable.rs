//! Mutex-guarded source for sharing one engine between threads
//!
//! The wrapper takes ownership of the engine, so no other handle can reach
//! it. Every operation holds the lock for exactly one inner call; the guard
//! is released on every exit path, and `parking_lot` never poisons.
//!
//! This serializes access; it does not add parallelism. Expect each locked
//! draw to cost several times an unsynchronized one. For parallel work,
//! prefer one engine per thread, each split off with
//! [`Xoshiro256::jump_streams`] so their streams never overlap.
//!
//! [`Xoshiro256::jump_streams`]: super::Xoshiro256::jump_streams

use parking_lot::Mutex;

use super::Source;

/// Any [`Source`] behind a mutual-exclusion lock.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use prng_sources::{LockableSource, Xoshiro256};
///
/// let shared = Arc::new(LockableSource::new(Xoshiro256::new(1)));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let src = Arc::clone(&shared);
///         thread::spawn(move || src.uint64())
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// ```
#[derive(Debug, Default)]
pub struct LockableSource<S> {
    src: Mutex<S>,
}

impl<S: Source> LockableSource<S> {
    /// Wrap `src`, taking exclusive ownership of it
    ///
    /// # Arguments
    /// * `src` - Engine to guard; moved in, so no other handle can reach it
    ///
    /// # Example
    /// ```
    /// use prng_sources::{LockableSource, SplitMix64};
    ///
    /// let locked = LockableSource::new(SplitMix64::new(42));
    /// assert_eq!(locked.uint64(), 0xbdd7_3226_2feb_6e95);
    /// ```
    pub fn new(src: S) -> Self {
        Self {
            src: Mutex::new(src),
        }
    }

    /// Reseed the inner engine under the lock
    ///
    /// # Example
    /// ```
    /// use prng_sources::{LockableSource, WyRand};
    ///
    /// let locked = LockableSource::new(WyRand::new(1));
    /// let first = locked.uint64();
    /// locked.seed(1);
    /// assert_eq!(locked.uint64(), first);
    /// ```
    pub fn seed(&self, seed: i64) {
        self.src.lock().seed(seed);
    }

    /// Draw 64 bits from the inner engine under the lock
    pub fn uint64(&self) -> u64 {
        self.src.lock().uint64()
    }

    /// Draw a non-negative 63-bit integer from the inner engine under the lock
    ///
    /// Consumes exactly one inner `uint64()` draw.
    pub fn int63(&self) -> i64 {
        self.src.lock().int63()
    }

    /// Unwrap, returning the engine in its current state
    ///
    /// # Example
    /// ```
    /// use prng_sources::{LockableSource, Pcg};
    ///
    /// let locked = LockableSource::new(Pcg::new(5));
    /// locked.uint64();
    ///
    /// let mut expected = Pcg::new(5);
    /// prng_sources::Source::uint64(&mut expected);
    /// assert_eq!(locked.into_inner(), expected);
    /// ```
    pub fn into_inner(self) -> S {
        self.src.into_inner()
    }
}

impl<S: Source> Source for LockableSource<S> {
    fn seed(&mut self, seed: i64) {
        LockableSource::seed(self, seed)
    }

    fn uint64(&mut self) -> u64 {
        LockableSource::uint64(self)
    }

    fn int63(&mut self) -> i64 {
        LockableSource::int63(self)
    }
}

impl<S: Source> Source for &LockableSource<S> {
    fn seed(&mut self, seed: i64) {
        LockableSource::seed(*self, seed)
    }

    fn uint64(&mut self) -> u64 {
        LockableSource::uint64(*self)
    }

    fn int63(&mut self) -> i64 {
        LockableSource::int63(*self)
    }
}
