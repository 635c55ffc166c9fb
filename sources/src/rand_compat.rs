//! `rand_core` integration
//!
//! Lets every engine drive the `rand` distribution API (`gen_range`,
//! shuffles, floats) directly. `next_u32` takes the high half of a single
//! 64-bit draw, which are the strongest bits for every engine here.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::rng::{LockableSource, Pcg, Source, SplitMix64, WyRand, Xoshiro256};

macro_rules! impl_rand_core {
    ($($engine:ty),+ $(,)?) => {$(
        impl RngCore for $engine {
            fn next_u32(&mut self) -> u32 {
                (self.uint64() >> 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.uint64()
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl SeedableRng for $engine {
            type Seed = [u8; 8];

            fn from_seed(seed: Self::Seed) -> Self {
                Self::new(i64::from_le_bytes(seed))
            }

            fn seed_from_u64(state: u64) -> Self {
                Self::new(state as i64)
            }
        }
    )+};
}

impl_rand_core!(SplitMix64, Xoshiro256, Pcg, WyRand);

impl<S: Source> RngCore for LockableSource<S> {
    fn next_u32(&mut self) -> u32 {
        (LockableSource::uint64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        LockableSource::uint64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
