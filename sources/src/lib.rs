//! PRNG Sources - interchangeable pseudo-random engines
//!
//! Small, fast, statistically tested generators that all speak one contract
//! ([`Source`]) so a higher-level sampling layer can swap them freely.
//!
//! # Architecture
//!
//! - **rng**: The `Source` contract, the four engines and the lockable wrapper
//! - **config**: Serde-friendly selection of an engine by name and seed
//! - **error**: Failures at the fallible edges (state restore, config parsing)
//!
//! # Critical Invariants
//!
//! 1. Every engine is bit-exact with its published reference algorithm
//! 2. `int63()` consumes exactly one `uint64()` draw
//! 3. A Xoshiro256 state is never all zero
//! 4. Engines are not thread safe; share them only through `LockableSource`
//!
//! None of these generators are cryptographically secure.

// Module declarations
pub mod config;
pub mod error;
pub mod rng;

#[cfg(feature = "rand_core")]
mod rand_compat;

// Re-exports for convenience
pub use config::{SharedSource, SourceConfig, SourceKind};
pub use error::RngError;
pub use rng::{LockableSource, Pcg, Source, SplitMix64, WyRand, Xoshiro256, MAX_UINT63};
