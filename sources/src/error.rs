//! Errors raised at the fallible edges of the crate
//!
//! Drawing from an engine never fails. Only rebuilding an engine from raw
//! words and parsing a configuration can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    #[error("xoshiro256 state must not be all zero")]
    ZeroState,

    #[error("unknown source kind: {0}")]
    UnknownKind(String),
}
