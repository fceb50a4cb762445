//! Error taxonomy for the Kuznyechik core and its I/O adapter.
//!
//! The core distinguishes four failure classes: a malformed key, a
//! malformed block-sized payload, an I/O failure from the file adapter, and
//! an out-of-range table index. The first three are ordinary, recoverable
//! errors reported with enough context to identify the failing operation.
//! The last is an assertion-class error: it indicates a caller violated a
//! precondition that safe, array-indexed Rust code cannot actually trigger
//! through the public API, but it is kept in the taxonomy so internal
//! helpers that accept raw indices have a typed way to report it.

use thiserror::Error;

/// Errors produced by the Kuznyechik core and its file/hex adapters.
#[derive(Debug, Error)]
pub enum KuznyechikError {
    /// The master key had the wrong length, or hex key material contained
    /// characters outside `[0-9a-fA-F]`.
    #[error("wrong key: {detail}")]
    WrongKey { detail: String },

    /// A block, or a chunk handed to the padding layer, did not have the
    /// expected length.
    #[error("wrong length: expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Reading the input file or writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal table lookup received an index outside its bounds.
    /// This variant is never reachable through the public API since all
    /// lookups here go through bounds-checked array indexing; it documents
    /// the invariant and gives internal test helpers a typed failure mode.
    #[error("index {index} out of range (bound {bound})")]
    OutOfRange { index: usize, bound: usize },
}

pub type Result<T> = std::result::Result<T, KuznyechikError>;
