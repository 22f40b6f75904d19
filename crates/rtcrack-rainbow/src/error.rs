//! Error types for the rainbow table engine.
//!
//! A missing seed is never an error (see [`crate::app::searcher`] and
//! [`crate::app::cracker`], which both report absence as `Ok(None)`);
//! the variants below cover only genuine failures — bad input, I/O, and
//! resolver misses.

use std::path::PathBuf;

/// Errors produced by table generation, sorting, searching, and the
/// hash-function registry.
#[derive(Debug, thiserror::Error)]
pub enum RainbowError {
    /// The hash registry has no entry with the requested name.
    #[error("unknown hash function: {0}")]
    UnknownHashFunction(String),

    /// A table file name did not match `<hashName>.<chainNum>.<chainLen>.<index>.rt`.
    #[error("malformed table file name: {0}")]
    MalformedTableName(PathBuf),

    /// A generation worker's buffered bucket write wrote fewer bytes than requested.
    #[error("short write while flushing {attempted} chains to the table file")]
    ShortWrite {
        /// Number of chains the worker attempted to flush.
        attempted: usize,
    },

    /// Memory-mapping a table file failed.
    #[error("failed to memory-map table file {path}: {source}")]
    MmapFailed {
        /// Path of the file that could not be mapped.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A hex-encoded target hash had the wrong length or contained non-hex characters.
    #[error("invalid hash hex string (expected {expected} hex chars, got {actual})")]
    InvalidHashHex {
        /// Expected number of hex characters (`2 * hash_len`).
        expected: usize,
        /// Actual number of characters supplied.
        actual: usize,
    },

    /// Propagated I/O error (file open, read, write, metadata).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = std::result::Result<T, RainbowError>;
