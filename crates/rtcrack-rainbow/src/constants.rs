//! Rainbow table related constants
//!
//! Unlike the table parameters of a fixed-target rainbow table generator,
//! `chain_num` and `chain_len` here are per-call arguments (see
//! [`crate::app::generator`]) rather than compile-time constants: this
//! crate targets any registered hash function, not one fixed game RNG.

// =============================================================================
// Hash function parameters
// =============================================================================

/// Maximum digest length any registered [`crate::domain::hashfunc::HashFunction`]
/// may report. Digest buffers are fixed-size arrays of this length.
pub const MAX_HASH_SIZE: usize = 64;

// =============================================================================
// Table builder parameters
// =============================================================================

/// Number of chains a generation worker accumulates in its local buffer
/// before taking the shared file lock and flushing a bucket.
pub const WORKER_BUFFER_SIZE: usize = 8192;

/// Seed space size (2^32), the domain the exhaustive cracker fans out over.
pub const SEED_SPACE: u64 = 1u64 << 32;

// =============================================================================
// File format
// =============================================================================

/// Byte size of a chain entry (two little-endian u32 fields).
pub const CHAIN_ENTRY_SIZE: usize = 8;

/// Table file name extension, see [`crate::domain::table_name`].
pub const TABLE_EXTENSION: &str = "rt";
