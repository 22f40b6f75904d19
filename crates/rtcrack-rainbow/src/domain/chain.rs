//! Chain entry structure, generation, and verification.
//!
//! File format: `(start_seed, end_seed)` as two little-endian u32 fields.
//! Sort order, once a table is sorted: `end_seed` ascending.

use crate::domain::hashfunc::HashFunction;
use crate::domain::reduce::reduce;
use crate::domain::rng::SharedRng;

/// A single rainbow-table chain: a startpoint/endpoint pair.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainEntry {
    /// Starting seed of the chain.
    pub start_seed: u32,
    /// Ending seed of the chain, after `chain_len` rounds of `reduce ∘ hash`.
    pub end_seed: u32,
}

impl ChainEntry {
    /// Create a new chain entry.
    pub fn new(start_seed: u32, end_seed: u32) -> Self {
        Self { start_seed, end_seed }
    }
}

/// Walk a chain of `chain_len` rounds starting from `start_seed`.
///
/// Step `i`: `t ← reduce(hash(t), i)`.
pub fn walk_chain(hash_fn: &dyn HashFunction, start_seed: u32, chain_len: u32) -> u32 {
    let mut digest = [0u8; crate::constants::MAX_HASH_SIZE];
    let hash_len = hash_fn.hash_len();
    let mut t = start_seed;

    for i in 0..chain_len {
        hash_fn.hash_into(t, &mut digest[..hash_len]);
        t = reduce(&digest[..hash_len], i);
    }

    t
}

/// Draw a random startpoint from `rng` and walk a chain of `chain_len`
/// rounds under `hash_fn`, yielding the resulting `(start, end)` pair.
pub fn generate_chain(hash_fn: &dyn HashFunction, chain_len: u32, rng: &SharedRng) -> ChainEntry {
    let start = rng.next_u32();
    let end = walk_chain(hash_fn, start, chain_len);
    ChainEntry::new(start, end)
}

/// Replay a chain from `start_seed`, checking at every step whether the
/// hash of the current element equals `target_digest`.
///
/// Returns `Some(seed)` as soon as a match is found (the seed being the
/// chain element whose hash is the target, which may be `start_seed`
/// itself at step 0 — a column-0 match reports the start seed as the
/// target seed, matching the original tool's `regenerateChain`, which
/// checks the hash before ever reducing; preserved here deliberately).
/// Returns `None` if no element in the `chain_len`-long walk matches.
pub fn regenerate_chain(
    hash_fn: &dyn HashFunction,
    start_seed: u32,
    chain_len: u32,
    target_digest: &[u8],
) -> Option<u32> {
    let mut digest = [0u8; crate::constants::MAX_HASH_SIZE];
    let hash_len = hash_fn.hash_len();
    let mut t = start_seed;

    for i in 0..chain_len {
        hash_fn.hash_into(t, &mut digest[..hash_len]);
        if &digest[..hash_len] == target_digest {
            return Some(t);
        }
        t = reduce(&digest[..hash_len], i);
    }

    None
}
