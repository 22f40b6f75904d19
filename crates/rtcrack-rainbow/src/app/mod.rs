//! Application layer — use case implementations
//!
//! This module coordinates the domain and infrastructure layers into the
//! three end-to-end operations the CLI binaries expose: generating a set
//! of tables, searching one for a target digest, and exhaustively
//! cracking a digest without any table at all.

pub mod cracker;
pub mod generator;
pub mod searcher;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::hashfunc::HashRegistry;
use crate::domain::rng::SharedRng;
use crate::domain::table_name::{make_table_name, parse_table_name};
use crate::error::Result;
use crate::infra::table_io::MappedTable;
use crate::infra::table_sort::sort_table_file;

/// Resolve `hash_name` against the built-in registry, generate `table_num`
/// independent tables of `chain_num` chains (each `chain_len` rounds
/// long) under `out_dir`, and sort each one in place.
///
/// Returns the paths of the tables written, in generation order.
pub fn generate_tables(
    hash_name: &str,
    chain_num: u32,
    chain_len: u32,
    table_num: u32,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let registry = HashRegistry::with_builtins();
    let hash_fn = registry.resolve(hash_name)?;
    let rng = SharedRng::from_entropy();
    let out_dir = out_dir.as_ref();

    let mut paths = Vec::with_capacity(table_num as usize);
    for index in 0..table_num {
        let name = make_table_name(hash_name, chain_num, chain_len, index);
        let path = out_dir.join(&name);

        generator::build_table(hash_fn.as_ref(), chain_num, chain_len, &path, &rng)?;
        sort_table_file(&path, chain_num as usize)?;

        paths.push(path);
    }

    Ok(paths)
}

/// Search a single sorted table file for the seed behind `target_digest`.
///
/// The table's hash function, chain count, and chain length are all
/// recovered from its file name (see [`crate::domain::table_name`]);
/// table files carry no other metadata.
pub fn search_table_file(table_path: impl AsRef<Path>, target_digest: &[u8]) -> Result<Option<u32>> {
    let table_path = table_path.as_ref();
    let (hash_name, _chain_num, chain_len, _index) = parse_table_name(table_path)?;

    let registry = HashRegistry::with_builtins();
    let hash_fn = registry.resolve(&hash_name)?;

    let mapped = MappedTable::open(table_path)?;
    let entries = mapped.as_slice();

    Ok(searcher::search_table(hash_fn.as_ref(), entries, chain_len, target_digest))
}

/// Exhaustively search the full seed space for `target_digest` under the
/// named hash function, without consulting any table.
pub fn crack_hash(hash_name: &str, target_digest: &[u8]) -> Result<Option<u32>> {
    let registry = HashRegistry::with_builtins();
    let hash_fn = registry.resolve(hash_name)?;
    Ok(cracker::crack(hash_fn.as_ref(), target_digest))
}

/// Look up a hash function's declared digest length, without needing to
/// hold on to the [`Arc`] the registry hands back.
pub fn hash_len_for(hash_name: &str) -> Result<usize> {
    let registry = HashRegistry::with_builtins();
    let hash_fn: Arc<dyn crate::domain::hashfunc::HashFunction> = registry.resolve(hash_name)?;
    Ok(hash_fn.hash_len())
}
