//! Pluggable hash-function registry.
//!
//! The reference tool resolved a hash implementation by `dlopen`-ing a
//! shared object and looking up a fixed symbol name. Rust has no business
//! imitating that: a hash function here is anything implementing
//! [`HashFunction`], and [`HashRegistry`] resolves names to instances the
//! same way a `dlopen` table would, minus the FFI.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{RainbowError, Result};

mod wikihash;

pub use wikihash::Wikihash;

/// A keyed digest function over 32-bit seeds.
///
/// Implementations must be deterministic: the same seed always produces
/// the same digest, since chain replay and regeneration both depend on
/// recomputing `hash(seed)` and getting back exactly what table
/// generation saw.
pub trait HashFunction: Send + Sync {
    /// The name used to resolve this hash function and to name table files.
    fn name(&self) -> &str;

    /// Digest length in bytes. Must stay constant for the lifetime of the
    /// implementation; table generation and search both size buffers off
    /// this value.
    fn hash_len(&self) -> usize;

    /// Hash `seed`, writing exactly `hash_len()` bytes into `out`.
    fn hash_into(&self, seed: u32, out: &mut [u8]);
}

/// A name-keyed table of available hash functions.
///
/// Construct with [`HashRegistry::with_builtins`] to get the built-in
/// `wikihash` pre-registered, then [`register`](Self::register) any
/// additional implementations before resolving.
pub struct HashRegistry {
    functions: HashMap<String, Arc<dyn HashFunction>>,
}

impl HashRegistry {
    /// An empty registry with no hash functions registered.
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// A registry pre-populated with the built-in `wikihash` function.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Wikihash));
        registry
    }

    /// Register a hash function under its own [`HashFunction::name`].
    /// Replaces any existing entry with the same name.
    pub fn register(&mut self, hash_fn: Arc<dyn HashFunction>) {
        self.functions.insert(hash_fn.name().to_string(), hash_fn);
    }

    /// Look up a hash function by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn HashFunction>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| RainbowError::UnknownHashFunction(name.to_string()))
    }
}

impl Default for HashRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
