//! rtcrack-rainbow — rainbow-table engine for inverting hashes of
//! 32-bit-seeded pseudorandom number generators.
//!
//! This crate provides:
//! - Rainbow table generation against any registered [`domain::hashfunc::HashFunction`]
//! - Table sorting and endpoint-collision-tolerant search
//! - An exhaustive fallback cracker that needs no table at all
//! - A built-in reference hash, `wikihash`, reproduced bit-for-bit from
//!   the original attack tool this crate's algorithms are grounded on

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;

pub use domain::chain::ChainEntry;
pub use domain::hashfunc::{HashFunction, HashRegistry};
pub use error::{RainbowError, Result};
