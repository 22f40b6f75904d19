//! `wikihash`: the reference demonstration hash.
//!
//! Reproduces, bit-for-bit, the original attack tool's `mediawikiHash`:
//! a PHP-flavored Mersenne Twister is seeded, two specific (untwisted)
//! state words are tempered directly, rendered as hex, and MD5'd. The
//! initializer only fills part of the state vector, leaving the tail at
//! zero — that truncation is reproduced deliberately, not patched.

use md5::{Digest, Md5};

use super::HashFunction;

const N: usize = 624;
const M: usize = 397;
const OFFSET: usize = 4;

/// The MT19937 state-vector initializer, truncated at `N - 200` exactly
/// as the reference tool's `php_mt_initialize` is: indices
/// `[N-200, N)` are left at zero rather than filled by the Knuth
/// recurrence. This is a quirk of this one demonstration hash, not a
/// bug to patch — implementers must preserve it to stay output-compatible.
fn php_mt_initialize(seed: u32) -> [u32; N] {
    let mut state = [0u32; N];
    state[0] = seed;
    for i in 1..(N - 200) {
        let prev = state[i - 1];
        state[i] = 1_812_433_253u32
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
    state
}

fn temper(y: u32) -> u32 {
    let mut y = y;
    y ^= y >> 11;
    y ^= (y << 7) & 0x9d2c_5680;
    y ^= (y << 15) & 0xefc6_0000;
    y ^= y >> 18;
    y
}

fn twist(m: u32, u: u32, v: u32) -> u32 {
    let mix = (u & 0x8000_0000) | (v & 0x7fff_ffff);
    let lo_bit_mask = 0u32.wrapping_sub(u & 1);
    m ^ (mix >> 1) ^ (lo_bit_mask & 0x9908_b0df)
}

/// Hash a seed via the `wikihash` pipeline, writing the 16-byte MD5
/// digest into `out`. `out` must be exactly 16 bytes (`hash_len()`).
fn wikihash_into(seed: u32, out: &mut [u8]) {
    debug_assert_eq!(out.len(), 16);

    let state = php_mt_initialize(seed);

    let r1 = temper(twist(state[M + OFFSET], state[OFFSET], state[OFFSET + 1])) >> 1;
    let r2 = temper(twist(state[M + OFFSET + 1], state[OFFSET + 1], state[OFFSET + 2])) >> 1;

    let hex = format!("{r1:x}{r2:x}");

    let mut hasher = Md5::new();
    hasher.update(hex.as_bytes());
    out.copy_from_slice(&hasher.finalize());
}

/// The built-in `wikihash` [`HashFunction`].
pub struct Wikihash;

impl HashFunction for Wikihash {
    fn name(&self) -> &str {
        "wikihash"
    }

    fn hash_len(&self) -> usize {
        16
    }

    fn hash_into(&self, seed: u32, out: &mut [u8]) {
        wikihash_into(seed, out)
    }
}
