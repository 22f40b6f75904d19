//! Hex encode/decode for target digests passed in on the command line.
//!
//! Mirrors the reference tool's `bytesFromHash`: a plain hex string,
//! exactly two characters per digest byte, decoded most-significant
//! nibble first.

use crate::error::{RainbowError, Result};

/// Decode a hex string into exactly `expected_len` bytes.
pub fn decode_hash_hex(hex: &str, expected_len: usize) -> Result<Vec<u8>> {
    if hex.len() != expected_len * 2 {
        return Err(RainbowError::InvalidHashHex { expected: expected_len * 2, actual: hex.len() });
    }

    let mut bytes = Vec::with_capacity(expected_len);
    let chars: Vec<char> = hex.chars().collect();
    for pair in chars.chunks(2) {
        let byte_str: String = pair.iter().collect();
        let byte = u8::from_str_radix(&byte_str, 16)
            .map_err(|_| RainbowError::InvalidHashHex { expected: expected_len * 2, actual: hex.len() })?;
        bytes.push(byte);
    }

    Ok(bytes)
}

/// Encode a digest as a lowercase hex string, two characters per byte.
pub fn encode_hash_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
