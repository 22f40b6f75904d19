//! Table file naming: `<hashName>.<chainNum>.<chainLen>.<index>.rt`.
//!
//! The table file carries no header (see [`crate::infra::table_io`]); every
//! piece of metadata needed to interpret its bytes lives in the filename
//! instead, exactly as the reference tool's `generateTableName` /
//! `parseTablename` pair encode and decode it.

use std::path::Path;

use crate::constants::TABLE_EXTENSION;
use crate::error::{RainbowError, Result};

/// Build a table file name from its parameters.
pub fn make_table_name(hash_name: &str, chain_num: u32, chain_len: u32, index: u32) -> String {
    format!("{hash_name}.{chain_num}.{chain_len}.{index}.{TABLE_EXTENSION}")
}

/// Parse a table file name (path components are ignored; only the final
/// component is interpreted) back into `(hash_name, chain_num, chain_len, index)`.
pub fn parse_table_name(path: impl AsRef<Path>) -> Result<(String, u32, u32, u32)> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RainbowError::MalformedTableName(path.to_path_buf()))?;

    let malformed = || RainbowError::MalformedTableName(path.to_path_buf());

    let mut fields = file_name.split('.');
    let hash_name = fields.next().ok_or_else(malformed)?;
    let chain_num: u32 = fields.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let chain_len: u32 = fields.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let index: u32 = fields.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    let extension = fields.next().ok_or_else(malformed)?;

    if extension != TABLE_EXTENSION || fields.next().is_some() || hash_name.is_empty() {
        return Err(malformed());
    }

    Ok((hash_name.to_string(), chain_num, chain_len, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let name = make_table_name("wikihash", 1_000_000, 3000, 0);
        assert_eq!(name, "wikihash.1000000.3000.0.rt");
        assert_eq!(
            parse_table_name(&name).unwrap(),
            ("wikihash".to_string(), 1_000_000, 3000, 0)
        );
    }

    #[test]
    fn parse_strips_directory_components() {
        let parsed = parse_table_name("/tmp/wikihash.1000000.3000.0.rt").unwrap();
        assert_eq!(parsed, ("wikihash".to_string(), 1_000_000, 3000, 0));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_table_name("wikihash.1000000.3000.rt").is_err());
    }

    #[test]
    fn rejects_wrong_extension() {
        assert!(parse_table_name("wikihash.1000000.3000.0.bin").is_err());
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert!(parse_table_name("wikihash.abc.3000.0.rt").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse_table_name("wikihash.1000000.3000.0.rt.bak").is_err());
    }
}
