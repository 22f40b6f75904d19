//! Filename round-trip and exhaustive-cracker scenarios from the
//! rainbow-table specification's testable-properties list.

use rtcrack_rainbow::app::crack_hash;
use rtcrack_rainbow::domain::hashfunc::HashRegistry;
use rtcrack_rainbow::domain::table_name::parse_table_name;
use rtcrack_rainbow::HashFunction;

#[test]
fn parse_table_name_recovers_all_four_fields() {
    let (hash_name, chain_num, chain_len, index) =
        parse_table_name("/tmp/wikihash.1000000.3000.0.rt").unwrap();
    assert_eq!(hash_name, "wikihash");
    assert_eq!(chain_num, 1_000_000);
    assert_eq!(chain_len, 3000);
    assert_eq!(index, 0);
}

#[test]
fn exhaustive_crack_recovers_a_small_seed_with_wikihash() {
    let registry = HashRegistry::with_builtins();
    let hash_fn = registry.resolve("wikihash").unwrap();

    let target_seed = 777u32;
    let mut digest = vec![0u8; hash_fn.hash_len()];
    hash_fn.hash_into(target_seed, &mut digest);

    let found = crack_hash("wikihash", &digest).unwrap();
    assert_eq!(found, Some(target_seed));
}

#[test]
fn exhaustive_crack_reports_absence_for_an_unknown_hash_function() {
    let digest = vec![0u8; 16];
    assert!(crack_hash("not-a-real-hash", &digest).is_err());
}
