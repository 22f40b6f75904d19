//! `rtcrack_search <tablePath> <targetHashHex>`
//!
//! Parses the table's hash function, chain count, and chain length from
//! its file name, then searches it for the seed behind the target digest.

use std::process::ExitCode;

use rtcrack_rainbow::app::hash_len_for;
use rtcrack_rainbow::domain::hex::decode_hash_hex;
use rtcrack_rainbow::domain::table_name::parse_table_name;

fn usage() {
    eprintln!(
        "rtcrack_search: rainbow table search.\n\
         Usage: rtcrack_search <rainbow table> <target hash>\n"
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        usage();
        eprintln!("[-] Invalid number of arguments");
        return ExitCode::FAILURE;
    }

    let table_path = &args[1];
    let target_hash_hex = &args[2];

    let hash_name = match parse_table_name(table_path) {
        Ok((hash_name, ..)) => hash_name,
        Err(e) => {
            eprintln!("[-] An error occurred: {e}");
            return ExitCode::FAILURE;
        }
    };

    let hash_len = match hash_len_for(&hash_name) {
        Ok(len) => len,
        Err(e) => {
            eprintln!("[-] An error occurred: {e}");
            return ExitCode::FAILURE;
        }
    };

    let target_digest = match decode_hash_hex(target_hash_hex, hash_len) {
        Ok(digest) => digest,
        Err(e) => {
            eprintln!("[-] An error occurred: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rtcrack_rainbow::app::search_table_file(table_path, &target_digest) {
        Ok(Some(seed)) => {
            println!("[+] Seed found: {seed}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("[-] Seed not found :-(");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[-] An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
