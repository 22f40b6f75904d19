//! `rtcrack_crack <hashName> <targetHashHex>`
//!
//! Exhaustively searches the full 32-bit seed space for the seed behind
//! the target digest, without consulting any rainbow table.

use std::process::ExitCode;

use rtcrack_rainbow::app::hash_len_for;
use rtcrack_rainbow::domain::hex::decode_hash_hex;

fn usage() {
    eprintln!(
        "rtcrack_crack: exhaustive seed cracker.\n\
         Usage: rtcrack_crack <hash function> <target hash>\n"
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

    let hash_name = &args[1];
    let target_hash_hex = &args[2];

    let hash_len = match hash_len_for(hash_name) {
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

    match rtcrack_rainbow::app::crack_hash(hash_name, &target_digest) {
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
