//! `rtcrack_generate <chainNum> <chainLen> <tableCount> <hashName>`
//!
//! Generates `tableCount` rainbow tables, indexed `0..tableCount`, each
//! with `chainNum` chains of `chainLen` rounds, under the named hash
//! function, writing them into the current directory.

use std::process::ExitCode;

fn usage() {
    eprintln!(
        "rtcrack_generate: rainbow table generator.\n\
         Usage: rtcrack_generate <chain num> <chain len> <table count> <hash function>\n"
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        usage();
        eprintln!("[-] Invalid number of arguments");
        return ExitCode::FAILURE;
    }

    let chain_num: u32 = match args[1].parse() {
        Ok(v) => v,
        Err(_) => {
            usage();
            eprintln!("[-] Invalid chain num: {}", args[1]);
            return ExitCode::FAILURE;
        }
    };
    let chain_len: u32 = match args[2].parse() {
        Ok(v) => v,
        Err(_) => {
            usage();
            eprintln!("[-] Invalid chain len: {}", args[2]);
            return ExitCode::FAILURE;
        }
    };
    let table_count: u32 = match args[3].parse() {
        Ok(v) => v,
        Err(_) => {
            usage();
            eprintln!("[-] Invalid table count: {}", args[3]);
            return ExitCode::FAILURE;
        }
    };
    let hash_name = &args[4];

    match rtcrack_rainbow::app::generate_tables(hash_name, chain_num, chain_len, table_count, ".") {
        Ok(paths) => {
            for path in &paths {
                println!("[+] Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[-] An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
