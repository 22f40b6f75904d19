//! Table generation workflow: spawn a worker per available processor, each
//! drawing its own quota of random-startpoint chains and flushing them to
//! the shared table file in fixed-size buckets.
//!
//! Grounded directly in the reference tool's `createRainbowTable` /
//! `chainGenerationWorker`: the only substantive change is that Rust's
//! ownership rules let the workers share one `File` behind a `Mutex`
//! instead of one `FILE *` behind a `pthread_mutex_t`.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, info};

use crate::constants::WORKER_BUFFER_SIZE;
use crate::domain::chain::{generate_chain, ChainEntry};
use crate::domain::hashfunc::HashFunction;
use crate::domain::rng::SharedRng;
use crate::error::{RainbowError, Result};

struct WorkerQuota {
    chain_num: u32,
}

fn worker_quota(total_chains: u32, thread_num: usize, worker_index: usize) -> WorkerQuota {
    let base = total_chains / thread_num as u32;
    let remainder = total_chains % thread_num as u32;
    let chain_num = if worker_index < thread_num - 1 { base } else { base + remainder };
    WorkerQuota { chain_num }
}

fn run_worker(
    hash_fn: &dyn HashFunction,
    chain_len: u32,
    chain_num: u32,
    rng: &SharedRng,
    table_file: &Mutex<File>,
) -> Result<()> {
    let mut buffer: Vec<ChainEntry> = Vec::with_capacity(WORKER_BUFFER_SIZE);
    let mut remaining = chain_num;

    while remaining > 0 {
        let bucket = remaining.min(WORKER_BUFFER_SIZE as u32);
        buffer.clear();
        for _ in 0..bucket {
            buffer.push(generate_chain(hash_fn, chain_len, rng));
        }

        let mut bytes = Vec::with_capacity(buffer.len() * 8);
        for entry in &buffer {
            bytes.write_u32::<LittleEndian>(entry.start_seed)?;
            bytes.write_u32::<LittleEndian>(entry.end_seed)?;
        }

        {
            let mut file = table_file.lock().unwrap_or_else(|e| e.into_inner());
            let written = file.write(&bytes)?;
            if written != bytes.len() {
                return Err(RainbowError::ShortWrite { attempted: buffer.len() });
            }
        }

        remaining -= bucket;
    }

    Ok(())
}

/// Generate a table of `chain_num` chains, each `chain_len` rounds long,
/// under `hash_fn`, writing the headerless chain-entry array to `path`.
///
/// Spawns one worker per available processor (falling back to one thread
/// if the processor count cannot be determined), splits `chain_num`
/// chains across them, and has each worker accumulate chains in a local
/// buffer of [`WORKER_BUFFER_SIZE`] before taking the shared file lock to
/// flush a bucket — this bounds lock contention to one flush per bucket
/// rather than one per chain.
pub fn build_table(
    hash_fn: &dyn HashFunction,
    chain_num: u32,
    chain_len: u32,
    path: impl AsRef<Path>,
    rng: &SharedRng,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let table_file = Mutex::new(file);

    let thread_num = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    info!(
        "generating {chain_num} chains of length {chain_len} across {thread_num} workers -> {}",
        path.display()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_num)
        .build()
        .map_err(|e| RainbowError::Io(std::io::Error::other(e)))?;

    pool.scope(|scope| {
        let (tx, rx) = std::sync::mpsc::channel();

        for worker_index in 0..thread_num {
            let quota = worker_quota(chain_num, thread_num, worker_index);
            let tx = tx.clone();
            let table_file = &table_file;
            scope.spawn(move |_| {
                debug!("worker {worker_index} generating {} chains", quota.chain_num);
                let outcome = run_worker(hash_fn, chain_len, quota.chain_num, rng, table_file);
                let _ = tx.send(outcome);
            });
        }
        drop(tx);

        let mut status = Ok(());
        for outcome in rx {
            if let Err(e) = outcome {
                status = Err(e);
            }
        }
        status
    })
}
