//! Table file I/O: a bare, headerless array of [`ChainEntry`] records.
//!
//! Reading and writing a whole table at once goes through plain buffered
//! I/O; searching goes through [`open_mapped`], which memory-maps the file
//! so the searcher can binary-search it without loading it all into RAM.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::{Mmap, MmapMut};

use crate::constants::CHAIN_ENTRY_SIZE;
use crate::domain::chain::ChainEntry;
use crate::error::{RainbowError, Result};

/// Read an entire table file into memory.
pub fn load_table(path: impl AsRef<Path>) -> io::Result<Vec<ChainEntry>> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;
    let num_entries = metadata.len() as usize / CHAIN_ENTRY_SIZE;

    let mut reader = BufReader::new(file);
    let mut entries = Vec::with_capacity(num_entries);

    for _ in 0..num_entries {
        let start_seed = reader.read_u32::<LittleEndian>()?;
        let end_seed = reader.read_u32::<LittleEndian>()?;
        entries.push(ChainEntry::new(start_seed, end_seed));
    }

    Ok(entries)
}

/// Write a table's entries to a file, overwriting any existing contents.
pub fn save_table(path: impl AsRef<Path>, entries: &[ChainEntry]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writer.write_u32::<LittleEndian>(entry.start_seed)?;
        writer.write_u32::<LittleEndian>(entry.end_seed)?;
    }

    writer.flush()
}

/// A read-only memory-mapped view of a table file, reinterpreted as a
/// slice of [`ChainEntry`].
///
/// # Safety
///
/// Sound on little-endian platforms, where `ChainEntry`'s `#[repr(C)]`
/// layout matches the file's little-endian byte layout exactly.
pub struct MappedTable {
    mmap: Mmap,
    len: usize,
}

impl MappedTable {
    /// Open a table file read-only and memory-map it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RainbowError::MmapFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| RainbowError::MmapFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let len = metadata.len() as usize / CHAIN_ENTRY_SIZE;

        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| RainbowError::MmapFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { mmap, len })
    }

    /// Number of chain entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has zero entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the table as a slice of [`ChainEntry`], in file (on-disk) order.
    #[cfg(target_endian = "little")]
    pub fn as_slice(&self) -> &[ChainEntry] {
        let ptr = self.mmap.as_ptr();
        debug_assert_eq!(ptr as usize % std::mem::align_of::<ChainEntry>(), 0);
        unsafe { std::slice::from_raw_parts(ptr as *const ChainEntry, self.len) }
    }

    #[cfg(target_endian = "big")]
    pub fn as_slice(&self) -> &[ChainEntry] {
        panic!("big-endian platforms are not supported for memory-mapped tables; use load_table() instead");
    }
}

/// A writable memory-mapped view of a table file, used by the in-place
/// sorter (see [`crate::infra::table_sort`]).
pub struct MappedTableMut {
    mmap: MmapMut,
    len: usize,
}

impl MappedTableMut {
    /// Open a table file read-write and memory-map it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| RainbowError::MmapFailed { path: path.to_path_buf(), source })?;
        let metadata = file.metadata().map_err(|source| RainbowError::MmapFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let len = metadata.len() as usize / CHAIN_ENTRY_SIZE;

        let mmap = unsafe { MmapMut::map_mut(&file) }
            .map_err(|source| RainbowError::MmapFailed { path: path.to_path_buf(), source })?;

        Ok(Self { mmap, len })
    }

    /// Number of chain entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Borrow the table as a mutable slice of [`ChainEntry`].
    #[cfg(target_endian = "little")]
    pub fn as_mut_slice(&mut self) -> &mut [ChainEntry] {
        let ptr = self.mmap.as_mut_ptr();
        debug_assert_eq!(ptr as usize % std::mem::align_of::<ChainEntry>(), 0);
        unsafe { std::slice::from_raw_parts_mut(ptr as *mut ChainEntry, self.len) }
    }

    #[cfg(target_endian = "big")]
    pub fn as_mut_slice(&mut self) -> &mut [ChainEntry] {
        panic!("big-endian platforms are not supported for memory-mapped tables; use load_table()/save_table() instead");
    }
}

/// Resolve the path a table with the given name lives at, joined under `dir`.
pub fn table_path(dir: impl AsRef<Path>, table_name: &str) -> PathBuf {
    dir.as_ref().join(table_name)
}
