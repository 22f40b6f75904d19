//! In-place table sorting.
//!
//! A rainbow table file is sorted by endpoint once, after generation, so
//! the searcher can binary-search it. This is a direct port of the
//! reference tool's `quickSortTable`/`sortRainbowTable`: a recursive
//! Hoare-style quicksort run directly over the memory-mapped file, with
//! no temporary copy of the table ever held in memory.

use std::path::Path;

use crate::domain::chain::ChainEntry;
use crate::error::Result;
use crate::infra::table_io::MappedTableMut;

/// Recursive quicksort over `table[beg..end]`, by ascending `end_seed`.
///
/// Pivot is always `table[beg]`, matching the reference implementation;
/// this is a deliberate choice to stay bit-for-bit behaviorally identical
/// to what the searcher's binary search was validated against, not a
/// general-purpose quicksort recommendation.
pub fn quick_sort_table(table: &mut [ChainEntry], beg: usize, end: usize) {
    if end > beg + 1 {
        let piv = table[beg].end_seed;
        let mut l = beg + 1;
        let mut r = end;

        while l < r {
            if table[l].end_seed <= piv {
                l += 1;
            } else {
                r -= 1;
                table.swap(l, r);
            }
        }
        table.swap(l - 1, beg);

        quick_sort_table(table, beg, l - 1);
        quick_sort_table(table, r, end);
    }
}

/// Sort a table file in place, memory-mapping it read-write.
///
/// `chain_num` is the number of entries the caller expects the file to
/// hold; tables with fewer than two chains need no sorting.
pub fn sort_table_file(path: impl AsRef<Path>, chain_num: usize) -> Result<()> {
    if chain_num < 2 {
        return Ok(());
    }

    let mut mapped = MappedTableMut::open(path)?;
    let entries = mapped.as_mut_slice();
    quick_sort_table(entries, 0, chain_num.min(entries.len()));
    Ok(())
}
