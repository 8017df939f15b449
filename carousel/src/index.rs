//! Pure index arithmetic for the tripled scroll space.
//!
//! The physical sequence holds three copies of the `n` logical items: `[0, n)` is the previous
//! loop, `[n, 2n)` the middle loop and `[2n, 3n)` the next loop. At rest the position is kept in
//! the middle loop, so a rewrap is an index jump between identical-looking items.

use core::ops::Range;

pub(crate) fn count_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// The valid physical index range, `0..3n`. Empty for `n == 0`.
pub fn index_space(subview_count: usize) -> Range<usize> {
    0..subview_count.saturating_mul(3)
}

/// Maps a physical index to the logical item it shows.
///
/// Negative and out-of-range inputs wrap (euclidean modulo). Returns `0` when there are no
/// items.
pub fn logical_index(physical_index: i64, subview_count: usize) -> usize {
    if subview_count == 0 {
        return 0;
    }
    let n = count_i64(subview_count);
    usize::try_from(physical_index.rem_euclid(n)).unwrap_or(0)
}

/// Maps a logical index to its physical slot in the middle loop.
///
/// An out-of-range logical index maps to the first slot of the middle loop (`n`).
pub fn physical_index_for_logical(logical_index: usize, subview_count: usize) -> i64 {
    let n = count_i64(subview_count);
    if logical_index >= subview_count {
        return n;
    }
    n.saturating_add(count_i64(logical_index))
}

/// Moves a physical index back into the middle loop while preserving its logical index.
///
/// Inside `[0, 3n)` this is "add `n` below the middle loop, subtract `n` above it". The result is
/// always in `[n, 2n)`, so applying it twice is the same as applying it once.
pub fn rewrap(physical_index: i64, subview_count: usize) -> i64 {
    if subview_count == 0 {
        return physical_index;
    }
    let n = count_i64(subview_count);
    if (n..n.saturating_mul(2)).contains(&physical_index) {
        return physical_index;
    }
    n.saturating_add(physical_index.rem_euclid(n))
}

/// Whether a physical index needs a rewrap to return to the middle loop.
pub fn needs_rewrap(physical_index: i64, subview_count: usize) -> bool {
    rewrap(physical_index, subview_count) != physical_index
}
