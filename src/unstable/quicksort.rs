//! Quicksort with a randomized, injected pivot source.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::pivot::{PivotSource, RandomPivot};

sort_impl!("quicksort_unstable");

/// Sorts `arr` by natural order with a thread-local random pivot source.
pub fn sort<T: Ord>(arr: &mut [T]) {
    sort_by_with(arr, T::cmp, &mut RandomPivot::new());
}

/// Sorts `arr` with `compare` and a thread-local random pivot source.
pub fn sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with(arr, compare, &mut RandomPivot::new());
}

/// Sorts `arr` with `compare`, drawing pivot indices from `pivots`.
///
/// In place and unstable. Expected O(n log n) for a uniform source; a
/// degenerate source degrades time and recursion depth to O(n²) / O(n) on
/// adversarial input but never affects correctness.
pub fn sort_by_with<T, F, P>(arr: &mut [T], mut compare: F, pivots: &mut P)
where
    F: FnMut(&T, &T) -> Ordering,
    P: PivotSource + ?Sized,
{
    if arr.len() < 2 {
        return;
    }
    sort_range(arr, 0, arr.len() - 1, &mut compare, pivots);
}

/// Partitions the inclusive range `[start, end]` and recurses on both sides.
fn sort_range<T, F, P>(arr: &mut [T], start: usize, end: usize, compare: &mut F, pivots: &mut P)
where
    F: FnMut(&T, &T) -> Ordering,
    P: PivotSource + ?Sized,
{
    if end <= start {
        return;
    }

    // The pivot moves to `start` and stays there for the whole scan, so
    // `arr[start]` is the pivot value in the comparisons below.
    let pivot_idx = start + pivots.pick(end - start + 1);
    arr.swap(start, pivot_idx);

    let mut i = start + 1;
    let mut j = end;
    while i <= j {
        while i <= j && compare(&arr[i], &arr[start]).is_le() {
            i += 1;
        }
        while i <= j && compare(&arr[j], &arr[start]).is_ge() {
            j -= 1;
        }
        if i <= j {
            arr.swap(i, j);
            i += 1;
            j -= 1;
        }
    }

    // `j` ends on the last element of the not-greater partition; the pivot
    // lands between the partitions.
    arr.swap(start, j);

    if j > start {
        sort_range(arr, start, j - 1, compare, pivots);
    }
    if j < end {
        sort_range(arr, j + 1, end, compare, pivots);
    }
}

/// Checked form of [`sort_by_with`]: validates that all three collaborators
/// are present before touching the slice.
pub fn try_sort_by<T, F, P>(
    arr: Option<&mut [T]>,
    compare: Option<F>,
    pivots: Option<&mut P>,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    P: PivotSource + ?Sized,
{
    let arr = arr.ok_or(SortError::MissingInput)?;
    let compare = compare.ok_or(SortError::MissingComparator)?;
    let pivots = pivots.ok_or(SortError::MissingPivotSource)?;
    sort_by_with(arr, compare, pivots);
    Ok(())
}
