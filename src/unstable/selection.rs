//! Selection sort.

use std::cmp::Ordering;

use crate::error::SortError;

sort_impl!("selection_unstable");

/// Sorts `arr` by natural order.
pub fn sort<T: Ord>(arr: &mut [T]) {
    sort_by(arr, T::cmp);
}

/// Sorts `arr` with `compare`.
///
/// In place and unstable; O(n²) comparisons regardless of the initial order.
/// Each round scans the unsorted tail for its minimum and swaps it to the
/// front, so at most n - 1 swaps happen in total.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..arr.len() {
        let mut min_idx = i;
        for j in i + 1..arr.len() {
            if compare(&arr[j], &arr[min_idx]).is_lt() {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
    }
}

/// Checked form of [`sort_by`]: validates that both collaborators are
/// present before touching the slice.
pub fn try_sort_by<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = arr.ok_or(SortError::MissingInput)?;
    let compare = compare.ok_or(SortError::MissingComparator)?;
    sort_by(arr, compare);
    Ok(())
}
