//! Cocktail sort, the bidirectional variant of bubble sort.

use std::cmp::Ordering;

use crate::error::SortError;

sort_impl!("cocktail_stable");

/// Sorts `arr` by natural order.
pub fn sort<T: Ord>(arr: &mut [T]) {
    sort_by(arr, T::cmp);
}

/// Sorts `arr` with `compare`.
///
/// In place and stable: only adjacent out-of-order pairs are swapped, so
/// equal elements never cross. Adaptive: a forward sweep that swaps nothing
/// ends the sort, which makes already-sorted input cost exactly n - 1
/// comparisons. Both sweep boundaries shrink to the last swap position, so
/// prefixes and suffixes that are already in order are never rescanned.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() < 2 {
        return;
    }

    let mut start = 0;
    let mut end = arr.len() - 1;
    let mut swapped = true;
    while swapped {
        // Forward sweep bubbles the maximum of the active range to `end`.
        swapped = false;
        let upper = end;
        for i in start..upper {
            if compare(&arr[i], &arr[i + 1]).is_gt() {
                arr.swap(i, i + 1);
                swapped = true;
                end = i;
            }
        }

        // Backward sweep bubbles the minimum down to `start`.
        if swapped {
            swapped = false;
            let lower = start;
            for i in (lower + 1..=end).rev() {
                if compare(&arr[i - 1], &arr[i]).is_gt() {
                    arr.swap(i - 1, i);
                    swapped = true;
                    start = i;
                }
            }
        }
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
