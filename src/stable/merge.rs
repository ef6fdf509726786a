//! Top-down merge sort.

use std::cmp::Ordering;

use crate::error::SortError;

sort_impl!("merge_stable");

/// Sorts `arr` by natural order.
pub fn sort<T: Ord + Clone>(arr: &mut [T]) {
    sort_by(arr, T::cmp);
}

/// Sorts `arr` with `compare`.
///
/// Out of place: each recursion level clones the two halves into auxiliary
/// buffers, sorts them, and merges back into `arr`, for O(n) extra memory
/// and O(n log n) time in every case. An odd-length slice puts the extra
/// element in the right half. Stable: when the run heads compare equal, the
/// left run's element is taken first.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(arr, &mut compare);
}

fn sort_rec<T, F>(arr: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() < 2 {
        return;
    }
    let mid = arr.len() / 2;
    let mut left = arr[..mid].to_vec();
    let mut right = arr[mid..].to_vec();
    sort_rec(&mut left, compare);
    sort_rec(&mut right, compare);
    merge(arr, &left, &right, compare);
}

// Merges two sorted runs into `arr`, taking from `left` on ties.
fn merge<T, F>(arr: &mut [T], left: &[T], right: &[T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut a = 0;
    let mut b = 0;
    while a < left.len() && b < right.len() {
        if compare(&left[a], &right[b]).is_le() {
            arr[a + b] = left[a].clone();
            a += 1;
        } else {
            arr[a + b] = right[b].clone();
            b += 1;
        }
    }
    while a < left.len() {
        arr[a + b] = left[a].clone();
        a += 1;
    }
    while b < right.len() {
        arr[a + b] = right[b].clone();
        b += 1;
    }
}

/// Checked form of [`sort_by`]: validates that both collaborators are
/// present before touching the slice.
pub fn try_sort_by<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = arr.ok_or(SortError::MissingInput)?;
    let compare = compare.ok_or(SortError::MissingComparator)?;
    sort_by(arr, compare);
    Ok(())
}
