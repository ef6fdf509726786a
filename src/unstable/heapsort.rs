//! Heap sort through a binary min-heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::SortError;

/// Sorts `data` into a freshly allocated vector, leaving `data` untouched.
///
/// The heap is built from the whole input in one bulk construction (the
/// `From<Vec>` bottom-up heapify, O(n)) rather than n sequential pushes,
/// then the minimum is popped into the output until the heap drains.
/// O(n log n) in every case, unstable.
pub fn sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut heap: BinaryHeap<Reverse<T>> = data.iter().cloned().map(Reverse).collect();
    let mut out = Vec::with_capacity(data.len());
    while let Some(Reverse(x)) = heap.pop() {
        out.push(x);
    }
    out
}

/// Checked form of [`sort`]: validates that the input is present.
pub fn try_sort<T: Ord + Clone>(data: Option<&[T]>) -> Result<Vec<T>, SortError> {
    let data = data.ok_or(SortError::MissingInput)?;
    Ok(sort(data))
}
