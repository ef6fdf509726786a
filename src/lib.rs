//! Classical sorting algorithms with explicit complexity, stability, and
//! adaptivity contracts.
//!
//! The standard library's sorts are excellent defaults, but which algorithm
//! they run and what that costs is an implementation detail. This crate is
//! for when the algorithm itself is the point: six classical sorts, each a
//! self-contained module with a documented contract.
//!
//! | Algorithm | Module | Stable | In place | Adaptive | Time |
//! |---|---|---|---|---|---|
//! | Cocktail sort | [`stable::cocktail`] | yes | yes | yes | O(n) best, O(n²) worst |
//! | Merge sort | [`stable::merge`] | yes | no | no | O(n log n) |
//! | LSD radix sort | [`stable::radix`] | yes | no | no | O(k·n) |
//! | Selection sort | [`unstable::selection`] | no | yes | no | O(n²) |
//! | Quicksort | [`unstable::quicksort`] | no | yes | no | expected O(n log n) |
//! | Heap sort | [`unstable::heapsort`] | no | no | no | O(n log n) |
//!
//! The comparator-driven sorts expose `sort` (natural order), `sort_by`
//! (caller-supplied comparator) and a checked `try_sort_by` that reports a
//! [`SortError`] instead of assuming its collaborators are present:
//!
//! ```
//! use classic_sorts::stable::merge;
//!
//! let mut v = vec![3, 1, 4, 1, 5];
//! merge::sort(&mut v);
//! assert_eq!(v, [1, 1, 3, 4, 5]);
//! ```
//!
//! Every algorithm runs to completion on the calling thread and holds no
//! state across calls; auxiliary storage is allocated fresh per call. The
//! in-place sorts leave the input a permutation of itself under all
//! circumstances, and the checked entry points leave it untouched on error.

use std::cmp::Ordering;

pub mod error;
pub mod patterns;
pub mod pivot;

pub use error::SortError;
pub use pivot::{FnPivot, PivotSource, RandomPivot};

// Used by the macros in `tests`; not part of the public API.
#[doc(hidden)]
pub use paste;

/// Common handle over the comparator-driven sorts, used by the shared test
/// suite and the benchmarks.
///
/// `Clone` shows up in the bounds because the out-of-place algorithms build
/// their auxiliary buffers by cloning. The distribution sorts
/// ([`stable::radix`], [`unstable::heapsort`]) have no comparator and do not
/// implement this trait; their suites are bespoke.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        /// Handle wiring this module into [`crate::Sort`].
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> ::std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;
