//! Pivot-index sources for [`unstable::quicksort`](crate::unstable::quicksort).
//!
//! Quicksort's expected O(n log n) bound rests on the pivot being drawn
//! uniformly from the active range. The source is injected so that tests can
//! substitute deterministic sequences and force the adversarial O(n²) case.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Generator of pivot indices.
///
/// `pick` must return a value in `[0, exclusive_upper_bound)`; the caller is
/// responsible for uniformity. The sort offsets the picked value into its
/// active range and never passes a zero bound.
pub trait PivotSource {
    /// Returns an index in `[0, exclusive_upper_bound)`.
    fn pick(&mut self, exclusive_upper_bound: usize) -> usize;
}

/// Adapts a closure into a [`PivotSource`].
///
/// `FnPivot(|_| 0)` pins the pivot to the range's first index, the classic
/// worst case for pre-sorted input.
pub struct FnPivot<F>(pub F);

impl<F> PivotSource for FnPivot<F>
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, exclusive_upper_bound: usize) -> usize {
        (self.0)(exclusive_upper_bound)
    }
}

/// Uniformly random pivot source backed by a [`rand`] generator.
pub struct RandomPivot<R = ThreadRng> {
    rng: R,
}

impl RandomPivot {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPivot {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPivot<R> {
    /// Draws from the supplied generator, e.g. a seeded [`rand::rngs::StdRng`]
    /// for reproducible runs.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    fn pick(&mut self, exclusive_upper_bound: usize) -> usize {
        self.rng.gen_range(0..exclusive_upper_bound)
    }
}
