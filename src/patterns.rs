//! Input patterns for the test suite and the benchmarks.
//!
//! Every generator is deterministic for a fixed seed, so a failing test run
//! can be reproduced exactly. The seed defaults to a crate constant and can
//! be overridden with the `CLASSIC_SORTS_SEED` environment variable.

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    std::env::var("CLASSIC_SORTS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_CAFE)
});

/// The seed all random patterns derive from.
pub fn seed() -> u64 {
    *SEED
}

// Mix the length in so different sizes don't share a prefix.
fn rng(len: usize) -> StdRng {
    StdRng::seed_from_u64(seed() ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// `0, 1, 2, ..` — already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `.., 2, 1, 0` — sorted in reverse.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Uniformly distributed values over the full `i32` range.
pub fn random_uniform(len: usize) -> Vec<i32> {
    let mut rng = rng(len);
    (0..len).map(|_| rng.gen()).collect()
}

/// Roughly sqrt(len) distinct keys, so every key occurs many times.
pub fn random_dense(len: usize) -> Vec<i32> {
    let mut rng = rng(len);
    let distinct = (len as f64).sqrt().ceil() as i32 + 1;
    (0..len).map(|_| rng.gen_range(0..distinct)).collect()
}

/// Zipfian-distributed keys; a handful of values dominate the slice.
pub fn zipf_low(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = rng(len);
    let dist = ZipfDistribution::new(len.max(2), 1.1)
        .expect("positive element count and exponent");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Sorted runs of alternating direction (sawtooth).
pub fn saw_mixed(len: usize) -> Vec<i32> {
    let run = (len / 5).max(1);
    let mut v = Vec::with_capacity(len);
    let mut up = true;
    while v.len() < len {
        let n = (run.min(len - v.len())) as i32;
        if up {
            v.extend(0..n);
        } else {
            v.extend((0..n).rev());
        }
        up = !up;
    }
    v
}

/// Every element the same.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![42; len]
}
