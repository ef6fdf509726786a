use classic_sorts::instantiate_sort_tests;
use classic_sorts::patterns;
use classic_sorts::pivot::{FnPivot, RandomPivot};
use classic_sorts::unstable::quicksort;
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestSort = quicksort::SortImpl;

instantiate_sort_tests!(TestSort);

// Pinning the pivot to the range's first index is the classic adversarial
// source: correctness must survive even though the split degenerates.
#[test]
fn first_index_pivot_survives_adversarial_inputs() {
    for len in [20usize, 33, 64, 257] {
        for pattern in [patterns::ascending, patterns::descending] {
            let mut v = pattern(len);
            let mut expected = v.clone();
            expected.sort();
            quicksort::sort_by_with(&mut v, i32::cmp, &mut FnPivot(|_| 0));
            assert_eq!(v, expected, "len {len}");
        }
    }
}

#[test]
fn last_index_pivot_survives_adversarial_inputs() {
    for len in [20usize, 33, 64, 257] {
        for pattern in [patterns::ascending, patterns::descending] {
            let mut v = pattern(len);
            let mut expected = v.clone();
            expected.sort();
            quicksort::sort_by_with(&mut v, i32::cmp, &mut FnPivot(|bound| bound - 1));
            assert_eq!(v, expected, "len {len}");
        }
    }
}

#[test]
fn seeded_source_is_deterministic() {
    let input = patterns::random_uniform(512);

    let mut a = input.clone();
    let mut b = input;
    quicksort::sort_by_with(
        &mut a,
        i32::cmp,
        &mut RandomPivot::with_rng(StdRng::seed_from_u64(7)),
    );
    quicksort::sort_by_with(
        &mut b,
        i32::cmp,
        &mut RandomPivot::with_rng(StdRng::seed_from_u64(7)),
    );
    assert_eq!(a, b);
}

// Every element equal floods both partition scans with ties; the pointers
// must still meet and terminate.
#[test]
fn all_equal_with_degenerate_pivot() {
    let mut v = vec![7i32; 129];
    quicksort::sort_by_with(&mut v, i32::cmp, &mut FnPivot(|_| 0));
    assert_eq!(v, vec![7i32; 129]);
}
