use std::cell::Cell;

use classic_sorts::instantiate_sort_tests;
use classic_sorts::stable::cocktail;
use classic_sorts::tests::check_stability;

type TestSort = cocktail::SortImpl;

instantiate_sort_tests!(TestSort);

#[test]
fn stability() {
    check_stability::<TestSort>();
}

// The adaptivity contract: sorted input costs one forward sweep and nothing
// more, observed through a counting comparator.
#[test]
fn sorted_input_costs_one_sweep() {
    let n = 1_000;
    let mut v: Vec<i32> = (0..n).collect();
    let comparisons = Cell::new(0usize);
    cocktail::sort_by(&mut v, |a: &i32, b: &i32| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });
    assert_eq!(comparisons.get(), n as usize - 1);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

// A single misplaced element at the far end must not trigger full O(n²)
// rescans thanks to the shrinking boundaries.
#[test]
fn nearly_sorted_input_stays_subquadratic() {
    let n: i32 = 2_000;
    let mut v: Vec<i32> = (1..n).collect();
    v.push(0);
    let comparisons = Cell::new(0usize);
    cocktail::sort_by(&mut v, |a: &i32, b: &i32| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    // One forward sweep, one backward sweep, one verification sweep.
    assert!(comparisons.get() < 4 * n as usize);
}
