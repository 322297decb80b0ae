//! Property-based tests for the seeded shuffle.
//!
//! 1. The output is a permutation of the input.
//! 2. The same seed always yields the same output.
//! 3. Empty and single-element inputs come back unchanged.

use pixtile_core::{Lcg, shuffle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn shuffle_is_permutation(items in prop::collection::vec(any::<u16>(), 0..200), seed in any::<u64>()) {
        let mut out = shuffle(&items, Some(seed));
        prop_assert_eq!(out.len(), items.len());
        let mut expected = items.clone();
        out.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn shuffle_is_deterministic(items in prop::collection::vec(any::<u32>(), 0..200), seed in any::<u64>()) {
        prop_assert_eq!(shuffle(&items, Some(seed)), shuffle(&items, Some(seed)));
    }

    #[test]
    fn degenerate_inputs_unchanged(x in any::<i64>(), seed in any::<u64>()) {
        let empty: Vec<i64> = Vec::new();
        prop_assert!(shuffle(&empty, Some(seed)).is_empty());
        prop_assert_eq!(shuffle(&[x], Some(seed)), vec![x]);
    }

    #[test]
    fn lcg_values_in_unit_interval(seed in any::<u64>()) {
        let mut rng = Lcg::new(seed);
        for _ in 0..64 {
            let v = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }
}

#[test]
fn seeded_shuffle_reorders_catalogue_sized_input() {
    let names: Vec<usize> = (0..48).collect();
    let shuffled = shuffle(&names, Some(2024));
    assert_ne!(shuffled, names, "a 48-element shuffle should move something");
}
