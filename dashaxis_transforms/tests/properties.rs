// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks against straightforward reference implementations.

use dashaxis_transforms::{
    bisect_left, bisect_left_by_key, bisect_right, bisect_right_by_key, sort_by_key_stable,
    sorted_by_key, window_indices,
};
use proptest::prelude::*;

fn linear_left(v: &[i64], target: i64) -> usize {
    v.iter().take_while(|x| **x < target).count()
}

fn linear_right(v: &[i64], target: i64) -> usize {
    v.iter().take_while(|x| **x <= target).count()
}

fn sorted_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50_i64..50, 0..64).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

proptest! {
    #[test]
    fn bisect_matches_linear_scan(v in sorted_vec(), target in -60_i64..60) {
        prop_assert_eq!(bisect_left(&v, &target), linear_left(&v, target));
        prop_assert_eq!(bisect_right(&v, &target), linear_right(&v, target));
    }

    #[test]
    fn left_never_exceeds_right(v in sorted_vec(), target in -60_i64..60) {
        prop_assert!(bisect_left(&v, &target) <= bisect_right(&v, &target));
    }

    #[test]
    fn keyed_bisect_matches_plain_bisect_on_keys(v in sorted_vec(), target in -60_i64..60) {
        let wrapped: Vec<(i64, usize)> = v.iter().copied().zip(0..).collect();
        prop_assert_eq!(bisect_left_by_key(&wrapped, &target, |w| w.0), bisect_left(&v, &target));
        prop_assert_eq!(bisect_right_by_key(&wrapped, &target, |w| w.0), bisect_right(&v, &target));
    }

    #[test]
    fn window_contains_exactly_the_in_range_samples(
        v in sorted_vec(),
        lo in -60_i64..60,
        hi in -60_i64..60,
    ) {
        let r = window_indices(&v, &lo, &hi, |x| *x);
        let expected = v.iter().filter(|x| **x >= lo && **x <= hi).count();
        prop_assert_eq!(r.len(), expected);
        prop_assert!(v[r].iter().all(|x| *x >= lo && *x <= hi));
    }

    #[test]
    fn stable_sort_matches_std_stable_sort(
        v in prop::collection::vec((0_u8..4, 0_u8..4), 0..48),
    ) {
        // Tag each record with its input position to observe stability.
        let tagged: Vec<(u8, u8, usize)> = v.iter().zip(0..).map(|(&(a, b), i)| (a, b, i)).collect();

        let mut ours = tagged.clone();
        sort_by_key_stable(&mut ours, |r| r.0);
        let mut reference = tagged.clone();
        reference.sort_by_key(|r| r.0);
        prop_assert_eq!(&ours, &reference);

        let copied = sorted_by_key(&tagged, |r| (r.0, r.1));
        let mut reference = tagged;
        reference.sort_by_key(|r| (r.0, r.1));
        prop_assert_eq!(copied, reference);
    }
}
