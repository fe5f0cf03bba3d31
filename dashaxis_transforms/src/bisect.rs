// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion points in sorted sequences.
//!
//! All functions assume the input is sorted ascending under the comparison they use. Unsorted
//! input does not panic, but the returned index is meaningless.

use core::cmp::Ordering;

use crate::SortKey;

/// Returns the leftmost insertion point for `target` in `items`.
///
/// This is the smallest `i` such that every element before `i` compares less than `target`.
pub fn bisect_left<T: SortKey>(items: &[T], target: &T) -> usize {
    items.partition_point(|x| x.cmp_key(target) == Ordering::Less)
}

/// Returns the rightmost insertion point for `target` in `items`.
///
/// This is the smallest `i` such that every element before `i` compares less than or equal to
/// `target`.
pub fn bisect_right<T: SortKey>(items: &[T], target: &T) -> usize {
    items.partition_point(|x| x.cmp_key(target) != Ordering::Greater)
}

/// [`bisect_left`] over `key(item)`, for sequences sorted by an extracted key.
pub fn bisect_left_by_key<T, K, F>(items: &[T], target: &K, mut key: F) -> usize
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    items.partition_point(|x| key(x).cmp_key(target) == Ordering::Less)
}

/// [`bisect_right`] over `key(item)`, for sequences sorted by an extracted key.
pub fn bisect_right_by_key<T, K, F>(items: &[T], target: &K, mut key: F) -> usize
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    items.partition_point(|x| key(x).cmp_key(target) != Ordering::Greater)
}

/// [`bisect_left`] with a caller-supplied comparator.
///
/// `cmp(item)` returns how `item` orders relative to the (implicit) target.
pub fn bisect_left_by<T, F>(items: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    items.partition_point(|x| cmp(x) == Ordering::Less)
}

/// [`bisect_right`] with a caller-supplied comparator.
///
/// `cmp(item)` returns how `item` orders relative to the (implicit) target.
pub fn bisect_right_by<T, F>(items: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    items.partition_point(|x| cmp(x) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn duplicates_split_left_and_right() {
        let v = [1, 3, 3, 5];
        assert_eq!(bisect_left(&v, &3), 1);
        assert_eq!(bisect_right(&v, &3), 3);
        assert_eq!(bisect_left(&v, &0), 0);
        assert_eq!(bisect_right(&v, &9), 4);
        assert_eq!(bisect_left(&v, &4), 3);
        assert_eq!(bisect_right(&v, &4), 3);
    }

    #[test]
    fn empty_sequence_returns_zero() {
        let v: [f64; 0] = [];
        assert_eq!(bisect_left(&v, &1.0), 0);
        assert_eq!(bisect_right(&v, &1.0), 0);
    }

    #[test]
    fn keyed_search_over_samples() {
        // (elapsed seconds, inputs executed)
        let samples = [(0.0, 0_u64), (1.5, 120), (1.5, 180), (4.0, 900)];
        assert_eq!(bisect_left_by_key(&samples, &1.5, |s| s.0), 1);
        assert_eq!(bisect_right_by_key(&samples, &1.5, |s| s.0), 3);
        assert_eq!(bisect_right_by_key(&samples, &500, |s| s.1), 3);
    }

    #[test]
    fn comparator_search_matches_keyed_search() {
        let v = [1.0, 2.0, 2.0, 2.0, 8.0];
        let target = 2.0;
        assert_eq!(bisect_left_by(&v, |x: &f64| x.cmp_key(&target)), 1);
        assert_eq!(bisect_right_by(&v, |x: &f64| x.cmp_key(&target)), 4);
    }

    #[test]
    fn float_zero_signs_are_one_position() {
        let v = [-1.0, -0.0, 0.0, 1.0];
        assert_eq!(bisect_left(&v, &0.0), 1);
        assert_eq!(bisect_right(&v, &-0.0), 3);
    }
}
