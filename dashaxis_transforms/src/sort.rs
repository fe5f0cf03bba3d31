// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable multi-key sorting.
//!
//! Dashboard views order records by one field and tie-break by another (status, then recency).
//! Keys are scalars or tuples of [`SortKey`]s; full ties keep their input order so repeated
//! renders are deterministic.

extern crate alloc;

use alloc::vec::Vec;

use crate::SortKey;

/// Sorts `items` in place by the key returned from `key`.
///
/// The sort is stable. `key` may be called several times per element; use [`sorted_by_key`] or
/// [`argsort_by_key`] when key extraction is expensive.
pub fn sort_by_key_stable<T, K, F>(items: &mut [T], mut key: F)
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    items.sort_by(|a, b| key(a).cmp_key(&key(b)));
}

/// Returns the permutation that stably sorts `items` by `key`.
///
/// `key` is called exactly once per element. `out[i]` is the input index of the element that
/// belongs at position `i`.
pub fn argsort_by_key<T, K, F>(items: &[T], key: F) -> Vec<usize>
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, usize)> = items.iter().map(key).zip(0..).collect();
    keyed.sort_by(|a, b| a.0.cmp_key(&b.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Returns a stably sorted copy of `items`, leaving the input untouched.
pub fn sorted_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: SortKey,
    F: FnMut(&T) -> K,
{
    argsort_by_key(items, key)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Rec {
        a: i32,
        b: i32,
    }

    const fn rec(a: i32, b: i32) -> Rec {
        Rec { a, b }
    }

    #[test]
    fn single_field_key_keeps_ties_in_input_order() {
        let mut v = vec![rec(1, 2), rec(1, 1), rec(0, 9)];
        sort_by_key_stable(&mut v, |x| [x.a]);
        assert_eq!(v, vec![rec(0, 9), rec(1, 2), rec(1, 1)]);
    }

    #[test]
    fn tuple_key_orders_lexicographically() {
        let v = vec![rec(1, 2), rec(1, 1), rec(0, 9)];
        let sorted = sorted_by_key(&v, |x| [x.a, x.b]);
        assert_eq!(sorted, vec![rec(0, 9), rec(1, 1), rec(1, 2)]);
        // Input untouched.
        assert_eq!(v[0], rec(1, 2));
    }

    #[test]
    fn status_then_recency() {
        // (status rank, -timestamp): failing first, newest first within a status.
        let runs = [("ok", 3.0), ("fail", 1.0), ("ok", 7.5), ("fail", 4.0)];
        let rank = |s: &str| if s == "fail" { 0 } else { 1 };
        let order = argsort_by_key(&runs, |r| (rank(r.0), -r.1));
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn empty_input_is_fine() {
        let mut v: Vec<f64> = Vec::new();
        sort_by_key_stable(&mut v, |x| *x);
        assert!(v.is_empty());
        assert!(argsort_by_key(&v, |x| *x).is_empty());
    }

    #[test]
    fn float_keys_with_nan_do_not_panic() {
        let mut v = vec![2.0, f64::NAN, -0.0, 0.0, f64::NEG_INFINITY];
        sort_by_key_stable(&mut v, |x| *x);
        assert_eq!(v[0], f64::NEG_INFINITY);
        // -0.0 and 0.0 tie, so they keep input order.
        assert!(v[1].is_sign_negative() && v[1] == 0.0);
        assert!(v[2].is_sign_positive() && v[2] == 0.0);
        assert_eq!(v[3], 2.0);
        assert!(v[4].is_nan());
    }
}
