// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookups over time-ordered samples.

use core::ops::Range;

use crate::SortKey;
use crate::bisect::{bisect_left_by_key, bisect_right_by_key};

/// Returns the index range of samples whose key lies in `[lo, hi]` (inclusive).
///
/// `samples` must be sorted by `key`. An inverted interval (`lo > hi`) yields an empty range.
/// This is how a chart clips a series to the visible domain without scanning it.
pub fn window_indices<T, K, F>(samples: &[T], lo: &K, hi: &K, mut key: F) -> Range<usize>
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    let start = bisect_left_by_key(samples, lo, &mut key);
    let end = bisect_right_by_key(samples, hi, &mut key);
    start..end.max(start)
}

/// Returns the index of the last sample whose key is `<= target`.
///
/// For step-style series (counters sampled over time) this is the sample in effect at
/// `target`. Returns `None` if every sample is after `target`.
pub fn last_at_or_before<T, K, F>(samples: &[T], target: &K, key: F) -> Option<usize>
where
    K: SortKey,
    F: FnMut(&T) -> K,
{
    bisect_right_by_key(samples, target, key).checked_sub(1)
}

/// Returns the index of the sample whose key is closest to `target`.
///
/// Equidistant neighbors resolve to the earlier sample. Returns `None` for an empty slice.
pub fn nearest_index<T, F>(samples: &[T], target: f64, mut key: F) -> Option<usize>
where
    F: FnMut(&T) -> f64,
{
    if samples.is_empty() {
        return None;
    }
    let i = bisect_left_by_key(samples, &target, &mut key);
    if i == 0 {
        return Some(0);
    }
    if i == samples.len() {
        return Some(i - 1);
    }
    let before = (target - key(&samples[i - 1])).abs();
    let after = (key(&samples[i]) - target).abs();
    if after < before {
        Some(i)
    } else {
        Some(i - 1)
    }
}
