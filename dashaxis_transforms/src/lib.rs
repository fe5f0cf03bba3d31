// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordering utilities for dashboard time series.
//!
//! This crate provides:
//! - [`SortKey`], a total comparison usable for scalars (including floats), tuples, and slices,
//! - stable multi-key sorting ([`sort_by_key_stable`], [`sorted_by_key`]),
//! - leftmost/rightmost insertion points over sorted sequences ([`bisect_left`],
//!   [`bisect_right`] and their keyed/comparator variants), and
//! - series lookups built on the above ([`window_indices`], [`nearest_index`],
//!   [`last_at_or_before`]).
//!
//! Nothing here allocates except the copying sort helpers, and nothing extends built-in types:
//! every operation is a free function taking the sequence and an explicit key extractor.

#![no_std]

extern crate alloc;

mod bisect;
mod key;
mod series;
mod sort;

pub use bisect::{
    bisect_left, bisect_left_by, bisect_left_by_key, bisect_right, bisect_right_by,
    bisect_right_by_key,
};
pub use key::SortKey;
pub use series::{last_at_or_before, nearest_index, window_indices};
pub use sort::{argsort_by_key, sort_by_key_stable, sorted_by_key};
