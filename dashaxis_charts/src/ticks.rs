// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick value generation for a visible domain.

extern crate alloc;

use alloc::vec::Vec;

use crate::scale::ScaleLinear;

/// Returns tick values for the visible domain `(lo, hi)`.
///
/// - `log == true`: decade ticks (`0, 1, 10, 100, …`) inside the domain; `count` is ignored.
/// - `log == false`: “nice” 1/2/5 × 10ⁿ ticks, aiming for about `count` of them. `range` is the
///   pixel range of the baseline scale; it does not affect the values.
///
/// A zero-width domain always yields its single value.
pub fn tick_values(domain: (f64, f64), range: (f64, f64), log: bool, count: usize) -> Vec<f64> {
    let (lo, hi) = domain;
    if lo == hi {
        return alloc::vec![lo];
    }
    if log {
        decade_ticks(lo, hi)
    } else {
        ScaleLinear::new(domain, range).ticks(count)
    }
}

/// Returns `0` and the powers of ten that fall inside `[lo, hi]`, ascending.
///
/// Zero is only emitted when it is inside the interval. A non-positive `hi` therefore yields at
/// most `[0.0]`.
pub fn decade_ticks(mut lo: f64, mut hi: f64) -> Vec<f64> {
    if lo > hi {
        core::mem::swap(&mut lo, &mut hi);
    }
    let mut out = Vec::new();
    if lo <= 0.0 && 0.0 <= hi {
        out.push(0.0);
    }
    let mut p = 1.0_f64;
    while p <= hi && p.is_finite() {
        if p >= lo {
            out.push(p);
        }
        p *= 10.0;
    }
    out
}
