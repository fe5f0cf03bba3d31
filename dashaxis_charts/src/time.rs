// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elapsed-time formatting.
//!
//! Campaign durations are shown with their two most significant units: `45s`, `2m 05s`,
//! `1h 02m`, `3d 04h`. Values are whole seconds after rounding.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Formats an elapsed duration given in seconds.
///
/// Non-finite values render as their literal text.
pub fn format_elapsed_seconds(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }

    let secs = {
        let secs_f = v.abs().round().clamp(0.0, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            secs_f as i64
        }
    };
    let sign = if v < 0.0 && secs > 0 { "-" } else { "" };

    let d = secs / DAY;
    let h = (secs % DAY) / HOUR;
    let m = (secs % HOUR) / MINUTE;
    let s = secs % MINUTE;

    if d > 0 {
        alloc::format!("{sign}{d}d {h:02}h")
    } else if h > 0 {
        alloc::format!("{sign}{h}h {m:02}m")
    } else if m > 0 {
        alloc::format!("{sign}{m}m {s:02}s")
    } else {
        alloc::format!("{sign}{s}s")
    }
}
