// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and summary statistics.
//!
//! Three shapes are provided:
//! - [`format_grouped`]: the full number with digit grouping (`12,345.5`),
//! - [`format_number`]: a compact 2–3 significant digit form with `k`/`M`/`B` suffixes (`1.5k`),
//! - [`format_tick_compact`]: the log-axis tick form with `k`/`M` suffixes only.
//!
//! None of these panic on non-finite input; `inf`, `-inf` and `NaN` render as text.

extern crate alloc;

use alloc::string::String;

/// Separator and precision conventions for grouped numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumberLocale {
    /// Inserted between groups of three integer digits.
    pub group_separator: char,
    /// Separates the integer part from the fraction.
    pub decimal_separator: char,
    /// Maximum fraction digits; trailing zeros are trimmed.
    pub max_fraction_digits: u8,
}

impl NumberLocale {
    /// `1,234.567`.
    pub const EN_US: Self = Self {
        group_separator: ',',
        decimal_separator: '.',
        max_fraction_digits: 3,
    };

    /// Sets the group separator.
    pub fn with_group_separator(mut self, sep: char) -> Self {
        self.group_separator = sep;
        self
    }

    /// Sets the decimal separator.
    pub fn with_decimal_separator(mut self, sep: char) -> Self {
        self.decimal_separator = sep;
        self
    }

    /// Sets the maximum number of fraction digits.
    pub fn with_max_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits;
        self
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

const COMPACT_SUFFIXES: [(f64, &str); 3] = [(1.0e9, "B"), (1.0e6, "M"), (1.0e3, "k")];

/// Formats `v` with digit grouping using [`NumberLocale::EN_US`].
pub fn format_grouped(v: f64) -> String {
    format_grouped_with(v, &NumberLocale::EN_US)
}

/// Formats `v` with digit grouping, rounding to the locale's fraction digits.
///
/// A value that rounds to zero renders as `0`, without a sign.
pub fn format_grouped_with(v: f64, locale: &NumberLocale) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let digits = usize::from(locale.max_fraction_digits);
    let fixed = alloc::format!("{:.*}", digits, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if v < 0.0 && !is_zero {
        out.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(c);
    }
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Formats `v` compactly using [`NumberLocale::EN_US`].
///
/// ```
/// use dashaxis_charts::format_number;
///
/// assert_eq!(format_number(999.0), "999");
/// assert_eq!(format_number(1500.0), "1.5k");
/// assert_eq!(format_number(125_000.0), "125k");
/// assert_eq!(format_number(1_000_000.0), "1M");
/// assert_eq!(format_number(-2_345_678.0), "-2.3M");
/// ```
pub fn format_number(v: f64) -> String {
    format_number_with(v, &NumberLocale::EN_US)
}

/// Formats `v` compactly: a magnitude suffix from `k`, `M`, `B` and 2–3 significant digits.
///
/// The suffix is picked by `floor(log10(|v|) / 3)`, clamped to the largest suffix, so `1e12`
/// renders as `1000B`. Below one thousand the full grouped number is used. One decimal is kept
/// while the scaled magnitude is below 100; a trailing `.0` is dropped.
pub fn format_number_with(v: f64, locale: &NumberLocale) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let abs = v.abs();
    let Some(&(unit, suffix)) = COMPACT_SUFFIXES.iter().find(|(unit, _)| abs >= *unit) else {
        return format_grouped_with(v, locale);
    };
    let scaled = abs / unit;
    let digits = if scaled < 100.0 { 1 } else { 0 };
    let fixed = alloc::format!("{scaled:.digits$}");
    let fixed = fixed.strip_suffix(".0").unwrap_or(&fixed);

    let mut out = String::with_capacity(fixed.len() + 2);
    if v < 0.0 {
        out.push('-');
    }
    for c in fixed.chars() {
        out.push(if c == '.' { locale.decimal_separator } else { c });
    }
    out.push_str(suffix);
    out
}

/// Formats a log-axis tick using [`NumberLocale::EN_US`].
pub fn format_tick_compact(v: f64) -> String {
    format_tick_compact_with(v, &NumberLocale::EN_US)
}

/// Formats a log-axis tick: `0`, grouped values below a thousand, then `k` and `M` suffixes.
///
/// There is no `B` step; a billion renders as `1,000M`.
pub fn format_tick_compact_with(v: f64, locale: &NumberLocale) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let abs = v.abs();
    let (scaled, suffix) = if abs >= 1.0e6 {
        (v / 1.0e6, "M")
    } else if abs >= 1.0e3 {
        (v / 1.0e3, "k")
    } else {
        (v, "")
    };
    let mut out = format_grouped_with(scaled, locale);
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn compact_examples() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1500.0), "1.5k");
        assert_eq!(format_number(125_000.0), "125k");
        assert_eq!(format_number(1_000_000.0), "1M");
        assert_eq!(format_number(1000.0), "1k");
        assert_eq!(format_number(12_340.0), "12.3k");
        assert_eq!(format_number(3.2e9), "3.2B");
    }

    #[test]
    fn compact_clamps_to_largest_suffix() {
        assert_eq!(format_number(1.0e12), "1000B");
        assert_eq!(format_number(4.56e13), "45600B");
    }

    #[test]
    fn compact_preserves_sign() {
        assert_eq!(format_number(-1500.0), "-1.5k");
        assert_eq!(format_number(-999.0), "-999");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn compact_small_values_use_grouping_rules() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.3456), "12.346");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn compact_non_finite_is_literal() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn compact_rounding_can_reach_the_next_hundred() {
        assert_eq!(format_number(99_960.0), "100k");
        assert_eq!(format_number(999_999.0), "1000k");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(format_grouped(1234567.0), "1,234,567");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(100.0), "100");
        assert_eq!(format_grouped(0.0004), "0");
        assert_eq!(format_grouped(-0.0004), "0");
        assert_eq!(format_grouped(1.0e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn grouped_respects_locale() {
        let de = NumberLocale::EN_US
            .with_group_separator('.')
            .with_decimal_separator(',')
            .with_max_fraction_digits(1);
        assert_eq!(format_grouped_with(1234.56, &de), "1.234,6");
        assert_eq!(format_number_with(1500.0, &de), "1,5k");
    }

    #[test]
    fn tick_compact_uses_k_and_m_only() {
        assert_eq!(format_tick_compact(0.0), "0");
        assert_eq!(format_tick_compact(1.0), "1");
        assert_eq!(format_tick_compact(100.0), "100");
        assert_eq!(format_tick_compact(1000.0), "1k");
        assert_eq!(format_tick_compact(100_000.0), "100k");
        assert_eq!(format_tick_compact(1.0e6), "1M");
        assert_eq!(format_tick_compact(1.0e9), "1,000M");
        assert_eq!(format_tick_compact(-1.0e4), "-10k");
    }
}
