// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis layout.
//!
//! Shaping happens downstream in the renderer, so axes accept a measurer to estimate how much
//! room their labels need before the page reserves margins.

use kurbo::Size;

/// A minimal text measurement interface used by axis layout.
pub trait TextMeasurer {
    /// Returns the extent of `text` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// A heuristic measurer: every glyph is `em_width` ems wide and one em tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicTextMeasurer {
    /// Average glyph advance, in ems.
    pub em_width: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { em_width: 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let width = self.em_width * font_size * text.chars().count() as f64;
        Size::new(width, font_size)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f64) -> Size,
{
    fn measure(&self, text: &str, font_size: f64) -> Size {
        self(text, font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_counts_chars_not_bytes() {
        let m = HeuristicTextMeasurer::default();
        assert_eq!(m.measure("1.5k", 10.0), Size::new(24.0, 10.0));
        assert_eq!(m.measure("µs", 10.0).width, 12.0);
    }

    #[test]
    fn closures_are_measurers() {
        let fixed = |_: &str, size: f64| Size::new(5.0, size);
        assert_eq!(fixed.measure("anything", 8.0), Size::new(5.0, 8.0));
    }
}
