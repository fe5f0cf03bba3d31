// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use dashaxis_core::{Mark, MarkId, TextAnchor, TextBaseline, TextPayload};
use kurbo::Point;
use peniko::Brush;

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint (`dashaxis_core::Mark::z_index`).
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 10.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
            z_index: crate::z_order::AXIS_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::text(
            self.id,
            TextPayload {
                pos: self.pos,
                text: self.text.clone(),
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill.clone(),
            },
        )
        .with_z_index(self.z_index)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::z_order;

    #[test]
    fn label_settings_flow_into_the_payload() {
        let m = TextMarkSpec::new(MarkId(4), Point::new(3.0, 8.0), "1.5k")
            .with_font_size(12.0)
            .with_fill(css::GRAY)
            .with_anchor(TextAnchor::End)
            .with_baseline(TextBaseline::Hanging)
            .mark();
        assert_eq!(m.id, MarkId(4));
        assert_eq!(m.z_index, z_order::AXIS_LABELS);

        let t = m.as_text().expect("text payload");
        assert_eq!(t.pos, Point::new(3.0, 8.0));
        assert_eq!(t.text, "1.5k");
        assert_eq!(t.font_size, 12.0);
        assert_eq!(t.fill, Brush::from(css::GRAY));
        assert_eq!(t.anchor, TextAnchor::End);
        assert_eq!(t.baseline, TextBaseline::Hanging);
    }
}
