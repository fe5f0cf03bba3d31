// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{Affine, Line, Point, Rect};
use peniko::Brush;

/// Stable identity for a generated mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Payload discriminant, handy for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A stroked line segment.
    Rule,
    /// A text label.
    Text,
}

/// Horizontal text anchoring relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the end of the text.
    End,
}

/// Vertical text alignment relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical middle of the text.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top (hanging baseline) of the text.
    Hanging,
    /// The position is the ideographic baseline (bottom).
    Ideographic,
}

/// A stroked straight segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RulePayload {
    /// Segment in scene coordinates.
    pub line: Line,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// An unshaped text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A stroked segment.
    Rule(RulePayload),
    /// A text label.
    Text(Box<TextPayload>),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rule(_) => MarkKind::Rule,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Geometric bounds, if they are known without text metrics.
    ///
    /// Text payloads return `None`; their extent depends on shaping.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rule(r) => Some(Rect::from_points(r.line.p0, r.line.p1)),
            Self::Text(_) => None,
        }
    }

    /// Maps all positions through `affine`.
    ///
    /// Stroke widths and font sizes are left untouched; the render transform of an axis is a
    /// placement, not a zoom.
    pub fn transform(&mut self, affine: Affine) {
        match self {
            Self::Rule(r) => r.line = Line::new(affine * r.line.p0, affine * r.line.p1),
            Self::Text(t) => t.pos = affine * t.pos,
        }
    }
}

/// A generated drawable with stable identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order hint. Lower values paint first.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a rule mark.
    pub fn rule(id: MarkId, line: Line, stroke: Brush, stroke_width: f64) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Rule(RulePayload {
                line,
                stroke,
                stroke_width,
            }),
        }
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, payload: TextPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Text(Box::new(payload)),
        }
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the rule payload, if this is a rule.
    pub fn as_rule(&self) -> Option<&RulePayload> {
        match &self.payload {
            MarkPayload::Rule(r) => Some(r),
            MarkPayload::Text(_) => None,
        }
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            MarkPayload::Rule(_) => None,
        }
    }
}
