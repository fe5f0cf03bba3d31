// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight stroked segment. Axes are built from rules: the axis line, its two
//! end caps, and one tick mark per tick.

use dashaxis_core::{Mark, MarkId};
use kurbo::{Line, Point};
use peniko::Brush;

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point in scene coordinates.
    pub p0: Point,
    /// End point in scene coordinates.
    pub p1: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Rendering order hint (`dashaxis_core::Mark::z_index`).
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            id,
            p0: p0.into(),
            p1: p1.into(),
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, (x, y0), (x, y1))
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        Mark::rule(
            self.id,
            Line::new(self.p0, self.p1),
            self.stroke.clone(),
            self.stroke_width,
        )
        .with_z_index(self.z_index)
    }
}
