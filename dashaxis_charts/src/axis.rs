// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis positioning and mark generation.
//!
//! An axis is configured once with an [`AxisSpec`] and laid out on every render against the
//! chart's baseline scale and the current zoom snapshot:
//!
//! 1. [`AxisSpec::visible_domain`] resolves which slice of the data domain is on screen,
//! 2. tick values are generated for that slice,
//! 3. each tick gets a pixel offset and a label ([`AxisLayout`]),
//! 4. [`AxisSpec::marks_for_layout`] turns the layout into rule and text marks.
//!
//! Generated geometry is in axis-local coordinates: the axis line lies on `y = 0` (bottom) or
//! `x = 0` (left), ticks and labels extend away from the plot. [`AxisSpec::transform`] places the
//! axis in the scene.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use dashaxis_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Affine, Point};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

use crate::format::{NumberLocale, format_grouped_with, format_tick_compact_with};
use crate::rule_mark::RuleMarkSpec;
use crate::scale::ScaleContinuous;
use crate::text_mark::TextMarkSpec;
use crate::ticks::tick_values;
use crate::zoom::{ZoomPolicy, ZoomTransform, visible_domain};
use crate::TextMeasurer;

/// Id offset of the end cap at the start of the range. The other cap follows it.
const CAP_ID_OFFSET: u64 = 1;
/// Id offset of the first tick. Tick `i` owns `TICK_ID_OFFSET + 2 * i` for its rule and the
/// next id for its label, so ids stay unique for any tick count.
const TICK_ID_OFFSET: u64 = 3;

fn tick_rule_id(id_base: u64, i: usize) -> u64 {
    id_base + TICK_ID_OFFSET + 2 * i as u64
}

fn tick_label_id(id_base: u64, i: usize) -> u64 {
    tick_rule_id(id_base, i) + 1
}

/// A paint + width pair for stroked segments (axis line, caps, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis line, end caps and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Tick mark length, away from the plot.
    pub tick_size: f64,
    /// End cap length, towards the plot.
    pub end_cap_size: f64,
    /// Gap between the end of a tick mark and its label.
    pub label_padding: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
            tick_size: 6.0,
            end_cap_size: 6.0,
            label_padding: 3.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// One positioned tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Data value.
    pub value: f64,
    /// Pixel offset along the axis, after zoom for axes that follow it.
    pub offset: f64,
    /// Label text.
    pub formatted: String,
}

/// The per-render result of positioning an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// The visible data interval, `(min, max)`.
    pub visible_domain: (f64, f64),
    /// Ticks in ascending value order.
    pub ticks: SmallVec<[Tick; 8]>,
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks. Ignored by log axes.
    pub tick_count: usize,
    /// Whether ticks are decades (`0, 1, 10, 100, …`) instead of 1/2/5 steps.
    pub log: bool,
    /// Whether offsets follow the horizontal zoom.
    pub zoom_policy: ZoomPolicy,
    /// Placement of the axis-local geometry in the scene.
    pub transform: Affine,
    /// Axis styling.
    pub style: AxisStyle,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis line and its end caps.
    pub show_domain: bool,
    /// Optional tick label formatter, replacing the default label policy.
    pub tick_formatter: Option<Arc<dyn Fn(f64) -> String>>,
    /// Separators used by the default label policy.
    pub locale: NumberLocale,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("log", &self.log)
            .field("zoom_policy", &self.zoom_policy)
            .field("transform", &self.transform)
            .field("style", &self.style)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .field("locale", &self.locale)
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// The returned axis has:
    /// - `tick_count = 5`, linear ticks
    /// - `zoom_policy` [`ZoomPolicy::FollowX`] for bottom axes, [`ZoomPolicy::Ignore`] for left
    /// - an identity transform and `style = AxisStyle::default()`
    /// - ticks, labels and the axis line enabled.
    pub fn new(id_base: u64, orient: AxisOrient) -> Self {
        let zoom_policy = match orient {
            AxisOrient::Bottom => ZoomPolicy::FollowX,
            AxisOrient::Left => ZoomPolicy::Ignore,
        };
        Self {
            id_base,
            orient,
            tick_count: 5,
            log: false,
            zoom_policy,
            transform: Affine::IDENTITY,
            style: AxisStyle::default(),
            ticks: true,
            labels: true,
            show_domain: true,
            tick_formatter: None,
            locale: NumberLocale::default(),
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64) -> Self {
        Self::new(id_base, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Switch between decade ticks (`true`) and 1/2/5 ticks (`false`).
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Override the zoom policy chosen by the constructor.
    pub fn with_zoom_policy(mut self, zoom_policy: ZoomPolicy) -> Self {
        self.zoom_policy = zoom_policy;
        self
    }

    /// Set the placement transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis line and end caps.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set the separators used by the default label policy.
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the data interval visible through `zoom` for this axis.
    pub fn visible_domain(
        &self,
        scale: &ScaleContinuous,
        zoom: Option<&ZoomTransform>,
    ) -> (f64, f64) {
        visible_domain(scale, zoom, self.zoom_policy)
    }

    /// Returns the tick values for the current view.
    pub fn tick_values(&self, scale: &ScaleContinuous, zoom: Option<&ZoomTransform>) -> Vec<f64> {
        tick_values(
            self.visible_domain(scale, zoom),
            scale.range(),
            self.log,
            self.tick_count,
        )
    }

    /// Returns the on-screen offset of `value` along the axis.
    pub fn offset(&self, scale: &ScaleContinuous, zoom: Option<&ZoomTransform>, value: f64) -> f64 {
        self.zoom_policy.apply(zoom, scale.map(value))
    }

    /// Formats a tick label.
    ///
    /// A custom formatter wins. Otherwise log axes use the compact `k`/`M` form and linear axes
    /// the full grouped number.
    pub fn format_tick(&self, value: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(value),
            None if self.log => format_tick_compact_with(value, &self.locale),
            None => format_grouped_with(value, &self.locale),
        }
    }

    /// Positions ticks for the current view.
    pub fn layout(&self, scale: &ScaleContinuous, zoom: Option<&ZoomTransform>) -> AxisLayout {
        let visible_domain = self.visible_domain(scale, zoom);
        let ticks = tick_values(visible_domain, scale.range(), self.log, self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                offset: self.offset(scale, zoom, value),
                formatted: self.format_tick(value),
            })
            .collect();
        AxisLayout {
            visible_domain,
            ticks,
        }
    }

    /// Measure the thickness this axis needs along its normal direction.
    ///
    /// Bottom axes need label heights, left axes label widths.
    pub fn measure(&self, layout: &AxisLayout, measurer: &dyn TextMeasurer) -> f64 {
        let tick_extent = if self.ticks {
            self.style.tick_size.abs()
        } else {
            0.0
        };
        if !self.labels || layout.ticks.is_empty() {
            return tick_extent;
        }
        let max_label_extent = layout
            .ticks
            .iter()
            .map(|t| {
                let size = measurer.measure(&t.formatted, self.style.label_font_size);
                match self.orient {
                    AxisOrient::Bottom => size.height,
                    AxisOrient::Left => size.width,
                }
            })
            .fold(0.0_f64, f64::max);
        tick_extent + self.style.label_padding.max(0.0) + max_label_extent
    }

    /// Lays out and generates the axis marks for the current view.
    pub fn marks(&self, scale: &ScaleContinuous, zoom: Option<&ZoomTransform>) -> Vec<Mark> {
        let layout = self.layout(scale, zoom);
        self.marks_for_layout(scale, &layout)
    }

    /// Generates the axis marks for an existing layout.
    ///
    /// The axis line spans the baseline range of `scale`; it does not move with the zoom.
    pub fn marks_for_layout(&self, scale: &ScaleContinuous, layout: &AxisLayout) -> Vec<Mark> {
        let mut out = Vec::with_capacity(3 + 2 * layout.ticks.len());
        let rule = &self.style.rule;
        let tick_size = self.style.tick_size.abs();
        let cap_size = self.style.end_cap_size.abs();
        let label_gap = tick_size + self.style.label_padding.max(0.0);

        if self.show_domain {
            let (r0, r1) = scale.range();
            out.push(
                self.rule(self.id_base, along(self.orient, r0, 0.0), along(self.orient, r1, 0.0))
                    .with_stroke(rule.brush.clone(), rule.stroke_width)
                    .mark(),
            );
            for (i, r) in [r0, r1].into_iter().enumerate() {
                out.push(
                    self.rule(
                        self.id_base + CAP_ID_OFFSET + i as u64,
                        along(self.orient, r, 0.0),
                        along(self.orient, r, -cap_size),
                    )
                    .with_stroke(rule.brush.clone(), rule.stroke_width)
                    .mark(),
                );
            }
        }

        for (i, tick) in layout.ticks.iter().enumerate() {
            if self.ticks {
                out.push(
                    self.rule(
                        tick_rule_id(self.id_base, i),
                        along(self.orient, tick.offset, 0.0),
                        along(self.orient, tick.offset, tick_size),
                    )
                    .with_stroke(rule.brush.clone(), rule.stroke_width)
                    .mark(),
                );
            }
            if self.labels {
                let (anchor, baseline) = match self.orient {
                    AxisOrient::Bottom => (TextAnchor::Middle, TextBaseline::Hanging),
                    AxisOrient::Left => (TextAnchor::End, TextBaseline::Middle),
                };
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(tick_label_id(self.id_base, i)),
                        along(self.orient, tick.offset, label_gap),
                        tick.formatted.clone(),
                    )
                    .with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .mark(),
                );
            }
        }

        if self.transform != Affine::IDENTITY {
            for m in &mut out {
                m.payload.transform(self.transform);
            }
        }
        out
    }

    fn rule(&self, raw_id: u64, p0: Point, p1: Point) -> RuleMarkSpec {
        RuleMarkSpec::new(MarkId::from_raw(raw_id), p0, p1)
    }
}

/// Maps `(position along the axis, distance away from the plot)` to axis-local coordinates.
///
/// Bottom axes grow downwards (`+y`), left axes grow leftwards (`-x`).
fn along(orient: AxisOrient, pos: f64, outward: f64) -> Point {
    match orient {
        AxisOrient::Bottom => Point::new(pos, outward),
        AxisOrient::Left => Point::new(-outward, pos),
    }
}
