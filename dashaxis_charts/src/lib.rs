// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomable axes for campaign dashboards, on top of `dashaxis_core` marks.
//!
//! The pieces, leaves first:
//! - **Scales** ([`ScaleLinear`], [`ScaleSymlog`]) map data values into baseline pixels.
//! - **Zoom** ([`ZoomTransform`], [`ZoomPolicy`]) composes a pan/zoom on top of the baseline and
//!   resolves the [`visible_domain`].
//! - **Ticks** ([`tick_values`], [`decade_ticks`]) pick values inside the visible domain.
//! - **Formatting** ([`format_number`], [`format_tick_compact`], [`format_grouped`],
//!   [`format_elapsed_seconds`]) turns values into labels.
//! - **Axes** ([`AxisSpec`]) position ticks and generate rule and text marks; [`AxisCache`]
//!   memoizes them across frames.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod cache;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod measure;
mod rule_mark;
mod scale;
mod text_mark;
mod ticks;
mod time;
mod z_order;
mod zoom;

pub use axis::{AxisLayout, AxisOrient, AxisSpec, AxisStyle, StrokeStyle, Tick};
pub use cache::{AxisCache, AxisRender};
pub use format::{
    NumberLocale, format_grouped, format_grouped_with, format_number, format_number_with,
    format_tick_compact, format_tick_compact_with,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleContinuous, ScaleLinear, ScaleSymlog};
pub use text_mark::TextMarkSpec;
pub use ticks::{decade_ticks, tick_values};
pub use time::format_elapsed_seconds;
pub use z_order::*;
pub use zoom::{ZoomPolicy, ZoomTransform, visible_domain};
