// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-facing primitives for `dashaxis`.
//!
//! Axis generation in `dashaxis_charts` produces a flat list of [`Mark`]s. A renderer (SVG, a
//! canvas, a GPU scene) only needs to understand two payload kinds:
//! - **rules**: stroked straight segments (axis lines, end caps, tick marks), and
//! - **text**: unshaped label strings with an anchor and baseline.
//!
//! Marks carry a stable [`MarkId`] and a `z_index`; renderers should paint in
//! `(z_index, id)` order.

#![no_std]

extern crate alloc;

mod mark;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, RulePayload, TextAnchor, TextBaseline, TextPayload,
};
