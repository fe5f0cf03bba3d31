// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for axis-generated marks.
//!
//! Renderers should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Stroked series content drawn by the caller, below every axis mark.
pub const SERIES_STROKE: i32 = 10;

/// Axis line, end caps and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
