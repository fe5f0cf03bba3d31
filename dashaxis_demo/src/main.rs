// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a zoomed campaign chart to SVG on stdout.
//!
//! The chart shows inputs executed over elapsed time: a bottom time axis that follows a 2.5x
//! zoom, a left decade axis on a symlog scale, the visible slice of the series, and a hover
//! readout for the sample nearest the middle of the plot.

mod svg;

use dashaxis_charts::{
    AxisCache, AxisSpec, RuleMarkSpec, SERIES_STROKE, ScaleContinuous, ScaleLinear,
    ScaleSymlog, TextMarkSpec, ZoomTransform, format_elapsed_seconds, format_number,
};
use dashaxis_core::{Mark, MarkId, TextAnchor};
use dashaxis_transforms::{nearest_index, sorted_by_key, window_indices};
use dashaxis_wire::{SENTINEL_INF, WireError, WireValue, decode_str};
use kurbo::{Affine, Point, Vec2};
use peniko::color::palette::css;

const PLOT_ORIGIN: Vec2 = Vec2::new(60.0, 30.0);
const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 300.0;

/// One campaign report: elapsed seconds and inputs executed so far.
#[derive(Clone, Copy, Debug)]
struct Sample {
    elapsed: f64,
    inputs: f64,
}

fn main() -> Result<(), WireError> {
    let payload = decode_str(&campaign_payload())?;
    let mut samples = samples_from(&payload);
    // Reports arrive from several workers; put them back in time order.
    samples = sorted_by_key(&samples, |s| s.elapsed);

    let max_elapsed = samples.last().map_or(1.0, |s| s.elapsed);
    let max_inputs = samples.iter().map(|s| s.inputs).fold(1.0, f64::max);
    let x: ScaleContinuous = ScaleLinear::new((0.0, max_elapsed), (0.0, PLOT_WIDTH)).into();
    let y: ScaleContinuous = ScaleSymlog::new((0.0, max_inputs), (PLOT_HEIGHT, 0.0)).into();
    let zoom = ZoomTransform::IDENTITY
        .zoomed_about(0.5 * PLOT_WIDTH, 2.5)
        .panned_by(-120.0);

    let bottom = AxisSpec::bottom(1_000)
        .with_tick_count(6)
        .with_tick_formatter(format_elapsed_seconds)
        .with_transform(Affine::translate(PLOT_ORIGIN + Vec2::new(0.0, PLOT_HEIGHT)));
    let left = AxisSpec::left(20_000)
        .with_log(true)
        .with_transform(Affine::translate(PLOT_ORIGIN));

    let mut cache = AxisCache::default();
    let mut scene = svg::SvgScene::default();
    let bottom_render = cache.get_or_build(&bottom, &x, Some(&zoom));
    scene.extend(bottom_render.marks.iter().cloned());
    scene.extend(cache.get_or_build(&left, &y, Some(&zoom)).marks.iter().cloned());

    let to_scene = |s: &Sample| {
        Point::new(zoom.apply_x(x.map(s.elapsed)), y.map(s.inputs)) + PLOT_ORIGIN
    };

    // Keep one neighbour on each side so the line reaches the plot edges.
    let (lo, hi) = bottom_render.layout.visible_domain;
    let visible = window_indices(&samples, &lo, &hi, |s| s.elapsed);
    let start = visible.start.saturating_sub(1);
    let end = (visible.end + 1).min(samples.len());
    scene.extend(series_marks(&samples[start..end], &to_scene));

    let hover_t = x.invert(zoom.invert_x(0.5 * PLOT_WIDTH));
    if let Some(i) = nearest_index(&samples, hover_t, |s| s.elapsed) {
        let s = samples[i];
        scene.extend([TextMarkSpec::new(
            MarkId::from_raw(90_000),
            to_scene(&s) + Vec2::new(6.0, -6.0),
            format!(
                "{} inputs at {}",
                format_number(s.inputs),
                format_elapsed_seconds(s.elapsed)
            ),
        )
        .with_fill(css::DARK_SLATE_GRAY)
        .mark()]);
    }

    let best = payload.get("best_score").and_then(WireValue::as_f64);
    scene.extend([TextMarkSpec::new(
        MarkId::from_raw(90_001),
        Point::new(PLOT_ORIGIN.x + PLOT_WIDTH, PLOT_ORIGIN.y - 12.0),
        format!(
            "{} inputs, best score {}",
            format_number(max_inputs),
            best.map_or_else(|| "n/a".to_string(), format_number)
        ),
    )
    .with_anchor(TextAnchor::End)
    .mark()]);

    print!("{}", scene.to_svg_string());
    Ok(())
}

fn series_marks(samples: &[Sample], to_scene: &impl Fn(&Sample) -> Point) -> Vec<Mark> {
    samples
        .windows(2)
        .zip(0_u64..)
        .map(|(w, i)| {
            RuleMarkSpec::new(MarkId::from_raw(50_000 + i), to_scene(&w[0]), to_scene(&w[1]))
                .with_stroke(css::STEEL_BLUE, 1.5)
                .with_z_index(SERIES_STROKE)
                .mark()
        })
        .collect()
}

fn samples_from(payload: &WireValue) -> Vec<Sample> {
    payload
        .get("reports")
        .and_then(WireValue::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(|r| {
            Some(Sample {
                elapsed: r.get("elapsed")?.as_f64()?,
                inputs: r.get("ninputs")?.as_f64()?,
            })
        })
        .collect()
}

/// A synthetic campaign: two workers interleaving reports, growth slowing down over time.
fn campaign_payload() -> String {
    let reports: Vec<String> = (0..240)
        .map(|i| {
            let worker = i % 2;
            let elapsed = 15.0 * f64::from(i / 2) + 7.0 * f64::from(worker);
            let inputs = (elapsed * 40.0 + elapsed.powf(1.6)).round();
            format!(r#"{{"worker": {worker}, "elapsed": {elapsed}, "ninputs": {inputs}}}"#)
        })
        .rev()
        .collect();
    format!(
        r#"{{"nodeid": "tests/test_codec.py::test_roundtrip", "best_score": "{SENTINEL_INF}", "reports": [{}]}}"#,
        reports.join(",")
    )
}
