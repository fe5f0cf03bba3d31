// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks for the zoom/tick pipeline.

use dashaxis_charts::{
    AxisSpec, ScaleContinuous, ScaleLinear, ScaleSymlog, ZoomPolicy, ZoomTransform,
    decade_ticks, format_number, tick_values, visible_domain,
};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

fn zoom() -> impl Strategy<Value = ZoomTransform> {
    (-2000.0_f64..2000.0, -500.0_f64..500.0, 0.05_f64..50.0)
        .prop_map(|(x, y, scale_x)| ZoomTransform::new(x, y, scale_x))
}

/// Zooms in without panning past the baseline range of width `width`.
fn zoom_inside(width: f64) -> impl Strategy<Value = ZoomTransform> {
    (1.0_f64..50.0, 0.0_f64..1.0).prop_map(move |(scale_x, frac)| {
        ZoomTransform::new(-frac * (scale_x - 1.0) * width, 0.0, scale_x)
    })
}

fn linear_scale() -> impl Strategy<Value = ScaleContinuous> {
    (-1.0e6_f64..1.0e6, 1.0_f64..1.0e6, 0.0_f64..200.0, 50.0_f64..2000.0).prop_map(
        |(d0, span, r0, width)| ScaleLinear::new((d0, d0 + span), (r0, r0 + width)).into(),
    )
}

proptest! {
    #[test]
    fn resolver_round_trips_range_endpoints(scale in linear_scale(), z in zoom()) {
        let (lo, hi) = visible_domain(&scale, Some(&z), ZoomPolicy::FollowX);
        prop_assert!(lo <= hi);
        let (r0, r1) = scale.range();
        prop_assert!(close(z.apply_x(scale.map(lo)), r0));
        prop_assert!(close(z.apply_x(scale.map(hi)), r1));
    }

    #[test]
    fn symlog_resolver_round_trips(hi in 10.0_f64..1.0e9, z in zoom_inside(800.0)) {
        let scale: ScaleContinuous = ScaleSymlog::new((0.0, hi), (0.0, 800.0)).into();
        let (lo, top) = visible_domain(&scale, Some(&z), ZoomPolicy::FollowX);
        prop_assert!(lo >= -1e-9 && top <= hi * (1.0 + 1e-9));
        prop_assert!(close(z.apply_x(scale.map(lo)), 0.0));
        prop_assert!(close(z.apply_x(scale.map(top)), 800.0));
    }

    #[test]
    fn linear_ticks_are_ascending_and_inside(
        lo in -1.0e6_f64..1.0e6,
        span in 1.0e-3_f64..1.0e6,
        count in 2_usize..20,
    ) {
        let hi = lo + span;
        let ticks = tick_values((lo, hi), (0.0, 500.0), false, count);
        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ticks.iter().all(|t| *t >= lo && *t <= hi));
    }

    #[test]
    fn decade_ticks_are_inside_and_decades(lo in -100.0_f64..1.0e6, span in 0.0_f64..1.0e9) {
        let hi = lo + span;
        for t in decade_ticks(lo, hi) {
            prop_assert!(t >= lo && t <= hi);
            prop_assert!(t == 0.0 || (t.log10() - t.log10().round()).abs() < 1e-9);
        }
    }

    #[test]
    fn ticks_on_screen_for_following_axes(scale in linear_scale(), z in zoom()) {
        let layout = AxisSpec::bottom(1).layout(&scale, Some(&z));
        let (r0, r1) = scale.range();
        let slack = 1e-6 * (r1 - r0).abs().max(1.0);
        for t in &layout.ticks {
            prop_assert!(t.offset >= r0.min(r1) - slack && t.offset <= r0.max(r1) + slack);
        }
    }

    #[test]
    fn format_number_never_panics_and_keeps_sign(v in any::<f64>()) {
        let s = format_number(v);
        prop_assert!(!s.is_empty());
        if v.is_finite() && v <= -1000.0 {
            prop_assert!(s.starts_with('-'));
        }
    }
}
