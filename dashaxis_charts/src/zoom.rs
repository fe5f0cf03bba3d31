// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom composition over a baseline scale.
//!
//! The interaction controller owns a [`ZoomTransform`] and hands the axis layer an immutable
//! snapshot per render. Only the horizontal pixel coordinate is zoomed: a campaign chart pans
//! and zooms through time, while the metric axis stays put. Whether an axis follows the zoom is
//! an explicit [`ZoomPolicy`] on the axis, not something inferred from its orientation.

use kurbo::Affine;

use crate::scale::ScaleContinuous;

/// An affine pan/zoom adjustment layered on top of baseline pixel coordinates.
///
/// `scale_x` must be strictly positive; a zero or negative factor is a bug in the caller and is
/// only checked by debug assertions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Horizontal pan offset in pixels.
    pub x: f64,
    /// Vertical pan offset in pixels.
    ///
    /// Carried for series content; axes never apply it.
    pub y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// The transform that leaves every coordinate unchanged.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
    };

    /// Creates a transform from pan offsets and a horizontal scale factor.
    pub fn new(x: f64, y: f64, scale_x: f64) -> Self {
        debug_assert!(scale_x > 0.0, "zoom scale_x must be positive, got {scale_x}");
        Self { x, y, scale_x }
    }

    /// Applies the horizontal part: `px * scale_x + x`.
    pub fn apply_x(&self, px: f64) -> f64 {
        px * self.scale_x + self.x
    }

    /// Inverts the horizontal part: `(px - x) / scale_x`.
    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.x) / self.scale_x
    }

    /// Returns this transform as an affine map for series content.
    ///
    /// This includes the vertical pan `y`, which axes ignore.
    pub fn to_affine(&self) -> Affine {
        Affine::new([self.scale_x, 0.0, 0.0, 1.0, self.x, self.y])
    }

    /// Returns a transform panned horizontally by `dx` pixels.
    pub fn panned_by(&self, dx: f64) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    /// Returns a transform zoomed by `factor` around the view-space anchor `anchor_x`.
    ///
    /// The baseline pixel under the anchor stays under the anchor. A non-positive factor returns
    /// the transform unchanged.
    pub fn zoomed_about(&self, anchor_x: f64, factor: f64) -> Self {
        if factor <= 0.0 || !factor.is_finite() {
            return *self;
        }
        let base = self.invert_x(anchor_x);
        let scale_x = self.scale_x * factor;
        Self {
            x: anchor_x - base * scale_x,
            y: self.y,
            scale_x,
        }
    }
}

/// Whether an axis follows the horizontal zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ZoomPolicy {
    /// Offsets are zoomed (`offset * scale_x + x`) and the visible domain is recovered by
    /// inverting the zoom. This is the policy of horizontal time axes.
    #[default]
    FollowX,
    /// The axis never sees the zoom. This is the policy of vertical metric axes.
    Ignore,
}

impl ZoomPolicy {
    /// Maps a baseline pixel offset to its on-screen offset under this policy.
    pub fn apply(self, zoom: Option<&ZoomTransform>, px: f64) -> f64 {
        match (self, zoom) {
            (Self::FollowX, Some(z)) => z.apply_x(px),
            _ => px,
        }
    }

    /// Maps an on-screen offset back to its baseline pixel offset under this policy.
    pub fn invert(self, zoom: Option<&ZoomTransform>, px: f64) -> f64 {
        match (self, zoom) {
            (Self::FollowX, Some(z)) => z.invert_x(px),
            _ => px,
        }
    }
}

/// Returns the data-space interval visible through `zoom`, as `(min, max)`.
///
/// Without a zoom transform (or with [`ZoomPolicy::Ignore`]) this is the baseline domain.
/// Otherwise both range endpoints are pulled back through the zoom and then through the
/// baseline scale. The result is sorted, so decreasing ranges are fine.
pub fn visible_domain(
    scale: &ScaleContinuous,
    zoom: Option<&ZoomTransform>,
    policy: ZoomPolicy,
) -> (f64, f64) {
    let (a, b) = match (policy, zoom) {
        (ZoomPolicy::FollowX, Some(_)) => {
            let (r0, r1) = scale.range();
            (
                scale.invert(policy.invert(zoom, r0)),
                scale.invert(policy.invert(zoom, r1)),
            )
        }
        _ => scale.domain(),
    };
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::*;
    use crate::scale::{ScaleLinear, ScaleSymlog};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn no_zoom_is_the_full_domain() {
        let s = ScaleContinuous::from(ScaleLinear::new((0.0, 3600.0), (0.0, 600.0)));
        assert_eq!(
            visible_domain(&s, None, ZoomPolicy::FollowX),
            (0.0, 3600.0)
        );
    }

    #[test]
    fn zoom_in_narrows_the_horizontal_domain() {
        let s = ScaleContinuous::from(ScaleLinear::new((0.0, 100.0), (0.0, 500.0)));
        // 2x zoom, panned so baseline pixel 125 sits at screen 0.
        let z = ZoomTransform::new(-250.0, 0.0, 2.0);
        let (lo, hi) = visible_domain(&s, Some(&z), ZoomPolicy::FollowX);
        assert!(close(lo, 25.0), "{lo}");
        assert!(close(hi, 75.0), "{hi}");
    }

    #[test]
    fn ignore_policy_never_sees_zoom() {
        let s = ScaleContinuous::from(ScaleLinear::new((0.0, 1.0e6), (300.0, 0.0)));
        let z = ZoomTransform::new(-120.0, 40.0, 3.5);
        assert_eq!(visible_domain(&s, Some(&z), ZoomPolicy::Ignore), (0.0, 1.0e6));
        assert_eq!(ZoomPolicy::Ignore.apply(Some(&z), 17.0), 17.0);
    }

    #[test]
    fn decreasing_range_still_yields_min_max() {
        let s = ScaleContinuous::from(ScaleLinear::new((0.0, 10.0), (200.0, 0.0)));
        let z = ZoomTransform::new(10.0, 0.0, 1.0);
        let (lo, hi) = visible_domain(&s, Some(&z), ZoomPolicy::FollowX);
        assert!(lo < hi);
        assert!(close(lo, 0.5) && close(hi, 10.5), "{lo} {hi}");
    }

    #[test]
    fn degenerate_domain_stays_degenerate() {
        let s = ScaleContinuous::from(ScaleLinear::new((5.0, 5.0), (0.0, 400.0)));
        let z = ZoomTransform::new(-30.0, 0.0, 4.0);
        assert_eq!(visible_domain(&s, Some(&z), ZoomPolicy::FollowX), (5.0, 5.0));
        assert_eq!(visible_domain(&s, None, ZoomPolicy::FollowX), (5.0, 5.0));
    }

    #[test]
    fn visible_domain_maps_back_onto_the_range() {
        let s = ScaleContinuous::from(ScaleSymlog::new((0.0, 1.0e5), (0.0, 800.0)));
        let z = ZoomTransform::new(-900.0, 0.0, 3.0);
        let (lo, hi) = visible_domain(&s, Some(&z), ZoomPolicy::FollowX);
        assert!(close(z.apply_x(s.map(lo)), 0.0));
        assert!(close(z.apply_x(s.map(hi)), 800.0));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let z = ZoomTransform::new(-40.0, 0.0, 1.5);
        let anchor = 120.0;
        let before = z.invert_x(anchor);
        let z2 = z.zoomed_about(anchor, 2.0);
        assert!(close(z2.scale_x, 3.0));
        assert!(close(z2.invert_x(anchor), before));
        assert_eq!(z.zoomed_about(anchor, 0.0), z);
        assert!(close(z.panned_by(15.0).x, -25.0));
    }

    #[test]
    fn affine_matches_horizontal_application() {
        let z = ZoomTransform::new(12.0, -3.0, 2.5);
        let p = z.to_affine() * Point::new(8.0, 5.0);
        assert!(close(p.x, z.apply_x(8.0)));
        assert!(close(p.y, 2.0));
    }
}
