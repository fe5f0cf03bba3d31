// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baseline scales.
//!
//! A baseline scale is the fixed, un-zoomed mapping between a data domain and a pixel range.
//! It is created once per chart by the charting layer; zoom never mutates it, it composes on
//! top (see [`crate::ZoomTransform`]).

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A baseline scale instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Symmetric log scale (log-like, but defined at zero and for negatives).
    Symlog(ScaleSymlog),
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleSymlog> for ScaleContinuous {
    fn from(value: ScaleSymlog) -> Self {
        Self::Symlog(value)
    }
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Symlog(s) => s.map(x),
        }
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, px: f64) -> f64 {
        match self {
            Self::Linear(s) => s.invert(px),
            Self::Symlog(s) => s.invert(px),
        }
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain(),
            Self::Symlog(s) => s.domain(),
        }
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Symlog(s) => s.range(),
        }
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    ///
    /// A zero-width range inverts to the domain start.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (px - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice” tick values inside the domain, aiming for about `count` ticks.
    ///
    /// Steps are `1`, `2` or `5` times a power of ten. A zero-width domain yields its single value.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A symmetric log mapping, `sign(x) * ln(1 + |x| / c)`, rescaled onto the range.
///
/// Unlike a plain log scale this is defined at zero, which campaign counters start from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSymlog {
    domain: (f64, f64),
    range: (f64, f64),
    constant: f64,
}

impl ScaleSymlog {
    /// Creates a new symlog scale with constant `1`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            constant: 1.0,
        }
    }

    /// Sets the linear-region constant. Non-positive or non-finite values fall back to `1`.
    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = if constant.is_finite() && constant > 0.0 {
            constant
        } else {
            1.0
        };
        self
    }

    /// Returns the linear-region constant.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    fn transform(&self, x: f64) -> f64 {
        let t = (x.abs() / self.constant).ln_1p();
        if x < 0.0 { -t } else { t }
    }

    fn untransform(&self, y: f64) -> f64 {
        let x = y.abs().exp_m1() * self.constant;
        if y < 0.0 { -x } else { x }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let t0 = self.transform(self.domain.0);
        let t1 = self.transform(self.domain.1);
        let denom = t1 - t0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.transform(x) - t0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return self.domain.0;
        }
        let t0 = self.transform(self.domain.0);
        let t1 = self.transform(self.domain.1);
        let t = (px - r0) / denom;
        self.untransform(t0 + t * (t1 - t0))
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if count == 0 {
        return Vec::new();
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Sub-unit steps are handled through their (integral) inverse so that e.g. `0.3` comes out
    // as `3 / 10` rather than `3 * 0.1`.
    let (scale, divide) = if step >= 1.0 {
        (step, false)
    } else {
        ((1.0 / step).round(), true)
    };
    let to_value = |k: f64| if divide { k / scale } else { k * scale };
    let to_index = |v: f64| if divide { v * scale } else { v / scale };

    let mut i0 = to_index(min).round();
    let mut i1 = to_index(max).round();
    if to_value(i0) < min {
        i0 += 1.0;
    }
    if to_value(i1) > max {
        i1 -= 1.0;
    }

    let n_f = i1 - i0;
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    let n = {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    };
    (0..=n).map(|i| to_value(i0 + i as f64)).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor().clamp(-320.0, 320.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let base = 10_f64.powi(power as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
