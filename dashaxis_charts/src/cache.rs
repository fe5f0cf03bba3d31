// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized axis layouts.
//!
//! Dragging re-renders every frame, often with a zoom snapshot that has not changed (pointer
//! jitter, hover redraws). [`AxisCache`] remembers recent layouts keyed on everything that feeds
//! the tick computation, so repeated frames skip tick generation and formatting.
//!
//! The key covers the baseline scale, the zoom (only for axes that follow it), and the
//! positioning fields of the [`AxisSpec`]. Styling, locale and a custom formatter are not part of
//! the key: call [`AxisCache::clear`] after changing them.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use dashaxis_core::Mark;
use hashbrown::HashMap;

use crate::axis::{AxisLayout, AxisOrient, AxisSpec};
use crate::scale::ScaleContinuous;
use crate::zoom::{ZoomPolicy, ZoomTransform};

/// A laid-out axis and the marks generated from it.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRender {
    /// Tick positions and labels.
    pub layout: AxisLayout,
    /// Marks generated from `layout`.
    pub marks: Vec<Mark>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum ScaleKey {
    Linear {
        domain: [u64; 2],
        range: [u64; 2],
    },
    Symlog {
        domain: [u64; 2],
        range: [u64; 2],
        constant: u64,
    },
}

impl ScaleKey {
    fn new(scale: &ScaleContinuous) -> Self {
        let bits = |(a, b): (f64, f64)| [a.to_bits(), b.to_bits()];
        match scale {
            ScaleContinuous::Linear(s) => Self::Linear {
                domain: bits(s.domain()),
                range: bits(s.range()),
            },
            ScaleContinuous::Symlog(s) => Self::Symlog {
                domain: bits(s.domain()),
                range: bits(s.range()),
                constant: s.constant().to_bits(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct AxisKey {
    scale: ScaleKey,
    zoom: Option<[u64; 2]>,
    id_base: u64,
    orient: AxisOrient,
    tick_count: usize,
    log: bool,
    zoom_policy: ZoomPolicy,
    transform: [u64; 6],
    ticks: bool,
    labels: bool,
    show_domain: bool,
}

impl AxisKey {
    fn new(axis: &AxisSpec, scale: &ScaleContinuous, zoom: Option<&ZoomTransform>) -> Self {
        // Axes never see the vertical pan.
        let zoom = match axis.zoom_policy {
            ZoomPolicy::FollowX => zoom.map(|z| [z.x.to_bits(), z.scale_x.to_bits()]),
            ZoomPolicy::Ignore => None,
        };
        Self {
            scale: ScaleKey::new(scale),
            zoom,
            id_base: axis.id_base,
            orient: axis.orient,
            tick_count: axis.tick_count,
            log: axis.log,
            zoom_policy: axis.zoom_policy,
            transform: axis.transform.as_coeffs().map(f64::to_bits),
            ticks: axis.ticks,
            labels: axis.labels,
            show_domain: axis.show_domain,
        }
    }
}

/// A bounded memo of axis renders.
///
/// When the cache is full it is cleared before the next insert.
#[derive(Debug)]
pub struct AxisCache {
    entries: HashMap<AxisKey, Arc<AxisRender>>,
    capacity: usize,
}

impl Default for AxisCache {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl AxisCache {
    /// Capacity used by [`AxisCache::default`].
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a cache holding at most `capacity` renders. A capacity of zero disables caching.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the cached render for this axis and view, building it on a miss.
    pub fn get_or_build(
        &mut self,
        axis: &AxisSpec,
        scale: &ScaleContinuous,
        zoom: Option<&ZoomTransform>,
    ) -> Arc<AxisRender> {
        let key = AxisKey::new(axis, scale, zoom);
        if let Some(hit) = self.entries.get(&key) {
            log::trace!("axis cache hit for axis {}", axis.id_base);
            return Arc::clone(hit);
        }

        let layout = axis.layout(scale, zoom);
        let marks = axis.marks_for_layout(scale, &layout);
        let render = Arc::new(AxisRender { layout, marks });
        log::trace!(
            "axis cache miss for axis {}: {} ticks",
            axis.id_base,
            render.layout.ticks.len()
        );

        if self.capacity == 0 {
            return render;
        }
        if self.entries.len() >= self.capacity {
            log::debug!(
                "axis cache full ({} entries), clearing",
                self.entries.len()
            );
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&render));
        render
    }

    /// Drops every cached render.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached renders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no renders.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached renders.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::scale::{ScaleLinear, ScaleSymlog};

    fn scale() -> ScaleContinuous {
        ScaleLinear::new((0.0, 3600.0), (0.0, 600.0)).into()
    }

    #[test]
    fn repeated_views_share_one_render() {
        let mut cache = AxisCache::default();
        let axis = AxisSpec::bottom(1);
        let zoom = ZoomTransform::new(-100.0, 0.0, 2.0);

        let a = cache.get_or_build(&axis, &scale(), Some(&zoom));
        let b = cache.get_or_build(&axis, &scale(), Some(&zoom));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert_eq!(a.layout, axis.layout(&scale(), Some(&zoom)));
    }

    #[test]
    fn zoom_changes_miss_only_for_following_axes() {
        let mut cache = AxisCache::default();
        let bottom = AxisSpec::bottom(1);
        let left = AxisSpec::left(2);
        let z1 = ZoomTransform::new(-100.0, 0.0, 2.0);
        let z2 = z1.panned_by(-10.0);

        let a = cache.get_or_build(&bottom, &scale(), Some(&z1));
        let b = cache.get_or_build(&bottom, &scale(), Some(&z2));
        assert!(!Arc::ptr_eq(&a, &b));

        let c = cache.get_or_build(&left, &scale(), Some(&z1));
        let d = cache.get_or_build(&left, &scale(), Some(&z2));
        let e = cache.get_or_build(&left, &scale(), None);
        assert!(Arc::ptr_eq(&c, &d));
        assert!(Arc::ptr_eq(&c, &e));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn vertical_pan_does_not_invalidate() {
        let mut cache = AxisCache::default();
        let axis = AxisSpec::bottom(1);
        let a = cache.get_or_build(&axis, &scale(), Some(&ZoomTransform::new(5.0, 0.0, 1.5)));
        let b = cache.get_or_build(&axis, &scale(), Some(&ZoomTransform::new(5.0, 90.0, 1.5)));
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn scale_kind_and_flags_are_part_of_the_key() {
        let mut cache = AxisCache::default();
        let axis = AxisSpec::left(1);
        let linear: ScaleContinuous = ScaleLinear::new((0.0, 100.0), (300.0, 0.0)).into();
        let symlog: ScaleContinuous = ScaleSymlog::new((0.0, 100.0), (300.0, 0.0)).into();

        cache.get_or_build(&axis, &linear, None);
        cache.get_or_build(&axis, &symlog, None);
        cache.get_or_build(&axis.clone().with_log(true), &symlog, None);
        cache.get_or_build(&axis.clone().with_tick_count(10), &symlog, None);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn full_cache_is_cleared_before_insert() {
        let mut cache = AxisCache::with_capacity(2);
        let axis = AxisSpec::bottom(1);
        for i in 0..3 {
            let zoom = ZoomTransform::new(f64::from(i), 0.0, 1.0);
            cache.get_or_build(&axis, &scale(), Some(&zoom));
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_never_stores() {
        let mut cache = AxisCache::with_capacity(0);
        let axis = AxisSpec::bottom(1);
        let a = cache.get_or_build(&axis, &scale(), None);
        assert!(!a.marks.is_empty());
        assert!(cache.is_empty());
    }
}
