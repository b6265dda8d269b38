// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: mappings from channel values into pixel coordinates.
//!
//! Bars only rely on the [`Scale`] trait. [`ScaleLinear`] and [`ScaleBand`] are small concrete
//! implementations for demos and tests; callers are free to bring their own.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use plotmark_core::{ResolvedChannel, Value, number};

/// A mapping from channel values to pixel coordinates.
pub trait Scale {
    /// Maps a value into range space. Values outside the scale's vocabulary map to `NaN`.
    fn map(&self, value: &Value) -> f64;

    /// Returns the slot width of a band scale, or `None` for scales without bands.
    fn bandwidth(&self) -> Option<f64> {
        None
    }
}

/// A scale backed by a closure, with an optional fixed bandwidth.
pub struct ScaleFn {
    map: Box<dyn Fn(&Value) -> f64>,
    bandwidth: Option<f64>,
}

impl ScaleFn {
    /// Wraps a mapping function.
    pub fn new(map: impl Fn(&Value) -> f64 + 'static) -> Self {
        Self {
            map: Box::new(map),
            bandwidth: None,
        }
    }

    /// Wraps a numeric mapping function; non-numeric values map to `NaN`.
    pub fn numeric(map: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::new(move |v| number(v).as_f64().map_or(f64::NAN, &map))
    }

    /// Exposes a bandwidth, making this usable on a band axis.
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }
}

impl fmt::Debug for ScaleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleFn")
            .field("bandwidth", &self.bandwidth)
            .finish_non_exhaustive()
    }
}

impl Scale for ScaleFn {
    fn map(&self, value: &Value) -> f64 {
        (self.map)(value)
    }

    fn bandwidth(&self) -> Option<f64> {
        self.bandwidth
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a number from domain space into range space.
    pub fn map_f64(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl Scale for ScaleLinear {
    fn map(&self, value: &Value) -> f64 {
        match number(value) {
            Value::Number(x) => self.map_f64(x),
            _ => f64::NAN,
        }
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }
}

/// A discrete band scale for categorical axes.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    domain: Vec<Value>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (domain + padding, no range yet).
#[derive(Clone, Debug)]
pub struct ScaleBandSpec {
    /// Categories, in band order.
    pub domain: Vec<Value>,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale with one band per `domain` entry over `range`.
    pub fn new(domain: Vec<Value>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Returns the start position of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

impl Scale for ScaleBand {
    fn map(&self, value: &Value) -> f64 {
        self.domain
            .iter()
            .position(|v| v == value)
            .map_or(f64::NAN, |i| self.position(i))
    }

    fn bandwidth(&self) -> Option<f64> {
        Some(self.band_width())
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with default padding.
    pub fn new(domain: Vec<Value>) -> Self {
        Self {
            domain,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(self.domain.clone(), range)
            .with_padding(self.padding_inner, self.padding_outer)
    }
}

/// Infer a `(min, max)` domain for a scale from every channel bound to it.
///
/// Only channels whose `scale` equals `scale` contribute, so a zero-anchor channel pulls `0`
/// into the domain. Non-finite and non-numeric values are ignored. Returns `None` if no finite
/// values are present.
pub fn infer_domain<'a>(
    channels: impl IntoIterator<Item = &'a ResolvedChannel>,
    scale: &str,
) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for channel in channels {
        if channel.scale.as_deref() != Some(scale) {
            continue;
        }
        let Some(values) = channel.values() else {
            continue;
        };
        for v in values {
            let Some(v) = number(v).as_f64() else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Collects the distinct defined values of a band channel, in first-seen order.
pub fn infer_band_domain(values: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for v in values {
        if plotmark_core::defined(v) && !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}
