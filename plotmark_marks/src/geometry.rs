// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar rectangle math shared by both orientations.
//!
//! One axis carries the value and is measured from the scale's zero position; the other is a
//! band axis whose bandwidth gives every bar the same thickness.

use kurbo::Rect;
use plotmark_core::Value;

use crate::bar::{Insets, Orientation};
use crate::error::BarError;
use crate::scale::Scale;

/// Per-render geometry state: scales plus the values that are constant across bars.
pub(crate) struct BarGeometry<'a> {
    orientation: Orientation,
    insets: Insets,
    x: &'a dyn Scale,
    y: &'a dyn Scale,
    /// Position of `0` on the value axis.
    zero: f64,
    /// Bar size along the band axis, after insets.
    thickness: f64,
}

impl<'a> BarGeometry<'a> {
    pub(crate) fn new(
        orientation: Orientation,
        insets: Insets,
        x: &'a dyn Scale,
        y: &'a dyn Scale,
    ) -> Result<Self, BarError> {
        let (value_scale, band_scale) = match orientation {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        };
        let bandwidth = band_scale
            .bandwidth()
            .ok_or(BarError::MissingBandwidth(orientation.band_channel()))?;
        let thickness = match orientation {
            Orientation::Horizontal => band_extent(bandwidth, insets.top, insets.bottom),
            Orientation::Vertical => band_extent(bandwidth, insets.left, insets.right),
        };
        Ok(Self {
            orientation,
            insets,
            x,
            y,
            zero: value_scale.map(&Value::Number(0.0)),
            thickness,
        })
    }

    /// Computes the rectangle for one datum.
    pub(crate) fn rect(&self, x: &Value, y: &Value) -> Rect {
        let insets = self.insets;
        match self.orientation {
            Orientation::Horizontal => {
                let v = self.x.map(x);
                let x0 = self.zero.min(v) + insets.left;
                let width = value_extent(v, self.zero, insets.left, insets.right);
                let y0 = self.y.map(y) + insets.top;
                Rect::new(x0, y0, x0 + width, y0 + self.thickness)
            }
            Orientation::Vertical => {
                let x0 = self.x.map(x) + insets.left;
                let v = self.y.map(y);
                let y0 = self.zero.min(v) + insets.top;
                let height = value_extent(v, self.zero, insets.top, insets.bottom);
                Rect::new(x0, y0, x0 + self.thickness, y0 + height)
            }
        }
    }
}

/// Length of a bar from `zero` to `v`, minus both insets, clamped at zero.
pub(crate) fn value_extent(v: f64, zero: f64, inset_a: f64, inset_b: f64) -> f64 {
    ((v - zero).abs() - inset_a - inset_b).max(0.0)
}

/// Bandwidth minus both insets, clamped at zero.
pub(crate) fn band_extent(bandwidth: f64, inset_a: f64, inset_b: f64) -> f64 {
    (bandwidth - inset_a - inset_b).max(0.0)
}
