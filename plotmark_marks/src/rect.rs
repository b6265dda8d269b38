// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle descriptors handed to a renderer.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::{BlendMode, Brush};

/// Paint attributes shared by every rectangle of a bar mark.
///
/// These are passed through to the renderer untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarStyle {
    /// Fill paint (the current color by default).
    pub fill: Brush,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: Option<f32>,
    /// Stroke paint.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates.
    pub stroke_width: Option<f64>,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: Option<f32>,
    /// Blend mode applied to each rectangle.
    pub blend_mode: Option<BlendMode>,
}

/// One bar: the datum's position in the index plus its rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    /// Position of the datum in the mark's index.
    pub index: usize,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
}

impl BarRect {
    /// Left edge.
    pub fn x(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.rect.y0
    }

    /// Width (never negative).
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Height (never negative).
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// The rendered form of a bar mark: rectangles in data order plus their shared style.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    /// Style shared by every rectangle.
    pub style: BarStyle,
    /// One rectangle per defined datum, in index order.
    pub rects: Vec<BarRect>,
}

impl BarGroup {
    /// Returns the number of rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if no rectangle survived filtering.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the bounding box of all rectangles.
    pub fn bounds(&self) -> Option<Rect> {
        self.rects.iter().map(|r| r.rect).reduce(|a, b| a.union(b))
    }
}
