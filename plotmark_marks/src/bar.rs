// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar marks.
//!
//! A bar has a value axis, measured from zero, and a band axis that gives every bar the same
//! thickness:
//! - [`bar_x`] (`BarX`): horizontal bars, value on `x`, band on `y`.
//! - [`bar_y`] (`BarY`): vertical bars, value on `y`, band on `x`.
//!
//! Both carry a constant zero-anchor channel (`x0` or `y0`) bound to the value scale, so domain
//! inference always includes the baseline.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::{BlendMode, Brush};
use plotmark_core::{
    ChannelKind, ChannelSpec, ChannelValue, Datum, Mark, ResolvedChannel, Value, defined,
    identity, index_of,
};

use crate::error::BarError;
use crate::geometry::BarGeometry;
use crate::rect::{BarGroup, BarRect, BarStyle};
use crate::scale::{Scale, infer_band_domain, infer_domain};

/// Which axis carries the bar's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Value on `x`, band on `y` (`BarX`).
    Horizontal,
    /// Value on `y`, band on `x` (`BarY`).
    Vertical,
}

impl Orientation {
    /// Channel (and scale) name of the value axis.
    pub fn value_channel(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        }
    }

    /// Channel (and scale) name of the band axis.
    pub fn band_channel(self) -> &'static str {
        match self {
            Self::Horizontal => "y",
            Self::Vertical => "x",
        }
    }

    /// Name of the zero-anchor channel.
    pub fn zero_channel(self) -> &'static str {
        match self {
            Self::Horizontal => "x0",
            Self::Vertical => "y0",
        }
    }
}

/// Per-side pixel margins subtracted from each bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
}

impl Insets {
    /// The same inset on every side.
    pub fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }
}

/// Options for [`bar_x`] and [`bar_y`].
#[derive(Clone, Debug)]
pub struct BarOptions<T> {
    /// `x` values. Defaults to the datum (`BarX`) or its index (`BarY`).
    pub x: Option<ChannelValue<T>>,
    /// `y` values. Defaults to the index (`BarX`) or the datum (`BarY`).
    pub y: Option<ChannelValue<T>>,
    /// Paint attributes.
    pub style: BarStyle,
    /// Per-side insets.
    pub insets: Insets,
}

impl<T> Default for BarOptions<T> {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            style: BarStyle::default(),
            insets: Insets::default(),
        }
    }
}

impl<T> BarOptions<T> {
    /// Creates options with default channels, style and zero insets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `x` channel source.
    pub fn with_x(mut self, x: impl Into<ChannelValue<T>>) -> Self {
        self.x = Some(x.into());
        self
    }

    /// Sets the `y` channel source.
    pub fn with_y(mut self, y: impl Into<ChannelValue<T>>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.style.fill = fill.into();
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.style.fill_opacity = Some(opacity);
        self
    }

    /// Sets the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.style.stroke = Some(stroke.into());
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.style.stroke_width = Some(width);
        self
    }

    /// Sets the stroke opacity.
    pub fn with_stroke_opacity(mut self, opacity: f32) -> Self {
        self.style.stroke_opacity = Some(opacity);
        self
    }

    /// Sets the blend mode.
    pub fn with_blend_mode(mut self, mode: impl Into<BlendMode>) -> Self {
        self.style.blend_mode = Some(mode.into());
        self
    }

    /// Sets all four insets.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets the top inset.
    pub fn with_inset_top(mut self, inset: f64) -> Self {
        self.insets.top = inset;
        self
    }

    /// Sets the right inset.
    pub fn with_inset_right(mut self, inset: f64) -> Self {
        self.insets.right = inset;
        self
    }

    /// Sets the bottom inset.
    pub fn with_inset_bottom(mut self, inset: f64) -> Self {
        self.insets.bottom = inset;
        self
    }

    /// Sets the left inset.
    pub fn with_inset_left(mut self, inset: f64) -> Self {
        self.insets.left = inset;
        self
    }
}

/// Creates a horizontal bar mark (`BarX`).
pub fn bar_x<T: Clone + Datum + 'static>(options: BarOptions<T>) -> Result<Bar<T>, BarError> {
    Bar::new(Orientation::Horizontal, options)
}

/// Creates a vertical bar mark (`BarY`).
pub fn bar_y<T: Clone + Datum + 'static>(options: BarOptions<T>) -> Result<Bar<T>, BarError> {
    Bar::new(Orientation::Vertical, options)
}

/// A bar mark: channels plus style, ready to bind to data.
#[derive(Clone, Debug)]
pub struct Bar<T: Clone> {
    orientation: Orientation,
    mark: Mark<T>,
    style: BarStyle,
    insets: Insets,
}

impl<T: Clone + Datum + 'static> Bar<T> {
    /// Creates a bar mark with the given orientation.
    ///
    /// The value axis defaults to the datum itself and the band axis to the datum's index.
    pub fn new(orientation: Orientation, options: BarOptions<T>) -> Result<Self, BarError> {
        let BarOptions {
            x,
            y,
            style,
            insets,
        } = options;
        let (value, band) = match orientation {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        };
        let value = value.unwrap_or_else(|| ChannelValue::Accessor(identity()));
        let band = band.unwrap_or_else(|| ChannelValue::Accessor(index_of()));

        let value_channel = orientation.value_channel();
        let band_channel = orientation.band_channel();
        let mark = Mark::new([
            ChannelSpec::named(value_channel, value).with_scale(value_channel),
            ChannelSpec::named(band_channel, band)
                .with_scale(band_channel)
                .with_kind(ChannelKind::Band),
            ChannelSpec::named(orientation.zero_channel(), ChannelValue::constant([0.0]))
                .with_scale(value_channel),
        ])?;

        Ok(Self {
            orientation,
            mark,
            style,
            insets,
        })
    }

    /// Attaches the bar's own dataset, used by [`Bar::bind`].
    pub fn with_data(mut self, data: impl Into<Rc<[T]>>) -> Self {
        self.mark = self.mark.with_data(data);
        self
    }

    /// Returns the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the underlying mark.
    pub fn mark(&self) -> &Mark<T> {
        &self.mark
    }

    /// Returns the style.
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    /// Returns the insets.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Resolves the bar's channels against `data`.
    pub fn initialize(&self, data: Option<&[T]>) -> ResolvedBar {
        let binding = self.mark.initialize(data);
        ResolvedBar {
            orientation: self.orientation,
            style: self.style.clone(),
            insets: self.insets,
            index: binding.index.clone(),
            channels: binding.into_named(),
        }
    }

    /// Resolves the bar's channels against its own dataset.
    pub fn bind(&self) -> ResolvedBar {
        self.initialize(self.mark.data())
    }
}

/// A bar mark with channels resolved against data, ready to be rendered with scales.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBar {
    orientation: Orientation,
    style: BarStyle,
    insets: Insets,
    index: Option<Vec<usize>>,
    channels: HashMap<String, ResolvedChannel>,
}

impl ResolvedBar {
    /// Returns the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the index, or `None` if the bar was initialized without data.
    pub fn index(&self) -> Option<&[usize]> {
        self.index.as_deref()
    }

    /// Returns a resolved channel by role (`x`, `y`, `x0` or `y0`).
    pub fn channel(&self, name: &str) -> Option<&ResolvedChannel> {
        self.channels.get(name)
    }

    /// Infers a numeric domain for `scale` from every channel bound to it.
    ///
    /// On the value axis this always includes `0`, because of the zero-anchor channel.
    pub fn domain(&self, scale: &str) -> Option<(f64, f64)> {
        infer_domain(self.channels.values(), scale)
    }

    /// Returns the distinct defined values on the band axis, in data order.
    pub fn band_domain(&self) -> Vec<Value> {
        self.values(self.orientation.band_channel())
            .map(infer_band_domain)
            .unwrap_or_default()
    }

    fn values(&self, name: &'static str) -> Result<&[Value], BarError> {
        self.channels
            .get(name)
            .and_then(ResolvedChannel::values)
            .ok_or(BarError::MissingChannel(name))
    }

    /// Computes one rectangle per datum whose `x` and `y` are both defined.
    pub fn render(&self, x: &dyn Scale, y: &dyn Scale) -> Result<BarGroup, BarError> {
        self.render_with(x, y, defined)
    }

    /// Like [`ResolvedBar::render`], with a custom definedness predicate.
    ///
    /// Fails before producing any rectangle if the `x` and `y` values differ in length or the
    /// band-axis scale has no bandwidth. Rectangles keep index order.
    pub fn render_with(
        &self,
        x: &dyn Scale,
        y: &dyn Scale,
        is_defined: impl Fn(&Value) -> bool,
    ) -> Result<BarGroup, BarError> {
        let xs = self.values("x")?;
        let ys = self.values("y")?;
        if xs.len() != ys.len() {
            return Err(BarError::ChannelLengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        let geometry = BarGeometry::new(self.orientation, self.insets, x, y)?;
        let rects: Vec<BarRect> = xs
            .iter()
            .zip(ys)
            .enumerate()
            .filter(|&(_, (xv, yv))| is_defined(xv) && is_defined(yv))
            .map(|(index, (xv, yv))| BarRect {
                index,
                rect: geometry.rect(xv, yv),
            })
            .collect();

        log::trace!(
            "rendered {} of {} bars ({:?})",
            rects.len(),
            xs.len(),
            self.orientation
        );

        Ok(BarGroup {
            style: self.style.clone(),
            rects,
        })
    }
}
