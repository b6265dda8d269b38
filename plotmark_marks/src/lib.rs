// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar marks for `plotmark_core`.
//!
//! This crate turns resolved channels into geometry:
//! - **Scales** ([`Scale`]) map channel values into pixel coordinates. Scale construction is up
//!   to the caller; [`ScaleLinear`] and [`ScaleBand`] cover the common cases.
//! - **Bars** ([`bar_x`], [`bar_y`]) bind their `x`/`y` channels to data and compute one
//!   rectangle per defined datum, measured from the value scale's zero.
//!
//! Drawing is out of scope: [`ResolvedBar::render`] returns a [`BarGroup`] of rectangles plus
//! pass-through style for an external renderer.

#![no_std]

extern crate alloc;

mod bar;
#[cfg(test)]
mod bar_tests;
mod error;
mod geometry;
mod rect;
mod scale;

pub use bar::{Bar, BarOptions, Insets, Orientation, ResolvedBar, bar_x, bar_y};
pub use error::BarError;
pub use rect::{BarGroup, BarRect, BarStyle};
pub use scale::{
    Scale, ScaleBand, ScaleBandSpec, ScaleFn, ScaleLinear, ScaleLinearSpec, infer_band_domain,
    infer_domain,
};
