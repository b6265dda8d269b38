// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demo for `plotmark`: renders a vertical and a horizontal bar chart as SVG on stdout.
//!
//! Set `RUST_LOG=debug` to see channel binding and rendering logs on stderr.

mod svg;

use kurbo::Rect;
use peniko::Mix;
use peniko::color::palette::css;
use plotmark_core::{ChannelValue, Datum, Row, number};
use plotmark_marks::{BarError, BarGroup, BarOptions, ScaleBand, ScaleLinear, bar_x, bar_y};

fn letters() -> Vec<Row> {
    [
        ("A", 8.167, 1.2),
        ("B", 1.492, -0.4),
        ("C", 2.782, 0.3),
        ("D", 4.253, -1.1),
        ("E", 12.702, 2.5),
        ("F", 2.288, f64::NAN),
    ]
    .into_iter()
    .map(|(letter, frequency, change)| {
        Row::new()
            .with("letter", letter)
            .with("frequency", frequency)
            .with("change", change)
    })
    .collect()
}

fn main() -> Result<(), BarError> {
    env_logger::init();

    let data = letters();
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(Rect::new(0.0, 0.0, 640.0, 520.0));
    scene.push(frequency_bars(&data, Rect::new(20.0, 20.0, 620.0, 240.0))?);
    scene.push(change_bars(&data, Rect::new(20.0, 280.0, 620.0, 500.0))?);

    print!("{}", scene.to_svg_string());
    Ok(())
}

/// Vertical bars: one per letter, height by frequency.
fn frequency_bars(data: &[Row], plot: Rect) -> Result<BarGroup, BarError> {
    let bar = bar_y(
        BarOptions::new()
            .with_x("letter")
            .with_y("frequency")
            .with_fill(css::STEEL_BLUE)
            .with_inset_left(1.0)
            .with_inset_right(1.0),
    )?;
    let resolved = bar.initialize(Some(data));

    let x = ScaleBand::new(resolved.band_domain(), (plot.x0, plot.x1)).with_padding(0.1, 0.1);
    let (lo, hi) = resolved.domain("y").unwrap_or((0.0, 1.0));
    let y = ScaleLinear::new((lo, hi), (plot.y1, plot.y0));
    log::info!("frequency bars: {} bands, y domain {lo}..{hi}", x.count());

    resolved.render(&x, &y)
}

/// Horizontal bars: signed change per letter, measured from zero. `F` has no change and is
/// skipped.
fn change_bars(data: &[Row], plot: Rect) -> Result<BarGroup, BarError> {
    let bar = bar_x(
        BarOptions::new()
            .with_x(ChannelValue::accessor(|d: &Row, _| number(&d.field("change"))))
            .with_y("letter")
            .with_fill(css::TOMATO)
            .with_fill_opacity(0.8)
            .with_stroke(css::BLACK)
            .with_stroke_width(0.5)
            .with_blend_mode(Mix::Multiply)
            .with_inset_top(2.0)
            .with_inset_bottom(2.0),
    )?;
    let resolved = bar.initialize(Some(data));

    let (lo, hi) = resolved.domain("x").unwrap_or((0.0, 1.0));
    let x = ScaleLinear::new((lo, hi), (plot.x0, plot.x1));
    let y = ScaleBand::new(resolved.band_domain(), (plot.y0, plot.y1)).with_padding(0.2, 0.1);
    log::info!("change bars: x domain {lo}..{hi}");

    let group = resolved.render(&x, &y)?;
    let skipped = resolved.index().map_or(0, <[usize]>::len) - group.len();
    if skipped > 0 {
        log::debug!("skipped {skipped} undefined change values");
    }
    Ok(group)
}
