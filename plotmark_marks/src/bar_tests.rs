// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Mix;
use peniko::color::palette::css;
use plotmark_core::{ChannelValue, Row, Value};

use crate::{
    BarError, BarOptions, Insets, Orientation, ScaleBand, ScaleFn, ScaleLinear, bar_x, bar_y,
};

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

fn index_band(count: usize, range: (f64, f64)) -> ScaleBand {
    let domain = (0..count).map(|i| Value::Number(i as f64)).collect();
    ScaleBand::new(domain, range).with_padding(0.0, 0.0)
}

#[test]
fn bar_x_measures_from_zero_on_either_side() {
    let data = [-3.0, 0.0, 5.0];
    let bar = bar_x::<f64>(BarOptions::new()).unwrap();
    let resolved = bar.initialize(Some(&data[..]));

    let x = ScaleFn::numeric(|v| v + 10.0);
    let y = index_band(3, (0.0, 30.0));
    let group = resolved.render(&x, &y).unwrap();

    assert_eq!(group.len(), 3);
    // -3 => x(-3)=7, x(0)=10 => [7, 10]
    assert_rect_close(group.rects[0].rect, Rect::new(7.0, 0.0, 10.0, 10.0));
    assert_eq!(group.rects[0].width(), 3.0);
    // 0 => zero-width bar at the baseline
    assert_rect_close(group.rects[1].rect, Rect::new(10.0, 10.0, 10.0, 20.0));
    // 5 => [10, 15]
    assert_rect_close(group.rects[2].rect, Rect::new(10.0, 20.0, 15.0, 30.0));
    assert_eq!(group.rects[2].x(), 10.0);
    assert_eq!(group.rects[2].width(), 5.0);
}

#[test]
fn insets_shrink_bars_and_clamp_at_zero() {
    let data = [1.0, 8.0];
    let bar = bar_x::<f64>(
        BarOptions::new()
            .with_inset_left(2.0)
            .with_inset_right(2.0)
            .with_inset_top(1.0)
            .with_inset_bottom(3.0),
    )
    .unwrap();
    assert_eq!(
        bar.insets(),
        Insets {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 2.0,
        }
    );
    let resolved = bar.initialize(Some(&data[..]));

    let x = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
    let y = index_band(2, (0.0, 20.0));
    let group = resolved.render(&x, &y).unwrap();

    // Raw width 10, minus both insets.
    assert_rect_close(group.rects[0].rect, Rect::new(2.0, 1.0, 8.0, 7.0));
    // Raw width 80 => 76, starting at the left inset.
    assert_rect_close(group.rects[1].rect, Rect::new(2.0, 11.0, 78.0, 17.0));

    let wide = bar_x::<f64>(BarOptions::new().with_insets(Insets::uniform(60.0))).unwrap();
    let group = wide.initialize(Some(&data[..])).render(&x, &y).unwrap();
    for r in &group.rects {
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }
}

#[test]
fn bar_y_is_the_mirror_of_bar_x() {
    let data = vec![
        Row::new().with("name", "a").with("value", 4.0),
        Row::new().with("name", "b").with("value", -2.0),
    ];
    let bar = bar_y::<Row>(BarOptions::new().with_x("name").with_y("value")).unwrap();
    assert_eq!(bar.orientation(), Orientation::Vertical);
    let names: Vec<_> = bar.mark().channel_names().collect();
    assert_eq!(names, vec![Some("y"), Some("x"), Some("y0")]);
    let resolved = bar.initialize(Some(&data[..]));

    let x = ScaleBand::new(resolved.band_domain(), (0.0, 20.0)).with_padding(0.0, 0.0);
    let y = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
    let group = resolved.render(&x, &y).unwrap();

    // 4 => y(4)=60, y(0)=100
    assert_rect_close(group.rects[0].rect, Rect::new(0.0, 60.0, 10.0, 100.0));
    // -2 => y(-2)=120, so the bar hangs below the baseline.
    assert_rect_close(group.rects[1].rect, Rect::new(10.0, 100.0, 20.0, 120.0));
}

#[test]
fn undefined_values_are_skipped_without_reordering() {
    let data = vec![
        Row::new().with("k", 0.0).with("v", 1.0),
        Row::new().with("k", 1.0).with("v", f64::NAN),
        Row::new().with("k", 2.0),
        Row::new().with("k", 3.0).with("v", 4.0),
    ];
    let bar = bar_y::<Row>(BarOptions::new().with_x("k").with_y("v")).unwrap();
    let resolved = bar.initialize(Some(&data[..]));

    let x = index_band(4, (0.0, 40.0));
    let y = ScaleLinear::new((0.0, 4.0), (40.0, 0.0));
    let group = resolved.render(&x, &y).unwrap();

    let indices: Vec<_> = group.rects.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 3]);
    assert_rect_close(group.rects[1].rect, Rect::new(30.0, 0.0, 40.0, 40.0));
}

#[test]
fn custom_definedness_predicate_is_honored() {
    let data = [1.0, 2.0, 3.0];
    let options = BarOptions::new().with_y(ChannelValue::constant([10.0, 11.0, 12.0]));
    let resolved = bar_x::<f64>(options).unwrap().initialize(Some(&data[..]));
    let x = ScaleLinear::new((0.0, 3.0), (0.0, 30.0));
    let y = ScaleBand::new(resolved.band_domain(), (0.0, 30.0)).with_padding(0.0, 0.0);

    let group = resolved
        .render_with(&x, &y, |v| v != &Value::Number(2.0))
        .unwrap();
    let indices: Vec<_> = group.rects.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 2]);

    let group = resolved
        .render_with(&x, &y, |v| v != &Value::Number(11.0))
        .unwrap();
    let indices: Vec<_> = group.rects.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn predicate_applies_to_both_axes() {
    // The default band channel is the index, so rejecting 2.0 also drops datum 2 on `y`.
    let data = [1.0, 5.0, 3.0];
    let resolved = bar_x::<f64>(BarOptions::new())
        .unwrap()
        .initialize(Some(&data[..]));
    let x = ScaleLinear::new((0.0, 5.0), (0.0, 50.0));
    let y = index_band(3, (0.0, 30.0));
    let group = resolved
        .render_with(&x, &y, |v| v != &Value::Number(2.0))
        .unwrap();
    let indices: Vec<_> = group.rects.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn mismatched_channel_lengths_fail_before_any_geometry() {
    let bar = bar_x::<f64>(
        BarOptions::new()
            .with_x(ChannelValue::constant([1.0, 2.0, 3.0]))
            .with_y(ChannelValue::constant([0.0, 1.0, 2.0, 3.0])),
    )
    .unwrap();
    let resolved = bar.initialize(Some(&[][..]));
    let x = ScaleLinear::new((0.0, 3.0), (0.0, 30.0));
    let y = index_band(4, (0.0, 40.0));
    assert_eq!(
        resolved.render(&x, &y),
        Err(BarError::ChannelLengthMismatch { x: 3, y: 4 })
    );
}

#[test]
fn band_axis_requires_a_bandwidth() {
    let data = [1.0];
    let resolved = bar_x::<f64>(BarOptions::new())
        .unwrap()
        .initialize(Some(&data[..]));
    let x = ScaleLinear::new((0.0, 1.0), (0.0, 10.0));
    let y = ScaleLinear::new((0.0, 1.0), (0.0, 10.0));
    assert_eq!(
        resolved.render(&x, &y),
        Err(BarError::MissingBandwidth("y"))
    );

    let y = ScaleFn::numeric(|v| v * 10.0).with_bandwidth(8.0);
    let group = resolved.render(&x, &y).unwrap();
    assert_eq!(group.rects[0].height(), 8.0);
}

#[test]
fn rendering_without_data_reports_the_missing_channel() {
    let resolved = bar_y::<f64>(BarOptions::new()).unwrap().initialize(None);
    assert!(resolved.index().is_none());
    let x = index_band(1, (0.0, 10.0));
    let y = ScaleLinear::new((0.0, 1.0), (10.0, 0.0));
    assert_eq!(
        resolved.render(&x, &y),
        Err(BarError::MissingChannel("x"))
    );
}

#[test]
fn zero_anchor_pulls_zero_into_the_value_domain() {
    let data = [3.0, 5.0];
    let resolved = bar_y::<f64>(BarOptions::new())
        .unwrap()
        .initialize(Some(&data[..]));
    assert_eq!(resolved.domain("y"), Some((0.0, 5.0)));
    assert_eq!(resolved.domain("x"), Some((0.0, 1.0)));
    assert_eq!(
        resolved.channel("y0").and_then(|c| c.values()),
        Some(&[Value::Number(0.0)][..])
    );
    assert!(resolved.channel("x").unwrap().kind.as_ref().unwrap().is_band());
}

#[test]
fn style_is_passed_through_untouched() {
    let data = [1.0];
    let bar = bar_x::<f64>(
        BarOptions::new()
            .with_fill(css::CORNFLOWER_BLUE)
            .with_fill_opacity(0.5)
            .with_stroke(css::BLACK)
            .with_stroke_width(2.0)
            .with_stroke_opacity(0.25)
            .with_blend_mode(Mix::Multiply),
    )
    .unwrap();
    let x = ScaleLinear::new((0.0, 1.0), (0.0, 10.0));
    let y = index_band(1, (0.0, 10.0));
    let group = bar.initialize(Some(&data[..])).render(&x, &y).unwrap();
    assert_eq!(&group.style, bar.style());
    assert_eq!(group.style.fill_opacity, Some(0.5));
    assert_eq!(group.style.stroke_width, Some(2.0));
    assert_eq!(group.style.blend_mode, Some(Mix::Multiply.into()));
}

#[test]
fn repeated_binding_is_stable() {
    let bar = bar_y::<f64>(BarOptions::new())
        .unwrap()
        .with_data(vec![2.0, 4.0]);
    let a = bar.bind();
    let b = bar.bind();
    assert_eq!(a, b);

    let x = index_band(2, (0.0, 20.0));
    let y = ScaleLinear::new((0.0, 4.0), (40.0, 0.0));
    assert_eq!(a.render(&x, &y), b.render(&x, &y));
    assert_eq!(
        a.render(&x, &y).unwrap().bounds(),
        Some(Rect::new(0.0, 0.0, 20.0, 40.0))
    );
}
