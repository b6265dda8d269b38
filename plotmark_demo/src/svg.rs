// Copyright 2026 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `plotmark_demo`.

use kurbo::Rect;
use peniko::{BlendMode, Brush, Mix};
use plotmark_marks::{BarGroup, BarStyle};

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    groups: Vec<BarGroup>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn push(&mut self, group: BarGroup) {
        self.groups.push(group);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.bounds()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let view_box = view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for group in &self.groups {
            out.push_str("<g");
            write_style_attrs(&mut out, &group.style);
            out.push_str(">\n");
            let blend = group.style.blend_mode.map(css_blend_mode);
            for r in &group.rects {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.x(),
                    r.y(),
                    r.width(),
                    r.height(),
                ));
                if let Some(blend) = blend {
                    out.push_str(&format!(r#" style="mix-blend-mode: {blend}""#));
                }
                out.push_str("/>\n");
            }
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    fn bounds(&self) -> Option<Rect> {
        self.groups
            .iter()
            .filter_map(BarGroup::bounds)
            .reduce(|a, b| a.union(b))
            .map(|r| {
                // Add a small padding margin.
                let pad = 10.0;
                Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
            })
    }
}

fn write_style_attrs(out: &mut String, style: &BarStyle) {
    write_paint_attr(out, "fill", &style.fill, style.fill_opacity);
    if let Some(stroke) = &style.stroke {
        write_paint_attr(out, "stroke", stroke, style.stroke_opacity);
    }
    if let Some(width) = style.stroke_width {
        out.push_str(&format!(r#" stroke-width="{width}""#));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush, opacity: Option<f32>) {
    let (value, alpha) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    // An explicit opacity replaces the color's own alpha.
    match (opacity, alpha) {
        (Some(o), _) => out.push_str(&format!(r#" {name}-opacity="{o}""#)),
        (None, Some(a)) => out.push_str(&format!(r#" {name}-opacity="{a}""#)),
        (None, None) => {}
    }
}

fn css_blend_mode(mode: BlendMode) -> &'static str {
    match mode.mix {
        Mix::Multiply => "multiply",
        Mix::Screen => "screen",
        Mix::Overlay => "overlay",
        Mix::Darken => "darken",
        Mix::Lighten => "lighten",
        Mix::ColorDodge => "color-dodge",
        Mix::ColorBurn => "color-burn",
        Mix::HardLight => "hard-light",
        Mix::SoftLight => "soft-light",
        Mix::Difference => "difference",
        Mix::Exclusion => "exclusion",
        Mix::Hue => "hue",
        Mix::Saturation => "saturation",
        Mix::Color => "color",
        Mix::Luminosity => "luminosity",
        _ => "normal",
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use plotmark_marks::BarRect;

    use super::*;

    #[test]
    fn group_attributes_and_rects_are_written() {
        let style = BarStyle {
            fill: css::RED.into(),
            fill_opacity: Some(0.5),
            stroke_width: Some(2.0),
            blend_mode: Some(Mix::Multiply.into()),
            ..BarStyle::default()
        };
        let mut scene = SvgScene::default();
        scene.push(BarGroup {
            style,
            rects: vec![BarRect {
                index: 0,
                rect: Rect::new(1.0, 2.0, 4.0, 6.0),
            }],
        });
        let svg = scene.to_svg_string();
        assert!(svg.contains(r##"<g fill="#ff0000" fill-opacity="0.5" stroke-width="2">"##));
        assert!(svg.contains(
            r#"<rect x="1" y="2" width="3" height="4" style="mix-blend-mode: multiply"/>"#
        ));
    }

    #[test]
    fn opacity_is_written_at_its_own_precision() {
        let mut out = String::new();
        write_paint_attr(&mut out, "fill", &Brush::from(css::RED), Some(0.8));
        assert_eq!(out, r##" fill="#ff0000" fill-opacity="0.8""##);
    }
}
