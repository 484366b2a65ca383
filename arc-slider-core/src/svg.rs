//! Standalone SVG markup for a [`Scene`].

use std::fmt::Write;

use crate::scene::{LineCap, Scene};

/// Thumb radius in view box units.
const THUMB_RADIUS: f32 = 5.0;

/// Render a scene as an SVG document.
pub fn render(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_scene(&mut out, scene);
    out
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    let vb = &scene.view_box;
    let path = &scene.path;
    let gradient = &scene.gradient;
    let filter = &scene.filter;

    writeln!(
        out,
        r#"<svg class="slider-svg" viewBox="{}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
        vb.to_attribute()
    )?;

    if !scene.label.is_empty() {
        writeln!(out, "  <title>{}</title>", escape(&scene.label))?;
    }

    let line_cap = match path.line_cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    };
    writeln!(
        out,
        r#"  <path class="slider-svg-path" d="{}" stroke="url(#{})" stroke-width="{}em" stroke-linecap="{}" vector-effect="non-scaling-stroke" filter="url(#{})"/>"#,
        path.data, path.gradient_id, path.stroke_width_em, line_cap, path.filter_id
    )?;

    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <filter id="{}" filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">"#,
        filter.id
    )?;
    writeln!(
        out,
        r#"      <feFlood flood-opacity="0" result="BackgroundImageFix"/>"#
    )?;
    writeln!(
        out,
        r#"      <feBlend mode="normal" in="SourceGraphic" in2="BackgroundImageFix" result="shape"/>"#
    )?;
    writeln!(
        out,
        r#"      <feColorMatrix in="SourceAlpha" type="matrix" values="0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 127 0" result="hardAlpha"/>"#
    )?;
    writeln!(out, r#"      <feOffset dy="{}"/>"#, filter.dy)?;
    writeln!(
        out,
        r#"      <feGaussianBlur stdDeviation="{}"/>"#,
        filter.std_deviation
    )?;
    writeln!(
        out,
        r#"      <feComposite in2="hardAlpha" operator="arithmetic" k2="-1" k3="1"/>"#
    )?;
    writeln!(
        out,
        r#"      <feColorMatrix type="matrix" values="0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 {} 0"/>"#,
        filter.opacity
    )?;
    writeln!(
        out,
        r#"      <feBlend mode="normal" in2="shape" result="innerShadow"/>"#
    )?;
    writeln!(out, "    </filter>")?;

    writeln!(
        out,
        r#"    <linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        gradient.id, gradient.start.x, gradient.start.y, gradient.end.x, gradient.end.y
    )?;
    for stop in &gradient.stops {
        writeln!(
            out,
            r#"      <stop offset="{}" stop-color="{}"/>"#,
            stop.offset,
            stop.color.to_hex()
        )?;
    }
    writeln!(out, "    </linearGradient>")?;
    writeln!(out, "  </defs>")?;

    let center = scene.thumb.center(vb);
    writeln!(
        out,
        r#"  <circle class="slider-thumb" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        center.x,
        center.y,
        THUMB_RADIUS,
        scene.thumb.color.to_hex()
    )?;
    writeln!(
        out,
        r#"  <text class="slider-value" x="{}" y="{}" text-anchor="middle">{}</text>"#,
        center.x,
        center.y - THUMB_RADIUS * 2.0,
        escape(&scene.thumb.text)
    )?;

    writeln!(out, "</svg>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
