//! Charts rendered as standalone SVG and embedded as data URIs.

use std::f64::consts::PI;
use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use html_escape::encode_text;

const DONUT_SIZE: f64 = 320.0;
const DONUT_RADIUS: f64 = 100.0;
/// Inner hole as a share of the outer radius
const DONUT_HOLE: f64 = 0.6;

const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 320.0;
const BAR_MARGIN: f64 = 50.0;

/// One wedge of a donut chart
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'a str,
}

/// Wrap an SVG document as an `<img src>` value
pub fn data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// A donut chart with percentage labels on each wedge and a legend.
///
/// Wedges start at twelve o'clock and run clockwise. Negative values count
/// as zero.
pub fn donut_chart(slices: &[Slice<'_>]) -> String {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    let center = DONUT_SIZE / 2.0;
    let ring = DONUT_RADIUS * (1.0 + DONUT_HOLE) / 2.0;
    let stroke = DONUT_RADIUS * (1.0 - DONUT_HOLE);
    let circumference = 2.0 * PI * ring;
    let legend_height = 24.0 * slices.len() as f64;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = DONUT_SIZE,
        h = DONUT_SIZE + legend_height,
    );

    let mut offset = 0.0;
    for slice in slices {
        let share = if total > 0.0 { slice.value.max(0.0) / total } else { 0.0 };
        if share <= 0.0 {
            continue;
        }

        let _ = write!(
            svg,
            r#"<circle cx="{center}" cy="{center}" r="{ring}" fill="none" stroke="{color}" stroke-width="{stroke}" stroke-dasharray="{dash:.3} {circumference:.3}" stroke-dashoffset="{offset:.3}" transform="rotate(-90 {center} {center})"/>"#,
            color = encode_text(slice.color),
            dash = share * circumference,
            offset = -offset * circumference,
        );

        let angle = 2.0 * PI * (offset + share / 2.0) - PI / 2.0;
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{y:.1}" fill="white" font-size="12" text-anchor="middle" dominant-baseline="middle">{pct:.1}%</text>"#,
            x = center + ring * angle.cos(),
            y = center + ring * angle.sin(),
            pct = share * 100.0,
        );
        offset += share;
    }

    if total <= 0.0 {
        let _ = write!(
            svg,
            r##"<circle cx="{center}" cy="{center}" r="{ring}" fill="none" stroke="#555" stroke-width="{stroke}"/>"##,
        );
    }

    for (idx, slice) in slices.iter().enumerate() {
        let y = DONUT_SIZE + 24.0 * idx as f64;
        let _ = write!(
            svg,
            r#"<rect x="{x}" y="{y}" width="14" height="14" fill="{color}"/><text x="{tx}" y="{ty}" fill="white" font-size="13">{label}</text>"#,
            x = center - 70.0,
            color = encode_text(slice.color),
            tx = center - 50.0,
            ty = y + 12.0,
            label = encode_text(slice.label),
        );
    }

    svg.push_str("</svg>");
    svg
}

/// A vertical bar chart with value labels, axis titles and a chart title
pub fn bar_chart(title: &str, bars: &[(&str, f64)], color: &str, x_label: &str, y_label: &str) -> String {
    let plot_width = BAR_WIDTH - 2.0 * BAR_MARGIN;
    let plot_height = BAR_HEIGHT - 2.0 * BAR_MARGIN;
    let baseline = BAR_HEIGHT - BAR_MARGIN;
    let max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let slot = if bars.is_empty() { plot_width } else { plot_width / bars.len() as f64 };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = BAR_WIDTH,
        h = BAR_HEIGHT,
    );
    let _ = write!(
        svg,
        r#"<text x="{x}" y="24" fill="white" font-size="16" text-anchor="middle">{title}</text>"#,
        x = BAR_WIDTH / 2.0,
        title = encode_text(title),
    );
    // Axes
    let _ = write!(
        svg,
        r#"<line x1="{m}" y1="{m}" x2="{m}" y2="{b}" stroke="white"/><line x1="{m}" y1="{b}" x2="{r}" y2="{b}" stroke="white"/>"#,
        m = BAR_MARGIN,
        b = baseline,
        r = BAR_WIDTH - BAR_MARGIN,
    );

    for (idx, (label, value)) in bars.iter().enumerate() {
        let height = if max > 0.0 { value.max(0.0) / max * plot_height } else { 0.0 };
        let x = BAR_MARGIN + slot * idx as f64 + slot * 0.15;
        let width = slot * 0.7;
        let mid = x + width / 2.0;

        let _ = write!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" fill="{color}"/>"#,
            y = baseline - height,
            color = encode_text(color),
        );
        let _ = write!(
            svg,
            r#"<text x="{mid:.1}" y="{y:.1}" fill="white" font-size="12" text-anchor="middle">{value}</text>"#,
            y = baseline - height - 6.0,
            value = pipeline::format_number(*value),
        );
        let _ = write!(
            svg,
            r#"<text x="{mid:.1}" y="{y:.1}" fill="white" font-size="12" text-anchor="middle">{label}</text>"#,
            y = baseline + 18.0,
            label = encode_text(label),
        );
    }

    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" fill="white" font-size="13" text-anchor="middle">{label}</text>"#,
        x = BAR_WIDTH / 2.0,
        y = BAR_HEIGHT - 10.0,
        label = encode_text(x_label),
    );
    let _ = write!(
        svg,
        r#"<text x="16" y="{y}" fill="white" font-size="13" text-anchor="middle" transform="rotate(-90 16 {y})">{label}</text>"#,
        y = BAR_HEIGHT / 2.0,
        label = encode_text(y_label),
    );

    svg.push_str("</svg>");
    svg
}
