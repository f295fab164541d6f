//! Standalone SVG documents for vector geometries.
//!
//! Output carries structure, classes and data colors only; everything else is left to a
//! stylesheet.

use crate::model::{
    BarGeometry, BarOrientation, ChartGeometry, FlywheelGeometry, IndustryEvolutionGeometry,
    LabelAnchor, PieGeometry, RadarGeometry, ScatterGeometry,
};
use crate::{Error, Result};
use folio_core::geom::fmt_number;
use std::fmt::Write as _;

const BAR_TRACK: f64 = 600.0;
const BAR_THICKNESS: f64 = 24.0;
const BAR_PITCH: f64 = 48.0;
const COLUMN_HEIGHT: f64 = 300.0;
const COLUMN_PITCH: f64 = 120.0;
const COLUMN_WIDTH: f64 = 80.0;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `id` attribute.
    pub diagram_id: Option<String>,
    pub title: Option<String>,
    /// Selected flywheel wedge, marked with the `active` class.
    pub active_item: Option<usize>,
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fill_attr(color: Option<&str>) -> String {
    match color {
        Some(c) if !c.is_empty() => format!(r#" fill="{}""#, escape_xml(c)),
        _ => String::new(),
    }
}

fn open_svg(out: &mut String, class: &str, width: f64, height: f64, options: &SvgRenderOptions) {
    let id = options
        .diagram_id
        .as_deref()
        .map(|id| format!(r#" id="{}""#, escape_xml(id)))
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg"{id} class="folio-chart {class}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_number(width),
        h = fmt_number(height),
    );
    if let Some(title) = options.title.as_deref() {
        let _ = write!(out, "<title>{}</title>", escape_xml(title));
    }
}

fn write_label(out: &mut String, class: &str, label: &LabelAnchor) {
    let _ = write!(
        out,
        r#"<text class="{class}" x="{}" y="{}" text-anchor="{}" dominant-baseline="central">{}</text>"#,
        fmt_number(label.at.x),
        fmt_number(label.at.y),
        label.text_anchor.as_str(),
        escape_xml(&label.text)
    );
}

pub fn render_svg(geometry: &ChartGeometry, options: &SvgRenderOptions) -> Result<String> {
    let mut out = String::new();
    match geometry {
        ChartGeometry::Radar(g) => radar(&mut out, g, options),
        ChartGeometry::Pie(g) => pie(&mut out, g, options),
        ChartGeometry::Scatter(g) => scatter(&mut out, g, options),
        ChartGeometry::Bars(g) => bars(&mut out, g, options),
        ChartGeometry::Flywheel(g) => flywheel(&mut out, g, options),
        ChartGeometry::IndustryEvolution(g) => industry(&mut out, g, options),
        other => {
            return Err(Error::UnsupportedGeometry {
                kind: other.name().to_string(),
            });
        }
    }
    out.push_str("</svg>");
    Ok(out)
}

fn radar(out: &mut String, g: &RadarGeometry, options: &SvgRenderOptions) {
    open_svg(out, "folio-radar", g.bounds.width(), g.bounds.height(), options);
    let (cx, cy) = (fmt_number(g.center.x), fmt_number(g.center.y));

    out.push_str(r#"<g class="radar-grid">"#);
    for ring in &g.grid {
        let _ = write!(
            out,
            r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="none"/>"#,
            fmt_number(ring.radius)
        );
    }
    for spoke in &g.spokes {
        let _ = write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_number(spoke.from.x),
            fmt_number(spoke.from.y),
            fmt_number(spoke.to.x),
            fmt_number(spoke.to.y)
        );
    }
    out.push_str("</g>");

    for series in &g.series {
        let _ = write!(
            out,
            r#"<g class="radar-series series-{}"><path d="{}"/>"#,
            series.index, series.path
        );
        for v in &series.vertices {
            let _ = write!(
                out,
                r#"<circle class="radar-vertex" cx="{}" cy="{}" r="3"/>"#,
                fmt_number(v.x),
                fmt_number(v.y)
            );
        }
        out.push_str("</g>");
    }

    out.push_str(r#"<g class="radar-labels">"#);
    for label in &g.labels {
        write_label(out, "radar-label", label);
    }
    out.push_str("</g>");
}

fn pie(out: &mut String, g: &PieGeometry, options: &SvgRenderOptions) {
    open_svg(out, "folio-pie", g.bounds.width(), g.bounds.height(), options);
    for (i, slice) in g.slices.iter().enumerate() {
        let _ = write!(out, r#"<g class="pie-slice slice-{i}">"#);
        if !slice.path.is_empty() {
            let _ = write!(
                out,
                r#"<path d="{}"{}/>"#,
                slice.path,
                fill_attr(slice.color.as_deref())
            );
        }
        let _ = write!(
            out,
            r#"<line class="pie-leader" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_number(slice.leader.from.x),
            fmt_number(slice.leader.from.y),
            fmt_number(slice.leader.to.x),
            fmt_number(slice.leader.to.y)
        );
        let percent = LabelAnchor {
            text: slice.percent_label.clone(),
            ..slice.label_anchor.clone()
        };
        write_label(out, "pie-label", &percent);
        out.push_str("</g>");
    }
}

fn scatter(out: &mut String, g: &ScatterGeometry, options: &SvgRenderOptions) {
    open_svg(out, "folio-scatter", g.bounds.width(), g.bounds.height(), options);
    if let Some(curve) = &g.curve {
        let _ = write!(
            out,
            r#"<path class="scatter-curve" d="{}" fill="none"/>"#,
            curve.path
        );
    }
    for p in &g.points {
        let _ = write!(
            out,
            r#"<circle class="scatter-point" cx="{}" cy="{}" r="1.5"{}><title>{}</title></circle>"#,
            fmt_number(p.at.x),
            fmt_number(p.at.y),
            fill_attr(p.color.as_deref()),
            escape_xml(&p.label)
        );
    }
}

fn bars(out: &mut String, g: &BarGeometry, options: &SvgRenderOptions) {
    let n = g.bars.len() as f64;
    match g.orientation {
        BarOrientation::Horizontal => {
            open_svg(out, "folio-bars horizontal", BAR_TRACK, (n * BAR_PITCH).max(1.0), options);
            for (i, bar) in g.bars.iter().enumerate() {
                let y = i as f64 * BAR_PITCH + (BAR_PITCH - BAR_THICKNESS) / 2.0;
                let _ = write!(
                    out,
                    r#"<rect class="bar" x="0" y="{}" width="{}" height="{}"{}><title>{}</title></rect>"#,
                    fmt_number(y),
                    fmt_number(BAR_TRACK * bar.length_percent / 100.0),
                    fmt_number(BAR_THICKNESS),
                    fill_attr(bar.color.as_deref()),
                    escape_xml(&bar.label)
                );
            }
        }
        BarOrientation::Vertical => {
            open_svg(out, "folio-bars vertical", (n * COLUMN_PITCH).max(1.0), COLUMN_HEIGHT, options);
            for (i, bar) in g.bars.iter().enumerate() {
                let h = COLUMN_HEIGHT * bar.length_percent / 100.0;
                let x = i as f64 * COLUMN_PITCH + (COLUMN_PITCH - COLUMN_WIDTH) / 2.0;
                let _ = write!(
                    out,
                    r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}"{}><title>{}</title></rect>"#,
                    fmt_number(x),
                    fmt_number(COLUMN_HEIGHT - h),
                    fmt_number(COLUMN_WIDTH),
                    fmt_number(h),
                    fill_attr(bar.color.as_deref()),
                    escape_xml(&bar.label)
                );
            }
        }
    }
}

fn flywheel(out: &mut String, g: &FlywheelGeometry, options: &SvgRenderOptions) {
    open_svg(out, "folio-flywheel", g.bounds.width(), g.bounds.height(), options);
    for wedge in &g.wedges {
        let active = options.active_item == Some(wedge.index);
        let class = if active { "flywheel-wedge active" } else { "flywheel-wedge" };
        let fill = if active { fill_attr(wedge.color.as_deref()) } else { String::new() };
        let _ = write!(out, r#"<g class="{class}"><path d="{}"{fill}/>"#, wedge.path);
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central">{}</text></g>"#,
            fmt_number(wedge.label_anchor.x),
            fmt_number(wedge.label_anchor.y),
            escape_xml(&wedge.label)
        );
    }
    for (i, hub) in g.hub.iter().enumerate() {
        let _ = write!(
            out,
            r#"<circle class="flywheel-hub hub-{i}" cx="{}" cy="{}" r="{}" fill="none"/>"#,
            fmt_number(hub.center.x),
            fmt_number(hub.center.y),
            fmt_number(hub.r)
        );
    }
}

fn industry(out: &mut String, g: &IndustryEvolutionGeometry, options: &SvgRenderOptions) {
    open_svg(out, "folio-industry", g.bounds.width(), g.bounds.height(), options);
    let _ = write!(
        out,
        r#"<path class="evolution-region" d="{}"/><path class="evolution-decay" d="{}" fill="none"/><path class="evolution-growth" d="{}" fill="none"/>"#,
        g.region_path, g.decay_path, g.growth_path
    );
    let _ = write!(
        out,
        r#"<circle class="evolution-crossover" cx="{}" cy="{}" r="{}"/>"#,
        fmt_number(g.intersection.center.x),
        fmt_number(g.intersection.center.y),
        fmt_number(g.intersection.r)
    );
    if let Some(highlight) = g.highlight.as_deref() {
        let _ = write!(
            out,
            r#"<text class="evolution-highlight" x="330" y="160">{}</text>"#,
            escape_xml(highlight)
        );
    }
}
