use crate::model::{
    Bounds, LabelAnchor, LayoutPoint, LineSegment, PieGeometry, PieSliceGeometry, TextAnchor,
};
use crate::path::PathData;
use folio_core::GeometryConfig;
use folio_core::charts::PieChart;
use folio_core::geom::{Angle, Point, point, polar};

const FULL_TURN_EPSILON: f64 = 1e-9;

fn at_degrees(center: Point, r: f64, degrees: f64) -> LayoutPoint {
    polar(center, r, Angle::degrees(degrees)).into()
}

/// Slice angles start at three o'clock and grow clockwise.
pub fn pie_geometry(chart: &PieChart, config: &GeometryConfig) -> PieGeometry {
    let c = config.f64_or("pie.center", 200.0);
    let radius = config.f64_or("pie.radius", 160.0);
    let label_radius = radius + config.f64_or("pie.labelOffset", 30.0);
    let center = point(c, c);

    let values: Vec<f64> = chart.slices.iter().map(|s| s.value.max(0.0)).collect();
    let total: f64 = values.iter().sum();

    let mut start = 0.0_f64;
    let mut slices = Vec::with_capacity(chart.slices.len());
    for (slice, &value) in chart.slices.iter().zip(&values) {
        let fraction = if total > 0.0 { value / total } else { 0.0 };
        let span = 360.0 * fraction;
        let end = start + span;
        let mid = start + span / 2.0;

        let path = slice_path(center, radius, start, end);
        let label_at = at_degrees(center, label_radius, mid);
        let text_anchor = if mid > 90.0 && mid < 270.0 {
            TextAnchor::End
        } else {
            TextAnchor::Start
        };

        slices.push(PieSliceGeometry {
            label: slice.label.clone(),
            value,
            fraction,
            start_degrees: start,
            span_degrees: span,
            path,
            color: slice.color.clone(),
            percent_label: format!("{}%", (fraction * 100.0).round() as i64),
            label_anchor: LabelAnchor {
                text: slice.label.clone(),
                at: label_at,
                text_anchor,
            },
            leader: LineSegment {
                from: at_degrees(center, radius, mid),
                to: label_at,
            },
        });
        start = end;
    }

    if total <= 0.0 && !chart.slices.is_empty() {
        tracing::debug!(slices = chart.slices.len(), "pie total is zero");
    }
    PieGeometry {
        bounds: Bounds::sized(2.0 * c, 2.0 * c),
        center: center.into(),
        radius,
        total,
        slices,
    }
}

fn slice_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let span = end - start;
    if span <= 0.0 {
        return String::new();
    }
    let from = at_degrees(center, radius, start);
    if span >= 360.0 - FULL_TURN_EPSILON {
        // A single arc cannot start and end on the same point.
        let half = at_degrees(center, radius, start + 180.0);
        return PathData::new()
            .move_to(from)
            .arc_to(radius, true, true, half)
            .arc_to(radius, true, true, from)
            .close()
            .finish();
    }
    PathData::new()
        .move_to(center.into())
        .line_to(from)
        .arc_to(radius, span > 180.0, true, at_degrees(center, radius, end))
        .close()
        .finish()
}
