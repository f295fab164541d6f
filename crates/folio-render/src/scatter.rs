use crate::model::{Bounds, CubicSegment, LayoutPoint, PlottedPoint, ScatterCurve, ScatterGeometry};
use crate::path::PathData;
use folio_core::GeometryConfig;
use folio_core::charts::ScatterChart;

/// Smooth curve through three points as two cubic segments.
///
/// The middle tangent is `(p3 - p1) * tension`; the outer control points pull towards the
/// neighbouring point. The first control point keeps `p1.y` so the curve leaves `p1`
/// horizontally.
pub fn smooth_curve(p1: LayoutPoint, p2: LayoutPoint, p3: LayoutPoint, tension: f64) -> [CubicSegment; 2] {
    let tx = (p3.x - p1.x) * tension;
    let ty = (p3.y - p1.y) * tension;
    let cp1 = LayoutPoint::new(p1.x + (p2.x - p1.x) * tension, p1.y);
    let cp2_left = LayoutPoint::new(p2.x - tx, p2.y - ty);
    let cp2_right = LayoutPoint::new(p2.x + tx, p2.y + ty);
    let cp3_left = LayoutPoint::new(
        p3.x - (p3.x - p2.x) * tension,
        p3.y - (p3.y - p2.y) * tension,
    );
    [
        CubicSegment {
            from: p1,
            ctrl1: cp1,
            ctrl2: cp2_left,
            to: p2,
        },
        CubicSegment {
            from: p2,
            ctrl1: cp2_right,
            ctrl2: cp3_left,
            to: p3,
        },
    ]
}

pub fn scatter_geometry(chart: &ScatterChart, config: &GeometryConfig) -> ScatterGeometry {
    let size = config.f64_or("scatter.plotSize", 100.0);
    let tension = config.f64_or("scatter.tension", 0.3);

    let points: Vec<PlottedPoint> = chart
        .points
        .iter()
        .map(|p| PlottedPoint {
            label: p.label.clone(),
            group: p.group.clone(),
            color: p.color.clone(),
            at: LayoutPoint::new(p.x, size - p.y),
        })
        .collect();

    let curve = match points.as_slice() {
        [a, b, c] => {
            let segments = smooth_curve(a.at, b.at, c.at, tension);
            let [first, second] = segments;
            let path = PathData::new()
                .move_to(first.from)
                .cubic_to(first.ctrl1, first.ctrl2, first.to)
                .cubic_to(second.ctrl1, second.ctrl2, second.to)
                .finish();
            Some(ScatterCurve { segments, path })
        }
        [] => None,
        other => {
            tracing::warn!(points = other.len(), "scatter curve needs exactly three points");
            None
        }
    };

    ScatterGeometry {
        bounds: Bounds::sized(size, size),
        points,
        curve,
        x_axis_label: chart.x_axis_label.clone(),
        y_axis_label: chart.y_axis_label.clone(),
    }
}
