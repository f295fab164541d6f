use crate::model::{
    Bounds, LabelAnchor, LayoutPoint, LineSegment, RadarGeometry, RadarGridRing,
    RadarSeriesGeometry, TextAnchor,
};
use crate::path::closed_polygon;
use folio_core::GeometryConfig;
use folio_core::charts::RadarChart;
use folio_core::geom::{Angle, point, polar};
use std::f64::consts::{FRAC_PI_2, TAU};

const DEFAULT_GRID_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
const SERIES_COUNT: usize = 3;

/// Angle of axis `index` out of `count`, in radians. Axis 0 points up and angles grow clockwise.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

pub fn radar_geometry(chart: &RadarChart, config: &GeometryConfig) -> RadarGeometry {
    let c = config.f64_or("radar.center", 250.0);
    let radius = config.f64_or("radar.radius", 180.0);
    let max_scale = match config.f64_or("radar.maxScale", 6.0) {
        m if m > 0.0 => m,
        _ => 6.0,
    };
    let label_value = config.f64_or("radar.labelValue", 7.0);
    let levels = config
        .f64_list("radar.gridLevels")
        .unwrap_or_else(|| DEFAULT_GRID_LEVELS.to_vec());

    let center = point(c, c);
    let n = chart.axes.len();
    let axis_angles: Vec<f64> = (0..n).map(|i| axis_angle(i, n)).collect();
    let project = |value: f64, angle: f64| -> LayoutPoint {
        polar(center, radius * value / max_scale, Angle::radians(angle)).into()
    };

    let bounds = Bounds::sized(2.0 * c, 2.0 * c);
    if n == 0 {
        return RadarGeometry {
            bounds,
            center: center.into(),
            radius,
            max_scale,
            axis_angles,
            grid: Vec::new(),
            spokes: Vec::new(),
            series: Vec::new(),
            labels: Vec::new(),
        };
    }

    let grid = levels
        .iter()
        .map(|&level| RadarGridRing {
            level,
            radius: radius * level,
        })
        .collect();

    let spokes = axis_angles
        .iter()
        .map(|&a| LineSegment {
            from: center.into(),
            to: project(max_scale, a),
        })
        .collect();

    let series = (0..SERIES_COUNT)
        .map(|s| {
            let vertices: Vec<LayoutPoint> = chart
                .axes
                .iter()
                .zip(&axis_angles)
                .map(|(axis, &a)| project(axis.scores[s], a))
                .collect();
            RadarSeriesGeometry {
                index: s,
                name: chart.series_names.get(s).cloned(),
                path: closed_polygon(&vertices),
                vertices,
            }
        })
        .collect();

    let labels = chart
        .axes
        .iter()
        .zip(&axis_angles)
        .map(|(axis, &a)| LabelAnchor {
            text: axis.label.clone(),
            at: project(label_value, a),
            text_anchor: TextAnchor::Middle,
        })
        .collect();

    tracing::trace!(axes = n, "radar geometry");
    RadarGeometry {
        bounds,
        center: center.into(),
        radius,
        max_scale,
        axis_angles,
        grid,
        spokes,
        series,
        labels,
    }
}
