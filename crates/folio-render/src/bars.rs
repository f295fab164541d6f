use crate::model::{BarExtent, BarGeometry, BarOrientation};
use folio_core::GeometryConfig;
use folio_core::charts::BarChart;

/// Bar lengths as a share of the track. Horizontal bars are measured against the chart's own
/// ceiling (or the configured default); vertical bars read the value as a percentage.
pub fn bar_geometry(chart: &BarChart, orientation: BarOrientation, config: &GeometryConfig) -> BarGeometry {
    let default_ceiling = match orientation {
        BarOrientation::Horizontal => config.f64_or("bar.horizontalCeiling", 150.0),
        BarOrientation::Vertical => config.f64_or("bar.verticalCeiling", 100.0),
    };
    let ceiling = chart
        .ceiling
        .filter(|c| *c > 0.0)
        .unwrap_or(default_ceiling);

    let bars = chart
        .bars
        .iter()
        .map(|b| BarExtent {
            label: b.label.clone(),
            value: b.value,
            length_percent: length_percent(b.value, ceiling),
            color: b.color.clone(),
            group: b.group.clone(),
            details: b.details.clone(),
        })
        .collect();

    BarGeometry {
        orientation,
        ceiling,
        bars,
    }
}

fn length_percent(value: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 || !ceiling.is_finite() {
        return 0.0;
    }
    (value / ceiling * 100.0).clamp(0.0, 100.0)
}
