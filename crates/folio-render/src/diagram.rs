//! Schematic diagrams: the flywheel ring and the core-loop phase strip.

use crate::model::{Bounds, Circle, CoreLoopGeometry, FlywheelGeometry, FlywheelWedge, LayoutPoint, LoopSlot};
use crate::path::PathData;
use folio_core::GeometryConfig;
use folio_core::charts::{CoreLoopDiagram, FLYWHEEL_SEGMENTS, FlywheelDiagram};
use folio_core::geom::{Angle, Point, point, polar};

fn at_degrees(center: Point, r: f64, degrees: f64) -> LayoutPoint {
    polar(center, r, Angle::degrees(degrees)).into()
}

/// Ring wedges, one per stage, each ending in an arrow tip at mid radius.
///
/// Wedge `i` covers `[i * seg - 90 + gap/2, i * seg - 90 + seg - gap/2]` degrees, where
/// `seg = 360 / FLYWHEEL_SEGMENTS`. Stages past the segment count are not drawn.
pub fn flywheel_geometry(chart: &FlywheelDiagram, config: &GeometryConfig) -> FlywheelGeometry {
    let c = config.f64_or("flywheel.center", 350.0);
    let outer = config.f64_or("flywheel.outerRadius", 260.0);
    let inner = config.f64_or("flywheel.innerRadius", 200.0);
    let gap = config.f64_or("flywheel.gapDegrees", 8.0);
    let tip = config.f64_or("flywheel.tipDegrees", 5.0);
    let segments = FLYWHEEL_SEGMENTS;

    let center = point(c, c);
    let mid = (inner + outer) / 2.0;
    let segment = 360.0 / segments as f64;
    let large_arc = segment - gap > 180.0;

    if chart.stages.len() > segments {
        tracing::warn!(
            stages = chart.stages.len(),
            segments,
            "flywheel has more stages than segments"
        );
    }

    let wedges: Vec<FlywheelWedge> = chart
        .stages
        .iter()
        .take(segments)
        .enumerate()
        .map(|(i, stage)| {
            let base = i as f64 * segment - 90.0;
            let start = base + gap / 2.0;
            let end = base + (segment - gap) + gap / 2.0;

            let outer_start = at_degrees(center, outer, start);
            let outer_end = at_degrees(center, outer, end);
            let tip_at = at_degrees(center, mid, end + tip);
            let inner_end = at_degrees(center, inner, end);
            let inner_start = at_degrees(center, inner, start);
            let path = PathData::new()
                .move_to(outer_start)
                .arc_to(outer, large_arc, true, outer_end)
                .line_to(tip_at)
                .line_to(inner_end)
                .arc_to(inner, large_arc, false, inner_start)
                .close()
                .finish();

            FlywheelWedge {
                index: i,
                label: stage.label.clone(),
                color: stage.color.clone(),
                start_degrees: start,
                end_degrees: end,
                outer_start,
                outer_end,
                tip: tip_at,
                inner_end,
                inner_start,
                path,
                label_anchor: at_degrees(center, mid, base + segment / 2.0),
            }
        })
        .collect();

    let hub = if wedges.is_empty() {
        Vec::new()
    } else {
        vec![
            Circle {
                center: center.into(),
                r: inner - 20.0,
            },
            Circle {
                center: center.into(),
                r: inner - 25.0,
            },
        ]
    };

    FlywheelGeometry {
        bounds: Bounds::sized(2.0 * c, 2.0 * c),
        center: center.into(),
        outer_radius: outer,
        inner_radius: inner,
        wedges,
        hub,
    }
}

/// Equal-width slots laid out left to right.
pub fn core_loop_geometry(chart: &CoreLoopDiagram) -> CoreLoopGeometry {
    let n = chart.phases.len();
    let width = if n == 0 { 0.0 } else { 1.0 / n as f64 };
    let slots = chart
        .phases
        .iter()
        .enumerate()
        .map(|(i, phase)| LoopSlot {
            number: i + 1,
            phase_label: format!("PHASE {:02}", i + 1),
            label: phase.label.clone(),
            details: phase.details.clone(),
            center_fraction: (i as f64 + 0.5) * width,
            width_fraction: width,
        })
        .collect();
    CoreLoopGeometry { slots }
}
