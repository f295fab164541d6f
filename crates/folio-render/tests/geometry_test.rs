use folio_core::charts::{
    Bar, BarChart, FlywheelDiagram, FlywheelStage, PieChart, PieSlice, PlotPoint, RadarAxis,
    RadarChart, ScatterChart,
};
use folio_core::raw::RawChartConfig;
use folio_core::{Chart, Deck, GeometryConfig};
use folio_render::model::{BarOrientation, ChartGeometry, LayoutPoint};
use folio_render::radar::axis_angle;
use folio_render::{bars, compute_chart_geometry, diagram, pie, radar, scatter};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn radar_chart(n: usize) -> RadarChart {
    RadarChart {
        axes: (0..n)
            .map(|i| RadarAxis {
                label: format!("axis {i}"),
                scores: [6.0, 3.0, 0.0],
            })
            .collect(),
        series_names: vec!["Us".to_string(), "Them".to_string()],
    }
}

fn pie_chart(values: &[f64]) -> PieChart {
    PieChart {
        slices: values
            .iter()
            .enumerate()
            .map(|(i, &value)| PieSlice {
                label: format!("slice {i}"),
                value,
                color: None,
            })
            .collect(),
    }
}

fn stage(label: &str) -> FlywheelStage {
    FlywheelStage {
        label: label.to_string(),
        group: None,
        details: None,
        color: Some("#00b2d6".to_string()),
        icon: None,
    }
}

#[test]
fn radar_axes_wrap_around_a_full_turn() {
    assert!(close(axis_angle(0, 6), axis_angle(6, 6) - TAU));
    assert!(close(axis_angle(0, 6), -FRAC_PI_2));
    assert!(close(axis_angle(3, 6), FRAC_PI_2));
}

#[test]
fn radar_first_axis_points_up_and_max_score_reaches_the_radius() {
    let g = radar::radar_geometry(&radar_chart(6), &GeometryConfig::default());
    assert_eq!(g.series.len(), 3);
    let top = g.series[0].vertices[0];
    assert!(close(top.x, 250.0));
    assert!(close(top.y, 250.0 - 180.0));

    let half = g.series[1].vertices[0];
    assert!(close(half.y, 250.0 - 90.0));

    // Zero scores collapse onto the center.
    assert!(g.series[2].vertices.iter().all(|v| close(v.x, 250.0) && close(v.y, 250.0)));
    assert_eq!(g.series[2].name, None);
    assert_eq!(g.labels.len(), 6);
}

#[test]
fn radar_with_a_single_axis_has_no_nan() {
    let g = radar::radar_geometry(&radar_chart(1), &GeometryConfig::default());
    assert_eq!(g.axis_angles.len(), 1);
    for series in &g.series {
        assert!(series.vertices.iter().all(LayoutPoint::is_finite));
        assert!(!series.path.contains("NaN"));
    }
}

#[test]
fn radar_without_axes_is_empty() {
    let g = radar::radar_geometry(&radar_chart(0), &GeometryConfig::default());
    assert!(g.series.is_empty());
    assert!(g.spokes.is_empty());
    assert!(g.labels.is_empty());
}

#[test]
fn pie_spans_cover_the_circle() {
    let g = pie::pie_geometry(&pie_chart(&[35.0, 40.0, 15.0, 10.0]), &GeometryConfig::default());
    let total: f64 = g.slices.iter().map(|s| s.span_degrees).sum();
    assert!(close(total, 360.0));
    assert!(close(g.slices[0].start_degrees, 0.0));
    assert!(close(g.slices[1].start_degrees, 126.0));
    assert_eq!(g.slices[0].percent_label, "35%");

    // No slice spans more than half the circle.
    assert!(g.slices.iter().all(|s| s.path.contains("A160,160 0 0 1 ")));

    let g = pie::pie_geometry(&pie_chart(&[3.0, 1.0]), &GeometryConfig::default());
    assert!(g.slices[0].path.contains("A160,160 0 1 1 "));
}

#[test]
fn pie_label_anchor_follows_the_side_of_the_circle() {
    use folio_render::model::TextAnchor;
    let g = pie::pie_geometry(&pie_chart(&[50.0, 50.0]), &GeometryConfig::default());
    // Midpoints at 90 and 270 degrees sit on the boundary and anchor at the start.
    assert_eq!(g.slices[0].label_anchor.text_anchor, TextAnchor::Start);

    let g = pie::pie_geometry(&pie_chart(&[10.0, 80.0, 10.0]), &GeometryConfig::default());
    assert_eq!(g.slices[1].label_anchor.text_anchor, TextAnchor::End);
}

#[test]
fn pie_with_zero_total_draws_nothing() {
    let g = pie::pie_geometry(&pie_chart(&[0.0, 0.0]), &GeometryConfig::default());
    assert_eq!(g.total, 0.0);
    for slice in &g.slices {
        assert_eq!(slice.span_degrees, 0.0);
        assert!(slice.path.is_empty());
        assert_eq!(slice.percent_label, "0%");
        assert!(slice.label_anchor.at.is_finite());
    }
}

#[test]
fn pie_single_slice_is_a_full_circle() {
    let g = pie::pie_geometry(&pie_chart(&[42.0]), &GeometryConfig::default());
    assert_eq!(g.slices[0].span_degrees, 360.0);
    assert_eq!(g.slices[0].path.matches('A').count(), 2);
}

#[test]
fn scatter_curve_passes_through_the_points() {
    let chart = ScatterChart {
        points: [(10.0, 70.0), (50.0, 55.0), (90.0, 85.0)]
            .into_iter()
            .map(|(x, y)| PlotPoint {
                label: String::new(),
                x,
                y,
                group: None,
                details: None,
                color: None,
            })
            .collect(),
        x_axis_label: None,
        y_axis_label: None,
    };
    let g = scatter::scatter_geometry(&chart, &GeometryConfig::default());
    assert_eq!(g.points[0].at, LayoutPoint::new(10.0, 30.0));

    let curve = g.curve.expect("three points produce a curve");
    let [first, second] = curve.segments;
    assert_eq!(first.from, g.points[0].at);
    assert_eq!(first.to, g.points[1].at);
    assert_eq!(second.from, g.points[1].at);
    assert_eq!(second.to, g.points[2].at);
    assert_eq!(first.ctrl1.y, first.from.y);
    assert!(curve.path.starts_with("M10,30 C"));
}

#[test]
fn scatter_without_three_points_has_no_curve() {
    let chart = ScatterChart {
        points: Vec::new(),
        x_axis_label: None,
        y_axis_label: None,
    };
    let g = scatter::scatter_geometry(&chart, &GeometryConfig::default());
    assert!(g.curve.is_none());
    assert!(g.points.is_empty());
}

#[test]
fn flywheel_wedges_leave_gaps_and_share_a_hub() {
    let chart = FlywheelDiagram {
        stages: vec![stage("Explore"), stage("Build"), stage("Share")],
    };
    let g = diagram::flywheel_geometry(&chart, &GeometryConfig::default());
    assert_eq!(g.wedges.len(), 3);

    let w0 = &g.wedges[0];
    assert!(close(w0.start_degrees, -86.0));
    assert!(close(w0.end_degrees, 26.0));
    assert!(close(g.wedges[1].start_degrees - w0.end_degrees, 8.0));
    assert!(w0.path.starts_with('M') && w0.path.ends_with('Z'));

    let radii: Vec<f64> = g.hub.iter().map(|c| c.r).collect();
    assert_eq!(radii, vec![180.0, 175.0]);
}

#[test]
fn flywheel_drops_stages_past_the_segment_count() {
    let chart = FlywheelDiagram {
        stages: vec![stage("a"), stage("b"), stage("c"), stage("d")],
    };
    let g = diagram::flywheel_geometry(&chart, &GeometryConfig::default());
    assert_eq!(g.wedges.len(), 3);

    let empty = diagram::flywheel_geometry(&FlywheelDiagram { stages: Vec::new() }, &GeometryConfig::default());
    assert!(empty.wedges.is_empty());
    assert!(empty.hub.is_empty());
}

#[test]
fn flywheel_segment_count_is_fixed() {
    let chart = FlywheelDiagram {
        stages: vec![stage("a"), stage("b"), stage("c")],
    };
    let config = GeometryConfig::with_overrides(&serde_json::json!({
        "flywheel": { "segments": 1 }
    }));
    let g = diagram::flywheel_geometry(&chart, &config);
    assert_eq!(g.wedges.len(), 3);
    assert!(close(g.wedges[0].end_degrees - g.wedges[0].start_degrees, 112.0));
    assert!(g.wedges[0].path.contains("A260,260 0 0 1 "));
    assert!(g.wedges[0].path.contains("A200,200 0 0 0 "));
}

#[test]
fn flywheel_arcs_past_half_a_turn_use_the_large_arc() {
    let chart = FlywheelDiagram {
        stages: vec![stage("a")],
    };
    // Overlapping wedges: each spans 120 + 70 = 190 degrees.
    let config = GeometryConfig::with_overrides(&serde_json::json!({
        "flywheel": { "gapDegrees": -70 }
    }));
    let g = diagram::flywheel_geometry(&chart, &config);
    let w = &g.wedges[0];
    assert!(close(w.end_degrees - w.start_degrees, 190.0));
    assert!(w.path.contains("A260,260 0 1 1 "));
    assert!(w.path.contains("A200,200 0 1 0 "));
}

#[test]
fn empty_data_yields_empty_geometry_for_every_kind() {
    let config = GeometryConfig::default();
    let raw = |chart_type: &str, diagram_type: Option<&str>| RawChartConfig {
        chart_type: chart_type.to_string(),
        diagram_type: diagram_type.map(str::to_string),
        ..RawChartConfig::default()
    };
    let cases = [
        raw("RADAR", None),
        raw("PIE", None),
        raw("SCATTER", None),
        raw("BAR_HORIZONTAL", None),
        raw("BAR_VERTICAL", None),
        raw("DIAGRAM", Some("FLYWHEEL")),
        raw("DIAGRAM", Some("CORE_LOOP")),
        raw("FINANCIAL_TABLE", None),
        raw("RISK_MATRIX", None),
        raw("QUAD_GRID", None),
        raw("CARDS_EXPANDABLE", None),
    ];

    for case in cases {
        let tag = case.chart_type.clone();
        let geometry = compute_chart_geometry(&Chart::from_raw(case), &config);
        let empty = match &geometry {
            ChartGeometry::Radar(g) => g.series.is_empty() && g.spokes.is_empty(),
            ChartGeometry::Pie(g) => g.slices.is_empty(),
            ChartGeometry::Scatter(g) => g.points.is_empty() && g.curve.is_none(),
            ChartGeometry::Bars(g) => g.bars.is_empty(),
            ChartGeometry::Flywheel(g) => g.wedges.is_empty() && g.hub.is_empty(),
            ChartGeometry::CoreLoop(g) => g.slots.is_empty(),
            ChartGeometry::FinancialTable(g) => g.rows.is_empty(),
            ChartGeometry::Grid(g) => g.cells.is_empty(),
            ChartGeometry::IndustryEvolution(_) | ChartGeometry::Placeholder { .. } => false,
        };
        assert!(empty, "{tag} with no data produced {geometry:?}");
        folio_render::geometry_to_json(&geometry).expect("geometry json");
    }
}

#[test]
fn horizontal_bars_use_the_chart_ceiling() {
    let bar = |value| Bar {
        label: String::new(),
        value,
        color: None,
        group: None,
        details: None,
    };
    let chart = BarChart {
        bars: vec![bar(75.0), bar(300.0), bar(-5.0)],
        ceiling: Some(150.0),
    };
    let g = bars::bar_geometry(&chart, BarOrientation::Horizontal, &GeometryConfig::default());
    let lengths: Vec<f64> = g.bars.iter().map(|b| b.length_percent).collect();
    assert_eq!(lengths, vec![50.0, 100.0, 0.0]);

    let vertical = BarChart {
        bars: vec![bar(7.0)],
        ceiling: None,
    };
    let g = bars::bar_geometry(&vertical, BarOrientation::Vertical, &GeometryConfig::default());
    assert_eq!(g.ceiling, 100.0);
    assert!(close(g.bars[0].length_percent, 7.0));
}

#[test]
fn config_overrides_change_the_geometry() {
    let config = GeometryConfig::with_overrides(&serde_json::json!({
        "radar": { "radius": 90 }
    }));
    let g = radar::radar_geometry(&radar_chart(4), &config);
    assert_eq!(g.radius, 90.0);
    assert!(close(g.series[0].vertices[0].y, 250.0 - 90.0));
}

#[test]
fn every_fixture_page_computes_geometry() {
    let deck = Deck::from_path(workspace_root().join("fixtures").join("decks").join("report.json"))
        .expect("fixture deck");
    let config = GeometryConfig::default();

    let mut kinds = Vec::new();
    for page in deck.pages() {
        let Some(chart) = page.chart() else {
            continue;
        };
        let geometry = compute_chart_geometry(chart, &config);
        assert!(
            !matches!(geometry, ChartGeometry::Placeholder { .. }),
            "page {} fell back to a placeholder",
            page.id
        );
        let json = folio_render::geometry_to_json(&geometry).expect("geometry json");
        assert_eq!(json["kind"], geometry.name());
        kinds.push(geometry.name());
    }

    for expected in [
        "radar",
        "pie",
        "scatter",
        "bars",
        "flywheel",
        "core_loop",
        "industry_evolution",
        "financial_table",
        "grid",
    ] {
        assert!(kinds.contains(&expected), "fixture has no {expected} chart");
    }
}

#[test]
fn unknown_chart_tags_become_placeholders() {
    let chart = Chart::Unsupported {
        tag: "GANTT".to_string(),
    };
    let geometry = compute_chart_geometry(&chart, &GeometryConfig::default());
    assert_eq!(
        geometry,
        ChartGeometry::Placeholder {
            tag: "GANTT".to_string()
        }
    );
    assert!(!geometry.is_vector());
}
