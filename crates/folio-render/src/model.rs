use folio_core::ChartKind;
use folio_core::geom::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// A `[0, width] x [0, height]` box.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for LayoutPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub text: String,
    pub at: LayoutPoint,
    pub text_anchor: TextAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: LayoutPoint,
    pub to: LayoutPoint,
}

/// One cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: LayoutPoint,
    pub ctrl1: LayoutPoint,
    pub ctrl2: LayoutPoint,
    pub to: LayoutPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: LayoutPoint,
    pub r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGridRing {
    pub level: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeriesGeometry {
    pub index: usize,
    pub name: Option<String>,
    /// One vertex per axis, in axis order.
    pub vertices: Vec<LayoutPoint>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub bounds: Bounds,
    pub center: LayoutPoint,
    pub radius: f64,
    pub max_scale: f64,
    /// Axis angles in radians; axis 0 points up.
    pub axis_angles: Vec<f64>,
    pub grid: Vec<RadarGridRing>,
    pub spokes: Vec<LineSegment>,
    pub series: Vec<RadarSeriesGeometry>,
    pub labels: Vec<LabelAnchor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSliceGeometry {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_degrees: f64,
    pub span_degrees: f64,
    pub path: String,
    pub color: Option<String>,
    /// Rounded percentage, e.g. `"35%"`.
    pub percent_label: String,
    pub label_anchor: LabelAnchor,
    pub leader: LineSegment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub bounds: Bounds,
    pub center: LayoutPoint,
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<PieSliceGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub label: String,
    pub group: Option<String>,
    pub color: Option<String>,
    /// Plot position after y inversion.
    pub at: LayoutPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterCurve {
    pub segments: [CubicSegment; 2],
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterGeometry {
    pub bounds: Bounds,
    pub points: Vec<PlottedPoint>,
    /// Present only when exactly three points are given.
    pub curve: Option<ScatterCurve>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarExtent {
    pub label: String,
    pub value: f64,
    /// Bar length as a percentage of the available track, clamped to `[0, 100]`.
    pub length_percent: f64,
    pub color: Option<String>,
    pub group: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub orientation: BarOrientation,
    pub ceiling: f64,
    pub bars: Vec<BarExtent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlywheelWedge {
    pub index: usize,
    pub label: String,
    pub color: Option<String>,
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub outer_start: LayoutPoint,
    pub outer_end: LayoutPoint,
    pub tip: LayoutPoint,
    pub inner_end: LayoutPoint,
    pub inner_start: LayoutPoint,
    pub path: String,
    pub label_anchor: LayoutPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlywheelGeometry {
    pub bounds: Bounds,
    pub center: LayoutPoint,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub wedges: Vec<FlywheelWedge>,
    /// Hub rings at `inner - 20` and `inner - 25`; empty when there are no wedges.
    pub hub: Vec<Circle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopSlot {
    pub number: usize,
    /// e.g. `"PHASE 01"`.
    pub phase_label: String,
    pub label: String,
    pub details: Option<String>,
    /// Horizontal slot center as a fraction of the available width.
    pub center_fraction: f64,
    pub width_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreLoopGeometry {
    pub slots: Vec<LoopSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryEvolutionGeometry {
    pub bounds: Bounds,
    pub decay: CubicSegment,
    pub growth: CubicSegment,
    pub decay_path: String,
    pub growth_path: String,
    pub intersection: Circle,
    pub region_path: String,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCells {
    pub label: String,
    pub values: [f64; 3],
    /// Display strings, one decimal below 10 and none otherwise, unit appended.
    pub cells: [String; 3],
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTableLayout {
    pub scenario_names: [String; 3],
    pub highlighted_column: usize,
    pub rows: Vec<ScenarioCells>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedBullet {
    pub number: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub label: String,
    /// Short tag shown above the label (`"01 // Group"` for cards).
    pub badge: Option<String>,
    pub body: Option<String>,
    pub footnote: Option<String>,
    pub bullets: Vec<NumberedBullet>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub chart: ChartKind,
    pub columns: usize,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartGeometry {
    Radar(RadarGeometry),
    Pie(PieGeometry),
    Scatter(ScatterGeometry),
    Bars(BarGeometry),
    Flywheel(FlywheelGeometry),
    CoreLoop(CoreLoopGeometry),
    IndustryEvolution(IndustryEvolutionGeometry),
    FinancialTable(FinancialTableLayout),
    Grid(GridLayout),
    /// "No chart data" stand-in for an unrecognized chart tag.
    Placeholder { tag: String },
}

impl ChartGeometry {
    pub fn name(&self) -> &'static str {
        match self {
            ChartGeometry::Radar(_) => "radar",
            ChartGeometry::Pie(_) => "pie",
            ChartGeometry::Scatter(_) => "scatter",
            ChartGeometry::Bars(_) => "bars",
            ChartGeometry::Flywheel(_) => "flywheel",
            ChartGeometry::CoreLoop(_) => "core_loop",
            ChartGeometry::IndustryEvolution(_) => "industry_evolution",
            ChartGeometry::FinancialTable(_) => "financial_table",
            ChartGeometry::Grid(_) => "grid",
            ChartGeometry::Placeholder { .. } => "placeholder",
        }
    }

    /// Whether this geometry has a vector form that can be written as SVG.
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            ChartGeometry::Radar(_)
                | ChartGeometry::Pie(_)
                | ChartGeometry::Scatter(_)
                | ChartGeometry::Bars(_)
                | ChartGeometry::Flywheel(_)
                | ChartGeometry::IndustryEvolution(_)
        )
    }
}
