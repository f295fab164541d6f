//! Typed chart models.
//!
//! Authoring documents describe every chart with the same loose data-point record; the meaning
//! of `value`/`value2`/`value3`/`x`/`y` depends on the chart type. [`Chart::from_raw`] resolves
//! that meaning once, so each variant carries named fields and the generators never have to
//! guess. Missing numeric fields become zero.

use crate::raw::{RawChartConfig, RawDataPair, RawDataPoint, RawExpandedContent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ChartKind {
    Radar,
    Pie,
    Scatter,
    BarHorizontal,
    BarVertical,
    Diagram,
    IndustryEvolution,
    FinancialTable,
    RiskMatrix,
    QuadGrid,
    CardsExpandable,
    Unknown(String),
}

impl ChartKind {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "RADAR" => Self::Radar,
            "PIE" => Self::Pie,
            "SCATTER" => Self::Scatter,
            "BAR_HORIZONTAL" => Self::BarHorizontal,
            "BAR_VERTICAL" => Self::BarVertical,
            "DIAGRAM" => Self::Diagram,
            "INDUSTRY_EVOLUTION" => Self::IndustryEvolution,
            "FINANCIAL_TABLE" => Self::FinancialTable,
            "RISK_MATRIX" => Self::RiskMatrix,
            "QUAD_GRID" => Self::QuadGrid,
            "CARDS_EXPANDABLE" => Self::CardsExpandable,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Radar => "RADAR",
            Self::Pie => "PIE",
            Self::Scatter => "SCATTER",
            Self::BarHorizontal => "BAR_HORIZONTAL",
            Self::BarVertical => "BAR_VERTICAL",
            Self::Diagram => "DIAGRAM",
            Self::IndustryEvolution => "INDUSTRY_EVOLUTION",
            Self::FinancialTable => "FINANCIAL_TABLE",
            Self::RiskMatrix => "RISK_MATRIX",
            Self::QuadGrid => "QUAD_GRID",
            Self::CardsExpandable => "CARDS_EXPANDABLE",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ChartKind> for String {
    fn from(value: ChartKind) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPair {
    pub label: String,
    pub value: String,
}

impl From<RawDataPair> for DataPair {
    fn from(raw: RawDataPair) -> Self {
        Self {
            label: raw.label,
            value: raw.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedContent {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub data_points: Vec<DataPair>,
}

impl From<RawExpandedContent> for ExpandedContent {
    fn from(raw: RawExpandedContent) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            bullets: raw.bullets,
            data_points: raw.data_points.into_iter().map(DataPair::from).collect(),
        }
    }
}

/// One radar axis with the scores of the (up to) three compared series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub label: String,
    pub scores: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    pub series_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// A plot position in the normalized 0-100 domain (y grows upwards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub group: Option<String>,
    pub details: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub points: Vec<PlotPoint>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
    pub group: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    /// Per-chart reference maximum. `None` uses the configured default for the orientation.
    pub ceiling: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlywheelStage {
    pub label: String,
    pub group: Option<String>,
    pub details: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Wedges on the flywheel ring; stages past this count are not drawn or selectable.
pub const FLYWHEEL_SEGMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlywheelDiagram {
    pub stages: Vec<FlywheelStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopPhase {
    pub label: String,
    pub details: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreLoopDiagram {
    pub phases: Vec<LoopPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryEvolution {
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub highlight: Option<String>,
}

/// One metric across the bear / base / bull scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub label: String,
    pub bear: f64,
    pub base: f64,
    pub bull: f64,
    pub unit: Option<String>,
}

impl ScenarioRow {
    pub fn values(&self) -> [f64; 3] {
        [self.bear, self.base, self.bull]
    }
}

pub const DEFAULT_SCENARIO_NAMES: [&str; 3] = ["Bear", "Base", "Bull"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTable {
    pub scenario_names: [String; 3],
    pub rows: Vec<ScenarioRow>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub label: String,
    pub group: Option<String>,
    pub details: Option<String>,
    pub mitigation: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMatrix {
    pub risks: Vec<Risk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quadrant {
    pub label: String,
    pub subtitle: Option<String>,
    pub bullets: Vec<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadGrid {
    pub quadrants: Vec<Quadrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub label: String,
    pub group: Option<String>,
    pub details: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub expanded: Option<ExpandedContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandableCards {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Radar(RadarChart),
    Pie(PieChart),
    Scatter(ScatterChart),
    BarHorizontal(BarChart),
    BarVertical(BarChart),
    Flywheel(FlywheelDiagram),
    CoreLoop(CoreLoopDiagram),
    IndustryEvolution(IndustryEvolution),
    FinancialTable(FinancialTable),
    RiskMatrix(RiskMatrix),
    QuadGrid(QuadGrid),
    CardsExpandable(ExpandableCards),
    /// An unrecognized chart tag (or a DIAGRAM without a known sub-variant).
    Unsupported { tag: String },
}

impl Chart {
    pub fn from_raw(raw: RawChartConfig) -> Self {
        let kind = ChartKind::parse(&raw.chart_type);
        let RawChartConfig {
            data,
            labels,
            series_names,
            y_axis_label,
            x_axis_label,
            highlight,
            diagram_type,
            ceiling,
            ..
        } = raw;

        match kind {
            ChartKind::Radar => Chart::Radar(RadarChart {
                axes: data
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| RadarAxis {
                        label: axis_label(&p.label, labels.get(i)),
                        scores: [num(p.value), num(p.value2), num(p.value3)],
                    })
                    .collect(),
                series_names,
            }),
            ChartKind::Pie => Chart::Pie(PieChart {
                slices: data
                    .into_iter()
                    .map(|p| PieSlice {
                        value: num(p.value),
                        label: p.label,
                        color: p.color,
                    })
                    .collect(),
            }),
            ChartKind::Scatter => Chart::Scatter(ScatterChart {
                points: data
                    .into_iter()
                    .map(|p| PlotPoint {
                        x: num(p.x),
                        y: num(p.y),
                        label: p.label,
                        group: p.group,
                        details: p.details,
                        color: p.color,
                    })
                    .collect(),
                x_axis_label,
                y_axis_label,
            }),
            ChartKind::BarHorizontal => Chart::BarHorizontal(bar_chart(data, ceiling)),
            ChartKind::BarVertical => Chart::BarVertical(bar_chart(data, ceiling)),
            ChartKind::Diagram => diagram(diagram_type.as_deref(), data),
            ChartKind::IndustryEvolution => Chart::IndustryEvolution(IndustryEvolution {
                x_axis_label,
                y_axis_label,
                highlight,
            }),
            ChartKind::FinancialTable => {
                let mut names = DEFAULT_SCENARIO_NAMES.map(str::to_string);
                for (slot, name) in names.iter_mut().zip(series_names) {
                    *slot = name;
                }
                Chart::FinancialTable(FinancialTable {
                    scenario_names: names,
                    rows: data
                        .into_iter()
                        .map(|p| ScenarioRow {
                            bear: num(p.value),
                            base: num(p.value2),
                            bull: num(p.value3),
                            label: p.label,
                            unit: p.details,
                        })
                        .collect(),
                    highlight,
                })
            }
            ChartKind::RiskMatrix => Chart::RiskMatrix(RiskMatrix {
                risks: data
                    .into_iter()
                    .map(|p| Risk {
                        label: p.label,
                        group: p.group,
                        details: p.details,
                        mitigation: p.mitigation,
                        color: p.color,
                    })
                    .collect(),
            }),
            ChartKind::QuadGrid => Chart::QuadGrid(QuadGrid {
                quadrants: data
                    .into_iter()
                    .map(|p| Quadrant {
                        label: p.label,
                        subtitle: p.subtitle,
                        bullets: p.bullets,
                        color: p.color,
                    })
                    .collect(),
            }),
            ChartKind::CardsExpandable => Chart::CardsExpandable(ExpandableCards {
                cards: data
                    .into_iter()
                    .map(|p| Card {
                        label: p.label,
                        group: p.group,
                        details: p.details,
                        color: p.color,
                        icon: p.icon_name,
                        expanded: p.expanded_content.map(ExpandedContent::from),
                    })
                    .collect(),
            }),
            ChartKind::Unknown(tag) => {
                tracing::warn!(chart_type = %tag, "unrecognized chart type");
                Chart::Unsupported { tag }
            }
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Radar(_) => ChartKind::Radar,
            Chart::Pie(_) => ChartKind::Pie,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::BarHorizontal(_) => ChartKind::BarHorizontal,
            Chart::BarVertical(_) => ChartKind::BarVertical,
            Chart::Flywheel(_) | Chart::CoreLoop(_) => ChartKind::Diagram,
            Chart::IndustryEvolution(_) => ChartKind::IndustryEvolution,
            Chart::FinancialTable(_) => ChartKind::FinancialTable,
            Chart::RiskMatrix(_) => ChartKind::RiskMatrix,
            Chart::QuadGrid(_) => ChartKind::QuadGrid,
            Chart::CardsExpandable(_) => ChartKind::CardsExpandable,
            Chart::Unsupported { tag } => ChartKind::Unknown(tag.clone()),
        }
    }

    /// Number of selectable items (cards, wedges, rows, ...).
    pub fn item_count(&self) -> usize {
        match self {
            Chart::Radar(c) => c.axes.len(),
            Chart::Pie(c) => c.slices.len(),
            Chart::Scatter(c) => c.points.len(),
            Chart::BarHorizontal(c) | Chart::BarVertical(c) => c.bars.len(),
            Chart::Flywheel(c) => c.stages.len().min(FLYWHEEL_SEGMENTS),
            Chart::CoreLoop(c) => c.phases.len(),
            Chart::IndustryEvolution(_) | Chart::Unsupported { .. } => 0,
            Chart::FinancialTable(c) => c.rows.len(),
            Chart::RiskMatrix(c) => c.risks.len(),
            Chart::QuadGrid(c) => c.quadrants.len(),
            Chart::CardsExpandable(c) => c.cards.len(),
        }
    }
}

impl From<RawChartConfig> for Chart {
    fn from(raw: RawChartConfig) -> Self {
        Self::from_raw(raw)
    }
}

fn num(v: Option<f64>) -> f64 {
    v.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn axis_label(label: &str, fallback: Option<&String>) -> String {
    match fallback {
        Some(l) if label.is_empty() => l.clone(),
        _ => label.to_string(),
    }
}

fn bar_chart(data: Vec<RawDataPoint>, ceiling: Option<f64>) -> BarChart {
    BarChart {
        bars: data
            .into_iter()
            .map(|p| Bar {
                value: num(p.value),
                label: p.label,
                color: p.color,
                group: p.group,
                details: p.details,
            })
            .collect(),
        ceiling: ceiling.filter(|c| c.is_finite() && *c > 0.0),
    }
}

fn diagram(diagram_type: Option<&str>, data: Vec<RawDataPoint>) -> Chart {
    match diagram_type.map(|t| t.trim().to_ascii_uppercase()).as_deref() {
        Some("FLYWHEEL") => Chart::Flywheel(FlywheelDiagram {
            stages: data
                .into_iter()
                .map(|p| FlywheelStage {
                    label: p.label,
                    group: p.group,
                    details: p.details,
                    color: p.color,
                    icon: p.icon_name,
                })
                .collect(),
        }),
        Some("CORE_LOOP") => Chart::CoreLoop(CoreLoopDiagram {
            phases: data
                .into_iter()
                .map(|p| LoopPhase {
                    label: p.label,
                    details: p.details,
                    icon: p.icon_name,
                })
                .collect(),
        }),
        other => {
            let tag = format!("DIAGRAM/{}", other.unwrap_or("none"));
            tracing::warn!(diagram_type = %tag, "unrecognized diagram variant");
            Chart::Unsupported { tag }
        }
    }
}
