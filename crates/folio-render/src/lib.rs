#![forbid(unsafe_code)]

//! Chart geometry generators (headless).
//!
//! [`compute_chart_geometry`] maps a typed [`Chart`] to the shapes a rendering surface needs:
//! points, angles and SVG path data for the vector kinds, cell enumerations for the tabular
//! ones. Generation is pure and infallible; only SVG serialization can fail.

pub mod bars;
pub mod diagram;
pub mod industry;
pub mod model;
pub mod path;
pub mod pie;
pub mod radar;
pub mod scatter;
pub mod svg;
pub mod tables;

use crate::model::{BarOrientation, ChartGeometry};
use folio_core::{Chart, GeometryConfig};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no SVG form for {kind} geometry")]
    UnsupportedGeometry { kind: String },
    #[error("geometry JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn compute_chart_geometry(chart: &Chart, config: &GeometryConfig) -> ChartGeometry {
    let geometry = match chart {
        Chart::Radar(c) => ChartGeometry::Radar(radar::radar_geometry(c, config)),
        Chart::Pie(c) => ChartGeometry::Pie(pie::pie_geometry(c, config)),
        Chart::Scatter(c) => ChartGeometry::Scatter(scatter::scatter_geometry(c, config)),
        Chart::BarHorizontal(c) => {
            ChartGeometry::Bars(bars::bar_geometry(c, BarOrientation::Horizontal, config))
        }
        Chart::BarVertical(c) => {
            ChartGeometry::Bars(bars::bar_geometry(c, BarOrientation::Vertical, config))
        }
        Chart::Flywheel(c) => ChartGeometry::Flywheel(diagram::flywheel_geometry(c, config)),
        Chart::CoreLoop(c) => ChartGeometry::CoreLoop(diagram::core_loop_geometry(c)),
        Chart::IndustryEvolution(c) => {
            ChartGeometry::IndustryEvolution(industry::industry_evolution_geometry(c))
        }
        Chart::FinancialTable(c) => {
            ChartGeometry::FinancialTable(tables::financial_table_layout(c))
        }
        Chart::RiskMatrix(c) => ChartGeometry::Grid(tables::risk_matrix_layout(c)),
        Chart::QuadGrid(c) => ChartGeometry::Grid(tables::quad_grid_layout(c)),
        Chart::CardsExpandable(c) => ChartGeometry::Grid(tables::cards_layout(c)),
        Chart::Unsupported { tag } => ChartGeometry::Placeholder { tag: tag.clone() },
    };
    tracing::trace!(kind = geometry.name(), "chart geometry computed");
    geometry
}

/// Geometry as a JSON value (for dumps and snapshot tests).
pub fn geometry_to_json(geometry: &ChartGeometry) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(geometry)?)
}
