//! Non-geometric chart kinds: tables and grids of items.

use crate::model::{FinancialTableLayout, GridCell, GridLayout, NumberedBullet, ScenarioCells};
use folio_core::ChartKind;
use folio_core::charts::{ExpandableCards, FinancialTable, QuadGrid, RadarChart, RiskMatrix};
use serde::{Deserialize, Serialize};

/// The base scenario is the emphasized column.
pub const BASE_SCENARIO_COLUMN: usize = 1;

const RISK_COLUMNS: usize = 4;
const QUAD_COLUMNS: usize = 2;

/// Rounds half away from zero before formatting, so `2.25` becomes `"2.3"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}

/// One decimal below 10, none otherwise.
pub fn scenario_value(value: f64) -> String {
    fixed(value, if value < 10.0 { 1 } else { 0 })
}

pub fn financial_table_layout(table: &FinancialTable) -> FinancialTableLayout {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let values = row.values();
            let cells = values.map(|v| match row.unit.as_deref() {
                Some(unit) if !unit.is_empty() => format!("{} {unit}", scenario_value(v)),
                _ => scenario_value(v),
            });
            ScenarioCells {
                label: row.label.clone(),
                values,
                cells,
                unit: row.unit.clone(),
            }
        })
        .collect();
    FinancialTableLayout {
        scenario_names: table.scenario_names.clone(),
        highlighted_column: BASE_SCENARIO_COLUMN,
        rows,
        highlight: table.highlight.clone(),
    }
}

fn numbered(bullets: &[String]) -> Vec<NumberedBullet> {
    bullets
        .iter()
        .enumerate()
        .map(|(i, text)| NumberedBullet {
            number: format!("{:02}", i + 1),
            text: text.clone(),
        })
        .collect()
}

fn grid(chart: ChartKind, columns: usize, cells: Vec<GridCell>) -> GridLayout {
    GridLayout {
        chart,
        columns,
        cells,
    }
}

fn place(index: usize, columns: usize) -> (usize, usize) {
    (index / columns.max(1), index % columns.max(1))
}

pub fn risk_matrix_layout(matrix: &RiskMatrix) -> GridLayout {
    let cells = matrix
        .risks
        .iter()
        .enumerate()
        .map(|(i, risk)| {
            let (row, column) = place(i, RISK_COLUMNS);
            GridCell {
                index: i,
                row,
                column,
                label: risk.label.clone(),
                badge: risk.group.clone(),
                body: risk.details.clone(),
                footnote: risk.mitigation.clone(),
                bullets: Vec::new(),
                color: risk.color.clone(),
            }
        })
        .collect();
    grid(ChartKind::RiskMatrix, RISK_COLUMNS, cells)
}

pub fn quad_grid_layout(quad: &QuadGrid) -> GridLayout {
    let cells = quad
        .quadrants
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let (row, column) = place(i, QUAD_COLUMNS);
            GridCell {
                index: i,
                row,
                column,
                label: q.label.clone(),
                badge: None,
                body: q.subtitle.clone(),
                footnote: None,
                bullets: numbered(&q.bullets),
                color: q.color.clone(),
            }
        })
        .collect();
    grid(ChartKind::QuadGrid, QUAD_COLUMNS, cells)
}

/// Cards sit in a single row.
pub fn cards_layout(cards: &ExpandableCards) -> GridLayout {
    let columns = cards.cards.len();
    let cells = cards
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let badge = match card.group.as_deref() {
                Some(group) => format!("{:02} // {group}", i + 1),
                None => format!("{:02}", i + 1),
            };
            let bullets = card
                .expanded
                .as_ref()
                .map(|e| numbered(&e.bullets))
                .unwrap_or_default();
            GridCell {
                index: i,
                row: 0,
                column: i,
                label: card.label.clone(),
                badge: Some(badge),
                body: card.details.clone(),
                footnote: card.expanded.as_ref().map(|e| e.description.clone()),
                bullets,
                color: card.color.clone(),
            }
        })
        .collect();
    grid(ChartKind::CardsExpandable, columns, cells)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub label: String,
    pub cells: [String; 3],
}

/// Per-axis radar scores, two decimals, for the detail-table disclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub series_names: Vec<String>,
    pub rows: Vec<ScoreRow>,
}

pub fn radar_score_table(radar: &RadarChart) -> ScoreTable {
    ScoreTable {
        series_names: radar.series_names.clone(),
        rows: radar
            .axes
            .iter()
            .map(|axis| ScoreRow {
                label: axis.label.clone(),
                cells: axis.scores.map(|s| fixed(s, 2)),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_values_switch_precision_at_ten() {
        assert_eq!(scenario_value(4.5), "4.5");
        assert_eq!(scenario_value(9.96), "10.0");
        assert_eq!(scenario_value(10.0), "10");
        assert_eq!(scenario_value(55.0), "55");
        assert_eq!(scenario_value(2.25), "2.3");
    }

    #[test]
    fn radar_scores_use_two_decimals() {
        let radar = RadarChart {
            axes: vec![folio_core::charts::RadarAxis {
                label: "World".to_string(),
                scores: [5.6, 4.75, 0.0],
            }],
            series_names: vec!["Us".to_string()],
        };
        let table = radar_score_table(&radar);
        assert_eq!(table.series_names, vec!["Us".to_string()]);
        assert_eq!(table.rows[0].cells, ["5.60", "4.75", "0.00"].map(str::to_string));
    }

    #[test]
    fn fixed_handles_non_finite() {
        assert_eq!(fixed(f64::NAN, 2), "0");
        assert_eq!(fixed(3.14159, 2), "3.14");
    }
}
