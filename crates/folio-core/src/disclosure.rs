//! Per-visit expand/collapse state.
//!
//! A fresh [`DisclosureState`] is built every time a page becomes current, so nothing expanded
//! on one visit survives navigation away and back.

use crate::charts::Chart;
use crate::deck::Page;
use serde::Serialize;
use std::collections::BTreeSet;

/// How item-level disclosure behaves for the page's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemPolicy {
    /// Items are not selectable.
    None,
    /// At most one active item; selecting the active item again collapses it.
    Single,
    /// Exactly one active item; selecting only ever moves the selection.
    Pinned,
    /// Every item expands and collapses on its own.
    Independent,
}

impl ItemPolicy {
    pub fn for_chart(chart: Option<&Chart>) -> Self {
        match chart {
            Some(Chart::CardsExpandable(_)) => ItemPolicy::Single,
            Some(Chart::Flywheel(_)) => ItemPolicy::Pinned,
            Some(Chart::FinancialTable(_) | Chart::RiskMatrix(_) | Chart::QuadGrid(_)) => {
                ItemPolicy::Independent
            }
            _ => ItemPolicy::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum DisclosureTarget {
    Item(usize),
    DeepDive,
    DetailTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureState {
    policy: ItemPolicy,
    item_count: usize,
    active: Option<usize>,
    expanded: BTreeSet<usize>,
    deep_dive_available: bool,
    deep_dive_open: bool,
    detail_table_available: bool,
    detail_table_open: bool,
}

impl DisclosureState {
    pub fn for_page(page: &Page) -> Self {
        let chart = page.chart();
        let policy = ItemPolicy::for_chart(chart);
        let item_count = chart.map(Chart::item_count).unwrap_or(0);
        let active = match policy {
            ItemPolicy::Pinned if item_count > 0 => Some(0),
            _ => None,
        };
        Self {
            policy,
            item_count,
            active,
            expanded: BTreeSet::new(),
            deep_dive_available: page.has_deep_dive_toggle(),
            deep_dive_open: false,
            detail_table_available: page.overrides.detail_table,
            detail_table_open: false,
        }
    }

    pub fn policy(&self) -> ItemPolicy {
        self.policy
    }

    pub fn active_item(&self) -> Option<usize> {
        self.active
    }

    pub fn is_item_expanded(&self, index: usize) -> bool {
        match self.policy {
            ItemPolicy::Independent => self.expanded.contains(&index),
            ItemPolicy::Single | ItemPolicy::Pinned => self.active == Some(index),
            ItemPolicy::None => false,
        }
    }

    pub fn expanded_items(&self) -> Vec<usize> {
        match self.policy {
            ItemPolicy::Independent => self.expanded.iter().copied().collect(),
            _ => self.active.into_iter().collect(),
        }
    }

    pub fn deep_dive_open(&self) -> bool {
        self.deep_dive_open
    }

    pub fn detail_table_open(&self) -> bool {
        self.detail_table_open
    }

    /// Applies a toggle. Returns whether anything changed; unavailable targets and out-of-range
    /// indices are ignored.
    pub fn toggle(&mut self, target: DisclosureTarget) -> bool {
        let changed = match target {
            DisclosureTarget::DeepDive => {
                if self.deep_dive_available {
                    self.deep_dive_open = !self.deep_dive_open;
                }
                self.deep_dive_available
            }
            DisclosureTarget::DetailTable => {
                if self.detail_table_available {
                    self.detail_table_open = !self.detail_table_open;
                }
                self.detail_table_available
            }
            DisclosureTarget::Item(index) => self.toggle_item(index),
        };
        if changed {
            tracing::debug!(?target, state = ?self.expanded_items(), "disclosure toggled");
        } else {
            tracing::debug!(?target, "disclosure toggle ignored");
        }
        changed
    }

    fn toggle_item(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        match self.policy {
            ItemPolicy::None => false,
            ItemPolicy::Single => {
                self.active = if self.active == Some(index) {
                    None
                } else {
                    Some(index)
                };
                true
            }
            ItemPolicy::Pinned => {
                let changed = self.active != Some(index);
                self.active = Some(index);
                changed
            }
            ItemPolicy::Independent => {
                if !self.expanded.remove(&index) {
                    self.expanded.insert(index);
                }
                true
            }
        }
    }
}
