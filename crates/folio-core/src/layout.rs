//! Page composition: which template arranges a page and which renderer consumes it.

use crate::deck::{Page, PageKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositionTemplate {
    SplitLeft,
    SplitRight,
    CenterTop,
    GridCards,
    FullWidth,
    VerticalInverted,
    #[serde(rename = "GRID_2X2")]
    Grid2x2,
}

impl CompositionTemplate {
    pub const DEFAULT: Self = Self::SplitRight;

    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "SPLIT_LEFT" => Some(Self::SplitLeft),
            "SPLIT_RIGHT" => Some(Self::SplitRight),
            "CENTER_TOP" => Some(Self::CenterTop),
            "GRID_CARDS" => Some(Self::GridCards),
            "FULL_WIDTH" => Some(Self::FullWidth),
            "VERTICAL_INVERTED" => Some(Self::VerticalInverted),
            "GRID_2X2" => Some(Self::Grid2x2),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SplitLeft => "SPLIT_LEFT",
            Self::SplitRight => "SPLIT_RIGHT",
            Self::CenterTop => "CENTER_TOP",
            Self::GridCards => "GRID_CARDS",
            Self::FullWidth => "FULL_WIDTH",
            Self::VerticalInverted => "VERTICAL_INVERTED",
            Self::Grid2x2 => "GRID_2X2",
        }
    }

    pub fn arrangement(self) -> Arrangement {
        use Region::*;
        match self {
            Self::SplitLeft => Arrangement {
                flow: Flow::Columns,
                regions: &[Visual, Text],
            },
            Self::SplitRight => Arrangement {
                flow: Flow::Columns,
                regions: &[Text, Visual],
            },
            Self::CenterTop | Self::GridCards => Arrangement {
                flow: Flow::Stacked,
                regions: &[Text, Visual],
            },
            Self::FullWidth => Arrangement {
                flow: Flow::Stacked,
                regions: &[Title, Visual],
            },
            Self::VerticalInverted => Arrangement {
                flow: Flow::Stacked,
                regions: &[Title, Visual, Bullets],
            },
            Self::Grid2x2 => Arrangement {
                flow: Flow::Stacked,
                regions: &[Section, Visual],
            },
        }
    }
}

impl std::fmt::Display for CompositionTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page area filled by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Section label only.
    Section,
    /// Section, title and subtitle.
    Title,
    /// Title block followed by heading, bullets and deep-dive affordances.
    Text,
    Bullets,
    /// The chart, diagram or imagery.
    Visual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Columns,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    pub flow: Flow,
    pub regions: &'static [Region],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Renderer {
    Hero,
    Text,
    Chart,
    World,
}

pub fn select_layout(_kind: &PageKind, layout: Option<CompositionTemplate>) -> CompositionTemplate {
    layout.unwrap_or(CompositionTemplate::DEFAULT)
}

/// Unknown page types fall back to the hero renderer.
pub fn renderer_for(kind: &PageKind) -> Renderer {
    match kind {
        PageKind::Cover => Renderer::Hero,
        PageKind::Executive | PageKind::TextSplit => Renderer::Text,
        PageKind::Chart | PageKind::FinancialTable | PageKind::RiskMatrix | PageKind::Diagram => {
            Renderer::Chart
        }
        PageKind::VisualFocus => Renderer::World,
        PageKind::Unknown(tag) => {
            tracing::debug!(page_type = %tag, "falling back to hero renderer");
            Renderer::Hero
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub template: CompositionTemplate,
    pub renderer: Renderer,
    pub arrangement: Arrangement,
}

pub fn compose(page: &Page) -> Composition {
    let template = select_layout(&page.kind, page.layout);
    Composition {
        template,
        renderer: renderer_for(&page.kind),
        arrangement: template.arrangement(),
    }
}
