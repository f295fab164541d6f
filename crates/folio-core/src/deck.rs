use crate::charts::{Chart, DataPair};
use crate::error::{Error, Result};
use crate::layout::CompositionTemplate;
use crate::raw::{RawDeck, RawDeepDive, RawFeedItem, RawNavItem, RawPage, RawPageContent};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::path::Path;

pub type PageId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum PageKind {
    Cover,
    Executive,
    TextSplit,
    Chart,
    VisualFocus,
    FinancialTable,
    RiskMatrix,
    Diagram,
    Unknown(String),
}

impl PageKind {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "COVER" => Self::Cover,
            "EXECUTIVE" => Self::Executive,
            "TEXT_SPLIT" => Self::TextSplit,
            "CHART" => Self::Chart,
            "VISUAL_FOCUS" => Self::VisualFocus,
            "FINANCIAL_TABLE" => Self::FinancialTable,
            "RISK_MATRIX" => Self::RiskMatrix,
            "DIAGRAM" => Self::Diagram,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Cover => "COVER",
            Self::Executive => "EXECUTIVE",
            Self::TextSplit => "TEXT_SPLIT",
            Self::Chart => "CHART",
            Self::VisualFocus => "VISUAL_FOCUS",
            Self::FinancialTable => "FINANCIAL_TABLE",
            Self::RiskMatrix => "RISK_MATRIX",
            Self::Diagram => "DIAGRAM",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<PageKind> for String {
    fn from(value: PageKind) -> Self {
        value.as_str().to_string()
    }
}

/// How a page presents its deep-dive bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepDivePresentation {
    /// Collapsed behind a disclosure toggle.
    #[default]
    Toggle,
    /// Listed directly under the bullets, always visible.
    Inline,
    /// Deep-dive line `i` is attached under bullet `i`.
    SubBullets,
    Hidden,
}

impl DeepDivePresentation {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "toggle" => Some(Self::Toggle),
            "inline" => Some(Self::Inline),
            "sub_bullets" | "subbullets" => Some(Self::SubBullets),
            "hidden" => Some(Self::Hidden),
            _ => None,
        }
    }
}

/// Declarative per-page presentation overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOverrides {
    pub deep_dive: DeepDivePresentation,
    /// The page offers a detail table that opens as a boolean disclosure.
    pub detail_table: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepDive {
    pub title: String,
    pub text: Vec<String>,
    pub data_points: Vec<DataPair>,
}

impl From<RawDeepDive> for DeepDive {
    fn from(raw: RawDeepDive) -> Self {
        Self {
            title: raw.title,
            text: raw.text,
            data_points: raw.data_points.into_iter().map(DataPair::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub id: i64,
    pub category: String,
    pub date: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    pub id: i64,
    pub image_url: String,
    pub title: String,
    pub en_title: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedItem {
    News(NewsItem),
    Media(MediaItem),
}

impl From<RawFeedItem> for FeedItem {
    fn from(raw: RawFeedItem) -> Self {
        match raw {
            RawFeedItem::News {
                id,
                category,
                date,
                title,
            } => FeedItem::News(NewsItem {
                id,
                category,
                date,
                title,
            }),
            RawFeedItem::Media {
                id,
                image_url,
                title,
                en_title,
                category,
            } => FeedItem::Media(MediaItem {
                id,
                image_url,
                title,
                en_title,
                category,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageContent {
    pub heading: Option<String>,
    pub bullets: Vec<String>,
    pub chart: Option<Chart>,
    pub visual_asset: Option<String>,
    pub speaker_notes: Option<String>,
    pub items: Vec<FeedItem>,
    pub deep_dive: Option<DeepDive>,
}

impl From<RawPageContent> for PageContent {
    fn from(raw: RawPageContent) -> Self {
        Self {
            heading: raw.heading,
            bullets: raw.bullets,
            chart: raw.chart.map(Chart::from_raw),
            visual_asset: raw.visual_asset,
            speaker_notes: raw.speaker_notes,
            items: raw.items.into_iter().map(FeedItem::from).collect(),
            deep_dive: raw.deep_dive.map(DeepDive::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    pub section: String,
    pub title: String,
    pub subtitle: String,
    /// The authored layout tag; `None` when absent or unrecognized.
    pub layout: Option<CompositionTemplate>,
    pub content: PageContent,
    pub overrides: PageOverrides,
}

impl Page {
    pub fn from_raw(raw: RawPage) -> Self {
        let kind = PageKind::parse(&raw.page_type);
        if let PageKind::Unknown(tag) = &kind {
            tracing::warn!(page_id = raw.id, page_type = %tag, "unrecognized page type");
        }
        let layout = raw.layout.as_deref().and_then(|tag| {
            let parsed = CompositionTemplate::parse(tag);
            if parsed.is_none() {
                tracing::warn!(page_id = raw.id, layout = %tag, "unrecognized layout tag");
            }
            parsed
        });
        let deep_dive = match raw.overrides.deep_dive.as_deref() {
            None => DeepDivePresentation::default(),
            Some(tag) => DeepDivePresentation::parse(tag).unwrap_or_else(|| {
                tracing::warn!(page_id = raw.id, deep_dive = %tag, "unrecognized deep-dive override");
                DeepDivePresentation::default()
            }),
        };

        Self {
            id: raw.id,
            kind,
            section: raw.section,
            title: raw.title,
            subtitle: raw.subtitle,
            layout,
            content: raw.content.map(PageContent::from).unwrap_or_default(),
            overrides: PageOverrides {
                deep_dive,
                detail_table: raw.overrides.detail_table,
            },
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.content.chart.as_ref()
    }

    /// Whether the deep-dive bundle sits behind a disclosure toggle on this page.
    pub fn has_deep_dive_toggle(&self) -> bool {
        self.content.deep_dive.is_some() && self.overrides.deep_dive == DeepDivePresentation::Toggle
    }

    /// Deep-dive line attached under bullet `index` (sub-bullet presentation only).
    pub fn sub_bullet(&self, index: usize) -> Option<&str> {
        if self.overrides.deep_dive != DeepDivePresentation::SubBullets {
            return None;
        }
        self.content
            .deep_dive
            .as_ref()
            .and_then(|d| d.text.get(index))
            .map(String::as_str)
    }
}

/// Section marker shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: PageId,
    pub label: String,
    pub sub_label: String,
}

impl From<RawNavItem> for NavItem {
    fn from(raw: RawNavItem) -> Self {
        Self {
            id: raw.id,
            label: raw.label,
            sub_label: raw.sub_label,
        }
    }
}

/// The immutable, validated page sequence.
///
/// A deck always holds at least one page and its page ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    title: Option<String>,
    sections: Vec<NavItem>,
    pages: Vec<Page>,
}

impl Deck {
    pub fn new(pages: Vec<Page>, sections: Vec<NavItem>) -> Result<Self> {
        Self::with_title(None, pages, sections)
    }

    pub fn with_title(title: Option<String>, pages: Vec<Page>, sections: Vec<NavItem>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyDeck);
        }
        let mut seen: FxHashSet<PageId> = FxHashSet::default();
        for page in &pages {
            if !seen.insert(page.id) {
                return Err(Error::DuplicatePageId { id: page.id });
            }
        }
        for item in &sections {
            if !seen.contains(&item.id) {
                return Err(Error::UnknownSectionTarget {
                    id: item.id,
                    label: item.label.clone(),
                });
            }
        }
        Ok(Self {
            title,
            sections,
            pages,
        })
    }

    pub fn from_raw(raw: RawDeck) -> Result<Self> {
        let (title, sections, pages) = match raw {
            RawDeck::Document {
                title,
                sections,
                pages,
            } => (title, sections, pages),
            RawDeck::Pages(pages) => (None, Vec::new(), pages),
        };
        Self::with_title(
            title,
            pages.into_iter().map(Page::from_raw).collect(),
            sections.into_iter().map(NavItem::from).collect(),
        )
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawDeck = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: RawDeck = serde_yaml::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Loads a deck, picking the format from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Self::from_json_str(&text),
            "yaml" | "yml" => Self::from_yaml_str(&text),
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn sections(&self) -> &[NavItem] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn first_page(&self) -> &Page {
        // Non-empty by construction.
        &self.pages[0]
    }

    /// Linear search by id; array position, not the id value, defines page order.
    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }
}
