//! Authoring-format records.
//!
//! These mirror the loosely-typed content documents (camelCase keys, every field optional) and
//! exist only to be converted into the typed [`crate::deck`] and [`crate::charts`] models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataPair {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExpandedContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub data_points: Vec<RawDataPair>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataPoint {
    #[serde(default)]
    pub label: String,
    pub value: Option<f64>,
    pub value2: Option<f64>,
    pub value3: Option<f64>,
    pub color: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub group: Option<String>,
    pub highlight: Option<String>,
    pub details: Option<String>,
    pub icon_name: Option<String>,
    pub mitigation: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub expanded_content: Option<RawExpandedContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChartConfig {
    #[serde(rename = "type", default)]
    pub chart_type: String,
    #[serde(default)]
    pub data: Vec<RawDataPoint>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub series_names: Vec<String>,
    pub y_axis_label: Option<String>,
    pub x_axis_label: Option<String>,
    pub highlight: Option<String>,
    pub diagram_type: Option<String>,
    /// Reference maximum for horizontal bars; the configured default applies when absent.
    pub ceiling: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeepDive {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub data_points: Vec<RawDataPair>,
}

/// A feed entry; the shape decides whether it is a news or a media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFeedItem {
    #[serde(rename_all = "camelCase")]
    Media {
        id: i64,
        image_url: String,
        title: String,
        #[serde(default)]
        en_title: String,
        #[serde(default)]
        category: String,
    },
    #[serde(rename_all = "camelCase")]
    News {
        id: i64,
        #[serde(default)]
        category: String,
        #[serde(default)]
        date: String,
        title: String,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageContent {
    pub heading: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub chart: Option<RawChartConfig>,
    pub visual_asset: Option<String>,
    pub speaker_notes: Option<String>,
    #[serde(default)]
    pub items: Vec<RawFeedItem>,
    pub deep_dive: Option<RawDeepDive>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageOverrides {
    pub deep_dive: Option<String>,
    #[serde(default)]
    pub detail_table: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub page_type: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "subTitle")]
    pub subtitle: String,
    pub layout: Option<String>,
    pub content: Option<RawPageContent>,
    #[serde(default)]
    pub overrides: RawPageOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNavItem {
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub sub_label: String,
}

/// Either a full deck document or a bare page array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDeck {
    Document {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        sections: Vec<RawNavItem>,
        pages: Vec<RawPage>,
    },
    Pages(Vec<RawPage>),
}
