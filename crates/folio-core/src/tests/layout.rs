use super::*;
use crate::layout::{Flow, Region};

#[test]
fn absent_layout_defaults_to_split_right() {
    assert_eq!(
        select_layout(&PageKind::Chart, None),
        CompositionTemplate::SplitRight
    );
}

#[test]
fn explicit_layout_wins() {
    assert_eq!(
        select_layout(&PageKind::Chart, Some(CompositionTemplate::FullWidth)),
        CompositionTemplate::FullWidth
    );
}

#[test]
fn split_left_places_the_visual_first() {
    let left = CompositionTemplate::SplitLeft.arrangement();
    let right = CompositionTemplate::SplitRight.arrangement();
    assert_eq!(left.flow, Flow::Columns);
    assert_eq!(left.regions, &[Region::Visual, Region::Text]);
    assert_eq!(right.regions, &[Region::Text, Region::Visual]);
}

#[test]
fn vertical_inverted_puts_bullets_under_the_visual() {
    let a = CompositionTemplate::VerticalInverted.arrangement();
    assert_eq!(a.flow, Flow::Stacked);
    assert_eq!(a.regions.last(), Some(&Region::Bullets));
}

#[test]
fn layout_tags_parse_case_insensitively() {
    for template in [
        CompositionTemplate::SplitLeft,
        CompositionTemplate::SplitRight,
        CompositionTemplate::CenterTop,
        CompositionTemplate::GridCards,
        CompositionTemplate::FullWidth,
        CompositionTemplate::VerticalInverted,
        CompositionTemplate::Grid2x2,
    ] {
        let lower = template.as_str().to_ascii_lowercase();
        assert_eq!(CompositionTemplate::parse(&lower), Some(template));
    }
    assert_eq!(CompositionTemplate::parse("DIAGONAL"), None);
}

#[test]
fn renderer_dispatch_covers_every_page_type() {
    let cases = [
        ("COVER", Renderer::Hero),
        ("EXECUTIVE", Renderer::Text),
        ("TEXT_SPLIT", Renderer::Text),
        ("CHART", Renderer::Chart),
        ("FINANCIAL_TABLE", Renderer::Chart),
        ("RISK_MATRIX", Renderer::Chart),
        ("DIAGRAM", Renderer::Chart),
        ("VISUAL_FOCUS", Renderer::World),
        ("TIMELINE", Renderer::Hero),
    ];
    for (tag, expected) in cases {
        assert_eq!(renderer_for(&PageKind::parse(tag)), expected, "{tag}");
    }
}

#[test]
fn composition_serializes_template_tags() {
    let deck = deck_from(json!([{ "id": 0, "type": "CHART", "layout": "GRID_2X2" }]));
    let value = serde_json::to_value(compose(deck.first_page())).unwrap();
    assert_eq!(value["template"], json!("GRID_2X2"));
    assert_eq!(value["renderer"], json!("chart"));
    assert_eq!(value["arrangement"]["regions"], json!(["section", "visual"]));
}
