use super::*;
use crate::charts::DEFAULT_SCENARIO_NAMES;

#[test]
fn empty_deck_is_rejected() {
    let err = Deck::from_json_str("[]").unwrap_err();
    assert!(matches!(err, Error::EmptyDeck));
    assert_eq!(err.to_string(), "deck contains no pages");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Deck::from_json_str(&json!([page(1, "COVER"), page(1, "CHART")]).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::DuplicatePageId { id: 1 }));
}

#[test]
fn section_markers_must_target_existing_pages() {
    let err = Deck::from_json_str(
        &json!({
            "sections": [{ "id": 9, "label": "Ghost" }],
            "pages": [page(0, "COVER")]
        })
        .to_string(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "section marker \"Ghost\" points at unknown page id 9"
    );
}

#[test]
fn document_form_keeps_title_and_sections() {
    let deck = deck_from(json!({
        "title": "Annual review",
        "sections": [{ "id": 0, "label": "Intro" }],
        "pages": [page(0, "COVER"), page(1, "EXECUTIVE")]
    }));
    assert_eq!(deck.title(), Some("Annual review"));
    assert_eq!(deck.sections().len(), 1);
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.index_of(1), Some(1));
    assert_eq!(deck.index_of(5), None);
}

#[test]
fn unknown_tags_are_preserved() {
    let deck = deck_from(json!([{
        "id": 0,
        "type": "TIMELINE",
        "layout": "DIAGONAL",
        "content": { "chart": { "type": "SANKEY" } }
    }]));
    let page = deck.first_page();
    assert_eq!(page.kind, PageKind::Unknown("TIMELINE".to_string()));
    assert_eq!(page.layout, None);
    assert_eq!(
        page.chart(),
        Some(&Chart::Unsupported {
            tag: "SANKEY".to_string()
        })
    );
}

#[test]
fn diagram_dispatches_on_its_variant() {
    let deck = deck_from(json!([{
        "id": 0,
        "type": "DIAGRAM",
        "content": { "chart": {
            "type": "DIAGRAM",
            "diagramType": "FLYWHEEL",
            "data": [{ "label": "Reach" }, { "label": "Engage" }, { "label": "Convert" }]
        } }
    }]));
    let Some(Chart::Flywheel(wheel)) = deck.first_page().chart() else {
        panic!("expected a flywheel");
    };
    assert_eq!(wheel.stages.len(), 3);
    assert_eq!(deck.first_page().chart().map(Chart::kind), Some(ChartKind::Diagram));
}

#[test]
fn financial_rows_keep_scenario_values() {
    let deck = deck_from(json!([financial_page(0)]));
    let Some(Chart::FinancialTable(table)) = deck.first_page().chart() else {
        panic!("expected a financial table");
    };
    assert_eq!(table.scenario_names, DEFAULT_SCENARIO_NAMES.map(str::to_string));
    let headcount = &table.rows[2];
    assert_eq!(headcount.values(), [30.0, 40.0, 55.0]);
    assert_eq!(headcount.unit, None);
    assert_eq!(table.rows[0].unit.as_deref(), Some("M"));
}

#[test]
fn missing_numbers_become_zero() {
    let deck = deck_from(json!([{
        "id": 0,
        "type": "CHART",
        "content": { "chart": { "type": "PIE", "data": [{ "label": "Other" }] } }
    }]));
    let Some(Chart::Pie(pie)) = deck.first_page().chart() else {
        panic!("expected a pie");
    };
    assert_eq!(pie.slices[0].value, 0.0);
}

#[test]
fn yaml_and_json_load_the_same_deck() {
    let yaml = r#"
title: Review
pages:
  - id: 0
    type: COVER
    title: Hello
  - id: 2
    type: TEXT_SPLIT
    layout: SPLIT_LEFT
    subTitle: Details
"#;
    let deck = Deck::from_yaml_str(yaml).unwrap();
    assert_eq!(deck.len(), 2);
    let second = &deck.pages()[1];
    assert_eq!(second.layout, Some(CompositionTemplate::SplitLeft));
    assert_eq!(second.subtitle, "Details");
}

#[test]
fn deep_dive_overrides_shape_presentation() {
    let deck = deck_from(json!([
        {
            "id": 0,
            "type": "TEXT_SPLIT",
            "content": {
                "bullets": ["Scale", "Retention"],
                "deepDive": { "title": "More", "text": ["Scale detail", "Retention detail"] }
            },
            "overrides": { "deepDive": "sub_bullets" }
        },
        {
            "id": 1,
            "type": "TEXT_SPLIT",
            "content": { "deepDive": { "title": "More", "text": ["x"] } }
        }
    ]));
    let sub = &deck.pages()[0];
    assert_eq!(sub.overrides.deep_dive, DeepDivePresentation::SubBullets);
    assert_eq!(sub.sub_bullet(1), Some("Retention detail"));
    assert!(!sub.has_deep_dive_toggle());

    let toggled = &deck.pages()[1];
    assert!(toggled.has_deep_dive_toggle());
    assert_eq!(toggled.sub_bullet(0), None);
}

#[test]
fn from_path_rejects_unknown_extensions() {
    let dir = std::env::temp_dir().join(format!("folio-core-ext-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("deck.toml");
    std::fs::write(&path, "[]").unwrap();
    let err = Deck::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "toml"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn feed_items_are_told_apart_by_shape() {
    let deck = deck_from(json!([{
        "id": 0,
        "type": "VISUAL_FOCUS",
        "content": { "items": [
            { "id": 1, "category": "Policy", "date": "2024-05-01", "title": "New rules" },
            { "id": 2, "imageUrl": "a.png", "title": "Launch", "enTitle": "Launch" }
        ] }
    }]));
    let items = &deck.first_page().content.items;
    assert!(matches!(items[0], FeedItem::News(_)));
    assert!(matches!(items[1], FeedItem::Media(_)));
}
