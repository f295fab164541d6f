use crate::*;
use serde_json::{Value, json};
use std::sync::Arc;

mod deck;
mod layout;

fn page(id: PageId, page_type: &str) -> Value {
    json!({ "id": id, "type": page_type, "title": format!("Page {id}") })
}

fn deck_from(value: Value) -> Deck {
    Deck::from_json_str(&value.to_string()).unwrap()
}

fn deck_of_ids(ids: &[PageId]) -> Deck {
    deck_from(Value::Array(ids.iter().map(|&id| page(id, "TEXT_SPLIT")).collect()))
}

fn session_of_ids(ids: &[PageId]) -> Session {
    Session::new(Arc::new(deck_of_ids(ids)))
}

fn financial_page(id: PageId) -> Value {
    json!({
        "id": id,
        "type": "FINANCIAL_TABLE",
        "title": "Scenarios",
        "content": {
            "chart": {
                "type": "FINANCIAL_TABLE",
                "data": [
                    { "label": "Revenue", "value": 120, "value2": 180, "value3": 260, "details": "M" },
                    { "label": "Margin", "value": 4.5, "value2": 8.25, "value3": 12, "details": "%" },
                    { "label": "Headcount", "value": 30, "value2": 40, "value3": 55 }
                ]
            }
        }
    })
}
