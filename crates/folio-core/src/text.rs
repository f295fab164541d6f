//! Inline markup used by bullet strings.
//!
//! Bullets may carry emphasis runs (`**bold**`, or `*bold*` inside quadrant bullets) and a
//! `lead：body` split where the part before the colon is shown as a heading.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisMarker {
    Double,
    Single,
}

impl EmphasisMarker {
    fn token(self) -> &'static str {
        match self {
            EmphasisMarker::Double => "**",
            EmphasisMarker::Single => "*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

/// Splits `text` into plain and emphasized runs. An unmatched opening marker is kept as plain
/// text; empty runs are dropped.
pub fn emphasis_spans(text: &str, marker: EmphasisMarker) -> Vec<Span<'_>> {
    let token = marker.token();
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(token) {
        let after_open = &rest[open + token.len()..];
        let Some(close) = after_open.find(token) else {
            break;
        };
        if open > 0 {
            out.push(Span::Plain(&rest[..open]));
        }
        let inner = &after_open[..close];
        if !inner.is_empty() {
            out.push(Span::Strong(inner));
        }
        rest = &after_open[close + token.len()..];
    }
    if !rest.is_empty() {
        out.push(Span::Plain(rest));
    }
    out
}

/// Splits a bullet at the first full-width or ASCII colon into `(lead, body)`.
///
/// Returns `(None, text)` when there is no colon or the lead would be empty.
pub fn split_lead(text: &str) -> (Option<&str>, &str) {
    let idx = text
        .char_indices()
        .find(|(_, c)| *c == '：' || *c == ':')
        .map(|(i, c)| (i, c.len_utf8()));
    match idx {
        Some((i, len)) if i > 0 => {
            let lead = text[..i].trim();
            if lead.is_empty() {
                return (None, text);
            }
            (Some(lead), text[i + len..].trim_start())
        }
        _ => (None, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_marker_runs() {
        let spans = emphasis_spans("a **b** c **d**", EmphasisMarker::Double);
        assert_eq!(
            spans,
            vec![
                Span::Plain("a "),
                Span::Strong("b"),
                Span::Plain(" c "),
                Span::Strong("d"),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_plain() {
        let spans = emphasis_spans("rate **rising", EmphasisMarker::Double);
        assert_eq!(spans, vec![Span::Plain("rate **rising")]);
    }

    #[test]
    fn single_marker_runs() {
        let spans = emphasis_spans("*Moat* holds", EmphasisMarker::Single);
        assert_eq!(spans, vec![Span::Strong("Moat"), Span::Plain(" holds")]);
    }

    #[test]
    fn lead_split_handles_full_width_colon() {
        assert_eq!(split_lead("Moat：deep"), (Some("Moat"), "deep"));
        assert_eq!(split_lead("Moat: deep"), (Some("Moat"), "deep"));
        assert_eq!(split_lead("no colon"), (None, "no colon"));
        assert_eq!(split_lead(":leading"), (None, ":leading"));
    }
}
