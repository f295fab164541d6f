//! Page navigation state machine.
//!
//! The state is a single page id. Pages are located by id and moved between by array index, so
//! ids do not need to be contiguous. Invalid moves (unknown id, stepping past either end) are
//! ignored and reported as [`Transition::Ignored`]; they never change state.

use crate::deck::{Page, PageId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    UnknownId,
    AtFirstPage,
    AtLastPage,
    AlreadyCurrent,
    UnboundKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: PageId, to: PageId },
    Ignored { reason: IgnoredReason },
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigator {
    current: PageId,
}

impl Navigator {
    /// Starts at the first page in array order; `None` for an empty sequence.
    pub fn new(pages: &[Page]) -> Option<Self> {
        pages.first().map(|p| Self { current: p.id })
    }

    pub fn starting_at(id: PageId) -> Self {
        Self { current: id }
    }

    pub fn current_id(&self) -> PageId {
        self.current
    }

    pub fn current_index(&self, pages: &[Page]) -> Option<usize> {
        pages.iter().position(|p| p.id == self.current)
    }

    pub fn go_to_id(&mut self, pages: &[Page], id: PageId) -> Transition {
        if id == self.current {
            return self.ignore(IgnoredReason::AlreadyCurrent);
        }
        if !pages.iter().any(|p| p.id == id) {
            return self.ignore(IgnoredReason::UnknownId);
        }
        self.move_to(id)
    }

    pub fn next(&mut self, pages: &[Page]) -> Transition {
        let Some(idx) = self.current_index(pages) else {
            return self.ignore(IgnoredReason::UnknownId);
        };
        match pages.get(idx + 1) {
            Some(page) => self.move_to(page.id),
            None => self.ignore(IgnoredReason::AtLastPage),
        }
    }

    pub fn prev(&mut self, pages: &[Page]) -> Transition {
        let Some(idx) = self.current_index(pages) else {
            return self.ignore(IgnoredReason::UnknownId);
        };
        if idx == 0 {
            return self.ignore(IgnoredReason::AtFirstPage);
        }
        self.move_to(pages[idx - 1].id)
    }

    fn move_to(&mut self, to: PageId) -> Transition {
        let from = self.current;
        self.current = to;
        tracing::debug!(from, to, "page transition");
        Transition::Moved { from, to }
    }

    fn ignore(&self, reason: IgnoredReason) -> Transition {
        tracing::debug!(current = self.current, ?reason, "navigation ignored");
        Transition::Ignored { reason }
    }
}
