use crate::deck::{Deck, NavItem, Page, PageId};
use crate::disclosure::{DisclosureState, DisclosureTarget};
use crate::keyboard::{Key, NavAction};
use crate::layout::{Composition, compose};
use crate::navigation::{IgnoredReason, Navigator, Transition};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Footer progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub index: usize,
    pub last_index: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl Progress {
    /// Zero-padded `(current, last)` labels, e.g. `("03", "13")`.
    pub fn labels(&self) -> (String, String) {
        (format!("{:02}", self.index), format!("{:02}", self.last_index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionMarker {
    pub id: PageId,
    pub label: String,
    pub sub_label: String,
    pub active: bool,
    /// The current page id is at or past this marker's id.
    pub reached: bool,
}

/// One viewer's state over a deck: the current page and that page's disclosure state.
#[derive(Debug)]
pub struct Session {
    deck: Arc<Deck>,
    nav: Navigator,
    disclosure: DisclosureState,
    keyboard_bound: Rc<Cell<bool>>,
}

impl Session {
    pub fn new(deck: Arc<Deck>) -> Self {
        let first = deck.first_page();
        let nav = Navigator::starting_at(first.id);
        let disclosure = DisclosureState::for_page(first);
        Self {
            deck,
            nav,
            disclosure,
            keyboard_bound: Rc::new(Cell::new(false)),
        }
    }

    pub fn deck(&self) -> &Arc<Deck> {
        &self.deck
    }

    pub fn current_id(&self) -> PageId {
        self.nav.current_id()
    }

    pub fn current_index(&self) -> usize {
        self.nav.current_index(self.deck.pages()).unwrap_or(0)
    }

    pub fn current_page(&self) -> &Page {
        self.deck
            .page(self.nav.current_id())
            .unwrap_or_else(|| self.deck.first_page())
    }

    pub fn composition(&self) -> Composition {
        compose(self.current_page())
    }

    pub fn disclosure(&self) -> &DisclosureState {
        &self.disclosure
    }

    pub fn go_next(&mut self) -> Transition {
        let t = self.nav.next(self.deck.pages());
        self.after(t)
    }

    pub fn go_prev(&mut self) -> Transition {
        let t = self.nav.prev(self.deck.pages());
        self.after(t)
    }

    pub fn go_to_id(&mut self, id: PageId) -> Transition {
        let t = self.nav.go_to_id(self.deck.pages(), id);
        self.after(t)
    }

    pub fn go_home(&mut self) -> Transition {
        let id = self.deck.first_page().id;
        self.go_to_id(id)
    }

    pub fn toggle_disclosure(&mut self, target: DisclosureTarget) -> bool {
        self.disclosure.toggle(target)
    }

    pub fn handle_key(&mut self, key: &Key) -> Transition {
        match key.action() {
            Some(NavAction::Next) => self.go_next(),
            Some(NavAction::Prev) => self.go_prev(),
            None => Transition::Ignored {
                reason: IgnoredReason::UnboundKey,
            },
        }
    }

    pub fn progress(&self) -> Progress {
        let index = self.current_index();
        let last_index = self.deck.len().saturating_sub(1);
        Progress {
            index,
            last_index,
            can_prev: index > 0,
            can_next: index < last_index,
        }
    }

    pub fn section_markers(&self) -> Vec<SectionMarker> {
        let current = self.current_id();
        self.deck
            .sections()
            .iter()
            .map(|NavItem { id, label, sub_label }| SectionMarker {
                id: *id,
                label: label.clone(),
                sub_label: sub_label.clone(),
                active: current == *id,
                reached: current >= *id,
            })
            .collect()
    }

    pub fn keyboard_bound(&self) -> bool {
        self.keyboard_bound.get()
    }

    /// Flag shared with the live binding so it can be cleared without borrowing the session.
    pub(crate) fn keyboard_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.keyboard_bound)
    }

    fn after(&mut self, t: Transition) -> Transition {
        if t.moved() {
            self.disclosure = DisclosureState::for_page(self.current_page());
        }
        t
    }
}
