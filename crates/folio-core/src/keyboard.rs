//! Keyboard navigation.
//!
//! Only two key identities are bound: right arrow advances, left arrow goes back. A
//! [`KeyboardBinding`] registers one listener on a [`KeyEventSource`] for a session and removes
//! it when released or dropped, exactly once.

use crate::session::Session;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Accepts DOM key names (`ArrowRight`) and short aliases (`right`).
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "ArrowRight" | "Right" | "right" => Key::ArrowRight,
            "ArrowLeft" | "Left" | "left" => Key::ArrowLeft,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn action(&self) -> Option<NavAction> {
        match self {
            Key::ArrowRight => Some(NavAction::Next),
            Key::ArrowLeft => Some(NavAction::Prev),
            Key::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
}

pub type ListenerId = u64;

pub type KeyListener = Box<dyn FnMut(&Key)>;

/// Something that delivers key events to registered listeners (a window, a terminal, a test).
pub trait KeyEventSource {
    fn add_listener(&mut self, listener: KeyListener) -> ListenerId;

    /// Returns `false` when `id` was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// In-process event source: listeners are invoked in registration order.
#[derive(Default)]
pub struct KeyDispatcher {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, KeyListener)>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `key` to every listener; returns how many were invoked.
    pub fn dispatch(&mut self, key: &Key) -> usize {
        for (_, listener) in self.listeners.iter_mut() {
            listener(key);
        }
        self.listeners.len()
    }
}

impl std::fmt::Debug for KeyDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDispatcher")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl KeyEventSource for KeyDispatcher {
    fn add_listener(&mut self, listener: KeyListener) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

/// Scoped registration of a session's keyboard listener.
///
/// Must not be released from inside one of the source's own listeners.
pub struct KeyboardBinding<S: KeyEventSource> {
    source: Rc<RefCell<S>>,
    bound: Rc<Cell<bool>>,
    id: Option<ListenerId>,
}

impl<S: KeyEventSource> KeyboardBinding<S> {
    /// Registers the listener. Returns `None` when the session already has a live binding or
    /// is mutably borrowed elsewhere.
    pub fn attach(source: &Rc<RefCell<S>>, session: &Rc<RefCell<Session>>) -> Option<Self> {
        let Ok(bound) = session.try_borrow().map(|s| s.keyboard_flag()) else {
            tracing::warn!("session busy; keyboard not bound");
            return None;
        };
        if bound.get() {
            tracing::warn!("keyboard already bound for this session");
            return None;
        }
        let Ok(mut events) = source.try_borrow_mut() else {
            tracing::warn!("event source busy; keyboard not bound");
            return None;
        };

        let weak = Rc::downgrade(session);
        let listener: KeyListener = Box::new(move |key: &Key| {
            let Some(session) = weak.upgrade() else {
                return;
            };
            let Ok(mut session) = session.try_borrow_mut() else {
                tracing::warn!(?key, "session busy; key dropped");
                return;
            };
            session.handle_key(key);
        });
        let id = events.add_listener(listener);
        bound.set(true);
        tracing::debug!(listener = id, "keyboard listener attached");

        Some(Self {
            source: Rc::clone(source),
            bound,
            id: Some(id),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Removes the listener now instead of at drop.
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.source.try_borrow_mut() {
            Ok(mut source) => {
                source.remove_listener(id);
                self.bound.set(false);
                tracing::debug!(listener = id, "keyboard listener removed");
            }
            // The listener stays live, so the session stays bound.
            Err(_) => tracing::warn!(listener = id, "event source busy; listener not removed"),
        }
    }
}

impl<S: KeyEventSource> Drop for KeyboardBinding<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
