#![forbid(unsafe_code)]

//! Slide-deck content model and presentation state (headless).
//!
//! A [`Deck`] is an immutable, validated page sequence loaded from JSON or YAML. A [`Session`]
//! tracks one viewer's position in it: the current page, the disclosure state of that page and
//! the section markers and progress derived from it. Chart geometry lives in `folio-render`.

pub mod charts;
pub mod config;
pub mod deck;
pub mod disclosure;
pub mod error;
pub mod geom;
pub mod keyboard;
pub mod layout;
pub mod navigation;
pub mod raw;
pub mod session;
pub mod text;

pub use charts::{Chart, ChartKind};
pub use config::GeometryConfig;
pub use deck::{
    DeepDive, DeepDivePresentation, Deck, FeedItem, NavItem, Page, PageContent, PageId, PageKind,
    PageOverrides,
};
pub use disclosure::{DisclosureState, DisclosureTarget, ItemPolicy};
pub use error::{Error, Result};
pub use keyboard::{Key, KeyDispatcher, KeyEventSource, KeyboardBinding, NavAction};
pub use layout::{Composition, CompositionTemplate, Renderer, compose, renderer_for, select_layout};
pub use navigation::{IgnoredReason, Navigator, Transition};
pub use session::{Progress, SectionMarker, Session};

#[cfg(test)]
mod tests;
