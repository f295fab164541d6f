#![forbid(unsafe_code)]

//! `folio` is a headless slide-deck report engine.
//!
//! Decks are loaded and validated by `folio-core`, which also owns the navigation and disclosure
//! state. Chart geometry and SVG output come from `folio-render`.
//!
//! # Features
//!
//! - `render`: enable chart geometry, SVG output and the cached [`render::Presenter`]
//! - `raster`: enable PNG output via pure-Rust SVG rasterization

pub use folio_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use folio_render::model::ChartGeometry;
    pub use folio_render::svg::{SvgRenderOptions, escape_xml};
    pub use folio_render::tables::{ScoreTable, radar_score_table};
    pub use folio_render::{compute_chart_geometry, geometry_to_json};

    use folio_core::{Chart, Deck, GeometryConfig, KeyEventSource, KeyboardBinding, PageId, Session};
    use rustc_hash::FxHashMap;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;
    use std::sync::Arc;

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] folio_core::Error),
        #[error(transparent)]
        Render(#[from] folio_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// SVG `id` token for `raw`.
    ///
    /// Runs of characters other than ASCII alphanumerics and `_` collapse into one `-`; tokens
    /// that do not start with a letter get an `f-` prefix.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let mut token = String::with_capacity(raw.len() + 2);
        for ch in raw.chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                token.push(ch);
            } else if !token.is_empty() && !token.ends_with('-') {
                token.push('-');
            }
        }
        let token = token.trim_end_matches('-');
        match token.chars().next() {
            None => "f-untitled".to_string(),
            Some(c) if c.is_ascii_alphabetic() => token.to_string(),
            Some(_) => format!("f-{token}"),
        }
    }

    /// Geometry for the chart on page `id`; `None` when the page is missing or has no chart.
    pub fn page_geometry(deck: &Deck, id: PageId, config: &GeometryConfig) -> Option<ChartGeometry> {
        let chart = deck.page(id)?.chart()?;
        Some(compute_chart_geometry(chart, config))
    }

    /// Standalone SVG for the chart on page `id`.
    pub fn render_page_svg(
        deck: &Deck,
        id: PageId,
        config: &GeometryConfig,
        svg_options: &SvgRenderOptions,
    ) -> Result<Option<String>> {
        let Some(geometry) = page_geometry(deck, id, config) else {
            return Ok(None);
        };
        Ok(Some(folio_render::svg::render_svg(&geometry, svg_options)?))
    }

    /// A viewing session plus a per-page geometry cache.
    ///
    /// Pages are immutable once the deck is loaded, so geometry is computed at most once per
    /// page id and configuration.
    pub struct Presenter {
        session: Rc<RefCell<Session>>,
        config: GeometryConfig,
        cache: FxHashMap<PageId, Rc<ChartGeometry>>,
    }

    impl Presenter {
        pub fn new(deck: Arc<Deck>) -> Self {
            Self {
                session: Rc::new(RefCell::new(Session::new(deck))),
                config: GeometryConfig::default(),
                cache: FxHashMap::default(),
            }
        }

        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let deck = Deck::from_path(path)?;
            Ok(Self::new(Arc::new(deck)))
        }

        pub fn with_config(mut self, config: GeometryConfig) -> Self {
            self.config = config;
            self.cache.clear();
            self
        }

        pub fn config(&self) -> &GeometryConfig {
            &self.config
        }

        /// Shared handle for keyboard bindings and callers that drive navigation directly.
        pub fn session(&self) -> &Rc<RefCell<Session>> {
            &self.session
        }

        pub fn bind_keyboard<S: KeyEventSource>(
            &self,
            source: &Rc<RefCell<S>>,
        ) -> Option<KeyboardBinding<S>> {
            KeyboardBinding::attach(source, &self.session)
        }

        pub fn cached_pages(&self) -> usize {
            self.cache.len()
        }

        pub fn page_geometry(&mut self, id: PageId) -> Option<Rc<ChartGeometry>> {
            if let Some(hit) = self.cache.get(&id) {
                return Some(Rc::clone(hit));
            }
            let geometry = {
                let session = self.session.borrow();
                page_geometry(session.deck(), id, &self.config)?
            };
            tracing::trace!(page_id = id, kind = geometry.name(), "geometry cached");
            let geometry = Rc::new(geometry);
            self.cache.insert(id, Rc::clone(&geometry));
            Some(geometry)
        }

        pub fn current_geometry(&mut self) -> Option<Rc<ChartGeometry>> {
            let id = self.session.borrow().current_id();
            self.page_geometry(id)
        }

        /// Score comparison for the current radar page while its detail table is open.
        pub fn detail_table(&self) -> Option<ScoreTable> {
            let session = self.session.borrow();
            if !session.disclosure().detail_table_open() {
                return None;
            }
            match session.current_page().chart()? {
                Chart::Radar(radar) => Some(radar_score_table(radar)),
                _ => None,
            }
        }

        /// SVG for the current page, with the selected disclosure item marked active.
        ///
        /// `Ok(None)` when the page has no chart; tabular charts have no SVG form and fail.
        pub fn render_current_svg(&mut self) -> Result<Option<String>> {
            let (id, active_item) = {
                let session = self.session.borrow();
                (session.current_id(), session.disclosure().active_item())
            };
            let Some(geometry) = self.page_geometry(id) else {
                return Ok(None);
            };
            let options = SvgRenderOptions {
                diagram_id: Some(sanitize_svg_id(&format!("page-{id}"))),
                title: None,
                active_item,
            };
            Ok(Some(folio_render::svg::render_svg(&geometry, &options)?))
        }

        #[cfg(feature = "raster")]
        pub fn render_current_png(
            &mut self,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Option<Vec<u8>>> {
            let Some(svg) = self.render_current_svg()? else {
                return Ok(None);
            };
            Ok(Some(raster::svg_to_png(&svg, raster)?))
        }
    }

    impl std::fmt::Debug for Presenter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Presenter")
                .field("current_id", &self.session.try_borrow().map(|s| s.current_id()).ok())
                .field("cached_pages", &self.cache.len())
                .finish()
        }
    }
}
