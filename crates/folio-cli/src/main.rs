use folio::render::raster::{RasterError, RasterOptions, render_page_png};
use folio::render::{
    HeadlessError, Presenter, ScoreTable, SvgRenderOptions, render_page_svg, sanitize_svg_id,
};
use folio::text::{EmphasisMarker, Span, emphasis_spans, split_lead};
use folio::{
    CompositionTemplate, Deck, DisclosureState, DisclosureTarget, GeometryConfig, Key,
    KeyDispatcher, NavItem, Page, PageId, Renderer, Session,
};
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::io::{BufRead, Read, Write};
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Deck(folio::Error),
    Render(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
    UnknownPage(PageId),
    NoChart(PageId),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Deck(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::UnknownPage(id) => write!(f, "no page with id {id}"),
            CliError::NoChart(id) => write!(f, "page {id} has no chart"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<folio::Error> for CliError {
    fn from(value: folio::Error) -> Self {
        Self::Deck(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Pages,
    Geometry,
    Render,
    Present,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    page: Option<PageId>,
    config: Option<String>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "folio-cli\n\
\n\
USAGE:\n\
  folio-cli [pages] [--pretty] [<deck>|-]\n\
  folio-cli geometry [--page <id>] [--pretty] [--config <file.json>] [<deck>|-]\n\
  folio-cli render --page <id> [--format svg|png] [--scale <n>] [--background <color>] [--id <svg-id>] [--config <file.json>] [--out <path>] [<deck>|-]\n\
  folio-cli present [--config <file.json>] <deck>\n\
\n\
NOTES:\n\
  - Decks are JSON or YAML, picked by file extension; '-' or no path reads JSON from stdin.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to <deck>-<id>.png next to the deck (or ./out.png for stdin).\n\
  - present reads one command per line from stdin and prints one JSON status line per command:\n\
    right | left | goto <id> | toggle <i> | deep-dive | details | home | quit\n\
  - Set FOLIO_LOG (e.g. FOLIO_LOG=debug) to control log output on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "pages" => args.command = Command::Pages,
            "geometry" => args.command = Command::Geometry,
            "render" => args.command = Command::Render,
            "present" => args.command = Command::Present,
            "--pretty" => args.pretty = true,
            "--page" => {
                let id = next_value(&mut it)?;
                args.page = Some(id.parse::<PageId>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn load_deck(input: Option<&str>) -> Result<Deck, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(Deck::from_json_str(&buf)?)
        }
        Some(path) => Ok(Deck::from_path(path)?),
    }
}

fn load_config(path: Option<&str>) -> Result<GeometryConfig, CliError> {
    let Some(path) = path else {
        return Ok(GeometryConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let overrides: Value = serde_json::from_str(&text)?;
    Ok(GeometryConfig::with_overrides(&overrides))
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn default_png_out_path(input: Option<&str>, id: PageId) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => {
            let p = std::path::PathBuf::from(path);
            let stem = p
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "deck".to_string());
            p.with_file_name(format!("{stem}-{id}.png"))
        }
        _ => std::path::PathBuf::from("out.png"),
    }
}

#[derive(Serialize)]
struct PageSummary<'a> {
    id: PageId,
    #[serde(rename = "type")]
    kind: &'a str,
    section: &'a str,
    title: &'a str,
    template: CompositionTemplate,
    renderer: Renderer,
    chart: Option<String>,
}

#[derive(Serialize)]
struct DeckSummary<'a> {
    title: Option<&'a str>,
    sections: &'a [NavItem],
    pages: Vec<PageSummary<'a>>,
}

fn cmd_pages(deck: &Deck, pretty: bool) -> Result<(), CliError> {
    let pages = deck
        .pages()
        .iter()
        .map(|page| {
            let composition = folio::compose(page);
            PageSummary {
                id: page.id,
                kind: page.kind.as_str(),
                section: &page.section,
                title: &page.title,
                template: composition.template,
                renderer: composition.renderer,
                chart: page.chart().map(|c| c.kind().to_string()),
            }
        })
        .collect();
    write_json(
        &DeckSummary {
            title: deck.title(),
            sections: deck.sections(),
            pages,
        },
        pretty,
    )
}

#[derive(Serialize)]
struct PageGeometry {
    id: PageId,
    geometry: Value,
}

fn cmd_geometry(deck: &Deck, args: &Args, config: &GeometryConfig) -> Result<(), CliError> {
    if let Some(id) = args.page {
        let page = deck.page(id).ok_or(CliError::UnknownPage(id))?;
        let chart = page.chart().ok_or(CliError::NoChart(id))?;
        let geometry = folio::render::compute_chart_geometry(chart, config);
        return write_json(&geometry, args.pretty);
    }

    let mut all = Vec::new();
    for page in deck.pages() {
        let Some(chart) = page.chart() else {
            continue;
        };
        let geometry = folio::render::compute_chart_geometry(chart, config);
        all.push(PageGeometry {
            id: page.id,
            geometry: folio::render::geometry_to_json(&geometry).map_err(HeadlessError::from)?,
        });
    }
    write_json(&all, args.pretty)
}

fn cmd_render(deck: &Deck, args: &Args, config: &GeometryConfig) -> Result<(), CliError> {
    let Some(id) = args.page else {
        return Err(CliError::Usage(usage()));
    };
    let page = deck.page(id).ok_or(CliError::UnknownPage(id))?;
    let diagram_id = args
        .diagram_id
        .clone()
        .unwrap_or_else(|| format!("page-{id}"));
    let svg_options = SvgRenderOptions {
        diagram_id: Some(sanitize_svg_id(&diagram_id)),
        title: Some(page.title.clone()).filter(|t| !t.is_empty()),
        active_item: DisclosureState::for_page(page).active_item(),
    };
    match args.render_format {
        RenderFormat::Svg => {
            let svg =
                render_page_svg(deck, id, config, &svg_options)?.ok_or(CliError::NoChart(id))?;
            match args.out.as_deref() {
                None => print!("{svg}"),
                Some(path) => std::fs::write(path, svg)?,
            }
        }
        RenderFormat::Png => {
            let raster = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
            };
            let bytes = render_page_png(deck, id, config, &svg_options, &raster)?
                .ok_or(CliError::NoChart(id))?;
            let out = args
                .out
                .as_deref()
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| default_png_out_path(args.input.as_deref(), id));
            std::fs::write(&out, bytes)?;
            tracing::info!(path = %out.display(), "wrote png");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct PresentStatus<'a> {
    command: &'a str,
    accepted: bool,
    id: PageId,
    progress: String,
    can_prev: bool,
    can_next: bool,
    title: String,
    template: CompositionTemplate,
    section: Option<String>,
    chart: Option<&'static str>,
    bullets: Value,
    expanded: Vec<usize>,
    deep_dive_open: bool,
    detail_table_open: bool,
    detail_table: Option<ScoreTable>,
}

#[derive(Serialize)]
struct BulletOut<'a> {
    lead: Option<&'a str>,
    spans: Vec<Span<'a>>,
    /// Deep-dive line shown under this bullet.
    sub: Option<&'a str>,
}

fn bullets_out(page: &Page) -> Vec<BulletOut<'_>> {
    page.content
        .bullets
        .iter()
        .enumerate()
        .map(|(i, bullet)| {
            let (lead, body) = split_lead(bullet);
            BulletOut {
                lead,
                spans: emphasis_spans(body, EmphasisMarker::Double),
                sub: page.sub_bullet(i),
            }
        })
        .collect()
}

fn present_status<'a>(
    presenter: &mut Presenter,
    command: &'a str,
    accepted: bool,
) -> Result<PresentStatus<'a>, CliError> {
    let chart = presenter.current_geometry().map(|g| g.name());
    let detail_table = presenter.detail_table();
    let session = presenter.session().borrow();
    let progress = session.progress();
    let (current, last) = progress.labels();
    let disclosure = session.disclosure();
    let bullets = serde_json::to_value(bullets_out(session.current_page()))?;
    Ok(PresentStatus {
        command,
        accepted,
        id: session.current_id(),
        progress: format!("{current}/{last}"),
        can_prev: progress.can_prev,
        can_next: progress.can_next,
        title: session.current_page().title.clone(),
        template: session.composition().template,
        section: session
            .section_markers()
            .into_iter()
            .filter(|m| m.reached)
            .last()
            .map(|m| m.label),
        chart,
        bullets,
        expanded: disclosure.expanded_items(),
        deep_dive_open: disclosure.deep_dive_open(),
        detail_table_open: disclosure.detail_table_open(),
        detail_table,
    })
}

fn apply_command(
    session: &Rc<RefCell<Session>>,
    source: &Rc<RefCell<KeyDispatcher>>,
    bound: bool,
    cmd: &str,
    arg: Option<&str>,
) -> bool {
    let toggle = |target| session.borrow_mut().toggle_disclosure(target);
    match cmd {
        "goto" => match arg.and_then(|a| a.parse::<PageId>().ok()) {
            Some(id) => session.borrow_mut().go_to_id(id).moved(),
            None => false,
        },
        "toggle" => match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(index) => toggle(DisclosureTarget::Item(index)),
            None => false,
        },
        "deep-dive" => toggle(DisclosureTarget::DeepDive),
        "details" => toggle(DisclosureTarget::DetailTable),
        "home" => session.borrow_mut().go_home().moved(),
        key => {
            let key = Key::from_name(key);
            let before = session.borrow().current_id();
            if bound {
                source.borrow_mut().dispatch(&key);
            } else {
                session.borrow_mut().handle_key(&key);
            }
            session.borrow().current_id() != before
        }
    }
}

fn cmd_present(deck: Deck, config: GeometryConfig) -> Result<(), CliError> {
    let mut presenter = Presenter::new(Arc::new(deck)).with_config(config);
    let source = Rc::new(RefCell::new(KeyDispatcher::new()));
    let binding = presenter.bind_keyboard(&source);
    let session = Rc::clone(presenter.session());

    write_json(&present_status(&mut presenter, "start", true)?, false)?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        if matches!(cmd, "quit" | "q" | "exit") {
            break;
        }
        let accepted = apply_command(&session, &source, binding.is_some(), cmd, parts.next());
        if !accepted {
            tracing::debug!(command = cmd, "command had no effect");
        }
        write_json(&present_status(&mut presenter, cmd, accepted)?, false)?;
    }

    if let Some(binding) = binding {
        binding.release();
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    match args.command {
        Command::Pages => cmd_pages(&load_deck(args.input.as_deref())?, args.pretty),
        Command::Geometry => cmd_geometry(&load_deck(args.input.as_deref())?, &args, &config),
        Command::Render => cmd_render(&load_deck(args.input.as_deref())?, &args, &config),
        Command::Present => {
            // stdin carries the commands, so the deck must come from a file.
            let Some(path) = args.input.as_deref().filter(|p| *p != "-") else {
                return Err(CliError::Usage(usage()));
            };
            cmd_present(Deck::from_path(path)?, config)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(CliError::NoChart(id)) => {
            eprintln!("{}", CliError::NoChart(id));
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
