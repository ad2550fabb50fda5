use std::{cell::Cell, rc::Rc};

use gloo::events::EventListener;
use log::LevelFilter;
use once_cell::unsync::OnceCell;

use crate::{
    logger::ConsoleLogger,
    requests::{BrowserFetcher, BrowserSpawner, BrowserTransport},
};

mod bindings;
mod config;
mod context;
mod error;

pub use self::{
    bindings::{Bindings, NO_SELECTION},
    config::PageConfig,
    context::{DomPage, PageContext},
    error::{PageError, PageResult},
};

pub type BrowserBindings = Bindings<DomPage, BrowserTransport, BrowserSpawner>;

thread_local! {
    static BINDINGS: OnceCell<Rc<BrowserBindings>> = OnceCell::new();
    static STARTED: Cell<bool> = Cell::new(false);
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn has_inline_handler(element: &web_sys::Element, event: &str) -> bool {
    element.has_attribute(&format!("on{}", event))
}

fn init() -> Rc<BrowserBindings> {
    let config = match document().and_then(|d| d.body()) {
        Some(body) => PageConfig::from_body(&body),
        None => PageConfig::default(),
    };
    log::debug!("page config: {:?}", config);

    Rc::new(Bindings::new(
        DomPage,
        BrowserFetcher::new(BrowserTransport, BrowserSpawner),
        config,
    ))
}

/// Runs `action` against the page bindings, building them on first use.
pub fn with_bindings<R>(action: impl FnOnce(&BrowserBindings) -> R) -> R {
    BINDINGS.with(|cell| action(cell.get_or_init(init)))
}

/// Page entry point: loads the test selector if the page has one and hooks
/// the run and delay triggers up to their actions.
///
/// Pages that still call the exported handlers inline keep that path alone:
/// no selector load when `<body>` has an `onload`, no listener on a trigger
/// with an `onclick`.
pub fn start() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    ConsoleLogger::install(level);

    if STARTED.with(|started| started.replace(true)) {
        log::warn!("page bindings already started");
        return;
    }
    let bindings = BINDINGS.with(|cell| cell.get_or_init(init).clone());

    let config = bindings.config();
    let inline_onload = document()
        .and_then(|d| d.body())
        .map_or(false, |body| has_inline_handler(&body, "load"));
    if inline_onload {
        log::debug!("selector load left to the page's inline onload");
    } else if bindings.page().has_element(&config.selector_container) {
        bindings.load_test_selector();
    }
    on_click(&bindings, &config.run_trigger, BrowserBindings::run_selected_test);
    on_click(&bindings, &config.delay_trigger, BrowserBindings::fetch_delayed);

    log::info!("latency page ready");
}

fn on_click(bindings: &Rc<BrowserBindings>, id: &str, action: fn(&BrowserBindings)) {
    let Some(trigger) = document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("no `{}` trigger on this page", id);
        return;
    };
    if has_inline_handler(&trigger, "click") {
        log::debug!("`{}` has an inline onclick, not adding a listener", id);
        return;
    }

    let bindings = bindings.clone();
    EventListener::new(&trigger, "click", move |event| {
        event.prevent_default();
        action(&bindings);
    })
    .forget();
}
