use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{get_element, listen};
use crate::util::init_logging;
use crate::{garden, quest};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Quest,
    Coloring,
}

impl Page {
    fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Page::Quest),
            "/coloring" => Some(Page::Coloring),
            _ => None,
        }
    }

    fn section_id(self) -> &'static str {
        match self {
            Page::Quest => "page-quest",
            Page::Coloring => "page-coloring",
        }
    }

    fn nav_id(self) -> &'static str {
        match self {
            Page::Quest => "nav-quest",
            Page::Coloring => "nav-coloring",
        }
    }
}

const PAGES: [Page; 2] = [Page::Quest, Page::Coloring];

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    if let Err(err) = init_logging(&window) {
        web_sys::console::warn_1(&err);
    }

    if document.ready_state() == "loading" {
        let loaded_window = window.clone();
        let loaded_document = document.clone();
        listen(&document, "DOMContentLoaded", move |_| {
            if let Err(err) = start_app(&loaded_window, &loaded_document) {
                log::error!("failed to start: {err:?}");
            }
        })?;
        return Ok(());
    }
    start_app(&window, &document)
}

fn start_app(window: &Window, document: &Document) -> Result<(), JsValue> {
    let path = window.location().pathname()?;
    let Some(page) = Page::from_path(&path) else {
        log::info!("unknown route {path}, redirecting");
        return window.location().replace("/");
    };
    log::debug!("route {path} -> {page:?}");

    for candidate in PAGES {
        let section: HtmlElement = get_element(document, candidate.section_id())?;
        section.set_hidden(candidate != page);
        let link: HtmlElement = get_element(document, candidate.nav_id())?;
        link.set_class_name(if candidate == page {
            "app-nav__link app-nav__link--active"
        } else {
            "app-nav__link"
        });
        if candidate == page {
            let _ = link.set_attribute("aria-current", "page");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }

    match page {
        Page::Quest => quest::mount(window, document),
        Page::Coloring => garden::mount(window, document),
    }
}
