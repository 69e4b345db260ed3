pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::domain::a001_contact::ui::list::mount_contacts_list;
use crate::shared::config::{load_page_config, PageConfig};

fn run(window: Window, document: Document) {
    let config = load_page_config(&document);
    let level = config
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or_default()
        .to_level();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);

    let config = config.unwrap_or_else(|err| {
        log::error!("{}; using defaults", err);
        PageConfig::default()
    });

    if let Err(err) = mount_contacts_list(window, document, config) {
        log::error!("contacts list page setup failed: {}", err);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() != "loading" {
        run(window, document);
        return;
    }

    let target = document.clone();
    let on_ready = wasm_bindgen::closure::Closure::once_into_js(move || run(window, document));
    if let Err(err) =
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
}
