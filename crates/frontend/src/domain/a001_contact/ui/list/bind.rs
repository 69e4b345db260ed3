//! Wiring of DOM events to `ContactsListController`.

use std::rc::Rc;

use contracts::domain::a001_contact::list_page::{
    ALL_CONTACT_LIST_ID, CONTACT_CHECKBOX_NAME, DELETE_CONTACTS_BUTTON_ID,
    EDIT_CONTACT_BUTTON_NAME, NAVIGATION_URL_ATTR, NEXT_PAGE_ID, PREVIOUS_PAGE_ID,
    SEND_EMAIL_BUTTON_ID, SHOW_CONTACT_BUTTON_NAME,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

use super::controller::{ClickOutcome, ContactsListController};
use super::view::{element_by_id, DomContactsListView};
use crate::shared::config::PageConfig;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::error::{ContactsPageError, PageResult};
use crate::shared::session_store::{BrowserSessionStore, KeyValueStore, MemoryStore};

pub type BrowserContactsListController =
    ContactsListController<DomContactsListView, Rc<dyn KeyValueStore>, BrowserDialogs>;

/// Resolve the page, run the load-time checks and bind every handler.
///
/// Nothing is bound when a required element is missing.
pub fn mount_contacts_list(window: Window, document: Document, config: PageConfig) -> PageResult<()> {
    let view = DomContactsListView::attach(window.clone(), document.clone())?;
    let controller = Rc::new(ContactsListController::new(
        view,
        open_session_store(),
        BrowserDialogs::new(window),
        config,
    ));

    controller.on_load()?;
    bind_checkboxes(&document, &controller)?;

    listen_click(&element_by_id(&document, NEXT_PAGE_ID)?, &controller, |c, link| {
        c.on_next_page(&href(link))
    })?;
    listen_click(&element_by_id(&document, PREVIOUS_PAGE_ID)?, &controller, |c, link| {
        c.on_previous_page(&href(link))
    })?;
    listen_click(&element_by_id(&document, SEND_EMAIL_BUTTON_ID)?, &controller, |c, link| {
        c.on_send_email(&href(link))
    })?;
    listen_click(&element_by_id(&document, DELETE_CONTACTS_BUTTON_ID)?, &controller, |c, link| {
        c.on_delete(&href(link))
    })?;
    listen_click(&element_by_id(&document, ALL_CONTACT_LIST_ID)?, &controller, |c, _| {
        c.on_show_all_contacts()
    })?;

    for name in [SHOW_CONTACT_BUTTON_NAME, EDIT_CONTACT_BUTTON_NAME] {
        for button in elements_by_name(&document, name) {
            listen_click(&button, &controller, |c, button| {
                c.on_row_action(button.get_attribute(NAVIGATION_URL_ATTR).as_deref())
            })?;
        }
    }

    log::info!("contacts list page ready");
    Ok(())
}

fn open_session_store() -> Rc<dyn KeyValueStore> {
    match BrowserSessionStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("{}; selection is kept for this page only", err);
            Rc::new(MemoryStore::new())
        }
    }
}

fn bind_checkboxes(document: &Document, controller: &Rc<BrowserContactsListController>) -> PageResult<()> {
    for element in elements_by_name(document, CONTACT_CHECKBOX_NAME) {
        let Ok(checkbox) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let controller = Rc::clone(controller);
        let target = checkbox.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(err) = controller.on_contact_toggled(&target.value(), target.checked()) {
                log::error!("failed to store checked contact {}: {}", target.value(), err);
            }
        });
        checkbox
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(ContactsPageError::dom)?;
        // обработчик живёт до ухода со страницы
        closure.forget();
    }
    Ok(())
}

fn listen_click<F>(
    element: &Element,
    controller: &Rc<BrowserContactsListController>,
    handler: F,
) -> PageResult<()>
where
    F: Fn(&BrowserContactsListController, &Element) -> ClickOutcome + 'static,
{
    let controller = Rc::clone(controller);
    let target = element.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let outcome = handler(&controller, &target);
        log::debug!("#{} click: {:?}", target.id(), outcome);
        if outcome.prevents_default() {
            event.prevent_default();
        }
    });
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(ContactsPageError::dom)?;
    closure.forget();
    Ok(())
}

fn href(link: &Element) -> String {
    link.get_attribute("href").unwrap_or_default()
}

fn elements_by_name(document: &Document, name: &str) -> Vec<Element> {
    let nodes = document.get_elements_by_name(name);
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
