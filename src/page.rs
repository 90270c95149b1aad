//! Load-time wiring of page-wide behaviors.
//!
//! Runs once when the module loads. Each behavior isolates its own failures
//! so one broken widget cannot keep the rest of the page from initializing.

use crate::config::{FLASH_DISMISS_MS, SEARCH_INPUT_ID};
use crate::search::SearchDispatcher;
use crate::widgets;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

/// Wire every load-time behavior.
pub fn init() {
    init_tooltips();
    init_form_validation();
    auto_dismiss_flash_messages();
    init_search();
}

fn elements_matching(selector: &str) -> Vec<Element> {
    let Ok(list) = gloo_utils::document().query_selector_all(selector) else {
        log::warn!("Selector lookup failed: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach the toolkit's tooltip widget to every flagged element.
pub fn init_tooltips() {
    for element in elements_matching("[data-bs-toggle=\"tooltip\"]") {
        let _tooltip = widgets::Tooltip::new(&element);
    }
}

/// Block submission of forms that fail their built-in constraint checks.
///
/// Valid or not, the form gets the `was-validated` marker class so the
/// toolkit's validation styling kicks in; error text is left to the toolkit.
pub fn init_form_validation() {
    for element in elements_matching("form") {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let guarded = form.clone();
        let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !guarded.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = guarded.class_list().add_1("was-validated");
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }
}

/// Schedule every non-error alert banner to close itself.
///
/// Each banner gets its own fire-and-forget timer; closing a banner the user
/// already dismissed is a harmless no-op.
pub fn auto_dismiss_flash_messages() {
    for alert in elements_matching(".alert:not(.alert-danger)") {
        Timeout::new(FLASH_DISMISS_MS, move || {
            widgets::Alert::new(&alert).close();
        })
        .forget();
    }
}

/// Hook the search box up to the debounced dispatcher, if the page has one.
pub fn init_search() {
    let Some(element) = gloo_utils::document().get_element_by_id(SEARCH_INPUT_ID) else {
        return;
    };
    let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
        log::warn!("#{} is not an input field", SEARCH_INPUT_ID);
        return;
    };
    SearchDispatcher::default().attach(&input);
}
