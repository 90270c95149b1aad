//! Debounced dispatch for the room search box.

use crate::config::SEARCHING_TEXT;

pub(crate) fn searching_markup() -> String {
    format!(
        "<div class=\"text-center py-3\">\
         <div class=\"spinner-border\" role=\"status\"></div> {}\
         </div>",
        SEARCHING_TEXT
    )
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::searching_markup;
    use crate::config::{DEBOUNCE_MS, SEARCH_RESULTS_ID};
    use gloo_timers::callback::Timeout;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    /// Debounces keystrokes in a search field into query dispatches.
    ///
    /// Every keystroke replaces the pending timeout, so only the value of the
    /// last keystroke within a quiet window reaches the query callback.
    pub struct SearchDispatcher {
        pending: Rc<RefCell<Option<Timeout>>>,
        on_query: Rc<dyn Fn(&str)>,
    }

    impl SearchDispatcher {
        pub fn new(on_query: impl Fn(&str) + 'static) -> Self {
            Self {
                pending: Rc::new(RefCell::new(None)),
                on_query: Rc::new(on_query),
            }
        }

        /// Listen for input events on the field for the rest of the page session.
        pub fn attach(self, input: &HtmlInputElement) {
            let field = input.clone();
            let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                self.schedule(field.value().trim().to_string());
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ =
                input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref());
            handler.forget();
        }

        fn schedule(&self, query: String) {
            let pending = self.pending.clone();
            let on_query = self.on_query.clone();
            let handle = Timeout::new(DEBOUNCE_MS, move || {
                on_query(&query);
                // Clear the handle after execution
                pending.replace(None);
            });
            // Replacing the stored handle cancels any pending dispatch
            self.pending.replace(Some(handle));
        }
    }

    impl Default for SearchDispatcher {
        fn default() -> Self {
            Self::new(|query| dispatch_search(query))
        }
    }

    /// Default dispatch: log the query and toggle the results placeholder.
    ///
    /// Actual querying belongs to the page script that installs its own
    /// callback through [`SearchDispatcher::new`].
    pub fn dispatch_search(query: &str) {
        log::info!("Search query: {}", query);

        let Some(results) = gloo_utils::document().get_element_by_id(SEARCH_RESULTS_ID) else {
            return;
        };
        if query.is_empty() {
            results.set_inner_html("");
        } else {
            results.set_inner_html(&searching_markup());
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::{dispatch_search, SearchDispatcher};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_shows_a_spinner_and_label() {
        let markup = searching_markup();
        assert!(markup.contains("spinner-border"));
        assert!(markup.contains("Searching..."));
    }
}
