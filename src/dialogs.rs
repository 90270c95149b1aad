//! Blocking confirmation prompt and in-place loading indicator.

pub(crate) fn loading_markup(message: &str) -> String {
    format!(
        "<div class=\"text-center py-4\">\
         <div class=\"spinner-border text-primary\" role=\"status\">\
         <span class=\"visually-hidden\">Loading...</span>\
         </div>\
         <p class=\"mt-2\">{}</p>\
         </div>",
        message
    )
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::loading_markup;
    use crate::config::DEFAULT_LOADING_TEXT;

    /// Ask the user to confirm; run the action only on acceptance.
    ///
    /// A dismissed or failed prompt counts as a decline.
    pub fn confirm_action(message: &str, action: impl FnOnce()) {
        let confirmed = gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or(false);
        if confirmed {
            action();
        }
    }

    /// Replace an element's content with a spinner and a message.
    ///
    /// Unknown ids are a no-op. Prior content is not preserved; whoever
    /// started the load is expected to replace the spinner later.
    pub fn show_loading(element_id: &str, message: Option<&str>) {
        let Some(element) = gloo_utils::document().get_element_by_id(element_id) else {
            return;
        };
        element.set_inner_html(&loading_markup(message.unwrap_or(DEFAULT_LOADING_TEXT)));
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::{confirm_action, show_loading};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOADING_TEXT;

    #[test]
    fn markup_carries_the_message() {
        let markup = loading_markup("Fetching rooms...");
        assert!(markup.contains("Fetching rooms..."));
        assert!(markup.contains("spinner-border"));
    }

    #[test]
    fn default_message_is_available_for_callers() {
        assert!(loading_markup(DEFAULT_LOADING_TEXT).contains("Loading..."));
    }
}
