//! Transient toast notices for status feedback.
//!
//! All notices share one lazily created container, looked up by its fixed id
//! and never rebuilt within a page session. Each notice is an independent
//! dismissible element that removes itself once its dismiss transition ends.

/// Severity of a toast notice, controlling its visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastLevel {
    /// Map a level name to a severity. Unknown names read as `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastLevel::Success,
            "error" => ToastLevel::Error,
            "warning" => ToastLevel::Warning,
            _ => ToastLevel::Info,
        }
    }

    /// Toolkit style suffix. The error level uses the toolkit's "danger" style.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "danger",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        }
    }
}

pub(crate) fn toast_classes(level: ToastLevel) -> String {
    format!(
        "toast align-items-center text-white bg-{} border-0",
        level.css_class()
    )
}

pub(crate) fn toast_body_markup(message: &str) -> String {
    format!(
        "<div class=\"d-flex\">\
         <div class=\"toast-body\">{}</div>\
         <button type=\"button\" class=\"btn-close btn-close-white me-2 m-auto\" \
         data-bs-dismiss=\"toast\"></button>\
         </div>",
        message
    )
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::{toast_body_markup, toast_classes, ToastLevel};
    use crate::config::{TOAST_CONTAINER_ID, TOAST_DISMISS_MS};
    use crate::widgets;
    use std::cell::Cell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    thread_local! {
        // Distinguishes toasts raised within the same millisecond.
        static TOAST_SEQ: Cell<u64> = Cell::new(0);
    }

    fn next_toast_id() -> String {
        let seq = TOAST_SEQ.with(|counter| {
            let current = counter.get();
            counter.set(current.wrapping_add(1));
            current
        });
        format!("toast-{}-{}", js_sys::Date::now() as u64, seq)
    }

    fn ensure_container() -> Option<Element> {
        let document = gloo_utils::document();
        if let Some(existing) = document.get_element_by_id(TOAST_CONTAINER_ID) {
            return Some(existing);
        }
        let container: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        container.set_id(TOAST_CONTAINER_ID);
        container.set_class_name("position-fixed top-0 end-0 p-3");
        let _ = container.style().set_property("z-index", "9999");
        gloo_utils::body().append_child(&container).ok()?;
        Some(container.into())
    }

    fn toast_options(delay_ms: u32) -> JsValue {
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("autohide"), &JsValue::TRUE);
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("delay"),
            &JsValue::from_f64(delay_ms as f64),
        );
        options.into()
    }

    /// Show a dismissible toast notice in the shared page container.
    pub fn show_toast(message: &str, level: ToastLevel) {
        let Some(container) = ensure_container() else {
            log::warn!("Toast container unavailable, dropping notice: {}", message);
            return;
        };

        let document = gloo_utils::document();
        let Ok(element) = document.create_element("div") else {
            return;
        };
        element.set_id(&next_toast_id());
        element.set_class_name(&toast_classes(level));
        let _ = element.set_attribute("role", "alert");
        element.set_inner_html(&toast_body_markup(message));
        if container.append_child(&element).is_err() {
            return;
        }

        // Drop the node from the document once the dismiss transition ends
        let dismissed = element.clone();
        let on_hidden = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            dismissed.remove();
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = element
            .add_event_listener_with_callback("hidden.bs.toast", on_hidden.as_ref().unchecked_ref());
        on_hidden.forget();

        widgets::Toast::new(&element, &toast_options(TOAST_DISMISS_MS)).show();
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::show_toast;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_level_uses_danger_styling() {
        assert_eq!(ToastLevel::Error.css_class(), "danger");
        assert!(toast_classes(ToastLevel::Error).contains("bg-danger"));
    }

    #[test]
    fn other_levels_style_as_their_own_name() {
        assert_eq!(ToastLevel::Success.css_class(), "success");
        assert_eq!(ToastLevel::Warning.css_class(), "warning");
        assert_eq!(ToastLevel::Info.css_class(), "info");
    }

    #[test]
    fn unknown_level_names_read_as_info() {
        assert_eq!(ToastLevel::from_name("success"), ToastLevel::Success);
        assert_eq!(ToastLevel::from_name("fatal"), ToastLevel::Info);
        assert_eq!(ToastLevel::from_name(""), ToastLevel::Info);
        assert_eq!(ToastLevel::default(), ToastLevel::Info);
    }

    #[test]
    fn body_markup_is_dismissible_and_carries_the_message() {
        let markup = toast_body_markup("Room reserved");
        assert!(markup.contains("Room reserved"));
        assert!(markup.contains("data-bs-dismiss=\"toast\""));
        assert!(markup.contains("toast-body"));
    }
}
