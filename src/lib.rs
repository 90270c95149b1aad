//! Client-side page utilities for the study room reservation site.
//!
//! Compiled to WebAssembly and loaded by the page. Loading the module wires
//! the page-wide behaviors (tooltips, form validation guards, flash message
//! auto-dismiss, debounced search); the ad-hoc helpers are exported under
//! camelCase names for other page scripts to call.

pub mod config;
pub mod datetime;
pub mod dialogs;
pub mod http;
pub mod search;
pub mod toast;

#[cfg(target_arch = "wasm32")]
pub mod clipboard;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod refresh;
#[cfg(target_arch = "wasm32")]
pub mod widgets;

pub use datetime::{DateParts, DateStyle};
pub use http::{FetchError, RequestOptions};
pub use toast::ToastLevel;

#[cfg(target_arch = "wasm32")]
pub use clipboard::copy_to_clipboard;
#[cfg(target_arch = "wasm32")]
pub use refresh::start_auto_refresh;
#[cfg(target_arch = "wasm32")]
pub use search::SearchDispatcher;
#[cfg(target_arch = "wasm32")]
pub use toast::show_toast;

#[cfg(target_arch = "wasm32")]
mod exports {
    use crate::config::DEFAULT_REFRESH_MS;
    use crate::datetime::{format_date_time, DateStyle};
    use crate::http::{request, RequestOptions};
    use crate::toast::{show_toast, ToastLevel};
    use crate::{clipboard, dialogs, page, refresh};
    use wasm_bindgen::prelude::*;

    /// Module entry point; the page's structure is ready once this runs.
    #[wasm_bindgen(start)]
    pub fn start() {
        // Route panics to the browser console
        console_error_panic_hook::set_once();
        page::init();
    }

    #[wasm_bindgen(js_name = formatDateTime)]
    pub fn format_date_time_js(value: JsValue, format: Option<String>) -> String {
        let style = format
            .as_deref()
            .map(DateStyle::from_selector)
            .unwrap_or_default();
        format_date_time(&value, style)
    }

    #[wasm_bindgen(js_name = confirmAction)]
    pub fn confirm_action_js(message: &str, callback: js_sys::Function) {
        dialogs::confirm_action(message, move || {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                log::warn!("Confirm callback failed: {:?}", err);
            }
        });
    }

    #[wasm_bindgen(js_name = showLoading)]
    pub fn show_loading_js(element_id: &str, message: Option<String>) {
        dialogs::show_loading(element_id, message.as_deref());
    }

    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard_js(text: &str) {
        clipboard::copy_to_clipboard(text);
    }

    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast_js(message: &str, level: Option<String>) {
        let level = level
            .as_deref()
            .map(ToastLevel::from_name)
            .unwrap_or_default();
        show_toast(message, level);
    }

    /// Perform a page request; the returned promise resolves with the parsed
    /// JSON body and rejects with a message describing the failure.
    #[wasm_bindgen(js_name = ajaxRequest)]
    pub async fn ajax_request_js(url: String, options: JsValue) -> Result<JsValue, JsValue> {
        let options: RequestOptions = if options.is_undefined() || options.is_null() {
            RequestOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|err| JsValue::from_str(&err.to_string()))?
        };
        let body: serde_json::Value = request(&url, options)
            .await
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        serde_wasm_bindgen::to_value(&body).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen(js_name = startAutoRefresh)]
    pub fn start_auto_refresh_js(interval_ms: Option<u32>) {
        refresh::start_auto_refresh(interval_ms.unwrap_or(DEFAULT_REFRESH_MS));
    }
}
