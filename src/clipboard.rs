//! Clipboard copy with a selection-based fallback for insecure contexts.

use crate::toast::{show_toast, ToastLevel};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlInputElement};

/// Copy text to the clipboard and report the outcome as a toast.
///
/// Failures never reach the caller; the toast is the only signal.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_string();
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => show_toast("Copied to clipboard", ToastLevel::Success),
            Err(err) => {
                log::warn!(
                    "Clipboard copy failed: {}",
                    crate::http::js_error_message(err, "copy rejected")
                );
                show_toast("Copy failed, please copy manually", ToastLevel::Error);
            }
        }
    });
}

async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = gloo_utils::window();
    let navigator = window.navigator();
    let has_async_api = window.is_secure_context()
        && Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);

    if has_async_api {
        JsFuture::from(navigator.clipboard().write_text(text)).await?;
        return Ok(());
    }
    fallback_copy(text)
}

// Classic select-and-copy through a throwaway off-screen input. The input
// is removed on every path, copy succeeded or not.
fn fallback_copy(text: &str) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_value(text);
    let style = input.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");
    gloo_utils::body().append_child(&input)?;
    let _ = input.focus();
    input.select();

    let result = exec_copy(&document);
    input.remove();

    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(JsValue::from_str("copy command rejected")),
        Err(err) => Err(err),
    }
}

fn exec_copy(document: &Document) -> Result<bool, JsValue> {
    let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))?;
    let exec: Function = exec
        .dyn_into()
        .map_err(|_| JsValue::from_str("execCommand unavailable"))?;
    let outcome = exec.call1(document.as_ref(), &JsValue::from_str("copy"))?;
    Ok(outcome.as_bool().unwrap_or(false))
}
