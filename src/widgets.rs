//! JS interop for the page's Bootstrap widgets.
//!
//! Each widget follows the toolkit's construct -> show -> dismiss lifecycle;
//! teardown is signalled back through DOM events (`hidden.bs.toast`).

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Hover/focus tooltip attached to a flagged element.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(target: &Element) -> Tooltip;
}

#[wasm_bindgen]
extern "C" {
    /// Dismissible alert banner.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert")]
    pub fn new(target: &Element) -> Alert;

    /// Plays the dismiss transition and removes the banner.
    #[wasm_bindgen(method, js_class = "Alert")]
    pub fn close(this: &Alert);
}

#[wasm_bindgen]
extern "C" {
    /// Transient toast notice.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Toast")]
    pub fn new(target: &Element, options: &JsValue) -> Toast;

    #[wasm_bindgen(method, js_class = "Toast")]
    pub fn show(this: &Toast);
}
