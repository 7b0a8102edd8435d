//! Small web-sys lookups shared by the browser-side helpers.

#[cfg(feature = "hydrate")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Log a failed DOM call and carry on.
#[cfg(feature = "hydrate")]
pub fn warn_js(context: &str, err: &wasm_bindgen::JsValue) {
    leptos::logging::warn!("{context}: {err:?}");
}
