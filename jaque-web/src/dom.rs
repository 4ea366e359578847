use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, Node, Storage, Window};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("document body unavailable")]
    NoBody,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it to the expected element type.
///
/// Missing elements and elements of another type both yield `None`.
#[must_use]
pub fn element_by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Like [`element_by_id`], logging the absence so skipped wiring is visible in debug builds.
#[must_use]
pub fn optional_element<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    let found = element_by_id::<T>(doc, id);
    if found.is_none() {
        log::debug!("#{id} not present; skipping its behaviour");
    }
    found
}

/// Whether an event target lies inside `container` (the container itself included).
#[must_use]
pub fn contains_target(container: &Node, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// Set or clear one inline style property.
pub fn set_style(el: &HtmlElement, property: &str, value: Option<&str>) {
    let style = el.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(err) = result {
        log::warn!("failed to update {property}: {}", js_error_message(&err));
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console, bypassing the logger.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable
/// (disabled storage, sandboxed frames).
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
