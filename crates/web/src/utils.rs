// =============================================================================
// Folio Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Inline Style Utilities
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Get the document object.
pub fn document() -> Document {
    window().document().expect("No document object available")
}

/// Look up an element by id.
pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// First element matching a CSS selector, if any.
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

/// Every element matching a CSS selector, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(list) = document().query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    found.push(el);
                }
            }
        }
    }
    found
}

/// Claim a wiring marker on an element.
///
/// Returns true the first time it is called for `el` with `key`, false on
/// every later call. Event wiring uses this so a re-init only attaches
/// handlers to elements that appeared since the previous init.
pub fn mark_once(el: &Element, key: &str) -> bool {
    if el.has_attribute(key) {
        return false;
    }
    let _ = el.set_attribute(key, "");
    true
}

// -----------------------------------------------------------------------------
// 2. Inline Style Utilities
// -----------------------------------------------------------------------------

/// Set an inline transform on an element. Non-HTML nodes are ignored.
pub fn set_transform(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("transform", value);
    }
}

/// Clear the inline transform on an element.
pub fn clear_transform(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property("transform");
    }
}
