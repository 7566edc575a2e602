//! Browser bindings for the selection gate.
//!
//! # Design
//! - Query the live document on every call; the host may re-render rows at any time.
//! - Errors are logged to the console and never thrown back into the page.

pub mod bindings;
pub mod config;
pub mod surface;
pub mod tooltip;

use crate::error::UiError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Collect every element matching `selector` in document order.
///
/// # Errors
/// Returns [`UiError::Selector`] when the browser rejects the selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| UiError::Selector {
            selector: selector.to_string(),
            detail: describe(&err),
        })?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Render a thrown JS value for log output.
#[must_use]
pub fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
