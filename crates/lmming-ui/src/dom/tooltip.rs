//! Tooltip activation through the page's UI library.

use crate::core::tooltip::{TooltipPlan, activate_each};
use crate::dom::{describe, query_all};
use crate::error::UiError;
use gloo::console;
use gloo::utils::document;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn resolve_constructor(path: &[&str]) -> Option<Function> {
    let mut current: JsValue = js_sys::global().into();
    for segment in path {
        current = Reflect::get(&current, &JsValue::from_str(segment)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    current.dyn_into::<Function>().ok()
}

/// Construct one tooltip per opted-in element. Returns the number activated.
/// An element the library throws on is logged and skipped.
///
/// # Errors
/// Returns [`UiError::TooltipLibraryMissing`] when the constructor is not on the
/// page and [`UiError::Selector`] for a rejected selector.
pub fn init_tooltips(plan: &TooltipPlan) -> Result<usize, UiError> {
    let elements = query_all(&document(), &plan.selector)?;
    if elements.is_empty() {
        return Ok(0);
    }
    let constructor =
        resolve_constructor(&plan.library).ok_or_else(|| UiError::TooltipLibraryMissing {
            path: plan.library_path(),
        })?;
    let outcome = activate_each(&elements, |element| {
        Reflect::construct(&constructor, &Array::of1(element))
            .map(|_| ())
            .map_err(|err| UiError::TooltipInit {
                detail: describe(&err),
            })
    });
    for err in &outcome.failures {
        console::warn!("tooltip skipped", err.to_string());
    }
    Ok(outcome.activated)
}
