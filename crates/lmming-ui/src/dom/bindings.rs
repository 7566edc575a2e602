//! Handlers exported to the host page.
//!
//! The JS names match the globals the table templates already call, so
//! `onchange="checkboxChange()"` and `hx-trigger="every 5s [allowRefresh()]"`
//! keep working. Pages without inline handlers call [`install`] once instead.

use crate::core::lifecycle::{ChangeSource, DocumentPhase, InstallGuard};
use crate::core::selection::{
    self, any_row_checked, recompute_bulk_action_availability, refresh_is_allowed,
    toggle_from_select_all,
};
use crate::core::tooltip::TooltipPlan;
use crate::dom::config::active_config;
use crate::dom::surface::DomSurface;
use crate::dom::tooltip::init_tooltips;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

thread_local! {
    static INSTALLED: InstallGuard = const { InstallGuard::new() };
}

/// Module start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Whether the host may refresh without discarding a selection.
#[wasm_bindgen(js_name = allowRefresh)]
#[must_use]
pub fn allow_refresh() -> bool {
    let config = active_config();
    refresh_is_allowed(&DomSurface::new(&config))
}

/// Whether at least one row checkbox is checked.
#[wasm_bindgen(js_name = anyRowChecked)]
#[must_use]
pub fn any_row_checked_export() -> bool {
    let config = active_config();
    any_row_checked(&DomSurface::new(&config))
}

/// Number of checked rows.
#[wasm_bindgen(js_name = selectedCount)]
#[must_use]
pub fn selected_count() -> u32 {
    let config = active_config();
    let count = selection::selected_count(&DomSurface::new(&config));
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Mirror the select-all control onto every row checkbox.
#[wasm_bindgen(js_name = toggleCheckboxes)]
pub fn toggle_checkboxes() {
    let config = active_config();
    let mut surface = DomSurface::new(&config);
    if toggle_from_select_all(&mut surface).is_none() && config.debug {
        console::debug!("select-all control missing", config.select_all_selector());
    }
}

/// Recompute bulk-action availability after a row changed.
#[wasm_bindgen(js_name = checkboxChange)]
pub fn checkbox_change() {
    let config = active_config();
    let mut surface = DomSurface::new(&config);
    let outcome = recompute_bulk_action_availability(&mut surface);
    if config.debug {
        console::debug!(
            "selection gate",
            format!(
                "enabled={} buttons={} cleared_select_all={}",
                outcome.enabled, outcome.buttons, outcome.cleared_select_all
            )
        );
    }
}

/// Activate tooltips on opted-in elements. Returns how many were activated.
#[wasm_bindgen(js_name = initTooltips)]
#[must_use]
pub fn init_tooltips_export() -> u32 {
    let config = active_config();
    match init_tooltips(&TooltipPlan::from_config(&config)) {
        Ok(count) => u32::try_from(count).unwrap_or(u32::MAX),
        Err(err) => {
            console::warn!("tooltips not activated", err.to_string());
            0
        }
    }
}

fn route_change(event: &web_sys::Event) {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let config = active_config();
    let matches_row = element.matches(&config.row_selector).unwrap_or(false);
    match ChangeSource::classify(&element.id(), matches_row, &config) {
        ChangeSource::SelectAll => toggle_checkboxes(),
        ChangeSource::Row => checkbox_change(),
        ChangeSource::Other => {}
    }
}

fn on_ready() {
    checkbox_change();
    let _ = init_tooltips_export();
}

/// Wire delegated change listeners, then bring the buttons in line with the
/// rendered rows and activate tooltips once the document is parsed.
/// Repeated calls are ignored.
#[wasm_bindgen]
pub fn install() {
    if !INSTALLED.with(InstallGuard::claim) {
        return;
    }
    let document = document();
    EventListener::new(&document, "change", route_change).forget();
    if DocumentPhase::from_ready_state(&document.ready_state()).defers_startup() {
        EventListener::once(&document, "DOMContentLoaded", |_event| on_ready()).forget();
    } else {
        on_ready();
    }
}
