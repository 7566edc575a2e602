//! Page-supplied configuration.

use crate::core::lifecycle::DocumentPhase;
use crate::core::markers::GateConfig;
use gloo::console;
use gloo::utils::document;
use std::cell::OnceCell;
use std::rc::Rc;

/// Id of the optional `<script type="application/json">` override element.
pub const CONFIG_ELEMENT_ID: &str = "lmming-ui-config";

thread_local! {
    static ACTIVE: OnceCell<Rc<GateConfig>> = const { OnceCell::new() };
}

/// Read the override element, falling back to defaults when it is absent or invalid.
#[must_use]
pub fn load_config() -> GateConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return GateConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return GateConfig::default();
    }
    GateConfig::from_json(&raw).unwrap_or_else(|err| {
        console::warn!("lmming-ui config ignored", err.to_string());
        GateConfig::default()
    })
}

/// Configuration in effect for this page. While the document is still
/// loading the override element may not be parsed yet, so the result is
/// re-read on every call and cached only once parsing has finished.
#[must_use]
pub fn active_config() -> Rc<GateConfig> {
    ACTIVE.with(|cell| {
        if let Some(config) = cell.get() {
            return Rc::clone(config);
        }
        let config = Rc::new(load_config());
        if DocumentPhase::from_ready_state(&document().ready_state()).config_is_final() {
            let _ = cell.set(Rc::clone(&config));
        }
        config
    })
}
