//! Page lifecycle decisions for the browser bindings, kept DOM-free for native testing.
//!
//! # Design
//! - Delegated `change` events are classified here; the DOM layer only reads the target.
//! - Config is cached only once the document is parsed, so a late override element still applies.

use crate::core::markers::GateConfig;
use std::cell::Cell;

/// Which gate participant a delegated `change` event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    /// The select-all checkbox.
    SelectAll,
    /// A row checkbox.
    Row,
    /// Any other control on the page.
    Other,
}

impl ChangeSource {
    /// Classify an event target from its id and whether it matches the row selector.
    /// The select-all control wins when it also carries the row marker.
    #[must_use]
    pub fn classify(target_id: &str, matches_row: bool, config: &GateConfig) -> Self {
        if !target_id.is_empty() && target_id == config.select_all_element_id() {
            Self::SelectAll
        } else if matches_row {
            Self::Row
        } else {
            Self::Other
        }
    }
}

/// Parse state of the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentPhase {
    /// `document.readyState` is `"loading"`.
    Loading,
    /// `"interactive"` or `"complete"`.
    Parsed,
}

impl DocumentPhase {
    /// Map `document.readyState` onto a phase.
    #[must_use]
    pub fn from_ready_state(state: &str) -> Self {
        if state == "loading" {
            Self::Loading
        } else {
            Self::Parsed
        }
    }

    /// Startup work (initial recompute, tooltips) has to wait for `DOMContentLoaded`.
    #[must_use]
    pub const fn defers_startup(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The config element, if any, has been parsed and may be cached.
    #[must_use]
    pub const fn config_is_final(self) -> bool {
        matches!(self, Self::Parsed)
    }
}

/// One-shot guard so repeated `install()` calls wire listeners only once.
#[derive(Debug, Default)]
pub struct InstallGuard {
    claimed: Cell<bool>,
}

impl InstallGuard {
    /// Fresh, unclaimed guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// True for the first caller only.
    #[must_use]
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_source_routes_select_all_rows_and_others() {
        let config = GateConfig::default();
        assert_eq!(
            ChangeSource::classify("checkAll", false, &config),
            ChangeSource::SelectAll
        );
        assert_eq!(
            ChangeSource::classify("checkAll", true, &config),
            ChangeSource::SelectAll
        );
        assert_eq!(
            ChangeSource::classify("row-7", true, &config),
            ChangeSource::Row
        );
        assert_eq!(ChangeSource::classify("", true, &config), ChangeSource::Row);
        assert_eq!(
            ChangeSource::classify("", false, &config),
            ChangeSource::Other
        );
        assert_eq!(
            ChangeSource::classify("search", false, &config),
            ChangeSource::Other
        );
    }

    #[test]
    fn change_source_uses_configured_select_all_id() {
        let config = GateConfig::from_json(r##"{"select_all_id": "#pickAll"}"##).unwrap();
        assert_eq!(
            ChangeSource::classify("pickAll", false, &config),
            ChangeSource::SelectAll
        );
        assert_eq!(
            ChangeSource::classify("checkAll", false, &config),
            ChangeSource::Other
        );
    }

    #[test]
    fn document_phase_defers_startup_and_caching_while_loading() {
        let loading = DocumentPhase::from_ready_state("loading");
        assert_eq!(loading, DocumentPhase::Loading);
        assert!(loading.defers_startup());
        assert!(!loading.config_is_final());

        for state in ["interactive", "complete"] {
            let parsed = DocumentPhase::from_ready_state(state);
            assert_eq!(parsed, DocumentPhase::Parsed);
            assert!(!parsed.defers_startup());
            assert!(parsed.config_is_final());
        }
    }

    #[test]
    fn install_guard_admits_only_the_first_call() {
        let guard = InstallGuard::new();
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
    }
}
