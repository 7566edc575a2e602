//! Markers the host page uses to identify gate participants.
//!
//! # Design
//! - Defaults match the markup the table templates already render.
//! - Pages override individual fields through a JSON document; omitted fields keep their default.

use crate::error::UiError;
use serde::Deserialize;

/// Class marking every row checkbox.
pub const DEFAULT_ROW_SELECTOR: &str = ".checkable";
/// Element id of the select-all checkbox.
pub const DEFAULT_SELECT_ALL_ID: &str = "checkAll";
/// Class marking every bulk-action button.
pub const DEFAULT_ACTION_SELECTOR: &str = ".checkbox-action-button";
/// Presentation class applied to disabled bulk-action buttons.
pub const DEFAULT_DISABLED_CLASS: &str = "disabled";
/// Attribute selector for elements that opted into tooltips.
pub const DEFAULT_TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";

/// DOM contract consumed by the selection gate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Selector matching every row checkbox.
    pub row_selector: String,
    /// Element id (without `#`) of the select-all checkbox.
    pub select_all_id: String,
    /// Selector matching every bulk-action button.
    pub action_selector: String,
    /// Class toggled on bulk-action buttons while nothing is selected.
    pub disabled_class: String,
    /// Selector matching elements that receive a tooltip.
    pub tooltip_selector: String,
    /// Log every recompute outcome to the console.
    pub debug: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            row_selector: DEFAULT_ROW_SELECTOR.to_string(),
            select_all_id: DEFAULT_SELECT_ALL_ID.to_string(),
            action_selector: DEFAULT_ACTION_SELECTOR.to_string(),
            disabled_class: DEFAULT_DISABLED_CLASS.to_string(),
            tooltip_selector: DEFAULT_TOOLTIP_SELECTOR.to_string(),
            debug: false,
        }
    }
}

impl GateConfig {
    /// Parse an override document and validate the result.
    ///
    /// # Errors
    /// Returns [`UiError::ConfigParse`] when the document is not valid JSON or
    /// names an unknown field, and [`UiError::InvalidConfig`] when a marker is blank.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank markers, which would otherwise match nothing or everything.
    ///
    /// # Errors
    /// Returns [`UiError::InvalidConfig`] naming the first blank field.
    pub fn validate(&self) -> Result<(), UiError> {
        let fields: [(&'static str, &str); 5] = [
            ("row_selector", &self.row_selector),
            ("select_all_id", self.select_all_element_id()),
            ("action_selector", &self.action_selector),
            ("disabled_class", &self.disabled_class),
            ("tooltip_selector", &self.tooltip_selector),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(UiError::InvalidConfig { field });
            }
        }
        if self.disabled_class.contains(char::is_whitespace) {
            return Err(UiError::InvalidConfig {
                field: "disabled_class",
            });
        }
        Ok(())
    }

    /// Element id of the select-all checkbox, with any leading `#` removed.
    #[must_use]
    pub fn select_all_element_id(&self) -> &str {
        self.select_all_id.trim_start_matches('#')
    }

    /// CSS selector for the select-all checkbox.
    #[must_use]
    pub fn select_all_selector(&self) -> String {
        format!("#{}", self.select_all_element_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_table_markup() {
        let config = GateConfig::default();
        assert_eq!(config.row_selector, ".checkable");
        assert_eq!(config.select_all_selector(), "#checkAll");
        assert_eq!(config.action_selector, ".checkbox-action-button");
        assert_eq!(config.disabled_class, "disabled");
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let config =
            GateConfig::from_json(r#"{"row_selector": ".row-pick", "debug": true}"#).unwrap();
        assert_eq!(config.row_selector, ".row-pick");
        assert_eq!(config.select_all_id, DEFAULT_SELECT_ALL_ID);
        assert!(config.debug);
    }

    #[test]
    fn select_all_selector_tolerates_hash_prefix() {
        let config = GateConfig::from_json(r##"{"select_all_id": "#pickAll"}"##).unwrap();
        assert_eq!(config.select_all_element_id(), "pickAll");
        assert_eq!(config.select_all_selector(), "#pickAll");
    }

    #[test]
    fn select_all_id_made_only_of_hashes_is_rejected() {
        for raw in [r##"{"select_all_id": "#"}"##, r###"{"select_all_id": "##"}"###] {
            assert_eq!(
                GateConfig::from_json(raw),
                Err(UiError::InvalidConfig {
                    field: "select_all_id"
                })
            );
        }
    }

    #[test]
    fn unknown_and_blank_fields_are_rejected() {
        assert!(matches!(
            GateConfig::from_json(r#"{"rows": ".x"}"#),
            Err(UiError::ConfigParse { .. })
        ));
        assert_eq!(
            GateConfig::from_json(r#"{"action_selector": "  "}"#),
            Err(UiError::InvalidConfig {
                field: "action_selector"
            })
        );
        assert_eq!(
            GateConfig::from_json(r#"{"disabled_class": "is disabled"}"#),
            Err(UiError::InvalidConfig {
                field: "disabled_class"
            })
        );
    }
}
