//! Error types for the selection gate bindings.
//!
//! None of these reach the user. The exported handlers log them to the
//! browser console and fall back to a no-op.

use thiserror::Error;

/// Primary error type for configuration and DOM operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A configuration field held a value the gate cannot use.
    #[error("invalid configuration field `{field}`")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {detail}")]
    ConfigParse {
        /// Parser error detail.
        detail: String,
    },
    /// The document rejected a selector.
    #[error("selector `{selector}` rejected: {detail}")]
    Selector {
        /// Selector passed to the query.
        selector: String,
        /// Browser-provided detail.
        detail: String,
    },
    /// A change notification could not be built or dispatched.
    #[error("change dispatch failed: {detail}")]
    Dispatch {
        /// Browser-provided detail.
        detail: String,
    },
    /// The tooltip library constructor is not present on the page.
    #[error("tooltip library `{path}` not found")]
    TooltipLibraryMissing {
        /// Dotted global path that was resolved.
        path: String,
    },
    /// The tooltip library refused to activate an element.
    #[error("tooltip activation failed: {detail}")]
    TooltipInit {
        /// Library-provided detail.
        detail: String,
    },
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn display_includes_context() {
        let err = UiError::Selector {
            selector: ".checkable[".into(),
            detail: "SyntaxError".into(),
        };
        assert_eq!(
            err.to_string(),
            "selector `.checkable[` rejected: SyntaxError"
        );
        assert_eq!(
            UiError::InvalidConfig { field: "row_selector" }.to_string(),
            "invalid configuration field `row_selector`"
        );
    }

    #[test]
    fn json_errors_map_to_config_parse() {
        let err = serde_json::from_str::<u8>("nope").map_err(UiError::from);
        assert!(matches!(err, Err(UiError::ConfigParse { .. })));
    }
}
