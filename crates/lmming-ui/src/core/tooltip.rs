//! Tooltip activation plan for elements that opted in through a marker attribute.

use crate::core::markers::GateConfig;

/// Global path of the tooltip constructor provided by the page's UI library.
pub const TOOLTIP_LIBRARY_PATH: [&str; 2] = ["bootstrap", "Tooltip"];

/// Which elements get a tooltip and which constructor activates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipPlan {
    /// Selector matching opted-in elements.
    pub selector: String,
    /// Global path segments of the constructor.
    pub library: Vec<&'static str>,
}

impl TooltipPlan {
    /// Build the plan from the gate configuration.
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            selector: config.tooltip_selector.clone(),
            library: TOOLTIP_LIBRARY_PATH.to_vec(),
        }
    }

    /// Dotted constructor path for log messages.
    #[must_use]
    pub fn library_path(&self) -> String {
        self.library.join(".")
    }
}

/// Result of activating tooltips over a set of elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation<E> {
    /// Elements the library accepted.
    pub activated: usize,
    /// Errors for the elements it rejected, in document order.
    pub failures: Vec<E>,
}

/// Run `activate` on every target. A failure does not stop the remaining targets,
/// since tooltips already constructed stay live on the page.
pub fn activate_each<T, E>(
    targets: &[T],
    mut activate: impl FnMut(&T) -> Result<(), E>,
) -> Activation<E> {
    let mut outcome = Activation {
        activated: 0,
        failures: Vec::new(),
    };
    for target in targets {
        match activate(target) {
            Ok(()) => outcome.activated += 1,
            Err(err) => outcome.failures.push(err),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_targets_bootstrap_marker() {
        let plan = TooltipPlan::from_config(&GateConfig::default());
        assert_eq!(plan.selector, "[data-bs-toggle=\"tooltip\"]");
        assert_eq!(plan.library_path(), "bootstrap.Tooltip");
    }

    #[test]
    fn plan_follows_configured_selector() {
        let config = GateConfig::from_json(r#"{"tooltip_selector": "[data-tip]"}"#).unwrap();
        assert_eq!(TooltipPlan::from_config(&config).selector, "[data-tip]");
    }

    #[test]
    fn activation_continues_past_a_rejected_element() {
        let targets = ["a", "b", "broken", "d", "e"];
        let outcome = activate_each(&targets, |target| {
            if *target == "broken" {
                Err(format!("cannot attach to {target}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(outcome.activated, 4);
        assert_eq!(outcome.failures, vec!["cannot attach to broken".to_string()]);
    }

    #[test]
    fn activation_over_no_elements_is_empty() {
        let outcome = activate_each::<&str, String>(&[], |_| Ok(()));
        assert_eq!(
            outcome,
            Activation {
                activated: 0,
                failures: Vec::new(),
            }
        );
    }
}
