//! [`SelectionSurface`] over the live document.

use crate::core::markers::GateConfig;
use crate::core::selection::SelectionSurface;
use crate::dom::{describe, query_all};
use crate::error::UiError;
use gloo::console;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlInputElement};

/// Document-backed selection surface.
pub struct DomSurface<'a> {
    document: Document,
    config: &'a GateConfig,
}

impl<'a> DomSurface<'a> {
    /// Bind to the current document.
    #[must_use]
    pub fn new(config: &'a GateConfig) -> Self {
        Self {
            document: document(),
            config,
        }
    }

    fn elements(&self, selector: &str) -> Vec<Element> {
        query_all(&self.document, selector).unwrap_or_else(|err| {
            console::error!("selection gate query failed", err.to_string());
            Vec::new()
        })
    }

    fn select_all_input(&self) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(self.config.select_all_element_id())?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }
}

fn change_event() -> Result<Event, UiError> {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict("change", &init).map_err(|err| UiError::Dispatch {
        detail: describe(&err),
    })
}

impl SelectionSurface for DomSurface<'_> {
    type Row = HtmlInputElement;

    fn rows(&self) -> Vec<HtmlInputElement> {
        self.elements(&self.config.row_selector)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }

    fn is_checked(&self, row: &HtmlInputElement) -> bool {
        row.checked()
    }

    fn set_checked(&mut self, row: &HtmlInputElement, checked: bool) {
        row.set_checked(checked);
    }

    fn notify_changed(&mut self, row: &HtmlInputElement) {
        let dispatched = change_event().and_then(|event| {
            row.dispatch_event(&event)
                .map_err(|err| UiError::Dispatch {
                    detail: describe(&err),
                })
        });
        if let Err(err) = dispatched {
            console::error!("selection gate change dispatch failed", err.to_string());
        }
    }

    fn select_all(&self) -> Option<bool> {
        self.select_all_input().map(|input| input.checked())
    }

    fn set_select_all(&mut self, checked: bool) {
        if let Some(input) = self.select_all_input() {
            input.set_checked(checked);
        }
    }

    fn set_actions_disabled(&mut self, disabled: bool) -> usize {
        let class = self.config.disabled_class.as_str();
        let mut touched = 0;
        for button in self.elements(&self.config.action_selector) {
            let list = button.class_list();
            let applied = if disabled {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
            match applied {
                Ok(()) => touched += 1,
                Err(err) => console::error!("bulk action class update failed", describe(&err)),
            }
        }
        touched
    }
}
