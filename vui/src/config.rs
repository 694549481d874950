//! Widget configuration types.
//!
//! Every field has a default matching the conventional markup hooks, so a
//! page only overrides what differs. All configs deserialize with missing
//! fields defaulted:
//!
//! ```ignore
//! let config: TypeaheadConfig = serde_json::from_str(r#"{ "maxResults": 5 }"#)?;
//! assert_eq!(config.typeahead, ".js-typeahead");
//! ```

use serde::Deserialize;

use crate::classes;

/// Per-page configuration for typeahead widgets.
///
/// One config mounts every element matching `typeahead`; each match becomes
/// an independent instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeaheadConfig {
    /// Selector for the wrappers holding a `<label>` and `<select>`.
    pub typeahead: String,

    /// Class hook added to the generated toggle button.
    pub toggle_btn: String,

    /// Class added to the enhanced markup once mounted.
    pub ready_class: String,

    /// Class added to the dropdown while open.
    pub active_class: String,

    /// Class marking the highlighted option.
    pub selected_class: String,

    /// Label of the placeholder shown when nothing matches.
    pub no_matches_text: String,

    /// Class of the placeholder entry.
    pub no_matches_class: String,

    /// Maximum number of options listed at once. Never below 1.
    #[serde(deserialize_with = "at_least_one")]
    pub max_results: usize,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            typeahead: ".js-typeahead".into(),
            toggle_btn: ".js-typeahead-btn".into(),
            ready_class: classes::IS_READY.into(),
            active_class: classes::IS_ACTIVE.into(),
            selected_class: classes::IS_SELECTED.into(),
            no_matches_text: "No Matches".into(),
            no_matches_class: "no-matches".into(),
            max_results: 2,
        }
    }
}

impl TypeaheadConfig {
    /// Create a config mounting on the given selector.
    pub fn new(typeahead: impl Into<String>) -> Self {
        Self {
            typeahead: typeahead.into(),
            ..Default::default()
        }
    }

    /// Set the toggle button class hook.
    pub fn toggle_btn(mut self, selector: impl Into<String>) -> Self {
        self.toggle_btn = selector.into();
        self
    }

    /// Set the cap on listed options (clamped to at least 1).
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max.max(1);
        self
    }

    /// Set the placeholder label and class.
    pub fn no_matches(mut self, text: impl Into<String>, class: impl Into<String>) -> Self {
        self.no_matches_text = text.into();
        self.no_matches_class = class.into();
        self
    }

    /// Set the ready and active class hooks.
    pub fn state_classes(mut self, ready: impl Into<String>, active: impl Into<String>) -> Self {
        self.ready_class = ready.into();
        self.active_class = active.into();
        self
    }

    /// Class name carried by the toggle selector, without the leading dot.
    pub(crate) fn toggle_class(&self) -> &str {
        self.toggle_btn.trim().trim_start_matches('.')
    }
}

/// Configuration for a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogConfig {
    pub dialog: String,
    pub open_btn: String,
    pub close_btn: String,

    /// Modal dialogs ignore Escape and backdrop clicks.
    pub is_modal: bool,

    pub show_backdrop: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dialog: ".js-dialog".into(),
            open_btn: ".js-dialog-btn".into(),
            close_btn: ".js-dialog-close-btn".into(),
            is_modal: false,
            show_backdrop: true,
        }
    }
}

impl DialogConfig {
    pub fn new(dialog: impl Into<String>) -> Self {
        Self {
            dialog: dialog.into(),
            ..Default::default()
        }
    }

    pub fn buttons(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_btn = open.into();
        self.close_btn = close.into();
        self
    }

    /// Mark the dialog as modal (only the close button dismisses it).
    pub fn modal(mut self) -> Self {
        self.is_modal = true;
        self
    }

    pub fn without_backdrop(mut self) -> Self {
        self.show_backdrop = false;
        self
    }
}

/// Configuration for a modal with a page overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub modal: String,
    pub open_btn: String,
    pub close_btn: String,
    pub overlay: String,
    pub show_overlay: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal: ".js-modal".into(),
            open_btn: ".js-modal-btn".into(),
            close_btn: ".js-modal-close-btn".into(),
            overlay: ".js-modal-overlay".into(),
            show_overlay: true,
        }
    }
}

impl ModalConfig {
    pub fn new(modal: impl Into<String>) -> Self {
        Self {
            modal: modal.into(),
            ..Default::default()
        }
    }

    pub fn buttons(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_btn = open.into();
        self.close_btn = close.into();
        self
    }

    pub fn overlay(mut self, overlay: impl Into<String>) -> Self {
        self.overlay = overlay.into();
        self
    }

    pub fn without_overlay(mut self) -> Self {
        self.show_overlay = false;
        self
    }
}

fn at_least_one<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(|n| n.max(1))
}
