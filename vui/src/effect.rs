//! The boundary between widgets and whatever owns the markup.
//!
//! A widget decides; the host applies. Effects are listed in the order the
//! host must apply them.

use vuidom::Element;

use crate::widgets::WidgetId;
use crate::widgets::typeahead::ListboxView;

/// A single change a widget asks its host to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the listbox element with a fresh rendering of `view`.
    RenderListbox(ListboxView),
    SetAttribute {
        target: String,
        name: String,
        value: String,
    },
    RemoveAttribute {
        target: String,
        name: String,
    },
    AddClass {
        target: String,
        class: String,
    },
    RemoveClass {
        target: String,
        class: String,
    },
    /// Write the displayed value of a form control.
    SetValue {
        target: String,
        value: String,
    },
    /// Move input focus.
    Focus {
        target: String,
    },
    Append {
        parent: String,
        element: Element,
    },
    Remove {
        target: String,
    },
    /// Run a task on the host's next tick.
    Defer(Deferred),
    /// Detach a listener previously attached from a [`Deferred`] bind.
    Unbind(Listener),
}

impl Effect {
    pub fn set_attr(target: &str, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute {
            target: target.to_string(),
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn remove_attr(target: &str, name: &str) -> Self {
        Self::RemoveAttribute {
            target: target.to_string(),
            name: name.to_string(),
        }
    }

    pub fn add_class(target: &str, class: &str) -> Self {
        Self::AddClass {
            target: target.to_string(),
            class: class.to_string(),
        }
    }

    pub fn remove_class(target: &str, class: &str) -> Self {
        Self::RemoveClass {
            target: target.to_string(),
            class: class.to_string(),
        }
    }

    pub fn set_value(target: &str, value: impl Into<String>) -> Self {
        Self::SetValue {
            target: target.to_string(),
            value: value.into(),
        }
    }

    pub fn focus(target: &str) -> Self {
        Self::Focus {
            target: target.to_string(),
        }
    }
}

/// Work that must wait until the current event has finished dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Attach click delegation to a freshly opened dropdown. Dropped if the
    /// dropdown was closed (or reopened) since `generation` was issued.
    BindDropdown { widget: WidgetId, generation: u64 },
}

/// A listener attached by the host on a widget's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Listener {
    pub widget: WidgetId,
    pub kind: ListenerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Click delegation on a typeahead dropdown.
    DropdownClick,
}
