//! View models and markup for the typeahead.

use vuidom::{Descriptor, Element, create_element};

use crate::classes;
use crate::config::TypeaheadConfig;

use super::filter::{VisibleSet, filter};
use super::registry::SelectSource;
use super::state::TypeaheadIds;

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub label: String,
    /// `None` for the placeholder.
    pub value: Option<String>,
    pub highlighted: bool,
}

impl OptionView {
    pub fn is_selectable(&self) -> bool {
        self.value.is_some()
    }
}

/// The dropdown as it should currently be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxView {
    pub id: String,
    pub open: bool,
    pub items: Vec<OptionView>,
    active_class: String,
    selected_class: String,
    no_matches_class: String,
}

impl ListboxView {
    pub fn highlighted(&self) -> Option<&OptionView> {
        self.items.iter().find(|item| item.highlighted)
    }

    /// Render the view model as a `role="listbox"` list.
    pub fn element(&self) -> Element {
        let mut list = Element::ul()
            .id(&self.id)
            .class(classes::TYPEAHEAD_DROPDOWN)
            .attr("role", "listbox")
            .attr("aria-hidden", (!self.open).to_string());
        if self.open {
            list = list.class(&self.active_class).attr("tabindex", "-1");
        }

        let items = self.items.iter().map(|item| {
            let mut li = Element::li()
                .id(&item.id)
                .attr("role", "option")
                .attr("tabindex", "-1")
                .attr("aria-selected", item.highlighted.to_string())
                .text(&item.label);
            match &item.value {
                Some(value) => li = li.data("value", value),
                None => {
                    li = li
                        .class(&self.no_matches_class)
                        .attr("aria-disabled", "true");
                }
            }
            if item.highlighted {
                li = li.class(&self.selected_class);
            }
            li
        });

        list.children(items)
    }
}

/// Build the listbox view for `visible`, marking `highlighted`.
pub fn listbox(
    ids: &TypeaheadIds,
    visible: &VisibleSet,
    highlighted: Option<usize>,
    config: &TypeaheadConfig,
    open: bool,
) -> ListboxView {
    let items = match visible {
        VisibleSet::Matches(options) => options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                id: ids.option(index),
                label: option.label.clone(),
                value: Some(option.value.clone()),
                highlighted: highlighted == Some(index),
            })
            .collect(),
        VisibleSet::NoMatches => vec![OptionView {
            id: ids.placeholder(),
            label: config.no_matches_text.clone(),
            value: None,
            highlighted: false,
        }],
    };

    ListboxView {
        id: ids.listbox.clone(),
        open,
        items,
        active_class: config.active_class.clone(),
        selected_class: config.selected_class.clone(),
        no_matches_class: config.no_matches_class.clone(),
    }
}

/// Markup replacing the source control: label, combobox text field, toggle
/// button, hidden value field and the (hidden) dropdown.
pub fn typeahead_markup(source: &SelectSource, ids: &TypeaheadIds, config: &TypeaheadConfig) -> Element {
    // The hidden field takes over the select's form name.
    let hidden_input = Descriptor::new("input")
        .attr("id", ids.hidden.as_str())
        .attr("type", "hidden")
        .attr("name", source.name.as_str())
        .attr("value", "");

    let text_input = Descriptor::new("input")
        .class(classes::TYPEAHEAD_INPUT)
        .attr("id", ids.input.as_str())
        .attr("type", "text")
        .attr("value", "")
        .attr("role", "combobox")
        .attr("aria-autocomplete", "inline")
        .attr("aria-owns", ids.listbox.as_str())
        .attr("aria-expanded", false)
        .attr("tabindex", 0i64);

    let label = Descriptor::new("label")
        .class(classes::TYPEAHEAD_LABEL)
        .attr("id", ids.label.as_str())
        .attr("for", ids.input.as_str())
        .text(source.label.as_str());

    let button = Descriptor::new("button")
        .class(classes::TYPEAHEAD_BUTTON)
        .class(config.toggle_class())
        .attr("id", ids.toggle.as_str())
        .attr("type", "button")
        .attr("aria-controls", ids.listbox.as_str())
        .attr("tabindex", -1i64)
        .text("Open list of options");

    let field = Descriptor::new("div")
        .class(classes::TYPEAHEAD_FIELD)
        .attr("id", ids.field.as_str())
        .child(label)
        .child(text_input)
        .child(button)
        .child(hidden_input);

    let wrapper = Descriptor::new("div")
        .class(classes::TYPEAHEAD)
        .class(config.ready_class.as_str())
        .attr("id", ids.root.as_str())
        .child(field);

    let initial = filter(&source.options, "", config.max_results);
    create_element(&wrapper).child(listbox(ids, &initial, None, config, false).element())
}
