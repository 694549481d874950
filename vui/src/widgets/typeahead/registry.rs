//! Option registry: the candidate list read from the source `<select>`.

use vuidom::element::{Selector, query, query_all};
use vuidom::Element;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeaheadOption {
    /// Submitted through the hidden field on commit.
    pub value: String,
    /// Shown in the list, matched against the query, written to the text field.
    pub label: String,
}

impl TypeaheadOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options sorted ascending by label.
///
/// Labels compare case-sensitively; equal labels keep their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<TypeaheadOption>,
}

impl OptionSet {
    pub fn new(options: impl IntoIterator<Item = TypeaheadOption>) -> Self {
        let mut options: Vec<TypeaheadOption> = options.into_iter().collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TypeaheadOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeaheadOption> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[TypeaheadOption] {
        &self.options
    }
}

impl FromIterator<TypeaheadOption> for OptionSet {
    fn from_iter<I: IntoIterator<Item = TypeaheadOption>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a TypeaheadOption;
    type IntoIter = std::slice::Iter<'a, TypeaheadOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything the enhanced markup needs from the original control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSource {
    /// ID of the `<select>`, reused for the text field.
    pub id: String,
    /// Form name, carried over to the hidden field.
    pub name: String,
    /// Text of the field's `<label>`.
    pub label: String,
    pub options: OptionSet,
}

/// Read label, select and options out of a typeahead wrapper.
///
/// A wrapper with no `<select>` yields an empty option set under the
/// wrapper's own ID. Option values fall back to their text.
pub fn extract(source: &Element) -> SelectSource {
    let label = query(source, &Selector::parse("label"))
        .map(|label| label.text_content().trim().to_string())
        .unwrap_or_default();

    let Some(select) = query(source, &Selector::parse("select")) else {
        return SelectSource {
            id: source.id.clone(),
            name: String::new(),
            label,
            options: OptionSet::default(),
        };
    };

    let options = query_all(select, &Selector::parse("option"))
        .into_iter()
        .map(|option| {
            let label = option.text_content().trim().to_string();
            let value = option
                .get_attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| label.clone());
            TypeaheadOption { value, label }
        })
        .collect();

    SelectSource {
        id: select.id.clone(),
        name: select
            .get_attr("name")
            .map(str::to_string)
            .unwrap_or_else(|| select.id.clone()),
        label,
        options,
    }
}
