//! Filter engine: the visible subset for a query.

use super::registry::{OptionSet, TypeaheadOption};

/// What the dropdown currently lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisibleSet {
    /// Matching options in registry order. Never empty.
    Matches(Vec<TypeaheadOption>),
    /// Nothing matched; rendered as a single non-selectable placeholder.
    #[default]
    NoMatches,
}

impl VisibleSet {
    /// Number of selectable entries (the placeholder does not count).
    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    pub fn options(&self) -> &[TypeaheadOption] {
        match self {
            Self::Matches(options) => options,
            Self::NoMatches => &[],
        }
    }

    pub fn get(&self, index: usize) -> Option<&TypeaheadOption> {
        self.options().get(index)
    }
}

/// Options whose label contains `query`, ignoring case, capped at the first
/// `max_results` matches.
///
/// An empty query matches everything. `full` is never modified.
pub fn filter(full: &OptionSet, query: &str, max_results: usize) -> VisibleSet {
    let needle = query.to_lowercase();
    let matches: Vec<TypeaheadOption> = full
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .take(max_results)
        .cloned()
        .collect();

    if matches.is_empty() {
        VisibleSet::NoMatches
    } else {
        VisibleSet::Matches(matches)
    }
}
