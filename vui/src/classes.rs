//! Class names shared across widgets.

pub const IS_ACTIVE: &str = "is-active";
pub const IS_HIDDEN: &str = "is-hidden";
pub const IS_READY: &str = "is-ready";
pub const IS_SELECTED: &str = "is-selected";
pub const NO_BACKDROP: &str = "no-backdrop";
pub const DIALOG_BACKDROP: &str = "dialog-backdrop";

// Typeahead markup
pub const TYPEAHEAD: &str = "c-typeahead";
pub const TYPEAHEAD_FIELD: &str = "c-typeahead__field";
pub const TYPEAHEAD_LABEL: &str = "c-typeahead__label";
pub const TYPEAHEAD_INPUT: &str = "c-typeahead__input";
pub const TYPEAHEAD_BUTTON: &str = "c-typeahead__button";
pub const TYPEAHEAD_DROPDOWN: &str = "c-typeahead__dropdown";
