//! Typeahead widget: a `<select>` enhanced into a filterable combobox.

mod events;
pub mod filter;
pub mod navigation;
pub mod registry;
mod render;
mod state;

pub use filter::{VisibleSet, filter};
pub use navigation::traverse;
pub use registry::{OptionSet, SelectSource, TypeaheadOption, extract};
pub use render::{ListboxView, OptionView, listbox, typeahead_markup};
pub use state::{Typeahead, TypeaheadIds};
