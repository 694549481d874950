pub mod document;
pub mod element;
pub mod event;
pub mod focus;

pub use document::Document;
pub use element::{create_element, Content, Descriptor, Element, Selector};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
