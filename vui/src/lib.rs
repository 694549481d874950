pub mod classes;
pub mod config;
pub mod defer;
pub mod effect;
pub mod error;
pub mod keys;
pub mod page;
pub mod widgets;

pub use config::{DialogConfig, ModalConfig, TypeaheadConfig};
pub use effect::{Deferred, Effect, Listener, ListenerKind};
pub use error::InitError;
pub use page::Page;

pub mod prelude {
    pub use crate::config::{DialogConfig, ModalConfig, TypeaheadConfig};
    pub use crate::effect::Effect;
    pub use crate::error::InitError;
    pub use crate::keys::{Direction, KeyAction};
    pub use crate::page::Page;
    pub use crate::widgets::typeahead::{OptionSet, TypeaheadOption, VisibleSet};
    pub use crate::widgets::{Dialog, Modal, Typeahead, WidgetId};

    pub use vuidom::{Descriptor, Document, Element, Event, Key, Modifiers};
}
