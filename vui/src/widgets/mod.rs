//! Built-in widgets.
//!
//! Widgets never touch the document. Each reaction to input returns a list
//! of [`Effect`](crate::effect::Effect)s describing what should change, and
//! the host applies them.

use std::sync::atomic::{AtomicUsize, Ordering};

pub mod dialog;
pub mod modal;
pub mod typeahead;

pub use dialog::Dialog;
pub use modal::Modal;
pub use typeahead::Typeahead;

/// Unique identifier for a mounted widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

impl WidgetId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__widget_{}", self.0)
    }
}
