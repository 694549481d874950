use crate::element::Element;
use crate::event::Event;

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Move focus to `id` and describe the change as Blur/Focus events.
    /// Returns no events when `id` already has focus.
    pub fn move_to(&mut self, id: &str) -> Vec<Event> {
        let old = self.focused.clone();
        if !self.focus(id) {
            return Vec::new();
        }
        log::debug!("Focus moved: {:?} -> {}", old, id);
        let mut events = Vec::with_capacity(2);
        if let Some(old) = old {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// The element Tab (or Shift+Tab when `backwards`) would move focus
    /// to, wrapping at either end. Focus itself is left unchanged.
    pub fn cycle_target(&self, root: &Element, backwards: bool) -> Option<String> {
        let focusable = collect_focusable(root);
        let last = focusable.len().checked_sub(1)?;

        let current = self
            .focused
            .as_ref()
            .and_then(|current| focusable.iter().position(|id| id == current));
        let index = match (current, backwards) {
            (None, false) => 0,
            (None, true) => last,
            (Some(i), false) => (i + 1) % focusable.len(),
            (Some(i), true) => i.checked_sub(1).unwrap_or(last),
        };

        let target = &focusable[index];
        (self.focused.as_ref() != Some(target)).then(|| target.clone())
    }
}

/// Collect IDs of all focusable elements in document order.
/// Subtrees marked hidden are skipped.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.is_hidden() {
        return;
    }
    if element.is_focusable() {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
