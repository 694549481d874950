//! Event handling for the Typeahead widget.
//!
//! Two states: closed and open. Every handler returns the effects of the
//! transition it performed; an empty list means the input was ignored.

use crate::effect::{Deferred, Effect};
use crate::keys::{Direction, KeyAction};

use super::Typeahead;
use super::filter::filter;
use super::navigation::traverse;
use super::render;

/// How a close treats the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dismissal {
    /// Put back what was typed, dropping any live preview.
    Restore,
    /// Leave the field as it is (commit, or emptied by backspace).
    Keep,
}

impl Typeahead {
    /// React to a classified key press on the text field or another part
    /// of the widget.
    ///
    /// Typing while closed starts a fresh query, so a committed label in
    /// the field is replaced rather than extended.
    pub fn on_key(&mut self, action: KeyAction) -> Vec<Effect> {
        let mut effects = Vec::new();
        log::trace!(
            "Typeahead::on_key input={} open={} action={:?}",
            self.ids.input,
            self.session.open,
            action
        );

        if !self.session.open {
            // Closed state - open on Down or on typing
            match action {
                KeyAction::Navigate(Direction::Down) => self.open(&mut effects),
                KeyAction::Printable(c) => {
                    self.session.query = c.to_string();
                    self.sync_typed_value(&mut effects);
                    self.open(&mut effects);
                }
                _ => {}
            }
            return effects;
        }

        // Open state - filter, navigate, commit or dismiss
        match action {
            KeyAction::Printable(c) => {
                self.session.query.push(c);
                self.sync_typed_value(&mut effects);
                self.refilter(&mut effects);
            }
            KeyAction::Navigate(direction) => self.navigate(direction, &mut effects),
            KeyAction::Commit => self.commit(&mut effects),
            KeyAction::Dismiss => self.close(Dismissal::Restore, true, &mut effects),
            KeyAction::Erase => {
                if self.session.query.pop().is_none() {
                    self.close(Dismissal::Restore, false, &mut effects);
                } else if self.session.query.is_empty() {
                    self.sync_typed_value(&mut effects);
                    self.close(Dismissal::Keep, false, &mut effects);
                } else {
                    self.sync_typed_value(&mut effects);
                    self.refilter(&mut effects);
                }
            }
            KeyAction::Cycle { .. } | KeyAction::Other => {}
        }
        effects
    }

    /// React to the toggle button: open when closed, close when open.
    /// Focus always returns to the text field.
    pub fn on_toggle(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.session.open {
            self.close(Dismissal::Restore, true, &mut effects);
        } else {
            self.open(&mut effects);
            effects.push(Effect::focus(&self.ids.input));
        }
        effects
    }

    /// React to a click delegated from the dropdown. Equivalent to
    /// highlighting the clicked option and pressing Enter. Clicks on the
    /// placeholder, or arriving before delegation is bound, are ignored.
    pub fn on_option_click(&mut self, target: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.session.open || !self.session.bound {
            return effects;
        }
        let Some(index) = self.ids.option_index(target) else {
            return effects;
        };
        if index >= self.session.visible.len() {
            return effects;
        }
        self.highlight(Some(index), &mut effects);
        self.commit(&mut effects);
        effects
    }

    /// React to the text field losing focus. Focus moving elsewhere inside
    /// the widget keeps the dropdown open.
    pub fn on_blur(&mut self, new_target: Option<&str>) -> Vec<Effect> {
        let mut effects = Vec::new();
        let stays_inside = new_target.is_some_and(|target| self.ids.owns(target));
        if self.session.open && !stays_inside {
            self.close(Dismissal::Restore, false, &mut effects);
        }
        effects
    }

    /// Attach dropdown click delegation on the tick after opening.
    ///
    /// Returns true if the host should now attach [`Typeahead::listener`].
    /// A bind for a session that has since closed or reopened is refused.
    pub fn bind_dropdown(&mut self, generation: u64) -> bool {
        if !self.session.open || self.session.bound || generation != self.session.generation {
            log::debug!(
                "Typeahead::bind_dropdown input={} skipped stale generation={}",
                self.ids.input,
                generation
            );
            return false;
        }
        self.session.bound = true;
        true
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn open(&mut self, effects: &mut Vec<Effect>) {
        self.session.open = true;
        self.session.generation += 1;
        self.session.highlighted = None;
        self.session.restore_value = self.session.input_value.clone();

        log::debug!(
            "Typeahead::open input={} query={:?} generation={}",
            self.ids.input,
            self.session.query,
            self.session.generation
        );

        self.refilter(effects);
        effects.push(Effect::set_attr(&self.ids.input, "aria-expanded", "true"));
        effects.push(Effect::Defer(Deferred::BindDropdown {
            widget: self.id,
            generation: self.session.generation,
        }));
    }

    fn close(&mut self, dismissal: Dismissal, refocus: bool, effects: &mut Vec<Effect>) {
        if !self.session.open {
            return;
        }

        self.highlight(None, effects);
        self.session.open = false;
        self.session.query.clear();

        if dismissal == Dismissal::Restore && self.session.input_value != self.session.restore_value {
            self.session.input_value = self.session.restore_value.clone();
            effects.push(Effect::set_value(&self.ids.input, &self.session.input_value));
        }

        log::debug!(
            "Typeahead::close input={} dismissal={:?} value={:?}",
            self.ids.input,
            dismissal,
            self.session.input_value
        );

        let listbox = &self.ids.listbox;
        effects.push(Effect::set_attr(listbox, "aria-hidden", "true"));
        effects.push(Effect::remove_attr(listbox, "tabindex"));
        effects.push(Effect::remove_class(listbox, &self.config.active_class));
        effects.push(Effect::set_attr(&self.ids.input, "aria-expanded", "false"));

        if self.session.bound {
            self.session.bound = false;
            effects.push(Effect::Unbind(self.listener()));
        }
        if refocus {
            effects.push(Effect::focus(&self.ids.input));
        }
    }

    fn commit(&mut self, effects: &mut Vec<Effect>) {
        let Some(option) = self.highlighted_option().cloned() else {
            return;
        };

        log::debug!(
            "Typeahead::commit input={} value={:?} label={:?}",
            self.ids.input,
            option.value,
            option.label
        );

        self.session.input_value = option.label.clone();
        self.session.restore_value = option.label.clone();
        effects.push(Effect::set_value(&self.ids.input, &option.label));
        effects.push(Effect::set_value(&self.ids.hidden, &option.value));
        self.committed = Some(option);

        self.close(Dismissal::Keep, true, effects);
    }

    fn navigate(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        let Some(next) = traverse(direction, &self.session.visible, self.session.highlighted) else {
            return;
        };
        self.highlight(Some(next), effects);

        // Live preview, not a commit
        if let Some(label) = self.highlighted_option().map(|option| option.label.clone()) {
            self.session.input_value = label;
            effects.push(Effect::set_value(&self.ids.input, &self.session.input_value));
        }
    }

    /// Move the highlight marker, clearing the previous one first.
    fn highlight(&mut self, index: Option<usize>, effects: &mut Vec<Effect>) {
        let selected_class = &self.config.selected_class;

        if let Some(previous) = self.session.highlighted.take() {
            let id = self.ids.option(previous);
            effects.push(Effect::remove_class(&id, selected_class));
            effects.push(Effect::set_attr(&id, "aria-selected", "false"));
        }

        match index {
            Some(index) => {
                let id = self.ids.option(index);
                effects.push(Effect::add_class(&id, selected_class));
                effects.push(Effect::set_attr(&id, "aria-selected", "true"));
                effects.push(Effect::set_attr(&self.ids.input, "aria-activedescendant", &id));
                self.session.highlighted = Some(index);
            }
            None => effects.push(Effect::remove_attr(&self.ids.input, "aria-activedescendant")),
        }
    }

    /// Recompute the visible set from the full registry and re-render.
    fn refilter(&mut self, effects: &mut Vec<Effect>) {
        self.session.visible = filter(&self.options, &self.session.query, self.config.max_results);
        self.session.highlighted = None;
        effects.push(Effect::remove_attr(&self.ids.input, "aria-activedescendant"));
        effects.push(Effect::RenderListbox(render::listbox(
            &self.ids,
            &self.session.visible,
            None,
            &self.config,
            self.session.open,
        )));
    }

    /// Mirror the typed query into the text field.
    fn sync_typed_value(&mut self, effects: &mut Vec<Effect>) {
        self.session.input_value = self.session.query.clone();
        self.session.restore_value = self.session.query.clone();
        effects.push(Effect::set_value(&self.ids.input, &self.session.input_value));
    }
}
