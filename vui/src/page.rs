//! The page host.
//!
//! A [`Page`] owns the document and every widget mounted on it. It routes
//! events to widgets, applies the effects they return and runs deferred
//! work on [`Page::tick`].

use std::collections::{HashSet, VecDeque};

use vuidom::{Document, Event, FocusState};

use crate::config::{DialogConfig, ModalConfig, TypeaheadConfig};
use crate::defer::TickQueue;
use crate::effect::{Deferred, Effect, Listener};
use crate::error::InitError;
use crate::keys::KeyAction;
use crate::widgets::typeahead::extract;
use crate::widgets::{Dialog, Modal, Typeahead, WidgetId};

/// A document together with the widgets enhancing it.
///
/// Dispatch is synchronous. Events caused while an event is being handled
/// (focus moves requested by effects) are queued and handled after it, in
/// order, before [`Page::dispatch`] returns.
#[derive(Debug)]
pub struct Page {
    document: Document,
    focus: FocusState,
    typeaheads: Vec<Typeahead>,
    dialogs: Vec<Dialog>,
    modals: Vec<Modal>,
    ticks: TickQueue<Deferred>,
    listeners: HashSet<Listener>,
    queue: VecDeque<Event>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            focus: FocusState::new(),
            typeaheads: Vec::new(),
            dialogs: Vec::new(),
            modals: Vec::new(),
            ticks: TickQueue::new(),
            listeners: HashSet::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn typeaheads(&self) -> &[Typeahead] {
        &self.typeaheads
    }

    pub fn typeahead(&self, id: WidgetId) -> Option<&Typeahead> {
        self.typeaheads.iter().find(|t| t.id() == id)
    }

    pub fn dialog(&self, id: WidgetId) -> Option<&Dialog> {
        self.dialogs.iter().find(|d| d.id() == id)
    }

    pub fn modal(&self, id: WidgetId) -> Option<&Modal> {
        self.modals.iter().find(|m| m.id() == id)
    }

    /// Whether `listener` is currently attached.
    pub fn is_listening(&self, listener: &Listener) -> bool {
        self.listeners.contains(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of tasks waiting for the next [`Page::tick`].
    pub fn pending_ticks(&self) -> usize {
        self.ticks.len()
    }

    // -------------------------------------------------------------------------
    // Mounting
    // -------------------------------------------------------------------------

    /// Enhance every element matching `config.typeahead`.
    ///
    /// Each match becomes an independent instance. A match that cannot be
    /// enhanced (no options) is left untouched and skipped. Fails only when
    /// nothing matches at all.
    pub fn mount_typeaheads(&mut self, config: &TypeaheadConfig) -> Result<Vec<WidgetId>, InitError> {
        let sources: Vec<_> = self
            .document
            .query_all(&config.typeahead)
            .into_iter()
            .map(|el| (el.id.clone(), extract(el)))
            .collect();

        if sources.is_empty() {
            let err = InitError::source_missing(&config.typeahead);
            log::warn!("Typeahead not initialised: {}", err);
            return Err(err);
        }

        let mut mounted = Vec::with_capacity(sources.len());
        for (wrapper_id, source) in sources {
            match Typeahead::mount(source, config.clone()) {
                Ok((typeahead, markup)) => {
                    if self.document.replace(&wrapper_id, markup).is_none() {
                        self.violation(format!("typeahead source '{wrapper_id}' vanished while mounting"));
                        continue;
                    }
                    mounted.push(typeahead.id());
                    self.typeaheads.push(typeahead);
                }
                Err(err) => log::warn!("Typeahead '{}' not initialised: {}", wrapper_id, err),
            }
        }
        Ok(mounted)
    }

    pub fn mount_dialog(&mut self, config: DialogConfig) -> Result<WidgetId, InitError> {
        let (dialog, effects) = Dialog::mount(&self.document, config).inspect_err(|err| {
            log::warn!("Dialog not initialised: {}", err);
        })?;
        let id = dialog.id();
        self.dialogs.push(dialog);
        self.run(effects);
        Ok(id)
    }

    pub fn mount_modal(&mut self, config: ModalConfig) -> Result<WidgetId, InitError> {
        let (modal, effects) = Modal::mount(&self.document, config).inspect_err(|err| {
            log::warn!("Modal not initialised: {}", err);
        })?;
        let id = modal.id();
        self.modals.push(modal);
        self.run(effects);
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Programmatic control
    // -------------------------------------------------------------------------

    /// Move focus to `id`, firing the resulting blur and focus events.
    pub fn focus(&mut self, id: &str) {
        self.run(vec![Effect::focus(id)]);
    }

    /// Open a dialog. Returns false for an unknown ID.
    pub fn show_dialog(&mut self, id: WidgetId) -> bool {
        let focused = self.focus.focused();
        let Some(dialog) = self.dialogs.iter_mut().find(|d| d.id() == id) else {
            return false;
        };
        let effects = dialog.show(focused, &self.document);
        self.run(effects);
        true
    }

    pub fn hide_dialog(&mut self, id: WidgetId) -> bool {
        let Some(dialog) = self.dialogs.iter_mut().find(|d| d.id() == id) else {
            return false;
        };
        let effects = dialog.hide();
        self.run(effects);
        true
    }

    pub fn show_modal(&mut self, id: WidgetId) -> bool {
        let Some(modal) = self.modals.iter_mut().find(|m| m.id() == id) else {
            return false;
        };
        let effects = modal.show();
        self.run(effects);
        true
    }

    pub fn hide_modal(&mut self, id: WidgetId) -> bool {
        let Some(modal) = self.modals.iter_mut().find(|m| m.id() == id) else {
            return false;
        };
        let effects = modal.hide();
        self.run(effects);
        true
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Handle `event` and everything it causes.
    pub fn dispatch(&mut self, event: Event) {
        self.queue.push_back(event);
        self.drain();
    }

    /// Run the work deferred by earlier dispatches.
    ///
    /// Tasks posted while the tick runs wait for the next one.
    pub fn tick(&mut self) {
        for task in self.ticks.take_tick() {
            match task {
                Deferred::BindDropdown { widget, generation } => {
                    let Some(typeahead) = self.typeaheads.iter_mut().find(|t| t.id() == widget) else {
                        continue;
                    };
                    if typeahead.bind_dropdown(generation) {
                        let listener = typeahead.listener();
                        log::debug!("Page::tick bind {:?} widget={}", listener.kind, widget);
                        if !self.listeners.insert(listener) {
                            self.violation(format!("listener {listener:?} bound twice"));
                        }
                    }
                }
            }
        }
        self.drain();
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            log::trace!("Page::dispatch {:?}", event);
            let effects = self.route(event);
            self.apply(effects);
        }
    }

    fn run(&mut self, effects: Vec<Effect>) {
        self.apply(effects);
        self.drain();
    }

    fn route(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => {
                let action = KeyAction::classify(key, modifiers);
                self.route_key(target.as_deref(), action)
            }
            Event::Click { target: Some(target) } => self.route_click(&target),
            Event::Click { target: None } => {
                self.blur_focus();
                Vec::new()
            }
            Event::Blur { target, new_target } => self
                .typeaheads
                .iter_mut()
                .filter(|t| t.ids().owns(&target))
                .flat_map(|t| t.on_blur(new_target.as_deref()))
                .collect(),
            Event::Focus { .. } => Vec::new(),
        }
    }

    /// The focused widget sees a key first; whatever it ignores reaches
    /// open dialogs and modals, and an unclaimed Tab moves focus.
    fn route_key(&mut self, target: Option<&str>, action: KeyAction) -> Vec<Effect> {
        if let Some(target) = target {
            if let Some(typeahead) = self.typeaheads.iter_mut().find(|t| t.ids().owns(target)) {
                let effects = typeahead.on_key(action);
                if !effects.is_empty() {
                    return effects;
                }
            }
        }

        let focused = self.focus.focused();
        let mut effects = Vec::new();
        for dialog in &mut self.dialogs {
            effects.extend(dialog.on_key(action, focused, &self.document));
        }
        for modal in &mut self.modals {
            effects.extend(modal.on_key(action));
        }

        if effects.is_empty() {
            if let KeyAction::Cycle { backwards } = action {
                if let Some(next) = self.focus.cycle_target(self.document.root(), backwards) {
                    effects.push(Effect::focus(&next));
                }
            }
        }
        effects
    }

    fn route_click(&mut self, target: &str) -> Vec<Effect> {
        // Pointer focus moves before the click is handled
        let mut effects = Vec::new();
        let takes_focus = self
            .document
            .get(target)
            .is_some_and(|el| el.is_focusable() || el.get_attr("tabindex").is_some());
        if takes_focus {
            effects.push(Effect::focus(target));
        } else {
            self.blur_focus();
        }

        for typeahead in &mut self.typeaheads {
            let ids = typeahead.ids();
            if target == ids.toggle {
                effects.extend(typeahead.on_toggle());
            } else if ids.option_index(target).is_some() || target == ids.placeholder() || target == ids.listbox {
                let input = ids.input.clone();
                let handled = if self.listeners.contains(&typeahead.listener()) {
                    typeahead.on_option_click(target)
                } else {
                    log::trace!("Page::route_click {} has no dropdown listener", target);
                    Vec::new()
                };
                // Clicks inside the dropdown that pick nothing hand focus back to the field
                if handled.is_empty() && typeahead.is_open() {
                    effects.push(Effect::focus(&input));
                }
                effects.extend(handled);
            }
        }

        for dialog in &mut self.dialogs {
            effects.extend(dialog.on_click(target, &self.document));
        }
        for modal in &mut self.modals {
            effects.extend(modal.on_click(target));
        }
        effects
    }

    /// Drop focus without moving it anywhere.
    fn blur_focus(&mut self) {
        if let Some(old) = self.focus.focused().map(str::to_string) {
            self.focus.blur();
            self.queue.push_back(Event::Blur {
                target: old,
                new_target: None,
            });
        }
    }

    // -------------------------------------------------------------------------
    // Effects
    // -------------------------------------------------------------------------

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&mut self, effect: Effect) {
        match effect {
            Effect::RenderListbox(view) => {
                if self.document.replace(&view.id, view.element()).is_none() {
                    self.violation(format!("listbox '{}' not found", view.id));
                }
            }
            Effect::SetAttribute { target, name, value } => match self.document.get_mut(&target) {
                Some(el) => el.set_attr(name, value),
                None => self.missing(&target),
            },
            Effect::RemoveAttribute { target, name } => match self.document.get_mut(&target) {
                Some(el) => {
                    el.remove_attr(&name);
                }
                None => self.missing(&target),
            },
            Effect::AddClass { target, class } => match self.document.get_mut(&target) {
                Some(el) => {
                    el.add_class(class);
                }
                None => self.missing(&target),
            },
            Effect::RemoveClass { target, class } => match self.document.get_mut(&target) {
                Some(el) => {
                    el.remove_class(&class);
                }
                None => self.missing(&target),
            },
            Effect::SetValue { target, value } => match self.document.get_mut(&target) {
                Some(el) => el.set_attr("value", value),
                None => self.missing(&target),
            },
            Effect::Focus { target } => {
                if self.document.get(&target).is_none() {
                    self.missing(&target);
                    return;
                }
                let events = self.focus.move_to(&target);
                self.queue.extend(events);
            }
            Effect::Append { parent, element } => {
                if !self.document.append_child(&parent, element) {
                    self.missing(&parent);
                }
            }
            Effect::Remove { target } => {
                if self.document.remove(&target).is_none() {
                    self.missing(&target);
                }
            }
            Effect::Defer(task) => self.ticks.post(task),
            Effect::Unbind(listener) => {
                log::debug!("Page::apply unbind {:?} widget={}", listener.kind, listener.widget);
                if !self.listeners.remove(&listener) {
                    self.violation(format!("listener {listener:?} unbound without a bind"));
                }
            }
        }
    }

    fn missing(&self, target: &str) {
        self.violation(format!("effect target '{target}' not found"));
    }

    /// A widget asked for something its own markup cannot satisfy.
    fn violation(&self, message: String) {
        log::error!("{}", message);
        if cfg!(debug_assertions) {
            panic!("{message}");
        }
    }
}
