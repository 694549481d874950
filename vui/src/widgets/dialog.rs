//! Dialog widget - an in-page dialog with a backdrop and a focus trap.

use vuidom::{Descriptor, Document, Element, collect_focusable, create_element};

use crate::classes;
use crate::config::DialogConfig;
use crate::effect::Effect;
use crate::error::InitError;
use crate::keys::KeyAction;

use super::WidgetId;

/// A mounted dialog.
///
/// While open, Tab and Shift+Tab wrap around the dialog's focusable
/// elements. Escape and backdrop clicks close it unless it is modal.
#[derive(Debug, Clone)]
pub struct Dialog {
    id: WidgetId,
    config: DialogConfig,
    page_id: String,
    dialog_id: String,
    open_btn_id: String,
    close_btn_id: Option<String>,
    backdrop_id: String,
    /// Element that had focus when the dialog opened.
    opener: Option<String>,
    open: bool,
}

impl Dialog {
    /// Locate the dialog and its trigger in `document`.
    ///
    /// Returns the widget with the effects that prepare its markup. The
    /// close button is optional; Escape still works without one.
    pub fn mount(document: &Document, config: DialogConfig) -> Result<(Self, Vec<Effect>), InitError> {
        let dialog = document
            .query(&config.dialog)
            .ok_or_else(|| InitError::source_missing(&config.dialog))?;
        let open_btn = document
            .query(&config.open_btn)
            .ok_or_else(|| InitError::target_missing(&config.open_btn))?;
        let close_btn = document.query(&config.close_btn).map(|el| el.id.clone());
        if close_btn.is_none() {
            log::debug!("Dialog::mount {} has no close button", config.dialog);
        }

        let dialog_id = dialog.id.clone();
        let page_id = document.root_id().to_string();

        let mut effects = Vec::new();
        if !config.show_backdrop {
            effects.push(Effect::add_class(&dialog_id, classes::NO_BACKDROP));
        }
        effects.push(Effect::set_attr(&page_id, "data-ui-dialog", "is-initialised"));
        effects.push(Effect::add_class(&dialog_id, classes::IS_HIDDEN));
        effects.push(Effect::set_attr(&dialog_id, "aria-hidden", "true"));

        log::debug!("Dialog::mount dialog={} modal={}", dialog_id, config.is_modal);

        let widget = Self {
            id: WidgetId::new(),
            backdrop_id: format!("{dialog_id}-backdrop"),
            open_btn_id: open_btn.id.clone(),
            close_btn_id: close_btn,
            dialog_id,
            page_id,
            config,
            opener: None,
            open: false,
        };
        Ok((widget, effects))
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn dialog_id(&self) -> &str {
        &self.dialog_id
    }

    pub fn backdrop_id(&self) -> &str {
        &self.backdrop_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog, remembering `focused` so focus can return to it,
    /// and move focus to the first focusable element inside.
    pub fn show(&mut self, focused: Option<&str>, document: &Document) -> Vec<Effect> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        self.opener = focused.map(str::to_string);

        let mut effects = vec![
            Effect::remove_class(&self.dialog_id, classes::IS_HIDDEN),
            Effect::set_attr(&self.dialog_id, "aria-hidden", "false"),
            Effect::set_attr(&self.page_id, "data-current-dialog", &self.config.dialog),
            Effect::Append {
                parent: self.page_id.clone(),
                element: self.backdrop(),
            },
        ];
        if let Some(first) = self.focusable(document).first() {
            effects.push(Effect::focus(first));
        }
        log::debug!("Dialog::show dialog={}", self.dialog_id);
        effects
    }

    /// Close the dialog and return focus to whatever opened it.
    pub fn hide(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;

        let mut effects = vec![
            Effect::add_class(&self.dialog_id, classes::IS_HIDDEN),
            Effect::set_attr(&self.dialog_id, "aria-hidden", "true"),
            Effect::remove_attr(&self.page_id, "data-current-dialog"),
            Effect::Remove {
                target: self.backdrop_id.clone(),
            },
        ];
        if let Some(opener) = self.opener.take() {
            effects.push(Effect::focus(&opener));
        }
        log::debug!("Dialog::hide dialog={}", self.dialog_id);
        effects
    }

    /// Document-level key handling: Escape to dismiss, Tab trapping.
    pub fn on_key(&mut self, action: KeyAction, focused: Option<&str>, document: &Document) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        match action {
            KeyAction::Dismiss if !self.config.is_modal => self.hide(),
            KeyAction::Cycle { backwards } => self.trap_focus(backwards, focused, document),
            _ => Vec::new(),
        }
    }

    /// Clicks on the trigger open the dialog, with the trigger as opener.
    pub fn on_click(&mut self, target: &str, document: &Document) -> Vec<Effect> {
        if target == self.open_btn_id {
            self.show(Some(target), document)
        } else if self.close_btn_id.as_deref() == Some(target) {
            self.hide()
        } else if target == self.backdrop_id && !self.config.is_modal {
            self.hide()
        } else {
            Vec::new()
        }
    }

    /// Wrap focus at either end of the dialog. Returns no effects when
    /// ordinary Tab navigation stays inside the dialog anyway.
    fn trap_focus(&self, backwards: bool, focused: Option<&str>, document: &Document) -> Vec<Effect> {
        let focusable = self.focusable(document);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return Vec::new();
        };
        let current = focused.and_then(|id| focusable.iter().position(|f| f == id));

        let target = match current {
            None => first,
            Some(0) if backwards => last,
            Some(i) if !backwards && i == focusable.len() - 1 => first,
            Some(_) => return Vec::new(),
        };
        vec![Effect::focus(target)]
    }

    /// Focusable descendants, in document order. Collected from the
    /// children so the dialog's own hidden state does not hide them.
    fn focusable(&self, document: &Document) -> Vec<String> {
        document
            .get(&self.dialog_id)
            .map(|dialog| {
                dialog
                    .child_elements()
                    .iter()
                    .flat_map(collect_focusable)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn backdrop(&self) -> Element {
        create_element(
            &Descriptor::new("div")
                .class(classes::DIALOG_BACKDROP)
                .attr("id", self.backdrop_id.as_str()),
        )
    }
}
