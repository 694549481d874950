//! Modal widget - a panel shown above a page overlay.

use vuidom::Document;

use crate::classes;
use crate::config::ModalConfig;
use crate::effect::Effect;
use crate::error::InitError;
use crate::keys::KeyAction;

use super::WidgetId;

/// A mounted modal. The overlay is part of the page markup and is only
/// shown or hidden, never created.
#[derive(Debug, Clone)]
pub struct Modal {
    id: WidgetId,
    config: ModalConfig,
    page_id: String,
    modal_id: String,
    open_btn_id: String,
    close_btn_id: Option<String>,
    overlay_id: String,
    open: bool,
}

impl Modal {
    pub fn mount(document: &Document, config: ModalConfig) -> Result<(Self, Vec<Effect>), InitError> {
        let modal = document
            .query(&config.modal)
            .ok_or_else(|| InitError::source_missing(&config.modal))?;
        let open_btn = document
            .query(&config.open_btn)
            .ok_or_else(|| InitError::target_missing(&config.open_btn))?;
        let overlay = document
            .query(&config.overlay)
            .ok_or_else(|| InitError::target_missing(&config.overlay))?;
        let close_btn = document.query(&config.close_btn).map(|el| el.id.clone());

        let page_id = document.root_id().to_string();
        let effects = vec![
            Effect::set_attr(&page_id, "data-ui-modal", "is-initialised"),
            Effect::add_class(&modal.id, classes::IS_HIDDEN),
            Effect::set_attr(&modal.id, "aria-hidden", "true"),
            Effect::add_class(&overlay.id, classes::IS_HIDDEN),
        ];

        log::debug!("Modal::mount modal={} overlay={}", modal.id, overlay.id);

        let widget = Self {
            id: WidgetId::new(),
            page_id,
            modal_id: modal.id.clone(),
            open_btn_id: open_btn.id.clone(),
            close_btn_id: close_btn,
            overlay_id: overlay.id.clone(),
            config,
            open: false,
        };
        Ok((widget, effects))
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn modal_id(&self) -> &str {
        &self.modal_id
    }

    pub fn overlay_id(&self) -> &str {
        &self.overlay_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self) -> Vec<Effect> {
        if self.open {
            return Vec::new();
        }
        self.open = true;

        let mut effects = vec![
            Effect::remove_class(&self.modal_id, classes::IS_HIDDEN),
            Effect::set_attr(&self.modal_id, "aria-hidden", "false"),
        ];
        if self.config.show_overlay {
            effects.push(Effect::remove_class(&self.overlay_id, classes::IS_HIDDEN));
        }
        effects.push(Effect::set_attr(&self.page_id, "data-current-modal", &self.config.modal));
        log::debug!("Modal::show modal={}", self.modal_id);
        effects
    }

    pub fn hide(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        log::debug!("Modal::hide modal={}", self.modal_id);
        vec![
            Effect::add_class(&self.modal_id, classes::IS_HIDDEN),
            Effect::set_attr(&self.modal_id, "aria-hidden", "true"),
            Effect::add_class(&self.overlay_id, classes::IS_HIDDEN),
            Effect::remove_attr(&self.page_id, "data-current-modal"),
        ]
    }

    pub fn on_key(&mut self, action: KeyAction) -> Vec<Effect> {
        match action {
            KeyAction::Dismiss if self.open => self.hide(),
            _ => Vec::new(),
        }
    }

    pub fn on_click(&mut self, target: &str) -> Vec<Effect> {
        if target == self.open_btn_id {
            self.show()
        } else if self.close_btn_id.as_deref() == Some(target) || target == self.overlay_id {
            self.hide()
        } else {
            Vec::new()
        }
    }
}
