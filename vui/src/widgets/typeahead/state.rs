//! Typeahead widget state.

use vuidom::Element;

use crate::config::TypeaheadConfig;
use crate::effect::{Listener, ListenerKind};
use crate::error::InitError;
use crate::widgets::WidgetId;

use super::filter::{VisibleSet, filter};
use super::registry::{OptionSet, SelectSource, TypeaheadOption};
use super::render;

/// Element IDs of one typeahead's generated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadIds {
    pub root: String,
    pub field: String,
    pub label: String,
    /// The text field. Reuses the source `<select>` ID.
    pub input: String,
    pub toggle: String,
    /// The hidden field carrying the committed value.
    pub hidden: String,
    pub listbox: String,
}

impl TypeaheadIds {
    pub fn new(base: &str) -> Self {
        Self {
            root: format!("{base}-typeahead"),
            field: format!("{base}-field"),
            label: format!("{base}-label"),
            input: base.to_string(),
            toggle: format!("{base}-toggle"),
            hidden: format!("{base}-value"),
            listbox: format!("{base}-listbox"),
        }
    }

    /// ID of the option rendered at `index` of the visible set.
    pub fn option(&self, index: usize) -> String {
        format!("{}-opt-{}", self.listbox, index)
    }

    pub fn placeholder(&self) -> String {
        format!("{}-no-matches", self.listbox)
    }

    /// Visible-set index of a rendered option ID.
    pub fn option_index(&self, id: &str) -> Option<usize> {
        id.strip_prefix(&self.listbox)?
            .strip_prefix("-opt-")?
            .parse()
            .ok()
    }

    /// Whether `id` belongs to this widget's markup.
    pub fn owns(&self, id: &str) -> bool {
        [
            &self.root,
            &self.field,
            &self.label,
            &self.input,
            &self.toggle,
            &self.hidden,
            &self.listbox,
        ]
        .into_iter()
        .any(|own| own == id)
            || id
                .strip_prefix(&self.listbox)
                .is_some_and(|rest| rest.starts_with('-'))
    }
}

/// Interaction state, reset on every close.
#[derive(Debug, Clone, Default)]
pub(super) struct Session {
    pub open: bool,
    /// Characters typed since the dropdown opened.
    pub query: String,
    pub visible: VisibleSet,
    pub highlighted: Option<usize>,
    /// What the text field displays.
    pub input_value: String,
    /// What the text field returns to when a live preview is discarded.
    pub restore_value: String,
    /// Whether dropdown click delegation is attached.
    pub bound: bool,
    /// Bumped on every open; stale deferred binds carry an older value.
    pub generation: u64,
}

/// A mounted typeahead.
///
/// Instances own all their state; nothing is shared between them.
#[derive(Debug, Clone)]
pub struct Typeahead {
    pub(super) id: WidgetId,
    pub(super) config: TypeaheadConfig,
    pub(super) ids: TypeaheadIds,
    pub(super) options: OptionSet,
    pub(super) session: Session,
    pub(super) committed: Option<TypeaheadOption>,
}

impl Typeahead {
    /// Build a typeahead from an extracted source control, together with
    /// the markup that replaces it.
    pub fn mount(
        source: SelectSource,
        config: TypeaheadConfig,
    ) -> Result<(Self, Element), InitError> {
        if source.options.is_empty() {
            return Err(InitError::NoOptions {
                selector: config.typeahead.clone(),
            });
        }

        let ids = TypeaheadIds::new(&source.id);
        let visible = filter(&source.options, "", config.max_results);
        let markup = render::typeahead_markup(&source, &ids, &config);

        log::debug!(
            "Typeahead::mount input={} options={} max_results={}",
            ids.input,
            source.options.len(),
            config.max_results
        );

        let typeahead = Self {
            id: WidgetId::new(),
            config,
            ids,
            options: source.options,
            session: Session {
                visible,
                ..Default::default()
            },
            committed: None,
        };
        Ok((typeahead, markup))
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn ids(&self) -> &TypeaheadIds {
        &self.ids
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// All registered options.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.session.open
    }

    pub fn query(&self) -> &str {
        &self.session.query
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.session.visible
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.session.highlighted
    }

    pub fn highlighted_option(&self) -> Option<&TypeaheadOption> {
        self.session
            .highlighted
            .and_then(|index| self.session.visible.get(index))
    }

    /// Text currently displayed in the text field.
    pub fn input_value(&self) -> &str {
        &self.session.input_value
    }

    /// Last committed option, mirrored in the hidden field.
    pub fn committed(&self) -> Option<&TypeaheadOption> {
        self.committed.as_ref()
    }

    /// Whether dropdown click delegation is attached.
    pub fn is_bound(&self) -> bool {
        self.session.bound
    }

    /// The dropdown click listener this widget asks its host to manage.
    pub fn listener(&self) -> Listener {
        Listener {
            widget: self.id,
            kind: ListenerKind::DropdownClick,
        }
    }
}
