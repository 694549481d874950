use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Selector};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tags that take keyboard focus without an explicit `tabindex`.
const NATIVELY_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea", "iframe"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: String,

    // Presentation hooks
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    pub const TEXT_TAG: &'static str = "text";

    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            content: Content::None,
        }
    }

    /// Bare text run, used where text sits alongside child elements.
    pub fn text_node(text: impl Into<String>) -> Self {
        Self::new(Self::TEXT_TAG).text(text)
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn label() -> Self {
        Self::new("label")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn input(kind: &str) -> Self {
        Self::new("input").attr("type", kind)
    }

    /// Create an `<option>` carrying a value and its visible label.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("option").attr("value", value).text(label)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    /// Returns true if the class list changed.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class.
    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{key}"))
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, empty for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    /// Current value of a form control (`value` attribute).
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    // Interaction
    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    /// Whether this element is removed from presentation via `hidden`
    /// or `aria-hidden="true"`.
    pub fn is_hidden(&self) -> bool {
        self.attributes.contains_key("hidden") || self.get_attr("aria-hidden") == Some("true")
    }

    /// Whether Tab navigation can land on this element.
    pub fn is_focusable(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        if let Some(tabindex) = self.get_attr("tabindex") {
            return tabindex.trim().parse::<i32>().map(|t| t >= 0).unwrap_or(false);
        }
        match self.tag.as_str() {
            "a" => self.attributes.contains_key("href"),
            "input" => self.get_attr("type") != Some("hidden"),
            tag => NATIVELY_FOCUSABLE.contains(&tag),
        }
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        selector.matches(self)
    }
}
