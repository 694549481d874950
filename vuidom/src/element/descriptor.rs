//! Declarative element descriptors.
//!
//! A [`Descriptor`] describes an element the way widget markup is usually
//! written down: a tag, a class name or list of class names, optional text,
//! arbitrary attributes and nested children. [`create_element`] turns a
//! descriptor tree into an [`Element`] tree without touching any document,
//! so markup builders stay pure and testable.
//!
//! Descriptors deserialize from JSON with extra keys treated as attributes:
//!
//! ```ignore
//! let descriptor: Descriptor = serde_json::from_str(r#"{
//!     "element": "ul",
//!     "className": "c-typeahead__dropdown",
//!     "role": "listbox",
//!     "tabindex": -1
//! }"#)?;
//! let list = create_element(&descriptor);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use super::Element;

/// Class names of a descriptor: one string or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClassName {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl ClassName {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::None => &[],
            Self::One(class) => std::slice::from_ref(class),
            Self::Many(classes) => classes,
        };
        slice
            .iter()
            .flat_map(|class| class.split_whitespace())
    }
}

/// Attribute value as written in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Descriptor {
    /// Tag name, `div` when absent.
    pub element: Option<String>,
    pub class_name: ClassName,
    pub text: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub children: Vec<Descriptor>,
    /// Every other key. An `id` entry becomes the element id.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Descriptor {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: Some(element.into()),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class_name = match std::mem::take(&mut self.class_name) {
            ClassName::None => ClassName::One(class),
            ClassName::One(first) => ClassName::Many(vec![first, class]),
            ClassName::Many(mut classes) => {
                classes.push(class);
                ClassName::Many(classes)
            }
        };
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: Descriptor) -> Self {
        self.children.push(child);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Descriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Descriptor>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Build an element tree from a descriptor tree.
///
/// A descriptor carrying both text and children gets the text as a leading
/// [`Element::text_node`], followed by the children.
pub fn create_element(descriptor: &Descriptor) -> Element {
    let tag = descriptor.element.as_deref().unwrap_or("div");
    let mut element = Element::new(tag).classes(descriptor.class_name.iter());

    for (name, value) in &descriptor.attributes {
        if name == "id" {
            element.id = value.to_string();
        } else {
            element.set_attr(name.clone(), value.to_string());
        }
    }

    match (&descriptor.text, descriptor.children.is_empty()) {
        (Some(text), true) => element = element.text(text.clone()),
        (Some(text), false) => {
            element = element
                .child(Element::text_node(text.clone()))
                .children(descriptor.children.iter().map(create_element));
        }
        (None, false) => element = element.children(descriptor.children.iter().map(create_element)),
        (None, true) => {}
    }

    element
}
