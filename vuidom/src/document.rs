use crate::element::{find_element, find_element_mut, query, query_all, Content, Element, Selector};

/// An owned markup tree rooted at the page element.
///
/// All mutation goes through element IDs. Operations report whether their
/// target existed instead of failing, leaving the caller to decide whether a
/// missing target is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn query(&self, selector: &str) -> Option<&Element> {
        query(&self.root, &Selector::parse(selector))
    }

    pub fn query_all(&self, selector: &str) -> Vec<&Element> {
        query_all(&self.root, &Selector::parse(selector))
    }

    /// Whether `id` is `ancestor_id` or lies inside it.
    pub fn contains(&self, ancestor_id: &str, id: &str) -> bool {
        self.get(ancestor_id)
            .map(|ancestor| find_element(ancestor, id).is_some())
            .unwrap_or(false)
    }

    /// Replace the element with `id` by `element`, returning the old one.
    pub fn replace(&mut self, id: &str, element: Element) -> Option<Element> {
        if self.root.id == id {
            return Some(std::mem::replace(&mut self.root, element));
        }
        let parent = find_parent_mut(&mut self.root, id)?;
        let children = parent.child_elements_mut()?;
        let slot = children.iter_mut().find(|child| child.id == id)?;
        Some(std::mem::replace(slot, element))
    }

    /// Append `element` as the last child of `parent_id`.
    /// Returns false if the parent does not exist.
    pub fn append_child(&mut self, parent_id: &str, element: Element) -> bool {
        let Some(parent) = self.get_mut(parent_id) else {
            return false;
        };
        match &mut parent.content {
            Content::Children(children) => children.push(element),
            content => *content = Content::Children(vec![element]),
        }
        true
    }

    /// Detach the element with `id`. The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let parent = find_parent_mut(&mut self.root, id)?;
        let children = parent.child_elements_mut()?;
        let index = children.iter().position(|child| child.id == id)?;
        Some(children.remove(index))
    }
}

fn find_parent_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.child_elements().iter().any(|child| child.id == id) {
        return Some(root);
    }
    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_parent_mut(child, id) {
                return Some(found);
            }
        }
    }
    None
}
