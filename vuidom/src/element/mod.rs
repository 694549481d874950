mod content;
mod descriptor;
mod node;
mod selector;

pub use content::Content;
pub use descriptor::{create_element, AttrValue, ClassName, Descriptor};
pub use node::Element;
pub use selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching `selector`, in document order.
pub fn query_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_matching(root, selector, &mut found);
    found
}

fn collect_matching<'a>(element: &'a Element, selector: &Selector, out: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect_matching(child, selector, out);
    }
}

/// First element matching `selector`, in document order.
pub fn query<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(root) {
        return Some(root);
    }
    root.child_elements()
        .iter()
        .find_map(|child| query(child, selector))
}
