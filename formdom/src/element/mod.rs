mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
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

/// Find the first form field carrying the given `name`, in document order.
pub fn find_by_name<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    if root.is_field() && root.name.as_deref() == Some(name) {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_by_name(child, name))
}

/// Find the direct parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let children = root.content.children();
    if children.iter().any(|child| child.id == id) {
        return Some(root);
    }

    children.iter().find_map(|child| find_parent(child, id))
}

/// Find the closest `Form` ancestor of the element with the given ID
/// (the element itself counts).
pub fn find_form<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    fn walk<'a>(
        element: &'a Element,
        id: &str,
        form: Option<&'a Element>,
    ) -> Option<Option<&'a Element>> {
        let form = if element.tag == Tag::Form {
            Some(element)
        } else {
            form
        };
        if element.id == id {
            return Some(form);
        }
        element
            .content
            .children()
            .iter()
            .find_map(|child| walk(child, id, form))
    }

    walk(root, id, None).flatten()
}

/// Collect the names of all form fields, in document order, without duplicates.
pub fn collect_fields(root: &Element) -> Vec<String> {
    fn walk(element: &Element, result: &mut Vec<String>) {
        if element.is_field()
            && let Some(name) = &element.name
            && !result.contains(name)
        {
            result.push(name.clone());
        }
        for child in element.content.children() {
            walk(child, result);
        }
    }

    let mut result = Vec::new();
    walk(root, &mut result);
    result
}

/// Detach the element with the given ID from the tree and return it.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(index) = children.iter().position(|child| child.id == id) {
        return Some(children.remove(index));
    }

    children
        .iter_mut()
        .find_map(|child| remove_element(child, id))
}
