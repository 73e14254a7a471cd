mod content;
mod node;

pub use content::Content;
pub use node::{Element, TEXT_TAG};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
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

/// The chain of elements from `root` down to the element with `id`, inclusive.
/// Returns None if the element is not in the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if path_to_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_to_recursive<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if path_to_recursive(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Ids of the chain from `root` to `id`, innermost last.
pub fn path_ids(root: &Element, id: &str) -> Vec<String> {
    path_to(root, id)
        .map(|path| path.into_iter().map(|el| el.id.clone()).collect())
        .unwrap_or_default()
}

/// Find the nearest element, starting at `id` and walking up through its
/// ancestors, that satisfies `predicate`.
pub fn closest<'a, F>(root: &'a Element, id: &str, predicate: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let path = path_to(root, id)?;
    path.into_iter().rev().find(|el| predicate(el))
}

/// Replace the element with `id` by `replacement`.
/// Returns the previous element if it was found.
pub fn replace_element(root: &mut Element, id: &str, replacement: Element) -> Option<Element> {
    let target = find_element_mut(root, id)?;
    Some(std::mem::replace(target, replacement))
}
