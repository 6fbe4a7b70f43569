mod attrs;
mod content;
mod node;

pub use attrs::{AttrValue, Attributes};
pub use content::Content;
pub use node::Element;

/// Find an element by its internal key in the tree.
pub fn find_element<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    find(root, &|el| el.key == key)
}

/// Find an element by its `id` attribute.
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find(root, &|el| el.id.as_deref() == Some(id))
}

/// Find the first element (depth-first) carrying the attribute `name`.
pub fn find_by_attr<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    find(root, &|el| el.has_attr(name))
}

fn find<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find(child, pred) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::div()
            .id("root")
            .child(Element::p().id("intro").child(Element::text("hello")))
            .child(Element::button().flag("data-toggle").child(Element::text("go")))
    }

    #[test]
    fn test_find_by_id() {
        let root = tree();
        let found = find_by_id(&root, "intro").map(Element::text_content);
        assert_eq!(found.as_deref(), Some("hello"));
        assert!(find_by_id(&root, "missing").is_none());
    }

    #[test]
    fn test_find_by_attr() {
        let root = tree();
        let button = find_by_attr(&root, "data-toggle");
        assert_eq!(button.and_then(|b| b.tag.as_deref()), Some("button"));
    }

    #[test]
    fn test_find_element_by_key() {
        let root = tree();
        let key = root.child_elements()[1].key.clone();
        let found = find_element(&root, &key);
        assert_eq!(found.map(Element::text_content).as_deref(), Some("go"));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = Element::div();
        let b = Element::div();
        assert_ne!(a.key, b.key);
    }
}
