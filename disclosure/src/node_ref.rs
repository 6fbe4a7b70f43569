use std::sync::{Arc, RwLock};

use markup::{Element, find_element};

/// Handle to a rendered element, forwarded by the caller to a component.
///
/// The component binds the handle to the element it renders; after a render
/// the caller can look the element up in the output tree.
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    key: Arc<RwLock<Option<String>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to an element. Called by components while rendering.
    pub fn bind(&self, element: &Element) {
        if let Ok(mut key) = self.key.write() {
            *key = Some(element.key.clone());
        }
    }

    /// Key of the element bound by the most recent render.
    pub fn key(&self) -> Option<String> {
        self.key.read().ok().and_then(|k| k.clone())
    }

    /// Find the bound element in a rendered tree.
    pub fn get<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        let key = self.key()?;
        find_element(root, &key)
    }
}
