use log::trace;
use markup::{Element, Event};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handlers::HandlerRegistry;
use crate::node::Node;

/// Drives render passes and dispatches events between them.
///
/// Each render clears the handler registry and re-registers the handlers of
/// the elements it produces, so events always reach the latest tree.
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    registry: HandlerRegistry,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `node` into elements.
    pub fn render(&self, node: &Node) -> Result<Vec<Element>, RenderError> {
        self.registry.clear();
        let mut cx = RenderContext::new(&self.registry);
        let elements = node.resolve(&mut cx)?;
        trace!(
            "render pass produced {} root elements, {} handlers",
            elements.len(),
            self.registry.len()
        );
        Ok(elements)
    }

    /// Resolve `node` as the children of `container`.
    pub fn render_in(&self, container: Element, node: &Node) -> Result<Element, RenderError> {
        Ok(container.children(self.render(node)?))
    }

    /// Deliver a click to the element with the given key.
    ///
    /// Returns false when the element has no click handler.
    pub fn click(&self, element_key: &str) -> bool {
        self.dispatch(&Event::click(element_key))
    }

    pub fn dispatch(&self, event: &Event) -> bool {
        self.registry.dispatch(event)
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}
