//! Disclosure content panel.

use markup::{AttrValue, Attributes, Element};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::node::{Component, Node, resolve_all};
use crate::node_ref::NodeRef;

use super::DisclosureContext;

/// Container shown or hidden by the nearest enclosing disclosure.
///
/// Content is always rendered; a closed panel only gets the `hidden`
/// attribute, so hidden content keeps its place in the tree.
#[derive(Default)]
pub struct DisclosurePanel {
    children: Vec<Node>,
    attrs: Attributes,
    node_ref: Option<NodeRef>,
}

impl DisclosurePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(&attrs);
        self
    }

    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }
}

impl Component for DisclosurePanel {
    fn name(&self) -> &'static str {
        "DisclosurePanel"
    }

    fn render(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Element>, RenderError> {
        let disclosure = cx.use_context::<DisclosureContext>(self.name())?;
        let children = resolve_all(&self.children, cx)?;

        let element = Element::div()
            .attrs(&self.attrs)
            .id(&disclosure.panel_id)
            .hidden(!disclosure.is_open)
            .flag("data-disclosure-panel")
            .attr("data-state", disclosure.data_state().as_str())
            .children(children);

        if let Some(node_ref) = &self.node_ref {
            node_ref.bind(&element);
        }

        Ok(vec![element])
    }
}

impl From<DisclosurePanel> for Node {
    fn from(value: DisclosurePanel) -> Self {
        Node::component(value)
    }
}
