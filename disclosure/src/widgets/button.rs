//! Disclosure trigger button.

use std::sync::Arc;

use markup::{AttrValue, Attributes, Element, Event};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handlers::{Handler, callback_handler, wrap_event};
use crate::node::{Component, Node, resolve_all};
use crate::node_ref::NodeRef;

use super::DisclosureContext;

/// Button that toggles the nearest enclosing disclosure.
///
/// Renders a `<button>` carrying `data-disclosure-button`, `data-state`,
/// `aria-expanded` and `aria-controls`. A caller `on_click` runs before the
/// disclosure's own select logic; both always run.
///
/// # Example
///
/// ```ignore
/// DisclosureButton::new()
///     .label("Show details")
///     .attr("class", "toggle")
///     .on_click(|_| log::info!("clicked"))
/// ```
#[derive(Default)]
pub struct DisclosureButton {
    children: Vec<Node>,
    on_click: Option<Handler>,
    attrs: Attributes,
    node_ref: Option<NodeRef>,
}

impl DisclosureButton {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text label as the only child.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.children = vec![Node::text(label)];
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Caller click handler, run before the toggle.
    pub fn on_click(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    /// Pass an attribute through to the `<button>`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs.extend(&attrs);
        self
    }

    /// Bind `node_ref` to the rendered `<button>`.
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }
}

impl Component for DisclosureButton {
    fn name(&self) -> &'static str {
        "DisclosureButton"
    }

    fn render(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Element>, RenderError> {
        let disclosure = cx.use_context::<DisclosureContext>(self.name())?;
        let children = resolve_all(&self.children, cx)?;

        // Contract attributes go last so passthrough can't override them
        let element = Element::button()
            .attrs(&self.attrs)
            .flag("data-disclosure-button")
            .attr("data-state", disclosure.data_state().as_str())
            .attr("aria-expanded", disclosure.is_open)
            .attr("aria-controls", &disclosure.panel_id)
            .children(children);

        cx.on(
            &element.key,
            "click",
            wrap_event(
                self.on_click.clone(),
                Some(callback_handler(disclosure.on_select)),
            ),
        );
        if let Some(node_ref) = &self.node_ref {
            node_ref.bind(&element);
        }

        Ok(vec![element])
    }
}

impl From<DisclosureButton> for Node {
    fn from(value: DisclosureButton) -> Self {
        Node::component(value)
    }
}
