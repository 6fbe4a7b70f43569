//! Renderable node tree.
//!
//! A [`Node`] describes what to render; resolving it against a
//! [`RenderContext`] produces plain [`Element`]s. Components resolve lazily
//! so they see the context provided by their ancestors.

use markup::Element;

use crate::context::RenderContext;
use crate::error::RenderError;

/// A unit that renders itself against the current context.
pub trait Component: Send + Sync {
    /// Name used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Render to zero or more elements.
    fn render(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Element>, RenderError>;
}

pub enum Node {
    /// A bare text node.
    Text(String),
    /// An element whose children are themselves nodes.
    Element(Element, Vec<Node>),
    Component(Box<dyn Component>),
    /// Several nodes rendered in place, without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn element(element: Element, children: Vec<Node>) -> Self {
        Self::Element(element, children)
    }

    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Box::new(component))
    }

    pub fn fragment(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }

    /// Resolve this node into elements.
    pub fn resolve(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Element>, RenderError> {
        match self {
            Node::Text(text) => Ok(vec![Element::text(text.clone())]),
            Node::Element(element, children) if children.is_empty() => Ok(vec![element.clone()]),
            Node::Element(element, children) => {
                let children = resolve_all(children, cx)?;
                Ok(vec![element.clone().children(children)])
            }
            Node::Component(component) => component.render(cx),
            Node::Fragment(nodes) => resolve_all(nodes, cx),
        }
    }
}

/// Resolve a list of nodes, concatenating their output.
pub fn resolve_all(
    nodes: &[Node],
    cx: &mut RenderContext<'_>,
) -> Result<Vec<Element>, RenderError> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        out.extend(node.resolve(cx)?);
    }
    Ok(out)
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value, Vec::new())
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Element(el, children) => f
                .debug_tuple("Element")
                .field(&el.tag)
                .field(children)
                .finish(),
            Self::Component(c) => write!(f, "Component({})", c.name()),
            Self::Fragment(nodes) => f.debug_tuple("Fragment").field(nodes).finish(),
        }
    }
}
