use std::sync::atomic::{AtomicU64, Ordering};

use super::{AttrValue, Attributes, Content};

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

fn generate_key(prefix: &str) -> String {
    let key = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{key}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    /// Internal node key, unique per constructed element. Used for handler
    /// lookup and references; never serialized.
    pub key: String,
    /// Tag name. `None` for bare text nodes.
    pub tag: Option<String>,
    /// The `id` attribute, serialized first when set.
    pub id: Option<String>,

    // Content
    pub content: Content,

    // Attributes
    pub attrs: Attributes,
    /// Serialized as the bare boolean `hidden` attribute.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            key: generate_key("el"),
            tag: None,
            id: None,
            content: Content::None,
            attrs: Attributes::new(),
            hidden: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            key: generate_key(&tag),
            tag: Some(tag),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn p() -> Self {
        Self::new("p")
    }

    /// A `<button type="button">`.
    pub fn button() -> Self {
        Self::new("button").attr("type", "button")
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            key: generate_key("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn is_text(&self) -> bool {
        self.tag.is_none()
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Set an empty-valued marker attribute.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.set(name, AttrValue::Flag);
        self
    }

    /// Merge a whole attribute list over the current one.
    ///
    /// `id` and `hidden` entries are lifted into [`Element::id`] and
    /// [`Element::hidden`], so a later `.id(..)` or `.hidden(..)` replaces
    /// them instead of serializing a second copy.
    pub fn attrs(mut self, attrs: &Attributes) -> Self {
        for (name, value) in attrs.iter() {
            match name {
                "id" => self.id = Some(value.as_str().to_string()),
                "hidden" => self.hidden = !matches!(value, AttrValue::Bool(false)),
                _ => self.attrs.set(name, value.clone()),
            }
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return self.id.as_deref();
        }
        self.attrs.get(name).map(AttrValue::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Child elements, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(s) => out.push_str(s),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
