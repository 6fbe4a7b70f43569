//! HTML serialization of element trees.

use log::trace;

use crate::config::RenderConfig;
use crate::element::{Content, Element};

/// Serialize an element tree on a single line.
pub fn render_html(root: &Element) -> String {
    render_html_with(root, &RenderConfig::default())
}

/// Serialize an element tree using the given configuration.
pub fn render_html_with(root: &Element, config: &RenderConfig) -> String {
    let mut out = String::new();
    write_element(root, config, 0, &mut out);
    if config.pretty && out.ends_with('\n') {
        out.pop();
    }
    trace!("rendered {} ({} bytes)", root.key, out.len());
    out
}

fn write_element(element: &Element, config: &RenderConfig, depth: usize, out: &mut String) {
    let Some(tag) = element.tag.as_deref() else {
        // Bare text node
        if let Content::Text(text) = &element.content {
            write_indent(config, depth, out);
            escape_into(text, false, out);
            write_newline(config, out);
        }
        return;
    };

    write_indent(config, depth, out);
    out.push('<');
    out.push_str(tag);
    write_attributes(element, out);
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, false, out),
        Content::Children(children) if is_inline(children) => {
            for child in children {
                if let Content::Text(text) = &child.content {
                    escape_into(text, false, out);
                }
            }
        }
        Content::Children(children) => {
            write_newline(config, out);
            for child in children {
                write_element(child, config, depth + 1, out);
            }
            write_indent(config, depth, out);
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    write_newline(config, out);
}

fn write_attributes(element: &Element, out: &mut String) {
    if let Some(id) = &element.id {
        write_attr("id", id, out);
    }
    for (name, value) in element.attrs.iter() {
        write_attr(name, value.as_str(), out);
    }
    if element.hidden {
        out.push_str(" hidden");
    }
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

/// Children made only of text nodes stay on the parent's line.
fn is_inline(children: &[Element]) -> bool {
    children.iter().all(Element::is_text)
}

fn write_indent(config: &RenderConfig, depth: usize, out: &mut String) {
    if config.pretty {
        out.extend(std::iter::repeat_n(' ', depth * config.indent));
    }
}

fn write_newline(config: &RenderConfig, out: &mut String) {
    if config.pretty {
        out.push('\n');
    }
}

fn escape_into(s: &str, attribute: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
