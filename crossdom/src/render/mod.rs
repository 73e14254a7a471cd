//! Markup rendering for element trees.

use crate::element::{Content, Element};

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Render an element tree to HTML markup.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    render_element(root, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    if element.is_text_node() {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape_text(text));
        }
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    push_attr(out, "id", &element.id);
    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        push_attr(out, name, value);
    }

    let mut css = element.style.to_css();
    if element.hidden {
        if !css.is_empty() {
            css.push_str("; ");
        }
        css.push_str("display: none");
    }
    if !css.is_empty() {
        push_attr(out, "style", &css);
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
