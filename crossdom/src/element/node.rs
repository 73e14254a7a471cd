use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::Content;
use crate::types::Style;

/// Tag used for bare text nodes. Rendered as escaped text with no markup.
pub const TEXT_TAG: &str = "#text";

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

fn default_id() -> String {
    generate_id("el")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    // Identity
    #[serde(default = "default_id")]
    pub id: String,
    pub tag: String,

    // Markup
    #[serde(default)]
    pub classes: Vec<String>,
    /// Attributes other than `id`, `class` and `style`, kept sorted so
    /// rendering is deterministic.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub style: Style,

    /// Hidden elements stay in the tree (and keep their data) but render
    /// with `display: none`.
    #[serde(default)]
    pub hidden: bool,

    #[serde(default, skip_serializing_if = "Content::is_none")]
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            style: Style::default(),
            hidden: false,
            content: Content::None,
        }
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Self::new(TEXT_TAG)
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text_content(text)
    }

    pub fn a(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn fieldset() -> Self {
        Self::new("fieldset")
    }

    pub fn legend(text: impl Into<String>) -> Self {
        Self::new("legend").text_content(text)
    }

    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").attr("type", input_type)
    }

    /// An `<input type="button">` with the given caption.
    pub fn button(value: impl Into<String>) -> Self {
        Self::input("button").attr("value", value)
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn option(label: impl Into<String>) -> Self {
        Self::new("option").text_content(label)
    }

    pub fn is_text_node(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children_mut().extend(new_children);
        self
    }

    // Classes
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Toggle a class. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    // Attributes
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    // Children access
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the children, replacing any text content.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!("content was just set to children"),
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children_mut().push(child);
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_value(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
