//! Simple CSS-style selectors.
//!
//! Supports the forms the admin pages bind behaviour to: `tag`, `.class`,
//! `tag.class`, `tag[attr]`, `tag[attr="value"]`, and descendant chains of
//! these separated by whitespace (`.edit-form select`).

use crate::element::{Content, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrMatch {
    Present(String),
    Equals(String, String),
}

/// One compound selector, e.g. `select.chosen[multiple]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if element.is_text_node() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match attr {
            AttrMatch::Present(name) => element.has_attr(name),
            AttrMatch::Equals(name, value) => element.get_attr(name) == Some(value.as_str()),
        })
    }
}

/// A parsed selector: compounds joined by the descendant combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    chain: Vec<Compound>,
}

impl Selector {
    /// Parse a selector. Returns None for empty or malformed input.
    pub fn parse(input: &str) -> Option<Self> {
        let chain = split_compounds(input).and_then(|parts| {
            parts
                .into_iter()
                .map(parse_compound)
                .collect::<Option<Vec<_>>>()
        });
        match chain {
            Some(chain) if !chain.is_empty() => Some(Self { chain }),
            _ => {
                log::debug!("[query] invalid selector {:?}", input);
                None
            }
        }
    }

    /// Whether the last element of `path` matches, with the earlier parts
    /// of the chain matching some of its ancestors in order.
    pub fn matches_path(&self, path: &[&Element]) -> bool {
        let Some((target, ancestors)) = path.split_last() else {
            return false;
        };
        let Some((last, rest)) = self.chain.split_last() else {
            return false;
        };
        if !last.matches(target) {
            return false;
        }

        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }

    /// Whether a single element matches, ignoring ancestry.
    pub fn matches(&self, element: &Element) -> bool {
        self.chain.len() == 1 && self.chain[0].matches(element)
    }
}

/// Split on whitespace outside of `[...]`.
fn split_compounds(input: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = None;

    for (i, ch) in input.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return None;
        }
        if ch.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                parts.push(&input[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if depth != 0 {
        return None;
    }
    if let Some(s) = start {
        parts.push(&input[s..]);
    }
    Some(parts)
}

fn parse_compound(input: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = input;

    let tag_end = rest.find(['.', '[']).unwrap_or(rest.len());
    if tag_end > 0 {
        compound.tag = Some(rest[..tag_end].to_string());
    }
    rest = &rest[tag_end..];

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['.', '[']).unwrap_or(after.len());
            if end == 0 {
                return None;
            }
            compound.classes.push(after[..end].to_string());
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix('[') {
            let end = after.find(']')?;
            compound.attrs.push(parse_attr(&after[..end])?);
            rest = &after[end + 1..];
        } else {
            return None;
        }
    }

    Some(compound)
}

fn parse_attr(body: &str) -> Option<AttrMatch> {
    match body.split_once('=') {
        None => {
            let name = body.trim();
            (!name.is_empty()).then(|| AttrMatch::Present(name.to_string()))
        }
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            (!name.is_empty()).then(|| AttrMatch::Equals(name.to_string(), value.to_string()))
        }
    }
}

/// Ids of every element under `root` (inclusive) matching `selector`,
/// in document order.
pub fn select_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut result = Vec::new();
    let mut path = Vec::new();
    select_recursive(root, selector, &mut path, &mut result);
    result
}

fn select_recursive<'a>(
    element: &'a Element,
    selector: &Selector,
    path: &mut Vec<&'a Element>,
    result: &mut Vec<String>,
) {
    path.push(element);
    if selector.matches_path(path) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            select_recursive(child, selector, path, result);
        }
    }
    path.pop();
}

/// First descendant of `element` (exclusive) matching a single-compound
/// selector.
pub fn find_descendant<'a>(element: &'a Element, selector: &Selector) -> Option<&'a Element> {
    for child in element.child_elements() {
        if selector.matches(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant(child, selector) {
            return Some(found);
        }
    }
    None
}
