//! Listing rows and hover styling.
//!
//! `tr.listed` rows open their edit link when clicked and carry a
//! highlight while the pointer is over them. `.ui-widget` elements get a
//! hover class.

use crossdom::query::find_descendant;
use crossdom::{find_element, find_element_mut, Element, Event, Selector};

use crate::page::Outcome;

pub const ROW_SELECTOR: &str = "tr.listed";
pub const EDIT_LINK_SELECTOR: &str = "a.edit-link";
pub const HIGHLIGHT_CLASS: &str = "listed-highlight";
pub const HOVER_SELECTOR: &str = ".ui-widget";
pub const HOVER_CLASS: &str = "ui-state-hover";

/// Innermost element on `path` matching `selector`.
fn nearest_match(root: &Element, path: &[String], selector: &Selector) -> Option<String> {
    path.iter()
        .rev()
        .find(|id| find_element(root, id).is_some_and(|el| selector.matches(el)))
        .cloned()
}

/// Handle an event for listing rows. Returns None if no row is involved.
pub fn handle_row_event(root: &mut Element, event: &Event, path: &[String]) -> Option<Outcome> {
    let selector = Selector::parse(ROW_SELECTOR)?;
    let row_id = nearest_match(root, path, &selector)?;

    match event {
        Event::Click { .. } if event.is_primary_click() => {
            let link = Selector::parse(EDIT_LINK_SELECTOR)?;
            let href = find_element(root, &row_id)
                .and_then(|row| find_descendant(row, &link))
                .and_then(|a| a.get_attr("href"))
                .map(str::to_string);
            match href {
                Some(href) => {
                    log::debug!("[rows] '{}' navigates to {}", row_id, href);
                    Some(Outcome::Navigate(href))
                }
                None => {
                    log::warn!("[rows] '{}' has no edit link", row_id);
                    Some(Outcome::Ignored)
                }
            }
        }
        Event::MouseOver { .. } => {
            find_element_mut(root, &row_id)?.add_class(HIGHLIGHT_CLASS);
            Some(Outcome::Handled)
        }
        Event::MouseOut { .. } => {
            find_element_mut(root, &row_id)?.remove_class(HIGHLIGHT_CLASS);
            Some(Outcome::Handled)
        }
        _ => None,
    }
}

/// Add or remove the hover class on the nearest `.ui-widget`.
pub fn handle_hover_event(root: &mut Element, event: &Event, path: &[String]) -> Option<Outcome> {
    let selector = Selector::parse(HOVER_SELECTOR)?;
    let id = nearest_match(root, path, &selector)?;
    let widget = find_element_mut(root, &id)?;

    match event {
        Event::MouseOver { .. } => {
            widget.add_class(HOVER_CLASS);
            Some(Outcome::Handled)
        }
        Event::MouseOut { .. } => {
            widget.remove_class(HOVER_CLASS);
            Some(Outcome::Handled)
        }
        _ => None,
    }
}
