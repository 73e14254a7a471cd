//! Routing input events to widget operations.

use crossdom::Event;

use super::state::{CrossSelect, Target};

impl CrossSelect {
    /// Whether the element with `id` belongs to this widget's last render.
    pub fn owns(&self, id: &str) -> bool {
        id == self.id || self.targets.contains_key(id)
    }

    /// Handle an event that bubbled through `path` (element ids from the
    /// document root to the event target).
    ///
    /// The innermost element of the path known from the last render decides
    /// what the event means. Returns whether widget state changed.
    pub fn handle_event(&mut self, event: &Event, path: &[String]) -> bool {
        let Some(target) = path.iter().rev().find_map(|id| self.targets.get(id).copied()) else {
            return false;
        };

        match (event, target) {
            (Event::Click { .. }, _) if !event.is_primary_click() => false,
            (Event::Click { .. }, Target::Item { pane, index }) => self.click_item(pane, index),
            (Event::DoubleClick { .. }, Target::Item { pane, index }) => {
                self.double_click_item(pane, index)
            }
            (Event::Click { .. }, Target::Button(kind)) => self.press(kind),
            _ => false,
        }
    }
}
