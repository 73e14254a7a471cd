//! Focus tracking for button-driven mode.
//!
//! Focus marks items staged for the select / remove buttons. Items are
//! tracked by option index, which is unique across both panes.

use std::collections::HashSet;

use crate::pane::Pane;

#[derive(Debug, Clone, Default)]
pub struct FocusSet {
    focused: HashSet<usize>,
}

impl FocusSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused.contains(&index)
    }

    /// Returns false if the item was already focused.
    pub fn focus(&mut self, index: usize) -> bool {
        self.focused.insert(index)
    }

    /// Returns false if the item was not focused.
    pub fn unfocus(&mut self, index: usize) -> bool {
        self.focused.remove(&index)
    }

    /// Clear all focus.
    /// Returns the indices that were unfocused, sorted.
    pub fn clear(&mut self) -> Vec<usize> {
        let mut removed: Vec<_> = self.focused.drain().collect();
        removed.sort_unstable();
        removed
    }

    /// Clear focus of every item shown in `pane`.
    /// Returns the indices that were unfocused, in pane order.
    pub fn clear_in(&mut self, pane: &Pane) -> Vec<usize> {
        pane.indices()
            .into_iter()
            .filter(|index| self.focused.remove(index))
            .collect()
    }

    /// Focused items of `pane`, in pane order.
    pub fn focused_in(&self, pane: &Pane) -> Vec<usize> {
        pane.indices()
            .into_iter()
            .filter(|index| self.focused.contains(index))
            .collect()
    }

    pub fn any_in(&self, pane: &Pane) -> bool {
        pane.items().iter().any(|item| self.focused.contains(&item.index))
    }
}
