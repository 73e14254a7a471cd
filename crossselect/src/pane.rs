//! The two visual lists mirroring a control's options.

use crate::control::SourceControl;

/// Which list an item is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneKind {
    /// Available (unselected) options.
    Options,
    /// Chosen (selected) options.
    Chosen,
}

impl PaneKind {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Options => Self::Chosen,
            Self::Chosen => Self::Options,
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Options => "jqxs_optionsList",
            Self::Chosen => "jqxs_chosenList",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::Chosen => "chosen",
        }
    }
}

/// A list entry referring back to an option by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualItem {
    pub index: usize,
    pub label: String,
}

/// An ordered list of visual items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    items: Vec<VisualItem>,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[VisualItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.position(index).is_some()
    }

    /// Position of the item for option `index`.
    pub fn position(&self, index: usize) -> Option<usize> {
        self.items.iter().position(|item| item.index == index)
    }

    /// Option indices in display order.
    pub fn indices(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.index).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub(crate) fn push(&mut self, item: VisualItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<VisualItem> {
        let pos = self.position(index)?;
        Some(self.items.remove(pos))
    }
}

/// Split a control's options into the options and chosen panes, keeping
/// option order within each.
pub fn build_panes(control: &SourceControl) -> (Pane, Pane) {
    let mut options = Pane::new();
    let mut chosen = Pane::new();

    for (index, opt) in control.options().iter().enumerate() {
        let item = VisualItem {
            index,
            label: opt.label.clone(),
        };
        if opt.selected {
            chosen.push(item);
        } else {
            options.push(item);
        }
    }

    (options, chosen)
}
