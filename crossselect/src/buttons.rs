//! The four control buttons and their enabled state.
//!
//! A rendered button shows its state twice: the `jqxs_active` class and
//! the `disabled` attribute. [`Button::apply_to`] writes both together and
//! event dispatch trusts the attribute.

use crossdom::Element;

use crate::config::ButtonLabels;

pub const ACTIVE_CLASS: &str = "jqxs_active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Move focused options to the chosen pane.
    Select,
    /// Move focused chosen items back.
    Remove,
    SelectAll,
    RemoveAll,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 4] = [
        ButtonKind::Select,
        ButtonKind::Remove,
        ButtonKind::SelectAll,
        ButtonKind::RemoveAll,
    ];

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Select => "jqxs_selectButton",
            Self::Remove => "jqxs_removeButton",
            Self::SelectAll => "jqxs_selectAllButton",
            Self::RemoveAll => "jqxs_removeAllButton",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Remove => "remove",
            Self::SelectAll => "select-all",
            Self::RemoveAll => "remove-all",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Select => 0,
            Self::Remove => 1,
            Self::SelectAll => 2,
            Self::RemoveAll => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub kind: ButtonKind,
    pub label: String,
    enabled: bool,
}

impl Button {
    pub fn new(kind: ButtonKind, label: impl Into<String>, enabled: bool) -> Self {
        Self {
            kind,
            label: label.into(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write the enabled state onto a rendered button as both the active
    /// class and the disabled attribute.
    pub fn apply_to(&self, element: &mut Element) {
        if self.enabled {
            element.add_class(ACTIVE_CLASS);
            element.remove_attr("disabled");
        } else {
            element.remove_class(ACTIVE_CLASS);
            element.set_attr("disabled", "disabled");
        }
    }
}

/// Whether a rendered element is disabled, by attribute.
pub fn is_disabled(element: &Element) -> bool {
    element.has_attr("disabled")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSet {
    buttons: [Button; 4],
}

impl ButtonSet {
    /// All buttons start disabled.
    pub fn new(labels: &ButtonLabels) -> Self {
        Self {
            buttons: [
                Button::new(ButtonKind::Select, labels.select.clone(), false),
                Button::new(ButtonKind::Remove, labels.remove.clone(), false),
                Button::new(ButtonKind::SelectAll, labels.select_all.clone(), false),
                Button::new(ButtonKind::RemoveAll, labels.remove_all.clone(), false),
            ],
        }
    }

    pub fn get(&self, kind: ButtonKind) -> &Button {
        &self.buttons[kind.slot()]
    }

    pub fn is_enabled(&self, kind: ButtonKind) -> bool {
        self.get(kind).enabled
    }

    pub fn enable(&mut self, kind: ButtonKind) {
        self.set_enabled(kind, true);
    }

    pub fn disable(&mut self, kind: ButtonKind) {
        self.set_enabled(kind, false);
    }

    pub fn set_enabled(&mut self, kind: ButtonKind, enabled: bool) {
        let button = &mut self.buttons[kind.slot()];
        if button.enabled != enabled {
            log::trace!("[buttons] {:?} enabled={}", kind, enabled);
            button.enabled = enabled;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }
}
