//! The native `<select>` control a widget mirrors.
//!
//! The control is the source of truth for selection state: whatever its
//! options' `selected` flags say is what a form submission carries.

use crossdom::{Content, Element};
use serde::{Deserialize, Serialize};

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            selected,
        }
    }
}

/// A native select control. Options are addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceControl {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    options: Vec<SelectOption>,
}

impl SourceControl {
    /// A multi-select control with no options.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            multiple: true,
            options: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Append an option whose value is its label.
    pub fn option(self, label: impl Into<String>, selected: bool) -> Self {
        let label = label.into();
        let value = label.clone();
        self.option_with_value(label, value, selected)
    }

    pub fn option_with_value(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        selected: bool,
    ) -> Self {
        self.options.push(SelectOption::new(label, value, selected));
        self
    }

    /// Read a control from a `<select>` element. Returns None for any other
    /// element.
    ///
    /// An option is selected when it carries a `selected` attribute, and its
    /// value falls back to its text like a browser would.
    pub fn from_element(element: &Element) -> Option<Self> {
        if !element.tag.eq_ignore_ascii_case("select") {
            return None;
        }

        let options = element
            .child_elements()
            .iter()
            .filter(|child| child.tag.eq_ignore_ascii_case("option"))
            .map(|child| {
                let label = child.text_value();
                let value = child
                    .get_attr("value")
                    .map(str::to_string)
                    .unwrap_or_else(|| label.clone());
                SelectOption::new(label, value, child.has_attr("selected"))
            })
            .collect();

        Some(Self {
            id: element.id.clone(),
            name: element.get_attr("name").map(str::to_string),
            multiple: element.has_attr("multiple"),
            options,
        })
    }

    /// Build a fresh `<select>` element for this control.
    pub fn to_element(&self) -> Element {
        let mut select = Element::select().id(self.id.clone());
        if let Some(name) = &self.name {
            select.set_attr("name", name.clone());
        }
        if self.multiple {
            select.set_attr("multiple", "multiple");
        }
        select.children(self.options.iter().map(|opt| {
            let el = Element::option(opt.label.clone()).attr("value", opt.value.clone());
            if opt.selected {
                el.attr("selected", "selected")
            } else {
                el
            }
        }))
    }

    /// Write the selected flags onto the `<option>` children of `select`,
    /// matching options by position.
    pub fn sync_element(&self, select: &mut Element) {
        let Content::Children(children) = &mut select.content else {
            return;
        };
        let option_elements = children
            .iter_mut()
            .filter(|child| child.tag.eq_ignore_ascii_case("option"));
        for (option, el) in self.options.iter().zip(option_elements) {
            if option.selected {
                el.set_attr("selected", "selected");
            } else {
                el.remove_attr("selected");
            }
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Selected flag of the option at `index`, or None if out of range.
    pub fn is_selected(&self, index: usize) -> Option<bool> {
        self.options.get(index).map(|opt| opt.selected)
    }

    /// Set the selected flag. Returns false if the index is out of range or
    /// the flag already had that value.
    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.options.get_mut(index) {
            Some(opt) if opt.selected != selected => {
                opt.selected = selected;
                true
            }
            _ => false,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|opt| opt.selected).count()
    }

    /// Values a form submission carries, in option order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|opt| opt.selected)
            .map(|opt| opt.value.as_str())
            .collect()
    }
}
