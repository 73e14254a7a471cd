//! Markup for a cross-select widget.
//!
//! ```text
//! div.jqxs
//!   select (hidden, carries the selected flags)
//!   ul.jqxs_optionsList > li[data-index]*
//!   div.jqxs_buttons > input[type=button]*
//!   ul.jqxs_chosenList > li.jqxs_selected[data-index]*
//!   div (clear: left)
//! ```

use crossdom::{px, Element, Overflow, Style};

use super::state::{CrossSelect, Target};
use crate::buttons::ButtonKind;
use crate::pane::PaneKind;

pub const CONTAINER_CLASS: &str = "jqxs";
pub const BUTTONS_CLASS: &str = "jqxs_buttons";
pub const FOCUSED_CLASS: &str = "jqxs_focused";
pub const SELECTED_CLASS: &str = "jqxs_selected";

/// Attribute marking a native control that already has a widget.
pub const ATTACHED_ATTR: &str = "data-crossselect";

impl CrossSelect {
    /// Render the widget and rebuild the id-to-target map used by event
    /// handling.
    pub fn render(&mut self) -> Element {
        self.targets.clear();

        let mut native = self.native.clone();
        self.control.sync_element(&mut native);
        native.set_attr(ATTACHED_ATTR, "attached");
        native.hidden = true;

        let options_list = self.render_pane(PaneKind::Options);
        let buttons = self.render_buttons();
        let chosen_list = self.render_pane(PaneKind::Chosen);

        self.clear_dirty();

        Element::div()
            .id(self.id.clone())
            .class(CONTAINER_CLASS)
            .child(native)
            .child(options_list)
            .child(buttons)
            .child(chosen_list)
            .child(
                Element::div()
                    .id(format!("{}-clear", self.id))
                    .style(Style::new().set("clear", "left")),
            )
    }

    fn render_pane(&mut self, kind: PaneKind) -> Element {
        let mut list_style = Style::new();
        if let Some(height) = self.dimensions.height {
            list_style.insert("height", px(height));
        }
        if let Some(width) = self.dimensions.width {
            list_style.insert("width", px(width));
        }
        if self.dimensions.clip_horizontal {
            list_style.insert("overflow-x", Overflow::Hidden.as_css());
        }

        let row = px(self.dimensions.row_height);
        let item_style = Style::new()
            .set("line-height", row.clone())
            .set("height", row)
            .set("font-size", px(self.config.font as f32))
            .set("width", px(self.dimensions.longest_label));

        let mut items = Vec::with_capacity(self.pane(kind).len());
        for item in self.pane(kind).items() {
            let id = format!("{}-{}-{}", self.id, kind.as_str(), item.index);
            let mut li = Element::li()
                .id(id.clone())
                .attr("data-index", item.index.to_string())
                .style(item_style.clone())
                .text_content(item.label.clone());
            if kind == PaneKind::Chosen {
                li.add_class(SELECTED_CLASS);
            }
            if self.focus.is_focused(item.index) {
                li.add_class(FOCUSED_CLASS);
            }
            items.push((id, item.index, li));
        }

        let mut list = Element::ul()
            .id(format!("{}-{}", self.id, kind.as_str()))
            .class(kind.css_class())
            .style(list_style);
        for (id, index, li) in items {
            self.targets.insert(id, Target::Item { pane: kind, index });
            list.push_child(li);
        }
        list
    }

    fn render_buttons(&mut self) -> Element {
        let mut group = Element::div()
            .id(format!("{}-buttons", self.id))
            .class(BUTTONS_CLASS);

        for button in self.buttons.iter() {
            let kind = button.kind;
            // Click-selects mode has no focus to act on
            if self.config.click_selects && matches!(kind, ButtonKind::Select | ButtonKind::Remove)
            {
                continue;
            }
            let id = format!("{}-{}", self.id, kind.slug());
            let mut el = Element::button(button.label.clone())
                .id(id.clone())
                .class(kind.css_class());
            button.apply_to(&mut el);
            self.targets.insert(id, Target::Button(kind));
            group.push_child(el);
        }

        group
    }
}
