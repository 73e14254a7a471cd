//! Cross-select widget state and transitions.

use std::collections::HashMap;

use crossdom::{Element, TextMetrics};

use crate::buttons::{Button, ButtonKind, ButtonSet};
use crate::config::CrossSelectConfig;
use crate::control::SourceControl;
use crate::focus::FocusSet;
use crate::layout::{self, Dimensions};
use crate::pane::{build_panes, Pane, PaneKind, VisualItem};

/// What a rendered element id stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    Item { pane: PaneKind, index: usize },
    Button(ButtonKind),
}

/// Direction of a completed move, for button bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Select,
    Remove,
}

/// A two-pane picker over one multi-select control.
///
/// The widget owns its control model; the rendered markup is derived from
/// it (see [`CrossSelect::render`]). Every operation returns whether state
/// changed. Stale or disabled input is ignored rather than reported.
#[derive(Debug, Clone)]
pub struct CrossSelect {
    /// Id of the rendered container.
    pub(super) id: String,
    pub(super) config: CrossSelectConfig,
    pub(super) control: SourceControl,
    /// The original `<select>` markup, kept hidden inside the container.
    pub(super) native: Element,
    pub(super) dimensions: Dimensions,
    pub(super) options: Pane,
    pub(super) chosen: Pane,
    pub(super) focus: FocusSet,
    pub(super) buttons: ButtonSet,
    /// Rendered element ids mapped to what they control. Rebuilt by render.
    pub(super) targets: HashMap<String, Target>,
    dirty: bool,
}

impl CrossSelect {
    /// Attach to a control. Returns None if the control is not a
    /// multi-select.
    pub fn attach(
        control: SourceControl,
        config: CrossSelectConfig,
        metrics: &dyn TextMetrics,
    ) -> Option<Self> {
        let native = control.to_element();
        Self::attach_native(control, native, config, metrics)
    }

    /// Attach to a control read from `native`, keeping that element's markup
    /// for the hidden control.
    pub fn attach_element(
        native: &Element,
        config: CrossSelectConfig,
        metrics: &dyn TextMetrics,
    ) -> Option<Self> {
        let control = SourceControl::from_element(native)?;
        Self::attach_native(control, native.clone(), config, metrics)
    }

    fn attach_native(
        control: SourceControl,
        native: Element,
        config: CrossSelectConfig,
        metrics: &dyn TextMetrics,
    ) -> Option<Self> {
        if !control.multiple {
            log::debug!("[crossselect] skipping '{}': not a multi-select", control.id);
            return None;
        }

        let longest = layout::measure_longest(&control, &config, metrics);
        let dimensions = layout::compute(control.len(), longest, &config);
        log::debug!(
            "[crossselect] attach '{}': {} options, dimensions={:?}",
            control.id,
            control.len(),
            dimensions
        );

        let (options, chosen) = build_panes(&control);

        let mut buttons = ButtonSet::new(&config.labels);
        buttons.set_enabled(ButtonKind::SelectAll, !options.is_empty());
        buttons.set_enabled(ButtonKind::RemoveAll, !chosen.is_empty());

        Some(Self {
            id: format!("{}-jqxs", control.id),
            config,
            control,
            native,
            dimensions,
            options,
            chosen,
            focus: FocusSet::new(),
            buttons,
            targets: HashMap::new(),
            dirty: true,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Id of the rendered container element.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &CrossSelectConfig {
        &self.config
    }

    pub fn control(&self) -> &SourceControl {
        &self.control
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn options_pane(&self) -> &Pane {
        &self.options
    }

    pub fn chosen_pane(&self) -> &Pane {
        &self.chosen
    }

    pub fn pane(&self, kind: PaneKind) -> &Pane {
        match kind {
            PaneKind::Options => &self.options,
            PaneKind::Chosen => &self.chosen,
        }
    }

    /// The pane currently showing option `index`.
    pub fn pane_of(&self, index: usize) -> Option<PaneKind> {
        if self.options.contains(index) {
            Some(PaneKind::Options)
        } else if self.chosen.contains(index) {
            Some(PaneKind::Chosen)
        } else {
            None
        }
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focus.is_focused(index)
    }

    /// Focused option indices in `pane`, in pane order.
    pub fn focused_in(&self, pane: PaneKind) -> Vec<usize> {
        self.focus.focused_in(self.pane(pane))
    }

    pub fn is_enabled(&self, kind: ButtonKind) -> bool {
        self.buttons.is_enabled(kind)
    }

    pub fn button(&self, kind: ButtonKind) -> &Button {
        self.buttons.get(kind)
    }

    /// Whether the widget changed since it was last rendered.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(super) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn pane_mut(&mut self, kind: PaneKind) -> &mut Pane {
        match kind {
            PaneKind::Options => &mut self.options,
            PaneKind::Chosen => &mut self.chosen,
        }
    }

    // -------------------------------------------------------------------------
    // Item gestures
    // -------------------------------------------------------------------------

    /// A single click on the item for option `index` in `pane`.
    ///
    /// Moves the item in click-selects mode, otherwise toggles its focus.
    /// Clicks on items no longer shown in `pane` are ignored.
    pub fn click_item(&mut self, pane: PaneKind, index: usize) -> bool {
        if !self.pane(pane).contains(index) {
            log::trace!("[crossselect] stale click on {} item {}", pane.as_str(), index);
            return false;
        }

        if self.config.click_selects {
            match pane {
                PaneKind::Options => self.select_now(index),
                PaneKind::Chosen => self.remove_now(index),
            }
        } else {
            self.toggle_focus(pane, index)
        }
    }

    /// A double click on the item for option `index` in `pane`. Moves the
    /// item when double click is enabled, whatever its focus.
    pub fn double_click_item(&mut self, pane: PaneKind, index: usize) -> bool {
        if !self.config.dblclick {
            return false;
        }
        match pane {
            PaneKind::Options => self.select_now(index),
            PaneKind::Chosen => self.remove_now(index),
        }
    }

    fn toggle_focus(&mut self, pane: PaneKind, index: usize) -> bool {
        if self.focus.unfocus(index) {
            log::trace!("[crossselect] unfocus {} item {}", pane.as_str(), index);
            if !self.focus.any_in(self.pane(pane)) {
                self.buttons.disable(ButtonKind::Select);
                self.buttons.disable(ButtonKind::Remove);
            }
            self.dirty = true;
            return true;
        }

        if self.config.clicks_accumulate {
            let opposite = pane.opposite();
            let cleared = match opposite {
                PaneKind::Options => self.focus.clear_in(&self.options),
                PaneKind::Chosen => self.focus.clear_in(&self.chosen),
            };
            log::trace!("[crossselect] cleared {} focus {:?}", opposite.as_str(), cleared);
        } else {
            self.focus.clear();
        }

        self.focus.focus(index);
        log::trace!("[crossselect] focus {} item {}", pane.as_str(), index);
        match pane {
            PaneKind::Options => {
                self.buttons.enable(ButtonKind::Select);
                self.buttons.disable(ButtonKind::Remove);
            }
            PaneKind::Chosen => {
                self.buttons.enable(ButtonKind::Remove);
                self.buttons.disable(ButtonKind::Select);
            }
        }
        self.dirty = true;
        true
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Move option `index` to the chosen pane if it is currently unselected.
    ///
    /// This is the primitive under every select action and does no button
    /// bookkeeping of its own.
    pub fn select_one(&mut self, index: usize) -> bool {
        self.move_one(index, PaneKind::Options)
    }

    /// Move option `index` back to the options pane if it is currently
    /// selected.
    pub fn remove_one(&mut self, index: usize) -> bool {
        self.move_one(index, PaneKind::Chosen)
    }

    fn move_one(&mut self, index: usize, from: PaneKind) -> bool {
        let expect_selected = from == PaneKind::Chosen;
        if self.control.is_selected(index) != Some(expect_selected) {
            log::trace!(
                "[crossselect] ignoring move of {} from {}: already moved",
                index,
                from.as_str()
            );
            return false;
        }

        let Some(item) = self.pane_mut(from).remove(index) else {
            return false;
        };
        self.control.set_selected(index, !expect_selected);
        self.focus.unfocus(index);
        log::trace!(
            "[crossselect] moved {} ({:?}) {} -> {}",
            index,
            item.label,
            from.as_str(),
            from.opposite().as_str()
        );
        self.pane_mut(from.opposite()).push(VisualItem {
            index: item.index,
            label: item.label,
        });
        self.dirty = true;
        true
    }

    fn select_now(&mut self, index: usize) -> bool {
        let moved = self.select_one(index);
        if moved {
            self.after_move(Move::Select);
        }
        moved
    }

    fn remove_now(&mut self, index: usize) -> bool {
        let moved = self.remove_one(index);
        if moved {
            self.after_move(Move::Remove);
        }
        moved
    }

    /// Move every focused option to the chosen pane.
    pub fn select_many(&mut self) -> bool {
        let focused = self.focus.focused_in(&self.options);
        self.apply_moves(&focused, Move::Select)
    }

    /// Move every focused chosen item back to the options pane.
    pub fn remove_many(&mut self) -> bool {
        let focused = self.focus.focused_in(&self.chosen);
        self.apply_moves(&focused, Move::Remove)
    }

    /// Move every option to the chosen pane.
    pub fn select_all(&mut self) -> bool {
        let all = self.options.indices();
        let moved = self.apply_moves(&all, Move::Select);
        if moved {
            self.buttons.disable(ButtonKind::Remove);
        }
        moved
    }

    /// Move every chosen item back to the options pane.
    pub fn remove_all(&mut self) -> bool {
        let all = self.chosen.indices();
        let moved = self.apply_moves(&all, Move::Remove);
        if moved {
            self.buttons.disable(ButtonKind::Select);
        }
        moved
    }

    fn apply_moves(&mut self, indices: &[usize], direction: Move) -> bool {
        let mut moved = false;
        for &index in indices {
            moved |= match direction {
                Move::Select => self.select_one(index),
                Move::Remove => self.remove_one(index),
            };
        }
        if moved {
            self.after_move(direction);
        }
        moved
    }

    fn after_move(&mut self, direction: Move) {
        // Focus left in the source pane survives only when accumulating
        let source = match direction {
            Move::Select => PaneKind::Options,
            Move::Remove => PaneKind::Chosen,
        };
        if self.config.clicks_accumulate {
            let opposite = source.opposite();
            match opposite {
                PaneKind::Options => self.focus.clear_in(&self.options),
                PaneKind::Chosen => self.focus.clear_in(&self.chosen),
            };
            if !self.focus.any_in(self.pane(opposite)) {
                let kind = match opposite {
                    PaneKind::Options => ButtonKind::Select,
                    PaneKind::Chosen => ButtonKind::Remove,
                };
                self.buttons.disable(kind);
            }
        } else {
            self.focus.clear();
            self.buttons.disable(ButtonKind::Select);
            self.buttons.disable(ButtonKind::Remove);
        }

        match direction {
            Move::Select => {
                self.buttons.disable(ButtonKind::Select);
                self.buttons.enable(ButtonKind::RemoveAll);
                if self.options.is_empty() {
                    self.buttons.disable(ButtonKind::SelectAll);
                }
            }
            Move::Remove => {
                self.buttons.disable(ButtonKind::Remove);
                self.buttons.enable(ButtonKind::SelectAll);
                if self.chosen.is_empty() {
                    self.buttons.disable(ButtonKind::RemoveAll);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Buttons
    // -------------------------------------------------------------------------

    /// Press a button. Disabled buttons ignore the press.
    pub fn press(&mut self, kind: ButtonKind) -> bool {
        if !self.buttons.is_enabled(kind) {
            log::trace!("[crossselect] {:?} pressed while disabled", kind);
            return false;
        }
        match kind {
            ButtonKind::Select => self.select_many(),
            ButtonKind::Remove => self.remove_many(),
            ButtonKind::SelectAll => self.select_all(),
            ButtonKind::RemoveAll => self.remove_all(),
        }
    }
}
