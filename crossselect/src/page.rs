//! A document with its behaviours attached.
//!
//! `Page` owns the element tree and one [`CrossSelect`] per enhanced
//! control. Input events go through [`Page::dispatch`], which routes them
//! to the widget, row, or hover behaviour they concern and re-renders
//! widgets in place when their state changes.

use crossdom::{
    find_element, path_ids, replace_element, select_all, to_html, Element, Event,
    MonospaceMetrics, Selector, TextMetrics,
};

use crate::buttons::is_disabled;
use crate::config::CrossSelectConfig;
use crate::enhance::{bind_pickers, rows, style_selects, SectionList};
use crate::error::PageError;
use crate::widget::render::ATTACHED_ATTR;
use crate::widget::CrossSelect;

const MULTI_SELECT: &str = "select[multiple]";

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing reacted to the event.
    Ignored,
    /// Page state changed.
    Handled,
    /// The user asked to leave for this URL.
    Navigate(String),
}

impl Outcome {
    /// Combine the outcomes of two behaviours that saw the same event.
    /// Navigation wins over a state change, which wins over nothing.
    pub fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (nav @ Outcome::Navigate(_), _) | (_, nav @ Outcome::Navigate(_)) => nav,
            (Outcome::Handled, _) | (_, Outcome::Handled) => Outcome::Handled,
            _ => Outcome::Ignored,
        }
    }
}

/// Counts from [`Page::enhance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceReport {
    pub pickers: usize,
    pub styled_selects: usize,
    pub cross_selects: usize,
}

pub struct Page {
    root: Element,
    widgets: Vec<CrossSelect>,
    /// Configuration used for cross-selects attached so far.
    config: Option<CrossSelectConfig>,
    metrics: Box<dyn TextMetrics>,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            widgets: Vec::new(),
            config: None,
            metrics: Box::new(MonospaceMetrics::default()),
        }
    }

    /// Load a page from its JSON element tree.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let root: Element = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    /// Use `metrics` to measure option labels for widgets attached later.
    pub fn with_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn to_html(&self) -> String {
        to_html(&self.root)
    }

    pub fn widgets(&self) -> &[CrossSelect] {
        &self.widgets
    }

    /// The widget attached to the control with id `control_id`.
    pub fn widget(&self, control_id: &str) -> Option<&CrossSelect> {
        self.widgets.iter().find(|w| w.control().id == control_id)
    }

    /// Attach every behaviour: pickers, styled selects, then cross-selects.
    pub fn enhance(&mut self, config: CrossSelectConfig) -> EnhanceReport {
        let report = EnhanceReport {
            pickers: bind_pickers(&mut self.root),
            styled_selects: style_selects(&mut self.root),
            cross_selects: self.attach_cross_selects(config),
        };
        log::info!("[page] enhanced: {:?}", report);
        report
    }

    /// Attach a cross-select to every multi-select that does not have one
    /// yet. Returns how many were attached.
    pub fn attach_cross_selects(&mut self, config: CrossSelectConfig) -> usize {
        let Some(selector) = Selector::parse(MULTI_SELECT) else {
            return 0;
        };

        let mut attached = 0;
        for id in select_all(&self.root, &selector) {
            if self.widget(&id).is_some() {
                continue;
            }
            let Some(native) = find_element(&self.root, &id) else {
                continue;
            };
            if native.has_attr(ATTACHED_ATTR) {
                log::debug!("[page] '{}' already enhanced", id);
                continue;
            }
            if is_disabled(native) {
                log::debug!("[page] '{}' is disabled, not enhancing", id);
                continue;
            }

            let Some(mut widget) =
                CrossSelect::attach_element(native, config.clone(), self.metrics.as_ref())
            else {
                continue;
            };
            let rendered = widget.render();
            replace_element(&mut self.root, &id, rendered);
            self.widgets.push(widget);
            attached += 1;
        }

        self.config = Some(config);
        attached
    }

    /// Append a numbered section and enhance any multi-selects inside it
    /// with the configuration already in use.
    pub fn append_section(
        &mut self,
        sections: &mut SectionList,
        fragment: Element,
    ) -> Result<String, PageError> {
        let id = sections
            .append(&mut self.root, fragment)
            .ok_or_else(|| PageError::MissingElement(sections.container_id().to_string()))?;
        if let Some(config) = self.config.clone() {
            self.attach_cross_selects(config);
        }
        Ok(id)
    }

    /// Deliver an event to whatever it targets.
    pub fn dispatch(&mut self, event: &Event) -> Outcome {
        let Some(target) = event.target() else {
            return Outcome::Ignored;
        };
        let path = path_ids(&self.root, target);
        if path.is_empty() {
            log::debug!("[page] event for unknown element '{}'", target);
            return Outcome::Ignored;
        }

        // Disabled controls swallow clicks
        let clicked = matches!(event, Event::Click { .. } | Event::DoubleClick { .. });
        if clicked && find_element(&self.root, target).is_some_and(is_disabled) {
            log::trace!("[page] '{}' is disabled", target);
            return Outcome::Ignored;
        }

        // Widget, row and hover behaviours are independent; each sees the event
        let mut outcome = self.dispatch_to_widget(event, &path);
        if let Some(row) = rows::handle_row_event(&mut self.root, event, &path) {
            outcome = outcome.merge(row);
        }
        if let Some(hover) = rows::handle_hover_event(&mut self.root, event, &path) {
            outcome = outcome.merge(hover);
        }
        outcome
    }

    fn dispatch_to_widget(&mut self, event: &Event, path: &[String]) -> Outcome {
        let Some(widget) = self
            .widgets
            .iter_mut()
            .find(|w| path.iter().any(|id| w.owns(id)))
        else {
            return Outcome::Ignored;
        };
        if !widget.handle_event(event, path) {
            return Outcome::Ignored;
        }
        let id = widget.id().to_string();
        let rendered = widget.render();
        replace_element(&mut self.root, &id, rendered);
        Outcome::Handled
    }

    /// Dispatch a sequence of events, collecting navigation requests.
    pub fn replay<'a, I>(&mut self, events: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events
            .into_iter()
            .filter_map(|event| match self.dispatch(event) {
                Outcome::Navigate(href) => Some(href),
                _ => None,
            })
            .collect()
    }
}
