//! Cross-select widget - a two-pane picker over a native multi-select.
//!
//! The widget provides:
//! - An options pane (unselected) and a chosen pane (selected)
//! - Click-to-focus with select / remove buttons, or click-to-move
//! - Double click to move a single item
//! - Select all / remove all
//!
//! The native control stays in the page, hidden, and always carries the
//! current selection so an ordinary form submission sends the right values.
//!
//! # Example
//!
//! ```
//! use crossdom::MonospaceMetrics;
//! use crossselect::{CrossSelect, CrossSelectConfig, PaneKind, SourceControl};
//!
//! let control = SourceControl::new("tags")
//!     .option("A", false)
//!     .option("B", true)
//!     .option("C", false);
//! let mut widget = CrossSelect::attach(
//!     control,
//!     CrossSelectConfig::default().click_selects(true),
//!     &MonospaceMetrics::default(),
//! )
//! .unwrap();
//!
//! widget.click_item(PaneKind::Options, 0);
//! assert_eq!(widget.chosen_pane().labels(), vec!["B", "A"]);
//! assert_eq!(widget.control().selected_values(), vec!["A", "B"]);
//! ```

mod events;
pub mod render;
mod state;

pub use state::CrossSelect;
