//! Two-pane picker for native multi-select controls, plus the small page
//! behaviours the admin forms attach alongside it.

pub mod buttons;
pub mod config;
pub mod control;
pub mod enhance;
pub mod error;
pub mod focus;
pub mod layout;
pub mod page;
pub mod pane;
pub mod widget;

pub use buttons::{Button, ButtonKind, ButtonSet};
pub use config::{ButtonLabels, CrossSelectConfig, HorizontalMode, VerticalMode};
pub use control::{SelectOption, SourceControl};
pub use error::{ConfigError, Error, PageError};
pub use layout::Dimensions;
pub use page::{EnhanceReport, Outcome, Page};
pub use pane::{Pane, PaneKind, VisualItem};
pub use widget::CrossSelect;
