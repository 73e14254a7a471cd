//! Page behaviours around the cross-select: pickers, styled selects,
//! listing rows and dynamic sections.

pub mod pickers;
pub mod rows;
pub mod sections;
pub mod styled_select;

pub use pickers::{bind_pickers, PickerKind, PickerValue};
pub use sections::SectionList;
pub use styled_select::style_selects;
