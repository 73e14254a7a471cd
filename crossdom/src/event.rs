use serde::{Deserialize, Serialize};

/// High-level input events with element targeting.
///
/// A browser delivers `Click, Click, DoubleClick` for a double click on the
/// same element; scripted input should do the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Mouse click on an element
    Click {
        target: Option<String>,
        #[serde(default)]
        button: MouseButton,
    },
    /// Double click, delivered after the two clicks that make it up
    DoubleClick { target: Option<String> },
    /// Pointer entered an element
    MouseOver { target: Option<String> },
    /// Pointer left an element
    MouseOut { target: Option<String> },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn double_click(target: impl Into<String>) -> Self {
        Self::DoubleClick {
            target: Some(target.into()),
        }
    }

    pub fn mouse_over(target: impl Into<String>) -> Self {
        Self::MouseOver {
            target: Some(target.into()),
        }
    }

    pub fn mouse_out(target: impl Into<String>) -> Self {
        Self::MouseOut {
            target: Some(target.into()),
        }
    }

    /// The innermost element the event was aimed at.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. }
            | Self::DoubleClick { target }
            | Self::MouseOver { target }
            | Self::MouseOut { target } => target.as_deref(),
        }
    }

    /// Whether this is a primary-button click.
    pub fn is_primary_click(&self) -> bool {
        matches!(
            self,
            Self::Click {
                button: MouseButton::Left,
                ..
            }
        )
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}
