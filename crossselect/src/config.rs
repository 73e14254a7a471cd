//! Cross-select configuration.
//!
//! Options use the names pages already pass to the widget (`listWidth`,
//! `clickSelects`, `select_txt`, ...). Integer options may be given as
//! numbers or numeric strings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Pane height policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMode {
    /// Show at most `rows` rows and scroll the rest.
    #[default]
    Scroll,
    /// One row per option.
    Expand,
    /// Unknown value. No height is set.
    #[serde(other)]
    Unrecognized,
}

/// Pane width policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalMode {
    /// Fixed width, long labels clipped.
    #[default]
    Hide,
    /// Grow to fit the longest label.
    Expand,
    /// Fixed width with a horizontal scrollbar for long labels.
    Scroll,
    /// Unknown value. No width is set.
    #[serde(other)]
    Unrecognized,
}

/// Button captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonLabels {
    #[serde(rename = "select_txt")]
    pub select: String,
    #[serde(rename = "remove_txt")]
    pub remove: String,
    #[serde(rename = "selectAll_txt")]
    pub select_all: String,
    #[serde(rename = "removeAll_txt")]
    pub remove_all: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            select: "select".into(),
            remove: "remove".into(),
            select_all: "select all".into(),
            remove_all: "remove all".into(),
        }
    }
}

/// Per-instance widget configuration. Immutable once a widget is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossSelectConfig {
    pub vertical: VerticalMode,
    pub horizontal: HorizontalMode,

    /// Minimum pane width in pixels.
    #[serde(rename = "listWidth", deserialize_with = "lenient_u32")]
    pub list_width: u32,

    /// Label font size in pixels. Drives the row height.
    #[serde(deserialize_with = "lenient_u32")]
    pub font: u32,

    /// Visible rows before scrolling.
    #[serde(deserialize_with = "lenient_u32")]
    pub rows: u32,

    /// Double click moves an item immediately.
    pub dblclick: bool,

    /// Single click moves an item immediately; no focus state.
    #[serde(rename = "clickSelects")]
    pub click_selects: bool,

    /// Clicking a new item keeps other focused items in the same pane.
    #[serde(rename = "clicksAccumulate", alias = "clickAccumulate")]
    pub clicks_accumulate: bool,

    #[serde(flatten)]
    pub labels: ButtonLabels,
}

impl Default for CrossSelectConfig {
    fn default() -> Self {
        Self {
            vertical: VerticalMode::Scroll,
            horizontal: HorizontalMode::Hide,
            list_width: 150,
            font: 12,
            rows: 8,
            dblclick: true,
            click_selects: false,
            clicks_accumulate: false,
            labels: ButtonLabels::default(),
        }
    }
}

impl CrossSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The settings the admin edit forms use.
    pub fn admin_defaults() -> Self {
        Self::default().list_width(200).rows(15)
    }

    /// Parse options from JSON, filling unspecified options with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Height of one list row in pixels.
    pub fn row_height(&self) -> f32 {
        self.font as f32 * crate::layout::ROW_HEIGHT_FACTOR
    }

    pub fn vertical(mut self, mode: VerticalMode) -> Self {
        self.vertical = mode;
        self
    }

    pub fn horizontal(mut self, mode: HorizontalMode) -> Self {
        self.horizontal = mode;
        self
    }

    pub fn list_width(mut self, width: u32) -> Self {
        self.list_width = width;
        self
    }

    pub fn font(mut self, font: u32) -> Self {
        self.font = font;
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn dblclick(mut self, enabled: bool) -> Self {
        self.dblclick = enabled;
        self
    }

    pub fn click_selects(mut self, enabled: bool) -> Self {
        self.click_selects = enabled;
        self
    }

    pub fn clicks_accumulate(mut self, enabled: bool) -> Self {
        self.clicks_accumulate = enabled;
        self
    }

    pub fn labels(mut self, labels: ButtonLabels) -> Self {
        self.labels = labels;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    String(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a whole number, got {s:?}"))),
    }
}
