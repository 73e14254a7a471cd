//! Pane sizing, computed once when a widget attaches.

use crossdom::{longest_width, TextMetrics};

use crate::config::{CrossSelectConfig, HorizontalMode, VerticalMode};
use crate::control::SourceControl;

/// Row height as a multiple of the font size.
pub const ROW_HEIGHT_FACTOR: f32 = 1.25;

/// Extra width beyond the longest label in `expand` mode.
pub const EXPAND_PADDING: f32 = 10.0;

/// Height added for a horizontal scrollbar in `scroll` mode.
pub const SCROLLBAR_ALLOWANCE: f32 = 24.0;

/// Pane measurements. An axis is None when its mode was unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub height: Option<f32>,
    pub width: Option<f32>,
    /// Long labels are clipped instead of scrolled.
    pub clip_horizontal: bool,
    /// Rendered width of the longest option label.
    pub longest_label: f32,
    pub row_height: f32,
}

/// Width of the longest option label at the configured font size.
pub fn measure_longest(
    control: &SourceControl,
    config: &CrossSelectConfig,
    metrics: &dyn TextMetrics,
) -> f32 {
    longest_width(
        metrics,
        control.options().iter().map(|opt| opt.label.as_str()),
        config.font,
    )
}

/// Compute pane dimensions for `option_count` options.
pub fn compute(option_count: usize, longest_label: f32, config: &CrossSelectConfig) -> Dimensions {
    let row_height = config.row_height();
    let list_width = config.list_width as f32;

    let mut height = match config.vertical {
        VerticalMode::Expand => Some(option_count as f32 * row_height),
        VerticalMode::Scroll => Some(row_height * option_count.min(config.rows as usize) as f32),
        VerticalMode::Unrecognized => {
            log::warn!("[layout] unrecognized vertical mode, pane height left unset");
            None
        }
    };

    let mut clip_horizontal = false;
    let width = match config.horizontal {
        HorizontalMode::Expand => Some((longest_label + EXPAND_PADDING).max(list_width)),
        HorizontalMode::Scroll => {
            if longest_label > list_width {
                height = height.map(|h| h + SCROLLBAR_ALLOWANCE);
            }
            Some(list_width)
        }
        HorizontalMode::Hide => {
            clip_horizontal = true;
            Some(list_width)
        }
        HorizontalMode::Unrecognized => {
            log::warn!("[layout] unrecognized horizontal mode, pane width left unset");
            None
        }
    };

    Dimensions {
        height,
        width,
        clip_horizontal,
        longest_label,
        row_height,
    }
}
