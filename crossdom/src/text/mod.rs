use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Measures rendered text width in pixels.
///
/// A browser host measures with real font metrics; everywhere else the
/// [`MonospaceMetrics`] estimate is used.
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_px: u32) -> f32;
}

/// Width of the widest label, or 0 for no labels.
pub fn longest_width<'a, I>(metrics: &dyn TextMetrics, labels: I, font_px: u32) -> f32
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .map(|label| metrics.text_width(label, font_px))
        .fold(0.0, f32::max)
}

/// Every terminal column is `font_px * advance_ratio` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_ratio: f32,
}

impl MonospaceMetrics {
    pub const fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_px: u32) -> f32 {
        // Multi-line labels measure as their widest line
        text.lines()
            .map(|line| display_width(line) as f32 * font_px as f32 * self.advance_ratio)
            .fold(0.0, f32::max)
            .ceil()
    }
}
