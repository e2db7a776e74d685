/// Vertical gap in pixels between consecutive lines.
pub const LINE_SPACING: i32 = 5;

/// Pixel measurements needed to wrap and lay out text.
pub trait TextMetrics {
    /// Rendered width of `text` in pixels.
    fn text_width(&mut self, text: &str) -> u32;

    /// Height of one line of text in pixels, without spacing.
    fn font_height(&self) -> u32;

    /// Distance between the tops of consecutive lines.
    fn line_height(&self) -> i32 {
        self.font_height() as i32 + LINE_SPACING
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &mut M {
    fn text_width(&mut self, text: &str) -> u32 {
        (**self).text_width(text)
    }

    fn font_height(&self) -> u32 {
        (**self).font_height()
    }
}

/// Fixed-advance metrics: every character is `advance` pixels wide.
///
/// Useful wherever real glyph metrics do not matter, such as benchmarks and
/// layout tests.
///
/// ```
/// use rmdialog_text::{MonospaceMetrics, TextMetrics};
///
/// let mut metrics = MonospaceMetrics::new(10, 25);
/// assert_eq!(metrics.text_width("ab c"), 40);
/// assert_eq!(metrics.line_height(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub advance: u32,
    pub height: u32,
}

impl MonospaceMetrics {
    pub const fn new(advance: u32, height: u32) -> Self {
        Self { advance, height }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&mut self, text: &str) -> u32 {
        text.chars().count() as u32 * self.advance
    }

    fn font_height(&self) -> u32 {
        self.height
    }
}
