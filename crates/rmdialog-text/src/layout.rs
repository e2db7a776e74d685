//! Placement of wrapped lines inside the dialogue viewport.

use rmdialog_core::{
    geometry::{Pos, Size},
    profiling::profile_function,
};

use crate::{
    metrics::{LINE_SPACING, TextMetrics},
    wrap::WrappedLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    /// Centered on the whole viewport, not on the text column.
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

/// Which side of the dialogue box the speaker icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Fixed geometry of the dialogue window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub size: Size<i32>,
    pub padding: i32,
    pub icon: Size<i32>,
    pub side: IconSide,
}

impl Viewport {
    /// Horizontal extent `(start, end)` available to text next to the icon.
    pub fn text_column(&self) -> (i32, i32) {
        match self.side {
            IconSide::Left => (
                self.padding + self.icon.width + self.padding,
                self.size.width - self.padding,
            ),
            IconSide::Right => (
                self.padding,
                self.size.width - self.icon.width - 2 * self.padding,
            ),
        }
    }

    /// Width handed to the line wrapper. May be zero or negative when the
    /// icon and padding leave no room.
    pub fn text_max_width(&self) -> i32 {
        let (start, end) = self.text_column();
        end - start
    }

    /// Top-left corner of the icon, which always sits at the bottom.
    pub fn icon_origin(&self) -> Pos<i32> {
        let x = match self.side {
            IconSide::Left => self.padding,
            IconSide::Right => self.size.width - self.icon.width - self.padding,
        };
        Pos::new(x, self.size.height - self.icon.height - self.padding)
    }
}

/// Where one line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBox {
    /// Top-left corner. May be negative for lines wider than the viewport.
    pub origin: Pos<i32>,
    pub width: u32,
}

/// Y coordinate of the first line.
pub fn vertical_base(
    line_count: usize,
    font_height: u32,
    viewport: &Viewport,
    align: VerticalAlign,
) -> i32 {
    let line_height = font_height as i32 + LINE_SPACING;
    let total_height = line_count as i32 * line_height - LINE_SPACING;

    match align {
        VerticalAlign::Top => viewport.padding,
        VerticalAlign::Middle => (viewport.size.height - total_height).div_euclid(2),
        VerticalAlign::Bottom => viewport.size.height - total_height - viewport.padding,
    }
}

/// X coordinate of a line `line_width` pixels wide.
pub fn horizontal_origin(line_width: u32, viewport: &Viewport, align: HorizontalAlign) -> i32 {
    let line_width = line_width as i32;
    match align {
        HorizontalAlign::Left => viewport.text_column().0,
        HorizontalAlign::Center => (viewport.size.width - line_width).div_euclid(2),
        HorizontalAlign::Right => viewport.size.width - line_width - viewport.padding,
    }
}

/// Lay out lines from their already measured widths.
pub fn layout_widths(
    widths: &[u32],
    font_height: u32,
    viewport: &Viewport,
    alignment: Alignment,
) -> Vec<LayoutBox> {
    let line_height = font_height as i32 + LINE_SPACING;
    let y_base = vertical_base(widths.len(), font_height, viewport, alignment.vertical);

    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| LayoutBox {
            origin: Pos::new(
                horizontal_origin(width, viewport, alignment.horizontal),
                y_base + i as i32 * line_height,
            ),
            width,
        })
        .collect()
}

/// Measure `lines` and compute where each is drawn. One box per line, in order.
pub fn layout(
    lines: &[WrappedLine],
    metrics: &mut impl TextMetrics,
    viewport: &Viewport,
    alignment: Alignment,
) -> Vec<LayoutBox> {
    profile_function!();
    let widths: Vec<u32> = lines
        .iter()
        .map(|line| metrics.text_width(line.as_str()))
        .collect();
    layout_widths(&widths, metrics.font_height(), viewport, alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn viewport(side: IconSide, padding: i32) -> Viewport {
        Viewport {
            size: Size::new(800, 600),
            padding,
            icon: Size::new(64, 64),
            side,
        }
    }

    #[test]
    fn center_ignores_icon_column() {
        for side in [IconSide::Left, IconSide::Right] {
            for padding in [0, 20, 57] {
                let vp = viewport(side, padding);
                assert_eq!(horizontal_origin(100, &vp, HorizontalAlign::Center), 350);
            }
        }
    }

    #[test]
    fn center_floors_odd_remainders() {
        let vp = viewport(IconSide::Left, 20);
        assert_eq!(horizontal_origin(101, &vp, HorizontalAlign::Center), 349);
        // Wider than the viewport: starts left of it.
        assert_eq!(horizontal_origin(901, &vp, HorizontalAlign::Center), -51);
    }

    #[test]
    fn middle_two_lines() {
        let vp = viewport(IconSide::Left, 20);
        // lineHeight 30, totalHeight 55
        assert_eq!(vertical_base(2, 25, &vp, VerticalAlign::Middle), 272);
    }

    #[test]
    fn top_and_bottom_bases() {
        let vp = viewport(IconSide::Left, 20);
        assert_eq!(vertical_base(3, 25, &vp, VerticalAlign::Top), 20);
        // totalHeight = 3 * 30 - 5 = 85
        assert_eq!(vertical_base(3, 25, &vp, VerticalAlign::Bottom), 600 - 85 - 20);
    }

    #[test]
    fn text_columns_follow_icon_side() {
        let left = viewport(IconSide::Left, 20);
        assert_eq!(left.text_column(), (104, 780));
        assert_eq!(left.text_max_width(), 676);
        assert_eq!(horizontal_origin(50, &left, HorizontalAlign::Left), 104);

        let right = viewport(IconSide::Right, 20);
        assert_eq!(right.text_column(), (20, 696));
        assert_eq!(horizontal_origin(50, &right, HorizontalAlign::Left), 20);
    }

    #[test]
    fn right_alignment_hugs_padding() {
        let vp = viewport(IconSide::Right, 20);
        assert_eq!(horizontal_origin(100, &vp, HorizontalAlign::Right), 680);
    }

    #[test]
    fn icon_sits_in_bottom_corner() {
        assert_eq!(viewport(IconSide::Left, 20).icon_origin(), Pos::new(20, 516));
        assert_eq!(viewport(IconSide::Right, 20).icon_origin(), Pos::new(716, 516));
    }

    #[test]
    fn lines_stack_without_overlap() {
        let vp = viewport(IconSide::Left, 20);
        let lines: Vec<WrappedLine> = ["first", "second line", "x"]
            .into_iter()
            .map(WrappedLine::new)
            .collect();
        let mut metrics = MonospaceMetrics::new(10, 25);

        for vertical in [VerticalAlign::Top, VerticalAlign::Middle, VerticalAlign::Bottom] {
            let alignment = Alignment::new(HorizontalAlign::Center, vertical);
            let boxes = layout(&lines, &mut metrics, &vp, alignment);
            assert_eq!(boxes.len(), lines.len());
            for pair in boxes.windows(2) {
                assert_eq!(pair[1].origin.y - pair[0].origin.y, metrics.line_height());
            }
            assert_eq!(boxes[1].width, 110);
            assert_eq!(boxes[1].origin.x, 345);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let vp = viewport(IconSide::Right, 13);
        let lines = vec![WrappedLine::new("Hello,"), WrappedLine::new("world!")];
        let alignment = Alignment::new(HorizontalAlign::Right, VerticalAlign::Middle);
        let mut metrics = MonospaceMetrics::new(7, 19);
        let first = layout(&lines, &mut metrics, &vp, alignment);
        let second = layout(&lines, &mut metrics, &vp, alignment);
        assert_eq!(first, second);
    }

    #[test]
    fn no_lines_no_boxes() {
        let vp = viewport(IconSide::Left, 20);
        let mut metrics = MonospaceMetrics::new(10, 25);
        assert!(layout(&[], &mut metrics, &vp, Alignment::default()).is_empty());
    }
}
