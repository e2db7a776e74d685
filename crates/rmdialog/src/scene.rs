//! Composition of the dialogue frame and its presentation.

use rmdialog_audio::{AudioOutput, SoundClip};
use rmdialog_core::{
    geometry::{Pos, Size},
    profiling::{new_frame, profile_function},
};
use rmdialog_render::{Canvas, CanvasPresenter, Color, RgbaImage, scale_image};
use rmdialog_text::{DialogueFont, LayoutBox, Viewport};

use crate::{error::DialogueResult, resources::DialogueResources, reveal::PresentationSink};

pub const TEXT_COLOR: Color = Color::WHITE;

/// Background stretched to the window with the icon drawn in its corner.
pub fn compose_base(background: &RgbaImage, icon: &RgbaImage, viewport: &Viewport) -> Canvas {
    profile_function!();
    let window = Size::new(viewport.size.width as u32, viewport.size.height as u32);
    let icon_size = Size::new(viewport.icon.width as u32, viewport.icon.height as u32);

    let mut canvas = Canvas::from_image(scale_image(background, window));
    canvas.draw_image(&scale_image(icon, icon_size), viewport.icon_origin());
    canvas
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderedLine {
    text: String,
    origin: Pos<i32>,
}

/// The static base plus the text currently shown on each line.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    base: Canvas,
    frame: Canvas,
    lines: Vec<Option<RenderedLine>>,
}

impl SceneFrame {
    pub fn new(base: Canvas) -> Self {
        Self {
            frame: base.clone(),
            base,
            lines: Vec::new(),
        }
    }

    /// Replace the text shown on line `index`.
    pub fn set_line(&mut self, index: usize, text: &str, origin: Pos<i32>) {
        if self.lines.len() <= index {
            self.lines.resize(index + 1, None);
        }
        self.lines[index] = Some(RenderedLine {
            text: text.to_owned(),
            origin,
        });
    }

    pub fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index)?.as_ref().map(|line| line.text.as_str())
    }

    /// Redraw the base and every line into the frame canvas.
    pub fn compose(&mut self, mut draw_text: impl FnMut(&mut Canvas, &str, Pos<i32>)) -> &Canvas {
        profile_function!();
        self.frame.copy_from(&self.base);
        for line in self.lines.iter().flatten() {
            draw_text(&mut self.frame, &line.text, line.origin);
        }
        &self.frame
    }
}

/// Draws the dialogue into the window and plays its blips.
pub struct DialogueScene {
    presenter: CanvasPresenter,
    audio: AudioOutput,
    blip: SoundClip,
    font: DialogueFont,
    frame: SceneFrame,
}

impl DialogueScene {
    pub fn new(
        presenter: CanvasPresenter,
        audio: AudioOutput,
        resources: DialogueResources,
        viewport: &Viewport,
    ) -> Self {
        let base = compose_base(&resources.background, &resources.icon, viewport);
        Self {
            presenter,
            audio,
            blip: resources.blip,
            font: resources.font,
            frame: SceneFrame::new(base),
        }
    }
}

impl PresentationSink for DialogueScene {
    fn draw_line(&mut self, index: usize, text: &str, layout: &LayoutBox) -> DialogueResult<()> {
        self.frame.set_line(index, text, layout.origin);
        Ok(())
    }

    fn present(&mut self) -> DialogueResult<()> {
        let font = &mut self.font;
        let canvas = self
            .frame
            .compose(|canvas, text, origin| font.draw_text(canvas, text, origin, TEXT_COLOR));
        self.presenter.present(canvas)?;
        new_frame();
        Ok(())
    }

    fn play_blip(&mut self) -> DialogueResult<()> {
        self.audio.play(&self.blip)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rmdialog_text::IconSide;

    use super::*;

    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];

    fn viewport(side: IconSide) -> Viewport {
        Viewport {
            size: Size::new(200, 100),
            padding: 10,
            icon: Size::new(16, 16),
            side,
        }
    }

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            pixel.0 = rgba;
        }
        image
    }

    #[test]
    fn base_stretches_background_and_places_icon_left() {
        let base = compose_base(&solid(4, 4, BLUE), &solid(3, 3, RED), &viewport(IconSide::Left));
        assert_eq!(base.size(), Size::new(200, 100));
        // Icon occupies x 10..26, y 74..90.
        assert_eq!(base.pixel(10, 74), Some(RED));
        assert_eq!(base.pixel(25, 89), Some(RED));
        assert_eq!(base.pixel(9, 74), Some(BLUE));
        assert_eq!(base.pixel(26, 89), Some(BLUE));
        assert_eq!(base.pixel(10, 90), Some(BLUE));
        assert_eq!(base.pixel(199, 0), Some(BLUE));
    }

    #[test]
    fn icon_on_the_right() {
        let base = compose_base(&solid(1, 1, BLUE), &solid(1, 1, RED), &viewport(IconSide::Right));
        // x = 200 - 16 - 10 = 174
        assert_eq!(base.pixel(174, 74), Some(RED));
        assert_eq!(base.pixel(189, 89), Some(RED));
        assert_eq!(base.pixel(173, 74), Some(BLUE));
        assert_eq!(base.pixel(10, 74), Some(BLUE));
    }

    fn mark(canvas: &mut Canvas, text: &str, origin: Pos<i32>) {
        canvas.blend_rect(origin.x, origin.y, text.chars().count() as u32, 1, Color::WHITE);
    }

    #[test]
    fn later_partial_replaces_earlier_partial() {
        let base = Canvas::new(Size::new(20, 4), Color::BLACK);
        let mut frame = SceneFrame::new(base);

        frame.set_line(0, "abc", Pos::new(0, 0));
        frame.compose(mark);
        frame.set_line(0, "a", Pos::new(0, 0));
        let canvas = frame.compose(mark);

        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(1, 0), Some([0, 0, 0, 255]));
        assert_eq!(frame.line_text(0), Some("a"));
    }

    #[test]
    fn finished_lines_stay_visible() {
        let base = Canvas::new(Size::new(20, 4), Color::BLACK);
        let mut frame = SceneFrame::new(base);

        frame.set_line(0, "done", Pos::new(0, 0));
        frame.set_line(1, "n", Pos::new(0, 2));
        let canvas = frame.compose(mark);

        assert_eq!(canvas.pixel(3, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(1, 2), Some([0, 0, 0, 255]));
        assert_eq!(frame.line_text(2), None);
    }

    #[test]
    fn lines_can_arrive_out_of_order() {
        let mut frame = SceneFrame::new(Canvas::new(Size::new(4, 4), Color::BLACK));
        frame.set_line(2, "x", Pos::new(0, 3));
        assert_eq!(frame.line_text(0), None);
        assert_eq!(frame.line_text(2), Some("x"));
    }
}
