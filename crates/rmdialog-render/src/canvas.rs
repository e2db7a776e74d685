//! CPU-side frame composition.

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};
use rmdialog_core::{
    geometry::{Pos, Size},
    profiling::profile_function,
};

use crate::{
    color::Color,
    error::{RenderError, RenderResult},
};

/// An RGBA8 frame in sRGB space, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(size: Size<u32>, fill: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size.width, size.height, Rgba(fill.to_rgba_u8())),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { pixels: image }
    }

    pub fn size(&self) -> Size<u32> {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    /// Raw pixel bytes, four per pixel.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Overwrite this canvas with `other`, reusing the allocation when the sizes match.
    pub fn copy_from(&mut self, other: &Canvas) {
        self.pixels.clone_from(&other.pixels);
    }

    /// Alpha-blend `image` with its top-left corner at `at`. Parts outside the canvas are clipped.
    pub fn draw_image(&mut self, image: &RgbaImage, at: Pos<i32>) {
        profile_function!();
        imageops::overlay(&mut self.pixels, image, at.x as i64, at.y as i64);
    }

    /// Alpha-blend a solid rectangle. Used for glyph coverage spans.
    pub fn blend_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let src = color.to_rgba_u8();
        if src[3] == 0 {
            return;
        }

        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + width as i64).min(self.pixels.width() as i64);
        let y1 = (y as i64 + height as i64).min(self.pixels.height() as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                blend_pixel(self.pixels.get_pixel_mut(px as u32, py as u32), src);
            }
        }
    }
}

/// Source-over blend of a straight-alpha color onto `dst`.
fn blend_pixel(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let alpha = src[3] as u32;
    let inverse = 255 - alpha;
    for i in 0..3 {
        dst.0[i] = ((src[i] as u32 * alpha + dst.0[i] as u32 * inverse + 127) / 255) as u8;
    }
    dst.0[3] = (alpha + (dst.0[3] as u32 * inverse + 127) / 255) as u8;
}

/// Decode an image file into RGBA8.
pub fn load_image(path: impl AsRef<Path>) -> RenderResult<RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| RenderError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        "Loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}

/// Scale to exactly `size` with nearest-neighbour sampling.
pub fn scale_image(image: &RgbaImage, size: Size<u32>) -> RgbaImage {
    profile_function!();
    if image.width() == size.width && image.height() == size.height {
        return image.clone();
    }
    imageops::resize(image, size.width, size.height, imageops::FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    fn black(size: u32) -> Canvas {
        Canvas::new(Size::new(size, size), Color::BLACK)
    }

    #[test]
    fn new_canvas_is_filled() {
        let canvas = black(4);
        assert_eq!(canvas.size(), Size::new(4, 4));
        assert_eq!(canvas.as_raw().len(), 4 * 4 * 4);
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn opaque_blend_replaces() {
        let mut canvas = black(4);
        canvas.blend_rect(1, 1, 2, 2, Color::WHITE);
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 255]));
    }

    #[test]
    fn partial_coverage_mixes() {
        let mut canvas = black(1);
        canvas.blend_rect(0, 0, 1, 1, Color::from_rgba_u8(255, 255, 255, 128));
        assert_eq!(canvas.pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn transparent_blend_is_a_no_op() {
        let mut canvas = black(2);
        let before = canvas.clone();
        canvas.blend_rect(0, 0, 2, 2, Color::TRANSPARENT);
        assert_eq!(canvas, before);
    }

    #[test]
    fn blend_is_clipped_to_the_canvas() {
        let mut canvas = black(3);
        canvas.blend_rect(-5, 2, 100, 100, Color::WHITE);
        assert_eq!(canvas.pixel(0, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn draw_image_places_top_left_corner() {
        let mut canvas = black(8);
        let icon = RgbaImage::from_pixel(2, 2, Rgba(RED));
        canvas.draw_image(&icon, Pos::new(5, 6));

        assert_eq!(canvas.pixel(5, 6), Some(RED));
        assert_eq!(canvas.pixel(6, 7), Some(RED));
        assert_eq!(canvas.pixel(4, 6), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(5, 5), Some([0, 0, 0, 255]));
    }

    #[test]
    fn copy_from_resets_to_base() {
        let base = black(2);
        let mut frame = base.clone();
        frame.blend_rect(0, 0, 1, 1, Color::WHITE);
        frame.copy_from(&base);
        assert_eq!(frame, base);
    }

    #[test]
    fn scale_image_hits_requested_size() {
        let image = RgbaImage::from_pixel(3, 5, Rgba(RED));
        let scaled = scale_image(&image, Size::new(64, 64));
        assert_eq!(scaled.dimensions(), (64, 64));
        assert_eq!(scaled.get_pixel(63, 63).0, RED);
    }

    #[test]
    fn load_image_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(3, 2, Rgba(RED)).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(0, 0).0, RED);
    }

    #[test]
    fn load_image_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        match load_image(&path) {
            Err(RenderError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }
}
