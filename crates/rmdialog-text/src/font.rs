use std::path::Path;

use cosmic_text::{Attrs, Buffer, Family, Metrics, Shaping, SwashCache, Wrap, fontdb};
use rmdialog_core::{geometry::Pos, profiling::profile_function};
use rmdialog_render::{Canvas, Color};

use crate::{
    error::{TextError, TextResult},
    metrics::TextMetrics,
};

/// The single font used for dialogue text, loaded from one file.
///
/// Owns its own font system containing only that font, so measurement and
/// rasterisation never fall back to a system font.
pub struct DialogueFont {
    font_system: cosmic_text::FontSystem,
    cache: SwashCache,
    buffer: Buffer,
    family: String,
    size: f32,
    height: u32,
}

impl DialogueFont {
    /// Load a TrueType/OpenType font file at `size` pixels.
    pub fn load(path: impl AsRef<Path>, size: f32) -> TextResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => TextError::FontFileNotFound(path.to_path_buf()),
            _ => TextError::IoError {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        })?;

        let font = Self::from_bytes(data, size)?;
        tracing::info!(
            "Loaded font '{}' from {} at {}px",
            font.family,
            path.display(),
            size
        );
        Ok(font)
    }

    /// Build from in-memory font data.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> TextResult<Self> {
        profile_function!();
        if size.is_nan() || size <= 0.0 {
            return Err(TextError::InvalidFontData(format!(
                "font size must be positive, got {}",
                size
            )));
        }

        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        let (id, family) = db
            .faces()
            .next()
            .map(|face| {
                let family = face
                    .families
                    .first()
                    .map(|(name, _)| name.clone())
                    .unwrap_or_default();
                (face.id, family)
            })
            .ok_or_else(|| TextError::InvalidFontData("no font faces found".to_string()))?;

        let mut font_system = cosmic_text::FontSystem::new_with_locale_and_db(
            sys_locale::get_locale().unwrap_or_else(|| String::from("en-US")),
            db,
        );

        let font = font_system
            .get_font(id)
            .ok_or_else(|| TextError::InvalidFontData("font face could not be parsed".to_string()))?;
        let scaled = font.as_swash().metrics(&[]).scale(size);
        let height = (scaled.ascent + scaled.descent).ceil().max(1.0) as u32;

        let mut buffer = Buffer::new(&mut font_system, Metrics::new(size, height as f32));
        buffer.set_wrap(&mut font_system, Wrap::None);
        buffer.set_size(&mut font_system, None, None);

        Ok(Self {
            font_system,
            cache: SwashCache::new(),
            buffer,
            family,
            size,
            height,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    fn shape(&mut self, text: &str) {
        let attrs = Attrs::new().family(Family::Name(&self.family));
        self.buffer
            .set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        self.buffer.shape_until_scroll(&mut self.font_system, false);
    }

    /// Rasterise `text` onto `canvas` with the top-left of its line box at `origin`.
    pub fn draw_text(&mut self, canvas: &mut Canvas, text: &str, origin: Pos<i32>, color: Color) {
        profile_function!();
        self.shape(text);

        let [r, g, b, a] = color.to_rgba_u8();
        self.buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, w, h, coverage| {
                canvas.blend_rect(
                    origin.x + x,
                    origin.y + y,
                    w,
                    h,
                    Color::from_rgba_u8(coverage.r(), coverage.g(), coverage.b(), coverage.a()),
                );
            },
        );
    }
}

impl TextMetrics for DialogueFont {
    fn text_width(&mut self, text: &str) -> u32 {
        self.shape(text);
        let width = self
            .buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0f32, f32::max);
        width.ceil() as u32
    }

    fn font_height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Debug for DialogueFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueFont")
            .field("family", &self.family)
            .field("size", &self.size)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        match DialogueFont::load(&path, 24.0) {
            Err(TextError::FontFileNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn garbage_is_invalid_font_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        assert!(matches!(
            DialogueFont::load(&path, 24.0),
            Err(TextError::InvalidFontData(_))
        ));
    }

    #[test]
    fn non_positive_and_nan_sizes_are_rejected() {
        for size in [0.0, -12.0, f32::NAN] {
            match DialogueFont::from_bytes(Vec::new(), size) {
                Err(TextError::InvalidFontData(message)) => {
                    assert!(message.starts_with("font size must be positive"), "{}", message)
                }
                _ => panic!("size {} was accepted", size),
            }
        }
    }
}
