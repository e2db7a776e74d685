use rmdialog_audio::SoundClip;
use rmdialog_core::profiling::profile_function;
use rmdialog_render::{RgbaImage, load_image};
use rmdialog_text::DialogueFont;

use crate::{config::DialogueConfig, error::ResourceError};

/// Everything read from disk for one run.
pub struct DialogueResources {
    pub background: RgbaImage,
    pub icon: RgbaImage,
    pub font: DialogueFont,
    pub blip: SoundClip,
}

impl DialogueResources {
    /// Load the background, icon, font and sound named by `config`, in that
    /// order, stopping at the first failure.
    pub fn load(config: &DialogueConfig) -> Result<Self, ResourceError> {
        profile_function!();
        let background = load_image(&config.background).map_err(ResourceError::Background)?;
        let icon = load_image(&config.icon).map_err(ResourceError::Icon)?;
        let font = DialogueFont::load(&config.font, config.font_size as f32)
            .map_err(ResourceError::Font)?;
        let blip = SoundClip::load(&config.sound).map_err(ResourceError::Sound)?;

        Ok(Self {
            background,
            icon,
            font,
            blip,
        })
    }
}

impl std::fmt::Debug for DialogueResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueResources")
            .field("background", &self.background.dimensions())
            .field("icon", &self.icon.dimensions())
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}
