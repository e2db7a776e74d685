use std::fmt;

use rmdialog_audio::AudioError;
use rmdialog_render::RenderError;
use rmdialog_text::TextError;
use rmdialog_winit::PlatformError;

/// Invalid command line input, detected before any window exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The dialogue text is empty.
    EmptyText,

    /// A size, speed or multiplier that must be strictly positive is not.
    NonPositive { name: &'static str, value: String },

    /// Padding below zero.
    NegativePadding(i32),

    /// A value too large to turn into a delay.
    OutOfRange { name: &'static str, value: String },

    /// The icon and padding leave no horizontal room for text.
    NoTextRoom { available: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyText => write!(f, "Dialogue text must not be empty"),
            ConfigError::NonPositive { name, value } => {
                write!(f, "--{} must be greater than zero, got {}", name, value)
            }
            ConfigError::NegativePadding(padding) => {
                write!(f, "--padding must not be negative, got {}", padding)
            }
            ConfigError::OutOfRange { name, value } => {
                write!(f, "--{} is out of range: {}", name, value)
            }
            ConfigError::NoTextRoom { available } => write!(
                f,
                "No room for text: the text column is {}px wide after icon and padding",
                available
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A resource file could not be loaded. Each variant carries the offending path.
#[derive(Debug)]
pub enum ResourceError {
    Background(RenderError),
    Icon(RenderError),
    Font(TextError),
    Sound(AudioError),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Background(err) => write!(f, "Failed to load background: {}", err),
            ResourceError::Icon(err) => write!(f, "Failed to load icon: {}", err),
            ResourceError::Font(err) => write!(f, "Failed to load font: {}", err),
            ResourceError::Sound(err) => write!(f, "Failed to load sound: {}", err),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Background(err) | ResourceError::Icon(err) => Some(err),
            ResourceError::Font(err) => Some(err),
            ResourceError::Sound(err) => Some(err),
        }
    }
}

/// Any failure that ends a dialogue run.
#[derive(Debug)]
pub enum DialogueError {
    Config(ConfigError),
    Resource(ResourceError),
    Platform(PlatformError),
    Render(RenderError),
    Text(TextError),
    Audio(AudioError),
}

impl fmt::Display for DialogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogueError::Config(err) => write!(f, "Invalid configuration: {}", err),
            DialogueError::Resource(err) => err.fmt(f),
            DialogueError::Platform(err) => write!(f, "Platform error: {}", err),
            DialogueError::Render(err) => write!(f, "Render error: {}", err),
            DialogueError::Text(err) => write!(f, "Text error: {}", err),
            DialogueError::Audio(err) => write!(f, "Audio error: {}", err),
        }
    }
}

impl std::error::Error for DialogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DialogueError::Config(err) => Some(err),
            DialogueError::Resource(err) => Some(err),
            DialogueError::Platform(err) => Some(err),
            DialogueError::Render(err) => Some(err),
            DialogueError::Text(err) => Some(err),
            DialogueError::Audio(err) => Some(err),
        }
    }
}

impl From<ConfigError> for DialogueError {
    fn from(err: ConfigError) -> Self {
        DialogueError::Config(err)
    }
}

impl From<ResourceError> for DialogueError {
    fn from(err: ResourceError) -> Self {
        DialogueError::Resource(err)
    }
}

impl From<PlatformError> for DialogueError {
    fn from(err: PlatformError) -> Self {
        DialogueError::Platform(err)
    }
}

impl From<RenderError> for DialogueError {
    fn from(err: RenderError) -> Self {
        DialogueError::Render(err)
    }
}

impl From<TextError> for DialogueError {
    fn from(err: TextError) -> Self {
        DialogueError::Text(err)
    }
}

impl From<AudioError> for DialogueError {
    fn from(err: AudioError) -> Self {
        DialogueError::Audio(err)
    }
}

/// Result type for dialogue operations.
pub type DialogueResult<T> = Result<T, DialogueError>;
