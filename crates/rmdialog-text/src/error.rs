use std::path::PathBuf;

/// Errors that can occur in the text system.
#[derive(Debug, Clone)]
pub enum TextError {
    /// Font file not found.
    FontFileNotFound(PathBuf),

    /// The font file exists but could not be read.
    IoError { path: PathBuf, message: String },

    /// Invalid font data.
    InvalidFontData(String),

    /// Wrapping was asked to fit lines into a column with no room.
    NonPositiveWidth(i32),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::FontFileNotFound(path) => {
                write!(f, "Font file not found: {}", path.display())
            }
            TextError::IoError { path, message } => {
                write!(f, "Failed to read font '{}': {}", path.display(), message)
            }
            TextError::InvalidFontData(msg) => write!(f, "Invalid font data: {}", msg),
            TextError::NonPositiveWidth(width) => {
                write!(f, "Wrap width must be positive, got {}", width)
            }
        }
    }
}

impl std::error::Error for TextError {}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
