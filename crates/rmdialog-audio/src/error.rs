use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading or playing sounds.
#[derive(Debug)]
pub enum AudioError {
    /// Failed to read the sound file.
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The bytes are not a supported audio format.
    Decode(String),

    /// No usable output device.
    Device(String),

    /// The output refused to play the sound.
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Io { path, source } => {
                write!(f, "IO error loading '{}': {}", path.display(), source)
            }
            AudioError::Decode(msg) => write!(f, "Failed to decode sound: {}", msg),
            AudioError::Device(msg) => write!(f, "Audio output unavailable: {}", msg),
            AudioError::Playback(msg) => write!(f, "Failed to play sound: {}", msg),
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;
