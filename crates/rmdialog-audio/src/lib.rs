//! Sound effect playback.
//!
//! A [`SoundClip`] is decoded once and kept in memory; every
//! [`AudioOutput::play`] mixes a fresh copy of it into the output, so rapid
//! plays overlap instead of queueing.

pub mod error;

use std::io::Cursor;
use std::path::Path;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

pub use error::{AudioError, AudioResult};

/// The default audio output device, kept open for the life of the value.
pub struct AudioOutput {
    // dropping the stream silences every sound still playing
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    /// Open the system's default output device.
    pub fn open_default() -> AudioResult<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        tracing::debug!("Opened default audio output");
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Start playing `clip` and return immediately.
    pub fn play(&self, clip: &SoundClip) -> AudioResult<()> {
        self.handle
            .play_raw(clip.source.clone().convert_samples())
            .map_err(|e| AudioError::Playback(e.to_string()))
    }
}

/// A decoded, in-memory sound effect.
#[derive(Clone)]
pub struct SoundClip {
    source: Buffered<Decoder<Cursor<Vec<u8>>>>,
}

impl SoundClip {
    /// Load and decode a sound file (wav, ogg, mp3, flac).
    pub fn load(path: impl AsRef<Path>) -> AudioResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let clip = Self::from_bytes(bytes)?;
        tracing::info!(
            "Loaded sound {} ({} ch, {} Hz)",
            path.display(),
            clip.channels(),
            clip.sample_rate()
        );
        Ok(clip)
    }

    /// Decode a sound from encoded file bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> AudioResult<Self> {
        let decoder =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::Decode(e.to_string()))?;
        Ok(Self {
            source: decoder.buffered(),
        })
    }

    pub fn channels(&self) -> u16 {
        self.source.channels()
    }

    pub fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }
}
