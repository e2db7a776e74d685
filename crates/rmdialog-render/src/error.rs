use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading images or presenting frames.
#[derive(Debug)]
pub enum RenderError {
    /// Failed to read or decode an image file.
    ImageLoad {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },

    /// No GPU adapter can draw to the window surface.
    AdapterUnavailable(String),

    /// The adapter refused to create a device.
    DeviceRequest(String),

    /// The window surface could not be created.
    SurfaceCreation(String),

    /// The surface has no configuration compatible with the adapter.
    SurfaceUnsupported,

    /// Acquiring the next surface texture failed.
    Surface(wgpu::SurfaceError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {}", path.display(), source)
            }
            RenderError::AdapterUnavailable(msg) => {
                write!(f, "No suitable GPU adapter: {}", msg)
            }
            RenderError::DeviceRequest(msg) => write!(f, "Failed to create GPU device: {}", msg),
            RenderError::SurfaceCreation(msg) => {
                write!(f, "Failed to create window surface: {}", msg)
            }
            RenderError::SurfaceUnsupported => {
                write!(f, "Window surface is not supported by the GPU adapter")
            }
            RenderError::Surface(err) => write!(f, "Surface error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::ImageLoad { source, .. } => Some(source),
            RenderError::Surface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> Self {
        RenderError::Surface(err)
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
