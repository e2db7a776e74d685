use std::fmt;

/// Errors raised while talking to the windowing system.
#[derive(Debug)]
pub enum PlatformError {
    /// The event loop could not be created.
    EventLoop(String),

    /// The OS refused to create the window.
    WindowCreation(String),

    /// The event loop never reached a state where a window could be created.
    WindowNotCreated {
        /// Number of pump iterations that were attempted.
        attempts: u32,
    },

    /// The event loop exited before a window was created.
    EventLoopExited(i32),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(msg) => write!(f, "Failed to create event loop: {}", msg),
            PlatformError::WindowCreation(msg) => write!(f, "Failed to create window: {}", msg),
            PlatformError::WindowNotCreated { attempts } => write!(
                f,
                "Window was not created after {} event loop iterations",
                attempts
            ),
            PlatformError::EventLoopExited(code) => {
                write!(f, "Event loop exited early with code {}", code)
            }
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<winit::error::EventLoopError> for PlatformError {
    fn from(err: winit::error::EventLoopError) -> Self {
        PlatformError::EventLoop(err.to_string())
    }
}

impl From<winit::error::OsError> for PlatformError {
    fn from(err: winit::error::OsError) -> Self {
        PlatformError::WindowCreation(err.to_string())
    }
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
