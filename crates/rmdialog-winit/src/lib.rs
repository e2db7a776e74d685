pub mod error;
pub mod event;
pub mod pump;
pub mod window;

// Re-export WindowId for convenience
pub use winit::window::WindowId;

pub use error::{PlatformError, PlatformResult};
pub use pump::EventPump;
