use std::sync::Arc;

use rmdialog_core::geometry::Size;
pub use winit::window::Window as WinitWindow;
use winit::{error::OsError, event_loop::ActiveEventLoop};

#[derive(Debug, Clone)]
pub struct WindowDescriptor {
    pub title: String,
    pub resizeable: bool,
    /// Inner size in physical pixels.
    pub size: Size<u32>,
    pub visible: bool,
    /// Draw the OS title bar and border.
    pub decorations: bool,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "dialogue".to_string(),
            resizeable: false,
            size: Size::new(800, 600),
            visible: true,
            decorations: false,
        }
    }
}

#[derive(Clone)]
pub struct Window {
    pub window: Arc<winit::window::Window>,
}

impl Window {
    pub fn id(&self) -> winit::window::WindowId {
        self.window.id()
    }

    /// Get the physical size of the window in pixels.
    pub fn physical_size(&self) -> Size<u32> {
        let size = self.window.inner_size();
        Size::new(size.width, size.height)
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Tell the compositor a frame is about to be presented.
    pub fn pre_present_notify(&self) {
        self.window.pre_present_notify();
    }

    pub(crate) fn new(
        event_loop: &ActiveEventLoop,
        descriptor: WindowDescriptor,
    ) -> Result<Self, OsError> {
        let attributes = WinitWindow::default_attributes()
            .with_title(descriptor.title)
            .with_resizable(descriptor.resizeable)
            .with_visible(descriptor.visible)
            .with_decorations(descriptor.decorations)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                descriptor.size.width,
                descriptor.size.height,
            ));

        let window = Arc::new(event_loop.create_window(attributes)?);

        Ok(Window { window })
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("id", &self.id()).finish()
    }
}
