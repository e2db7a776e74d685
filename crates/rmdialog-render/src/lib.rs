//! rmdialog Render
//!
//! Frames are composed on the CPU into a [`Canvas`] and handed to a
//! [`CanvasPresenter`], which uploads them into a texture and blits that
//! texture over the window surface.

mod blit;
mod canvas;
mod color;
mod context;
mod error;
mod window;

pub use blit::{BlitOptions, BlitRenderer, TextureUploader};
pub use canvas::{Canvas, load_image, scale_image};
pub use color::Color;
pub use context::GraphicsContext;
pub use error::{RenderError, RenderResult};
pub use window::{CanvasPresenter, WindowContext};

/// Re-exported so callers can name decoded images without depending on `image`.
pub use image::RgbaImage;
