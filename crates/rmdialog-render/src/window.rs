use std::sync::Arc;

use rmdialog_core::{geometry::Size, profiling::profile_function};
use rmdialog_winit::window::Window;

use crate::{
    blit::{BlitRenderer, TextureUploader},
    canvas::Canvas,
    color::Color,
    context::GraphicsContext,
    error::{RenderError, RenderResult},
};

/// Window rendering context that manages a surface and its configuration.
pub struct WindowContext {
    pub(crate) window: Window,
    pub(crate) context: Arc<GraphicsContext>,
    pub(crate) surface: wgpu::Surface<'static>,
    pub(crate) config: wgpu::SurfaceConfiguration,
}

impl WindowContext {
    /// Creates the surface for `window` together with a device that can drive it.
    pub fn new(window: &Window) -> RenderResult<Self> {
        profile_function!();
        let Size { width, height } = window.physical_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.window.clone())
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let context = GraphicsContext::new_for_surface_sync(instance, &surface)?;

        let mut config = surface
            .get_default_config(&context.adapter, width.max(1), height.max(1))
            .ok_or(RenderError::SurfaceUnsupported)?;

        // Canvas bytes are sRGB; an sRGB target keeps them unchanged on screen.
        let capabilities = surface.get_capabilities(&context.adapter);
        if let Some(format) = capabilities.formats.iter().copied().find(|f| f.is_srgb()) {
            config.format = format;
        }

        surface.configure(&context.device, &config);
        tracing::debug!(
            "Configured surface {}x{} as {:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            window: window.clone(),
            context,
            surface,
            config,
        })
    }

    pub fn graphics_context(&self) -> &Arc<GraphicsContext> {
        &self.context
    }

    /// Reapply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        let Size { width, height } = self.window.physical_size();
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
        }
        self.surface.configure(&self.context.device, &self.config);
    }

    fn acquire(&mut self) -> RenderResult<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.reconfigure();
                Ok(self.surface.get_current_texture()?)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Presents whole CPU frames to one window.
pub struct CanvasPresenter {
    window_ctx: WindowContext,
    blit: BlitRenderer,
    uploader: TextureUploader,
    bind_group: wgpu::BindGroup,
}

impl CanvasPresenter {
    /// Sets up GPU presentation for frames of `frame_size` pixels.
    pub fn new(window: &Window, frame_size: Size<u32>) -> RenderResult<Self> {
        let window_ctx = WindowContext::new(window)?;
        let context = window_ctx.graphics_context().clone();

        let blit = BlitRenderer::new(context.clone(), window_ctx.config.format);
        let uploader = TextureUploader::new(&context, frame_size);
        let bind_group = blit.create_bind_group(uploader.view());

        Ok(Self {
            window_ctx,
            blit,
            uploader,
            bind_group,
        })
    }

    /// Upload `canvas` and show it, scaled to fill the surface.
    pub fn present(&mut self, canvas: &Canvas) -> RenderResult<()> {
        profile_function!();
        let context = self.window_ctx.context.clone();

        if canvas.size() != self.uploader.size() {
            tracing::debug!("Frame size changed to {:?}, recreating texture", canvas.size());
            self.uploader = TextureUploader::new(&context, canvas.size());
            self.bind_group = self.blit.create_bind_group(self.uploader.view());
        }
        self.uploader.upload(&context, canvas.as_raw());

        let frame = self.window_ctx.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Dialogue Present Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(Color::BLACK.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.blit.blit_with_bind_group(&mut pass, &self.bind_group);
        }

        context.queue.submit(std::iter::once(encoder.finish()));
        self.window_ctx.window.pre_present_notify();
        frame.present();
        Ok(())
    }
}
