//! Texture blitting utilities for fullscreen quad rendering.
//!
//! The composed dialogue frame lives in a texture that is drawn over the
//! whole surface every time the frame changes.

use std::sync::Arc;

use rmdialog_core::{geometry::Size, profiling::profile_function};
use wgpu::util::DeviceExt;

use crate::context::GraphicsContext;

/// Draws a texture as a fullscreen quad.
pub struct BlitRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
    context: Arc<GraphicsContext>,
}

impl BlitRenderer {
    /// Create a new blit renderer targeting `target_format` (typically the surface format).
    pub fn new(context: Arc<GraphicsContext>, target_format: wgpu::TextureFormat) -> Self {
        Self::new_with_options(context, target_format, BlitOptions::default())
    }

    /// Create a new blit renderer with custom options.
    pub fn new_with_options(
        context: Arc<GraphicsContext>,
        target_format: wgpu::TextureFormat,
        options: BlitOptions,
    ) -> Self {
        profile_function!();
        let device = context.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Blit Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: options.filter_mode,
            min_filter: options.filter_mode,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Blit Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Blit Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 16,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: options.blend_state,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        #[rustfmt::skip]
        let vertices: [f32; 24] = [
            // Position (clip space)  UV
            -1.0, -1.0,               0.0, 1.0,
             1.0, -1.0,               1.0, 1.0,
             1.0,  1.0,               1.0, 0.0,
            -1.0, -1.0,               0.0, 1.0,
             1.0,  1.0,               1.0, 0.0,
            -1.0,  1.0,               0.0, 0.0,
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blit Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            bind_group_layout,
            sampler,
            vertex_buffer,
            context,
        }
    }

    /// Create a bind group for a texture. Cache it while the texture lives.
    pub fn create_bind_group(&self, texture_view: &wgpu::TextureView) -> wgpu::BindGroup {
        self.context
            .device()
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Blit Bind Group"),
                layout: &self.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(texture_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            })
    }

    /// Blit using a pre-created bind group.
    pub fn blit_with_bind_group(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        bind_group: &wgpu::BindGroup,
    ) {
        render_pass.push_debug_group("BlitRenderer::blit");
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..6, 0..1);
        render_pass.pop_debug_group();
    }
}

/// Options for configuring the blit renderer.
#[derive(Debug, Clone)]
pub struct BlitOptions {
    /// Filter mode for texture sampling (Linear or Nearest)
    pub filter_mode: wgpu::FilterMode,
    /// Blend state for the blit operation
    pub blend_state: Option<wgpu::BlendState>,
}

impl Default for BlitOptions {
    fn default() -> Self {
        Self::nearest()
    }
}

impl BlitOptions {
    /// Nearest-neighbour sampling; keeps pixel fonts crisp when the surface is scaled.
    pub fn nearest() -> Self {
        Self {
            filter_mode: wgpu::FilterMode::Nearest,
            blend_state: Some(wgpu::BlendState::REPLACE),
        }
    }
}

/// A texture that receives CPU frames.
pub struct TextureUploader {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: Size<u32>,
}

impl TextureUploader {
    /// Create an sRGB RGBA8 texture of `size`.
    pub fn new(context: &GraphicsContext, size: Size<u32>) -> Self {
        let texture = context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Dialogue Frame Texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            size,
        }
    }

    /// Upload a full frame of RGBA8 pixel data.
    ///
    /// `data` must hold exactly `width * height * 4` bytes.
    pub fn upload(&self, context: &GraphicsContext, data: &[u8]) {
        profile_function!();
        context.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.size.width * 4),
                rows_per_image: Some(self.size.height),
            },
            wgpu::Extent3d {
                width: self.size.width,
                height: self.size.height,
                depth_or_array_layers: 1,
            },
        );
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }
}
