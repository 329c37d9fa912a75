//! wgpu Renderer
//!
//! This module handles all wgpu initialization and rendering. Primitives are
//! rasterised into a linear canvas texture which is then blitted to the
//! window surface on every redraw.

use anyhow::Context;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;

use crate::color::Rgb;
use crate::surface::{DrawSurface, Primitive};

/// Instance tag for round-capped line segments
const KIND_LINE: u32 = 0;
/// Instance tag for filled rectangles
const KIND_RECT: u32 = 1;

/// Uniforms for primitive shader (canvas size)
#[repr(C, align(16))] // 16-byte alignment for uniform buffers
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct PrimitiveUniforms {
    canvas_size: [f32; 2],
    _padding: [f32; 2],
}

/// Uniforms for blit shader
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct BlitUniforms {
    encode_srgb: u32, // 1 = surface is not sRGB, encode in shader
    _padding: [u32; 3],
}

/// Vertex data for a single primitive instance
///
/// Lines carry their endpoints at pixel centers; rectangles carry their
/// min/max pixel edges and a zero half width.
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct PrimitiveInstance {
    start: [f32; 2],
    end: [f32; 2],
    color: [f32; 4],
    half_width: f32,
    kind: u32,
    _padding: [f32; 2],
}

impl PrimitiveInstance {
    fn from_primitive(primitive: &Primitive) -> Self {
        match *primitive {
            Primitive::Line { from, to, pen } => Self {
                start: [from.x as f32 + 0.5, from.y as f32 + 0.5],
                end: [to.x as f32 + 0.5, to.y as f32 + 0.5],
                color: pen.color.to_linear_rgba(),
                half_width: pen.line_width as f32 / 2.0,
                kind: KIND_LINE,
                _padding: [0.0; 2],
            },
            Primitive::FillRect { rect, color } => {
                let max = rect.max();
                Self {
                    start: [rect.x as f32, rect.y as f32],
                    end: [max.x as f32, max.y as f32],
                    color: color.to_linear_rgba(),
                    half_width: 0.0,
                    kind: KIND_RECT,
                    _padding: [0.0; 2],
                }
            }
        }
    }
}

/// Renderer wraps the wgpu device, queue, and surface
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    max_texture_dimension: u32,
    canvas_format: wgpu::TextureFormat,
    /// Canvas clear color, linear RGBA
    background: [f64; 4],

    // Primitive rendering into the canvas
    primitive_pipeline: wgpu::RenderPipeline,
    primitive_uniform_buffer: wgpu::Buffer,
    primitive_bind_group: wgpu::BindGroup,
    /// Primitives drawn since the last flush
    pending: Vec<PrimitiveInstance>,

    // Canvas texture holding every drawn pixel
    canvas_texture: wgpu::Texture,
    canvas_view: wgpu::TextureView,

    // Blit pipeline for copying canvas to surface
    blit_pipeline: wgpu::RenderPipeline,
    blit_uniform_buffer: wgpu::Buffer,
    blit_bind_group: wgpu::BindGroup,
    canvas_sampler: wgpu::Sampler,
}

impl Renderer {
    /// Create a new renderer
    ///
    /// # Arguments
    /// * `target` - The window to render to
    /// * `size` - Initial surface size in physical pixels
    /// * `background` - Color the canvas is cleared to
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: PhysicalSize<u32>,
        background: Rgb,
    ) -> anyhow::Result<Self> {
        log::info!("🔧 Renderer::new() starting...");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all() & !wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(target)
            .context("Failed to create surface")?;
        log::info!("✅ Surface created");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable adapter")?;

        let adapter_info = adapter.get_info();
        log::info!("✅ Adapter acquired: {:?} (backend: {:?})", adapter_info.name, adapter_info.backend);

        let adapter_limits = adapter.limits();
        let max_texture_dimension = adapter_limits.max_texture_dimension_2d;
        log::debug!("Max texture dimension: {}", max_texture_dimension);

        // Lowest common limits, but allow the adapter's full texture resolution
        let device_limits = wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter_limits);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Draw Canvas Device"),
                required_features: wgpu::Features::empty(),
                required_limits: device_limits,
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .context("Failed to create device")?;
        log::info!("✅ Device and queue created");

        let surface_caps = surface.get_capabilities(&adapter);
        log::debug!(
            "Surface capabilities: formats={:?}, present_modes={:?}",
            surface_caps.formats,
            surface_caps.present_modes
        );

        // Prefer sRGB formats so the hardware encodes linear canvas values
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        log::info!("Selected surface format: {:?}", surface_format);

        let alpha_mode = if surface_caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
            wgpu::CompositeAlphaMode::Opaque
        } else {
            wgpu::CompositeAlphaMode::Auto
        };

        let canvas_format = wgpu::TextureFormat::Rgba16Float;

        let (width, height) = clamp_size(size, max_texture_dimension);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Only configure if size is valid, otherwise wait for resize
        if width > 0 && height > 0 {
            surface.configure(&device, &config);
        } else {
            log::warn!("Skipping surface configuration (invalid size: {}x{})", width, height);
        }

        let primitive_pipeline = Self::create_primitive_pipeline(&device, canvas_format);

        let primitive_uniforms = PrimitiveUniforms {
            canvas_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        };
        let primitive_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Primitive Uniform Buffer"),
            contents: bytemuck::cast_slice(&[primitive_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let primitive_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Primitive Bind Group"),
            layout: &primitive_pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: primitive_uniform_buffer.as_entire_binding(),
            }],
        });

        let (canvas_texture, canvas_view) =
            Self::create_canvas_texture(&device, width.max(1), height.max(1), canvas_format);
        log::info!("✅ Canvas texture created: {}x{}, format: {:?}", width, height, canvas_format);

        let (blit_pipeline, blit_bind_group_layout) = Self::create_blit_pipeline(&device, surface_format);

        // Canvas and surface share a size, so nearest sampling is a 1:1 copy
        let canvas_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Canvas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let blit_uniforms = BlitUniforms {
            encode_srgb: u32::from(!surface_format.is_srgb()),
            _padding: [0; 3],
        };
        let blit_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blit Uniform Buffer"),
            contents: bytemuck::cast_slice(&[blit_uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let blit_bind_group = Self::create_blit_bind_group(
            &device,
            &blit_bind_group_layout,
            &canvas_view,
            &canvas_sampler,
            &blit_uniform_buffer,
        );

        let renderer = Self {
            surface,
            device,
            queue,
            config,
            size,
            max_texture_dimension,
            canvas_format,
            background: background.to_linear_rgba().map(f64::from),
            primitive_pipeline,
            primitive_uniform_buffer,
            primitive_bind_group,
            pending: Vec::new(),
            canvas_texture,
            canvas_view,
            blit_pipeline,
            blit_uniform_buffer,
            blit_bind_group,
            canvas_sampler,
        };
        renderer.clear_canvas();

        log::info!("✅ Renderer initialized: {}x{}, surface: {:?}", width, height, surface_format);
        Ok(renderer)
    }

    /// Create the primitive rendering pipeline
    fn create_primitive_pipeline(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Primitive Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Primitive Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Primitive Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PrimitiveInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // start
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // end
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // color
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // half_width
                wgpu::VertexAttribute {
                    offset: 32,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
                // kind
                wgpu::VertexAttribute {
                    offset: 36,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Primitive Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    // Opaque paint replaces whatever is underneath
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Create canvas texture holding the drawing
    fn create_canvas_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Canvas Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        (texture, view)
    }

    fn create_blit_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        canvas_view: &wgpu::TextureView,
        canvas_sampler: &wgpu::Sampler,
        uniform_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Blit Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(canvas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(canvas_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        })
    }

    /// Create the blit pipeline for copying canvas to surface
    fn create_blit_pipeline(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroupLayout) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
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
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
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
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group_layout)
    }

    /// Resize the surface
    ///
    /// The canvas texture is reallocated and cleared, so the drawing is lost.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            log::warn!("Ignoring resize to zero size: {:?}", new_size);
            return;
        }

        self.size = new_size;
        let (width, height) = clamp_size(new_size, self.max_texture_dimension);

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        let (canvas_texture, canvas_view) =
            Self::create_canvas_texture(&self.device, width, height, self.canvas_format);
        self.canvas_texture = canvas_texture;
        self.canvas_view = canvas_view;

        self.blit_bind_group = Self::create_blit_bind_group(
            &self.device,
            &self.blit_pipeline.get_bind_group_layout(0),
            &self.canvas_view,
            &self.canvas_sampler,
            &self.blit_uniform_buffer,
        );

        let primitive_uniforms = PrimitiveUniforms {
            canvas_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        };
        self.queue.write_buffer(
            &self.primitive_uniform_buffer,
            0,
            bytemuck::cast_slice(&[primitive_uniforms]),
        );

        // Anything queued was positioned for the old canvas
        self.pending.clear();
        self.clear_canvas();

        log::debug!("Surface and canvas resized to: {}x{}", width, height);
    }

    /// Rasterise pending primitives into the canvas texture
    fn render_primitives(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let instance_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Primitive Instance Buffer"),
            contents: bytemuck::cast_slice(&self.pending),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Primitive Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Primitive Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.canvas_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load, // Keep existing canvas content
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.primitive_pipeline);
            render_pass.set_bind_group(0, &self.primitive_bind_group, &[]);
            render_pass.set_vertex_buffer(0, instance_buffer.slice(..));

            // 6 vertices per instance (2 triangles = 1 quad per primitive)
            render_pass.draw(0..6, 0..self.pending.len() as u32);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        log::debug!("Rendered {} primitives", self.pending.len());
        self.pending.clear();
    }

    /// Render a frame (blit canvas to surface)
    pub fn render(&mut self) {
        if self.config.width == 0 || self.config.height == 0 {
            log::warn!("Invalid surface state, skipping render");
            return;
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::error!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.blit_pipeline);
            render_pass.set_bind_group(0, &self.blit_bind_group, &[]);
            render_pass.draw(0..6, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    /// Clear the canvas to the background color
    pub fn clear_canvas(&self) {
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Clear Canvas Encoder"),
        });

        {
            let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Canvas Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.canvas_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.background[0],
                            g: self.background[1],
                            b: self.background[2],
                            a: self.background[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        log::debug!("Canvas cleared to color: {:?}", self.background);
    }

    /// Get the current surface size
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Get the canvas texture size (may be clamped below the surface size)
    pub fn canvas_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.canvas_texture.width(), self.canvas_texture.height())
    }
}

impl DrawSurface for Renderer {
    fn draw(&mut self, primitive: Primitive) {
        self.pending.push(PrimitiveInstance::from_primitive(&primitive));
    }

    fn flush(&mut self) {
        self.render_primitives();
    }
}

/// Clamp a surface size to the device's max texture dimension
fn clamp_size(size: PhysicalSize<u32>, max_texture_dimension: u32) -> (u32, u32) {
    let width = size.width.min(max_texture_dimension);
    let height = size.height.min(max_texture_dimension);
    if width != size.width || height != size.height {
        log::warn!(
            "⚠️ Size {}x{} exceeds max texture size {}, clamping to {}x{}",
            size.width,
            size.height,
            max_texture_dimension,
            width,
            height
        );
    }
    (width, height)
}
