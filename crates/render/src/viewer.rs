use anyhow::{anyhow, bail, Context, Result};
use physics::{Model, State};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wgpu::util::DeviceExt;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::camera::Camera;
use crate::mesh::{scene_vertices, Vertex};

/// Minimum time between two presented frames. Syncs arriving faster than
/// this only pump window events.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INITIAL_VERTEX_CAPACITY: u64 = 4096;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.09,
    b: 0.11,
    a: 1.0,
};

/// Window that draws a scene whenever the owner of the step loop calls
/// [`PassiveViewer::sync`].
///
/// The viewer never holds on to the model or state between calls, so the
/// caller is free to step the simulation in between.
pub struct PassiveViewer {
    event_loop: EventLoop<()>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    last_frame: Option<Instant>,
    window: Arc<Window>,
}

impl PassiveViewer {
    /// Open a window for `model` and draw the first frame of `state`.
    ///
    /// # Errors
    ///
    /// Fails when no display is available, no GPU adapter supports the
    /// window surface, or the device cannot be created.
    pub fn launch(model: &Model, state: &State) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(format!("simrun | {}", model.name))
                .with_inner_size(LogicalSize::new(960.0, 720.0))
                .build(&event_loop)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to get adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Viewer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
            },
            None,
        ))
        .context("failed to request device")?;

        let size = window.inner_size();
        let config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .context("surface is not supported by the adapter")?;
        surface.configure(&device, &config);

        let camera = Camera::framing(state, aspect_ratio(&config));
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera.uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Viewer shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Viewer Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Viewer Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vertices"),
            size: INITIAL_VERTEX_CAPACITY,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut viewer = Self {
            event_loop,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_count: 0,
            camera_buffer,
            camera_bind_group,
            last_frame: None,
            window,
        };
        viewer.render_frame(model, state)?;
        tracing::info!("Viewer window opened for model '{}'", model.name);
        Ok(viewer)
    }

    /// Process pending window events and redraw if a frame is due.
    ///
    /// # Errors
    ///
    /// Returns an error once the window has been closed by the user or the
    /// surface can no longer be presented to.
    pub fn sync(&mut self, model: &Model, state: &State) -> Result<()> {
        let mut close_requested = false;
        let mut resized = None;
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, elwt| {
                if let Event::WindowEvent { event, .. } = event {
                    match event {
                        WindowEvent::CloseRequested => {
                            close_requested = true;
                            elwt.exit();
                        }
                        WindowEvent::Resized(size) => resized = Some(size),
                        _ => {}
                    }
                }
            });

        if close_requested || matches!(status, PumpStatus::Exit(_)) {
            bail!("viewer window was closed");
        }
        if let Some(size) = resized {
            self.resize(size);
        }
        if self
            .last_frame
            .is_some_and(|last| last.elapsed() < FRAME_INTERVAL)
        {
            return Ok(());
        }
        self.render_frame(model, state)
    }

    /// Hide the window and release all GPU resources.
    pub fn close(self) {
        self.window.set_visible(false);
        tracing::info!("Viewer closed");
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
    }

    fn render_frame(&mut self, model: &Model, state: &State) -> Result<()> {
        self.upload_vertices(&scene_vertices(model, state));

        let camera = Camera::framing(state, aspect_ratio(&self.config));
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera.uniform()),
        );

        let output = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            // Reconfigure and try again on the next sync
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(anyhow!(e).context("failed to acquire surface texture")),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..self.vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        self.window
            .set_title(&format!("simrun | {} | t = {:.2} s", model.name, state.time));
        self.last_frame = Some(Instant::now());
        Ok(())
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        if self.vertex_buffer.size() < bytes.len() as u64 {
            self.vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertices"),
                    contents: bytes,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
        } else if !bytes.is_empty() {
            self.queue.write_buffer(&self.vertex_buffer, 0, bytes);
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            self.vertex_count = vertices.len() as u32;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn aspect_ratio(config: &wgpu::SurfaceConfiguration) -> f32 {
    config.width as f32 / config.height as f32
}
