//! Window lifecycle and frame loop

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::Mat4;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use globe_core::{SphereMesh, SphereParams};
use globe_renderer::{Camera, GpuMesh, RenderSettings, SphereRenderer, SphereTexture, Transforms};

/// Initial window width in pixels
const WINDOW_WIDTH: u32 = 640;
/// Initial window height in pixels
const WINDOW_HEIGHT: u32 = 480;

/// Rotation angle in radians at `elapsed_seconds` into the animation.
///
/// The angle wraps every `cycle_seconds`, completing `turns_per_cycle`
/// full rotations per cycle. `cycle_seconds` must be positive; loaded
/// settings are validated before they reach the frame loop. Phase
/// reduction happens in f64, keeping precision at large elapsed values.
pub fn spin_angle(elapsed_seconds: f64, cycle_seconds: f32, turns_per_cycle: f32) -> f32 {
    let cycle = f64::from(cycle_seconds);
    let phase = (elapsed_seconds % cycle) / cycle;
    (phase * f64::from(turns_per_cycle) * std::f64::consts::TAU) as f32
}

/// GPU state tied to a live window surface
struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SphereRenderer,
    mesh: GpuMesh,
    camera: Camera,
    settings: RenderSettings,
    start: Instant,
}

impl RenderState {
    async fn new(
        window: Arc<Window>,
        params: SphereParams,
        settings: RenderSettings,
        texture_path: Option<&Path>,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter found")?;
        tracing::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Globe Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .context("failed to acquire GPU device")?;

        // Validation errors are bugs here, so make them fatal instead of
        // letting the frame loop continue on a broken device.
        device.on_uncaptured_error(Box::new(|error| {
            tracing::error!("wgpu error: {error}");
            panic!("unrecoverable wgpu error: {error}");
        }));

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        let present_mode = if caps.present_modes.contains(&wgpu::PresentMode::Mailbox) {
            wgpu::PresentMode::Mailbox
        } else {
            wgpu::PresentMode::Fifo
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sphere = SphereMesh::generate(&params);
        tracing::info!(
            "Generated sphere mesh: {} vertices, {} triangles",
            sphere.vertex_count(),
            sphere.triangle_count()
        );
        let mesh = GpuMesh::upload(&device, &sphere);

        let texture = match texture_path {
            Some(path) => SphereTexture::from_path(&device, &queue, path)
                .with_context(|| format!("failed to load texture {}", path.display()))?,
            None => SphereTexture::checkerboard(&device, &queue),
        };

        let camera = Camera::new(
            &settings.camera,
            config.width as f32 / config.height as f32,
        );
        let renderer = SphereRenderer::new(
            &device,
            format,
            config.width,
            config.height,
            &texture,
            &settings,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            mesh,
            camera,
            settings,
            start: Instant::now(),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.camera
            .update_aspect(size.width as f32 / size.height as f32);
        self.renderer.resize(&self.device, size.width, size.height);
    }

    fn render_frame(&mut self) -> Result<()> {
        let elapsed = self.start.elapsed().as_secs_f64();
        let angle = spin_angle(
            elapsed,
            self.settings.animation.cycle_seconds,
            self.settings.animation.turns_per_cycle,
        );
        let model = Mat4::from_rotation_y(angle);
        let transforms = Transforms::new(
            model,
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
        );
        self.renderer.update_transforms(&self.queue, &transforms);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                anyhow::bail!("surface out of memory");
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface frame timed out");
                return Ok(());
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        self.renderer.render(&mut encoder, &view, &self.mesh);
        self.queue.submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }
}

/// Application driver for the winit event loop
pub struct App {
    params: SphereParams,
    settings: RenderSettings,
    texture_path: Option<PathBuf>,
    window: Option<Arc<Window>>,
    state: Option<RenderState>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(
        params: SphereParams,
        settings: RenderSettings,
        texture_path: Option<PathBuf>,
    ) -> Self {
        Self {
            params,
            settings,
            texture_path,
            window: None,
            state: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Globe")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                self.fail(
                    event_loop,
                    anyhow::Error::new(error).context("failed to create window"),
                );
                return;
            }
        };

        match pollster::block_on(RenderState::new(
            Arc::clone(&window),
            self.params,
            self.settings.clone(),
            self.texture_path.as_deref(),
        )) {
            Ok(state) => {
                window.request_redraw();
                self.window = Some(window);
                self.state = Some(state);
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit()
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(state) = &mut self.state {
                    if let Err(error) = state.render_frame() {
                        self.fail(event_loop, error.context("rendering failed"));
                        return;
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use super::*;

    #[test]
    fn test_spin_angle_wraps_each_cycle() {
        assert!((spin_angle(5.0, 5.0, 2.0) - spin_angle(0.0, 5.0, 2.0)).abs() < 1e-4);
        assert!((spin_angle(7.5, 5.0, 2.0) - spin_angle(2.5, 5.0, 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_spin_angle_half_cycle_is_one_turn() {
        assert!((spin_angle(2.5, 5.0, 2.0) - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_spin_angle_quarter_cycle() {
        assert!((spin_angle(1.25, 5.0, 2.0) - PI).abs() < 1e-5);
    }

    #[test]
    fn test_spin_angle_keeps_precision_after_long_uptime() {
        // Eleven days in, the same point in the cycle gives the same angle
        let fresh = spin_angle(1.3, 5.0, 2.0);
        let long_run = spin_angle(1_000_001.3, 5.0, 2.0);
        assert!((long_run - fresh).abs() < 1e-4);
    }
}
