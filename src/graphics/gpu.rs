//! Surface, device and queue for the window.

use glam::UVec2;
use miette::{Context, IntoDiagnostic, Result};

use super::PREFERRED_TEXTURE_FORMAT;

/// GPU state for a single window surface.
pub(crate) struct Gpu<'window> {
    /// GPU device.
    pub(crate) device: wgpu::Device,
    /// GPU surface.
    pub(crate) surface: wgpu::Surface<'window>,
    /// GPU queue.
    pub(crate) queue: wgpu::Queue,
    /// GPU surface configuration.
    config: wgpu::SurfaceConfiguration,
}

impl<'window> Gpu<'window> {
    /// Create a GPU surface on the window.
    ///
    /// # Arguments
    ///
    /// * `window` - Window to draw on.
    /// * `screen_size` - Size of the window in physical pixels.
    pub(crate) async fn new<W>(window: W, screen_size: UVec2) -> Result<Self>
    where
        W: wgpu::WindowHandle + 'window,
    {
        // Get a handle to our GPU
        let instance = wgpu::Instance::default();

        log::debug!("Creating GPU surface on the window");

        // Create a GPU surface on the window
        let surface = instance
            .create_surface(window)
            .into_diagnostic()
            .wrap_err("Error creating surface on window")?;

        log::debug!("Requesting adapter");

        // Request an adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptionsBase {
                // The buffer is tiny, don't wake up the dedicated GPU for it
                power_preference: wgpu::PowerPreference::LowPower,
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| miette::miette!("Error getting GPU adapter for window"))?;

        log::info!("Using GPU adapter '{}'", adapter.get_info().name);

        // Get the surface capabilities
        let swapchain_capabilities = surface.get_capabilities(&adapter);

        // Create the logical device and command queue
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .into_diagnostic()
            .wrap_err("Error getting logical GPU device for surface")?;

        // Prefer our sRGB format, otherwise take what the surface gives us
        let format = if swapchain_capabilities
            .formats
            .contains(&PREFERRED_TEXTURE_FORMAT)
        {
            PREFERRED_TEXTURE_FORMAT
        } else {
            swapchain_capabilities
                .formats
                .first()
                .copied()
                .ok_or_else(|| miette::miette!("Window surface doesn't support any format"))?
        };

        // Configure the render surface
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: screen_size.x.max(1),
            height: screen_size.y.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: swapchain_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        Ok(Self {
            device,
            surface,
            queue,
            config,
        })
    }

    /// Start a new rendering event.
    ///
    /// # Errors
    ///
    /// - When the surface texture can't be acquired, the surface is reconfigured so the next frame can try again.
    pub(crate) fn start(&mut self) -> Result<Frame> {
        // Get the main render texture
        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(err @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                // Reconfigure with the same size, the next frame will succeed
                self.surface.configure(&self.device, &self.config);

                return Err(err)
                    .into_diagnostic()
                    .wrap_err("Surface texture was lost");
            }
            Err(err) => {
                return Err(err)
                    .into_diagnostic()
                    .wrap_err("Error acquiring next swap chain texture")
            }
        };

        // Create the encoder
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("DVD Quest Command Encoder"),
            });

        // Create a texture view from the main render texture
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Frame {
            encoder,
            surface_view,
            surface_texture,
            queue: &self.queue,
        })
    }

    /// Resize the surface.
    pub(crate) fn resize(&mut self, new_size: UVec2) {
        log::debug!("Resizing the surface to ({}x{})", new_size.x, new_size.y);

        // Ensure that the render surface is at least 1 pixel big, otherwise an error would occur
        self.config.width = new_size.x.max(1);
        self.config.height = new_size.y.max(1);
        self.surface.configure(&self.device, &self.config);
    }

    /// Size of the screen in pixels.
    #[inline]
    pub(crate) fn screen_size(&self) -> UVec2 {
        UVec2::new(self.config.width, self.config.height)
    }

    /// Format of the surface textures.
    #[inline]
    pub(crate) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

/// Rendering state for a single frame.
pub(crate) struct Frame<'gpu> {
    /// GPU command encoder.
    pub(crate) encoder: wgpu::CommandEncoder,
    /// GPU surface view.
    pub(crate) surface_view: wgpu::TextureView,
    /// GPU surface texture.
    surface_texture: wgpu::SurfaceTexture,
    /// GPU queue.
    queue: &'gpu wgpu::Queue,
}

impl<'gpu> Frame<'gpu> {
    /// Finish rendering event.
    #[inline]
    pub(crate) fn present(self) {
        // Draw to the texture
        self.queue.submit(Some(self.encoder.finish()));

        // Show the texture in the window
        self.surface_texture.present();
    }
}
