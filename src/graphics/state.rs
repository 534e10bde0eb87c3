//! Main rendering state.

use glam::{UVec2, Vec2};
use miette::{Result, WrapErr};
use rgb::RGB8;

use super::{
    framebuffer::FramebufferState, gpu::Gpu, letterbox::Letterbox, rgb_to_wgpu_color,
};
use crate::{assets::Assets, canvas::PixelCanvas, Game};

/// Main render state holding the GPU information and the pixel buffer.
pub(crate) struct MainRenderState<'window> {
    /// GPU state.
    gpu: Gpu<'window>,
    /// Texture and pipeline for showing the pixels.
    framebuffer: FramebufferState,
    /// Size of the pixel buffer.
    buffer_size: UVec2,
    /// Pixels the game renders into.
    pixels: Vec<u32>,
    /// Letterbox output for the final render pass viewport.
    letterbox: Letterbox,
    /// Color of the window outside of the letterbox.
    viewport_color: wgpu::Color,
}

impl<'window> MainRenderState<'window> {
    /// Create a GPU surface on the window.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Size of the pixel buffer the game draws on.
    /// * `screen_size` - Size of the window in physical pixels.
    /// * `viewport_color` - Color of the window outside of the scaled buffer.
    /// * `window` - Window to draw on.
    pub(crate) async fn new<W>(
        buffer_size: UVec2,
        screen_size: UVec2,
        viewport_color: RGB8,
        window: W,
    ) -> Result<Self>
    where
        W: wgpu::WindowHandle + 'window,
    {
        // Buffer must be at least a single pixel for the texture
        let buffer_size = buffer_size.max(UVec2::ONE);

        let gpu = Gpu::new(window, screen_size)
            .await
            .wrap_err("Error setting up the GPU")?;

        let framebuffer = FramebufferState::new(buffer_size, &gpu.device, gpu.format());

        let pixels = vec![0; buffer_size.x as usize * buffer_size.y as usize];

        let letterbox = Letterbox::new(buffer_size, gpu.screen_size());

        // The surface might not support the preferred format, so convert for the one it got
        let viewport_color = rgb_to_wgpu_color(viewport_color, gpu.format());

        Ok(Self {
            gpu,
            framebuffer,
            buffer_size,
            pixels,
            letterbox,
            viewport_color,
        })
    }

    /// Resize the surface and recalculate the letterbox.
    pub(crate) fn resize(&mut self, new_size: UVec2) {
        self.gpu.resize(new_size);

        self.letterbox = Letterbox::new(self.buffer_size, self.gpu.screen_size());
    }

    /// Map a coordinate in window pixels to a coordinate in buffer pixels.
    #[inline]
    pub(crate) fn map_coordinate(&self, coordinate: Vec2) -> Vec2 {
        self.letterbox.map_coordinate(coordinate)
    }

    /// Let the game draw into the pixel buffer and show it in the window.
    ///
    /// # Errors
    ///
    /// - When the surface texture could not be acquired, nothing is drawn this frame.
    pub(crate) fn render(&mut self, game: &impl Game, assets: &Assets) -> Result<()> {
        // Draw the game on the CPU
        {
            let mut canvas = PixelCanvas::new(
                self.buffer_size.x as usize,
                self.buffer_size.y as usize,
                &mut self.pixels,
                assets,
            );
            game.render(&mut canvas);
        }

        // Send the pixels to the GPU before the frame borrows it
        self.framebuffer.upload(&self.gpu.queue, &self.pixels);

        let mut frame = self.gpu.start()?;

        self.framebuffer
            .render(&mut frame, &self.letterbox, self.viewport_color);

        frame.present();

        Ok(())
    }
}
