//! Drawing surface the game renders to.
//!
//! The game only talks to the [`Canvas`] trait, [`PixelCanvas`] implements it on a CPU pixel buffer which the window uploads to the GPU.

use glam::Vec2;
use rgb::{RGB8, RGBA8};

use crate::{
    assets::{image::Image, Assets},
    math::Rect,
};

/// No tint.
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
/// Background of the game.
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
/// Highlighted caption text.
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// Images that can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Backdrop of the menu strip.
    Menu,
    /// Bouncing logo.
    Logo,
    /// Sprite sheet of the button animation.
    ButtonSheet,
}

/// Something the game can be drawn on.
pub trait Canvas {
    /// Fill the whole canvas with a single color.
    fn clear(&mut self, color: RGB8);

    /// Draw a sprite.
    ///
    /// # Arguments
    ///
    /// * `sprite` - Which image to draw.
    /// * `destination` - Area on the canvas, the image is stretched to fill it.
    /// * `source` - Part of the image to draw, `None` draws the whole image.
    /// * `tint` - Multiplied with every pixel, [`WHITE`] keeps the original colors.
    fn draw_sprite(&mut self, sprite: SpriteId, destination: Rect, source: Option<Rect>, tint: RGB8);

    /// Draw a single line of text with the top-left at the position.
    fn draw_text(&mut self, text: &str, position: Vec2, color: RGB8);

    /// Size of the text when it would be drawn.
    fn measure_text(&self, text: &str) -> Vec2;
}

/// Pack a color into the pixel format of the buffer.
///
/// The bytes in memory are in RGBA order regardless of endianness.
#[inline]
#[must_use]
pub const fn pack(color: RGB8) -> u32 {
    u32::from_ne_bytes([color.r, color.g, color.b, 255])
}

/// Unpack a buffer pixel.
#[inline]
#[must_use]
pub const fn unpack(pixel: u32) -> RGB8 {
    let [r, g, b, _] = pixel.to_ne_bytes();

    RGB8 { r, g, b }
}

/// Simple wrapper around a pixel buffer that can be passed around to rendering calls.
pub struct PixelCanvas<'a> {
    /// Width of the canvas in pixels.
    width: usize,
    /// Height of the canvas in pixels.
    height: usize,
    /// Reference to the pixel buffer.
    buffer: &'a mut [u32],
    /// Images and font to draw with.
    assets: &'a Assets,
}

impl<'a> PixelCanvas<'a> {
    /// Wrap a buffer.
    ///
    /// # Panics
    ///
    /// - When the buffer is smaller than `width * height`.
    #[must_use]
    pub fn new(width: usize, height: usize, buffer: &'a mut [u32], assets: &'a Assets) -> Self {
        assert!(
            buffer.len() >= width * height,
            "Pixel buffer too small for a {width}x{height} canvas"
        );

        Self {
            width,
            height,
            buffer,
            assets,
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel, `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(unpack(self.buffer[x + y * self.width]))
    }

    /// Draw part of an image stretched over an area with nearest-neighbor sampling.
    ///
    /// Pixels outside of the canvas are clipped, the image alpha is blended with what's already on the canvas.
    fn blit(&mut self, image: &Image, destination: Rect, source: Rect, tint: RGB8) {
        if destination.width <= 0.0 || destination.height <= 0.0 {
            return;
        }

        // Snap to whole pixels
        let start_x = destination.x.floor();
        let start_y = destination.y.floor();
        let width = destination.width.round();
        let height = destination.height.round();

        // Clip to the canvas
        let min_x = start_x.max(0.0) as usize;
        let min_y = start_y.max(0.0) as usize;
        let max_x = ((start_x + width).max(0.0) as usize).min(self.width);
        let max_y = ((start_y + height).max(0.0) as usize).min(self.height);

        let scale_x = source.width / width;
        let scale_y = source.height / height;

        for y in min_y..max_y {
            let source_y = source.y + ((y as f32 - start_y) + 0.5) * scale_y;
            let row = y * self.width;

            for x in min_x..max_x {
                let source_x = source.x + ((x as f32 - start_x) + 0.5) * scale_x;

                let texel = image.pixel(source_x as u32, source_y as u32);
                if texel.a == 0 {
                    continue;
                }

                let target = &mut self.buffer[row + x];
                *target = pack(blend(unpack(*target), tinted(texel, tint)));
            }
        }
    }
}

impl Canvas for PixelCanvas<'_> {
    fn clear(&mut self, color: RGB8) {
        self.buffer[..self.width * self.height].fill(pack(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteId, destination: Rect, source: Option<Rect>, tint: RGB8) {
        let assets = self.assets;
        let image = assets.image(sprite);
        let source = source.unwrap_or_else(|| {
            Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32)
        });

        self.blit(image, destination, source, tint);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: RGB8) {
        let assets = self.assets;
        let font = &assets.font;

        for (destination, source) in font.layout(text, position) {
            self.blit(font.image(), destination, source, color);
        }
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        self.assets.font.measure(text)
    }
}

/// Multiply a pixel with a tint.
#[inline]
fn tinted(texel: RGBA8, tint: RGB8) -> RGBA8 {
    let multiply = |channel: u8, tint: u8| ((u16::from(channel) * u16::from(tint)) / 255) as u8;

    RGBA8::new(
        multiply(texel.r, tint.r),
        multiply(texel.g, tint.g),
        multiply(texel.b, tint.b),
        texel.a,
    )
}

/// Alpha blend a pixel on top of an opaque background.
#[inline]
fn blend(background: RGB8, foreground: RGBA8) -> RGB8 {
    let alpha = u16::from(foreground.a);
    let mix = |back: u8, front: u8| {
        ((u16::from(front) * alpha + u16::from(back) * (255 - alpha)) / 255) as u8
    };

    RGB8::new(
        mix(background.r, foreground.r),
        mix(background.g, foreground.g),
        mix(background.b, foreground.b),
    )
}
