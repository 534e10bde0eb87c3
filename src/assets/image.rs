//! PNG image assets.

use std::{io::Cursor, path::Path};

use miette::{IntoDiagnostic, Result, WrapErr};
use png::{BitDepth, ColorType, Decoder, Transformations};
use rgb::RGBA8;

/// Decoded image with RGBA pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// All pixels, `width * height` long.
    pixels: Vec<RGBA8>,
}

impl Image {
    /// Create an image from raw pixels.
    ///
    /// # Errors
    ///
    /// - When the amount of pixels doesn't match the size.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGBA8>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            miette::bail!(
                "Image of {width}x{height} needs {} pixels but got {}",
                width as usize * height as usize,
                pixels.len()
            );
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode a PNG.
    ///
    /// Indexed, grayscale and RGB images are expanded to RGBA.
    ///
    /// # Errors
    ///
    /// - When the bytes are not a valid PNG.
    /// - When the PNG has a bit depth that can't be normalized to 8 bits.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let mut decoder = Decoder::new(Cursor::new(bytes));

        // Discard text chunks
        decoder.set_ignore_text_chunk(true);

        // Convert indexed images to RGBA
        decoder
            .set_transformations(Transformations::normalize_to_color8() | Transformations::ALPHA);

        // Start parsing the PNG
        let mut reader = decoder
            .read_info()
            .into_diagnostic()
            .wrap_err("Error reading PNG header")?;

        let (color_type, bits) = reader.output_color_type();
        if bits != BitDepth::Eight {
            miette::bail!("PNG must be normalizable to 8 bits per channel, got {bits:?}");
        }

        // Read the PNG
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .into_diagnostic()
            .wrap_err("Error decoding PNG frame")?;
        let buf = &buf[..info.buffer_size()];

        let pixels = match color_type {
            ColorType::Rgba => buf
                .chunks_exact(4)
                .map(|pixel| RGBA8::new(pixel[0], pixel[1], pixel[2], pixel[3]))
                .collect(),
            ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .map(|pixel| RGBA8::new(pixel[0], pixel[0], pixel[0], pixel[1]))
                .collect(),
            ColorType::Rgb => buf
                .chunks_exact(3)
                .map(|pixel| RGBA8::new(pixel[0], pixel[1], pixel[2], 255))
                .collect(),
            ColorType::Grayscale => buf
                .iter()
                .map(|value| RGBA8::new(*value, *value, *value, 255))
                .collect(),
            other => miette::bail!("PNG color type {other:?} could not be expanded to RGBA"),
        };

        Self::from_pixels(info.width, info.height, pixels)
    }

    /// Load a PNG from disk.
    ///
    /// # Errors
    ///
    /// - When the file can't be read or is not a valid PNG.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        log::debug!("Loading image '{}'", path.display());

        let bytes = std::fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading image '{}'", path.display()))?;

        Self::from_png_bytes(&bytes)
            .wrap_err_with(|| format!("Error decoding image '{}'", path.display()))
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at a coordinate.
    ///
    /// Returns a fully transparent pixel when out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> RGBA8 {
        if x >= self.width || y >= self.height {
            return RGBA8::new(0, 0, 0, 0);
        }

        self.pixels[x as usize + y as usize * self.width as usize]
    }
}
