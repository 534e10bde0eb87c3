//! Types and helpers for showing the pixel buffer on the GPU.

pub(crate) mod framebuffer;
pub(crate) mod gpu;
pub(crate) mod letterbox;
pub(crate) mod state;

use rgb::RGB8;
use wgpu::Color;

/// Texture format we prefer to use for everything.
///
/// We choose sRGB since most source images are created with this format and otherwise everything will be quite dark.
pub(crate) const PREFERRED_TEXTURE_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8UnormSrgb;

/// Convert a color to a WGPU [`wgpu::Color`] taking in account whether the target format is sRGB.
fn rgb_to_wgpu_color(color: RGB8, format: wgpu::TextureFormat) -> Color {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    if format.is_srgb() {
        // Convert to linear space, the surface converts it back
        Color {
            r: r.powf(2.2),
            g: g.powf(2.2),
            b: b.powf(2.2),
            a: 1.0,
        }
    } else {
        Color { r, g, b, a: 1.0 }
    }
}
