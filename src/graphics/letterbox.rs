//! Integer scaling of the buffer inside the window.

use glam::{UVec2, Vec2};

use crate::math::Rect;

/// Area of the window the buffer is drawn in.
///
/// The buffer is scaled with the biggest integer factor that fits and centered, the rest of the window shows the background color.
/// The area never exceeds the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Letterbox {
    /// Area in screen pixels.
    area: Rect,
    /// Size of the buffer in pixels.
    buffer_size: Vec2,
}

impl Letterbox {
    /// Calculate the letterbox for a buffer on a screen.
    pub(crate) fn new(buffer_size: UVec2, screen_size: UVec2) -> Self {
        // Avoid dividing by zero on degenerate buffers
        let buffer_size = buffer_size.max(UVec2::ONE);

        let scale = {
            if screen_size.y * buffer_size.x < screen_size.x * buffer_size.y {
                // Height fits
                screen_size.y / buffer_size.y
            } else {
                // Width fits
                screen_size.x / buffer_size.x
            }
        };

        let scale = if scale >= 1 {
            scale as f32
        } else {
            // The window is smaller than the buffer, shrink it to fit without integer scaling
            (screen_size.as_vec2() / buffer_size.as_vec2()).min_element()
        };

        // A minimized window must still get a viewport of at least a single pixel
        let scaled_buffer_size = (buffer_size.as_vec2() * scale).floor().max(Vec2::ONE);

        // Center the scaled buffer
        let offset = ((screen_size.as_vec2() - scaled_buffer_size) / 2.0)
            .floor()
            .max(Vec2::ZERO);

        let area = Rect::from_position_size(offset, scaled_buffer_size);

        log::debug!(
            "Setting new letterbox to ({}:{} x {}:{}) with {scale} scaling",
            offset.x,
            offset.y,
            scaled_buffer_size.x,
            scaled_buffer_size.y
        );

        Self {
            area,
            buffer_size: buffer_size.as_vec2(),
        }
    }

    /// Area in screen pixels.
    #[inline]
    #[must_use]
    pub(crate) const fn area(&self) -> Rect {
        self.area
    }

    /// Map a screen coordinate to a buffer coordinate.
    ///
    /// Coordinates outside of the letterbox map to coordinates outside of the buffer.
    #[must_use]
    pub(crate) fn map_coordinate(&self, coordinate: Vec2) -> Vec2 {
        // Calculate the scale from the letterbox
        let scale = self.area.width / self.buffer_size.x;

        (coordinate - self.area.position()) / scale
    }
}
