//! Simple math types.

use glam::Vec2;

/// Axis-aligned rectangle in buffer pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Horizontal position of the left edge.
    pub x: f32,
    /// Vertical position of the top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Construct a rectangle from the top-left corner and a size.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Construct a rectangle from a top-left position and a size vector.
    #[inline]
    #[must_use]
    pub const fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Horizontal position of the right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical position of the bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are exclusive.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
