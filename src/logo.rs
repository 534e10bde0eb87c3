//! Bouncing logo entity.

use glam::Vec2;
use rgb::RGB8;

use crate::math::Rect;

/// A single colored logo bouncing around the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncingLogo {
    /// Top-left position in buffer pixels.
    pub position: Vec2,
    /// Pixels moved per frame at the reference frame rate.
    pub velocity: Vec2,
    /// Tint the logo image is drawn with.
    pub color: RGB8,
}

impl BouncingLogo {
    /// Construct a new logo.
    #[inline]
    #[must_use]
    pub const fn new(position: Vec2, velocity: Vec2, color: RGB8) -> Self {
        Self {
            position,
            velocity,
            color,
        }
    }

    /// Move the logo and reflect its velocity when it's outside of the bounds.
    ///
    /// Both axes are checked independently after moving, so a corner hit flips both components in the same tick.
    /// The position is never clamped, a logo can overlap the edge for a single tick before it moves back.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Seconds since the previous tick.
    /// * `frame_rate_scale` - Frame rate the velocity is expressed in.
    /// * `size` - Collision size of the logo.
    /// * `bounds` - Area the logo must stay in.
    pub fn advance(&mut self, elapsed: f32, frame_rate_scale: f32, size: Vec2, bounds: Rect) {
        self.position += self.velocity * elapsed * frame_rate_scale;

        // Horizontal edges
        if self.position.x < bounds.x || self.position.x + size.x > bounds.right() {
            self.velocity.x = -self.velocity.x;
        }

        // Vertical edges
        if self.position.y < bounds.y || self.position.y + size.y > bounds.bottom() {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Area covered by the logo when drawn.
    #[inline]
    #[must_use]
    pub const fn rect(&self, size: Vec2) -> Rect {
        Rect::from_position_size(self.position, size)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rgb::RGB8;

    use super::BouncingLogo;
    use crate::math::Rect;

    /// Default logo size.
    const SIZE: Vec2 = Vec2::new(128.0, 64.0);
    /// Default play area right of the menu.
    const BOUNDS: Rect = Rect::new(384.0, 0.0, 416.0, 480.0);

    fn logo(x: f32, y: f32, velocity_x: f32, velocity_y: f32) -> BouncingLogo {
        BouncingLogo::new(
            Vec2::new(x, y),
            Vec2::new(velocity_x, velocity_y),
            RGB8::new(0, 0, 255),
        )
    }

    #[test]
    fn moves_with_frame_rate_scale() {
        let mut logo = logo(400.0, 100.0, 3.0, 2.0);

        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);

        assert!((logo.position.x - 403.0).abs() < 1e-4);
        assert!((logo.position.y - 102.0).abs() < 1e-4);
        assert_eq!(logo.velocity, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn right_edge_flips_horizontal() {
        // Right edge ends at 801 after moving
        let mut logo = logo(670.0, 100.0, 3.0, 2.0);

        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);
        assert!(logo.velocity.x < 0.0);
        assert!(logo.velocity.y > 0.0);

        // Overlap is allowed for a single frame, the next one moves back
        let overlapping_x = logo.position.x;
        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);
        assert!(logo.position.x < overlapping_x);
        assert!(logo.velocity.x < 0.0);
    }

    #[test]
    fn left_boundary_is_play_area() {
        let mut logo = logo(385.0, 100.0, -3.0, 2.0);

        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);

        assert!(logo.velocity.x > 0.0);
        // Not clamped
        assert!((logo.position.x - 382.0).abs() < 1e-4);
    }

    #[test]
    fn corner_flips_both() {
        let mut logo = logo(671.0, 415.0, 3.0, 2.0);

        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);

        assert_eq!(logo.velocity, Vec2::new(-3.0, -2.0));
    }

    #[test]
    fn top_edge_flips_vertical() {
        let mut logo = logo(500.0, 1.0, 3.0, -2.0);

        logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);

        assert_eq!(logo.velocity, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn stays_near_bounds_for_many_ticks() {
        let mut logo = logo(500.0, 200.0, 2.7, -1.3);

        for _ in 0..10_000 {
            logo.advance(1.0 / 60.0, 60.0, SIZE, BOUNDS);

            // At most one tick of displacement outside of the area
            assert!(logo.position.x >= BOUNDS.x - 3.0);
            assert!(logo.position.x + SIZE.x <= BOUNDS.right() + 3.0);
            assert!(logo.position.y >= BOUNDS.y - 3.0);
            assert!(logo.position.y + SIZE.y <= BOUNDS.bottom() + 3.0);
        }
    }

    #[test]
    fn zero_elapsed_does_not_move() {
        let mut logo = logo(500.0, 200.0, 3.0, 2.0);

        logo.advance(0.0, 60.0, SIZE, BOUNDS);

        assert_eq!(logo.position, Vec2::new(500.0, 200.0));
        assert_eq!(logo.rect(SIZE), Rect::new(500.0, 200.0, 128.0, 64.0));
    }
}
