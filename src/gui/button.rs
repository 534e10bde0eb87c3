//! Button playing a sprite sheet animation once when pressed.

use glam::Vec2;

use crate::{
    canvas::{Canvas, SpriteId, WHITE},
    math::Rect,
};

/// Button backed by a horizontal sprite sheet.
///
/// Frame zero is the idle image, pressing plays all other frames once and returns to idle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedButton {
    /// Top-left position in buffer pixels.
    position: Vec2,
    /// Size of a single frame in the sheet.
    frame_size: Vec2,
    /// Amount of frames in the sheet.
    total_frames: usize,
    /// Frame currently shown.
    current_frame: usize,
    /// Seconds the current frame has been shown.
    time_since_last_frame: f32,
    /// Seconds a single frame is shown.
    time_per_frame: f32,
    /// Whether the press animation is playing.
    is_pressed: bool,
}

impl AnimatedButton {
    /// Construct an idle button.
    ///
    /// # Arguments
    ///
    /// * `position` - Top-left position in buffer pixels.
    /// * `frame_size` - Size of a single frame in the sheet.
    /// * `total_frames` - Amount of frames in the sheet, a sheet without frames is treated as a single frame.
    /// * `time_per_frame` - Seconds a single frame is shown.
    #[must_use]
    pub fn new(position: Vec2, frame_size: Vec2, total_frames: usize, time_per_frame: f32) -> Self {
        Self {
            position,
            frame_size,
            total_frames: total_frames.max(1),
            current_frame: 0,
            time_since_last_frame: 0.0,
            time_per_frame,
            is_pressed: false,
        }
    }

    /// Construct an idle button, deriving the amount of frames from the width of the sheet.
    #[must_use]
    pub fn from_sheet_width(
        position: Vec2,
        frame_size: Vec2,
        sheet_width: u32,
        time_per_frame: f32,
    ) -> Self {
        let total_frames = if frame_size.x >= 1.0 {
            (sheet_width as f32 / frame_size.x) as usize
        } else {
            1
        };

        Self::new(position, frame_size, total_frames, time_per_frame)
    }

    /// Advance the press animation.
    ///
    /// Does nothing when idle.
    pub fn update(&mut self, elapsed: f32) {
        if !self.is_pressed {
            return;
        }

        self.time_since_last_frame += elapsed;
        if self.time_since_last_frame >= self.time_per_frame {
            self.current_frame += 1;
            // Overshoot is discarded
            self.time_since_last_frame = 0.0;

            if self.current_frame >= self.total_frames {
                self.current_frame = 0;
                self.is_pressed = false;
            }
        }
    }

    /// Start the press animation.
    ///
    /// Ignored while the animation is already playing.
    pub fn press(&mut self) {
        if self.is_pressed {
            return;
        }

        self.is_pressed = true;
        // A single frame sheet has nothing to play
        self.current_frame = 1 % self.total_frames;
        self.time_since_last_frame = 0.0;
    }

    /// Whether the first frame is shown.
    #[inline]
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.current_frame == 0
    }

    /// Frame currently shown.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.current_frame
    }

    /// Amount of frames in the sheet.
    #[inline]
    #[must_use]
    pub const fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Whether the press animation is playing.
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Seconds the current frame has been shown.
    #[inline]
    #[must_use]
    pub const fn time_since_last_frame(&self) -> f32 {
        self.time_since_last_frame
    }

    /// Clickable area on the screen.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.frame_size)
    }

    /// Part of the sprite sheet showing the current frame.
    #[inline]
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.current_frame as f32 * self.frame_size.x,
            0.0,
            self.frame_size.x,
            self.frame_size.y,
        )
    }

    /// Render the current frame.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.draw_sprite(
            SpriteId::ButtonSheet,
            self.bounds(),
            Some(self.source_rect()),
            WHITE,
        );
    }
}
