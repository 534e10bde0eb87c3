//! Clickable text on the menu.

use glam::Vec2;
use rgb::RGB8;

use crate::{canvas::Canvas, math::Rect};

/// Text caption that changes color when hovered and can be clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLink {
    /// The text to draw.
    text: String,
    /// Top-left position of the text.
    position: Vec2,
    /// Clickable area.
    bounds: Rect,
    /// Color when the pointer is not on the link.
    default_color: RGB8,
    /// Color when the pointer is on the link.
    hover_color: RGB8,
    /// Whether the pointer was on the link during the last update.
    hovered: bool,
}

impl MenuLink {
    /// Construct a link that's not hovered.
    ///
    /// # Arguments
    ///
    /// * `text` - Caption of the link.
    /// * `position` - Top-left position of the caption, also the top-left of the clickable area.
    /// * `hit_size` - Size of the clickable area.
    /// * `default_color` - Color when the pointer is not on the link.
    /// * `hover_color` - Color when the pointer is on the link.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: Vec2,
        hit_size: Vec2,
        default_color: RGB8,
        hover_color: RGB8,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            bounds: Rect::from_position_size(position, hit_size),
            default_color,
            hover_color,
            hovered: false,
        }
    }

    /// Update the hover color from the pointer.
    ///
    /// # Returns
    ///
    /// - `true` when the pointer button went down this tick while on the link.
    pub fn update(&mut self, pointer: Vec2, pointer_pressed: bool) -> bool {
        self.hovered = self.bounds.contains(pointer);

        self.hovered && pointer_pressed
    }

    /// Whether the link is drawn with the hover color.
    #[inline]
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Color the text is drawn with.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> RGB8 {
        if self.hovered {
            self.hover_color
        } else {
            self.default_color
        }
    }

    /// Caption of the link.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Clickable area.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Render the caption.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.draw_text(&self.text, self.position, self.color());
    }
}
