//! Split a horizontal sprite of equal size text segments into a font.

use std::path::Path;

use glam::{UVec2, Vec2};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;

use super::image::Image;
use crate::math::Rect;

/// Monospaced bitmap font.
///
/// The glyphs are stored next to each other in a single image, starting at [`FontMetadata::first_char`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Image with all glyphs next to each other.
    image: Image,
    /// Font metadata.
    metadata: FontMetadata,
}

impl Font {
    /// Split an image into glyphs described by the metadata.
    ///
    /// # Errors
    ///
    /// - When the glyph size is zero.
    /// - When the amount of glyphs in the image doesn't match the character range.
    pub fn new(image: Image, metadata: FontMetadata) -> Result<Self> {
        if metadata.glyph_size.x == 0 || metadata.glyph_size.y == 0 {
            miette::bail!("Font glyph size can't be zero");
        }

        let glyphs = image.width() / metadata.glyph_size.x;
        let expected = (metadata.last_char as u32).saturating_sub(metadata.first_char as u32) + 1;
        if metadata.last_char < metadata.first_char || glyphs != expected {
            miette::bail!(
                "Font not properly defined, characters '{}' to '{}' need {expected} glyphs but the image has {glyphs}",
                metadata.first_char,
                metadata.last_char
            );
        }

        Ok(Self { image, metadata })
    }

    /// Load a font from a PNG and a TOML metadata file with the same name.
    ///
    /// # Arguments
    ///
    /// * `path` - Path without extension, `font` will load `font.png` and `font.toml`.
    ///
    /// # Errors
    ///
    /// - When either file can't be read or parsed.
    /// - When the image doesn't match the metadata.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let image = Image::load(path.with_extension("png"))?;
        let metadata = FontMetadata::load(path.with_extension("toml"))?;

        Self::new(image, metadata)
            .wrap_err_with(|| format!("Invalid font '{}'", path.display()))
    }

    /// Image the glyphs are taken from.
    #[inline]
    #[must_use]
    pub const fn image(&self) -> &Image {
        &self.image
    }

    /// Size of a single glyph.
    #[inline]
    #[must_use]
    pub fn glyph_size(&self) -> Vec2 {
        self.metadata.glyph_size.as_vec2()
    }

    /// Part of the image showing a character.
    ///
    /// `None` for characters that are not in the image, such as whitespace.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<Rect> {
        if ch < self.metadata.first_char || ch > self.metadata.last_char {
            return None;
        }

        // The sub rectangle offset of the character is based on the starting character and counted using the ASCII index
        let char_offset = ch as u32 - self.metadata.first_char as u32;
        let glyph_size = self.glyph_size();

        Some(Rect::new(
            char_offset as f32 * glyph_size.x,
            0.0,
            glyph_size.x,
            glyph_size.y,
        ))
    }

    /// Position every visible glyph of a text.
    ///
    /// # Returns
    ///
    /// - Iterator of `(destination, source)` rectangles.
    pub fn layout<'a>(
        &'a self,
        text: &'a str,
        position: Vec2,
    ) -> impl Iterator<Item = (Rect, Rect)> + 'a {
        let glyph_size = self.glyph_size();

        Cursor::new(text, position, glyph_size).filter_map(move |(ch, cursor)| {
            self.glyph(ch)
                .map(|source| (Rect::from_position_size(cursor, glyph_size), source))
        })
    }

    /// Size of the text when drawn.
    ///
    /// The width is the widest line, the height is the amount of lines times the glyph height.
    #[must_use]
    pub fn measure(&self, text: &str) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let glyph_size = self.glyph_size();

        let (width, lines) = Cursor::new(text, Vec2::ZERO, glyph_size).fold(
            (0.0_f32, 1.0_f32),
            |(width, _), (_, cursor)| {
                (
                    width.max(cursor.x + glyph_size.x),
                    cursor.y / glyph_size.y + 1.0,
                )
            },
        );

        Vec2::new(width, lines * glyph_size.y)
    }
}

/// Walks over the characters of a text yielding the top-left position of each.
struct Cursor<'a> {
    /// Characters still to place.
    chars: std::str::Chars<'a>,
    /// Start of the current line.
    line_start: f32,
    /// Position of the next character.
    position: Vec2,
    /// Size of a single glyph.
    glyph_size: Vec2,
}

impl<'a> Cursor<'a> {
    /// Start at a position.
    fn new(text: &'a str, position: Vec2, glyph_size: Vec2) -> Self {
        Self {
            chars: text.chars(),
            line_start: position.x,
            position,
            glyph_size,
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = (char, Vec2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.chars.next()?;

            match ch {
                '\n' => {
                    self.position.x = self.line_start;
                    self.position.y += self.glyph_size.y;
                }
                '\t' => {
                    self.position.x += self.glyph_size.x * 4.0;
                }
                _ => {
                    let position = self.position;
                    self.position.x += self.glyph_size.x;

                    return Some((ch, position));
                }
            }
        }
    }
}

/// Font metadata to load from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontMetadata {
    /// Width and height of a single character.
    pub glyph_size: UVec2,
    /// First character in the image.
    #[serde(default = "FontMetadata::default_first_char")]
    pub first_char: char,
    /// Last character in the image.
    #[serde(default = "FontMetadata::default_last_char")]
    pub last_char: char,
}

impl FontMetadata {
    /// Load the metadata from a TOML file.
    ///
    /// # Errors
    ///
    /// - When the file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading font metadata '{}'", path.display()))?;

        toml::from_str(&source)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error parsing font metadata '{}'", path.display()))
    }

    /// Default for the `first_char` field.
    #[inline]
    const fn default_first_char() -> char {
        '!'
    }

    /// Default for the `last_char` field.
    #[inline]
    const fn default_last_char() -> char {
        '~'
    }
}
