//! Images and the font the game draws with.
//!
//! All assets are loaded once at startup from a single directory:
//!
//! | File | Contents |
//! | --- | --- |
//! | `menu.png` | Backdrop of the menu strip. |
//! | `logo.png` | Logo, drawn stretched to the logo size and tinted. |
//! | `button.png` | Horizontal sprite sheet of the button animation. |
//! | `font.png` + `font.toml` | Bitmap font, see [`font::FontMetadata`]. |

pub mod font;
pub mod image;

use std::path::Path;

use miette::{Result, WrapErr};

use self::{font::Font, image::Image};
use crate::canvas::SpriteId;

/// All loaded assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    /// Backdrop of the menu strip.
    pub menu: Image,
    /// Logo image.
    pub logo: Image,
    /// Button animation frames next to each other.
    pub button_sheet: Image,
    /// Font for all captions.
    pub font: Font,
}

impl Assets {
    /// Load every asset from a directory.
    ///
    /// # Errors
    ///
    /// - When any of the files is missing or invalid.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        log::info!("Loading assets from '{}'", dir.display());

        let load = || -> Result<Self> {
            Ok(Self {
                menu: Image::load(dir.join("menu.png"))?,
                logo: Image::load(dir.join("logo.png"))?,
                button_sheet: Image::load(dir.join("button.png"))?,
                font: Font::load(dir.join("font"))?,
            })
        };

        load().wrap_err_with(|| format!("Error loading assets from '{}'", dir.display()))
    }

    /// Image belonging to a sprite.
    #[inline]
    #[must_use]
    pub const fn image(&self, sprite: SpriteId) -> &Image {
        match sprite {
            SpriteId::Menu => &self.menu,
            SpriteId::Logo => &self.logo,
            SpriteId::ButtonSheet => &self.button_sheet,
        }
    }
}
