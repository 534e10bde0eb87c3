//! Game configuration.

use std::path::{Path, PathBuf};

use glam::Vec2;
use miette::{IntoDiagnostic, Result, WrapErr};
use rgb::RGB8;
use serde::Deserialize;

/// Initial game configuration passed to [`crate::window::run`] and [`crate::DvdQuest::new`].
///
/// Every field can be overwritten from a TOML file, missing fields keep their defaults.
///
/// There's two ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use dvd_quest::GameConfig;
/// GameConfig {
///   title: "My DVD Quest".to_owned(),
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use dvd_quest::GameConfig;
/// GameConfig::default().with_title("My DVD Quest");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Name in the title bar.
    ///
    /// Defaults to `"DVD Quest"`.
    pub title: String,
    /// Amount of pixels for the canvas, this is also the viewport the logos bounce in.
    ///
    /// Defaults to `(800.0, 480.0)`.
    pub buffer_size: Vec2,
    /// Factor applied to the buffer size for the requested window size.
    ///
    /// Defaults to `1.0`.
    pub scaling: f32,
    /// Color the canvas is cleared with every frame.
    ///
    /// Defaults to black.
    pub background_color: RGB8,
    /// Directory the images and the font are loaded from.
    ///
    /// Defaults to `"assets"`.
    pub asset_dir: PathBuf,
    /// Top-left corner of the menu strip.
    ///
    /// Defaults to `(0.0, 0.0)`.
    pub menu_position: Vec2,
    /// Size of the menu strip, the logos bounce right of it.
    ///
    /// Defaults to `(384.0, 480.0)`.
    pub menu_size: Vec2,
    /// Size a logo is drawn with and collides with.
    ///
    /// Defaults to `(128.0, 64.0)`.
    pub logo_size: Vec2,
    /// Speed of logos spawned by pressing the button.
    ///
    /// Defaults to `3.0`.
    pub logo_speed: f32,
    /// Velocity of the logo that's there from the start.
    ///
    /// Defaults to `(3.0, 2.0)`.
    pub initial_velocity: Vec2,
    /// Color of the logo that's there from the start.
    ///
    /// Defaults to blue.
    pub initial_color: RGB8,
    /// Velocities are expressed in pixels per frame at this frame rate.
    ///
    /// Defaults to `60.0`.
    pub frame_rate_scale: f32,
    /// Offset of the button from the bottom-right corner of the menu.
    ///
    /// Defaults to `(100.0, 90.0)`.
    pub button_offset: Vec2,
    /// Size of a single frame in the button sprite sheet.
    ///
    /// Defaults to `(80.0, 80.0)`.
    pub button_frame_size: Vec2,
    /// Seconds a single button animation frame is shown.
    ///
    /// Defaults to `0.1`.
    pub button_frame_time: f32,
    /// "Start Game" link.
    pub start_link: LinkConfig,
    /// "Exit Game" link.
    pub exit_link: LinkConfig,
    /// Color of a link when the pointer is not on it.
    ///
    /// Defaults to white.
    pub link_color: RGB8,
    /// Color of a link when the pointer is on it.
    ///
    /// Defaults to gray.
    pub link_hover_color: RGB8,
}

impl GameConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// - When the string is not valid TOML or contains unknown fields.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source)
            .into_diagnostic()
            .wrap_err("Error parsing game configuration")
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    /// - When the file is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading configuration file '{}'", path.display()))?;

        Self::from_toml_str(&source)
            .wrap_err_with(|| format!("Invalid configuration file '{}'", path.display()))
    }

    /// Set the name in the title bar.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the amount of pixels for the canvas.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: impl Into<Vec2>) -> Self {
        self.buffer_size = buffer_size.into();

        self
    }

    /// Set the factor applied to the buffer size for the requested window size.
    #[must_use]
    pub fn with_scaling(mut self, scaling: f32) -> Self {
        self.scaling = scaling;

        self
    }

    /// Set the directory the assets are loaded from.
    #[must_use]
    pub fn with_asset_dir(mut self, asset_dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = asset_dir.into();

        self
    }

    /// Set the size a logo is drawn with and collides with.
    #[must_use]
    pub fn with_logo_size(mut self, logo_size: impl Into<Vec2>) -> Self {
        self.logo_size = logo_size.into();

        self
    }

    /// Set the seconds a single button animation frame is shown.
    #[must_use]
    pub fn with_button_frame_time(mut self, button_frame_time: f32) -> Self {
        self.button_frame_time = button_frame_time;

        self
    }

    /// Top-left position of the button.
    #[inline]
    #[must_use]
    pub fn button_position(&self) -> Vec2 {
        self.menu_position + self.menu_size - self.button_offset
    }

    /// Horizontal start of the area the logos bounce in.
    #[inline]
    #[must_use]
    pub fn play_area_left(&self) -> f32 {
        self.menu_position.x + self.menu_size.x
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "DVD Quest".to_owned(),
            buffer_size: Vec2::new(800.0, 480.0),
            scaling: 1.0,
            background_color: RGB8::new(0, 0, 0),
            asset_dir: PathBuf::from("assets"),
            menu_position: Vec2::ZERO,
            menu_size: Vec2::new(384.0, 480.0),
            logo_size: Vec2::new(128.0, 64.0),
            logo_speed: 3.0,
            initial_velocity: Vec2::new(3.0, 2.0),
            initial_color: RGB8::new(0, 0, 255),
            frame_rate_scale: 60.0,
            button_offset: Vec2::new(100.0, 90.0),
            button_frame_size: Vec2::new(80.0, 80.0),
            button_frame_time: 0.1,
            start_link: LinkConfig {
                text: "Start Game".to_owned(),
                offset: Vec2::new(20.0, -240.0),
                hit_size: Vec2::new(155.0, 40.0),
            },
            exit_link: LinkConfig {
                text: "Exit Game [ESC]".to_owned(),
                offset: Vec2::new(20.0, -200.0),
                hit_size: Vec2::new(205.0, 40.0),
            },
            link_color: RGB8::new(255, 255, 255),
            link_hover_color: RGB8::new(128, 128, 128),
        }
    }
}

/// Placement of a clickable text link on the menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    /// Caption of the link.
    pub text: String,
    /// Offset from the bottom-left corner of the menu.
    pub offset: Vec2,
    /// Size of the clickable region starting at the caption position.
    pub hit_size: Vec2,
}

impl LinkConfig {
    /// Top-left position of the caption.
    #[inline]
    #[must_use]
    pub fn position(&self, config: &GameConfig) -> Vec2 {
        config.menu_position + Vec2::new(0.0, config.menu_size.y) + self.offset
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rgb::RGB8;

    use super::GameConfig;

    #[test]
    fn default_layout() {
        let config = GameConfig::default();

        assert_eq!(config.button_position(), Vec2::new(284.0, 390.0));
        assert_eq!(config.start_link.position(&config), Vec2::new(20.0, 240.0));
        assert_eq!(config.exit_link.position(&config), Vec2::new(20.0, 280.0));
        assert!((config.play_area_left() - 384.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            title = "Screensaver"
            buffer_size = [1024.0, 768.0]
            initial_color = { r = 255, g = 0, b = 0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Screensaver");
        assert_eq!(config.buffer_size, Vec2::new(1024.0, 768.0));
        assert_eq!(config.initial_color, RGB8::new(255, 0, 0));
        assert_eq!(config.logo_size, GameConfig::default().logo_size);
        assert_eq!(config.exit_link, GameConfig::default().exit_link);
    }

    #[test]
    fn link_override() {
        let config = GameConfig::from_toml_str(
            r#"
            [start_link]
            text = "Play"
            offset = [10.0, -100.0]
            hit_size = [60.0, 20.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.start_link.text, "Play");
        assert_eq!(config.start_link.position(&config), Vec2::new(10.0, 380.0));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(GameConfig::from_toml_str("speed_of_light = 1.0").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GameConfig::load("this/file/does/not/exist.toml").is_err());
    }

    #[test]
    fn builder() {
        let config = GameConfig::default()
            .with_title("Test")
            .with_scaling(2.0)
            .with_buffer_size(Vec2::new(640.0, 360.0))
            .with_asset_dir("other")
            .with_logo_size(Vec2::new(64.0, 32.0))
            .with_button_frame_time(0.5);

        assert_eq!(config.title, "Test");
        assert!((config.scaling - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.buffer_size, Vec2::new(640.0, 360.0));
        assert_eq!(config.asset_dir.to_str(), Some("other"));
        assert_eq!(config.logo_size, Vec2::new(64.0, 32.0));
        assert!((config.button_frame_time - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn play_area_starts_after_moved_menu() {
        let config = GameConfig::from_toml_str("menu_position = [100.0, 0.0]").unwrap();

        assert!((config.play_area_left() - 484.0).abs() < f32::EPSILON);
        assert_eq!(config.button_position(), Vec2::new(384.0, 390.0));
    }
}
