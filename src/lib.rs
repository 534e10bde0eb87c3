#![forbid(unsafe_code)]

//! DVD Quest, a tiny pixel game about a button you really shouldn't press.
//!
//! A logo bounces around the screen like an old DVD player screensaver.
//! Next to it sits a menu with a "Start Game" and an "Exit Game" link, and an animated button.
//! Every press of the button spawns another logo with a random direction, position and color.
//!
//! # Architecture
//!
//! The game itself ([`DvdQuest`]) knows nothing about windows or GPUs:
//!
//! - Input arrives as an [`InputState`] snapshot every tick.
//! - Drawing goes through the [`Canvas`] trait.
//! - Randomness is drawn from a [`RandomSource`].
//!
//! The [`window`] module opens a window, renders the canvas into a pixel buffer and shows it with `wgpu`.
//!
//! # Usage
//!
//! ```no_run
//! use dvd_quest::{assets::Assets, DvdQuest, FastRandom, GameConfig};
//!
//! # fn try_main() -> miette::Result<()> {
//! let config = GameConfig::default();
//! let assets = Assets::load(&config.asset_dir)?;
//!
//! let game = DvdQuest::new(&config, assets.button_sheet.width(), FastRandom::new());
//!
//! dvd_quest::window::run(game, &config, assets)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod canvas;
pub mod config;
pub mod game;
mod graphics;
pub mod gui;
pub mod input;
pub mod logo;
pub mod math;
pub mod random;
pub mod window;

pub use canvas::Canvas;
pub use config::GameConfig;
pub use game::DvdQuest;
pub use input::InputState;
pub use random::{FastRandom, RandomSource};

/// What the game loop should do after a tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Keep running.
    #[default]
    Continue,
    /// Stop the game loop and close the window.
    Exit,
}

impl Flow {
    /// Whether the game loop should stop.
    #[inline]
    #[must_use]
    pub const fn is_exit(self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Main entrypoint containing game state for running the game.
///
/// This is the main interface with the game loop in [`window::run`].
pub trait Game {
    /// A single update tick in the game loop.
    ///
    /// Must be used for updating the game state.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Seconds since the previous tick.
    /// * `input` - Pointer and keyboard state at the start of this tick.
    ///
    /// # Returns
    ///
    /// - [`Flow::Exit`] when the game wants to quit.
    fn update(&mut self, elapsed: f32, input: &InputState) -> Flow;

    /// Draw the current state.
    ///
    /// Must not mutate the game state, it's called after every update.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Target to issue the draw calls on, in back-to-front order.
    fn render(&self, canvas: &mut impl Canvas);
}
