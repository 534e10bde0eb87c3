//! Setting up a window for desktop platforms.

use miette::{Context, IntoDiagnostic, Result};
use winit::{event_loop::EventLoop, window::WindowBuilder};

use crate::{assets::Assets, Game, GameConfig};

/// Desktop implementation of opening a window.
pub(super) async fn window<G>(
    window_builder: WindowBuilder,
    game: G,
    config: &GameConfig,
    assets: Assets,
) -> Result<()>
where
    G: Game + 'static,
{
    let event_loop = EventLoop::new()
        .into_diagnostic()
        .wrap_err("Error setting up event loop for window")?;
    let window = window_builder
        .build(&event_loop)
        .into_diagnostic()
        .wrap_err("Error setting up window")?;

    log::info!(
        "Opened window '{}' for a {}x{} buffer",
        config.title,
        config.buffer_size.x,
        config.buffer_size.y
    );

    super::winit_start(event_loop, window, game, config, assets).await
}
