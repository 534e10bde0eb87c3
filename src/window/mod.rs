//! Spawn a winit window and run the game loop.

mod desktop;

use std::sync::Arc;

use glam::{UVec2, Vec2};
use miette::{IntoDiagnostic, Result, WrapErr};
use web_time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::{assets::Assets, graphics::state::MainRenderState, Game, GameConfig, InputState};

/// Longest time a single tick is allowed to span in seconds.
///
/// Prevents the logos from jumping through the walls after the window has been stalled, for example when it's dragged.
const MAX_FRAME_TIME: f32 = 0.25;

/// Open a window and run the game until it exits.
///
/// Every redraw runs a single [`Game::update`] with the time since the previous one, followed by a [`Game::render`].
///
/// # Arguments
///
/// * `game` - Game state, updated and rendered every frame.
/// * `config` - Title, buffer size and scaling of the window.
/// * `assets` - Images and font the canvas draws with.
///
/// # Errors
///
/// - When a window could not be opened.
/// - If no GPU could be found or accessed.
pub fn run<G>(game: G, config: &GameConfig, assets: Assets) -> Result<()>
where
    G: Game + 'static,
{
    // Describe the window, it will be built when the event loop exists
    let window_builder = WindowBuilder::new()
        .with_title(config.title.clone())
        // Apply scaling for the requested size
        .with_inner_size(LogicalSize::new(
            config.buffer_size.x * config.scaling,
            config.buffer_size.y * config.scaling,
        ));

    // Enable environment logger, ignore it when it's already set by the binary
    let _ = env_logger::try_init();

    pollster::block_on(async { desktop::window(window_builder, game, config, assets).await })
}

/// Open a winit window with an event loop.
async fn winit_start<G>(
    event_loop: EventLoop<()>,
    window: Window,
    mut game: G,
    config: &GameConfig,
    assets: Assets,
) -> Result<()>
where
    G: Game + 'static,
{
    // Wrap the window in an atomic reference counter so it can be shared in multiple places
    let window = Arc::new(window);

    let screen_size = {
        let size = window.inner_size();

        UVec2::new(size.width, size.height)
    };

    // Create a surface on the window and setup the render state to it
    let mut render_state = MainRenderState::new(
        config.buffer_size.as_uvec2(),
        screen_size,
        config.background_color,
        Arc::clone(&window),
    )
    .await
    .wrap_err("Error setting up the rendering pipeline")?;

    let mut input = InputState::default();
    let mut last_time = Instant::now();

    log::debug!("Opening window with game loop");

    // Set the event loop to polling so we don't have to wait for new events to draw new frames
    event_loop.set_control_flow(ControlFlow::Poll);

    // Start the window and game loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                // Exit when the window is destroyed or closed
                WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                    log::info!("Window closed");

                    elwt.exit();
                }
                // Resize render surface if window is resized
                WindowEvent::Resized(new_size) => {
                    render_state.resize(UVec2::new(new_size.width, new_size.height));

                    // On MacOS the window needs to be redrawn manually after resizing
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    let current_time = Instant::now();
                    let elapsed = (current_time - last_time)
                        .as_secs_f32()
                        .min(MAX_FRAME_TIME);
                    last_time = current_time;

                    if game.update(elapsed, &input).is_exit() {
                        elwt.exit();
                        return;
                    }

                    if let Err(err) = render_state.render(&game, &assets) {
                        // A lost frame is not fatal, the next one will try again
                        log::warn!("Skipping frame: {err:?}");
                    }
                }
                event => {
                    input.handle_event(&event, |coordinate: Vec2| {
                        render_state.map_coordinate(coordinate)
                    });
                }
            },
            // Keep drawing as fast as the surface allows
            Event::AboutToWait => window.request_redraw(),
            _ => (),
        })
        .into_diagnostic()
        .wrap_err("Error running game loop")?;

    Ok(())
}
