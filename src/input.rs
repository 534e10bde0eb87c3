//! Handle different input events.

use glam::Vec2;
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Key that closes the game while held.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// Pointer position used when the cursor is not above the window, outside of every widget.
pub const POINTER_OUTSIDE: Vec2 = Vec2::splat(-1.0);

/// Any button state.
///
/// Tracks the state of the current tick and the previous tick so presses can be detected on the transition instead of while holding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the button is being held down this update tick.
    is_down: bool,
    /// Whether the button was being held down the previous update tick.
    was_down_previous_tick: bool,
}

impl ButtonState {
    /// Handle the state if the button is currently pressed.
    #[inline]
    pub fn handle_event(&mut self, pressed: bool) {
        self.is_down = pressed;
    }

    /// Remember the current state for the next tick.
    ///
    /// Must be called exactly once at the end of every update tick.
    #[inline]
    pub fn update(&mut self) {
        self.was_down_previous_tick = self.is_down;
    }

    /// Whether the button goes from released to pressed.
    #[inline]
    #[must_use]
    pub const fn pressed(&self) -> bool {
        !self.was_down_previous_tick && self.is_down
    }
}

/// Snapshot of all input the game reads during a single tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Pointer position in buffer pixels.
    pub pointer: Vec2,
    /// Whether the primary pointer button is held down.
    pub pointer_down: bool,
    /// Whether the quit key is held down.
    pub quit_down: bool,
}

impl InputState {
    /// Snapshot with the pointer at a position and the button in a state.
    #[inline]
    #[must_use]
    pub const fn pointer(position: Vec2, pointer_down: bool) -> Self {
        Self {
            pointer: position,
            pointer_down,
            quit_down: false,
        }
    }

    /// Move the pointer outside of the buffer, nothing is hovered afterwards.
    #[inline]
    pub fn pointer_left(&mut self) {
        self.pointer = POINTER_OUTSIDE;
    }

    /// Handle a winit window event.
    ///
    /// # Arguments
    ///
    /// * `event` - Event received by the window.
    /// * `map_coordinate` - Converts a physical window coordinate to a buffer coordinate.
    ///
    /// # Returns
    ///
    /// - `true` when the event changed the input state.
    pub fn handle_event(
        &mut self,
        event: &WindowEvent,
        map_coordinate: impl Fn(Vec2) -> Vec2,
    ) -> bool {
        match event {
            // Handle keyboard buttons
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(QUIT_KEY) {
                    self.quit_down = event.state == ElementState::Pressed;

                    true
                } else {
                    false
                }
            }
            // Handle mouse cursor position
            WindowEvent::CursorMoved { position, .. } => {
                // Map the coordinates to the buffer
                self.pointer = map_coordinate(Vec2::new(position.x as f32, position.y as f32));

                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_left();

                true
            }
            // Handle the primary mouse button
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer_down = *state == ElementState::Pressed;

                true
            }
            _ => false,
        }
    }
}
