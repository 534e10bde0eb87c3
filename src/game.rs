//! The DVD Quest game state and its per-frame update.

use std::f32::consts::TAU;

use glam::Vec2;
use rgb::RGB8;

use crate::{
    canvas::{Canvas, SpriteId, RED, WHITE},
    config::{GameConfig, LinkConfig},
    gui::{AnimatedButton, MenuLink},
    input::{ButtonState, InputState},
    logo::BouncingLogo,
    math::Rect,
    random::{FastRandom, RandomSource},
    Flow, Game,
};

/// Caption before the button has ever been pressed, drawn as colored segments next to each other.
const TAUNT: [(&str, RGB8); 3] = [("Do ", WHITE), ("NOT", RED), (" Press...", WHITE)];
/// First caption line after the button has been pressed.
const SCOLDING_FIRST_LINE: &str = "Oh great... See?!";
/// Second caption line after the button has been pressed.
const SCOLDING_SECOND_LINE: &str = "Look what you did!";
/// Horizontal offset of the captions from the left of the menu.
const CAPTION_LEFT: f32 = 20.0;
/// Offset of the bottom caption line from the bottom of the menu.
const CAPTION_BOTTOM_LINE: f32 = 64.0;
/// Offset of the top caption line from the bottom of the menu.
const CAPTION_TOP_LINE: f32 = 100.0;

/// Complete game state.
///
/// Everything that changes during a session lives here and is only mutated by [`Game::update`].
#[derive(Debug)]
pub struct DvdQuest<R = FastRandom> {
    /// Size of the viewport the logos bounce in.
    viewport: Vec2,
    /// Area the logos bounce in.
    play_area: Rect,
    /// Area of the menu backdrop.
    menu: Rect,
    /// Canvas clear color.
    background_color: RGB8,
    /// Size of every logo.
    logo_size: Vec2,
    /// Speed of newly spawned logos.
    logo_speed: f32,
    /// Frame rate the velocities are expressed in.
    frame_rate_scale: f32,
    /// All logos, only ever grows.
    logos: Vec<BouncingLogo>,
    /// The button you should not press.
    button: AnimatedButton,
    /// "Start Game" link.
    start_link: MenuLink,
    /// "Exit Game" link.
    exit_link: MenuLink,
    /// Whether the button has been pressed at least once, never reverts.
    ever_pressed: bool,
    /// Primary pointer button, remembers the previous tick for edge detection.
    pointer_button: ButtonState,
    /// Source for spawn positions, velocities and colors.
    random: R,
}

impl<R: RandomSource> DvdQuest<R> {
    /// Setup the game with a single logo.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout and tuning of the game.
    /// * `button_sheet_width` - Width of the button sprite sheet in pixels, determines the amount of animation frames.
    /// * `random` - Source for every random value in the game.
    pub fn new(config: &GameConfig, button_sheet_width: u32, mut random: R) -> Self {
        let viewport = config.buffer_size;
        let play_area = Rect::new(
            config.play_area_left(),
            0.0,
            viewport.x - config.play_area_left(),
            viewport.y,
        );
        let menu = Rect::from_position_size(config.menu_position, config.menu_size);

        let button = AnimatedButton::from_sheet_width(
            config.button_position(),
            config.button_frame_size,
            button_sheet_width,
            config.button_frame_time,
        );

        let link = |link: &LinkConfig| {
            MenuLink::new(
                link.text.clone(),
                link.position(config),
                link.hit_size,
                config.link_color,
                config.link_hover_color,
            )
        };
        let start_link = link(&config.start_link);
        let exit_link = link(&config.exit_link);

        // The first logo gets a random position but a fixed velocity and color
        let position = spawn_position(&mut random, play_area, config.logo_size);
        let logos = vec![BouncingLogo::new(
            position,
            config.initial_velocity,
            config.initial_color,
        )];

        log::debug!(
            "Game setup with a {}x{} viewport and {} button frames",
            viewport.x,
            viewport.y,
            button.total_frames()
        );

        Self {
            viewport,
            play_area,
            menu,
            background_color: config.background_color,
            logo_size: config.logo_size,
            logo_speed: config.logo_speed,
            frame_rate_scale: config.frame_rate_scale,
            logos,
            button,
            start_link,
            exit_link,
            ever_pressed: false,
            pointer_button: ButtonState::default(),
            random,
        }
    }

    /// All logos in the order they were spawned.
    #[inline]
    #[must_use]
    pub fn logos(&self) -> &[BouncingLogo] {
        &self.logos
    }

    /// The animated button.
    #[inline]
    #[must_use]
    pub const fn button(&self) -> &AnimatedButton {
        &self.button
    }

    /// The "Start Game" link.
    #[inline]
    #[must_use]
    pub const fn start_link(&self) -> &MenuLink {
        &self.start_link
    }

    /// The "Exit Game" link.
    #[inline]
    #[must_use]
    pub const fn exit_link(&self) -> &MenuLink {
        &self.exit_link
    }

    /// Whether the button has been pressed at least once this session.
    #[inline]
    #[must_use]
    pub const fn ever_pressed(&self) -> bool {
        self.ever_pressed
    }

    /// Size of the viewport the logos bounce in.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Area the logos bounce in.
    #[inline]
    #[must_use]
    pub const fn play_area(&self) -> Rect {
        self.play_area
    }

    /// Press the button and spawn a new random logo.
    fn press_button(&mut self) {
        self.button.press();
        self.ever_pressed = true;

        // Random direction with a fixed speed
        let angle = self.random.unit() * TAU;
        let velocity = Vec2::new(angle.cos(), angle.sin()) * self.logo_speed;

        let position = spawn_position(&mut self.random, self.play_area, self.logo_size);

        let color = RGB8::new(
            self.random.byte(),
            self.random.byte(),
            self.random.byte(),
        );

        log::debug!(
            "Spawning logo #{} at ({}, {}) with color {color:?}",
            self.logos.len() + 1,
            position.x,
            position.y
        );

        self.logos.push(BouncingLogo::new(position, velocity, color));
    }

    /// Draw the caption underneath the links.
    fn render_caption(&self, canvas: &mut impl Canvas) {
        let left = self.menu.x + CAPTION_LEFT;
        let bottom = self.menu.bottom();

        if self.ever_pressed {
            canvas.draw_text(
                SCOLDING_FIRST_LINE,
                Vec2::new(left, bottom - CAPTION_TOP_LINE),
                WHITE,
            );
            canvas.draw_text(
                SCOLDING_SECOND_LINE,
                Vec2::new(left, bottom - CAPTION_BOTTOM_LINE),
                WHITE,
            );
        } else {
            // Every segment starts where the previous one ends
            let mut position = Vec2::new(left, bottom - CAPTION_BOTTOM_LINE);
            for (text, color) in TAUNT {
                canvas.draw_text(text, position, color);
                position.x += canvas.measure_text(text).x;
            }
        }
    }
}

impl<R: RandomSource> Game for DvdQuest<R> {
    fn update(&mut self, elapsed: f32, input: &InputState) -> Flow {
        let mut flow = Flow::Continue;

        self.button.update(elapsed);

        self.pointer_button.handle_event(input.pointer_down);
        let pointer_pressed = self.pointer_button.pressed();

        // The button can only be clicked when it's not animating
        if self.button.is_idle() && pointer_pressed && self.button.bounds().contains(input.pointer)
        {
            self.press_button();
        }

        if self.start_link.update(input.pointer, pointer_pressed) {
            // Nothing to start yet
            log::debug!("Start game selected");
        }

        if self.exit_link.update(input.pointer, pointer_pressed) {
            log::info!("Exit selected from the menu");

            flow = Flow::Exit;
        }

        if input.quit_down {
            log::info!("Quit key pressed");

            flow = Flow::Exit;
        }

        // Remember the pointer state for the next tick
        self.pointer_button.update();

        for logo in &mut self.logos {
            logo.advance(
                elapsed,
                self.frame_rate_scale,
                self.logo_size,
                self.play_area,
            );
        }

        flow
    }

    fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear(self.background_color);

        for logo in &self.logos {
            canvas.draw_sprite(SpriteId::Logo, logo.rect(self.logo_size), None, logo.color);
        }

        canvas.draw_sprite(SpriteId::Menu, self.menu, None, WHITE);

        self.button.render(canvas);

        self.render_caption(canvas);

        self.start_link.render(canvas);
        self.exit_link.render(canvas);
    }
}

/// Random whole-pixel position where a logo fits completely inside the play area.
fn spawn_position(random: &mut impl RandomSource, play_area: Rect, logo_size: Vec2) -> Vec2 {
    let x = random.range(play_area.x as i32..(play_area.right() - logo_size.x) as i32);
    let y = random.range(play_area.y as i32..(play_area.bottom() - logo_size.y) as i32);

    Vec2::new(x as f32, y as f32)
}
