//! Run the game headless with a canvas that records draw calls and a scripted random source.

use std::{collections::VecDeque, ops::Range};

use dvd_quest::{
    canvas::{SpriteId, RED, WHITE},
    math::Rect,
    Canvas, DvdQuest, Flow, Game, GameConfig, InputState, RandomSource,
};
use glam::Vec2;
use rgb::RGB8;

/// Width of every glyph of the recording canvas.
const GLYPH_WIDTH: f32 = 8.0;
/// Single tick at 60 frames per second.
const TICK: f32 = 1.0 / 60.0;
/// Button sheet with four frames of the default size.
const SHEET_WIDTH: u32 = 320;

/// Draw call issued by the game.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear(RGB8),
    Sprite {
        sprite: SpriteId,
        destination: Rect,
        source: Option<Rect>,
        tint: RGB8,
    },
    Text {
        text: String,
        position: Vec2,
        color: RGB8,
    },
}

/// Canvas remembering everything drawn on it.
#[derive(Debug, Default)]
struct RecordingCanvas {
    calls: Vec<Call>,
}

impl RecordingCanvas {
    /// All text draw calls.
    fn texts(&self) -> Vec<(&str, Vec2, RGB8)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text {
                    text,
                    position,
                    color,
                } => Some((text.as_str(), *position, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: RGB8) {
        self.calls.push(Call::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteId, destination: Rect, source: Option<Rect>, tint: RGB8) {
        self.calls.push(Call::Sprite {
            sprite,
            destination,
            source,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: RGB8) {
        self.calls.push(Call::Text {
            text: text.to_owned(),
            position,
            color,
        });
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        Vec2::new(text.len() as f32 * GLYPH_WIDTH, GLYPH_WIDTH)
    }
}

/// Random source returning predetermined values.
#[derive(Debug, Default)]
struct Scripted {
    units: VecDeque<f32>,
    ranges: VecDeque<i32>,
    bytes: VecDeque<u8>,
}

impl Scripted {
    /// Queue the values for spawning a single logo.
    fn spawn(mut self, angle: f32, position: (i32, i32), color: (u8, u8, u8)) -> Self {
        self.units.push_back(angle);
        self.position(position)
            .bytes([color.0, color.1, color.2])
    }

    /// Queue a position without the rest.
    fn position(mut self, position: (i32, i32)) -> Self {
        self.ranges.push_back(position.0);
        self.ranges.push_back(position.1);

        self
    }

    fn bytes(mut self, bytes: [u8; 3]) -> Self {
        self.bytes.extend(bytes);

        self
    }
}

impl RandomSource for Scripted {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or_default()
    }

    fn range(&mut self, range: Range<i32>) -> i32 {
        let value = self.ranges.pop_front().unwrap_or(range.start);
        assert!(range.contains(&value), "{value} not in {range:?}");

        value
    }

    fn byte(&mut self) -> u8 {
        self.bytes.pop_front().unwrap_or_default()
    }
}

/// Somewhere inside the default button.
const ON_BUTTON: Vec2 = Vec2::new(300.0, 400.0);
/// Somewhere inside the default "Start Game" link.
const ON_START: Vec2 = Vec2::new(30.0, 250.0);
/// Somewhere inside the default "Exit Game" link.
const ON_EXIT: Vec2 = Vec2::new(30.0, 290.0);
/// Somewhere in the play area.
const IN_PLAY_AREA: Vec2 = Vec2::new(600.0, 50.0);

fn game(random: Scripted) -> DvdQuest<Scripted> {
    DvdQuest::new(&GameConfig::default(), SHEET_WIDTH, random)
}

fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        actual.abs_diff_eq(expected, 1e-4),
        "{actual} is not near {expected}"
    );
}

fn render(game: &impl Game) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::default();
    game.render(&mut canvas);

    canvas
}

#[test]
fn first_logo_moves_at_initial_velocity() {
    let mut game = game(Scripted::default().position((400, 100)));

    let logo = game.logos()[0];
    assert_eq!(logo.position, Vec2::new(400.0, 100.0));
    assert_eq!(logo.velocity, Vec2::new(3.0, 2.0));
    assert_eq!(logo.color, RGB8::new(0, 0, 255));

    let flow = game.update(TICK, &InputState::pointer(IN_PLAY_AREA, false));
    assert_eq!(flow, Flow::Continue);

    assert_near(game.logos()[0].position, Vec2::new(403.0, 102.0));
}

#[test]
fn first_logo_spawns_inside_play_area() {
    // No scripted values, the range start is used
    let game = game(Scripted::default());

    assert_eq!(game.play_area(), Rect::new(384.0, 0.0, 416.0, 480.0));
    assert_eq!(game.logos()[0].position, Vec2::new(384.0, 0.0));
}

#[test]
fn play_area_starts_after_moved_menu() {
    let config = GameConfig {
        menu_position: Vec2::new(100.0, 0.0),
        ..GameConfig::default()
    };
    let game = DvdQuest::new(&config, SHEET_WIDTH, Scripted::default());

    assert_eq!(game.play_area(), Rect::new(484.0, 0.0, 316.0, 480.0));
    assert_eq!(game.logos()[0].position, Vec2::new(484.0, 0.0));
}

#[test]
fn press_spawns_scripted_logo() {
    let mut game = game(
        Scripted::default()
            .position((400, 100))
            .spawn(0.25, (500, 200), (10, 20, 30)),
    );
    assert!(!game.ever_pressed());

    // No time passes so the spawned logo stays where it was placed
    let _ = game.update(0.0, &InputState::pointer(ON_BUTTON, true));

    assert!(game.ever_pressed());
    assert_eq!(game.logos().len(), 2);

    let spawned = game.logos()[1];
    assert_near(spawned.velocity, Vec2::new(0.0, 3.0));
    assert_eq!(spawned.position, Vec2::new(500.0, 200.0));
    assert_eq!(spawned.color, RGB8::new(10, 20, 30));

    // The animation started
    assert!(!game.button().is_idle());
    assert_eq!(game.button().frame(), 1);
}

#[test]
fn holding_the_pointer_presses_once() {
    let mut game = game(
        Scripted::default()
            .position((400, 100))
            .spawn(0.0, (500, 200), (1, 2, 3))
            .spawn(0.5, (450, 300), (4, 5, 6)),
    );

    // Hold long enough for the animation to finish many times over
    for _ in 0..120 {
        let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, true));
    }
    assert_eq!(game.logos().len(), 2);
    assert!(game.button().is_idle());

    // Release and press again
    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, false));
    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, true));
    assert_eq!(game.logos().len(), 3);
    assert_eq!(game.logos()[2].color, RGB8::new(4, 5, 6));
}

#[test]
fn button_ignores_clicks_while_animating() {
    let mut game = game(
        Scripted::default()
            .position((400, 100))
            .spawn(0.0, (500, 200), (1, 2, 3))
            .spawn(0.0, (500, 200), (1, 2, 3)),
    );

    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, true));
    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, false));
    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, true));

    assert!(!game.button().is_idle());
    assert_eq!(game.logos().len(), 2);
}

#[test]
fn click_outside_button_does_nothing() {
    let mut game = game(Scripted::default().position((400, 100)));

    let _ = game.update(TICK, &InputState::pointer(IN_PLAY_AREA, true));

    assert!(!game.ever_pressed());
    assert_eq!(game.logos().len(), 1);
    assert!(game.button().is_idle());
}

#[test]
fn logos_only_accumulate() {
    let mut script = Scripted::default().position((400, 100));
    for index in 0..5 {
        script = script.spawn(index as f32 / 5.0, (400 + index * 10, 100), (index as u8, 0, 0));
    }
    let mut game = game(script);

    let mut previous = game.logos().len();
    for tick in 0..600 {
        // Click every 30 ticks, the animation takes 18
        let down = tick % 30 == 0;
        let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, down));

        assert!(game.logos().len() >= previous);
        previous = game.logos().len();
    }

    // All scripted spawns and more
    assert_eq!(game.logos().len(), 21);
    assert!(game.ever_pressed());
}

#[test]
fn caption_changes_after_first_press() {
    let mut game = game(
        Scripted::default()
            .position((400, 100))
            .spawn(0.0, (500, 200), (1, 2, 3)),
    );

    let canvas = render(&game);
    let texts = canvas.texts();
    assert_eq!(
        &texts[..3],
        &[
            ("Do ", Vec2::new(20.0, 416.0), WHITE),
            ("NOT", Vec2::new(44.0, 416.0), RED),
            (" Press...", Vec2::new(68.0, 416.0), WHITE),
        ]
    );

    let _ = game.update(TICK, &InputState::pointer(ON_BUTTON, true));

    // The caption never reverts, even long after the animation finished
    for _ in 0..100 {
        let _ = game.update(TICK, &InputState::pointer(IN_PLAY_AREA, false));
    }

    let canvas = render(&game);
    let texts = canvas.texts();
    assert_eq!(
        &texts[..2],
        &[
            ("Oh great... See?!", Vec2::new(20.0, 380.0), WHITE),
            ("Look what you did!", Vec2::new(20.0, 416.0), WHITE),
        ]
    );
    assert!(!texts.iter().any(|(text, ..)| *text == "NOT"));
}

#[test]
fn render_order() {
    let game = game(Scripted::default().position((400, 100)));

    let canvas = render(&game);

    assert_eq!(canvas.calls[0], Call::Clear(RGB8::new(0, 0, 0)));
    assert_eq!(
        canvas.calls[1],
        Call::Sprite {
            sprite: SpriteId::Logo,
            destination: Rect::new(400.0, 100.0, 128.0, 64.0),
            source: None,
            tint: RGB8::new(0, 0, 255),
        }
    );
    assert_eq!(
        canvas.calls[2],
        Call::Sprite {
            sprite: SpriteId::Menu,
            destination: Rect::new(0.0, 0.0, 384.0, 480.0),
            source: None,
            tint: WHITE,
        }
    );
    assert_eq!(
        canvas.calls[3],
        Call::Sprite {
            sprite: SpriteId::ButtonSheet,
            destination: Rect::new(284.0, 390.0, 80.0, 80.0),
            source: Some(Rect::new(0.0, 0.0, 80.0, 80.0)),
            tint: WHITE,
        }
    );

    // Three caption segments, then the links
    let texts = canvas.texts();
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[3], ("Start Game", Vec2::new(20.0, 240.0), WHITE));
    assert_eq!(texts[4], ("Exit Game [ESC]", Vec2::new(20.0, 280.0), WHITE));
}

#[test]
fn links_highlight_on_hover() {
    let gray = RGB8::new(128, 128, 128);
    let mut game = game(Scripted::default().position((400, 100)));

    let _ = game.update(TICK, &InputState::pointer(ON_START, false));
    assert!(game.start_link().is_hovered());
    assert!(!game.exit_link().is_hovered());

    let canvas = render(&game);
    let texts = canvas.texts();
    assert_eq!(texts[3], ("Start Game", Vec2::new(20.0, 240.0), gray));
    assert_eq!(texts[4], ("Exit Game [ESC]", Vec2::new(20.0, 280.0), WHITE));

    let _ = game.update(TICK, &InputState::pointer(ON_EXIT, false));
    assert!(!game.start_link().is_hovered());
    assert!(game.exit_link().is_hovered());

    let _ = game.update(TICK, &InputState::pointer(IN_PLAY_AREA, false));
    assert!(!game.start_link().is_hovered());
    assert!(!game.exit_link().is_hovered());
}

#[test]
fn pointer_leaving_window_clears_hover() {
    let mut game = game(Scripted::default().position((400, 100)));

    let mut input = InputState::pointer(ON_EXIT, false);
    let _ = game.update(TICK, &input);
    assert!(game.exit_link().is_hovered());

    input.pointer_left();
    let _ = game.update(TICK, &input);
    assert!(!game.exit_link().is_hovered());

    // Pressing outside of the window doesn't click the link
    input.pointer_down = true;
    assert_eq!(game.update(TICK, &input), Flow::Continue);
}

#[test]
fn start_link_keeps_running() {
    let mut game = game(Scripted::default().position((400, 100)));

    let flow = game.update(TICK, &InputState::pointer(ON_START, true));

    assert_eq!(flow, Flow::Continue);
}

#[test]
fn exit_link_exits() {
    let mut game = game(Scripted::default().position((400, 100)));

    // Hovering alone is not enough
    let flow = game.update(TICK, &InputState::pointer(ON_EXIT, false));
    assert_eq!(flow, Flow::Continue);

    let flow = game.update(TICK, &InputState::pointer(ON_EXIT, true));
    assert_eq!(flow, Flow::Exit);
}

#[test]
fn quit_key_exits() {
    let mut game = game(Scripted::default().position((400, 100)));

    let input = InputState {
        quit_down: true,
        ..InputState::pointer(IN_PLAY_AREA, false)
    };

    assert_eq!(game.update(TICK, &input), Flow::Exit);
}
