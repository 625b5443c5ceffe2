use crate::screens::{ButtonName, ScreenMode};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Mouse id SDL2 reports for mouse events synthesised from touches
const TOUCH_MOUSE_ID: u32 = u32::MAX;

/// Actions the player can perform
///
/// Decouples raw SDL2 input from what the session does with it. Pointer
/// coordinates are in logical (layout) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Pointer (mouse or touch) ===
    PointerDown(i32, i32),
    PointerUp(i32, i32),
    PointerMove(i32, i32),

    // === Round ===
    Flap,
    EndRound,

    // === Buttons ===
    /// Keyboard stand-in for clicking a named button
    Shortcut(ButtonName),

    // === System ===
    Quit,
}

/// Input context determines which keys mean something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Nothing attached yet
    Loading,
    MainMenu,
    Playing,
    GameOver,
}

impl From<Option<ScreenMode>> for InputContext {
    fn from(mode: Option<ScreenMode>) -> Self {
        match mode {
            None => InputContext::Loading,
            Some(ScreenMode::MainMenu) => InputContext::MainMenu,
            Some(ScreenMode::Play) => InputContext::Playing,
            Some(ScreenMode::GameOver) => InputContext::GameOver,
        }
    }
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens per event:
/// 1. Determine the current InputContext from the screen mode
/// 2. Translate the event to a GameAction for that context
/// 3. Let the session handle it (which may change the screen mode)
///
/// See `Session::dispatch`.
pub struct InputSystem {
    pub context: InputContext,
    /// Logical size touch coordinates are scaled to
    logical_size: (u32, u32),
}

impl InputSystem {
    pub fn new(logical_size: (u32, u32)) -> Self {
        InputSystem {
            context: InputContext::Loading,
            logical_size,
        }
    }

    /// Update the input context from the current screen mode
    ///
    /// Call before translating each event.
    pub fn update_context(&mut self, mode: Option<ScreenMode>) {
        self.context = InputContext::from(mode);
    }

    /// Translates one SDL2 event
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match *event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.key_action(key),
            Event::MouseButtonDown {
                which,
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if !is_touch_mouse(which) => Some(GameAction::PointerDown(x, y)),
            Event::MouseButtonUp {
                which,
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if !is_touch_mouse(which) => Some(GameAction::PointerUp(x, y)),
            Event::MouseMotion { which, x, y, .. } if !is_touch_mouse(which) => {
                Some(GameAction::PointerMove(x, y))
            }
            Event::FingerDown { x, y, .. } => {
                let (x, y) = self.touch_to_logical(x, y);
                Some(GameAction::PointerDown(x, y))
            }
            Event::FingerUp { x, y, .. } => {
                let (x, y) = self.touch_to_logical(x, y);
                Some(GameAction::PointerUp(x, y))
            }
            Event::FingerMotion { x, y, .. } => {
                let (x, y) = self.touch_to_logical(x, y);
                Some(GameAction::PointerMove(x, y))
            }
            _ => None,
        }
    }

    /// Maps a key press to an action for the current context
    pub fn key_action(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::Loading => None,
            InputContext::MainMenu => match key {
                Keycode::Return | Keycode::Space => Some(GameAction::Shortcut(ButtonName::Start)),
                Keycode::Escape => Some(GameAction::Quit),
                _ => None,
            },
            InputContext::Playing => match key {
                Keycode::Space | Keycode::Up => Some(GameAction::Flap),
                Keycode::Escape => Some(GameAction::EndRound),
                _ => None,
            },
            InputContext::GameOver => match key {
                Keycode::R | Keycode::Return => Some(GameAction::Shortcut(ButtonName::Retry)),
                Keycode::M | Keycode::Escape => Some(GameAction::Shortcut(ButtonName::Menu)),
                _ => None,
            },
        }
    }

    /// Converts normalized (0..1) touch coordinates to logical pixels
    pub fn touch_to_logical(&self, x: f32, y: f32) -> (i32, i32) {
        let (width, height) = self.logical_size;
        (
            (x.clamp(0.0, 1.0) * width as f32) as i32,
            (y.clamp(0.0, 1.0) * height as f32) as i32,
        )
    }
}

fn is_touch_mouse(which: u32) -> bool {
    which == TOUCH_MOUSE_ID
}
