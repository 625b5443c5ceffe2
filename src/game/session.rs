// Session: the host-side wiring between input, score and screen switches
//
// The screen manager only exposes its buttons; deciding what a click means
// happens here, by matching each UiEvent against the button handles.

use super::ui_manager::UiManager;
use crate::input_system::{GameAction, InputSystem};
use crate::screens::{ButtonHandle, ButtonName, ScreenError, ScreenMode};
use crate::ui::UiEvent;
use sdl2::event::Event;

/// Whether the frame loop keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    ui: UiManager,
    score: i32,
}

impl Session {
    /// Wraps a started [`UiManager`]
    pub fn new(ui: UiManager) -> Self {
        Session { ui, score: 0 }
    }

    /// Shows the main menu; the first screen of every run
    pub fn begin(&mut self) -> Result<(), ScreenError> {
        self.ui.enter_main_menu()
    }

    pub fn ui(&self) -> &UiManager {
        &self.ui
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Handles a frame's worth of events in order
    ///
    /// The input context is refreshed before each event, so a key that
    /// switches screens changes what the following keys mean.
    pub fn dispatch<I>(&mut self, input: &mut InputSystem, events: I) -> Result<Flow, ScreenError>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            input.update_context(self.ui.mode());
            if let Some(action) = input.translate(&event) {
                if self.handle_action(action)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
        Ok(Flow::Continue)
    }

    pub fn handle_action(&mut self, action: GameAction) -> Result<Flow, ScreenError> {
        match action {
            GameAction::Quit => return Ok(Flow::Quit),
            GameAction::PointerMove(x, y) => self.ui.pointer_moved(x, y)?,
            GameAction::PointerDown(x, y) => {
                let on_button = self.ui.pointer_pressed(x, y)?;
                if !on_button && self.ui.mode() == Some(ScreenMode::Play) {
                    self.flap()?;
                }
            }
            GameAction::PointerUp(x, y) => {
                if let Some(event) = self.ui.pointer_released(x, y)? {
                    self.handle_event(event)?;
                }
            }
            GameAction::Flap => {
                if self.ui.mode() == Some(ScreenMode::Play) {
                    self.flap()?;
                }
            }
            GameAction::EndRound => {
                if self.ui.mode() == Some(ScreenMode::Play) {
                    tracing::info!("Round over: {}", self.ui.screens().score_text()?);
                    self.ui.enter_game_over()?;
                }
            }
            GameAction::Shortcut(name) => {
                let button = self.button(name)?;
                if self.is_showing(button) {
                    tracing::debug!("Shortcut for {}", button.name().element_name());
                    self.handle_event(UiEvent::Clicked(button.id()))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Reacts to a click notification from the UI
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), ScreenError> {
        let screens = self.ui.screens();
        let restart = screens.start_button()?.was_clicked(&event)
            || screens.retry_button()?.was_clicked(&event);
        let to_menu = screens.menu_button()?.was_clicked(&event);

        if restart {
            self.score = 0;
            self.ui.set_score(self.score)?;
            self.ui.enter_play()
        } else if to_menu {
            self.ui.enter_main_menu()
        } else {
            Ok(())
        }
    }

    fn button(&self, name: ButtonName) -> Result<ButtonHandle, ScreenError> {
        let screens = self.ui.screens();
        match name {
            ButtonName::Start => screens.start_button(),
            ButtonName::Menu => screens.menu_button(),
            ButtonName::Retry => screens.retry_button(),
        }
    }

    fn flap(&mut self) -> Result<(), ScreenError> {
        self.score = self.score.saturating_add(1);
        self.ui.set_score(self.score)
    }

    /// Whether `button` lives on the screen currently shown
    fn is_showing(&self, button: ButtonHandle) -> bool {
        let screens = self.ui.screens();
        screens
            .active_root()
            .is_some_and(|root| screens.tree().contains(root, button.id()))
    }
}
