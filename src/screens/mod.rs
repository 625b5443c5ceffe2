//! Screen Manager
//!
//! Owns the three mutually exclusive UI screens of the game (main menu,
//! in-game HUD, game over) and switches the host between them.
//!
//! # Lifecycle
//!
//! Construction is two-phase:
//! 1. [`ScreenManager::new`] takes the UI host; nothing is built yet
//! 2. [`ScreenManager::start`] takes the font and atlas and builds all three
//!    screens and their buttons, once
//!
//! Before `start` succeeds every operation returns
//! [`ScreenError::NotStarted`] and leaves the host untouched. A second
//! `start` returns [`ScreenError::AlreadyStarted`].
//!
//! # Buttons
//!
//! The manager never reacts to clicks itself. It hands out [`ButtonHandle`]s
//! for Start, Menu and Retry; the host matches [`UiEvent`]s against them and
//! decides which mode to enter.
//!
//! # Example
//!
//! ```rust
//! let mut screens = ScreenManager::new(UiPage::new());
//! screens.start(BitmapFont::new(3), &atlas)?;
//! screens.enter_main_menu()?;
//!
//! let start = screens.start_button()?;
//! if start.was_clicked(&event) {
//!     screens.set_score(0)?;
//!     screens.enter_play()?;
//! }
//! ```

mod builders;
pub mod error;

pub use error::ScreenError;

use crate::text::BitmapFont;
use crate::ui::{ElementId, SpriteAtlas, UiEvent, UiHost, UiTree};
use builders::BuiltScreens;
use std::fmt;

/// Text shown before the score value
pub const SCORE_PREFIX: &str = "Score : ";

/// Formats a score for the HUD: prefix plus the value right-justified in a
/// field of width 2. Wider values widen the field instead of being cut.
pub fn format_score(score: i32) -> String {
    format!("{}{:>2}", SCORE_PREFIX, score)
}

/// One of the three UI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenMode {
    MainMenu,
    Play,
    GameOver,
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScreenMode::MainMenu => "MainMenu",
            ScreenMode::Play => "Play",
            ScreenMode::GameOver => "GameOver",
        };
        write!(f, "{}", name)
    }
}

/// A built screen: its mode and the root of its element tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    mode: ScreenMode,
    root: ElementId,
}

impl Screen {
    fn new(mode: ScreenMode, root: ElementId) -> Self {
        Screen { mode, root }
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn root(&self) -> ElementId {
        self.root
    }
}

/// The three named buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonName {
    Start,
    Menu,
    Retry,
}

impl ButtonName {
    /// Text on the button
    pub fn label(&self) -> &'static str {
        match self {
            ButtonName::Start => "Touch to Start",
            ButtonName::Menu => "Menu",
            ButtonName::Retry => "Retry",
        }
    }

    /// Element name in the tree
    pub fn element_name(&self) -> &'static str {
        match self {
            ButtonName::Start => "StartButton",
            ButtonName::Menu => "MenuButton",
            ButtonName::Retry => "RetryButton",
        }
    }
}

/// Non-owning reference to one of the named buttons
///
/// The button itself belongs to its screen's tree; the handle stays valid
/// (and identical) for the manager's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHandle {
    id: ElementId,
    name: ButtonName,
}

impl ButtonHandle {
    fn new(id: ElementId, name: ButtonName) -> Self {
        ButtonHandle { id, name }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> ButtonName {
        self.name
    }

    /// Whether `event` is a click on this button
    pub fn was_clicked(&self, event: &UiEvent) -> bool {
        matches!(event, UiEvent::Clicked(id) if *id == self.id)
    }
}

/// Owns the screens and mediates mode switches on a [`UiHost`]
pub struct ScreenManager<H: UiHost> {
    host: H,
    tree: UiTree,
    screens: Option<BuiltScreens>,
    mode: Option<ScreenMode>,
}

impl<H: UiHost> ScreenManager<H> {
    /// Creates a manager that will display its screens on `host`
    pub fn new(host: H) -> Self {
        ScreenManager {
            host,
            tree: UiTree::new(),
            screens: None,
            mode: None,
        }
    }

    /// Builds the three screens
    ///
    /// Atlas lookups that fail abort the whole start; the manager stays not
    /// started and `start` may be called again.
    pub fn start(&mut self, font: BitmapFont, atlas: &SpriteAtlas) -> Result<(), ScreenError> {
        if self.screens.is_some() {
            tracing::warn!("ScreenManager::start called twice, keeping existing screens");
            return Err(ScreenError::AlreadyStarted);
        }

        // Nothing from a failed build may stay behind in the arena
        let mark = self.tree.len();
        let screens = match builders::build_screens(&mut self.tree, font, atlas) {
            Ok(screens) => screens,
            Err(e) => {
                self.tree.truncate(mark);
                tracing::warn!("Failed to build UI screens: {}", e);
                return Err(e.into());
            }
        };
        tracing::info!(
            "Built UI screens ({} elements, font scale {})",
            self.tree.len(),
            font.scale()
        );
        self.screens = Some(screens);
        Ok(())
    }

    #[allow(dead_code)] // Queried by embedders that start lazily
    pub fn is_started(&self) -> bool {
        self.screens.is_some()
    }

    fn built(&self) -> Result<&BuiltScreens, ScreenError> {
        self.screens.as_ref().ok_or_else(|| {
            tracing::warn!("Screen operation before ScreenManager::start");
            ScreenError::NotStarted
        })
    }

    /// Shows the main menu
    pub fn enter_main_menu(&mut self) -> Result<(), ScreenError> {
        self.enter(ScreenMode::MainMenu)
    }

    /// Shows the in-game HUD
    pub fn enter_play(&mut self) -> Result<(), ScreenError> {
        self.enter(ScreenMode::Play)
    }

    /// Shows the game-over screen
    pub fn enter_game_over(&mut self) -> Result<(), ScreenError> {
        self.enter(ScreenMode::GameOver)
    }

    /// Attaches `mode`'s root to the host, replacing the current one
    fn enter(&mut self, mode: ScreenMode) -> Result<(), ScreenError> {
        let screen = self.screen(mode)?;
        self.host.attach_root(screen.root());
        let root_name = self.tree.get(screen.root())?.name().unwrap_or("unnamed");
        match self.mode.replace(screen.mode()) {
            Some(previous) => tracing::info!("UI mode {} -> {} ({})", previous, mode, root_name),
            None => tracing::info!("UI mode -> {} ({})", mode, root_name),
        }
        Ok(())
    }

    /// Updates the HUD score text
    pub fn set_score(&mut self, score: i32) -> Result<(), ScreenError> {
        let score_text = self.built()?.score_text;
        let text = format_score(score);
        self.tree.set_text(score_text, &text)?;
        tracing::debug!("Score text set to {:?}", text);
        Ok(())
    }

    /// Current HUD score text
    pub fn score_text(&self) -> Result<&str, ScreenError> {
        let score_text = self.built()?.score_text;
        Ok(self.tree.text(score_text)?)
    }

    pub fn screen(&self, mode: ScreenMode) -> Result<Screen, ScreenError> {
        let built = self.built()?;
        Ok(match mode {
            ScreenMode::MainMenu => built.main_menu,
            ScreenMode::Play => built.play,
            ScreenMode::GameOver => built.game_over,
        })
    }

    pub fn start_button(&self) -> Result<ButtonHandle, ScreenError> {
        Ok(self.built()?.start)
    }

    pub fn menu_button(&self) -> Result<ButtonHandle, ScreenError> {
        Ok(self.built()?.menu)
    }

    pub fn retry_button(&self) -> Result<ButtonHandle, ScreenError> {
        Ok(self.built()?.retry)
    }

    /// Mode last entered, `None` until the first `enter_*`
    pub fn mode(&self) -> Option<ScreenMode> {
        self.mode
    }

    pub fn active_root(&self) -> Option<ElementId> {
        self.host.active_root()
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    #[allow(dead_code)] // Lets embedders reach their own host back
    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{SpriteRegion, UiElement, UiError};

    /// Host that remembers every attach
    #[derive(Default)]
    struct RecordingHost {
        attached: Vec<ElementId>,
    }

    impl UiHost for RecordingHost {
        fn attach_root(&mut self, root: ElementId) {
            self.attached.push(root);
        }

        fn active_root(&self) -> Option<ElementId> {
            self.attached.last().copied()
        }
    }

    fn stub_atlas() -> SpriteAtlas {
        SpriteAtlas::new("ui_images.png")
            .with_sprite("button", SpriteRegion::new(0, 0, 256, 96))
            .with_sprite("xk_logo", SpriteRegion::new(0, 96, 256, 128))
            .with_sprite("score_bg", SpriteRegion::new(0, 224, 192, 80))
    }

    fn started() -> ScreenManager<RecordingHost> {
        let mut screens = ScreenManager::new(RecordingHost::default());
        screens.start(BitmapFont::new(3), &stub_atlas()).unwrap();
        screens
    }

    fn texts_under(screens: &ScreenManager<RecordingHost>, mode: ScreenMode) -> Vec<String> {
        let root = screens.screen(mode).unwrap().root();
        let tree = screens.tree();
        tree.descendants(root)
            .unwrap()
            .into_iter()
            .filter_map(|id| tree.text(id).ok().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_format_score_right_justifies_to_width_two() {
        assert_eq!(format_score(0), "Score :  0");
        assert_eq!(format_score(5), "Score :  5");
        assert_eq!(format_score(42), "Score : 42");
        assert_eq!(format_score(100), "Score : 100");
        assert_eq!(format_score(999), "Score : 999");
    }

    #[test]
    fn test_nothing_active_before_first_enter() {
        let screens = started();
        assert!(screens.is_started());
        assert_eq!(screens.mode(), None);
        assert_eq!(screens.active_root(), None);
    }

    #[test]
    fn test_each_transition_attaches_exactly_the_requested_root() {
        let mut screens = started();
        let sequence = [
            ScreenMode::MainMenu,
            ScreenMode::Play,
            ScreenMode::GameOver,
            ScreenMode::Play,
            ScreenMode::GameOver,
            ScreenMode::MainMenu,
        ];

        for (i, mode) in sequence.into_iter().enumerate() {
            screens.enter(mode).unwrap();
            let expected = screens.screen(mode).unwrap().root();
            assert_eq!(screens.active_root(), Some(expected));
            assert_eq!(screens.host().attached.len(), i + 1);
            assert_eq!(screens.mode(), Some(mode));
        }
    }

    #[test]
    fn test_named_enter_operations() {
        let mut screens = started();

        screens.enter_play().unwrap();
        assert_eq!(screens.active_root(), Some(screens.screen(ScreenMode::Play).unwrap().root()));

        screens.enter_game_over().unwrap();
        let game_over = screens.screen(ScreenMode::GameOver).unwrap();
        assert_eq!(screens.active_root(), Some(game_over.root()));
        assert_eq!(game_over.mode(), ScreenMode::GameOver);

        screens.enter_main_menu().unwrap();
        assert_eq!(
            screens.active_root(),
            Some(screens.screen(ScreenMode::MainMenu).unwrap().root())
        );
    }

    #[test]
    fn test_set_score_updates_play_text() {
        let mut screens = started();
        for (score, expected) in [(0, "Score :  0"), (42, "Score : 42"), (123, "Score : 123")] {
            screens.set_score(score).unwrap();
            assert_eq!(screens.score_text().unwrap(), expected);
        }
        assert!(texts_under(&screens, ScreenMode::Play).contains(&"Score : 123".to_string()));
    }

    #[test]
    fn test_set_score_leaves_other_screens_alone() {
        let mut screens = started();
        let menu_before = texts_under(&screens, ScreenMode::MainMenu);
        let game_over_before = texts_under(&screens, ScreenMode::GameOver);

        screens.enter_main_menu().unwrap();
        for score in [1, 7, 99, 1000] {
            screens.set_score(score).unwrap();
        }

        assert_eq!(texts_under(&screens, ScreenMode::MainMenu), menu_before);
        assert_eq!(texts_under(&screens, ScreenMode::GameOver), game_over_before);
        // Score updates never switch screens
        assert_eq!(screens.mode(), Some(ScreenMode::MainMenu));
    }

    #[test]
    fn test_button_handles_are_stable_across_switches() {
        let mut screens = started();
        let before = (
            screens.start_button().unwrap(),
            screens.menu_button().unwrap(),
            screens.retry_button().unwrap(),
        );

        for _ in 0..5 {
            screens.enter_main_menu().unwrap();
            screens.enter_play().unwrap();
            screens.enter_game_over().unwrap();
        }

        let after = (
            screens.start_button().unwrap(),
            screens.menu_button().unwrap(),
            screens.retry_button().unwrap(),
        );
        assert_eq!(before, after);
        assert_eq!(after.0.name(), ButtonName::Start);
        assert_eq!(after.2.name(), ButtonName::Retry);
    }

    #[test]
    fn test_screens_are_built_once() {
        let mut screens = started();
        let element_count = screens.tree().len();
        let roots: Vec<_> = [ScreenMode::MainMenu, ScreenMode::Play, ScreenMode::GameOver]
            .into_iter()
            .map(|mode| screens.screen(mode).unwrap().root())
            .collect();

        for _ in 0..10 {
            screens.enter_game_over().unwrap();
            screens.enter_play().unwrap();
            screens.enter_main_menu().unwrap();
        }

        assert_eq!(screens.tree().len(), element_count);
        for (mode, root) in [ScreenMode::MainMenu, ScreenMode::Play, ScreenMode::GameOver]
            .into_iter()
            .zip(roots)
        {
            assert_eq!(screens.screen(mode).unwrap().root(), root);
        }
    }

    #[test]
    fn test_screen_trees_are_disjoint_roots() {
        let screens = started();
        let tree = screens.tree();
        let main_menu = screens.screen(ScreenMode::MainMenu).unwrap().root();
        let play = screens.screen(ScreenMode::Play).unwrap().root();
        let game_over = screens.screen(ScreenMode::GameOver).unwrap().root();

        for root in [main_menu, play, game_over] {
            assert_eq!(tree.get(root).unwrap().parent(), None);
        }
        assert!(matches!(tree.element(main_menu), Ok(UiElement::Modal(_))));
        assert!(matches!(tree.element(play), Ok(UiElement::Canvas(_))));
        assert!(matches!(tree.element(game_over), Ok(UiElement::Modal(_))));
    }

    #[test]
    fn test_main_menu_then_game_over_scenario() {
        let mut screens = started();
        let start = screens.start_button().unwrap();

        screens.enter_main_menu().unwrap();
        let active = screens.active_root().unwrap();
        assert_eq!(
            screens.tree().find_button(active, "Touch to Start"),
            Some(start.id())
        );

        screens.enter_game_over().unwrap();
        let active = screens.active_root().unwrap();
        let tree = screens.tree();
        assert_eq!(tree.find_button(active, "Menu"), Some(screens.menu_button().unwrap().id()));
        assert_eq!(tree.find_button(active, "Retry"), Some(screens.retry_button().unwrap().id()));
        assert!(!tree.contains(active, start.id()));
        // Still alive in its own screen
        assert!(tree.get(start.id()).is_ok());
        assert_eq!(screens.start_button().unwrap(), start);
    }

    #[test]
    fn test_buttons_share_the_same_art() {
        let screens = started();
        let tree = screens.tree();
        let handles = [
            screens.start_button().unwrap(),
            screens.menu_button().unwrap(),
            screens.retry_button().unwrap(),
        ];
        let images: Vec<_> = handles
            .into_iter()
            .map(|handle| match tree.element(handle.id()) {
                Ok(UiElement::Button(button)) => button.images.clone(),
                other => panic!("expected a button, got {:?}", other),
            })
            .collect();

        assert_eq!(images[0], images[1]);
        assert_eq!(images[1], images[2]);
        assert_eq!(images[0].pressed, images[0].not_pressed);
        assert_eq!(images[0].mouse_over.name(), "button");
    }

    #[test]
    fn test_was_clicked_matches_only_its_button() {
        let screens = started();
        let start = screens.start_button().unwrap();
        let retry = screens.retry_button().unwrap();
        let event = UiEvent::Clicked(start.id());

        assert!(start.was_clicked(&event));
        assert!(!retry.was_clicked(&event));
    }

    #[test]
    fn test_operations_before_start_fail_without_touching_host() {
        let mut screens = ScreenManager::new(RecordingHost::default());
        assert!(!screens.is_started());

        assert!(matches!(screens.enter_main_menu(), Err(ScreenError::NotStarted)));
        assert!(matches!(screens.enter_play(), Err(ScreenError::NotStarted)));
        assert!(matches!(screens.enter_game_over(), Err(ScreenError::NotStarted)));
        assert!(matches!(screens.set_score(3), Err(ScreenError::NotStarted)));
        assert!(matches!(screens.start_button(), Err(ScreenError::NotStarted)));
        assert!(screens.host().attached.is_empty());
        assert_eq!(screens.mode(), None);
    }

    #[test]
    fn test_second_start_is_rejected_and_keeps_screens() {
        let mut screens = started();
        let start = screens.start_button().unwrap();
        let count = screens.tree().len();

        assert!(matches!(
            screens.start(BitmapFont::new(3), &stub_atlas()),
            Err(ScreenError::AlreadyStarted)
        ));
        assert_eq!(screens.tree().len(), count);
        assert_eq!(screens.start_button().unwrap(), start);
    }

    #[test]
    fn test_missing_sprite_fails_start() {
        let atlas = SpriteAtlas::new("ui_images.png")
            .with_sprite("button", SpriteRegion::new(0, 0, 256, 96))
            .with_sprite("score_bg", SpriteRegion::new(0, 224, 192, 80));
        let mut screens = ScreenManager::new(RecordingHost::default());

        match screens.start(BitmapFont::new(3), &atlas) {
            Err(ScreenError::Ui(UiError::SpriteNotFound(name))) => assert_eq!(name, "xk_logo"),
            other => panic!("expected missing xk_logo, got {:?}", other),
        }
        assert!(!screens.is_started());
        assert_eq!(screens.tree().len(), 0);

        // A later start with a complete atlas still works
        screens.start(BitmapFont::new(3), &stub_atlas()).unwrap();
        screens.enter_main_menu().unwrap();
        assert!(screens.active_root().is_some());
    }

    #[test]
    fn test_repeated_failed_starts_leave_no_elements_behind() {
        let broken = SpriteAtlas::new("ui_images.png")
            .with_sprite("button", SpriteRegion::new(0, 0, 256, 96))
            .with_sprite("xk_logo", SpriteRegion::new(0, 96, 256, 128));
        let mut screens = ScreenManager::new(RecordingHost::default());

        for _ in 0..5 {
            assert!(matches!(
                screens.start(BitmapFont::new(3), &broken),
                Err(ScreenError::Ui(UiError::SpriteNotFound(_)))
            ));
            assert_eq!(screens.tree().len(), 0);
        }

        screens.start(BitmapFont::new(3), &stub_atlas()).unwrap();
        let fresh = started();
        assert_eq!(screens.tree().len(), fresh.tree().len());
        assert_eq!(screens.start_button().unwrap(), fresh.start_button().unwrap());
    }
}
