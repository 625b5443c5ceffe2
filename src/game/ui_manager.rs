// UiManager struct
//
// Couples the screen manager with the pointer tracker and the logical
// viewport, turning raw pointer positions into click events.

use crate::screens::{ScreenError, ScreenManager, ScreenMode};
use crate::text::BitmapFont;
use crate::ui::{ElementId, Layout, PointerTracker, SpriteAtlas, UiError, UiEvent, UiPage};

/// UiManager holds the screens and the pointer state for the active one
pub struct UiManager {
    screens: ScreenManager<UiPage>,
    pointer: PointerTracker,
    viewport: (u32, u32),
    /// Root the pointer state belongs to
    tracked_root: Option<ElementId>,
}

impl UiManager {
    pub fn new(viewport: (u32, u32)) -> Self {
        UiManager {
            screens: ScreenManager::new(UiPage::new()),
            pointer: PointerTracker::new(),
            viewport,
            tracked_root: None,
        }
    }

    pub fn start(&mut self, font: BitmapFont, atlas: &SpriteAtlas) -> Result<(), ScreenError> {
        self.screens.start(font, atlas)
    }

    pub fn enter_main_menu(&mut self) -> Result<(), ScreenError> {
        self.screens.enter_main_menu()?;
        self.sync_root();
        Ok(())
    }

    pub fn enter_play(&mut self) -> Result<(), ScreenError> {
        self.screens.enter_play()?;
        self.sync_root();
        Ok(())
    }

    pub fn enter_game_over(&mut self) -> Result<(), ScreenError> {
        self.screens.enter_game_over()?;
        self.sync_root();
        Ok(())
    }

    pub fn set_score(&mut self, score: i32) -> Result<(), ScreenError> {
        self.screens.set_score(score)
    }

    pub fn mode(&self) -> Option<ScreenMode> {
        self.screens.mode()
    }

    pub fn screens(&self) -> &ScreenManager<UiPage> {
        &self.screens
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Layout of the active root, `None` while nothing is attached
    pub fn layout(&self) -> Result<Option<Layout>, UiError> {
        match self.screens.active_root() {
            Some(root) => Ok(Some(Layout::compute(self.screens.tree(), root, self.viewport)?)),
            None => Ok(None),
        }
    }

    pub fn pointer_moved(&mut self, x: i32, y: i32) -> Result<(), UiError> {
        let hit = self.hit_test(x, y)?;
        self.pointer.pointer_moved(hit);
        Ok(())
    }

    /// Starts a press; returns whether it landed on a button
    pub fn pointer_pressed(&mut self, x: i32, y: i32) -> Result<bool, UiError> {
        let hit = self.hit_test(x, y)?;
        self.pointer.pointer_pressed(hit);
        Ok(hit.is_some())
    }

    /// Ends a press; returns the click it completed, if any
    pub fn pointer_released(&mut self, x: i32, y: i32) -> Result<Option<UiEvent>, UiError> {
        let hit = self.hit_test(x, y)?;
        let event = self.pointer.pointer_released(hit);
        if let Some(UiEvent::Clicked(id)) = event {
            let name = self.screens.tree().get(id)?.name().unwrap_or("unnamed");
            tracing::debug!("Clicked {}", name);
        }
        Ok(event)
    }

    fn hit_test(&mut self, x: i32, y: i32) -> Result<Option<ElementId>, UiError> {
        self.sync_root();
        Ok(self
            .layout()?
            .and_then(|layout| layout.hit_test(self.screens.tree(), x, y)))
    }

    /// Drops pointer state that belongs to a root no longer displayed
    fn sync_root(&mut self) {
        let root = self.screens.active_root();
        if root != self.tracked_root {
            self.pointer.reset();
            self.tracked_root = root;
        }
    }
}
