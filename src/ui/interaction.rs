//! Pointer tracking and click notifications
//!
//! A click is a press and a release over the same button. The tracker is fed
//! with hit-test results (see [`Layout::hit_test`](super::Layout::hit_test))
//! and produces [`UiEvent`]s that the host matches against the button
//! handles it cares about.

use super::tree::ElementId;

/// Notification produced by the UI for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Clicked(ElementId),
}

/// Which art a button shows this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    NotPressed,
    Pressed,
    MouseOver,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    pressed: Option<ElementId>,
    hovered: Option<ElementId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker::default()
    }

    pub fn pointer_moved(&mut self, hit: Option<ElementId>) {
        self.hovered = hit;
    }

    pub fn pointer_pressed(&mut self, hit: Option<ElementId>) {
        self.pressed = hit;
        self.hovered = hit;
    }

    /// Ends a press; returns a click if it started on the same button
    pub fn pointer_released(&mut self, hit: Option<ElementId>) -> Option<UiEvent> {
        self.hovered = hit;
        match (self.pressed.take(), hit) {
            (Some(pressed), Some(released)) if pressed == released => {
                Some(UiEvent::Clicked(pressed))
            }
            _ => None,
        }
    }

    /// Forgets any press/hover (used when the active root changes)
    pub fn reset(&mut self) {
        self.pressed = None;
        self.hovered = None;
    }

    pub fn visual(&self, button: ElementId) -> ButtonVisual {
        let hovered = self.hovered == Some(button);
        match self.pressed {
            Some(pressed) if pressed == button && hovered => ButtonVisual::Pressed,
            None if hovered => ButtonVisual::MouseOver,
            _ => ButtonVisual::NotPressed,
        }
    }
}
