// Game module - host-side state around the UI screens
//
// This module contains:
// - ui_manager.rs: screens + pointer tracking for the active root
// - session.rs: score and what each button/action does

pub mod session;
pub mod ui_manager;

pub use session::{Flow, Session};
pub use ui_manager::UiManager;
