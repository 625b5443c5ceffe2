//! UI host: the thing that shows one root at a time

use super::tree::ElementId;

/// Displays a single active UI root
///
/// Attaching a root replaces whatever was attached before; there is never
/// more than one active root.
pub trait UiHost {
    /// Makes `root` the active root, detaching the previous one
    fn attach_root(&mut self, root: ElementId);

    /// Currently displayed root, if any
    fn active_root(&self) -> Option<ElementId>;
}

/// Host used by the game loop: holds the active root for the renderer
#[derive(Debug, Default)]
pub struct UiPage {
    root: Option<ElementId>,
}

impl UiPage {
    pub fn new() -> Self {
        UiPage { root: None }
    }
}

impl UiHost for UiPage {
    fn attach_root(&mut self, root: ElementId) {
        if let Some(previous) = self.root.replace(root) {
            tracing::trace!("UiPage: detached {:?}, attached {:?}", previous, root);
        }
    }

    fn active_root(&self) -> Option<ElementId> {
        self.root
    }
}
