//! Retained UI Toolkit
//!
//! This module provides the element toolkit the screens are built from and
//! the host capability that displays them.
//!
//! # Architecture
//!
//! - [`UiTree`] is an arena owning every element; [`ElementId`] is a copyable,
//!   non-owning handle into it
//! - Elements ([`UiElement`]) are images, text blocks, buttons, content
//!   decorators, canvases and modal overlays, placed with anchors expressed
//!   as fractions of their container ([`CanvasPlacement`])
//! - [`Layout`] turns one root into screen rectangles for drawing and
//!   hit-testing
//! - [`UiHost`] shows a single root at a time ([`UiPage`] in the game)
//! - [`PointerTracker`] turns presses/releases into [`UiEvent::Clicked`]
//!
//! Nothing here touches an SDL2 context; drawing lives in `crate::render`.
//!
//! # Example Usage
//!
//! ```rust
//! let mut tree = UiTree::new();
//! let canvas = tree.add(UiElement::canvas());
//! let logo = tree.add_with_layout(UiElement::image(atlas.sprite("xk_logo")?), placement);
//! tree.attach(canvas, logo)?;
//!
//! let mut page = UiPage::new();
//! page.attach_root(canvas);
//!
//! let layout = Layout::compute(&tree, canvas, (540, 960))?;
//! ```

pub mod atlas;
pub mod element;
pub mod error;
pub mod host;
pub mod interaction;
pub mod layout;
pub mod tree;

pub use atlas::{SpriteAtlas, SpriteRef, SpriteRegion};
pub use element::{
    ButtonImages, CanvasPlacement, HorizontalAlignment, LayoutProps, Thickness, UiElement,
    Vec2, VerticalAlignment,
};
pub use error::UiError;
pub use host::{UiHost, UiPage};
pub use interaction::{ButtonVisual, PointerTracker, UiEvent};
pub use layout::Layout;
pub use tree::{ElementId, UiTree};
