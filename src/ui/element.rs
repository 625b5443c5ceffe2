//! UI element kinds and their placement attributes
//!
//! Elements are plain data. Parent/child links live in [`UiTree`](super::UiTree);
//! container elements only store the ids of their children.

use super::atlas::SpriteRef;
use super::tree::ElementId;
use crate::text::BitmapFont;
use sdl2::pixels::Color;

/// A 2D value expressed as fractions of the container size (or of the element
/// size for a pin origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// The center of an element or container
    pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);
}

/// Inner spacing of a control, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Thickness {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

/// Placement of an element inside a [`CanvasPanel`]
///
/// The anchor point is `relative_position` of the canvas size; the element is
/// moved so that its own `pin_origin` sits on the anchor. Elements without a
/// relative size keep their desired size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPlacement {
    pub pin_origin: Vec2,
    pub relative_position: Vec2,
    pub relative_size: Option<Vec2>,
}

/// Layout attributes shared by every element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutProps {
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub canvas: CanvasPlacement,
    /// Lower bound on the arranged width, in pixels
    pub minimum_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub source: SpriteRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub font: BitmapFont,
    pub text: String,
    pub color: Color,
}

/// Sprites drawn for each interaction state of a button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonImages {
    pub not_pressed: SpriteRef,
    pub pressed: SpriteRef,
    pub mouse_over: SpriteRef,
}

impl ButtonImages {
    /// Same art for every state
    pub fn uniform(sprite: SpriteRef) -> Self {
        ButtonImages {
            not_pressed: sprite.clone(),
            pressed: sprite.clone(),
            mouse_over: sprite,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub images: ButtonImages,
    pub padding: Thickness,
    pub content: Option<ElementId>,
}

/// A single child drawn over a background image
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDecorator {
    pub background: SpriteRef,
    pub padding: Thickness,
    pub content: Option<ElementId>,
}

/// Free-placement container; children use their [`CanvasPlacement`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasPanel {
    pub children: Vec<ElementId>,
}

/// Full-screen overlay that swallows input for everything beneath it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalElement {
    pub content: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiElement {
    Image(ImageElement),
    Text(TextBlock),
    Button(Button),
    Decorator(ContentDecorator),
    Canvas(CanvasPanel),
    Modal(ModalElement),
}

impl UiElement {
    pub fn image(source: SpriteRef) -> Self {
        UiElement::Image(ImageElement { source })
    }

    pub fn text(font: BitmapFont, text: &str, color: Color) -> Self {
        UiElement::Text(TextBlock {
            font,
            text: text.to_string(),
            color,
        })
    }

    pub fn button(images: ButtonImages, padding: Thickness) -> Self {
        UiElement::Button(Button {
            images,
            padding,
            content: None,
        })
    }

    pub fn decorator(background: SpriteRef, padding: Thickness) -> Self {
        UiElement::Decorator(ContentDecorator {
            background,
            padding,
            content: None,
        })
    }

    pub fn canvas() -> Self {
        UiElement::Canvas(CanvasPanel::default())
    }

    pub fn modal() -> Self {
        UiElement::Modal(ModalElement::default())
    }

    /// Child ids in draw order
    pub fn children(&self) -> Vec<ElementId> {
        match self {
            UiElement::Canvas(canvas) => canvas.children.clone(),
            UiElement::Button(Button { content, .. })
            | UiElement::Decorator(ContentDecorator { content, .. })
            | UiElement::Modal(ModalElement { content }) => content.iter().copied().collect(),
            UiElement::Image(_) | UiElement::Text(_) => Vec::new(),
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, UiElement::Button(_))
    }
}
