//! Layout pass for a single UI root
//!
//! Layout is a pure function of the tree, the root and the viewport size, so
//! it can be recomputed every frame (score text changes its width) and tested
//! without an SDL2 context.
//!
//! # Rules
//!
//! - A modal overlay stretches over its slot; a canvas fills its slot
//! - A canvas child is `relative_size × canvas` big (or its desired size) and
//!   its top-left corner is `relative_position × canvas − pin_origin × size`
//! - Desired size: image = sprite region, text = font metrics,
//!   button/decorator = content + padding; everything is widened to its
//!   minimum width
//! - Button/decorator content sits inside the padded area per its alignment

use super::element::{HorizontalAlignment, Thickness, UiElement, VerticalAlignment};
use super::error::UiError;
use super::tree::{ElementId, UiTree};
use sdl2::rect::Rect;
use std::collections::HashMap;

/// Floating-point rectangle used while arranging
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Bounds {
    fn shrink(&self, padding: &Thickness) -> Bounds {
        Bounds {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: (self.width - padding.horizontal()).max(0.0),
            height: (self.height - padding.vertical()).max(0.0),
        }
    }

    fn to_rect(self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            (self.width.round() as u32).max(1),
            (self.height.round() as u32).max(1),
        )
    }
}

/// Arranged screen rectangles for every element under one root
#[derive(Debug, Clone)]
pub struct Layout {
    root: ElementId,
    rects: HashMap<ElementId, Rect>,
    order: Vec<ElementId>,
}

impl Layout {
    /// Arranges `root` to fill a `viewport` of (width, height) pixels
    pub fn compute(tree: &UiTree, root: ElementId, viewport: (u32, u32)) -> Result<Self, UiError> {
        let mut layout = Layout {
            root,
            rects: HashMap::new(),
            order: Vec::new(),
        };
        let slot = Bounds {
            x: 0.0,
            y: 0.0,
            width: viewport.0 as f32,
            height: viewport.1 as f32,
        };
        layout.arrange(tree, root, slot)?;
        Ok(layout)
    }

    #[allow(dead_code)] // Used by tests and debug tooling
    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// Element ids in draw order (parents before children)
    pub fn draw_order(&self) -> &[ElementId] {
        &self.order
    }

    /// Top-most button under the point, if any
    pub fn hit_test(&self, tree: &UiTree, x: i32, y: i32) -> Option<ElementId> {
        self.order.iter().rev().copied().find(|&id| {
            let is_button = tree.element(id).is_ok_and(UiElement::is_button);
            is_button && self.rects[&id].contains_point((x, y))
        })
    }

    fn arrange(&mut self, tree: &UiTree, id: ElementId, slot: Bounds) -> Result<(), UiError> {
        self.rects.insert(id, slot.to_rect());
        self.order.push(id);

        match tree.element(id)? {
            UiElement::Modal(modal) => {
                if let Some(content) = modal.content {
                    self.arrange(tree, content, slot)?;
                }
            }
            UiElement::Canvas(_) => {
                for child in tree.children(id)? {
                    let bounds = place_on_canvas(tree, child, slot)?;
                    self.arrange(tree, child, bounds)?;
                }
            }
            UiElement::Button(button) => {
                if let Some(content) = button.content {
                    let bounds = align(tree, content, slot.shrink(&button.padding))?;
                    self.arrange(tree, content, bounds)?;
                }
            }
            UiElement::Decorator(decorator) => {
                if let Some(content) = decorator.content {
                    let bounds = align(tree, content, slot.shrink(&decorator.padding))?;
                    self.arrange(tree, content, bounds)?;
                }
            }
            UiElement::Image(_) | UiElement::Text(_) => {}
        }

        Ok(())
    }
}

/// Size an element wants before its container constrains it
fn desired_size(tree: &UiTree, id: ElementId) -> Result<(f32, f32), UiError> {
    let node = tree.get(id)?;
    let (width, height) = match node.element() {
        UiElement::Image(image) => {
            let region = image.source.region();
            (region.width as f32, region.height as f32)
        }
        UiElement::Text(block) => {
            let (w, h) = block.font.measure(&block.text);
            (w as f32, h as f32)
        }
        UiElement::Button(button) => padded_size(tree, button.content, &button.padding)?,
        UiElement::Decorator(decorator) => {
            padded_size(tree, decorator.content, &decorator.padding)?
        }
        UiElement::Modal(modal) => match modal.content {
            Some(content) => desired_size(tree, content)?,
            None => (0.0, 0.0),
        },
        UiElement::Canvas(_) => (0.0, 0.0),
    };
    Ok((width.max(node.layout().minimum_width), height))
}

fn padded_size(
    tree: &UiTree,
    content: Option<ElementId>,
    padding: &Thickness,
) -> Result<(f32, f32), UiError> {
    let (w, h) = match content {
        Some(content) => desired_size(tree, content)?,
        None => (0.0, 0.0),
    };
    Ok((w + padding.horizontal(), h + padding.vertical()))
}

fn place_on_canvas(tree: &UiTree, child: ElementId, canvas: Bounds) -> Result<Bounds, UiError> {
    let layout = *tree.get(child)?.layout();
    let placement = layout.canvas;

    let (width, height) = match placement.relative_size {
        Some(size) => (size.x * canvas.width, size.y * canvas.height),
        None => desired_size(tree, child)?,
    };
    let width = width.max(layout.minimum_width);

    Ok(Bounds {
        x: canvas.x + placement.relative_position.x * canvas.width - placement.pin_origin.x * width,
        y: canvas.y + placement.relative_position.y * canvas.height
            - placement.pin_origin.y * height,
        width,
        height,
    })
}

/// Places single content inside an already padded area
fn align(tree: &UiTree, child: ElementId, area: Bounds) -> Result<Bounds, UiError> {
    let layout = *tree.get(child)?.layout();
    let (desired_w, desired_h) = desired_size(tree, child)?;
    let w = desired_w.min(area.width);
    let h = desired_h.min(area.height);

    let (x, width) = match layout.horizontal_alignment {
        HorizontalAlignment::Stretch => (area.x, area.width),
        HorizontalAlignment::Left => (area.x, w),
        HorizontalAlignment::Center => (area.x + (area.width - w) / 2.0, w),
        HorizontalAlignment::Right => (area.x + area.width - w, w),
    };
    let (y, height) = match layout.vertical_alignment {
        VerticalAlignment::Stretch => (area.y, area.height),
        VerticalAlignment::Top => (area.y, h),
        VerticalAlignment::Center => (area.y + (area.height - h) / 2.0, h),
        VerticalAlignment::Bottom => (area.y + area.height - h, h),
    };

    Ok(Bounds {
        x,
        y,
        width,
        height,
    })
}
