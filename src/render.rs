/// UI rendering
///
/// Draws the active screen from a computed [`Layout`]: every element in
/// draw order (parents before children), sprites copied out of the shared
/// atlas texture, text drawn with the bitmap font.
///
/// # Usage Example
///
/// ```rust
/// let renderer = UiRenderer::new(&atlas_texture);
/// if let Some(layout) = ui.layout()? {
///     renderer.render(&mut canvas, ui.screens().tree(), &layout, ui.pointer())?;
/// }
/// ```
use crate::ui::{ButtonVisual, Layout, PointerTracker, SpriteRef, UiElement, UiTree};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub struct UiRenderer<'a> {
    atlas_texture: &'a Texture<'a>,
}

impl<'a> UiRenderer<'a> {
    pub fn new(atlas_texture: &'a Texture<'a>) -> Self {
        UiRenderer { atlas_texture }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        tree: &UiTree,
        layout: &Layout,
        pointer: &PointerTracker,
    ) -> Result<(), String> {
        for &id in layout.draw_order() {
            let Some(rect) = layout.rect(id) else {
                continue;
            };

            match tree.element(id)? {
                UiElement::Image(image) => self.blit(canvas, &image.source, rect)?,
                UiElement::Button(button) => {
                    let sprite = match pointer.visual(id) {
                        ButtonVisual::NotPressed => &button.images.not_pressed,
                        ButtonVisual::Pressed => &button.images.pressed,
                        ButtonVisual::MouseOver => &button.images.mouse_over,
                    };
                    self.blit(canvas, sprite, rect)?;
                }
                UiElement::Decorator(decorator) => self.blit(canvas, &decorator.background, rect)?,
                UiElement::Text(text) => {
                    text.font.draw(canvas, &text.text, rect.x(), rect.y(), text.color)?;
                }
                // Containers have no visuals of their own
                UiElement::Canvas(_) | UiElement::Modal(_) => {}
            }
        }

        Ok(())
    }

    fn blit(&self, canvas: &mut Canvas<Window>, sprite: &SpriteRef, dest: Rect) -> Result<(), String> {
        canvas.copy(self.atlas_texture, sprite.region().to_rect(), dest)
    }
}
