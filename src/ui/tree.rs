//! Element arena
//!
//! Every element of every screen lives in one [`UiTree`] and is addressed by a
//! copyable [`ElementId`]. A tree root is just an element without a parent.
//! Holding an id is a non-owning reference: the tree owns the element, and
//! the id stays valid for the tree's lifetime.

use super::element::{Button, ContentDecorator, LayoutProps, ModalElement, UiElement};
use super::error::UiError;

/// Handle to an element inside a [`UiTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// One element plus its tree bookkeeping
#[derive(Debug, Clone)]
pub struct UiNode {
    element: UiElement,
    layout: LayoutProps,
    name: Option<String>,
    parent: Option<ElementId>,
}

impl UiNode {
    pub fn element(&self) -> &UiElement {
        &self.element
    }

    pub fn layout(&self) -> &LayoutProps {
        &self.layout
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// Arena owning all UI elements
#[derive(Debug, Default)]
pub struct UiTree {
    nodes: Vec<UiNode>,
}

impl UiTree {
    pub fn new() -> Self {
        UiTree { nodes: Vec::new() }
    }

    /// Adds a detached element with default layout
    pub fn add(&mut self, element: UiElement) -> ElementId {
        self.add_with_layout(element, LayoutProps::default())
    }

    /// Adds a detached element with the given layout
    pub fn add_with_layout(&mut self, element: UiElement, layout: LayoutProps) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(UiNode {
            element,
            layout,
            name: None,
            parent: None,
        });
        id
    }

    /// Number of elements ever added
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[allow(dead_code)] // Pairs with len()
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Result<&UiNode, UiError> {
        self.nodes.get(id.0).ok_or(UiError::UnknownElement(id))
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut UiNode, UiError> {
        self.nodes.get_mut(id.0).ok_or(UiError::UnknownElement(id))
    }

    pub fn element(&self, id: ElementId) -> Result<&UiElement, UiError> {
        self.get(id).map(|node| &node.element)
    }

    /// Gives an element a debug name (e.g. "StartButton")
    pub fn set_name(&mut self, id: ElementId, name: &str) -> Result<(), UiError> {
        self.get_mut(id)?.name = Some(name.to_string());
        Ok(())
    }

    /// Makes `child` a child of `parent`
    ///
    /// Canvases append the child. Buttons, decorators and modals hold a single
    /// content element; attaching replaces (and detaches) the previous one.
    pub fn attach(&mut self, parent: ElementId, child: ElementId) -> Result<(), UiError> {
        self.get(parent)?;
        if self.get(child)?.parent.is_some() {
            return Err(UiError::AlreadyAttached(child));
        }
        if parent == child || self.contains(child, parent) {
            return Err(UiError::CycleDetected(child));
        }

        let replaced = match &mut self.get_mut(parent)?.element {
            UiElement::Canvas(canvas) => {
                canvas.children.push(child);
                None
            }
            UiElement::Button(button) => button.content.replace(child),
            UiElement::Decorator(decorator) => decorator.content.replace(child),
            UiElement::Modal(modal) => modal.content.replace(child),
            UiElement::Image(_) | UiElement::Text(_) => {
                return Err(UiError::NotAContainer(parent));
            }
        };

        if let Some(old) = replaced {
            self.get_mut(old)?.parent = None;
        }
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Direct children in draw order
    pub fn children(&self, id: ElementId) -> Result<Vec<ElementId>, UiError> {
        Ok(self.get(id)?.element.children())
    }

    /// Whether `id` is `root` or lies somewhere below it
    pub fn contains(&self, root: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == root {
                return true;
            }
            current = self.get(node_id).ok().and_then(|node| node.parent);
        }
        false
    }

    pub fn text(&self, id: ElementId) -> Result<&str, UiError> {
        match &self.get(id)?.element {
            UiElement::Text(block) => Ok(&block.text),
            _ => Err(UiError::NotText(id)),
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) -> Result<(), UiError> {
        match &mut self.get_mut(id)?.element {
            UiElement::Text(block) => {
                block.text.clear();
                block.text.push_str(text);
                Ok(())
            }
            _ => Err(UiError::NotText(id)),
        }
    }

    /// Drops every element added at or after `len`
    ///
    /// Links from surviving elements to dropped ones are cleared.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.nodes.len() {
            return;
        }
        self.nodes.truncate(len);
        let dropped = |id: &ElementId| id.0 >= len;

        for node in &mut self.nodes {
            if node.parent.as_ref().is_some_and(dropped) {
                node.parent = None;
            }
            match &mut node.element {
                UiElement::Canvas(canvas) => canvas.children.retain(|id| !dropped(id)),
                UiElement::Button(Button { content, .. })
                | UiElement::Decorator(ContentDecorator { content, .. })
                | UiElement::Modal(ModalElement { content }) => {
                    if content.as_ref().is_some_and(dropped) {
                        *content = None;
                    }
                }
                UiElement::Image(_) | UiElement::Text(_) => {}
            }
        }
    }
}

/// Lookups used to inspect built screens in tests
#[cfg(test)]
impl UiTree {
    /// `root` and everything below it, parents before children
    pub fn descendants(&self, root: ElementId) -> Result<Vec<ElementId>, UiError> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let children = self.children(id)?;
            out.push(id);
            stack.extend(children.into_iter().rev());
        }
        Ok(out)
    }

    /// First text element under `root` whose text equals `label`
    pub fn find_text(&self, root: ElementId, label: &str) -> Option<ElementId> {
        self.descendants(root)
            .ok()?
            .into_iter()
            .find(|&id| self.text(id).is_ok_and(|text| text == label))
    }

    /// Button under `root` whose label text equals `label`
    pub fn find_button(&self, root: ElementId, label: &str) -> Option<ElementId> {
        let text = self.find_text(root, label)?;
        let parent = self.get(text).ok()?.parent?;
        self.get(parent)
            .ok()
            .filter(|node| node.element.is_button())
            .map(|_| parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BitmapFont;
    use crate::ui::atlas::{SpriteAtlas, SpriteRegion};
    use crate::ui::element::{ButtonImages, Thickness};
    use sdl2::pixels::Color;

    fn button_sprite() -> crate::ui::atlas::SpriteRef {
        SpriteAtlas::new("ui.png")
            .with_sprite("button", SpriteRegion::new(0, 0, 64, 32))
            .sprite("button")
            .unwrap()
    }

    fn labelled_button(tree: &mut UiTree, label: &str) -> (ElementId, ElementId) {
        let button = tree.add(UiElement::button(
            ButtonImages::uniform(button_sprite()),
            Thickness::default(),
        ));
        let text = tree.add(UiElement::text(BitmapFont::new(1), label, Color::RGB(0, 0, 0)));
        tree.attach(button, text).unwrap();
        (button, text)
    }

    #[test]
    fn test_attach_builds_parent_links() {
        let mut tree = UiTree::new();
        let canvas = tree.add(UiElement::canvas());
        let (button, text) = labelled_button(&mut tree, "Menu");
        tree.attach(canvas, button).unwrap();

        assert_eq!(tree.get(button).unwrap().parent(), Some(canvas));
        assert_eq!(tree.children(canvas).unwrap(), vec![button]);
        assert_eq!(tree.descendants(canvas).unwrap(), vec![canvas, button, text]);
    }

    #[test]
    fn test_element_can_only_have_one_parent() {
        let mut tree = UiTree::new();
        let first = tree.add(UiElement::canvas());
        let second = tree.add(UiElement::canvas());
        let (button, _) = labelled_button(&mut tree, "Retry");

        tree.attach(first, button).unwrap();
        assert!(matches!(
            tree.attach(second, button),
            Err(UiError::AlreadyAttached(id)) if id == button
        ));
    }

    #[test]
    fn test_leaf_cannot_hold_children() {
        let mut tree = UiTree::new();
        let (_, text) = labelled_button(&mut tree, "Retry");
        let orphan = tree.add(UiElement::canvas());
        assert!(matches!(tree.attach(text, orphan), Err(UiError::NotAContainer(_))));
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let mut tree = UiTree::new();
        let outer = tree.add(UiElement::modal());
        let inner = tree.add(UiElement::canvas());
        tree.attach(outer, inner).unwrap();
        assert!(matches!(tree.attach(inner, inner), Err(UiError::CycleDetected(_))));
    }

    #[test]
    fn test_replacing_content_detaches_old_child() {
        let mut tree = UiTree::new();
        let modal = tree.add(UiElement::modal());
        let first = tree.add(UiElement::canvas());
        let second = tree.add(UiElement::canvas());
        tree.attach(modal, first).unwrap();
        tree.attach(modal, second).unwrap();

        assert_eq!(tree.children(modal).unwrap(), vec![second]);
        assert_eq!(tree.get(first).unwrap().parent(), None);
    }

    #[test]
    fn test_contains_follows_ancestry() {
        let mut tree = UiTree::new();
        let a = tree.add(UiElement::canvas());
        let b = tree.add(UiElement::canvas());
        let (button, text) = labelled_button(&mut tree, "Start");
        tree.attach(a, button).unwrap();

        assert!(tree.contains(a, text));
        assert!(!tree.contains(b, text));
        assert!(tree.contains(b, b));
    }

    #[test]
    fn test_text_access() {
        let mut tree = UiTree::new();
        let (button, text) = labelled_button(&mut tree, "Menu");

        assert_eq!(tree.text(text).unwrap(), "Menu");
        tree.set_text(text, "Main menu").unwrap();
        assert_eq!(tree.text(text).unwrap(), "Main menu");
        assert!(matches!(tree.set_text(button, "x"), Err(UiError::NotText(_))));
    }

    #[test]
    fn test_find_button_by_label() {
        let mut tree = UiTree::new();
        let canvas = tree.add(UiElement::canvas());
        let (menu, _) = labelled_button(&mut tree, "Menu");
        let (retry, _) = labelled_button(&mut tree, "Retry");
        tree.attach(canvas, menu).unwrap();
        tree.attach(canvas, retry).unwrap();

        assert_eq!(tree.find_button(canvas, "Retry"), Some(retry));
        assert_eq!(tree.find_button(canvas, "Touch to Start"), None);
        assert_eq!(tree.find_button(canvas, "Menu"), Some(menu));
    }

    #[test]
    fn test_truncate_drops_new_elements_and_their_links() {
        let mut tree = UiTree::new();
        let canvas = tree.add(UiElement::canvas());
        let modal = tree.add(UiElement::modal());
        let mark = tree.len();

        let (button, _) = labelled_button(&mut tree, "Start");
        let inner = tree.add(UiElement::canvas());
        tree.attach(canvas, button).unwrap();
        tree.attach(modal, inner).unwrap();

        tree.truncate(mark);
        assert_eq!(tree.len(), mark);
        assert!(tree.children(canvas).unwrap().is_empty());
        assert!(tree.children(modal).unwrap().is_empty());
        assert!(matches!(tree.get(button), Err(UiError::UnknownElement(_))));

        // Truncating past the end changes nothing
        tree.truncate(10);
        assert_eq!(tree.len(), mark);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let tree = UiTree::new();
        let bogus = ElementId(7);
        assert!(matches!(tree.get(bogus), Err(UiError::UnknownElement(_))));
    }
}
