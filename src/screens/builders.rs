//! Construction of the three fixed screens
//!
//! Everything here runs once, from `ScreenManager::start`. Sprite lookups go
//! through the atlas and fail loudly; nothing is validated beyond that.

use super::{ButtonHandle, ButtonName, Screen, ScreenMode};
use crate::text::BitmapFont;
use crate::ui::{
    ButtonImages, CanvasPlacement, ElementId, HorizontalAlignment, LayoutProps, SpriteAtlas,
    Thickness, UiElement, UiError, UiTree, Vec2, VerticalAlignment,
};
use sdl2::pixels::Color;

const LABEL_COLOR: Color = Color::RGB(0, 0, 0);

const START_PADDING: Thickness = Thickness::new(77.0, 30.0, 25.0, 30.0);
const MENU_PADDING: Thickness = Thickness::new(77.0, 30.0, 25.0, 30.0);
const RETRY_PADDING: Thickness = Thickness::new(74.0, 30.0, 25.0, 30.0);
const SCORE_PADDING: Thickness = Thickness::new(60.0, 31.0, 25.0, 35.0);

const START_MIN_WIDTH: f32 = 250.0;
const GAME_OVER_BUTTON_MIN_WIDTH: f32 = 190.0;
/// Wide enough that the panel doesn't jitter as the score gains digits
const SCORE_MIN_WIDTH: f32 = 190.0;

/// Everything `start` produces
pub(super) struct BuiltScreens {
    pub main_menu: Screen,
    pub play: Screen,
    pub game_over: Screen,
    pub start: ButtonHandle,
    pub menu: ButtonHandle,
    pub retry: ButtonHandle,
    pub score_text: ElementId,
}

pub(super) fn build_screens(
    tree: &mut UiTree,
    font: BitmapFont,
    atlas: &SpriteAtlas,
) -> Result<BuiltScreens, UiError> {
    // Shared by all three buttons, no distinct press/hover art
    let button_images = ButtonImages::uniform(atlas.sprite("button")?);

    let (main_menu, start) = build_main_menu(tree, font, atlas, &button_images)?;
    let (play, score_text) = build_play(tree, font, atlas)?;
    let (game_over, menu, retry) = build_game_over(tree, font, &button_images)?;

    Ok(BuiltScreens {
        main_menu,
        play,
        game_over,
        start,
        menu,
        retry,
        score_text,
    })
}

fn build_main_menu(
    tree: &mut UiTree,
    font: BitmapFont,
    atlas: &SpriteAtlas,
    button_images: &ButtonImages,
) -> Result<(Screen, ButtonHandle), UiError> {
    let mut logo_layout = pinned_at(0.5, 0.3);
    logo_layout.canvas.relative_size = Some(Vec2::new(0.75, 0.5));
    let logo = tree.add_with_layout(UiElement::image(atlas.sprite("xk_logo")?), logo_layout);

    let start = labelled_button(
        tree,
        font,
        button_images,
        ButtonName::Start,
        START_PADDING,
        START_MIN_WIDTH,
        pinned_at(0.5, 0.7),
    )?;

    let canvas = tree.add(UiElement::canvas());
    tree.attach(canvas, logo)?;
    tree.attach(canvas, start.id())?;

    let root = modal_over(tree, canvas, "MainMenuRoot")?;
    Ok((Screen::new(ScreenMode::MainMenu, root), start))
}

fn build_play(
    tree: &mut UiTree,
    font: BitmapFont,
    atlas: &SpriteAtlas,
) -> Result<(Screen, ElementId), UiError> {
    let score_text = tree.add_with_layout(
        UiElement::text(font, "", LABEL_COLOR),
        LayoutProps {
            vertical_alignment: VerticalAlignment::Center,
            ..Default::default()
        },
    );
    tree.set_name(score_text, "ScoreText")?;

    let mut board_layout = pinned_at(0.2, 0.05);
    board_layout.minimum_width = SCORE_MIN_WIDTH;
    let score_board = tree.add_with_layout(
        UiElement::decorator(atlas.sprite("score_bg")?, SCORE_PADDING),
        board_layout,
    );
    tree.attach(score_board, score_text)?;

    let root = tree.add(UiElement::canvas());
    tree.set_name(root, "GameRoot")?;
    tree.attach(root, score_board)?;

    Ok((Screen::new(ScreenMode::Play, root), score_text))
}

fn build_game_over(
    tree: &mut UiTree,
    font: BitmapFont,
    button_images: &ButtonImages,
) -> Result<(Screen, ButtonHandle, ButtonHandle), UiError> {
    let menu = labelled_button(
        tree,
        font,
        button_images,
        ButtonName::Menu,
        MENU_PADDING,
        GAME_OVER_BUTTON_MIN_WIDTH,
        pinned_at(0.7, 0.7),
    )?;
    let retry = labelled_button(
        tree,
        font,
        button_images,
        ButtonName::Retry,
        RETRY_PADDING,
        GAME_OVER_BUTTON_MIN_WIDTH,
        pinned_at(0.3, 0.7),
    )?;

    let canvas = tree.add(UiElement::canvas());
    tree.attach(canvas, menu.id())?;
    tree.attach(canvas, retry.id())?;

    let root = modal_over(tree, canvas, "GameOverRoot")?;
    Ok((Screen::new(ScreenMode::GameOver, root), menu, retry))
}

/// Canvas placement centered on (x, y) of the container
fn pinned_at(x: f32, y: f32) -> LayoutProps {
    LayoutProps {
        canvas: CanvasPlacement {
            pin_origin: Vec2::CENTER,
            relative_position: Vec2::new(x, y),
            relative_size: None,
        },
        ..Default::default()
    }
}

fn labelled_button(
    tree: &mut UiTree,
    font: BitmapFont,
    images: &ButtonImages,
    name: ButtonName,
    padding: Thickness,
    minimum_width: f32,
    mut layout: LayoutProps,
) -> Result<ButtonHandle, UiError> {
    layout.minimum_width = minimum_width;
    let button = tree.add_with_layout(UiElement::button(images.clone(), padding), layout);
    tree.set_name(button, name.element_name())?;

    let label = tree.add_with_layout(
        UiElement::text(font, name.label(), LABEL_COLOR),
        LayoutProps {
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            ..Default::default()
        },
    );
    tree.attach(button, label)?;

    Ok(ButtonHandle::new(button, name))
}

/// Full-screen modal overlay wrapping `content`
fn modal_over(tree: &mut UiTree, content: ElementId, name: &str) -> Result<ElementId, UiError> {
    let modal = tree.add(UiElement::modal());
    tree.set_name(modal, name)?;
    tree.attach(modal, content)?;
    Ok(modal)
}
