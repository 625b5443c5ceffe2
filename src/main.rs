use clap::Parser;
use sdl2::image::{InitFlag, LoadTexture};
use sdl2::pixels::Color;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod config;
mod game;
mod input_system;
mod render;
mod screens;
mod text;
mod ui;

use config::GameConfig;
use game::{Flow, Session, UiManager};
use input_system::InputSystem;
use render::UiRenderer;
use text::BitmapFont;
use ui::SpriteAtlas;

/// Jumpy Jet
#[derive(Parser, Debug)]
#[command(name = "jumpy-jet", version, about)]
struct Cli {
    /// Config file (defaults to the user config dir, then built-in values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window scale, overrides monitor detection
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=4))]
    scale: Option<u32>,
}

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &GameConfig) -> u32 {
    let max_scale = config.window.max_scale.max(1);
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as u32;
            let usable_h = (display_mode.h as f32 * 0.9) as u32;

            let max_scale_w = usable_w / config.window.logical_width.max(1);
            let max_scale_h = usable_h / config.window.logical_height.max(1);

            // Use smaller scale to ensure both dimensions fit
            max_scale_w.min(max_scale_h).clamp(1, max_scale)
        }
        Err(e) => {
            tracing::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

/// Window size for a logical size at an integer scale
fn window_size(logical_size: (u32, u32), scale: u32) -> Result<(u32, u32), String> {
    match (logical_size.0.checked_mul(scale), logical_size.1.checked_mul(scale)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(format!(
            "Window size {}x{} at scale {} is too large",
            logical_size.0, logical_size.1, scale
        )),
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;
    let logical_size = (config.window.logical_width, config.window.logical_height);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;

    let window_scale = cli
        .scale
        .unwrap_or_else(|| calculate_window_scale(&video_subsystem, &config));
    let (window_width, window_height) = window_size(logical_size, window_scale)?;
    tracing::info!(
        "Window {}x{} (scale {}x), logical {}x{}",
        window_width,
        window_height,
        window_scale,
        logical_size.0,
        logical_size.1
    );

    let window = video_subsystem
        .window(&config.window.title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Lay out and hit-test in logical pixels regardless of window size
    canvas
        .set_logical_size(logical_size.0, logical_size.1)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let atlas = SpriteAtlas::load_from_file(&config.ui.atlas)?;
    let atlas_texture = texture_creator
        .load_texture(atlas.texture_path())
        .map_err(|e| format!("Failed to load {}: {}", atlas.texture_path().display(), e))?;
    tracing::info!(
        "Loaded atlas {} ({} sprites)",
        config.ui.atlas.display(),
        atlas.len()
    );

    let mut ui = UiManager::new(logical_size);
    ui.start(BitmapFont::new(config.ui.font_scale), &atlas)?;
    let mut session = Session::new(ui);
    session.begin()?;

    let renderer = UiRenderer::new(&atlas_texture);
    let mut input = InputSystem::new(logical_size);
    let [r, g, b] = config.ui.clear_color;
    let clear_color = Color::RGB(r, g, b);
    let frame_duration = config.frame_duration();

    'running: loop {
        let frame_start = Instant::now();

        if session.dispatch(&mut input, event_pump.poll_iter())? == Flow::Quit {
            break 'running;
        }

        canvas.set_draw_color(clear_color);
        canvas.clear();
        if let Some(layout) = session.ui().layout()? {
            renderer.render(
                &mut canvas,
                session.ui().screens().tree(),
                &layout,
                session.ui().pointer(),
            )?;
        }
        canvas.present();

        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    tracing::info!("Shutting down (last score {})", session.score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size_scales_logical_size() {
        assert_eq!(window_size((540, 960), 2), Ok((1080, 1920)));
        assert_eq!(window_size((540, 960), 1), Ok((540, 960)));
    }

    #[test]
    fn test_window_size_overflow_is_an_error() {
        assert!(window_size((u32::MAX / 2 + 1, 960), 2).is_err());
        assert!(window_size((540, u32::MAX), 4).is_err());
    }
}
