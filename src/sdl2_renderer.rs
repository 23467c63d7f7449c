//! A preview window based on [SDL2](sdl2).

use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::anyhow;
use log::debug;
use sdl2::{
    event::Event,
    keyboard::Keycode,
    pixels::{Color, PixelFormatEnum},
    rect::Rect,
    render::Canvas,
    video::Window,
    EventPump,
};

use crate::core::{
    render::{border_rgb, render_rgb24, Frame},
    DisplayFile,
};

const TARGET_FPS: f32 = 50.0;
const TARGET_MS_PER_FRAME: Duration = Duration::from_millis((1000.0 / TARGET_FPS) as u64);

/// Frames between FLASH phase changes.
const FLASH_FRAMES: u32 = 16;

/// Border width around the 256x192 screen, in Spectrum pixels.
const BORDER_SIZE: u32 = 32;

/// Show `screen` in an SDL2 window until it is closed or Escape is pressed.
pub fn launch_preview(screen: &DisplayFile, title: &str, display_scale: u32) -> anyhow::Result<()> {
    let display_scale = display_scale.max(1);
    let window_width = Frame::WIDTH + 2 * BORDER_SIZE;
    let window_height = Frame::HEIGHT + 2 * BORDER_SIZE;

    let sdl_context = sdl2::init().map_err(|s| anyhow!("{s}"))?;
    let mut window = sdl_context
        .video()
        .map_err(|x| anyhow!("{x}"))?
        .window(
            title,
            window_width * display_scale,
            window_height * display_scale,
        )
        .position_centered()
        .resizable()
        .build()?;
    window.set_minimum_size(window_width, window_height)?;

    let mut event_pump: EventPump = sdl_context.event_pump().map_err(|x| anyhow!("{x}"))?;

    let mut canvas: Canvas<Window> = window.into_canvas().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        PixelFormatEnum::RGB24,
        Frame::WIDTH,
        Frame::HEIGHT,
    )?;

    let border = border_rgb(screen.border());
    let border = Color::RGB(border.red, border.green, border.blue);

    let frames = [render_rgb24(screen, false), render_rgb24(screen, true)];
    let mut frame_count: u32 = 0;

    'running: loop {
        let start = Instant::now();

        for event in event_pump.poll_iter() {
            if let Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } = event
            {
                break 'running;
            }
        }

        let flash_phase = (frame_count / FLASH_FRAMES) % 2 == 1;
        let frame = &frames[usize::from(flash_phase)];

        canvas.set_draw_color(border);
        canvas.clear();
        texture.update(None, frame.as_bytes(), Frame::WIDTH as usize * 3)?;
        canvas
            .copy(&texture, None, screen_rect(&canvas.viewport()))
            .map_err(|s| anyhow!("{s}"))?;
        canvas.present();

        frame_count = frame_count.wrapping_add(1);

        thread::sleep((start + TARGET_MS_PER_FRAME).saturating_duration_since(Instant::now()));
        debug!(
            "frame took {} ms",
            Instant::now().saturating_duration_since(start).as_millis()
        );
    }

    Ok(())
}

/// The screen area inside the border, scaled to fit the viewport with the
/// Spectrum's aspect ratio.
fn screen_rect(viewport: &Rect) -> Rect {
    let total_width = Frame::WIDTH + 2 * BORDER_SIZE;
    let total_height = Frame::HEIGHT + 2 * BORDER_SIZE;
    let scale = (viewport.width() as f32 / total_width as f32)
        .min(viewport.height() as f32 / total_height as f32);

    let width = (Frame::WIDTH as f32 * scale) as u32;
    let height = (Frame::HEIGHT as f32 * scale) as u32;

    Rect::new(
        ((viewport.width() - width) / 2) as i32,
        ((viewport.height() - height) / 2) as i32,
        width,
        height,
    )
}
