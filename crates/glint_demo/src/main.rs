//! Interactive demo: a panel of colored cells that reacts to clicks,
//! keyboard input, typed text, and the scroll wheel. Run with
//! `RUST_LOG=debug` to watch the event stream.

use glint_core::component::{FrameState, GuiComponent, InitContext};
use glint_core::keycode::{KeyCode, MouseButton};
use glint_core::render::{GuiRenderer, TextureHandle};
use glint_platform::WindowConfig;
use glint_window::GuiWindow;

const GRID_COLS: u32 = 4;
const GRID_ROWS: u32 = 3;

/// A 4x3 grid of cells. Left-clicking a cell cycles its color, scrolling
/// shifts the palette, typed characters append to a title strip rendered as
/// a row of tinted quads.
struct DemoRoot {
    cells: Vec<u8>,
    palette_shift: f32,
    typed: String,
    hovered: Option<(u32, u32)>,
    checker: Option<TextureHandle>,
}

impl DemoRoot {
    fn new() -> Self {
        Self {
            cells: vec![0; (GRID_COLS * GRID_ROWS) as usize],
            palette_shift: 0.0,
            typed: String::new(),
            hovered: None,
            checker: None,
        }
    }

    fn cell_color(&self, step: u8) -> [f32; 4] {
        let base = [
            [0.8, 0.2, 0.2, 1.0],
            [0.2, 0.8, 0.2, 1.0],
            [0.2, 0.3, 0.9, 1.0],
            [0.9, 0.8, 0.1, 1.0],
        ][(step % 4) as usize];
        let shift = self.palette_shift.clamp(-0.5, 0.5);
        [
            (base[0] + shift).clamp(0.0, 1.0),
            (base[1] + shift).clamp(0.0, 1.0),
            (base[2] + shift).clamp(0.0, 1.0),
            1.0,
        ]
    }

    /// Map a normalized position to a grid cell, None outside the grid area.
    fn cell_at(x: f32, y: f32) -> Option<(u32, u32)> {
        // The grid occupies [0.05, 0.95] x [0.2, 0.9].
        if !(0.05..0.95).contains(&x) || !(0.2..0.9).contains(&y) {
            return None;
        }
        let col = ((x - 0.05) / 0.9 * GRID_COLS as f32) as u32;
        let row = ((y - 0.2) / 0.7 * GRID_ROWS as f32) as u32;
        Some((col.min(GRID_COLS - 1), row.min(GRID_ROWS - 1)))
    }
}

impl GuiComponent for DemoRoot {
    fn init(&mut self, ctx: &mut InitContext<'_>) {
        // An 8x8 light/dark checkerboard generated in place.
        let mut pixels = Vec::with_capacity(8 * 8 * 4);
        for y in 0..8u32 {
            for x in 0..8u32 {
                let light = (x + y) % 2 == 0;
                let v = if light { 220 } else { 60 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        self.checker = ctx.textures.load_rgba(&pixels, 8, 8);
        if self.checker.is_none() {
            log::warn!("Checkerboard texture unavailable, cells render flat");
        }
    }

    fn update(&mut self, state: &FrameState) {
        self.hovered = if state.mouse_over() {
            Self::cell_at(state.mouse_x(), state.mouse_y())
        } else {
            None
        };
    }

    fn render(&mut self, renderer: &mut dyn GuiRenderer) {
        // Background panel.
        renderer.fill_rect(0.02, 0.02, 0.98, 0.98, [0.12, 0.12, 0.14, 1.0]);

        let cell_w = 0.9 / GRID_COLS as f32;
        let cell_h = 0.7 / GRID_ROWS as f32;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let index = (row * GRID_COLS + col) as usize;
                let min_x = 0.05 + col as f32 * cell_w + 0.005;
                let min_y = 0.2 + row as f32 * cell_h + 0.005;
                let max_x = min_x + cell_w - 0.01;
                let max_y = min_y + cell_h - 0.01;

                let color = self.cell_color(self.cells[index]);
                match self.checker {
                    Some(texture) => {
                        renderer.draw_texture_tinted(min_x, min_y, max_x, max_y, texture, color)
                    }
                    None => renderer.fill_rect(min_x, min_y, max_x, max_y, color),
                }

                if self.hovered == Some((col, row)) {
                    renderer.fill_rect(min_x, max_y - 0.01, max_x, max_y, [1.0, 1.0, 1.0, 0.9]);
                }
            }
        }

        // Title strip: one quad per typed character, brightness from the
        // character value. Stands in for text until a font layer exists.
        let max_chars = 40usize;
        for (i, c) in self.typed.chars().rev().take(max_chars).enumerate() {
            let x = 0.95 - (i + 1) as f32 * 0.02;
            let v = 0.3 + (c as u32 % 64) as f32 / 96.0;
            renderer.fill_rect(x, 0.08, x + 0.015, 0.14, [v, v, 0.9, 1.0]);
        }
    }

    fn click(&mut self, x: f32, y: f32, button: MouseButton) {
        log::debug!("Click {button:?} at ({x:.3}, {y:.3})");
        if let Some((col, row)) = Self::cell_at(x, y) {
            let index = (row * GRID_COLS + col) as usize;
            match button {
                MouseButton::Left => self.cells[index] = self.cells[index].wrapping_add(1),
                MouseButton::Right => self.cells[index] = 0,
                MouseButton::Middle => {}
            }
        }
    }

    fn scroll(&mut self, amount: f32) {
        self.palette_shift += amount;
        log::debug!("Scroll {amount:+.3}, palette shift {:.3}", self.palette_shift);
    }

    fn key_pressed(&mut self, key: KeyCode) {
        log::debug!("Key pressed: {key:?}");
        if key == KeyCode::Backspace {
            self.typed.pop();
        }
        if key == KeyCode::Escape {
            self.typed.clear();
            self.palette_shift = 0.0;
        }
    }

    fn char_typed(&mut self, c: char) {
        self.typed.push(c);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WindowConfig {
        title: "glint demo".to_string(),
        width: 960,
        height: 720,
        ..WindowConfig::default()
    };

    let window = GuiWindow::with_config(Box::new(DemoRoot::new()), config);
    if let Err(err) = window.run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_maps_grid_interior() {
        assert_eq!(DemoRoot::cell_at(0.06, 0.21), Some((0, 0)));
        assert_eq!(DemoRoot::cell_at(0.94, 0.89), Some((3, 2)));
    }

    #[test]
    fn cell_at_rejects_margins() {
        assert_eq!(DemoRoot::cell_at(0.01, 0.5), None);
        assert_eq!(DemoRoot::cell_at(0.5, 0.1), None);
    }

    #[test]
    fn cell_at_rejects_nan() {
        assert_eq!(DemoRoot::cell_at(f32::NAN, f32::NAN), None);
    }

    #[test]
    fn left_click_cycles_and_right_click_resets() {
        let mut root = DemoRoot::new();
        root.click(0.06, 0.21, MouseButton::Left);
        root.click(0.06, 0.21, MouseButton::Left);
        assert_eq!(root.cells[0], 2);
        root.click(0.06, 0.21, MouseButton::Right);
        assert_eq!(root.cells[0], 0);
    }
}
