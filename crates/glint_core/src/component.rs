//! The component callback surface and the per-frame state snapshot.

use crate::keycode::{KeyCode, MouseButton};
use crate::render::{GuiRenderer, TextureLoader};

/// Per-frame view of the window handed to `GuiComponent::update`.
///
/// Mouse coordinates are normalized to `[0, 1]` with a **bottom-left**
/// origin, matching the coordinate space `GuiRenderer` draws in. When the
/// cursor is outside the window both coordinates are NaN, so naive hit
/// tests (`x >= min && x <= max`) fail for free.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    mouse_x: f32,
    mouse_y: f32,
    mouse_dx: f32,
    mouse_dy: f32,
    mouse_over: bool,
    window_size: (u32, u32),
}

impl FrameState {
    pub fn new(
        mouse_x: f32,
        mouse_y: f32,
        mouse_dx: f32,
        mouse_dy: f32,
        mouse_over: bool,
        window_size: (u32, u32),
    ) -> Self {
        Self {
            mouse_x,
            mouse_y,
            mouse_dx,
            mouse_dy,
            mouse_over,
            window_size,
        }
    }

    /// Normalized cursor x, NaN when the cursor is outside the window.
    pub fn mouse_x(&self) -> f32 {
        self.mouse_x
    }

    /// Normalized cursor y (bottom-left origin), NaN when outside.
    pub fn mouse_y(&self) -> f32 {
        self.mouse_y
    }

    /// Normalized cursor motion since the previous update.
    pub fn mouse_dx(&self) -> f32 {
        self.mouse_dx
    }

    pub fn mouse_dy(&self) -> f32 {
        self.mouse_dy
    }

    pub fn mouse_over(&self) -> bool {
        self.mouse_over
    }

    /// Window size in physical pixels.
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }
}

/// One-time setup context handed to `GuiComponent::init` once the GPU
/// surface exists. Components load their textures here.
pub struct InitContext<'a> {
    pub textures: &'a mut dyn TextureLoader,
}

/// The root callback surface the window dispatches into.
///
/// Every method except `render` has a no-op default, so simple components
/// implement only what they react to. All coordinates arriving here are
/// normalized with a bottom-left origin.
pub trait GuiComponent {
    /// Called once, after the window and GPU context exist and before the
    /// first update.
    fn init(&mut self, _ctx: &mut InitContext<'_>) {}

    /// Called every frame before rendering.
    fn update(&mut self, _state: &FrameState) {}

    /// Draw the component. Called only on frames that actually render
    /// (always in continuous mode, after a change otherwise).
    fn render(&mut self, renderer: &mut dyn GuiRenderer);

    /// A mouse button was released at the given normalized position.
    fn click(&mut self, _x: f32, _y: f32, _button: MouseButton) {}

    /// The wheel scrolled; positive amounts scroll up. One wheel detent is
    /// a small fraction of the component (see the window crate's scaling).
    fn scroll(&mut self, _amount: f32) {}

    fn key_pressed(&mut self, _key: KeyCode) {}

    fn key_released(&mut self, _key: KeyCode) {}

    /// A printable character was typed (already passed the character
    /// filter). Distinct from `key_pressed`: this carries layout-applied
    /// text, not physical codes.
    fn char_typed(&mut self, _c: char) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_state_reports_fields() {
        let state = FrameState::new(0.25, 0.75, 0.01, -0.02, true, (800, 600));
        assert_eq!(state.mouse_x(), 0.25);
        assert_eq!(state.mouse_y(), 0.75);
        assert_eq!(state.mouse_dx(), 0.01);
        assert_eq!(state.mouse_dy(), -0.02);
        assert!(state.mouse_over());
        assert_eq!(state.window_size(), (800, 600));
    }

    #[test]
    fn nan_coordinates_fail_hit_tests() {
        let state = FrameState::new(f32::NAN, f32::NAN, 0.0, 0.0, false, (800, 600));
        // Both sides of a range check must be false for NaN.
        assert!(!(state.mouse_x() >= 0.0));
        assert!(!(state.mouse_x() <= 1.0));
        assert!(!state.mouse_over());
    }
}
