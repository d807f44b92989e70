//! Input state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` returns true every frame the
//!   key is physically down.
//!
//! - **Edge-triggered (just_pressed / just_released):** true only during the
//!   frame the transition happened; cleared by `end_frame()`, which the
//!   window loop calls after the component has seen the frame.
//!
//! Cursor motion is accumulated into `mouse_delta` between frames and cleared
//! alongside the edge-triggered sets, so a component reading the delta during
//! `update` sees the total motion since its previous update.

use std::collections::HashSet;

use crate::keycode::{KeyCode, MouseButton};

pub struct InputState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    just_released: HashSet<KeyCode>,

    mouse_held: HashSet<MouseButton>,
    mouse_just_pressed: HashSet<MouseButton>,
    mouse_just_released: HashSet<MouseButton>,

    /// Cursor position in physical pixels, top-left origin (as the native
    /// layer reports it). Normalization and the GL-style flip happen in the
    /// frame snapshot, not here.
    pub mouse_position: (f64, f64),
    /// Accumulated cursor motion since the last `end_frame`, physical pixels.
    pub mouse_delta: (f64, f64),
    /// Whether the cursor is currently inside the window.
    pub mouse_inside: bool,
    /// False until the first position report; the first report establishes
    /// the position without contributing to the delta.
    has_position: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            mouse_held: HashSet::new(),
            mouse_just_pressed: HashSet::new(),
            mouse_just_released: HashSet::new(),
            mouse_position: (0.0, 0.0),
            mouse_delta: (0.0, 0.0),
            mouse_inside: false,
            has_position: false,
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        if self.held.remove(&key) {
            self.just_released.insert(key);
        }
    }

    pub fn mouse_down(&mut self, btn: MouseButton) {
        if self.mouse_held.insert(btn) {
            self.mouse_just_pressed.insert(btn);
        }
    }

    pub fn mouse_up(&mut self, btn: MouseButton) {
        if self.mouse_held.remove(&btn) {
            self.mouse_just_released.insert(btn);
        }
    }

    /// Record cursor movement to `position`, folding the distance travelled
    /// into the per-frame delta. The very first report after startup only
    /// establishes the position: the cursor did not travel there from the
    /// default `(0, 0)`, it was already there.
    pub fn move_cursor(&mut self, position: (f64, f64)) {
        if self.has_position {
            self.mouse_delta.0 += position.0 - self.mouse_position.0;
            self.mouse_delta.1 += position.1 - self.mouse_position.1;
        }
        self.has_position = true;
        self.mouse_position = position;
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_just_released(&self, key: KeyCode) -> bool {
        self.just_released.contains(&key)
    }

    pub fn is_mouse_held(&self, btn: MouseButton) -> bool {
        self.mouse_held.contains(&btn)
    }

    pub fn is_mouse_just_pressed(&self, btn: MouseButton) -> bool {
        self.mouse_just_pressed.contains(&btn)
    }

    pub fn is_mouse_just_released(&self, btn: MouseButton) -> bool {
        self.mouse_just_released.contains(&btn)
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_just_pressed.clear();
        self.mouse_just_released.clear();
        self.mouse_delta = (0.0, 0.0);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        assert!(input.is_held(KeyCode::A));
        assert!(input.is_just_pressed(KeyCode::A));
    }

    #[test]
    fn test_key_up_clears_held_sets_just_released() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        input.key_up(KeyCode::A);
        assert!(!input.is_held(KeyCode::A));
        assert!(input.is_just_released(KeyCode::A));
    }

    #[test]
    fn test_key_down_repeat_does_not_double_just_pressed() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        assert!(input.is_just_pressed(KeyCode::A));
        // Second key_down for the same key should not alter state since
        // the key is already in held (HashSet::insert returns false).
        input.key_down(KeyCode::A);
        assert!(input.is_held(KeyCode::A));
        assert!(input.is_just_pressed(KeyCode::A));
    }

    #[test]
    fn test_key_up_without_down_is_no_op() {
        let mut input = InputState::new();
        // key_up without a prior key_down: held.remove returns false,
        // so just_released should NOT be set.
        input.key_up(KeyCode::A);
        assert!(!input.is_just_released(KeyCode::A));
        assert!(!input.is_held(KeyCode::A));
    }

    #[test]
    fn test_end_frame_clears_transient_state() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        input.key_down(KeyCode::Space);
        input.end_frame();
        // Transient just_pressed should be cleared.
        assert!(!input.is_just_pressed(KeyCode::A));
        assert!(!input.is_just_pressed(KeyCode::Space));
        // Held state should persist across frames.
        assert!(input.is_held(KeyCode::A));
        assert!(input.is_held(KeyCode::Space));
    }

    #[test]
    fn test_end_frame_clears_just_released() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        input.key_up(KeyCode::A);
        assert!(input.is_just_released(KeyCode::A));
        input.end_frame();
        assert!(!input.is_just_released(KeyCode::A));
    }

    #[test]
    fn test_mouse_down_sets_held_and_just_pressed() {
        let mut input = InputState::new();
        input.mouse_down(MouseButton::Left);
        assert!(input.is_mouse_held(MouseButton::Left));
        assert!(input.is_mouse_just_pressed(MouseButton::Left));
    }

    #[test]
    fn test_mouse_up_sets_just_released() {
        let mut input = InputState::new();
        input.mouse_down(MouseButton::Left);
        input.mouse_up(MouseButton::Left);
        assert!(input.is_mouse_just_released(MouseButton::Left));
        assert!(!input.is_mouse_held(MouseButton::Left));
    }

    #[test]
    fn test_mouse_end_frame_clears_transients() {
        let mut input = InputState::new();
        input.mouse_down(MouseButton::Left);
        input.end_frame();
        assert!(!input.is_mouse_just_pressed(MouseButton::Left));

        input.mouse_up(MouseButton::Left);
        assert!(input.is_mouse_just_released(MouseButton::Left));
        input.end_frame();
        assert!(!input.is_mouse_just_released(MouseButton::Left));
    }

    #[test]
    fn test_first_cursor_report_contributes_no_delta() {
        let mut input = InputState::new();
        // The cursor was already at this position when the window opened;
        // reporting it must not look like motion from (0, 0).
        input.move_cursor((790.0, 10.0));
        assert_eq!(input.mouse_delta, (0.0, 0.0));
        assert!((input.mouse_position.0 - 790.0).abs() < f64::EPSILON);
        assert!((input.mouse_position.1 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cursor_motion_accumulates_delta() {
        let mut input = InputState::new();
        input.move_cursor((10.0, 20.0));
        input.move_cursor((15.0, 18.0));
        assert!((input.mouse_delta.0 - 5.0).abs() < f64::EPSILON);
        assert!((input.mouse_delta.1 + 2.0).abs() < f64::EPSILON);
        assert!((input.mouse_position.0 - 15.0).abs() < f64::EPSILON);
        assert!((input.mouse_position.1 - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_end_frame_clears_delta_keeps_position() {
        let mut input = InputState::new();
        input.move_cursor((100.0, 200.0));
        input.end_frame();
        assert_eq!(input.mouse_delta, (0.0, 0.0));
        assert!((input.mouse_position.0 - 100.0).abs() < f64::EPSILON);
        assert!((input.mouse_position.1 - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_multiple_keys_independent() {
        let mut input = InputState::new();
        input.key_down(KeyCode::A);
        input.key_down(KeyCode::D);
        assert!(input.is_held(KeyCode::A));
        assert!(input.is_held(KeyCode::D));

        input.key_up(KeyCode::A);
        assert!(!input.is_held(KeyCode::A));
        assert!(input.is_just_released(KeyCode::A));
        // D should remain held and unaffected.
        assert!(input.is_held(KeyCode::D));
        assert!(!input.is_just_released(KeyCode::D));
    }

    #[test]
    fn test_default_state_is_empty() {
        let input = InputState::new();
        assert!(!input.is_held(KeyCode::A));
        assert!(!input.is_just_pressed(KeyCode::A));
        assert!(!input.is_just_released(KeyCode::A));
        assert!(!input.is_mouse_held(MouseButton::Left));
        assert!(!input.is_mouse_just_pressed(MouseButton::Left));
        assert!(!input.is_mouse_just_released(MouseButton::Left));
        assert!(!input.mouse_inside);
        assert_eq!(input.mouse_position, (0.0, 0.0));
        assert_eq!(input.mouse_delta, (0.0, 0.0));
    }
}
